use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_engine::{Board, Difficulty, Mark, SessionRng, select_move};

fn bench_expert_empty_board(rng: &mut SessionRng) {
    let board = Board::new();
    let _ = black_box(select_move(&board, Difficulty::Expert, Mark::X, Mark::O, rng));
}

fn bench_expert_mid_game(board: &Board, rng: &mut SessionRng) {
    let _ = black_box(select_move(board, Difficulty::Expert, Mark::O, Mark::X, rng));
}

fn bench_expert_self_play(rng: &mut SessionRng) {
    let mut board = Board::new();
    let mut current_mark = Mark::X;

    while let Ok(index) = select_move(
        &board,
        Difficulty::Expert,
        current_mark,
        current_mark.opponent(),
        rng,
    ) {
        if board.apply(index as isize, current_mark).is_err() {
            break;
        }
        current_mark = current_mark.opponent();
    }
    black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(30));

    let mut rng = SessionRng::new(0);
    let mid_game: Board = "X../.O./..X".parse().unwrap();

    group.bench_function("single_move_empty", |b| {
        b.iter(|| bench_expert_empty_board(&mut rng))
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(|| bench_expert_mid_game(&mid_game, &mut rng))
    });

    group.bench_function("self_play_round", |b| {
        b.iter(|| bench_expert_self_play(&mut rng))
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
