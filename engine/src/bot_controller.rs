use super::board::{Board, CELL_COUNT};
use super::difficulty::Difficulty;
use super::error::SelectionError;
use super::session_rng::SessionRng;
use super::types::Mark;

/// Center, corners, then edges.
pub const PREFERRED_ORDER: [usize; 9] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

const WIN_SCORE: i32 = 10;

pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    computer_mark: Mark,
    opponent_mark: Mark,
    rng: &mut SessionRng,
) -> Result<usize, SelectionError> {
    if computer_mark == opponent_mark {
        return Err(SelectionError::IdenticalMarks { mark: computer_mark });
    }
    if board.is_terminal() {
        return Err(SelectionError::NoLegalMove);
    }

    let available_moves: Vec<usize> = board.empty_cells().collect();

    let selected = match difficulty {
        Difficulty::Easy => calculate_random_move(&available_moves, rng),
        Difficulty::Medium | Difficulty::Hard => {
            calculate_heuristic_move(board, difficulty, computer_mark, opponent_mark, &available_moves, rng)
        }
        Difficulty::Expert => calculate_minimax_move(board, computer_mark, opponent_mark),
    };

    let index = selected.ok_or(SelectionError::NoLegalMove)?;
    crate::debug!("{} selected cell {} for {}", difficulty, index, computer_mark);
    Ok(index)
}

fn calculate_random_move(available_moves: &[usize], rng: &mut SessionRng) -> Option<usize> {
    rng.choose(available_moves)
}

fn calculate_heuristic_move(
    board: &Board,
    difficulty: Difficulty,
    computer_mark: Mark,
    opponent_mark: Mark,
    available_moves: &[usize],
    rng: &mut SessionRng,
) -> Option<usize> {
    let mut board = *board;

    if let Some(index) = find_winning_move(&mut board, computer_mark, available_moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(&mut board, opponent_mark, available_moves) {
        return Some(index);
    }

    if difficulty == Difficulty::Hard
        && let Some(index) = PREFERRED_ORDER
            .into_iter()
            .find(|index| available_moves.contains(index))
    {
        return Some(index);
    }

    calculate_random_move(available_moves, rng)
}

/// First cell, in the given order, where `mark` would complete a line.
/// Only the next ply is considered, so forks go unnoticed.
fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        board.set(index, Some(mark));
        let winner = board.winner();
        board.set(index, None);

        if winner == Some(mark) {
            return Some(index);
        }
    }
    None
}

pub fn calculate_minimax_move(board: &Board, bot_mark: Mark, opponent_mark: Mark) -> Option<usize> {
    let mut board = *board;
    let available_moves: Vec<usize> = board.empty_cells().collect();

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        board.set(index, Some(bot_mark));
        let score = minimax(&mut board, 0, false, bot_mark, opponent_mark);
        board.set(index, None);

        crate::debug!("minimax: cell {} scores {}", index, score);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Exhaustive search without pruning. Wins score `10 - depth`, losses
/// `depth - 10`, draws 0.
fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    match board.winner() {
        Some(winner) if winner == bot_mark => return WIN_SCORE - depth,
        Some(_) => return depth - WIN_SCORE,
        None => {}
    }

    if board.is_full() {
        return 0;
    }

    let mark = if is_maximizing { bot_mark } else { opponent_mark };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in 0..CELL_COUNT {
        if board.cell(index) != Some(None) {
            continue;
        }

        board.set(index, Some(mark));
        let eval = minimax(board, depth + 1, !is_maximizing, bot_mark, opponent_mark);
        board.set(index, None);

        best = if is_maximizing { best.max(eval) } else { best.min(eval) };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(description: &str) -> Board {
        description.parse().unwrap()
    }

    fn select(b: &Board, difficulty: Difficulty, computer: Mark) -> usize {
        let mut rng = SessionRng::new(42);
        select_move(b, difficulty, computer, computer.opponent(), &mut rng).unwrap()
    }

    /// Walks every opponent reply; the expert answers each position.
    fn play_out_every_reply(b: Board, to_move: Mark, expert: Mark, outcomes: &mut Vec<Option<Mark>>) {
        if b.is_terminal() {
            outcomes.push(b.winner());
            return;
        }

        if to_move == expert {
            let mut next = b;
            let index = select(&b, Difficulty::Expert, expert);
            next.apply(index as isize, expert).unwrap();
            play_out_every_reply(next, to_move.opponent(), expert, outcomes);
        } else {
            for index in b.empty_cells() {
                let mut next = b;
                next.apply(index as isize, to_move).unwrap();
                play_out_every_reply(next, to_move.opponent(), expert, outcomes);
            }
        }
    }

    #[test]
    fn test_expert_completes_forced_win() {
        let b = board("XX./XO./...");
        assert_eq!(select(&b, Difficulty::Expert, Mark::X), 2);
    }

    #[test]
    fn test_medium_and_hard_block_immediate_loss() {
        let b = board("XX./.../...");
        assert_eq!(select(&b, Difficulty::Hard, Mark::O), 2);
        assert_eq!(select(&b, Difficulty::Medium, Mark::O), 2);
    }

    #[test]
    fn test_win_now_takes_precedence_over_block() {
        let b = board("XX./OO./...");
        assert_eq!(select(&b, Difficulty::Medium, Mark::O), 5);
        assert_eq!(select(&b, Difficulty::Hard, Mark::O), 5);
        assert_eq!(select(&b, Difficulty::Expert, Mark::O), 5);
    }

    #[test]
    fn test_hard_opens_in_center() {
        assert_eq!(select(&Board::new(), Difficulty::Hard, Mark::X), 4);
    }

    #[test]
    fn test_hard_falls_back_through_preference_order() {
        assert_eq!(select(&board(".../.X./..."), Difficulty::Hard, Mark::O), 0);
        assert_eq!(select(&board("O../.X./..."), Difficulty::Hard, Mark::X), 2);
    }

    #[test]
    fn test_hard_walks_into_fork_that_expert_avoids() {
        let b = board("X../.O./..X");
        assert_eq!(select(&b, Difficulty::Hard, Mark::O), 2);
        assert_eq!(select(&b, Difficulty::Expert, Mark::O), 1);
    }

    #[test]
    fn test_random_tiers_pick_empty_cells() {
        let b = board("XO./.X./O..");
        let empty: Vec<usize> = b.empty_cells().collect();
        for seed in 0..64 {
            let mut rng = SessionRng::new(seed);
            let easy = select_move(&b, Difficulty::Easy, Mark::O, Mark::X, &mut rng).unwrap();
            assert!(empty.contains(&easy));
        }

        let quiet = board("X../.../...");
        let empty: Vec<usize> = quiet.empty_cells().collect();
        for seed in 0..64 {
            let mut rng = SessionRng::new(seed);
            let medium = select_move(&quiet, Difficulty::Medium, Mark::O, Mark::X, &mut rng).unwrap();
            assert!(empty.contains(&medium));
        }
    }

    #[test]
    fn test_easy_blocks_nothing_on_purpose() {
        let b = board("XX./OO./...");
        let mut seen = std::collections::HashSet::new();
        for seed in 0..200 {
            let mut rng = SessionRng::new(seed);
            seen.insert(select_move(&b, Difficulty::Easy, Mark::O, Mark::X, &mut rng).unwrap());
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_expert_is_deterministic() {
        let b = board("X../.../.O.");
        let first = select(&b, Difficulty::Expert, Mark::X);
        for _ in 0..3 {
            assert_eq!(select(&b, Difficulty::Expert, Mark::X), first);
        }
    }

    #[test]
    fn test_selection_leaves_board_unchanged() {
        let b = board("X.O/.X./...");
        let before = b;
        for difficulty in Difficulty::ALL {
            select(&b, difficulty, Mark::O);
            assert_eq!(b, before);
        }
    }

    #[test]
    fn test_terminal_board_has_no_legal_move() {
        let mut rng = SessionRng::new(0);
        let won = board("XXX/OO./...");
        let full = board("XOX/XOO/OXX");
        for difficulty in Difficulty::ALL {
            assert_eq!(
                select_move(&won, difficulty, Mark::O, Mark::X, &mut rng),
                Err(SelectionError::NoLegalMove)
            );
            assert_eq!(
                select_move(&full, difficulty, Mark::O, Mark::X, &mut rng),
                Err(SelectionError::NoLegalMove)
            );
        }
    }

    #[test]
    fn test_identical_marks_rejected() {
        let mut rng = SessionRng::new(0);
        assert_eq!(
            select_move(&Board::new(), Difficulty::Hard, Mark::X, Mark::X, &mut rng),
            Err(SelectionError::IdenticalMarks { mark: Mark::X })
        );
    }

    #[test]
    fn test_expert_self_play_is_draw() {
        let mut b = Board::new();
        let mut to_move = Mark::X;
        while !b.is_terminal() {
            let index = select(&b, Difficulty::Expert, to_move);
            b.apply(index as isize, to_move).unwrap();
            to_move = to_move.opponent();
        }
        assert!(b.is_full());
        assert_eq!(b.winner(), None);
    }

    #[test]
    fn test_expert_never_loses_moving_first() {
        let mut outcomes = Vec::new();
        play_out_every_reply(Board::new(), Mark::X, Mark::X, &mut outcomes);
        assert!(!outcomes.is_empty());
        assert!(outcomes.iter().all(|w| *w != Some(Mark::O)));
        assert!(outcomes.contains(&Some(Mark::X)));
    }

    #[test]
    fn test_expert_never_loses_moving_second() {
        let mut outcomes = Vec::new();
        play_out_every_reply(Board::new(), Mark::X, Mark::O, &mut outcomes);
        assert!(!outcomes.is_empty());
        assert!(outcomes.iter().all(|w| *w != Some(Mark::X)));
    }

    #[test]
    fn test_expert_converts_every_line_of_a_forced_win() {
        let mut outcomes = Vec::new();
        play_out_every_reply(board("XO./.../..."), Mark::X, Mark::X, &mut outcomes);
        assert!(outcomes.iter().all(|w| *w == Some(Mark::X)));
    }
}
