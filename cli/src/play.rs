use std::io::{self, BufRead, Write};

use tictactoe_engine::{
    CELL_COUNT, Difficulty, MatchSession, RoundStatus, SIDE, SessionError, Standing,
};

#[derive(Debug, PartialEq)]
enum PlayCommand {
    Place(isize),
    NextRound,
    NewGame,
    SetDifficulty(Difficulty),
    Stats,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<PlayCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Enter a cell 0-8, or h for help".to_string());
    };

    match head {
        "n" => Ok(PlayCommand::NextRound),
        "r" => Ok(PlayCommand::NewGame),
        "s" => Ok(PlayCommand::Stats),
        "h" | "?" => Ok(PlayCommand::Help),
        "q" => Ok(PlayCommand::Quit),
        "d" => {
            let tier = parts.next().ok_or("Usage: d <easy|medium|hard|expert>")?;
            tier.parse().map(PlayCommand::SetDifficulty)
        }
        cell => cell
            .parse::<isize>()
            .map(PlayCommand::Place)
            .map_err(|_| format!("Unknown command '{}', h for help", cell)),
    }
}

fn render_board(session: &MatchSession) -> String {
    let board = session.round().board();
    let winning_cells = session.round().winning_line().map(|line| line.cells);
    let mut out = String::new();
    for index in 0..CELL_COUNT {
        let cell = match board.cell(index).flatten() {
            Some(mark) => mark.to_char(),
            None => char::from_digit(index as u32, 10).unwrap_or('?'),
        };
        let (open, close) = if winning_cells.is_some_and(|cells| cells.contains(&index)) {
            ('[', ']')
        } else {
            (' ', ' ')
        };
        out.push(open);
        out.push(cell);
        out.push(close);
        if index % SIDE < SIDE - 1 {
            out.push('|');
        } else if index < CELL_COUNT - 1 {
            out.push_str("\n---+---+---\n");
        }
    }
    out
}

pub fn render_statistics(session: &MatchSession) -> String {
    let score = session.scoreboard();
    let verdict = match score.standing() {
        Standing::PlayerAhead => "Hot streak!",
        Standing::Even => "Keep trying!",
        Standing::ComputerAhead => "Computer dominating!",
    };
    format!(
        "Total games: {}\nPlayer wins: {} ({:.1}%)\nComputer wins: {} ({:.1}%)\nDraws: {} ({:.1}%)\nDifficulty: {}\nTurn: {}\n{}",
        score.total(),
        score.player_wins,
        score.player_win_rate(),
        score.computer_wins,
        score.computer_win_rate(),
        score.draws,
        score.draw_rate(),
        session.difficulty(),
        session.round().current_mark(),
        verdict
    )
}

const HELP: &str = "0-8: place your mark | n: next round | r: new game (clears scores) | d <tier>: difficulty | s: statistics | q: quit";

pub fn run_play<R: BufRead, W: Write>(
    session: &mut MatchSession,
    mut input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(
        output,
        "You play {} against the {} computer. {}",
        session.player_mark(),
        session.difficulty(),
        HELP
    )?;

    let mut show_board = true;
    loop {
        let status = session.round().status();

        if status == RoundStatus::InProgress && !session.is_player_turn() {
            match session.computer_move() {
                Ok(index) => writeln!(output, "Computer ({}) plays {}", session.computer_mark(), index)?,
                Err(e) => return Err(io::Error::other(e)),
            }
            show_board = true;
            continue;
        }

        if show_board {
            writeln!(output, "{}\n", render_board(session))?;
            match status {
                RoundStatus::Won(mark) if mark == session.player_mark() => {
                    writeln!(output, "You win! {}", session.scoreboard())?;
                }
                RoundStatus::Won(_) => writeln!(output, "Computer wins. {}", session.scoreboard())?,
                RoundStatus::Drawn => writeln!(output, "Draw. {}", session.scoreboard())?,
                RoundStatus::InProgress => {}
            }
            show_board = false;
        }

        if status.is_over() {
            write!(output, "Round over. n: next round, r: new game, s: stats, q: quit > ")?;
        } else {
            write!(output, "Your move ({}) > ", session.player_mark())?;
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match parse_command(&line) {
            Ok(PlayCommand::Place(index)) => match session.player_move(index) {
                Ok(_) => show_board = true,
                Err(SessionError::Move(e)) => writeln!(output, "{}", e)?,
                Err(e) => return Err(io::Error::other(e)),
            },
            Ok(PlayCommand::NextRound) => {
                session.next_round();
                show_board = true;
            }
            Ok(PlayCommand::NewGame) => {
                session.new_game();
                show_board = true;
            }
            Ok(PlayCommand::SetDifficulty(difficulty)) => {
                session.set_difficulty(difficulty);
                writeln!(output, "Difficulty: {}, round restarted", difficulty)?;
                show_board = true;
            }
            Ok(PlayCommand::Stats) => writeln!(output, "{}", render_statistics(session))?,
            Ok(PlayCommand::Help) => writeln!(output, "{}", HELP)?,
            Ok(PlayCommand::Quit) => {
                writeln!(output, "{}", session.scoreboard())?;
                return Ok(());
            }
            Err(message) => writeln!(output, "{}", message)?,
        }
    }
}
