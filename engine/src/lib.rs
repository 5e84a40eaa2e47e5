pub mod config;
pub mod logger;

mod board;
mod bot_controller;
mod difficulty;
mod error;
mod game_state;
mod scoreboard;
mod session;
mod session_rng;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, SIDE};
pub use bot_controller::{PREFERRED_ORDER, calculate_minimax_move, select_move};
pub use difficulty::Difficulty;
pub use error::{BoardParseError, MoveError, SelectionError, SessionError};
pub use game_state::Round;
pub use scoreboard::{Outcome, Scoreboard, Standing};
pub use session::MatchSession;
pub use session_rng::SessionRng;
pub use types::{Mark, RoundStatus, WinningLine};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line};
