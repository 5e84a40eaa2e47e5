use super::board::Board;
use super::error::MoveError;
use super::types::{Mark, RoundStatus, WinningLine};

/// One round: the board, whose turn it is and the round status.
/// X always moves first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    board: Board,
    current_mark: Mark,
    status: RoundStatus,
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

impl Round {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: RoundStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    pub fn apply(&mut self, index: isize, mark: Mark) -> Result<RoundStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::RoundOver);
        }

        if mark != self.current_mark {
            return Err(MoveError::OutOfTurn {
                expected: self.current_mark,
                got: mark,
            });
        }

        self.board.apply(index, mark)?;

        self.check_game_over();

        if self.status == RoundStatus::InProgress {
            self.current_mark = self.current_mark.opponent();
        }

        Ok(self.status)
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.status = RoundStatus::InProgress;
    }

    fn check_game_over(&mut self) {
        if let Some(winner) = self.board.winner() {
            self.status = RoundStatus::Won(winner);
            return;
        }

        if self.board.is_full() {
            self.status = RoundStatus::Drawn;
        }
    }
}
