use std::fmt;

use super::types::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidMove { index: isize },
    CellOccupied { index: usize },
    RoundOver,
    OutOfTurn { expected: Mark, got: Mark },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidMove { index } => {
                write!(f, "Invalid move: cell {} is outside 0..=8", index)
            }
            MoveError::CellOccupied { index } => write!(f, "Cell {} is already marked", index),
            MoveError::RoundOver => write!(f, "Round is already over"),
            MoveError::OutOfTurn { expected, got } => {
                write!(f, "Not {}'s turn, {} is to move", got, expected)
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// `NoLegalMove` is returned rather than panicking; callers decide whether
/// a selection request on a finished board is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    NoLegalMove,
    IdenticalMarks { mark: Mark },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NoLegalMove => write!(f, "No legal move: board is terminal"),
            SelectionError::IdenticalMarks { mark } => {
                write!(f, "Computer and opponent cannot both play {}", mark)
            }
        }
    }
}

impl std::error::Error for SelectionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardParseError {
    InvalidLength { expected: usize, got: usize },
    InvalidCharacter { character: char, position: usize },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::InvalidLength { expected, got } => {
                write!(f, "Board needs {} cells, got {}", expected, got)
            }
            BoardParseError::InvalidCharacter { character, position } => {
                write!(f, "Invalid cell character '{}' at position {}", character, position)
            }
        }
    }
}

impl std::error::Error for BoardParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    Move(MoveError),
    Selection(SelectionError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Move(e) => write!(f, "{}", e),
            SessionError::Selection(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(e) => Some(e),
            SessionError::Selection(e) => Some(e),
        }
    }
}

impl From<MoveError> for SessionError {
    fn from(e: MoveError) -> Self {
        SessionError::Move(e)
    }
}

impl From<SelectionError> for SessionError {
    fn from(e: SelectionError) -> Self {
        SessionError::Selection(e)
    }
}
