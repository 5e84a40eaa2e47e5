use std::fmt;
use std::str::FromStr;

use super::error::{BoardParseError, MoveError};
use super::types::{Mark, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

pub const CELL_COUNT: usize = 9;
pub const SIDE: usize = 3;

/// 3x3 grid indexed 0..=8 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, index: isize, mark: Mark) -> Result<(), MoveError> {
        let cell = usize::try_from(index)
            .ok()
            .filter(|&i| i < CELL_COUNT)
            .ok_or(MoveError::InvalidMove { index })?;

        if self.cells[cell].is_some() {
            return Err(MoveError::CellOccupied { index: cell });
        }

        self.cells[cell] = Some(mark);
        Ok(())
    }

    pub fn cell(&self, index: usize) -> Option<Option<Mark>> {
        self.cells.get(index).copied()
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Empty cell indices in ascending order. Move selection tie-breaks
    /// rely on this order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
    }

    pub fn reset(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    /// Unchecked write used by the move search on its working copy.
    pub(crate) fn set(&mut self, index: usize, cell: Option<Mark>) {
        self.cells[index] = cell;
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; CELL_COUNT];
        let mut count = 0;

        for (position, character) in s.chars().enumerate() {
            let cell = match character {
                '/' => continue,
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' | '_' => None,
                _ => return Err(BoardParseError::InvalidCharacter { character, position }),
            };
            if count < CELL_COUNT {
                cells[count] = cell;
            }
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(BoardParseError::InvalidLength {
                expected: CELL_COUNT,
                got: count,
            });
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(SIDE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let c = cell.map_or('.', Mark::to_char);
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
