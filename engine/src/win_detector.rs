use super::types::{Mark, WinningLine};

/// Rows, then columns, then the two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Option<Mark>; 9]) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

pub fn check_win_with_line(cells: &[Option<Mark>; 9]) -> Option<WinningLine> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(mark) = cells[a]
            && cells[b] == Some(mark)
            && cells[c] == Some(mark)
        {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}
