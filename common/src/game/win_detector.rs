use super::board::Board;
use super::types::Mark;

/// The 8 winning triples, scanned in fixed order: rows top to bottom,
/// columns left to right, then the two diagonals. The order decides which
/// line is reported for a board holding more than one complete line.
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

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}

/// First uniformly-marked line, with the cells that form it. Used by the
/// board view to paint the strike-through overlay.
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    for cells in WIN_LINES {
        let [a, b, c] = cells;
        let mark = board[a];
        if mark != Mark::Empty && board[b] == mark && board[c] == mark {
            return Some(WinningLine::new(mark, cells));
        }
    }
    None
}

/// `None` means no line is complete; the caller distinguishes a draw from
/// a game still in progress by checking board fullness.
pub fn check_win(board: &Board) -> Option<Mark> {
    winning_line(board).map(|line| line.mark)
}
