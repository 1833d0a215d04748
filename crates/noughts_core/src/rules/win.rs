//! Win detection for tic-tac-toe.

use crate::types::{Board, Mark, Square, WIN_LINES, WinLine};

/// Finds the first completed line on the board.
///
/// Lines are scanned in [`WIN_LINES`] table order, which is the tie-break
/// when a move completes two lines at once.
pub fn winning_line(board: &Board) -> Option<(Mark, WinLine)> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(Square::Occupied(mark)) = board.get(a)
            && board.get(b) == Some(Square::Occupied(mark))
            && board.get(c) == Some(Square::Occupied(mark))
        {
            return Some((mark, line));
        }
    }
    None
}
