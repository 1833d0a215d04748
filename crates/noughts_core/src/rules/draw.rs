//! Draw detection for tic-tac-toe.

use super::win;
use crate::types::Board;

/// Checks if no empty square remains.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the board is a finished draw: full with no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && win::winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mark, Square};

    fn filled_draw_board() -> Board {
        // X O X / X O O / O X X: full, no line.
        let mut board = Board::new();
        for (pos, mark) in [
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::X),
            (4, Mark::O),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ] {
            board.set(pos, Square::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_empty_board_is_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = filled_draw_board();
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let mut board = filled_draw_board();
        // Rewrite the top row to three X's.
        board.set(1, Square::Occupied(Mark::X));
        assert!(!is_draw(&board));
    }
}
