//! Exhaustive adversarial move search.
//!
//! The board has nine squares, so a full-depth minimax is affordable (at
//! worst 9! leaf positions from an empty board) and buys the strongest
//! possible guarantee: the searching side wins when a win is reachable and
//! otherwise ties, against any opponent.

use crate::rules::evaluate;
use crate::types::{Board, Mark, Outcome, Square};
use tracing::instrument;

/// Leaf score for a position the searching side has won.
const WIN_SCORE: i32 = 10;

/// Picks optimal moves for one mark by full-depth minimax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Searcher {
    /// The mark the searcher plays for.
    ai: Mark,
    /// The opposing mark.
    human: Mark,
}

impl Searcher {
    /// Creates a searcher playing `mark` against its opponent.
    pub fn for_mark(mark: Mark) -> Self {
        Self::new(mark, mark.opponent())
    }

    /// Returns the best position for the searcher's mark, or `None` when the
    /// board has no empty square.
    ///
    /// Candidate squares are scored assuming the opponent replies optimally.
    /// Ties resolve to the lowest board index, so the choice is
    /// deterministic. The caller's board is never touched: all hypothetical
    /// placements happen on a scratch copy and are undone before the next
    /// candidate is tried.
    #[instrument(skip(board))]
    pub fn best_move(&self, board: &Board) -> Option<usize> {
        let mut scratch = board.clone();
        let mut best: Option<(usize, i32)> = None;

        for pos in 0..9 {
            if !scratch.is_empty(pos) {
                continue;
            }
            scratch.set(pos, Square::Occupied(self.ai));
            let score = self.score(&mut scratch, false);
            scratch.set(pos, Square::Empty);

            if best.is_none_or(|(_, top)| score > top) {
                best = Some((pos, score));
            }
        }

        best.map(|(pos, _)| pos)
    }

    /// Scores a hypothetical position from the searcher's perspective.
    ///
    /// Terminal positions score +10 (searcher won), -10 (opponent won), or 0
    /// (draw). Otherwise every empty square is tried for the mark whose turn
    /// it is, maximizing for the searcher and minimizing for the opponent;
    /// each placement is cleared again before the next one.
    fn score(&self, board: &mut Board, maximizing: bool) -> i32 {
        match evaluate(board) {
            Outcome::Won { mark, .. } if mark == self.ai => return WIN_SCORE,
            Outcome::Won { .. } => return -WIN_SCORE,
            Outcome::Draw => return 0,
            Outcome::InProgress => {}
        }

        let mover = if maximizing { self.ai } else { self.human };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in 0..9 {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Square::Occupied(mover));
            let score = self.score(board, !maximizing);
            board.set(pos, Square::Empty);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}
