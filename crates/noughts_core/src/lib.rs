//! Pure tic-tac-toe game logic.
//!
//! This crate holds everything that can be reasoned about without I/O:
//!
//! - **Board model** ([`Board`], [`Mark`], [`Square`], [`Outcome`]): a fixed
//!   3x3 grid of marks and the static table of winning lines.
//! - **Rules** ([`Game`], [`evaluate`]): move validation, outcome detection,
//!   and the turn state machine.
//! - **Search** ([`Searcher`]): exhaustive minimax move selection for the
//!   automated side. Best case it wins, worst case it ties; it never loses.
//!
//! The terminal application lives in the `noughts_tui` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod rules;
mod search;
mod types;

pub use rules::{Game, MoveError, evaluate};
pub use search::Searcher;
pub use types::{Board, Mark, Outcome, Square, WIN_LINES, WinLine};
