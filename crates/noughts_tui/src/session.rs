//! Session state: the live game plus everything that survives it.

use noughts_core::{Game, Mark, Outcome};
use serde::{Deserialize, Serialize};

/// The mark whose moves the search engine plays in single-player mode.
///
/// Fixed: the human opens a fresh session as X, the machine answers as O.
pub const AUTOMATED_MARK: Mark = Mark::O;

/// Cumulative score tally across the games of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    /// Games won by X.
    pub x: u32,
    /// Games won by O.
    pub o: u32,
    /// Drawn games.
    pub ties: u32,
}

impl ScoreBoard {
    /// Records a finished game against the tally. In-progress outcomes are
    /// ignored.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Won { mark: Mark::X, .. } => self.x += 1,
            Outcome::Won { mark: Mark::O, .. } => self.o += 1,
            Outcome::Draw => self.ties += 1,
            Outcome::InProgress => {}
        }
    }
}

/// Everything that defines one play session.
///
/// Owned exclusively by the controller and serialized field-for-field as the
/// persistence snapshot after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    /// The live game.
    pub game: Game,
    /// Win/tie tally across games.
    pub scores: ScoreBoard,
    /// Whether O is played by the search engine.
    pub ai_mode: bool,
    /// Winner of the last completed game, if it was decisive. Decides who
    /// opens the next board on reset.
    pub last_winner: Option<Mark>,
    /// Last status line shown to the player.
    pub status: String,
}

impl GameSession {
    /// Fresh session: empty board with X to move, zero scores, automation on.
    pub fn new() -> Self {
        Self {
            game: Game::new(Mark::X),
            scores: ScoreBoard::default(),
            ai_mode: true,
            last_winner: None,
            status: "Player X's turn".to_string(),
        }
    }

    /// True when the automated side owns the current turn.
    pub fn automation_to_move(&self) -> bool {
        self.ai_mode && self.game.is_active() && self.game.turn() == AUTOMATED_MARK
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
