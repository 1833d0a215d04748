//! Session controller: the state machine driving one play session.

use derive_getters::Getters;
use noughts_core::{Game, Mark, Outcome, Searcher};
use tokio::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use crate::session::{AUTOMATED_MARK, GameSession, ScoreBoard};
use crate::store::FileStore;

/// Orchestrates a session end-to-end.
///
/// All mutations flow through this type: it validates moves against the rule
/// engine, updates scores and status, persists a snapshot after every change,
/// and schedules the automated reply whenever the search engine's mark gains
/// the turn. The view reads state through [`Controller::session`] and never
/// mutates it directly.
#[derive(Debug, Getters)]
pub struct Controller {
    /// Current session state.
    session: GameSession,
    #[getter(skip)]
    store: FileStore,
    #[getter(skip)]
    searcher: Searcher,
    #[getter(skip)]
    reply_delay: Duration,
    #[getter(skip)]
    pending_reply: Option<Instant>,
}

impl Controller {
    /// Restores the session from the store, or starts fresh when no usable
    /// snapshot exists.
    ///
    /// `reply_delay` paces the automated reply so the player sees their own
    /// move land first; it has no effect on which move is chosen.
    #[instrument(skip(store))]
    pub fn new(store: FileStore, reply_delay: Duration) -> Self {
        let session = store.load().unwrap_or_else(|| {
            info!("Starting a fresh session");
            GameSession::new()
        });
        let mut controller = Self {
            session,
            store,
            searcher: Searcher::for_mark(AUTOMATED_MARK),
            reply_delay,
            pending_reply: None,
        };
        // A restored game may already be waiting on the automated side.
        controller.schedule_reply_if_due();
        controller
    }

    /// True while an automated reply is scheduled but not yet applied.
    pub fn reply_pending(&self) -> bool {
        self.pending_reply.is_some()
    }

    /// Handles a cell selection from the view.
    ///
    /// Dropped without effect while the automated side owns the turn (the
    /// board stays locked until the deferred reply lands) and for illegal
    /// moves; both are normal interaction, not faults.
    #[instrument(skip(self))]
    pub fn on_cell_selected(&mut self, pos: usize) {
        if self.session.automation_to_move() {
            debug!(pos, "Board is locked for the automated side's turn");
            return;
        }
        self.apply_move(pos);
    }

    /// Flips single-player mode. Scores reset to zero and X opens the fresh
    /// board.
    #[instrument(skip(self))]
    pub fn on_toggle_automation(&mut self) {
        self.session.ai_mode = !self.session.ai_mode;
        self.session.scores = ScoreBoard::default();
        self.session.last_winner = None;
        self.session.game = Game::new(Mark::X);
        self.pending_reply = None;
        self.session.status = if self.session.ai_mode {
            "Switched to single player. Player X starts".to_string()
        } else {
            "Switched to two player. Player X starts".to_string()
        };
        info!(ai_mode = self.session.ai_mode, "Automation toggled");
        self.persist();
        self.schedule_reply_if_due();
    }

    /// Starts a fresh board, keeping scores.
    ///
    /// The last decisive winner opens the new board; X opens when the
    /// previous game tied or no game has finished yet.
    #[instrument(skip(self))]
    pub fn on_reset(&mut self) {
        let starter = self.session.last_winner.unwrap_or(Mark::X);
        self.session.game = Game::new(starter);
        self.pending_reply = None;
        self.session.status = match self.session.last_winner {
            Some(winner) => format!("Winner {winner} starts"),
            None => format!("Player {starter}'s turn"),
        };
        info!(starter = %starter, "Board reset");
        self.persist();
        self.schedule_reply_if_due();
    }

    /// Applies the pending automated reply once its delay has elapsed.
    ///
    /// Called by the event loop on every tick. Does nothing while no reply is
    /// pending or the deadline is still ahead; once due, the reply always
    /// runs to completion.
    pub fn poll_deferred(&mut self, now: Instant) {
        let Some(due) = self.pending_reply else {
            return;
        };
        if now < due {
            return;
        }
        self.pending_reply = None;
        match self.searcher.best_move(self.session.game.board()) {
            Some(pos) => {
                debug!(pos, "Applying automated reply");
                self.apply_move(pos);
            }
            None => warn!("Search returned no move; nothing applied"),
        }
    }

    /// Applies one move for whichever mark is to play, then handles the
    /// outcome: tally and freeze on a terminal board, otherwise announce the
    /// next turn and schedule the automated reply when it is O's.
    fn apply_move(&mut self, pos: usize) {
        let mark = self.session.game.turn();
        if let Err(e) = self.session.game.try_move(pos) {
            debug!(pos, error = %e, "Move rejected");
            return;
        }
        info!(pos, mark = %mark, "Move applied");

        let outcome = *self.session.game.outcome();
        match outcome {
            Outcome::Won { mark, .. } => {
                self.session.scores.record(&outcome);
                self.session.last_winner = Some(mark);
                self.session.status = format!("Player {mark} wins");
                info!(winner = %mark, "Game over");
            }
            Outcome::Draw => {
                self.session.scores.record(&outcome);
                self.session.status = "It's a tie".to_string();
                info!("Game over in a tie");
            }
            Outcome::InProgress => {
                self.session.status = format!("Player {}'s turn", self.session.game.turn());
            }
        }

        self.persist();
        self.schedule_reply_if_due();
    }

    /// Arms the reply deadline when the automated side holds the turn and no
    /// reply is already pending.
    fn schedule_reply_if_due(&mut self) {
        if self.pending_reply.is_none() && self.session.automation_to_move() {
            debug!(
                delay_ms = self.reply_delay.as_millis() as u64,
                "Scheduling automated reply"
            );
            self.pending_reply = Some(Instant::now() + self.reply_delay);
        }
    }

    fn persist(&self) {
        self.store.save(&self.session);
    }
}
