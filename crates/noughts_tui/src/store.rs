//! Snapshot persistence for the game session.

use crate::session::GameSession;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, instrument, warn};

/// Loads and saves the session snapshot as a JSON file.
///
/// Persistence is best-effort by design: a missing or corrupt snapshot means
/// a fresh session, and a failed write is logged and ignored so it can never
/// interrupt play.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the persisted session, if any.
    ///
    /// Missing, unreadable, and unparseable files all yield `None`.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Option<GameSession> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(error = %e, "No readable snapshot");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => {
                debug!("Restored session snapshot");
                Some(session)
            }
            Err(e) => {
                warn!(error = %e, "Snapshot is corrupt, starting fresh");
                None
            }
        }
    }

    /// Writes the session snapshot, replacing any previous one.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn save(&self, session: &GameSession) {
        let json = match serde_json::to_string_pretty(session) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize session");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            warn!(error = %e, "Failed to write snapshot");
        }
    }
}
