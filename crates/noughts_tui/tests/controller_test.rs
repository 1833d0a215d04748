//! End-to-end tests for the session controller.

use noughts_core::{Mark, Square};
use noughts_tui::controller::Controller;
use noughts_tui::session::ScoreBoard;
use noughts_tui::store::FileStore;
use tempfile::TempDir;
use tokio::time::{Duration, Instant};

fn store_in(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path().join("session.json"))
}

/// Controller with a zero reply delay so tests fire the automated move with
/// a single poll.
fn controller_in(dir: &TempDir) -> Controller {
    Controller::new(store_in(dir), Duration::ZERO)
}

fn count_marks(controller: &Controller, mark: Mark) -> usize {
    controller
        .session()
        .game
        .board()
        .squares()
        .iter()
        .filter(|&&s| s == Square::Occupied(mark))
        .count()
}

#[test]
fn test_starts_fresh_without_snapshot() {
    let dir = TempDir::new().unwrap();
    let controller = controller_in(&dir);
    let session = controller.session();
    assert!(session.ai_mode);
    assert_eq!(session.game.turn(), Mark::X);
    assert_eq!(session.scores, ScoreBoard::default());
    assert!(!controller.reply_pending());
}

#[test]
fn test_human_move_schedules_and_fires_reply() {
    let dir = TempDir::new().unwrap();
    let mut controller = controller_in(&dir);

    controller.on_cell_selected(4);
    assert_eq!(controller.session().game.turn(), Mark::O);
    assert!(controller.reply_pending());
    assert_eq!(count_marks(&controller, Mark::O), 0);

    controller.poll_deferred(Instant::now());
    assert!(!controller.reply_pending());
    assert_eq!(count_marks(&controller, Mark::O), 1);
    assert_eq!(controller.session().game.turn(), Mark::X);
}

#[test]
fn test_selection_ignored_while_reply_pending() {
    let dir = TempDir::new().unwrap();
    let mut controller = controller_in(&dir);

    controller.on_cell_selected(4);
    // O owns the turn until the deferred reply lands; the board is locked.
    controller.on_cell_selected(0);
    assert_eq!(count_marks(&controller, Mark::X), 1);
    assert_eq!(count_marks(&controller, Mark::O), 0);
}

#[test]
fn test_toggle_resets_scores_and_board() {
    let dir = TempDir::new().unwrap();
    let mut controller = controller_in(&dir);

    controller.on_cell_selected(4);
    controller.poll_deferred(Instant::now());
    controller.on_toggle_automation();

    let session = controller.session();
    assert!(!session.ai_mode);
    assert_eq!(session.scores, ScoreBoard::default());
    assert_eq!(session.game.turn(), Mark::X);
    assert!(session.game.board().squares().iter().all(|&s| s == Square::Empty));
}

#[test]
fn test_winner_starts_next_board() {
    let dir = TempDir::new().unwrap();
    let mut controller = controller_in(&dir);
    controller.on_toggle_automation(); // two-player, no automated replies

    // X wins the top row.
    for pos in [0, 3, 1, 4, 2] {
        controller.on_cell_selected(pos);
    }
    let session = controller.session();
    assert_eq!(session.scores.x, 1);
    assert_eq!(session.last_winner, Some(Mark::X));
    assert_eq!(session.status, "Player X wins");

    controller.on_reset();
    let session = controller.session();
    assert_eq!(session.game.turn(), Mark::X);
    assert_eq!(session.status, "Winner X starts");
    assert_eq!(session.scores.x, 1, "reset keeps scores");
}

#[test]
fn test_tie_does_not_update_last_winner() {
    let dir = TempDir::new().unwrap();
    let mut controller = controller_in(&dir);
    controller.on_toggle_automation();

    // Full board, no line: X O X / X O O / O X X.
    for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        controller.on_cell_selected(pos);
    }
    let session = controller.session();
    assert_eq!(session.scores.ties, 1);
    assert_eq!(session.last_winner, None);
    assert_eq!(session.status, "It's a tie");

    controller.on_reset();
    assert_eq!(controller.session().game.turn(), Mark::X);
}

#[test]
fn test_round_trip_restores_identical_session() {
    let dir = TempDir::new().unwrap();
    let mut controller = controller_in(&dir);
    controller.on_toggle_automation();
    for pos in [4, 0, 8] {
        controller.on_cell_selected(pos);
    }
    let saved = controller.session().clone();
    drop(controller);

    let restored = controller_in(&dir);
    assert_eq!(restored.session(), &saved);
}

#[test]
fn test_corrupt_snapshot_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("session.json"), "not a snapshot").unwrap();

    let controller = controller_in(&dir);
    let session = controller.session();
    assert!(session.ai_mode);
    assert_eq!(session.game.turn(), Mark::X);
    assert_eq!(session.scores, ScoreBoard::default());
}

#[test]
fn test_restore_resumes_pending_automated_turn() {
    let dir = TempDir::new().unwrap();
    let mut controller = controller_in(&dir);
    controller.on_cell_selected(4);
    // Simulate an exit before the deferred reply fired.
    drop(controller);

    let mut restored = controller_in(&dir);
    assert!(restored.reply_pending());
    restored.poll_deferred(Instant::now());
    assert_eq!(count_marks(&restored, Mark::O), 1);
}

#[test]
fn test_illegal_selection_has_no_observable_effect() {
    let dir = TempDir::new().unwrap();
    let mut controller = controller_in(&dir);
    controller.on_toggle_automation();
    controller.on_cell_selected(4);
    let before = controller.session().clone();

    controller.on_cell_selected(4); // occupied
    controller.on_cell_selected(42); // out of range
    assert_eq!(controller.session(), &before);
}
