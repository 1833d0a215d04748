//! noughts terminal application.
//!
//! Wires the pure game logic from `noughts_core` into a playable session:
//!
//! - **Session** ([`session::GameSession`]): the single owner of all mutable
//!   state: the live game, the score tally, the automation flag, the last
//!   decisive winner, and the status line.
//! - **Controller** ([`controller::Controller`]): orchestrates turns, keeps
//!   scores, persists a snapshot after every mutation, and schedules the
//!   deferred automated reply.
//! - **Store** ([`store::FileStore`]): JSON snapshot on disk; a missing or
//!   corrupt file just means a fresh session.
//! - **View** ([`app`], [`ui`], [`input`]): ratatui rendering and key
//!   dispatch.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod controller;
pub mod input;
pub mod session;
pub mod store;
pub mod ui;
