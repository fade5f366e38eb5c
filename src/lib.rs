//! Two small turn-based games with computer opponents
//!
//! This crate provides:
//! - Tic-tac-toe with a turn timer, three opponent difficulties and a
//!   persisted scoreboard
//! - Dots-and-boxes on an N x N cell grid with three opponent difficulties
//! - Deferred opponent moves driven by the host's clock
//! - Computer-vs-computer matches for comparing difficulties
//! - A terminal front-end (`minigames` binary)

pub mod adapters;
pub mod arena;
pub mod cli;
pub mod config;
pub mod dots;
pub mod error;
pub mod pacing;
pub mod ports;
pub mod scores;
pub mod tictactoe;

pub use error::{Error, Result};
