//! Terminal front-end for the games
//!
//! The interactive commands drive the engines from stdin, a one-second turn
//! clock and the opponent delay. `scores` and `simulate` are one-shot.

pub mod commands;
pub mod input;
pub mod output;
