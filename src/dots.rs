//! Dots-and-boxes game implementation

pub mod board;
pub mod game;
pub mod opponent;

pub use board::{BoardState, Cell, Edge, Outcome, Player};
pub use game::{Game, MoveResult};
pub use opponent::{Difficulty, select_edge};
