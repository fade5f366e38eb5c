//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod minimax;
pub mod opponent;
pub mod timer;

pub use board::{BoardState, Cell, Player, Status};
pub use game::{Game, GameOutcome, Move, MoveResult};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use opponent::{Difficulty, select_cell};
pub use timer::{Tick, TurnTimer};
