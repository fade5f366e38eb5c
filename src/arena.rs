//! Computer-vs-computer matches for both games.
//!
//! Used by the `simulate` command to compare difficulties, and by tests that
//! pit the minimax opponent against everything else.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    config::DotsConfig,
    dots,
    tictactoe::{self, BoardState, GameOutcome, Player, Status},
};

/// Play one tic-tac-toe game between two computer opponents.
///
/// # Errors
///
/// Only propagates selector errors, which a legal game never produces.
pub fn play_tictactoe<R: Rng + ?Sized>(
    x: tictactoe::Difficulty,
    o: tictactoe::Difficulty,
    first: Player,
    rng: &mut R,
) -> Result<GameOutcome> {
    let mut board = BoardState::new_with_player(first);
    loop {
        match board.status() {
            Status::Won(winner) => return Ok(GameOutcome::Win(winner)),
            Status::Draw => return Ok(GameOutcome::Draw),
            Status::Ongoing => {}
        }

        let mover = board.to_move;
        let difficulty = match mover {
            Player::X => x,
            Player::O => o,
        };
        let pos = tictactoe::select_cell(&board, difficulty, mover, rng)?;
        board = board.make_move(pos)?;
    }
}

/// Play one dots-and-boxes game between two computer opponents.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidConfiguration`] if the size is outside
/// `1..=MAX_DOTS_SIZE`.
pub fn play_dots<R: Rng + ?Sized>(
    size: usize,
    one: dots::Difficulty,
    two: dots::Difficulty,
    rng: &mut R,
) -> Result<(dots::Outcome, u32, u32)> {
    DotsConfig::new(size).validate()?;
    let mut board = dots::BoardState::new(size)?;
    loop {
        if let Some(outcome) = board.outcome() {
            return Ok((
                outcome,
                board.score(dots::Player::One),
                board.score(dots::Player::Two),
            ));
        }

        let difficulty = match board.current_player() {
            dots::Player::One => one,
            dots::Player::Two => two,
        };
        let edge = dots::select_edge(&board, difficulty, rng)?;
        board.claim(edge)?;
    }
}

/// Win/draw counts over a batch, from the first side's point of view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn games(&self) -> usize {
        self.first_wins + self.second_wins + self.draws
    }

    pub fn record_tictactoe(&mut self, outcome: GameOutcome) {
        match outcome.winner() {
            Some(Player::X) => self.first_wins += 1,
            Some(Player::O) => self.second_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn record_dots(&mut self, outcome: dots::Outcome) {
        match outcome {
            dots::Outcome::Winner(dots::Player::One) => self.first_wins += 1,
            dots::Outcome::Winner(dots::Player::Two) => self.second_wins += 1,
            dots::Outcome::Tie => self.draws += 1,
        }
    }

    /// Fraction of games won by the first side
    pub fn first_win_rate(&self) -> f64 {
        rate(self.first_wins, self.games())
    }

    pub fn second_win_rate(&self) -> f64 {
        rate(self.second_wins, self.games())
    }

    pub fn draw_rate(&self) -> f64 {
        rate(self.draws, self.games())
    }
}

fn rate(count: usize, total: usize) -> f64 {
    if total > 0 {
        count as f64 / total as f64
    } else {
        0.0
    }
}
