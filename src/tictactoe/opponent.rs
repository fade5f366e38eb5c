//! Computer opponent move selection

use std::{fmt, str::FromStr};

use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::{BoardState, LineAnalyzer, Player, minimax};

/// Strength of the tic-tac-toe computer opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random empty cell
    Easy,
    /// Win if possible, else block, else random
    Medium,
    /// Exhaustive minimax
    #[default]
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(crate::Error::unknown_option(
                "difficulty",
                s,
                "easy, medium, hard",
            )),
        }
    }
}

/// Choose a cell for `computer` to mark.
///
/// Depends only on the board, the difficulty and the random source, so it
/// can be exercised without a running game.
///
/// # Errors
///
/// Returns [`crate::Error::NoMovesAvailable`] if the board is already full.
pub fn select_cell<R: Rng + ?Sized>(
    board: &BoardState,
    difficulty: Difficulty,
    computer: Player,
    rng: &mut R,
) -> crate::Result<usize> {
    let pos = match difficulty {
        Difficulty::Easy => random_cell(board, rng)?,
        Difficulty::Medium => match tactical_cell(board, computer) {
            Some(pos) => pos,
            None => random_cell(board, rng)?,
        },
        Difficulty::Hard => minimax::best_move(board, computer)?,
    };

    log::debug!("{difficulty} opponent ({computer}) selects cell {pos}");
    Ok(pos)
}

fn random_cell<R: Rng + ?Sized>(board: &BoardState, rng: &mut R) -> crate::Result<usize> {
    board
        .empty_positions()
        .choose(rng)
        .copied()
        .ok_or(crate::Error::NoMovesAvailable)
}

/// Winning cell for `computer`, else the cell that blocks its opponent.
pub fn tactical_cell(board: &BoardState, computer: Player) -> Option<usize> {
    LineAnalyzer::first_winning_move(&board.cells, computer)
        .or_else(|| LineAnalyzer::first_winning_move(&board.cells, computer.opponent()))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        let err = "impossible".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, crate::Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_easy_picks_empty_cell() {
        let board = BoardState::from_string("XOX OX. O..", Player::X).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let pos = select_cell(&board, Difficulty::Easy, Player::X, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_medium_blocks() {
        let board = BoardState::from_string("XX. .O. ...", Player::O).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let pos = select_cell(&board, Difficulty::Medium, Player::O, &mut rng).unwrap();
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_medium_prefers_win_over_block() {
        // O wins at 5, X threatens 2
        let board = BoardState::from_string("XX. OO. X..", Player::O).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let pos = select_cell(&board, Difficulty::Medium, Player::O, &mut rng).unwrap();
        assert_eq!(pos, 5);
    }

    #[test]
    fn test_medium_plays_as_x() {
        let board = BoardState::from_string("X.. .OO X..", Player::X).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let pos = select_cell(&board, Difficulty::Medium, Player::X, &mut rng).unwrap();
        assert_eq!(pos, 3, "X wins down the left column");
    }

    #[test]
    fn test_no_moves_on_full_board() {
        let board = BoardState::from_string("XOX XOO OXX", Player::O).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(matches!(
                select_cell(&board, difficulty, Player::O, &mut rng),
                Err(crate::Error::NoMovesAvailable)
            ));
        }
    }
}
