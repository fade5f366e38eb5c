//! Computer opponent edge selection

use std::{fmt, str::FromStr};

use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::{BoardState, Edge};

/// Strength of the dots-and-boxes computer opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random unclaimed edge
    Random,
    /// Take a cell whenever one is free, else random
    #[default]
    Greedy,
    /// Greedy, then avoid edges that hand the next player a cell.
    ///
    /// This is a one-move lookahead, not perfect play, and can lose to a
    /// careful human.
    Unbeatable,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Random => "random",
            Difficulty::Greedy => "greedy",
            Difficulty::Unbeatable => "unbeatable",
        })
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Difficulty::Random),
            "greedy" => Ok(Difficulty::Greedy),
            "unbeatable" => Ok(Difficulty::Unbeatable),
            _ => Err(crate::Error::unknown_option(
                "difficulty",
                s,
                "random, greedy, unbeatable",
            )),
        }
    }
}

/// Choose an edge for the player to move.
///
/// # Errors
///
/// Returns [`crate::Error::NoMovesAvailable`] if every edge is claimed.
pub fn select_edge<R: Rng + ?Sized>(
    board: &BoardState,
    difficulty: Difficulty,
    rng: &mut R,
) -> crate::Result<Edge> {
    let unclaimed = board.unclaimed_edges();
    if unclaimed.is_empty() {
        return Err(crate::Error::NoMovesAvailable);
    }

    let edge = match difficulty {
        Difficulty::Random => None,
        Difficulty::Greedy => completing_edge(board, &unclaimed),
        Difficulty::Unbeatable => completing_edge(board, &unclaimed)
            .or_else(|| safe_edges(board, &unclaimed).choose(rng).copied()),
    };

    let edge = match edge {
        Some(edge) => edge,
        None => *unclaimed.choose(rng).ok_or(crate::Error::NoMovesAvailable)?,
    };

    log::debug!("{difficulty} opponent selects edge {edge}");
    Ok(edge)
}

/// First edge, in board order, that finishes an unowned cell
pub fn completing_edge(board: &BoardState, unclaimed: &[Edge]) -> Option<Edge> {
    unclaimed
        .iter()
        .copied()
        .find(|&edge| board.completes_cell(edge))
}

/// Edges that leave no unowned cell one side short of completion
pub fn safe_edges(board: &BoardState, unclaimed: &[Edge]) -> Vec<Edge> {
    unclaimed
        .iter()
        .copied()
        .filter(|&edge| !board.offers_cell(edge))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn board_with(size: usize, edges: &[(usize, usize)]) -> BoardState {
        let mut board = BoardState::new(size).unwrap();
        for &(row, col) in edges {
            board.claim(Edge::new(row, col)).unwrap();
        }
        board
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(
            "Unbeatable".parse::<Difficulty>().unwrap(),
            Difficulty::Unbeatable
        );
        assert!(matches!(
            "hard".parse::<Difficulty>(),
            Err(crate::Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_random_returns_unclaimed_edge() {
        let board = board_with(2, &[(0, 1), (1, 0)]);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let edge = select_edge(&board, Difficulty::Random, &mut rng).unwrap();
            assert!(!board.is_claimed(edge));
        }
    }

    #[test]
    fn test_greedy_takes_first_completion() {
        // Bottom-right cell (1, 1) has three sides; so does top-left (0, 0)
        let board = board_with(2, &[(2, 3), (3, 2), (3, 4), (0, 1), (1, 0), (2, 1)]);
        let mut rng = StdRng::seed_from_u64(0);

        let edge = select_edge(&board, Difficulty::Greedy, &mut rng).unwrap();
        assert_eq!(edge, Edge::new(1, 2), "first completing edge in board order");
    }

    #[test]
    fn test_unbeatable_avoids_third_side() {
        // Cell (0, 0) has two sides; claiming either remaining side would give it away
        let board = board_with(2, &[(0, 1), (1, 0)]);
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..50 {
            let edge = select_edge(&board, Difficulty::Unbeatable, &mut rng).unwrap();
            assert_ne!(edge, Edge::new(1, 2));
            assert_ne!(edge, Edge::new(2, 1));
        }
    }

    #[test]
    fn test_unbeatable_falls_back_when_nothing_is_safe() {
        // 1x1 with two sides taken: both remaining edges offer the cell
        let board = board_with(1, &[(0, 1), (2, 1)]);
        assert!(safe_edges(&board, &board.unclaimed_edges()).is_empty());

        let mut rng = StdRng::seed_from_u64(2);
        let edge = select_edge(&board, Difficulty::Unbeatable, &mut rng).unwrap();
        assert!(!board.is_claimed(edge));
    }

    #[test]
    fn test_unbeatable_takes_free_cell_first() {
        // Cell (1, 1) is missing only its left side (3, 2), which is also the
        // third side of cell (1, 0) and so never counts as safe
        let board = board_with(2, &[(2, 3), (4, 3), (3, 4), (4, 1), (3, 0)]);
        let unclaimed = board.unclaimed_edges();
        assert!(!safe_edges(&board, &unclaimed).contains(&Edge::new(3, 2)));
        assert!(!safe_edges(&board, &unclaimed).is_empty());

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let edge = select_edge(&board, Difficulty::Unbeatable, &mut rng).unwrap();
            assert_eq!(edge, Edge::new(3, 2), "seed {seed}");
        }
    }

    #[test]
    fn test_no_moves_on_full_board() {
        let mut board = BoardState::new(1).unwrap();
        for edge in board.unclaimed_edges() {
            board.claim(edge).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            select_edge(&board, Difficulty::Greedy, &mut rng),
            Err(crate::Error::NoMovesAvailable)
        ));
    }
}
