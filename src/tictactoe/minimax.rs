//! Exhaustive minimax search over the remaining game tree.
//!
//! Scores are taken from the computer's point of view: a finished game won by
//! the computer is worth [`WIN_SCORE`], one won by its opponent `-WIN_SCORE`,
//! and a draw is worth zero. There is no depth discount, so a quick win and a
//! slow win score the same.
//!
//! The search never mutates the caller's board. `BoardState` is `Copy`, so every
//! branch works on its own copy and sibling branches cannot observe each other.

use super::{BoardState, Player, Status};

/// Terminal value of a won game
pub const WIN_SCORE: i32 = 10;

/// Score a finished board for `computer`, or `None` while play continues.
fn terminal_score(board: &BoardState, computer: Player) -> Option<i32> {
    match board.status() {
        Status::Won(winner) if winner == computer => Some(WIN_SCORE),
        Status::Won(_) => Some(-WIN_SCORE),
        Status::Draw => Some(0),
        Status::Ongoing => None,
    }
}

/// Minimax value of `board` for `computer`.
///
/// When `maximizing` is true the computer places the next mark, otherwise its
/// opponent does. Layers alternate until every branch reaches a terminal state.
pub fn minimax(board: &BoardState, computer: Player, maximizing: bool) -> i32 {
    if let Some(score) = terminal_score(board, computer) {
        return score;
    }

    let mark = if maximizing {
        computer
    } else {
        computer.opponent()
    };

    let children = board
        .empty_positions()
        .into_iter()
        .filter_map(|pos| board.with_mark(pos, mark).ok())
        .map(|child| minimax(&child, computer, !maximizing));

    if maximizing {
        children.max().unwrap_or(0)
    } else {
        children.min().unwrap_or(0)
    }
}

/// Score every empty cell as a move for `computer`, in ascending cell order.
pub fn scored_moves(board: &BoardState, computer: Player) -> Vec<(usize, i32)> {
    board
        .empty_positions()
        .into_iter()
        .filter_map(|pos| {
            let child = board.with_mark(pos, computer).ok()?;
            Some((pos, minimax(&child, computer, false)))
        })
        .collect()
}

/// Pick the highest scoring cell for `computer`.
///
/// Ties go to the lowest index.
///
/// # Errors
///
/// Returns [`crate::Error::NoMovesAvailable`] if the board has no empty cell.
pub fn best_move(board: &BoardState, computer: Player) -> crate::Result<usize> {
    let mut best: Option<(usize, i32)> = None;

    for (pos, score) in scored_moves(board, computer) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((pos, score)),
        }
    }

    best.map(|(pos, _)| pos)
        .ok_or(crate::Error::NoMovesAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_scores() {
        let won = BoardState::from_string("OOO XX. X..", Player::X).unwrap();
        assert_eq!(minimax(&won, Player::O, true), WIN_SCORE);
        assert_eq!(minimax(&won, Player::X, true), -WIN_SCORE);

        let drawn = BoardState::from_string("XOX XOO OXX", Player::O).unwrap();
        assert_eq!(minimax(&drawn, Player::O, false), 0);
    }

    #[test]
    fn test_takes_immediate_win() {
        // O can win at 2; X threatens at 6
        let board = BoardState::from_string("OO. X.. .XX", Player::O).unwrap();
        let pos = best_move(&board, Player::O).unwrap();
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_blocks_forced_loss() {
        // X threatens 2; every other move loses
        let board = BoardState::from_string("XX. .O. ...", Player::O).unwrap();
        assert_eq!(best_move(&board, Player::O).unwrap(), 2);
    }

    #[test]
    fn test_center_reply_scores() {
        let board = BoardState::from_string("... .X. ...", Player::O).unwrap();
        let scores = scored_moves(&board, Player::O);

        for (pos, score) in scores {
            if [0, 2, 6, 8].contains(&pos) {
                assert_eq!(score, 0, "corner {pos} should hold the draw");
            } else {
                assert!(score < 0, "edge {pos} should lose against best play");
            }
        }
    }

    #[test]
    fn test_does_not_mutate_input() {
        let board = BoardState::from_string("X.. .O. ..X", Player::O).unwrap();
        let before = board;
        let _ = best_move(&board, Player::O).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let drawn = BoardState::from_string("XOX XOO OXX", Player::O).unwrap();
        assert!(matches!(
            best_move(&drawn, Player::O),
            Err(crate::Error::NoMovesAvailable)
        ));
    }
}
