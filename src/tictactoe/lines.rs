//! The eight three-in-a-row lines and queries over them

use std::collections::BTreeSet;

use super::{Cell, Player};

/// Rows, then columns, then the two diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Line queries used by win detection and the medium opponent
pub struct LineAnalyzer;

impl LineAnalyzer {
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        Self::winning_line(cells, player).is_some()
    }

    /// First line, in [`WINNING_LINES`] order, filled by `player`
    pub fn winning_line(cells: &[Cell; 9], player: Player) -> Option<[usize; 3]> {
        let mark = player.to_cell();
        WINNING_LINES
            .into_iter()
            .find(|line| line.iter().all(|&pos| cells[pos] == mark))
    }

    /// Every empty cell that would complete a line for `player`
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> BTreeSet<usize> {
        WINNING_LINES
            .iter()
            .filter_map(|line| Self::completing_cell(cells, player, line))
            .collect()
    }

    pub fn first_winning_move(cells: &[Cell; 9], player: Player) -> Option<usize> {
        Self::winning_moves(cells, player).pop_first()
    }

    /// The empty cell of `line` when the other two hold `player`'s mark
    fn completing_cell(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let mark = player.to_cell();
        let owned = line.iter().filter(|&&pos| cells[pos] == mark).count();
        let mut empty = line.iter().copied().filter(|&pos| cells[pos] == Cell::Empty);

        match (owned, empty.next(), empty.next()) {
            (2, Some(pos), None) => Some(pos),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(marks: &[(usize, Cell)]) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for &(pos, cell) in marks {
            cells[pos] = cell;
        }
        cells
    }

    #[test]
    fn test_row_win_reports_its_line() {
        let board = cells(&[(3, Cell::X), (4, Cell::X), (5, Cell::X), (0, Cell::O)]);

        assert!(LineAnalyzer::has_won(&board, Player::X));
        assert!(!LineAnalyzer::has_won(&board, Player::O));
        assert_eq!(LineAnalyzer::winning_line(&board, Player::X), Some([3, 4, 5]));
    }

    #[test]
    fn test_anti_diagonal() {
        let board = cells(&[(2, Cell::O), (4, Cell::O), (6, Cell::O)]);
        assert_eq!(LineAnalyzer::winning_line(&board, Player::O), Some([2, 4, 6]));
    }

    #[test]
    fn test_two_threats_listed_in_order() {
        // XX.
        // X..
        // ...
        let board = cells(&[(0, Cell::X), (1, Cell::X), (3, Cell::X)]);

        let moves = LineAnalyzer::winning_moves(&board, Player::X);
        assert_eq!(moves.into_iter().collect::<Vec<_>>(), vec![2, 6]);
        assert_eq!(LineAnalyzer::first_winning_move(&board, Player::X), Some(2));
    }

    #[test]
    fn test_blocked_line_is_no_threat() {
        let board = cells(&[(0, Cell::X), (1, Cell::X), (2, Cell::O)]);
        assert_eq!(LineAnalyzer::first_winning_move(&board, Player::X), None);
        assert!(LineAnalyzer::winning_moves(&board, Player::O).is_empty());
    }
}
