//! Dots-and-boxes board: edges, cells, turn and per-player scores.
//!
//! Positions use a doubled grid of `(2N + 1) x (2N + 1)` points for an `N x N`
//! board. Dots sit where row and column are both even, cells where both are
//! odd, and edges everywhere else:
//!
//! ```text
//!   col 0 1 2 3 4
//! row 0 + - + - +
//!     1 | 1 | 2 |
//!     2 + - + - +
//! ```
//!
//! Horizontal edges have an even row, vertical edges an odd row. Cells are
//! addressed in cell space, `(0, 0)` through `(N - 1, N - 1)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One of the two players; player one always opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The player who moves when the turn passes
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    fn index(self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A line between two neighbouring dots, in doubled coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub row: usize,
    pub col: usize,
}

impl Edge {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_horizontal(&self) -> bool {
        self.row.is_multiple_of(2)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A unit square, in cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The four surrounding edges: up, down, left, right
    pub fn edges(&self) -> [Edge; 4] {
        let (r, c) = (2 * self.row + 1, 2 * self.col + 1);
        [
            Edge::new(r - 1, c),
            Edge::new(r + 1, c),
            Edge::new(r, c - 1),
            Edge::new(r, c + 1),
        ]
    }
}

/// Final result of a finished board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Player),
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{player} wins!"),
            Outcome::Tie => f.write_str("It's a tie!"),
        }
    }
}

/// Complete board state for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    size: usize,
    /// Indexed by `row * span + col`; only edge positions are ever set
    claimed: Vec<bool>,
    /// Indexed by `row * size + col` in cell space
    owners: Vec<Option<Player>>,
    current: Player,
    scores: [u32; 2],
}

impl BoardState {
    /// Create an empty `size x size` board with player one to move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for a zero size.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidConfiguration {
                message: "board size must be at least 1".to_string(),
            });
        }

        let span = 2 * size + 1;
        Ok(Self {
            size,
            claimed: vec![false; span * span],
            owners: vec![None; size * size],
            current: Player::One,
            scores: [0, 0],
        })
    }

    /// Cells per side
    pub fn size(&self) -> usize {
        self.size
    }

    /// Points per side of the doubled grid
    pub fn span(&self) -> usize {
        2 * self.size + 1
    }

    pub fn edge_count(&self) -> usize {
        2 * self.size * (self.size + 1)
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    pub fn contains_edge(&self, edge: Edge) -> bool {
        edge.row < self.span() && edge.col < self.span() && !(edge.row + edge.col).is_multiple_of(2)
    }

    fn check_edge(&self, edge: Edge) -> Result<()> {
        if self.contains_edge(edge) {
            Ok(())
        } else {
            Err(Error::InvalidEdge {
                row: edge.row,
                col: edge.col,
                size: self.size,
            })
        }
    }

    /// Every edge, row by row
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let span = self.span();
        (0..span)
            .flat_map(move |row| (0..span).map(move |col| Edge::new(row, col)))
            .filter(|&edge| self.contains_edge(edge))
    }

    /// Unclaimed edges in the same row-by-row order
    pub fn unclaimed_edges(&self) -> Vec<Edge> {
        self.edges().filter(|&edge| !self.is_claimed(edge)).collect()
    }

    pub fn is_claimed(&self, edge: Edge) -> bool {
        self.contains_edge(edge) && self.claimed[edge.row * self.span() + edge.col]
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Cell::new(row, col)))
    }

    /// Who completed `cell`; `None` while open or when off the board
    pub fn owner(&self, cell: Cell) -> Option<Player> {
        if cell.row >= self.size || cell.col >= self.size {
            return None;
        }
        self.owners[cell.row * self.size + cell.col]
    }

    /// Number of the cell's four edges already claimed
    pub fn claimed_sides(&self, cell: Cell) -> usize {
        cell.edges()
            .iter()
            .filter(|&&edge| self.is_claimed(edge))
            .count()
    }

    /// The one or two cells bordered by `edge`
    pub fn adjacent_cells(&self, edge: Edge) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(2);
        if !self.contains_edge(edge) {
            return cells;
        }
        if edge.is_horizontal() {
            let col = (edge.col - 1) / 2;
            let below = edge.row / 2;
            if below > 0 {
                cells.push(Cell::new(below - 1, col));
            }
            if below < self.size {
                cells.push(Cell::new(below, col));
            }
        } else {
            let row = (edge.row - 1) / 2;
            let right = edge.col / 2;
            if right > 0 {
                cells.push(Cell::new(row, right - 1));
            }
            if right < self.size {
                cells.push(Cell::new(row, right));
            }
        }
        cells
    }

    /// Claiming `edge` would finish at least one unowned cell.
    pub fn completes_cell(&self, edge: Edge) -> bool {
        !self.is_claimed(edge)
            && self
                .adjacent_cells(edge)
                .into_iter()
                .any(|cell| self.owner(cell).is_none() && self.claimed_sides(cell) == 3)
    }

    /// Claiming `edge` would leave an unowned cell with exactly three sides,
    /// handing it to the next mover.
    pub fn offers_cell(&self, edge: Edge) -> bool {
        !self.is_claimed(edge)
            && self
                .adjacent_cells(edge)
                .into_iter()
                .any(|cell| self.owner(cell).is_none() && self.claimed_sides(cell) == 2)
    }

    /// Claim `edge` for the player to move.
    ///
    /// Returns the cells this completed. They go to the mover, who keeps the
    /// turn; when nothing is completed the turn passes.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidEdge`] if `edge` is not an edge of this board
    /// - [`Error::EdgeAlreadyClaimed`] if it is taken; the board is unchanged
    pub fn claim(&mut self, edge: Edge) -> Result<Vec<Cell>> {
        self.check_edge(edge)?;
        if self.is_claimed(edge) {
            return Err(Error::EdgeAlreadyClaimed {
                row: edge.row,
                col: edge.col,
            });
        }

        let span = self.span();
        self.claimed[edge.row * span + edge.col] = true;

        let mover = self.current;
        let mut completed = Vec::new();
        for cell in self.adjacent_cells(edge) {
            if self.owner(cell).is_none() && self.claimed_sides(cell) == 4 {
                self.owners[cell.row * self.size + cell.col] = Some(mover);
                self.scores[mover.index()] += 1;
                completed.push(cell);
            }
        }

        if completed.is_empty() {
            self.current = mover.other();
        }
        Ok(completed)
    }

    pub fn owned_count(&self) -> usize {
        self.owners.iter().filter(|owner| owner.is_some()).count()
    }

    /// Every cell has an owner
    pub fn is_complete(&self) -> bool {
        self.owners.iter().all(Option::is_some)
    }

    /// Winner or tie once the board is complete
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_complete() {
            return None;
        }
        let (one, two) = (self.score(Player::One), self.score(Player::Two));
        Some(match one.cmp(&two) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::One),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Two),
            std::cmp::Ordering::Equal => Outcome::Tie,
        })
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.span();
        for row in 0..span {
            for col in 0..span {
                let edge = Edge::new(row, col);
                let text = match (row % 2, col % 2) {
                    (0, 0) => "+",
                    (0, _) if self.is_claimed(edge) => "---",
                    (0, _) => "   ",
                    (_, 0) if self.is_claimed(edge) => "|",
                    (_, 0) => " ",
                    _ => match self.owner(Cell::new(row / 2, col / 2)) {
                        Some(Player::One) => " 1 ",
                        Some(Player::Two) => " 2 ",
                        None => "   ",
                    },
                };
                f.write_str(text)?;
            }
            if row + 1 < span {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
