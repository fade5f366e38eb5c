//! Dots-and-boxes session management

use rand::{SeedableRng, random, rngs::StdRng};

use super::{
    board::{BoardState, Cell, Edge, Outcome, Player},
    opponent,
};
use crate::{Error, Result, config::DotsConfig};

/// What a successful edge selection changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub edge: Edge,
    pub player: Player,
    /// Cells finished by this edge, now owned by `player`
    pub completed: Vec<Cell>,
    /// False when the mover completed a cell and keeps the turn
    pub turn_passed: bool,
    /// Set when this edge finished the last cell
    pub outcome: Option<Outcome>,
    /// The computer should move next
    pub opponent_due: bool,
}

/// A dots-and-boxes session.
///
/// # Examples
///
/// ```
/// use minigames::config::{DotsConfig, GameMode};
/// use minigames::dots::{Edge, Game, Player};
///
/// let config = DotsConfig::new(2).with_mode(GameMode::HumanVsHuman);
/// let mut game = Game::with_seed(config, 0)?;
///
/// let result = game.apply_edge_selection(Edge::new(0, 1))?;
/// assert!(result.turn_passed);
/// assert_eq!(game.board().current_player(), Player::Two);
/// # Ok::<(), minigames::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    config: DotsConfig,
    board: BoardState,
    moves: Vec<Edge>,
    rng: StdRng,
}

impl Game {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the config does not validate.
    pub fn new(config: DotsConfig) -> Result<Self> {
        Self::with_seed(config, random())
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the config does not validate.
    pub fn with_seed(config: DotsConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let board = BoardState::new(config.size)?;
        log::info!(
            "new dots-and-boxes game ({0}x{0}, {1})",
            config.size,
            config.mode
        );

        Ok(Self {
            config,
            board,
            moves: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Discard the board and start again with player one.
    ///
    /// # Errors
    ///
    /// Returns an error only if the stored size has become invalid.
    pub fn restart(&mut self) -> Result<()> {
        self.board = BoardState::new(self.config.size)?;
        self.moves.clear();
        log::info!("dots-and-boxes restarted");
        Ok(())
    }

    /// Claim `edge` for the player to move.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] once every cell is owned
    /// - [`Error::InvalidEdge`] / [`Error::EdgeAlreadyClaimed`] for an edge
    ///   that is not on the board or already taken; nothing changes
    pub fn apply_edge_selection(&mut self, edge: Edge) -> Result<MoveResult> {
        if self.board.is_complete() {
            return Err(Error::GameOver);
        }

        let player = self.board.current_player();
        let completed = self.board.claim(edge)?;
        self.moves.push(edge);

        if completed.is_empty() {
            log::debug!("{player} claims {edge}");
        } else {
            log::debug!("{player} claims {edge} and completes {completed:?}");
        }

        let outcome = self.board.outcome();
        if let Some(outcome) = outcome {
            log::info!(
                "game over: {outcome} ({} - {})",
                self.board.score(Player::One),
                self.board.score(Player::Two)
            );
        }

        Ok(MoveResult {
            edge,
            player,
            turn_passed: completed.is_empty(),
            completed,
            outcome,
            opponent_due: self.is_computer_turn(),
        })
    }

    /// Let the computer choose and claim its edge.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] once every cell is owned
    /// - [`Error::NotComputerTurn`] in human-vs-human play or on a human turn
    pub fn play_opponent_move(&mut self) -> Result<MoveResult> {
        if self.board.is_complete() {
            return Err(Error::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(Error::NotComputerTurn);
        }

        let edge = opponent::select_edge(&self.board, self.config.difficulty, &mut self.rng)?;
        self.apply_edge_selection(edge)
    }

    /// True when the next edge belongs to the computer
    pub fn is_computer_turn(&self) -> bool {
        !self.board.is_complete() && self.config.computer() == Some(self.board.current_player())
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome()
    }

    /// Cells owned by player one and player two
    pub fn scores(&self) -> (u32, u32) {
        (
            self.board.score(Player::One),
            self.board.score(Player::Two),
        )
    }

    pub fn moves(&self) -> &[Edge] {
        &self.moves
    }

    pub fn config(&self) -> &DotsConfig {
        &self.config
    }
}
