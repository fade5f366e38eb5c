//! High-level game management

use std::fmt;

use rand::{SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::{
    board::{BoardState, Player, Status},
    lines::LineAnalyzer,
    opponent,
    timer::{Tick, TurnTimer},
};
use crate::{Error, Result, config::TicTacToeConfig, scores::Scoreboard};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
    /// `loser` let the turn countdown run out
    Timeout { loser: Player },
}

impl GameOutcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::Timeout { loser } => Some(loser.opponent()),
            GameOutcome::Draw => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "{player} wins!"),
            GameOutcome::Draw => f.write_str("It's a draw!"),
            GameOutcome::Timeout { loser } => {
                write!(f, "{} wins by timeout!", loser.opponent())
            }
        }
    }
}

/// What a successful move changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub position: usize,
    pub mark: Player,
    /// Set when this move ended the game
    pub outcome: Option<GameOutcome>,
    pub winning_line: Option<[usize; 3]>,
    /// Mark to move next, or `None` once the game is over
    pub next_to_move: Option<Player>,
    /// The computer should move next
    pub opponent_due: bool,
}

/// A tic-tac-toe session: one board at a time, scores across restarts.
///
/// # Examples
///
/// ```
/// use minigames::config::{GameMode, TicTacToeConfig};
/// use minigames::tictactoe::{Game, GameOutcome, Player};
///
/// let config = TicTacToeConfig::new().with_mode(GameMode::HumanVsHuman);
/// let mut game = Game::with_seed(config, 1)?;
///
/// for (pos, mark) in [(0, Player::X), (3, Player::O), (1, Player::X), (4, Player::O)] {
///     game.apply_cell_selection(pos, mark)?;
/// }
/// let result = game.apply_cell_selection(2, Player::X)?;
///
/// assert_eq!(result.outcome, Some(GameOutcome::Win(Player::X)));
/// assert_eq!(game.scores().x_wins, 1);
/// # Ok::<(), minigames::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    config: TicTacToeConfig,
    board: BoardState,
    timer: Option<TurnTimer>,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
    scores: Scoreboard,
    rng: StdRng,
}

impl Game {
    /// Start a session with a randomly seeded opponent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the config does not validate.
    pub fn new(config: TicTacToeConfig) -> Result<Self> {
        Self::with_seed(config, random())
    }

    /// Start a session whose computer moves are reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the config does not validate.
    pub fn with_seed(config: TicTacToeConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let mut game = Game {
            board: BoardState::new_with_player(config.first_mover()),
            timer: config.turn_seconds.map(TurnTimer::new),
            moves: Vec::new(),
            outcome: None,
            scores: Scoreboard::default(),
            rng: StdRng::seed_from_u64(seed),
            config,
        };
        game.restart();
        Ok(game)
    }

    /// Carry over scores from an earlier session.
    pub fn with_scores(mut self, scores: Scoreboard) -> Self {
        self.scores = scores;
        self
    }

    /// Discard the board and outcome and start the next game. Scores are kept.
    pub fn restart(&mut self) {
        self.board = BoardState::new_with_player(self.config.first_mover());
        self.moves.clear();
        self.outcome = None;
        if let Some(timer) = &mut self.timer {
            timer.restart();
        }
        log::info!(
            "new tic-tac-toe game ({}, {} opens)",
            self.config.mode,
            self.board.to_move
        );
    }

    /// Place `mark` at `position`.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] once the game has an outcome
    /// - [`Error::OutOfTurn`] if `mark` is not the mark to move
    /// - [`Error::InvalidPosition`] / [`Error::InvalidMove`] for a cell off the
    ///   board or already taken; the board is left unchanged
    pub fn apply_cell_selection(&mut self, position: usize, mark: Player) -> Result<MoveResult> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }
        if mark != self.board.to_move {
            return Err(Error::OutOfTurn {
                expected: self.board.to_move.to_string(),
                got: mark.to_string(),
            });
        }

        self.board = self.board.make_move(position)?;
        self.moves.push(Move {
            position,
            player: mark,
        });
        log::debug!("{mark} takes cell {position}");

        let outcome = match self.board.status() {
            Status::Won(winner) => Some(GameOutcome::Win(winner)),
            Status::Draw => Some(GameOutcome::Draw),
            Status::Ongoing => None,
        };

        match outcome {
            Some(outcome) => self.finish(outcome),
            None => {
                if let Some(timer) = &mut self.timer {
                    timer.restart();
                }
            }
        }

        Ok(MoveResult {
            position,
            mark,
            outcome,
            winning_line: LineAnalyzer::winning_line(&self.board.cells, mark),
            next_to_move: outcome.is_none().then_some(self.board.to_move),
            opponent_due: self.is_computer_turn(),
        })
    }

    /// Let the computer choose and play its move.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] once the game has an outcome
    /// - [`Error::NotComputerTurn`] in human-vs-human play or on a human turn
    pub fn play_opponent_move(&mut self) -> Result<MoveResult> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }
        let computer = match self.config.computer() {
            Some(mark) if mark == self.board.to_move => mark,
            _ => return Err(Error::NotComputerTurn),
        };

        let position =
            opponent::select_cell(&self.board, self.config.difficulty, computer, &mut self.rng)?;
        self.apply_cell_selection(position, computer)
    }

    /// Advance the turn countdown by one second.
    ///
    /// When it runs out the player to move loses and the result is scored.
    pub fn tick(&mut self) -> Tick {
        if self.outcome.is_some() {
            return Tick::Idle;
        }
        let Some(timer) = &mut self.timer else {
            return Tick::Idle;
        };

        let tick = timer.tick();
        if tick == Tick::Expired {
            let loser = self.board.to_move;
            log::info!("{loser} ran out of time");
            self.finish(GameOutcome::Timeout { loser });
        }
        tick
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.outcome = Some(outcome);
        if let Some(timer) = &mut self.timer {
            timer.stop();
        }
        self.scores.record(outcome);
        log::info!("game over: {outcome} (scores {:?})", self.scores);
    }

    /// True when the next move belongs to the computer
    pub fn is_computer_turn(&self) -> bool {
        self.outcome.is_none() && self.config.computer() == Some(self.board.to_move)
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.board.to_move
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn timer(&self) -> Option<&TurnTimer> {
        self.timer.as_ref()
    }

    pub fn config(&self) -> &TicTacToeConfig {
        &self.config
    }
}
