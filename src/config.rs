//! Configuration types for starting a game.
//!
//! Both configs are plain serde structs with builder-style setters, so a host
//! can fill them from flags, a JSON file, or code.
//!
//! # Examples
//!
//! ```
//! use minigames::config::{GameMode, TicTacToeConfig};
//! use minigames::tictactoe::{Difficulty, Player};
//!
//! let config = TicTacToeConfig::new()
//!     .with_mode(GameMode::HumanVsComputer)
//!     .with_difficulty(Difficulty::Medium)
//!     .with_human(Player::O);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.computer(), Some(Player::X));
//! ```

use std::{fmt, fs, path::Path, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{Error, Result, dots, tictactoe};

/// Delay before a computer move is applied, in milliseconds
pub const DEFAULT_OPPONENT_DELAY_MS: u64 = 300;

/// Largest dots-and-boxes grid accepted, in cells per side
pub const MAX_DOTS_SIZE: usize = 10;

/// Default dots-and-boxes grid, in cells per side
pub const DEFAULT_DOTS_SIZE: usize = 3;

/// Who sits on the other side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    HumanVsHuman,
    #[default]
    HumanVsComputer,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameMode::HumanVsHuman => "human-vs-human",
            GameMode::HumanVsComputer => "human-vs-computer",
        })
    }
}

impl FromStr for GameMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hvh" | "pvp" | "human-vs-human" => Ok(GameMode::HumanVsHuman),
            "hvc" | "pve" | "human-vs-computer" => Ok(GameMode::HumanVsComputer),
            _ => Err(Error::unknown_option(
                "game mode",
                s,
                "hvh/pvp/human-vs-human, hvc/pve/human-vs-computer",
            )),
        }
    }
}

/// Settings for a tic-tac-toe session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeConfig {
    pub mode: GameMode,
    /// Strength of the computer; ignored in human-vs-human games
    pub difficulty: tictactoe::Difficulty,
    /// Mark controlled by the human in human-vs-computer games
    pub human: tictactoe::Player,
    /// Mark that opens each game. Defaults to the human's mark, or X when
    /// two humans play.
    pub first: Option<tictactoe::Player>,
    /// Seconds per turn; `None` disables the countdown
    pub turn_seconds: Option<u32>,
    pub opponent_delay_ms: u64,
}

impl TicTacToeConfig {
    pub fn new() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: tictactoe::Difficulty::default(),
            human: tictactoe::Player::X,
            first: None,
            turn_seconds: Some(tictactoe::timer::DEFAULT_TURN_SECONDS),
            opponent_delay_ms: DEFAULT_OPPONENT_DELAY_MS,
        }
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_difficulty(mut self, difficulty: tictactoe::Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_human(mut self, human: tictactoe::Player) -> Self {
        self.human = human;
        self
    }

    pub fn with_first(mut self, first: tictactoe::Player) -> Self {
        self.first = Some(first);
        self
    }

    pub fn with_turn_seconds(mut self, seconds: Option<u32>) -> Self {
        self.turn_seconds = seconds;
        self
    }

    pub fn with_opponent_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Check the settings before a game is built from them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for a zero-second turn.
    pub fn validate(&self) -> Result<()> {
        if self.turn_seconds == Some(0) {
            return Err(Error::InvalidConfiguration {
                message: "turn_seconds must be at least 1 (use none to disable the timer)"
                    .to_string(),
            });
        }
        Ok(())
    }

    /// Mark that moves first in every game
    pub fn first_mover(&self) -> tictactoe::Player {
        match (self.first, self.mode) {
            (Some(first), _) => first,
            (None, GameMode::HumanVsComputer) => self.human,
            (None, GameMode::HumanVsHuman) => tictactoe::Player::X,
        }
    }

    /// Mark played by the computer, if there is one
    pub fn computer(&self) -> Option<tictactoe::Player> {
        match self.mode {
            GameMode::HumanVsComputer => Some(self.human.opponent()),
            GameMode::HumanVsHuman => None,
        }
    }

    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings for a dots-and-boxes session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotsConfig {
    /// Cells per side
    pub size: usize,
    pub mode: GameMode,
    /// Strength of the computer (always player 2); ignored in human-vs-human games
    pub difficulty: dots::Difficulty,
    pub opponent_delay_ms: u64,
}

impl DotsConfig {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            mode: GameMode::default(),
            difficulty: dots::Difficulty::default(),
            opponent_delay_ms: DEFAULT_OPPONENT_DELAY_MS,
        }
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_difficulty(mut self, difficulty: dots::Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_opponent_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the size is outside `1..=MAX_DOTS_SIZE`.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_DOTS_SIZE).contains(&self.size) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "board size {} is out of range (must be 1-{MAX_DOTS_SIZE})",
                    self.size
                ),
            });
        }
        Ok(())
    }

    /// Player controlled by the computer, if there is one
    pub fn computer(&self) -> Option<dots::Player> {
        match self.mode {
            GameMode::HumanVsComputer => Some(dots::Player::Two),
            GameMode::HumanVsHuman => None,
        }
    }

    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }
}

impl Default for DotsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DOTS_SIZE)
    }
}

/// Read a JSON config file.
///
/// Missing fields take their defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON for `T`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        operation: format!("read config file {path:?}"),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn test_game_mode_from_str() {
        assert_eq!("pve".parse::<GameMode>().unwrap(), GameMode::HumanVsComputer);
        assert_eq!("HvH".parse::<GameMode>().unwrap(), GameMode::HumanVsHuman);
        assert!(matches!(
            "online".parse::<GameMode>(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_tictactoe_defaults() {
        let config = TicTacToeConfig::default();
        assert_eq!(config.mode, GameMode::HumanVsComputer);
        assert_eq!(config.turn_seconds, Some(30));
        assert_eq!(config.first_mover(), Player::X);
        assert_eq!(config.computer(), Some(Player::O));
        assert_eq!(config.opponent_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_human_o_opens_by_default() {
        let config = TicTacToeConfig::new().with_human(Player::O);
        assert_eq!(config.first_mover(), Player::O);

        let config = config.with_first(Player::X);
        assert_eq!(config.first_mover(), Player::X);
    }

    #[test]
    fn test_human_vs_human_has_no_computer() {
        let config = TicTacToeConfig::new()
            .with_mode(GameMode::HumanVsHuman)
            .with_human(Player::O);
        assert_eq!(config.computer(), None);
        assert_eq!(config.first_mover(), Player::X);
    }

    #[test]
    fn test_zero_turn_seconds_rejected() {
        let config = TicTacToeConfig::new().with_turn_seconds(Some(0));
        assert!(config.validate().is_err());
        assert!(
            TicTacToeConfig::new()
                .with_turn_seconds(None)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_dots_size_range() {
        assert!(DotsConfig::new(0).validate().is_err());
        assert!(DotsConfig::new(1).validate().is_ok());
        assert!(DotsConfig::new(MAX_DOTS_SIZE).validate().is_ok());
        assert!(DotsConfig::new(MAX_DOTS_SIZE + 1).validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TicTacToeConfig =
            serde_json::from_str(r#"{"difficulty":"medium","human":"o"}"#).unwrap();
        assert_eq!(config.difficulty, crate::tictactoe::Difficulty::Medium);
        assert_eq!(config.human, Player::O);
        assert_eq!(config.turn_seconds, Some(30));

        let dots: DotsConfig = serde_json::from_str(r#"{"size":5,"mode":"human-vs-human"}"#).unwrap();
        assert_eq!(dots.size, 5);
        assert_eq!(dots.computer(), None);
    }

    #[test]
    fn test_unknown_difficulty_in_json_rejected() {
        let result: std::result::Result<TicTacToeConfig, _> =
            serde_json::from_str(r#"{"difficulty":"godlike"}"#);
        assert!(result.is_err());
    }
}
