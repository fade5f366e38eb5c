//! Cumulative tic-tac-toe results and their persistence.

use serde::{Deserialize, Serialize};

use crate::{Result, ports::ScoreRepository, tictactoe::GameOutcome, tictactoe::Player};

/// Record name used for tic-tac-toe scores
pub const TICTACTOE_SCORES_KEY: &str = "ttt-scores";

/// Win and draw counts across games.
///
/// Stored as the flat JSON object `{"x": 3, "o": 1, "draws": 2}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    #[serde(rename = "x", default)]
    pub x_wins: u32,
    #[serde(rename = "o", default)]
    pub o_wins: u32,
    #[serde(default)]
    pub draws: u32,
}

impl Scoreboard {
    /// Count a finished game. Timeouts credit the mark that was waiting.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// A named score record in a [`ScoreRepository`].
///
/// # Examples
///
/// ```
/// use minigames::adapters::InMemoryRepository;
/// use minigames::scores::{ScoreStore, Scoreboard};
///
/// let store = ScoreStore::new(InMemoryRepository::new(), "ttt-scores");
/// assert_eq!(store.load_or_reset(), Scoreboard::default());
///
/// let scores = Scoreboard { x_wins: 2, o_wins: 1, draws: 0 };
/// store.save(&scores)?;
/// assert_eq!(store.load_or_reset(), scores);
/// # Ok::<(), minigames::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScoreStore<R> {
    repository: R,
    key: String,
}

impl<R: ScoreRepository> ScoreStore<R> {
    pub fn new(repository: R, key: impl Into<String>) -> Self {
        Self {
            repository,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the record, starting from zero when it is missing or unreadable.
    ///
    /// A damaged record never blocks startup; it is logged and replaced by
    /// zero counts on the next save.
    pub fn load_or_reset(&self) -> Scoreboard {
        match self.repository.load(&self.key) {
            Ok(Some(scores)) => {
                log::debug!("loaded scores '{}': {scores:?}", self.key);
                scores
            }
            Ok(None) => Scoreboard::default(),
            Err(err) => {
                log::warn!("resetting scores '{}' after load failure: {err}", self.key);
                Scoreboard::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if the repository cannot write the record.
    pub fn save(&self, scores: &Scoreboard) -> Result<()> {
        self.repository.save(&self.key, scores)
    }

    /// Overwrite the record with zero counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot write the record.
    pub fn reset(&self) -> Result<Scoreboard> {
        let scores = Scoreboard::default();
        self.save(&scores)?;
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryRepository;

    #[test]
    fn test_record_outcomes() {
        let mut scores = Scoreboard::default();
        scores.record(GameOutcome::Win(Player::X));
        scores.record(GameOutcome::Draw);
        scores.record(GameOutcome::Timeout { loser: Player::X });

        assert_eq!(scores.x_wins, 1);
        assert_eq!(scores.o_wins, 1);
        assert_eq!(scores.draws, 1);
        assert_eq!(scores.games(), 3);
    }

    #[test]
    fn test_json_shape() {
        let scores = Scoreboard {
            x_wins: 3,
            o_wins: 1,
            draws: 2,
        };
        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, r#"{"x":3,"o":1,"draws":2}"#);
    }

    #[test]
    fn test_corrupt_record_resets() {
        let repo = InMemoryRepository::new();
        repo.insert_raw(TICTACTOE_SCORES_KEY, "{not json");
        let store = ScoreStore::new(repo, TICTACTOE_SCORES_KEY);

        assert_eq!(store.load_or_reset(), Scoreboard::default());
    }

    #[test]
    fn test_reset_overwrites() {
        let store = ScoreStore::new(InMemoryRepository::new(), "scores");
        store
            .save(&Scoreboard {
                x_wins: 5,
                o_wins: 0,
                draws: 0,
            })
            .unwrap();

        store.reset().unwrap();
        assert_eq!(store.load_or_reset().games(), 0);
    }
}
