//! Repository port for score persistence.
//!
//! This module defines the trait boundary between the game engines and
//! whatever key-value store keeps scores between sessions.

use crate::{Result, scores::Scoreboard};

/// Port for persisting and loading named score records.
///
/// Implementations decide where and how the record is stored. The engines
/// only ever see [`Scoreboard`] values.
///
/// # Examples
///
/// ```no_run
/// use minigames::ports::ScoreRepository;
/// use minigames::scores::Scoreboard;
///
/// fn bump_draws<R: ScoreRepository>(repo: &R) -> minigames::Result<()> {
///     let mut scores = repo.load("ttt-scores")?.unwrap_or_default();
///     scores.draws += 1;
///     repo.save("ttt-scores", &scores)
/// }
/// ```
pub trait ScoreRepository {
    /// Load the record stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The store cannot be read
    /// - The stored record cannot be parsed
    fn load(&self, key: &str) -> Result<Option<Scoreboard>>;

    /// Save `scores` under `key`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    fn save(&self, key: &str, scores: &Scoreboard) -> Result<()>;
}

impl<R: ScoreRepository + ?Sized> ScoreRepository for &R {
    fn load(&self, key: &str) -> Result<Option<Scoreboard>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, scores: &Scoreboard) -> Result<()> {
        (**self).save(key, scores)
    }
}
