//! In-memory score repository for testing.
//!
//! Records are kept as JSON text, exactly as the file adapter writes them,
//! so tests can plant damaged records with [`InMemoryRepository::insert_raw`].

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{Result, ports::ScoreRepository, scores::Scoreboard};

/// In-memory repository for testing.
///
/// All clones share the same underlying storage.
///
/// # Examples
///
/// ```
/// use minigames::adapters::InMemoryRepository;
/// use minigames::ports::ScoreRepository;
/// use minigames::scores::Scoreboard;
///
/// let repo = InMemoryRepository::new();
/// repo.save("ttt-scores", &Scoreboard { x_wins: 1, o_wins: 0, draws: 0 })?;
///
/// let loaded = repo.load("ttt-scores")?.expect("record was saved");
/// assert_eq!(loaded.x_wins, 1);
/// # Ok::<(), minigames::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store raw text under `key`, bypassing serialization.
    pub fn insert_raw(&self, key: &str, text: &str) {
        self.storage().insert(key.to_string(), text.to_string());
    }

    /// Raw text stored under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.storage().get(key).cloned()
    }

    /// Get the number of records currently stored.
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.storage().contains_key(key)
    }
}

impl ScoreRepository for InMemoryRepository {
    fn load(&self, key: &str) -> Result<Option<Scoreboard>> {
        match self.storage().get(key) {
            Some(text) => Ok(Some(serde_json::from_str(text)?)),
            None => Ok(None),
        }
    }

    fn save(&self, key: &str, scores: &Scoreboard) -> Result<()> {
        let text = serde_json::to_string(scores)?;
        self.storage().insert(key.to_string(), text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_save_and_load() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.count(), 0);
        assert!(repo.load("scores").unwrap().is_none());

        let scores = Scoreboard {
            x_wins: 2,
            o_wins: 3,
            draws: 4,
        };
        repo.save("scores", &scores).unwrap();

        assert!(repo.contains("scores"));
        assert_eq!(repo.load("scores").unwrap(), Some(scores));
        assert_eq!(repo.raw("scores").unwrap(), r#"{"x":2,"o":3,"draws":4}"#);
    }

    #[test]
    fn test_corrupt_record_is_an_error() {
        let repo = InMemoryRepository::new();
        repo.insert_raw("scores", "[1, 2");
        assert!(repo.load("scores").is_err());
    }

    #[test]
    fn test_clone_shares_storage() {
        let repo1 = InMemoryRepository::new();
        let repo2 = repo1.clone();

        repo1.save("shared", &Scoreboard::default()).unwrap();

        assert!(repo2.load("shared").unwrap().is_some());
        assert_eq!(repo2.count(), 1);
    }
}
