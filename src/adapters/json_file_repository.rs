//! JSON file implementation of the score repository.
//!
//! Each record lives in its own `<dir>/<key>.json` file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{Result, error::Error, ports::ScoreRepository, scores::Scoreboard};

/// File-backed score repository.
///
/// # Examples
///
/// ```no_run
/// use minigames::adapters::JsonFileRepository;
/// use minigames::ports::ScoreRepository;
/// use minigames::scores::Scoreboard;
///
/// let repo = JsonFileRepository::new(".");
/// repo.save("ttt-scores", &Scoreboard::default())?;
/// let loaded = repo.load("ttt-scores")?;
/// # Ok::<(), minigames::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    dir: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the record for `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ScoreRepository for JsonFileRepository {
    fn load(&self, key: &str) -> Result<Option<Scoreboard>> {
        let path = self.path_for(key);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::Io {
                    operation: format!("read scores from {path:?}"),
                    source,
                });
            }
        };

        Ok(Some(serde_json::from_str(&text)?))
    }

    fn save(&self, key: &str, scores: &Scoreboard) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| Error::Io {
            operation: format!("create directory {:?}", self.dir),
            source,
        })?;

        let path = self.path_for(key);
        let text = serde_json::to_string(scores)?;
        fs::write(&path, text).map_err(|source| Error::Io {
            operation: format!("write scores to {path:?}"),
            source,
        })
    }
}
