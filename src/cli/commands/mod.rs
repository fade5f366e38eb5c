//! Subcommand implementations

pub mod dots;
pub mod scores;
pub mod simulate;
pub mod tictactoe;

use std::path::PathBuf;

/// Directory holding score files when `--data-dir` is not given
pub fn default_data_dir() -> PathBuf {
    std::env::var_os("MINIGAMES_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".minigames"))
}
