//! Error types for the minigames crate

use thiserror::Error;

/// Main error type for the minigames crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid move: edge ({row}, {col}) is already claimed")]
    EdgeAlreadyClaimed { row: usize, col: usize },

    #[error("({row}, {col}) is not an edge on a {size}x{size} board")]
    InvalidEdge { row: usize, col: usize, size: usize },

    #[error("game already over")]
    GameOver,

    #[error("out of turn: expected {expected} to move, got {got}")]
    OutOfTurn { expected: String, got: String },

    #[error("the computer is not the player to move")]
    NotComputerTurn,

    #[error("no legal moves available")]
    NoMovesAvailable,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Build an [`Error::InvalidConfiguration`] for an unrecognised option token.
    pub(crate) fn unknown_option(kind: &str, input: &str, expected: &str) -> Self {
        Error::InvalidConfiguration {
            message: format!("unknown {kind} '{input}' (expected one of: {expected})"),
        }
    }

    /// True for errors caused by a move the rules do not allow.
    ///
    /// Interactive hosts treat these as a no-op instead of reporting them.
    pub fn is_rejected_move(&self) -> bool {
        matches!(
            self,
            Error::InvalidMove { .. }
                | Error::EdgeAlreadyClaimed { .. }
                | Error::InvalidPosition { .. }
                | Error::InvalidEdge { .. }
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_option_is_configuration_error() {
        let err = Error::unknown_option("difficulty", "nightmare", "easy, medium, hard");
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("nightmare"));
    }

    #[test]
    fn test_rejected_move_classification() {
        assert!(Error::InvalidMove { position: 4 }.is_rejected_move());
        assert!(Error::EdgeAlreadyClaimed { row: 0, col: 1 }.is_rejected_move());
        assert!(!Error::GameOver.is_rejected_move());
        assert!(!Error::NoMovesAvailable.is_rejected_move());
    }
}
