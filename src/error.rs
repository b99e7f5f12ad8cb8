//! Error types for the tictactoe-td crate

use std::fmt;

use thiserror::Error;

use crate::tictactoe::Player;

/// Why a move was rejected by the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    OutOfRange,
    Occupied,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfRange => write!(f, "coordinates must be between 0 and 2"),
            MoveRejection::Occupied => write!(f, "cell is already occupied"),
        }
    }
}

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move at ({x}, {y}): {reason}")]
    IllegalMove {
        x: usize,
        y: usize,
        reason: MoveRejection,
    },

    #[error("it is {expected:?}'s turn, but a move for {got:?} was supplied")]
    WrongTurn { expected: Player, got: Player },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("malformed input '{input}': {reason}")]
    MalformedInput { input: String, reason: String },

    #[error("input stream closed before a move was entered")]
    InputClosed,

    #[error("value table at {path}: {message}")]
    Persistence { path: String, message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("agent '{agent}' plays {actual:?} but was seated as {seat:?}")]
    SeatMismatch {
        agent: String,
        seat: Player,
        actual: Player,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

impl Error {
    /// Whether a human player can fix this by entering another move
    pub fn is_retryable_input(&self) -> bool {
        matches!(self, Error::MalformedInput { .. } | Error::IllegalMove { .. })
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
    fn illegal_move_message_names_the_cell() {
        let err = Error::IllegalMove {
            x: 2,
            y: 1,
            reason: MoveRejection::Occupied,
        };
        assert_eq!(err.to_string(), "illegal move at (2, 1): cell is already occupied");
        assert!(err.is_retryable_input());
    }

    #[test]
    fn persistence_errors_are_not_retryable() {
        let err = Error::Persistence {
            path: "table.json".to_string(),
            message: "missing".to_string(),
        };
        assert!(!err.is_retryable_input());
    }
}
