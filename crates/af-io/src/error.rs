//! Error types for af-io.

use af_graph::GraphError;
use thiserror::Error;

/// Errors raised while reading a farm or writing a move log.
#[derive(Debug, Error)]
pub enum FarmError {
    #[error(
        "line {line}: invalid unit count {value:?}: expected an integer in 1..={max}",
        max = crate::parse::MAX_UNIT_COUNT
    )]
    InvalidUnitCount { line: usize, value: String },

    #[error("no unit count found")]
    MissingUnitCount,

    #[error("line {line}: invalid coordinate {value:?} for room {room:?}")]
    InvalidCoordinate { line: usize, room: String, value: String },

    #[error("line {line}: invalid room name {name:?}")]
    InvalidRoomName { line: usize, name: String },

    #[error("line {line}: malformed link {text:?}: expected \"room-room\"")]
    MalformedLink { line: usize, text: String },

    #[error("colony error: {0}")]
    Graph(#[from] GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Alias for `Result<T, FarmError>`.
pub type FarmResult<T> = Result<T, FarmError>;
