//! Graph-subsystem error type.

use thiserror::Error;

use af_core::{CoreError, RouteId};

/// Errors produced by `af-graph`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("room {0:?} is declared more than once")]
    DuplicateRoom(String),

    #[error("link {from:?}-{to:?} names undeclared room {missing:?}")]
    UnknownRoom { from: String, to: String, missing: String },

    /// A route that does not run start → end over real links.  Only an
    /// extractor defect can produce one.
    #[error("route {route} is malformed at position {position}: {reason}")]
    MalformedRoute { route: RouteId, position: usize, reason: &'static str },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type GraphResult<T> = Result<T, GraphError>;
