//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors produced by `af-core` helpers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// More items than a `u32` id can address.
    #[error("too many {what}: index {index} does not fit in a {what} id")]
    IdOverflow { what: &'static str, index: usize },

    #[error("unknown room marker {0:?}: expected \"##start\" or \"##end\"")]
    UnknownMarker(String),
}

/// Shorthand result type for `af-core`.
pub type CoreResult<T> = Result<T, CoreError>;
