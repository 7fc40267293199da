//! `af-graph` — colony graph, route extraction, and route validation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`colony`]  | `Colony` (rooms + undirected links), `ColonyBuilder`, `Farm` |
//! | [`route`]   | `Route`, `validate_route`                                   |
//! | [`extract`] | `RouteExtractor` trait, `BfsExtractor`, `LinkMask`          |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | Uses `rustc_hash::FxHashMap` for the room-name index.      |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public types.          |

pub mod colony;
pub mod error;
pub mod extract;
pub mod route;

#[cfg(test)]
mod tests;

pub use colony::{Colony, ColonyBuilder, Farm, Link, Room};
pub use error::{GraphError, GraphResult};
pub use extract::{BfsExtractor, LinkMask, RouteExtractor, extract_routes, extract_with_mask};
pub use route::{Route, validate_route};
