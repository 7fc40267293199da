//! `af-core` — foundational types for the `antfarm` workspace.
//!
//! This crate is a dependency of every other `af-*` crate.  It has no `af-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                        |
//! |-----------|-------------------------------------------------|
//! | [`ids`]   | `UnitId`, `RoomId`, `LinkId`, `RouteId`         |
//! | [`turn`]  | `Turn` — 1-based discrete simulation step       |
//! | [`role`]  | `RoomRole` (normal / start / end)               |
//! | [`error`] | `CoreError`, `CoreResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod role;
pub mod turn;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{LinkId, RoomId, RouteId, UnitId};
pub use role::RoomRole;
pub use turn::Turn;
