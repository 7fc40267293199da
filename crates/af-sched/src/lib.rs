//! `af-sched` — unit assignment and the turn loop.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`config`]    | `SchedulerConfig`, `Admission`, `Occupancy`                 |
//! | [`assign`]    | `Assignment` — greedy unit → route mapping                  |
//! | [`state`]     | `UnitState` — per-unit route position                       |
//! | [`occupancy`] | `OccupancyTable` — who holds which route slot / room        |
//! | [`batch`]     | `Move`, `MoveBatch`, `Schedule`                             |
//! | [`scheduler`] | `MovementScheduler` — drives the turn loop                  |
//! | [`observer`]  | `ScheduleObserver` callbacks, `NoopObserver`                |
//! | [`error`]     | `SchedError`, `SchedResult<T>`                              |
//!
//! # Turn model
//!
//! ```text
//! assign every unit to a route (greedy, lowest id first)
//! for turn in 1..:
//!   ① Advance — every placed, unfinished unit in ascending id order moves one
//!               room along its route if the next slot is free.  A unit that
//!               reaches the end room finishes and frees its slot.
//!   ② Admit   — the next unplaced unit enters position 1 of its route if
//!               that slot is free after ①.  Units admitted this turn do not
//!               also advance this turn.
//!   emit the turn's moves (admissions first, then advances by id)
//! until every unit has finished
//! ```
//!
//! By default occupancy is tracked per route only: units on different routes
//! never block one another even when both routes pass through the same room.
//! [`Occupancy::Room`] is the opt-in variant that also respects shared rooms.

pub mod assign;
pub mod batch;
pub mod config;
pub mod error;
pub mod observer;
pub mod occupancy;
pub mod scheduler;
pub mod state;


pub use assign::Assignment;
pub use batch::{Move, MoveBatch, Schedule};
pub use config::{Admission, Occupancy, SchedulerConfig};
pub use error::{SchedError, SchedResult};
pub use observer::{NoopObserver, ScheduleObserver};
pub use occupancy::OccupancyTable;
pub use scheduler::MovementScheduler;
pub use state::UnitState;
