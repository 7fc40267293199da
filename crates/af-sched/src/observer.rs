//! Schedule observer trait for progress reporting and streaming output.

use af_core::{RouteId, Turn, UnitId};

use crate::MoveBatch;

/// Callbacks invoked by
/// [`MovementScheduler::schedule_with`][crate::MovementScheduler::schedule_with]
/// at key points in the turn loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — live move log
///
/// ```rust,ignore
/// struct Printer;
///
/// impl ScheduleObserver for Printer {
///     fn on_turn_end(&mut self, batch: &MoveBatch) {
///         println!("{}: {} moves", batch.turn, batch.len());
///     }
/// }
/// ```
pub trait ScheduleObserver {
    /// Called at the very start of each turn, before any unit moves.
    fn on_turn_start(&mut self, _turn: Turn) {}

    /// Called when `unit` enters the first room of `route`.
    fn on_admission(&mut self, _turn: Turn, _unit: UnitId, _route: RouteId) {}

    /// Called with the turn's moves once the turn is complete.
    fn on_turn_end(&mut self, _batch: &MoveBatch) {}

    /// Called once after every unit has finished.
    fn on_schedule_end(&mut self, _final_turn: Turn) {}
}

/// A [`ScheduleObserver`] that does nothing.
pub struct NoopObserver;

impl ScheduleObserver for NoopObserver {}
