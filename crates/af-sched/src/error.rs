use af_core::{RouteId, Turn};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedError {
    #[error("unit count must be at least 1")]
    InvalidUnitCount,

    /// No unit could ever be placed; scheduling would never terminate.
    #[error("cannot schedule {units} units without any route")]
    NoRoutes { units: u32 },

    #[error("route {0} has no room after the start room")]
    DegenerateRoute(RouteId),

    /// A turn with unfinished units produced no move.  Only reachable when
    /// occupancy is tracked per room, where routes can block each other.
    #[error("schedule stalled on {turn} with {unfinished} units unfinished")]
    Stalled { turn: Turn, unfinished: u32 },
}

pub type SchedResult<T> = Result<T, SchedError>;
