use af_graph::GraphError;
use af_sched::SchedError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("unit count must be at least 1")]
    InvalidUnitCount,

    /// Start and end are not connected (or one of them is missing).
    #[error("no route from start to end for {units} units")]
    NoRouteFound { units: u32 },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("scheduling failed: {0}")]
    Sched(#[from] SchedError),
}

pub type SolveResult<T> = Result<T, SolveError>;
