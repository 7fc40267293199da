//! The `Solver` orchestrator and its result type.

use af_core::RouteId;
use af_graph::{BfsExtractor, Farm, Route, RouteExtractor, extract_routes, validate_route};
use af_sched::{MovementScheduler, NoopObserver, Schedule, ScheduleObserver, SchedulerConfig};

use crate::{SolveError, SolveResult};

/// Extracted routes plus the schedule played over them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub routes:   Vec<Route>,
    pub schedule: Schedule,
}

impl Solution {
    pub fn turn_count(&self) -> u32 {
        self.schedule.turn_count()
    }
}

/// Runs extraction and scheduling with a pluggable extractor.
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                |
/// |-----------------|----------------------------------------|
/// | `.config(c)`    | `SchedulerConfig::default()`           |
pub struct Solver<E: RouteExtractor> {
    extractor: E,
    config:    SchedulerConfig,
}

impl<E: RouteExtractor> Solver<E> {
    pub fn new(extractor: E) -> Self {
        Self { extractor, config: SchedulerConfig::default() }
    }

    /// Scheduler settings (admission and occupancy modes).
    pub fn config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn solve(&self, farm: &Farm) -> SolveResult<Solution> {
        self.solve_with(farm, &mut NoopObserver)
    }

    /// Solve `farm`, streaming each turn to `observer`.
    ///
    /// Nothing reaches the observer unless routes were found and validated.
    #[tracing::instrument(
        level = "debug",
        name = "solve",
        skip_all,
        fields(units = farm.unit_count, rooms = farm.colony.room_count(), links = farm.colony.link_count())
    )]
    pub fn solve_with<O: ScheduleObserver>(
        &self,
        farm:     &Farm,
        observer: &mut O,
    ) -> SolveResult<Solution> {
        if farm.unit_count == 0 {
            return Err(SolveError::InvalidUnitCount);
        }

        let colony = &farm.colony;
        let (Some(start), Some(end)) = (colony.start(), colony.end()) else {
            tracing::debug!("colony lacks a start or end room");
            return Err(SolveError::NoRouteFound { units: farm.unit_count });
        };
        let routes = extract_routes(colony, &self.extractor);
        if routes.is_empty() {
            return Err(SolveError::NoRouteFound { units: farm.unit_count });
        }
        for (i, route) in routes.iter().enumerate() {
            validate_route(colony, RouteId(i as u32), route, start, end)?;
        }
        tracing::info!(routes = routes.len(), "routes extracted");

        let schedule = MovementScheduler::new(self.config)
            .schedule_with(&routes, farm.unit_count, observer)?;
        tracing::info!(turns = schedule.turn_count(), "schedule built");

        Ok(Solution { routes, schedule })
    }
}

impl Default for Solver<BfsExtractor> {
    fn default() -> Self {
        Self::new(BfsExtractor)
    }
}

/// Solve with the default BFS extractor and scheduler settings.
pub fn solve(farm: &Farm) -> SolveResult<Solution> {
    Solver::default().solve(farm)
}
