//! The `MovementScheduler` and its turn loop.

use af_core::{RouteId, Turn, UnitId};
use af_graph::Route;

use crate::{
    Admission, Assignment, Move, MoveBatch, NoopObserver, OccupancyTable, Schedule,
    ScheduleObserver, SchedError, SchedResult, SchedulerConfig, UnitState,
};

/// Assigns units to routes and plays the turn loop to completion.
///
/// The schedule depends only on the routes (and their order), the unit
/// count, and the [`SchedulerConfig`]; running it twice gives identical
/// batches.
///
/// # Example
///
/// ```rust,ignore
/// let routes = extract_routes(&colony, &BfsExtractor);
/// let schedule = MovementScheduler::default().schedule(&routes, 10)?;
/// println!("{} turns", schedule.turn_count());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementScheduler {
    config: SchedulerConfig,
}

impl MovementScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SchedulerConfig {
        self.config
    }

    /// Schedule `unit_count` units over `routes` without callbacks.
    pub fn schedule(&self, routes: &[Route], unit_count: u32) -> SchedResult<Schedule> {
        self.schedule_with(routes, unit_count, &mut NoopObserver)
    }

    /// Schedule `unit_count` units over `routes`, reporting each turn to
    /// `observer`.
    ///
    /// # Errors
    ///
    /// - [`SchedError::InvalidUnitCount`] for `unit_count == 0`.
    /// - [`SchedError::NoRoutes`] when `routes` is empty; checked before the
    ///   first turn because no unit could ever be placed.
    /// - [`SchedError::DegenerateRoute`] for a route without a room after
    ///   its start.
    /// - [`SchedError::Stalled`] if a turn makes no progress.
    pub fn schedule_with<O: ScheduleObserver>(
        &self,
        routes:     &[Route],
        unit_count: u32,
        observer:   &mut O,
    ) -> SchedResult<Schedule> {
        if unit_count == 0 {
            return Err(SchedError::InvalidUnitCount);
        }
        if let Some(i) = routes.iter().position(|r| r.rooms.len() < 2) {
            return Err(SchedError::DegenerateRoute(RouteId(i as u32)));
        }
        let assignment = Assignment::greedy(routes, unit_count)?;

        let mut run = TurnLoop::new(self.config, routes, &assignment);
        let mut batches = Vec::new();
        let mut turn = Turn::FIRST;

        while run.finished < unit_count {
            observer.on_turn_start(turn);
            let batch = run.step(turn, observer)?;
            tracing::trace!(turn = turn.0, moves = batch.len(), finished = run.finished, "turn");
            observer.on_turn_end(&batch);
            batches.push(batch);
            turn = turn.next();
        }

        let schedule = Schedule { assignment, batches };
        tracing::debug!(
            units = unit_count,
            routes = routes.len(),
            turns = schedule.turn_count(),
            "schedule complete"
        );
        observer.on_schedule_end(schedule.final_turn());
        Ok(schedule)
    }
}

// ── Turn loop state ───────────────────────────────────────────────────────────

/// Mutable state of one scheduling run.  Owned by `schedule_with` and
/// dropped when it returns.
struct TurnLoop<'a> {
    config:     SchedulerConfig,
    routes:     &'a [Route],
    assignment: &'a Assignment,

    /// Indexed by `UnitId::slot()`.  `None` until the unit is admitted.
    units: Vec<Option<UnitState>>,
    /// Units admitted so far; they are exactly `UnitId(1) ..= admitted`.
    admitted: u32,
    finished: u32,

    occupancy: OccupancyTable,
}

impl<'a> TurnLoop<'a> {
    fn new(config: SchedulerConfig, routes: &'a [Route], assignment: &'a Assignment) -> Self {
        Self {
            config,
            routes,
            assignment,
            units: vec![None; assignment.unit_count() as usize],
            admitted: 0,
            finished: 0,
            occupancy: OccupancyTable::new(routes, config.occupancy),
        }
    }

    fn step<O: ScheduleObserver>(&mut self, turn: Turn, observer: &mut O) -> SchedResult<MoveBatch> {
        let advances = self.advance();
        let mut moves = self.admit(turn, observer);

        if moves.is_empty() && advances.is_empty() {
            return Err(SchedError::Stalled {
                turn,
                unfinished: self.assignment.unit_count() - self.finished,
            });
        }

        moves.extend(advances);
        Ok(MoveBatch { turn, moves })
    }

    /// Move every placed, unfinished unit one room forward where the next
    /// slot is free, in increasing id order.
    fn advance(&mut self) -> Vec<Move> {
        let mut moves = Vec::new();

        for slot in 0..self.admitted as usize {
            let Some(state) = self.units[slot] else { continue };
            if state.finished {
                continue;
            }
            let unit = UnitId(slot as u32 + 1);
            let route = &self.routes[state.route.index()];
            let target = state.position + 1;
            let room = route.rooms[target];
            let arriving = target == route.last_position();

            if !self.occupancy.is_free(state.route, target, room, arriving) {
                continue;
            }

            self.occupancy.leave(state.route, state.position, route.rooms[state.position]);
            if arriving {
                self.finished += 1;
            } else {
                self.occupancy.enter(unit, state.route, target, room);
            }
            self.units[slot] = Some(UnitState { position: target, finished: arriving, ..state });
            moves.push(Move { unit, room });
        }

        moves
    }

    /// Place the next unit(s) in id order onto position 1 of their route.
    fn admit<O: ScheduleObserver>(&mut self, turn: Turn, observer: &mut O) -> Vec<Move> {
        let mut moves = Vec::new();

        while self.admitted < self.assignment.unit_count() {
            let unit = UnitId(self.admitted + 1);
            let Some(route_id) = self.assignment.route_of(unit) else { break };
            let route = &self.routes[route_id.index()];
            let room = route.rooms[1];
            let arriving = route.last_position() == 1;

            if !self.occupancy.is_free(route_id, 1, room, arriving) {
                break;
            }

            let state = UnitState::admitted(route_id, route.last_position());
            if state.finished {
                self.finished += 1;
            } else {
                self.occupancy.enter(unit, route_id, 1, room);
            }
            self.units[unit.slot()] = Some(state);
            self.admitted += 1;
            observer.on_admission(turn, unit, route_id);
            moves.push(Move { unit, room });

            if self.config.admission == Admission::OnePerTurn {
                break;
            }
        }

        moves
    }
}
