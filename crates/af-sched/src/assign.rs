//! Greedy unit → route assignment.

use af_core::{RouteId, UnitId};
use af_graph::Route;

use crate::{SchedError, SchedResult};

/// Which route every unit travels.  Built once, before the first turn, and
/// never changed afterwards.
///
/// Each unit, in increasing id order, takes the route minimising
/// `hop_len + units already assigned to it`.  On equal cost the lower route
/// index wins.  Longer routes therefore receive fewer units, which roughly
/// balances arrival times; the result is not guaranteed to minimise the
/// total number of turns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Route of each unit, indexed by `UnitId::slot()`.
    routes: Vec<RouteId>,
    /// Units per route, indexed by `RouteId`.
    load: Vec<u32>,
}

impl Assignment {
    /// Assign `unit_count` units over `routes`.
    ///
    /// Allocates one entry per unit; callers bound `unit_count` (the farm
    /// parser caps it at `af_io::MAX_UNIT_COUNT`).
    ///
    /// # Errors
    ///
    /// [`SchedError::NoRoutes`] when `routes` is empty and units remain.
    pub fn greedy(routes: &[Route], unit_count: u32) -> SchedResult<Self> {
        if routes.is_empty() && unit_count > 0 {
            return Err(SchedError::NoRoutes { units: unit_count });
        }

        let mut load = vec![0u32; routes.len()];
        let mut of_unit = Vec::with_capacity(unit_count as usize);

        for _unit in UnitId::range(unit_count) {
            let cost = |i: usize| routes[i].hop_len() + load[i] as usize;
            let mut best = 0;
            let mut best_cost = cost(0);
            for i in 1..routes.len() {
                let c = cost(i);
                if c < best_cost {
                    best = i;
                    best_cost = c;
                }
            }
            load[best] += 1;
            of_unit.push(RouteId(best as u32));
        }

        Ok(Self { routes: of_unit, load })
    }

    /// Route assigned to `unit`, or `None` for ids outside `1..=unit_count`.
    #[inline]
    pub fn route_of(&self, unit: UnitId) -> Option<RouteId> {
        if unit.0 == 0 {
            return None;
        }
        self.routes.get(unit.slot()).copied()
    }

    /// Number of units assigned to `route`.
    #[inline]
    pub fn load(&self, route: RouteId) -> u32 {
        self.load.get(route.index()).copied().unwrap_or(0)
    }

    pub fn unit_count(&self) -> u32 {
        self.routes.len() as u32
    }

    /// `(unit, route)` pairs in increasing unit order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitId, RouteId)> + '_ {
        self.routes
            .iter()
            .enumerate()
            .map(|(i, &route)| (UnitId(i as u32 + 1), route))
    }
}
