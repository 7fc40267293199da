//! Scheduler configuration.

/// How many units may enter the colony per turn.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Admission {
    /// At most one admission per turn: the next unit in id order.
    #[default]
    OnePerTurn,
    /// Keep admitting the next unit in id order while its route's first slot
    /// is free.  Stops at the first unit that cannot enter, so admission order
    /// is still strictly by id.
    OnePerRoute,
}

/// Which units a moving unit has to wait for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Occupancy {
    /// Only units on the same route block each other.  Two routes sharing an
    /// intermediate room may both have a unit in it on the same turn.
    #[default]
    PerRoute,
    /// Additionally, an intermediate room holds at most one unit across all
    /// routes.  The end room never blocks.
    Room,
}

impl Admission {
    pub fn as_str(self) -> &'static str {
        match self {
            Admission::OnePerTurn  => "one-per-turn",
            Admission::OnePerRoute => "one-per-route",
        }
    }
}

impl Occupancy {
    pub fn as_str(self) -> &'static str {
        match self {
            Occupancy::PerRoute => "per-route",
            Occupancy::Room     => "room",
        }
    }
}

/// Knobs for [`MovementScheduler`][crate::MovementScheduler].
///
/// The default reproduces the reference turn rules: one admission per turn,
/// per-route occupancy.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulerConfig {
    pub admission: Admission,
    pub occupancy: Occupancy,
}

impl SchedulerConfig {
    pub fn with_admission(mut self, admission: Admission) -> Self {
        self.admission = admission;
        self
    }

    pub fn with_occupancy(mut self, occupancy: Occupancy) -> Self {
        self.occupancy = occupancy;
        self
    }
}
