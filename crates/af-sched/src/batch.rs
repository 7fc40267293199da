//! Schedule output types.

use af_core::{RoomId, Turn, UnitId};

use crate::Assignment;

/// One unit stepping into one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub unit: UnitId,
    pub room: RoomId,
}

/// Every move made on one turn.
///
/// The admission move (if any) comes first, followed by advancing units in
/// increasing id order.  A unit appears at most once per batch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveBatch {
    pub turn:  Turn,
    pub moves: Vec<Move>,
}

impl MoveBatch {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// A complete schedule: the fixed assignment plus one non-empty batch per
/// turn, in turn order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    pub assignment: Assignment,
    pub batches:    Vec<MoveBatch>,
}

impl Schedule {
    /// Number of turns the schedule takes.
    pub fn turn_count(&self) -> u32 {
        self.batches.len() as u32
    }

    /// Last turn, or `Turn::ZERO` for an empty schedule.
    pub fn final_turn(&self) -> Turn {
        self.batches.last().map_or(Turn::ZERO, |b| b.turn)
    }

    /// Every move with the turn it happens on, in schedule order.
    pub fn moves(&self) -> impl Iterator<Item = (Turn, Move)> + '_ {
        self.batches
            .iter()
            .flat_map(|b| b.moves.iter().map(move |&m| (b.turn, m)))
    }

    /// Turn on which `unit` first moved.
    pub fn admission_turn(&self, unit: UnitId) -> Option<Turn> {
        self.moves().find(|(_, m)| m.unit == unit).map(|(t, _)| t)
    }

    /// Turn on which `unit` made its last move.
    pub fn arrival_turn(&self, unit: UnitId) -> Option<Turn> {
        self.moves()
            .filter(|(_, m)| m.unit == unit)
            .last()
            .map(|(t, _)| t)
    }
}
