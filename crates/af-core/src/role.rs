//! Room role shared by the graph, parser and formatter crates.

use std::str::FromStr;

use crate::CoreError;

/// Whether a room is an ordinary room or one of the two terminals.
///
/// Terminal rooms are exempt from occupancy limits: every unit starts in the
/// start room and every unit ends in the end room.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RoomRole {
    #[default]
    Normal,
    Start,
    End,
}

impl RoomRole {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoomRole::Normal)
    }

    /// The marker line that precedes a room with this role in the farm text
    /// format, or `None` for ordinary rooms.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            RoomRole::Normal => None,
            RoomRole::Start  => Some("##start"),
            RoomRole::End    => Some("##end"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoomRole::Normal => "normal",
            RoomRole::Start  => "start",
            RoomRole::End    => "end",
        }
    }
}

impl FromStr for RoomRole {
    type Err = CoreError;

    /// Parse a `##start` / `##end` marker line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "##start" => Ok(RoomRole::Start),
            "##end"   => Ok(RoomRole::End),
            other     => Err(CoreError::UnknownMarker(other.to_owned())),
        }
    }
}

impl std::fmt::Display for RoomRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
