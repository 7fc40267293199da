//! Farm text parser.
//!
//! # Grammar
//!
//! Lines are processed in order; surrounding whitespace is ignored.
//!
//! | Line                        | Meaning                                        |
//! |-----------------------------|------------------------------------------------|
//! | *(empty)*                   | ignored                                        |
//! | `##start` / `##end`         | the next room is the start / end room         |
//! | `#…`                        | comment (including unknown `##` commands)      |
//! | first other line            | unit count, `1 ..= MAX_UNIT_COUNT`             |
//! | `name x y`                  | room with integer coordinates                  |
//! | `a-b`                       | undirected link between rooms `a` and `b`      |
//!
//! Room names may not start with `L` (it would read as a unit in the move
//! log) or contain `-`.  Any other line is skipped with a warning.  Links
//! may appear before the rooms they name; they are resolved once the whole
//! input has been read.

use std::io::Read;
use std::path::Path;

use af_core::RoomRole;
use af_graph::{ColonyBuilder, Farm};

use crate::{FarmError, FarmResult};

/// Largest accepted unit count.  Scheduling keeps per-unit state for every
/// unit, so larger counts are rejected up front rather than failing on
/// allocation.
pub const MAX_UNIT_COUNT: u32 = 10_000_000;

/// Load a farm from a file.
pub fn load_farm(path: &Path) -> FarmResult<Farm> {
    let file = std::fs::File::open(path)?;
    load_farm_reader(file)
}

/// Like [`load_farm`] but accepts any `Read` source (stdin, a `Cursor`, …).
pub fn load_farm_reader<R: Read>(mut reader: R) -> FarmResult<Farm> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_farm(&text)
}

/// Parse the farm text format.
pub fn parse_farm(text: &str) -> FarmResult<Farm> {
    let mut unit_count: Option<u32> = None;
    let mut pending = RoomRole::Normal;
    let mut builder = ColonyBuilder::new();

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }
        if line.starts_with('#') {
            if let Ok(role) = line.parse::<RoomRole>() {
                if pending != RoomRole::Normal {
                    tracing::warn!(line = line_no, "{line} overrides an unused ##{pending} marker");
                }
                pending = role;
            }
            continue;
        }

        if unit_count.is_none() {
            unit_count = Some(parse_unit_count(line, line_no)?);
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if let [name, x, y] = fields[..] {
            let x = parse_coordinate(name, x, line_no)?;
            let y = parse_coordinate(name, y, line_no)?;
            if name.starts_with('L') || name.contains('-') {
                return Err(FarmError::InvalidRoomName { line: line_no, name: name.to_owned() });
            }
            builder.add_room(name, x, y, pending)?;
            pending = RoomRole::Normal;
        } else if line.contains('-') {
            let (a, b) = parse_link(line, line_no)?;
            builder.add_link(a, b);
        } else {
            tracing::warn!(line = line_no, text = line, "skipping unrecognised line");
        }
    }

    if pending != RoomRole::Normal {
        tracing::warn!("##{pending} marker at end of input has no room");
    }

    let unit_count = unit_count.ok_or(FarmError::MissingUnitCount)?;
    let colony = builder.build()?;
    tracing::debug!(
        units = unit_count,
        rooms = colony.room_count(),
        links = colony.link_count(),
        "parsed farm"
    );
    Ok(Farm::new(unit_count, colony))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_unit_count(line: &str, line_no: usize) -> FarmResult<u32> {
    line.parse::<u32>()
        .ok()
        .filter(|&n| (1..=MAX_UNIT_COUNT).contains(&n))
        .ok_or_else(|| FarmError::InvalidUnitCount { line: line_no, value: line.to_owned() })
}

fn parse_coordinate(room: &str, value: &str, line_no: usize) -> FarmResult<i64> {
    value.parse::<i64>().map_err(|_| FarmError::InvalidCoordinate {
        line:  line_no,
        room:  room.to_owned(),
        value: value.to_owned(),
    })
}

fn parse_link(line: &str, line_no: usize) -> FarmResult<(&str, &str)> {
    let malformed = || FarmError::MalformedLink { line: line_no, text: line.to_owned() };
    let (a, b) = line.split_once('-').ok_or_else(malformed)?;
    let valid = |name: &str| !name.is_empty() && !name.contains(['-', ' ', '\t']);
    if valid(a) && valid(b) {
        Ok((a, b))
    } else {
        Err(malformed())
    }
}
