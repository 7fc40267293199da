//! Text output: the input echo and the `L<unit>-<room>` move log.

use std::io::Write;

use af_graph::{Colony, Farm, Route};
use af_sched::{Move, MoveBatch, Schedule};

use crate::FarmResult;

/// Echo `farm` in the input format: unit count, rooms in declaration order
/// (each terminal preceded by its marker line), links as `a-b`, then one
/// blank line separating the echo from the move log.
pub fn write_farm<W: Write>(out: &mut W, farm: &Farm) -> FarmResult<()> {
    let colony = &farm.colony;
    writeln!(out, "{}", farm.unit_count)?;
    for room in colony.rooms() {
        if let Some(marker) = room.role.marker() {
            writeln!(out, "{marker}")?;
        }
        writeln!(out, "{} {} {}", room.name, room.x, room.y)?;
    }
    for link in colony.links() {
        writeln!(out, "{}-{}", colony.room_name(link.from), colony.room_name(link.to))?;
    }
    writeln!(out)?;
    Ok(())
}

/// `L<unit>-<room>`.
pub fn format_move(colony: &Colony, m: Move) -> String {
    format!("L{}-{}", m.unit.0, colony.room_name(m.room))
}

/// One turn's moves as space-separated `L<unit>-<room>` tokens.
pub fn format_batch(colony: &Colony, batch: &MoveBatch) -> String {
    batch
        .moves
        .iter()
        .map(|&m| format_move(colony, m))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every turn of `schedule`, one line per turn.
pub fn write_schedule<W: Write>(out: &mut W, colony: &Colony, schedule: &Schedule) -> FarmResult<()> {
    for batch in &schedule.batches {
        writeln!(out, "{}", format_batch(colony, batch))?;
    }
    Ok(())
}

/// Diagnostic listing of extracted routes with their assigned load.
pub fn write_routes<W: Write>(
    out:      &mut W,
    colony:   &Colony,
    routes:   &[Route],
    schedule: &Schedule,
) -> FarmResult<()> {
    for (i, route) in routes.iter().enumerate() {
        let id = af_core::RouteId(i as u32);
        writeln!(
            out,
            "route {i}: {} hops, {} units: {}",
            route.hop_len(),
            schedule.assignment.load(id),
            route.describe(colony)
        )?;
    }
    Ok(())
}
