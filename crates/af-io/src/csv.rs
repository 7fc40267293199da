//! CSV move-log backend.
//!
//! One row per move, in schedule order:
//!
//! ```csv
//! turn,unit,room
//! 1,1,A
//! 2,2,A
//! 2,1,E
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use ::csv::Writer;

use af_graph::Colony;
use af_sched::MoveBatch;

use crate::FarmResult;
use crate::writer::MoveWriter;

/// Writes every move as a `turn,unit,room` row.
pub struct CsvMoveWriter<W: Write> {
    rows:     Writer<W>,
    finished: bool,
}

impl CsvMoveWriter<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> FarmResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvMoveWriter<W> {
    pub fn from_writer(out: W) -> FarmResult<Self> {
        let mut rows = Writer::from_writer(out);
        rows.write_record(["turn", "unit", "room"])?;
        Ok(Self { rows, finished: false })
    }
}

impl<W: Write> MoveWriter for CsvMoveWriter<W> {
    fn write_batch(&mut self, colony: &Colony, batch: &MoveBatch) -> FarmResult<()> {
        let turn = batch.turn.0.to_string();
        for m in &batch.moves {
            self.rows.write_record([
                turn.as_str(),
                m.unit.0.to_string().as_str(),
                colony.room_name(m.room),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> FarmResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
