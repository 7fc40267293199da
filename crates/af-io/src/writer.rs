//! The `MoveWriter` trait and the plain-text backend.

use std::io::Write;

use af_graph::Colony;
use af_sched::MoveBatch;

use crate::{FarmResult, format_batch};

/// Trait implemented by the text and CSV move-log backends.
pub trait MoveWriter {
    /// Write one turn.  `colony` resolves room ids to names.
    fn write_batch(&mut self, colony: &Colony, batch: &MoveBatch) -> FarmResult<()>;

    /// Flush the underlying sink.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> FarmResult<()>;
}

/// Writes one `L<unit>-<room> …` line per turn.
pub struct TextMoveWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextMoveWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MoveWriter for TextMoveWriter<W> {
    fn write_batch(&mut self, colony: &Colony, batch: &MoveBatch) -> FarmResult<()> {
        writeln!(self.out, "{}", format_batch(colony, batch))?;
        Ok(())
    }

    fn finish(&mut self) -> FarmResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
