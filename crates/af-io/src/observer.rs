//! `MoveLogObserver<W>` — bridges `ScheduleObserver` to a `MoveWriter`.

use af_core::Turn;
use af_graph::Colony;
use af_sched::{MoveBatch, ScheduleObserver};

use crate::writer::MoveWriter;
use crate::{FarmError, FarmResult};

/// A [`ScheduleObserver`] that streams each finished turn to any
/// [`MoveWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After scheduling returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct MoveLogObserver<'c, W: MoveWriter> {
    colony:     &'c Colony,
    writer:     W,
    last_error: Option<FarmError>,
}

impl<'c, W: MoveWriter> MoveLogObserver<'c, W> {
    pub fn new(colony: &'c Colony, writer: W) -> Self {
        Self { colony, writer, last_error: None }
    }

    /// Take the stored write error (if any).  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<FarmError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: FarmResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: MoveWriter> ScheduleObserver for MoveLogObserver<'_, W> {
    fn on_turn_end(&mut self, batch: &MoveBatch) {
        let result = self.writer.write_batch(self.colony, batch);
        self.store_err(result);
    }

    fn on_schedule_end(&mut self, _final_turn: Turn) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
