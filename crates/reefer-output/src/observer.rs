//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use reefer_core::Minute;
use reefer_sim::{DeliveryRecord, SimObserver};

use crate::row::{DeliveryRow, MinuteRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the minute series and the delivery log to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_minute(&mut self, minute: Minute, elapsed_minutes: u32, life_min: &[f64]) {
        let row = MinuteRow {
            minute: minute.0,
            elapsed_minutes,
            life_min: life_min.to_vec(),
        };
        let result = self.writer.write_minute(&row);
        self.store_err(result);
    }

    fn on_delivery(&mut self, record: &DeliveryRecord) {
        let row = DeliveryRow::from(record);
        let result = self.writer.write_delivery(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_minute: Minute, _completed: bool) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
