//! Backend trait for simulation output.

use crate::row::{DeliveryRow, MinuteRow};
use crate::OutputResult;

/// A sink for minute-series samples and delivery-log rows.
///
/// Implementations buffer as they see fit; `finish` must flush everything
/// and tolerate being called more than once (the observer calls it from
/// `on_sim_end`, and callers may call it again on shutdown paths).
pub trait OutputWriter {
    fn write_minute(&mut self, row: &MinuteRow) -> OutputResult<()>;

    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()>;

    fn finish(&mut self) -> OutputResult<()>;
}
