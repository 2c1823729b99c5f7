//! `reefer-output` — file export for simulation runs.
//!
//! The simulation core knows nothing about file formats; this crate
//! consumes its read-only outputs through two seams:
//!
//! - [`OutputWriter`] — backend trait (CSV today; the door is open for
//!   other formats).
//! - [`SimOutputObserver`] — a [`reefer_sim::SimObserver`] that feeds any
//!   `OutputWriter` from the tick loop's callbacks.
//!
//! Per-SKU columns are generated from the run's `SkuTable`, so the files
//! are self-describing for whatever products a run carries.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DeliveryRow, MinuteRow};
pub use writer::OutputWriter;
