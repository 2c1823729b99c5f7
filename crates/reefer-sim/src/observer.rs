//! Simulation observer trait for time-series sampling and delivery
//! notifications.

use reefer_core::Minute;

use crate::log::DeliveryRecord;

/// Callbacks invoked by [`SimModel`][crate::SimModel] at fixed points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — freshness printer
///
/// ```rust,ignore
/// struct FreshnessPrinter;
///
/// impl SimObserver for FreshnessPrinter {
///     fn on_delivery(&mut self, record: &DeliveryRecord) {
///         println!("{}: node {} yielded {:.0} weighted minutes",
///             record.minute, record.node, record.total_weighted_min);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of every tick, **before** the vehicle advances —
    /// the row reflects the state entering this minute.
    ///
    /// `life_min` is the vehicle's per-SKU remaining shelf life, indexed by
    /// `SkuId`; `elapsed_minutes` is drive + service time accrued so far.
    fn on_minute(&mut self, _minute: Minute, _elapsed_minutes: u32, _life_min: &[f64]) {}

    /// Called within the tick that produced the delivery, with the record
    /// that is appended to the log.
    fn on_delivery(&mut self, _record: &DeliveryRecord) {}

    /// Called once when `run_until_done` stops, whether the route finished
    /// or the minute budget ran out.
    fn on_sim_end(&mut self, _final_minute: Minute, _completed: bool) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to run the model
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
