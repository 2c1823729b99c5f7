//! The `SimModel` and its tick loop.

use reefer_core::{Minute, SimParams, SkuTable};
use reefer_graph::TravelGraph;

use crate::log::DeliveryRecord;
use crate::observer::SimObserver;
use crate::store::StoreLedger;
use crate::vehicle::Vehicle;
use crate::SimResult;

/// One simulation instance: graph, stores, vehicle, clock, and the
/// append-only delivery log.
///
/// Single-threaded and cooperative: exactly one component advances per
/// tick, in a fixed order, and a run is either advanced one full tick or
/// not at all.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct SimModel {
    pub(crate) graph: TravelGraph,
    pub(crate) skus: SkuTable,
    pub(crate) params: SimParams,
    pub(crate) stores: StoreLedger,
    pub(crate) vehicle: Vehicle,
    pub(crate) minute: Minute,
    pub(crate) delivery_log: Vec<DeliveryRecord>,
}

impl SimModel {
    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance one simulated minute.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        // ① Sample the minute-t state before any component advances.
        observer.on_minute(
            self.minute,
            self.vehicle.elapsed_minutes(),
            self.vehicle.life_remaining_min(),
        );

        // ② The DC and the stores are passive ledgers — only the vehicle
        //    has behavior.
        let event = self
            .vehicle
            .step(self.minute, &self.graph, &mut self.stores, &self.skus)?;

        // ③ Fold this minute's delivery (if any) into the log, exactly once.
        if let Some(event) = event {
            let record = DeliveryRecord::from_event(self.minute, event);
            observer.on_delivery(&record);
            self.delivery_log.push(record);
        }

        // ④ Advance the clock.
        self.minute = self.minute + 1;
        Ok(())
    }

    /// Repeat ticks until the vehicle completes its route or the minute
    /// budget is exhausted, whichever comes first.
    pub fn run_until_done<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        for _ in 0..self.params.max_minutes {
            self.step(observer)?;
            if self.vehicle.completed() {
                break;
            }
        }
        observer.on_sim_end(self.minute, self.vehicle.completed());
        Ok(())
    }

    // ── Read API ──────────────────────────────────────────────────────────

    pub fn minute(&self) -> Minute {
        self.minute
    }

    pub fn graph(&self) -> &TravelGraph {
        &self.graph
    }

    pub fn skus(&self) -> &SkuTable {
        &self.skus
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn stores(&self) -> &StoreLedger {
        &self.stores
    }

    /// The append-only delivery log, oldest first.
    pub fn delivery_log(&self) -> &[DeliveryRecord] {
        &self.delivery_log
    }

    // ── Objectives ────────────────────────────────────────────────────────

    /// Elapsed operating time: drive + service minutes.
    pub fn elapsed_minutes(&self) -> u32 {
        self.vehicle.elapsed_minutes()
    }

    /// Sum of quantity-weighted remaining life across all deliveries — the
    /// freshness objective.
    pub fn total_delivered_life_min(&self) -> f64 {
        self.delivery_log.iter().map(|r| r.total_weighted_min).sum()
    }

    /// Scalarized objective for policy comparison: time is bad, delivered
    /// freshness is good.
    pub fn weighted_score(&self, alpha: f64, beta: f64) -> f64 {
        alpha * self.elapsed_minutes() as f64 - beta * self.total_delivered_life_min()
    }
}
