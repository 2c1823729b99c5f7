//! The refrigerated vehicle: route traversal, inventory, and the
//! per-minute travel/service state machine.

use reefer_core::{Minute, NodeId, SkuId, SkuTable};
use reefer_graph::TravelGraph;
use reefer_routing::Route;
use reefer_thermal::{ambient_c, q10_decay_per_minute, TrailerTemp};

use crate::log::DeliveryEvent;
use crate::store::StoreLedger;
use crate::SimResult;

/// The single delivery vehicle.
///
/// Exactly one of three states is active each minute:
///
/// - **Traveling** — `remaining_travel > 0`; doors closed.
/// - **Servicing** — `remaining_service > 0`; doors open at a store.
/// - **Deciding**  — neither counter armed; deliver here, start the next
///   leg, or finish the route.
///
/// A tick performs at most one state transition.  Arrival and the first
/// service minute always land on separate ticks: the arrival tick only
/// snaps the position, and the delivery fires on the next deciding tick.
pub struct Vehicle {
    route: Route,
    /// Index of the next waypoint to head for.
    next_ix: usize,
    pos: NodeId,
    travel_target: Option<NodeId>,
    remaining_travel: u32,
    remaining_service: u32,

    drive_minutes: u32,
    service_minutes: u32,
    completed: bool,

    /// On-board units per SKU; only deliveries draw it down.
    inventory: Vec<u32>,
    /// Remaining shelf life per SKU in minutes; non-increasing, floored at 0.
    life_remaining_min: Vec<f64>,

    trailer: TrailerTemp,
}

impl Vehicle {
    pub(crate) fn new(route: Route, capacity: Vec<u32>, skus: &SkuTable, trailer: TrailerTemp) -> Self {
        let pos = route.stops().first().copied().unwrap_or(reefer_core::DEPOT);
        Self {
            route,
            next_ix: 1,
            pos,
            travel_target: None,
            remaining_travel: 0,
            remaining_service: 0,
            drive_minutes: 0,
            service_minutes: 0,
            completed: false,
            inventory: capacity,
            life_remaining_min: skus.full_life_minutes(),
            trailer,
        }
    }

    // ── Read API ──────────────────────────────────────────────────────────

    pub fn pos(&self) -> NodeId {
        self.pos
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn drive_minutes(&self) -> u32 {
        self.drive_minutes
    }

    pub fn service_minutes(&self) -> u32 {
        self.service_minutes
    }

    /// Drive plus service minutes accrued so far — the elapsed-time
    /// objective.
    pub fn elapsed_minutes(&self) -> u32 {
        self.drive_minutes + self.service_minutes
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn inventory(&self) -> &[u32] {
        &self.inventory
    }

    pub fn life_remaining_min(&self) -> &[f64] {
        &self.life_remaining_min
    }

    pub fn trailer_temp_c(&self) -> f64 {
        self.trailer.temp_c()
    }

    // ── Per-minute advance ────────────────────────────────────────────────

    /// Advance one simulated minute.  Returns the delivery event if a store
    /// was serviced this minute; the caller (the model) logs it within the
    /// same tick.
    ///
    /// Ticks entered with `completed` already set are no-ops.
    pub(crate) fn step(
        &mut self,
        minute: Minute,
        graph: &TravelGraph,
        stores: &mut StoreLedger,
        skus: &SkuTable,
    ) -> SimResult<Option<DeliveryEvent>> {
        if self.completed {
            return Ok(None);
        }

        let mut event = None;

        if self.remaining_travel > 0 {
            // Driving toward travel_target, doors closed.
            self.remaining_travel -= 1;
            self.drive_minutes += 1;
            self.trailer.tick_closed();

            if self.remaining_travel == 0 {
                if let Some(target) = self.travel_target.take() {
                    self.pos = target;
                }
                // Service never begins on the arrival tick.
            }
        } else if self.remaining_service > 0 {
            // Parked at a store with the doors open.
            self.remaining_service -= 1;
            self.service_minutes += 1;
            self.trailer.tick_open(ambient_c(minute));
        } else if let Some(ev) = self.service_here(stores, skus) {
            // Idle on an unserved store: deliver before consulting the route.
            event = Some(ev);
        } else {
            match self.route.stops().get(self.next_ix).copied() {
                None => {
                    self.completed = true;
                }
                Some(next) if next == self.pos => {
                    // Duplicate waypoint: an immediate service opportunity
                    // and a cursor advance, no travel and no thermal tick.
                    event = self.service_here(stores, skus);
                    self.next_ix += 1;
                }
                Some(next) => {
                    // Travel begins the same minute the decision is made.
                    self.remaining_travel = graph.leg_minutes(self.pos, next)?;
                    self.travel_target = Some(next);
                    self.next_ix += 1;
                    self.trailer.tick_closed();
                }
            }
        }

        self.decay_inventory(skus);
        Ok(event)
    }

    /// The delivery procedure.  Idempotent: does nothing (and touches
    /// nothing) unless the current node hosts an unserved store.
    fn service_here(&mut self, stores: &mut StoreLedger, skus: &SkuTable) -> Option<DeliveryEvent> {
        let store = stores.get_mut(self.pos)?;
        if store.served {
            return None;
        }

        // Doors open: instantaneous warm-air shock, once per delivery.
        self.trailer.spike_on_open();

        let mut delivered = vec![0u32; skus.len()];
        for ix in 0..skus.len() {
            let need = store.demand.get(ix).copied().unwrap_or(0);
            let have = self.inventory[ix];
            let take = need.min(have);
            if take > 0 {
                self.inventory[ix] = have - take;
                store.demand[ix] = need - take;
                delivered[ix] = take;
            }
        }

        store.served = true;
        self.remaining_service = store.service_minutes();

        Some(DeliveryEvent {
            node: self.pos,
            delivered,
            // Snapshot before this minute's decay runs.
            life_min: self.life_remaining_min.clone(),
        })
    }

    /// Q10 decay for every SKU still on board, against the trailer
    /// temperature of *this* minute.  Runs every tick after the state
    /// logic, including the tick that sets `completed`.
    fn decay_inventory(&mut self, skus: &SkuTable) {
        let temp = self.trailer.temp_c();
        for ix in 0..self.inventory.len() {
            if self.inventory[ix] == 0 {
                continue;
            }
            let p = skus.get(SkuId(ix as u16));
            let d = q10_decay_per_minute(p.life_ref_hours, temp, p.temp_ref_c, p.q10);
            self.life_remaining_min[ix] = (self.life_remaining_min[ix] - d).max(0.0);
        }
    }
}
