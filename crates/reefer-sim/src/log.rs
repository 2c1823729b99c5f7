//! Delivery events and the append-only delivery log.

use reefer_core::{Minute, NodeId};

/// What the vehicle hands the model the minute a store is serviced.
///
/// Ephemeral by construction: it is the return value of the vehicle's step
/// call and is folded into a [`DeliveryRecord`] within the same tick —
/// nothing outside that window ever observes it.
#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryEvent {
    pub node: NodeId,
    /// Units delivered, indexed by `SkuId` (0 where nothing was delivered).
    pub delivered: Vec<u32>,
    /// Remaining shelf life per SKU, in minutes, snapshotted at the
    /// delivery instant (before that minute's decay).
    pub life_min: Vec<f64>,
}

/// One immutable row of the delivery log.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryRecord {
    pub minute: Minute,
    pub node: NodeId,
    /// Remaining shelf life per SKU at delivery, minutes.
    pub life_min: Vec<f64>,
    /// Units delivered per SKU.
    pub delivered: Vec<u32>,
    /// `life_min × delivered`, per SKU.
    pub weighted_min: Vec<f64>,
    /// Sum of `weighted_min` — the freshness yield of this stop.
    pub total_weighted_min: f64,
}

impl DeliveryRecord {
    /// Fold an event into a log row, computing the quantity-weighted
    /// remaining life.
    pub(crate) fn from_event(minute: Minute, event: DeliveryEvent) -> Self {
        let weighted_min: Vec<f64> = event
            .life_min
            .iter()
            .zip(&event.delivered)
            .map(|(&life, &qty)| life * qty as f64)
            .collect();
        let total_weighted_min = weighted_min.iter().sum();
        Self {
            minute,
            node: event.node,
            life_min: event.life_min,
            delivered: event.delivered,
            weighted_min,
            total_weighted_min,
        }
    }
}
