//! Flat row types handed to output backends.

use reefer_sim::DeliveryRecord;

/// One minute-series sample: the state entering a simulated minute.
#[derive(Debug, Clone, PartialEq)]
pub struct MinuteRow {
    pub minute: u64,
    pub elapsed_minutes: u32,
    /// Remaining shelf life per SKU, minutes, indexed by `SkuId`.
    pub life_min: Vec<f64>,
}

/// One delivery-log row, flattened for export.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRow {
    pub minute: u64,
    pub node: u32,
    pub delivered: Vec<u32>,
    pub life_min: Vec<f64>,
    pub weighted_min: Vec<f64>,
    pub total_weighted_min: f64,
}

impl From<&DeliveryRecord> for DeliveryRow {
    fn from(r: &DeliveryRecord) -> Self {
        Self {
            minute: r.minute.0,
            node: r.node.0,
            delivered: r.delivered.clone(),
            life_min: r.life_min.clone(),
            weighted_min: r.weighted_min.clone(),
            total_weighted_min: r.total_weighted_min,
        }
    }
}
