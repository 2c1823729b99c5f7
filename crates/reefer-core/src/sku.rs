//! Perishable product (SKU) parameters and the per-run SKU registry.
//!
//! SKUs are registered once at run construction and referenced everywhere
//! else by dense [`SkuId`] index, so the vehicle's inventory and shelf-life
//! state are plain parallel `Vec`s rather than string-keyed maps.

use crate::{CoreError, CoreResult, SkuId};

/// Decay parameters for one perishable product type.
///
/// `q10` is the factor by which the decay rate multiplies for each 10 °C of
/// temperature rise above `temp_ref_c`; `life_ref_hours` is the nominal
/// shelf life when held exactly at the reference temperature.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkuParams {
    pub name: String,
    pub life_ref_hours: f64,
    pub temp_ref_c: f64,
    pub q10: f64,
}

impl SkuParams {
    /// Convenience constructor with the standard 4 °C reference temperature.
    pub fn new(name: impl Into<String>, life_ref_hours: f64, q10: f64) -> Self {
        Self {
            name: name.into(),
            life_ref_hours,
            temp_ref_c: 4.0,
            q10,
        }
    }
}

/// Ordered, immutable registry of the SKUs carried in one run.
///
/// Registration order defines [`SkuId`] assignment; all per-SKU arrays in
/// the simulation are indexed in this order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkuTable {
    entries: Vec<SkuParams>,
}

impl SkuTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a SKU and return its id.  Duplicate names are rejected —
    /// the id, not the name, is the identity everywhere downstream, and a
    /// second entry with the same name is almost certainly a caller bug.
    pub fn push(&mut self, params: SkuParams) -> CoreResult<SkuId> {
        if self.entries.iter().any(|e| e.name == params.name) {
            return Err(CoreError::DuplicateSku(params.name));
        }
        let id = SkuId(self.entries.len() as u16);
        self.entries.push(params);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, id: SkuId) -> &SkuParams {
        &self.entries[id.index()]
    }

    /// Look up a SKU id by name (linear scan — tables are small).
    pub fn id_of(&self, name: &str) -> Option<SkuId> {
        self.entries
            .iter()
            .position(|e| e.name == name)
            .map(|i| SkuId(i as u16))
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkuId, &SkuParams)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, p)| (SkuId(i as u16), p))
    }

    /// Fresh per-SKU remaining-life vector: every SKU starts at its full
    /// reference life, in minutes.
    pub fn full_life_minutes(&self) -> Vec<f64> {
        self.entries
            .iter()
            .map(|p| p.life_ref_hours * 60.0)
            .collect()
    }
}

/// The default four-item produce table used by the demos and tests.
pub fn default_produce_table() -> SkuTable {
    let mut table = SkuTable::new();
    for params in [
        SkuParams::new("strawberries", 72.0, 2.4),
        SkuParams::new("romaine", 168.0, 2.0),
        SkuParams::new("blueberries", 120.0, 2.2),
        SkuParams::new("spinach", 96.0, 2.3),
    ] {
        // Names are distinct literals; push cannot fail here.
        let _ = table.push(params);
    }
    table
}
