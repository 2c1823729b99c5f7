//! Passive store ledgers.
//!
//! Stores have no behavior of their own — they are demand ledgers the
//! vehicle draws down when it services them.  The ledger is a plain
//! node → store lookup, not an agent hierarchy.

use reefer_core::{NodeId, SkuId};

#[cfg(feature = "fx-hash")]
type LedgerMap = rustc_hash::FxHashMap<NodeId, Store>;
#[cfg(not(feature = "fx-hash"))]
type LedgerMap = std::collections::HashMap<NodeId, Store>;

/// One customer location: remaining per-SKU demand and the service stop
/// duration.  `served` flips exactly once, the first time the vehicle
/// services the node; whatever demand is left at that point stays
/// unfulfilled for the rest of the run.
#[derive(Clone, Debug)]
pub struct Store {
    node: NodeId,
    /// Remaining demand, indexed by `SkuId`.
    pub(crate) demand: Vec<u32>,
    service_minutes: u32,
    pub(crate) served: bool,
}

impl Store {
    pub fn new(node: NodeId, demand: Vec<u32>, service_minutes: u32) -> Self {
        Self {
            node,
            demand,
            service_minutes,
            served: false,
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn service_minutes(&self) -> u32 {
        self.service_minutes
    }

    pub fn served(&self) -> bool {
        self.served
    }

    /// Remaining (unfulfilled) demand for one SKU.
    pub fn remaining_demand(&self, sku: SkuId) -> u32 {
        self.demand.get(sku.index()).copied().unwrap_or(0)
    }

    /// Remaining demand across all SKUs, indexed by `SkuId`.
    pub fn demand(&self) -> &[u32] {
        &self.demand
    }
}

/// Node → store lookup for all customers of the run.
#[derive(Clone, Debug, Default)]
pub struct StoreLedger {
    stores: LedgerMap,
}

impl StoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, store: Store) {
        self.stores.insert(store.node(), store);
    }

    pub fn get(&self, node: NodeId) -> Option<&Store> {
        self.stores.get(&node)
    }

    pub(crate) fn get_mut(&mut self, node: NodeId) -> Option<&mut Store> {
        self.stores.get_mut(&node)
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// All customer nodes, ascending — the canonical customer-set order
    /// handed to route policies.
    pub fn customer_nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.stores.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    pub fn all_served(&self) -> bool {
        self.stores.values().all(|s| s.served)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Store> {
        self.stores.values()
    }
}
