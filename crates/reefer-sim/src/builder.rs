//! Fluent builder for constructing a [`SimModel`].

use std::collections::BTreeMap;

use reefer_core::{Minute, NodeId, SimParams, SimRng, SkuId, SkuTable, DEPOT};
use reefer_graph::TravelGraph;
use reefer_routing::RoutePolicy;
use reefer_thermal::TrailerTemp;
use tracing::info;

use crate::model::SimModel;
use crate::store::{Store, StoreLedger};
use crate::vehicle::Vehicle;
use crate::{SimError, SimResult};

/// Stream offset for the trailer-temperature RNG derived from the master
/// seed.
const TRAILER_RNG_STREAM: u64 = 1;

/// Assemble a [`SimModel`] from a graph, a SKU table, demands, capacities,
/// and a route policy.
///
/// # Example
///
/// ```rust,ignore
/// let model = SimBuilder::new(graph, default_produce_table())
///     .params(SimParams::default())
///     .capacity(strawberries, 300)
///     .demand(NodeId(3), strawberries, 20)
///     .build(&TwoOpt)?;
/// ```
///
/// `build` is where the route-validity contract is enforced: a policy
/// producing an invalid route aborts construction with
/// [`SimError::Routing`].
pub struct SimBuilder {
    graph: TravelGraph,
    skus: SkuTable,
    params: SimParams,
    demands: BTreeMap<NodeId, BTreeMap<SkuId, u32>>,
    capacity: BTreeMap<SkuId, u32>,
}

impl SimBuilder {
    pub fn new(graph: TravelGraph, skus: SkuTable) -> Self {
        Self {
            graph,
            skus,
            params: SimParams::default(),
            demands: BTreeMap::new(),
            capacity: BTreeMap::new(),
        }
    }

    /// Override the default simulation parameters.
    pub fn params(mut self, params: SimParams) -> Self {
        self.params = params;
        self
    }

    /// Set the vehicle's starting stock of one SKU.
    pub fn capacity(mut self, sku: SkuId, qty: u32) -> Self {
        self.capacity.insert(sku, qty);
        self
    }

    /// Add demand for one SKU at one customer node.  Nodes with any demand
    /// become stores; the customer set is the sorted set of demand nodes.
    pub fn demand(mut self, node: NodeId, sku: SkuId, qty: u32) -> Self {
        *self.demands.entry(node).or_default().entry(sku).or_insert(0) += qty;
        self
    }

    /// Validate inputs, run the route policy, and return a ready-to-run
    /// model.
    pub fn build<P: RoutePolicy + ?Sized>(self, policy: &P) -> SimResult<SimModel> {
        self.params.validate()?;

        // ── Validate SKU references and demand nodes ──────────────────────
        for (&sku, _) in &self.capacity {
            if sku.index() >= self.skus.len() {
                return Err(SimError::SkuUnknown(sku));
            }
        }
        for (&node, per_sku) in &self.demands {
            if node == DEPOT {
                return Err(SimError::DemandAtDepot(node));
            }
            if node.index() >= self.graph.node_count() {
                return Err(SimError::DemandNodeUnknown(node));
            }
            for (&sku, _) in per_sku {
                if sku.index() >= self.skus.len() {
                    return Err(SimError::SkuUnknown(sku));
                }
            }
        }

        // ── Stores from demand input ──────────────────────────────────────
        let sku_count = self.skus.len();
        let mut stores = StoreLedger::new();
        for (&node, per_sku) in &self.demands {
            let mut demand = vec![0u32; sku_count];
            for (&sku, &qty) in per_sku {
                demand[sku.index()] = qty;
            }
            stores.insert(Store::new(node, demand, self.params.service_minutes));
        }

        // ── Route from policy (hard validity contract) ────────────────────
        let customers = stores.customer_nodes();
        let route = policy.build_route(&self.graph, DEPOT, &customers)?;
        route.ensure_valid(DEPOT, &customers, policy.name())?;

        // Every leg the vehicle will drive must have a travel time; failing
        // here beats failing mid-run.
        for pair in route.stops().windows(2) {
            if pair[0] != pair[1] {
                self.graph.leg_minutes(pair[0], pair[1])?;
            }
        }

        info!(
            policy = policy.name(),
            stops = route.len(),
            minutes = route.total_minutes(&self.graph)?,
            "route constructed"
        );

        // ── Vehicle ───────────────────────────────────────────────────────
        let mut capacity = vec![0u32; sku_count];
        for (&sku, &qty) in &self.capacity {
            capacity[sku.index()] = qty;
        }

        let mut master = SimRng::new(self.params.seed);
        let trailer = TrailerTemp::new(
            self.params.thermal.clone(),
            master.child(TRAILER_RNG_STREAM),
        );
        let vehicle = Vehicle::new(route, capacity, &self.skus, trailer);

        Ok(SimModel {
            graph: self.graph,
            skus: self.skus,
            params: self.params,
            stores,
            vehicle,
            minute: Minute::ZERO,
            delivery_log: Vec::new(),
        })
    }
}
