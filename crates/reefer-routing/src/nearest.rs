//! Greedy nearest-neighbor construction.

use reefer_core::NodeId;
use reefer_graph::TravelGraph;

use crate::policy::RoutePolicy;
use crate::{Route, RoutingResult};

/// From the current node, repeatedly visit the unvisited customer with the
/// minimum travel time.
///
/// Tie-break: **lowest node id**.  Candidates are scanned in ascending id
/// order and the incumbent is replaced only on a strictly smaller travel
/// time, so equal-time candidates resolve to the smallest id regardless of
/// the caller's customer ordering.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestNeighbor;

impl RoutePolicy for NearestNeighbor {
    fn name(&self) -> &'static str {
        "nearest-neighbor"
    }

    fn build_route(
        &self,
        graph: &TravelGraph,
        depot: NodeId,
        customers: &[NodeId],
    ) -> RoutingResult<Route> {
        let mut unvisited: Vec<NodeId> = customers.to_vec();
        unvisited.sort_unstable();

        let mut stops = Vec::with_capacity(customers.len() + 2);
        stops.push(depot);
        let mut current = depot;

        while !unvisited.is_empty() {
            let mut best_ix = 0;
            let mut best_minutes = graph.leg_minutes(current, unvisited[0])?;
            for (ix, &candidate) in unvisited.iter().enumerate().skip(1) {
                let minutes = graph.leg_minutes(current, candidate)?;
                if minutes < best_minutes {
                    best_minutes = minutes;
                    best_ix = ix;
                }
            }
            current = unvisited.remove(best_ix);
            stops.push(current);
        }

        stops.push(depot);
        Ok(Route::new(stops))
    }
}
