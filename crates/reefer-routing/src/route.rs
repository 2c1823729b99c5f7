//! The `Route` type and the validity predicate.

use std::collections::BTreeSet;

use reefer_core::NodeId;
use reefer_graph::{GraphResult, TravelGraph};

use crate::{RoutingError, RoutingResult};

/// A depot-anchored visitation sequence: first and last stop are the depot,
/// the interior is a permutation of the customer set.
///
/// Produced once by a [`RoutePolicy`](crate::RoutePolicy) before the
/// simulation starts and immutable thereafter; the vehicle holds its own
/// traversal cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    stops: Vec<NodeId>,
}

impl Route {
    pub fn new(stops: Vec<NodeId>) -> Self {
        Self { stops }
    }

    pub fn stops(&self) -> &[NodeId] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The stops strictly between the depot endpoints.
    pub fn interior(&self) -> &[NodeId] {
        if self.stops.len() < 2 {
            &[]
        } else {
            &self.stops[1..self.stops.len() - 1]
        }
    }

    /// The route-validity predicate: starts and ends at `depot`, and the
    /// interior is exactly the customer set — same length, no duplicates,
    /// no omissions.
    pub fn is_valid(&self, depot: NodeId, customers: &[NodeId]) -> bool {
        if self.stops.len() != customers.len() + 2 {
            return false;
        }
        if self.stops.first() != Some(&depot) || self.stops.last() != Some(&depot) {
            return false;
        }
        let interior: BTreeSet<NodeId> = self.interior().iter().copied().collect();
        let wanted: BTreeSet<NodeId> = customers.iter().copied().collect();
        interior == wanted && interior.len() == customers.len()
    }

    /// Validity as a hard error, tagged with the producing policy's name.
    /// An invalid route is a programming error in the policy, not a
    /// runtime-recoverable condition.
    pub fn ensure_valid(
        &self,
        depot: NodeId,
        customers: &[NodeId],
        policy: &str,
    ) -> RoutingResult<()> {
        if self.is_valid(depot, customers) {
            Ok(())
        } else {
            Err(RoutingError::Invalid {
                policy: policy.to_string(),
                stops: self.stops.clone(),
            })
        }
    }

    /// Total travel time along the route: the sum of consecutive leg times.
    /// This is the comparison objective and the 2-opt acceptance criterion.
    pub fn total_minutes(&self, graph: &TravelGraph) -> GraphResult<u32> {
        path_minutes(&self.stops, graph)
    }
}

/// Sum of leg times over an arbitrary stop sequence (shared with the
/// in-progress tours inside the local-search policies).
pub(crate) fn path_minutes(stops: &[NodeId], graph: &TravelGraph) -> GraphResult<u32> {
    let mut total = 0u32;
    for pair in stops.windows(2) {
        if pair[0] == pair[1] {
            continue; // degenerate duplicate stop: zero travel
        }
        total += graph.leg_minutes(pair[0], pair[1])?;
    }
    Ok(total)
}
