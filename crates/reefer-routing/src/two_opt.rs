//! First-improvement 2-opt local search.

use reefer_core::NodeId;
use reefer_graph::{GraphResult, TravelGraph};

use crate::policy::RoutePolicy;
use crate::route::path_minutes;
use crate::{NearestNeighbor, Route, RoutingResult};

/// Nearest-neighbor seed refined by 2-opt segment reversal.
///
/// Scans moves `(i, j)` with `1 ≤ i < j < len − 1`, reversing
/// `stops[i..j]`; the depot endpoints never move.  The first move that
/// strictly reduces total route time is applied and the scan restarts from
/// the top; the search terminates when a full scan yields no improvement,
/// so the result is never worse than its seed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TwoOpt;

impl RoutePolicy for TwoOpt {
    fn name(&self) -> &'static str {
        "two-opt"
    }

    fn build_route(
        &self,
        graph: &TravelGraph,
        depot: NodeId,
        customers: &[NodeId],
    ) -> RoutingResult<Route> {
        let seed = NearestNeighbor.build_route(graph, depot, customers)?;
        let mut stops = seed.stops().to_vec();
        descend(&mut stops, graph)?;
        Ok(Route::new(stops))
    }
}

/// Run the 2-opt descent in place and return the final tour time.
///
/// Candidate moves are evaluated by full-path recomputation rather than an
/// endpoint delta: reversing a segment flips the direction of every interior
/// arc, so on asymmetric graphs the delta form is wrong.
pub(crate) fn descend(stops: &mut Vec<NodeId>, graph: &TravelGraph) -> GraphResult<u32> {
    let mut best_minutes = path_minutes(stops, graph)?;
    'restart: loop {
        for i in 1..stops.len().saturating_sub(2) {
            for j in (i + 1)..stops.len() - 1 {
                stops[i..j].reverse();
                let candidate = path_minutes(stops, graph)?;
                if candidate < best_minutes {
                    best_minutes = candidate;
                    continue 'restart;
                }
                stops[i..j].reverse(); // undo the non-improving move
            }
        }
        return Ok(best_minutes);
    }
}
