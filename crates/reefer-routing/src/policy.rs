//! The route-construction policy trait.

use reefer_core::NodeId;
use reefer_graph::TravelGraph;

use crate::{Route, RoutingResult};

/// A route-construction strategy.
///
/// Policies are pure with respect to the simulation: they run once, before
/// any tick, and their output is validated by the simulation builder.
/// Implementations may consult wall-clock time internally (the solver
/// policy does) but must not block unboundedly.
pub trait RoutePolicy {
    /// Short stable name for logs and experiment tables.
    fn name(&self) -> &'static str;

    /// Build a depot-anchored tour over `customers`.
    ///
    /// A returned route must satisfy [`Route::is_valid`]; failing that is a
    /// bug in the policy and aborts model construction.
    fn build_route(
        &self,
        graph: &TravelGraph,
        depot: NodeId,
        customers: &[NodeId],
    ) -> RoutingResult<Route>;
}
