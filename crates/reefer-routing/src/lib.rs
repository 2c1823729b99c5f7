//! `reefer-routing` — route-construction policies for the `reefer-sim`
//! cold-chain twin.
//!
//! # Contract
//!
//! Every policy implements [`RoutePolicy`]: given a travel graph, the depot,
//! and the customer set, produce a depot-anchored tour visiting each
//! customer exactly once.  Validity is a hard contract — the simulation
//! builder refuses to construct a model from a route that fails
//! [`Route::ensure_valid`].
//!
//! # Policies
//!
//! | Policy                | Strategy                                        |
//! |-----------------------|-------------------------------------------------|
//! | [`NearestNeighbor`]   | Greedy closest-unvisited; lowest-id tie-break   |
//! | [`TwoOpt`]            | Nearest-neighbor seed + first-improvement 2-opt |
//! | [`SolverRoutePolicy`] | Pluggable [`TspSolver`] with silent fallback to nearest-neighbor |

pub mod error;
pub mod nearest;
pub mod policy;
pub mod route;
pub mod solver;
pub mod two_opt;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RoutingError, RoutingResult};
pub use nearest::NearestNeighbor;
pub use policy::RoutePolicy;
pub use route::Route;
pub use solver::{IteratedLocalSearchSolver, SolverRoutePolicy, TspSolver};
pub use two_opt::TwoOpt;
