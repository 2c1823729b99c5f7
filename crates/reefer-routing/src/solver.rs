//! Solver-backed routing with a silent fallback chain.
//!
//! The combinatorial solver is a *capability*: it may be absent (nothing
//! wired in), or it may fail to produce a tour within its budget.  Either
//! way [`SolverRoutePolicy`] degrades to [`NearestNeighbor`] without an
//! error escaping to the caller — the only trace is a `tracing` warning.

use std::time::{Duration, Instant};

use reefer_core::{NodeId, SimRng};
use reefer_graph::TravelGraph;
use tracing::{debug, warn};

use crate::policy::RoutePolicy;
use crate::{two_opt, NearestNeighbor, Route, RoutingResult};

// ── TspSolver ─────────────────────────────────────────────────────────────────

/// A pluggable tour solver.
///
/// `None` means "no tour found within budget" — the policy layer treats it
/// the same as the solver being absent.  Implementations must not return an
/// invalid tour in good conscience, but the policy re-validates anyway.
pub trait TspSolver: Send + Sync {
    fn name(&self) -> &'static str;

    fn solve(&self, graph: &TravelGraph, depot: NodeId, customers: &[NodeId]) -> Option<Route>;
}

// ── IteratedLocalSearchSolver ─────────────────────────────────────────────────

/// The in-tree solver: cheapest-arc construction, 2-opt descent, then
/// seeded double-bridge perturbation with best-tour retention, bounded by a
/// wall-clock budget and a pass cap.
///
/// The pass cap exists so tests can pin behavior without wall-clock races;
/// operationally the budget is the binding limit.
pub struct IteratedLocalSearchSolver {
    seed: u64,
    budget: Duration,
    max_passes: u32,
}

impl IteratedLocalSearchSolver {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            budget: Duration::from_secs(2),
            max_passes: 256,
        }
    }

    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_max_passes(mut self, max_passes: u32) -> Self {
        self.max_passes = max_passes;
        self
    }
}

impl TspSolver for IteratedLocalSearchSolver {
    fn name(&self) -> &'static str {
        "ils"
    }

    fn solve(&self, graph: &TravelGraph, depot: NodeId, customers: &[NodeId]) -> Option<Route> {
        let deadline = Instant::now() + self.budget;

        // Construction: repeatedly append the cheapest outgoing arc.  A
        // missing arc means the instance cannot be toured at all — report
        // "no solution" and let the policy layer fall back.
        let seed_route = NearestNeighbor.build_route(graph, depot, customers).ok()?;
        let mut best = seed_route.stops().to_vec();
        let mut best_minutes = two_opt::descend(&mut best, graph).ok()?;

        let mut rng = SimRng::new(self.seed);
        let mut passes = 0;
        while passes < self.max_passes && Instant::now() < deadline {
            passes += 1;
            let mut candidate = best.clone();
            double_bridge(&mut candidate, &mut rng);
            let minutes = two_opt::descend(&mut candidate, graph).ok()?;
            if minutes < best_minutes {
                best_minutes = minutes;
                best = candidate;
            }
        }
        debug!(passes, best_minutes, "ils finished");

        Some(Route::new(best))
    }
}

/// Double-bridge 4-opt perturbation: cut the interior into four segments
/// `A|B|C|D` and reorder to `A|C|B|D`.  Keeps the depot endpoints fixed and
/// the interior a permutation; large enough a kick that a following 2-opt
/// descent does not simply undo it.
fn double_bridge(stops: &mut Vec<NodeId>, rng: &mut SimRng) {
    let n = stops.len();
    if n < 5 {
        return; // fewer than three interior stops: nothing to recombine
    }
    let p1 = rng.gen_range(1..n - 3);
    let p2 = rng.gen_range(p1 + 1..n - 2);
    let p3 = rng.gen_range(p2 + 1..n - 1);

    let mut shuffled = Vec::with_capacity(n);
    shuffled.extend_from_slice(&stops[..p1]);
    shuffled.extend_from_slice(&stops[p2..p3]);
    shuffled.extend_from_slice(&stops[p1..p2]);
    shuffled.extend_from_slice(&stops[p3..]);
    *stops = shuffled;
}

// ── SolverRoutePolicy ─────────────────────────────────────────────────────────

/// Route policy delegating to a [`TspSolver`], falling back to
/// [`NearestNeighbor`] when the solver is absent, finds no tour, or returns
/// an invalid one.  The fallback is silent to callers; the diagnostic side
/// channel is a `tracing` warning.
pub struct SolverRoutePolicy {
    solver: Option<Box<dyn TspSolver>>,
    fallback: NearestNeighbor,
}

impl SolverRoutePolicy {
    pub fn new(solver: Box<dyn TspSolver>) -> Self {
        Self {
            solver: Some(solver),
            fallback: NearestNeighbor,
        }
    }

    /// A policy with no solver wired in; every route comes from the
    /// fallback.  Used where the solver capability is not present and in
    /// tests of the degraded path.
    pub fn unavailable() -> Self {
        Self {
            solver: None,
            fallback: NearestNeighbor,
        }
    }
}

impl RoutePolicy for SolverRoutePolicy {
    fn name(&self) -> &'static str {
        "solver"
    }

    fn build_route(
        &self,
        graph: &TravelGraph,
        depot: NodeId,
        customers: &[NodeId],
    ) -> RoutingResult<Route> {
        let Some(solver) = self.solver.as_deref() else {
            warn!("no TSP solver available; falling back to nearest-neighbor");
            return self.fallback.build_route(graph, depot, customers);
        };

        match solver.solve(graph, depot, customers) {
            Some(route) if route.is_valid(depot, customers) => {
                debug!(solver = solver.name(), "solver tour accepted");
                Ok(route)
            }
            Some(_) => {
                warn!(
                    solver = solver.name(),
                    "solver returned an invalid tour; falling back to nearest-neighbor"
                );
                self.fallback.build_route(graph, depot, customers)
            }
            None => {
                warn!(
                    solver = solver.name(),
                    "solver found no tour within budget; falling back to nearest-neighbor"
                );
                self.fallback.build_route(graph, depot, customers)
            }
        }
    }
}
