//! `reefer-graph` — travel-time graph and synthetic instances for the
//! `reefer-sim` cold-chain twin.
//!
//! The routing graphs here are small and complete (every ordered pair of
//! distinct nodes has a travel time), so the representation is a dense
//! matrix rather than an adjacency structure: O(1) lookups, no pointer
//! chasing in the policy inner loops.
//!
//! [`gen`] provides the seeded synthetic delivery instances used by the
//! demos and tests — a symmetric rounded-Euclidean one and an asymmetric
//! jittered one that separates the routing heuristics.

pub mod error;
pub mod r#gen;
pub mod graph;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GraphError, GraphResult};
pub use r#gen::{asymmetric_instance, symmetric_instance};
pub use graph::{TravelGraph, TravelGraphBuilder};
