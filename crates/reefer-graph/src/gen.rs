//! Seeded synthetic delivery instances.
//!
//! Both generators place the depot (node 0) at the center of the unit
//! square and scatter customers uniformly, then derive arc times from
//! scaled Euclidean distance.  The symmetric instance is the classic toy
//! case; the asymmetric one adds per-arc directional bias and jitter so
//! that nearest-neighbor, 2-opt, and the solver policy produce genuinely
//! different routes.

use reefer_core::{NodeId, SimRng};

use crate::graph::{TravelGraph, TravelGraphBuilder};

fn scatter(n_customers: usize, rng: &mut SimRng) -> Vec<(f64, f64)> {
    let mut coords = Vec::with_capacity(n_customers + 1);
    coords.push((0.5, 0.5)); // depot
    for _ in 0..n_customers {
        coords.push((rng.random::<f64>(), rng.random::<f64>()));
    }
    coords
}

fn euclid(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (a.0 - b.0, a.1 - b.1);
    (dx * dx + dy * dy).sqrt()
}

/// Complete directed graph with symmetric times: `max(1, round(dist × scale))`.
pub fn symmetric_instance(n_customers: usize, seed: u64, scale: f64) -> TravelGraph {
    let mut rng = SimRng::new(seed);
    let coords = scatter(n_customers, &mut rng);
    let n = coords.len();

    let mut b = TravelGraphBuilder::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            let t = (euclid(coords[u], coords[v]) * scale).round().max(1.0) as u32;
            // Indices are in range and u != v; set_leg cannot fail.
            let _ = b.set_leg(NodeId(u as u32), NodeId(v as u32), t);
        }
    }
    b.build()
}

/// Complete directed graph with per-arc directional bias and jitter:
///
/// ```text
/// t(u→v) = max(1, round(dist × scale × (1 + bias) × (1 + eps)))
/// bias ~ U[-asymmetry, asymmetry],  eps ~ U[-jitter, jitter]
/// ```
pub fn asymmetric_instance(
    n_customers: usize,
    seed: u64,
    scale: f64,
    asymmetry: f64,
    jitter: f64,
) -> TravelGraph {
    let mut rng = SimRng::new(seed);
    let coords = scatter(n_customers, &mut rng);
    let n = coords.len();

    let mut b = TravelGraphBuilder::new(n);
    for u in 0..n {
        for v in 0..n {
            if u == v {
                continue;
            }
            let base = euclid(coords[u], coords[v]) * scale;
            let bias = asymmetry * (rng.random::<f64>() - 0.5) * 2.0;
            let eps = jitter * (rng.random::<f64>() - 0.5) * 2.0;
            let t = (base * (1.0 + bias) * (1.0 + eps)).round().max(1.0) as u32;
            let _ = b.set_arc(NodeId(u as u32), NodeId(v as u32), t);
        }
    }
    b.build()
}
