//! Unit tests for routes and the three construction policies.

use reefer_core::NodeId;
use reefer_graph::{asymmetric_instance, symmetric_instance, TravelGraph, TravelGraphBuilder};

use crate::{
    IteratedLocalSearchSolver, NearestNeighbor, Route, RoutePolicy, SolverRoutePolicy, TspSolver,
    TwoOpt,
};

const DEPOT: NodeId = NodeId(0);

fn customers(n: u32) -> Vec<NodeId> {
    (1..=n).map(NodeId).collect()
}

/// Symmetric 5-node instance where greedy construction is short-sighted:
/// nearest-neighbor walks 0→1→2→3 down a cheap chain and then pays the
/// expensive 3↔4 leg, which 2-opt can splice out.
fn greedy_trap() -> TravelGraph {
    let mut b = TravelGraphBuilder::new(5);
    let legs = [
        (0, 1, 1),
        (1, 2, 1),
        (2, 3, 1),
        (3, 4, 10),
        (4, 0, 1),
        (0, 2, 5),
        (0, 3, 2),
        (1, 3, 6),
        (1, 4, 7),
        (2, 4, 4),
    ];
    for (a, bb, t) in legs {
        b.set_leg(NodeId(a), NodeId(bb), t).unwrap();
    }
    b.build()
}

#[cfg(test)]
mod route {
    use super::*;

    #[test]
    fn validity_predicate() {
        let cs = customers(3);
        assert!(Route::new(vec![NodeId(0), NodeId(2), NodeId(1), NodeId(3), NodeId(0)])
            .is_valid(DEPOT, &cs));

        // wrong endpoints
        assert!(!Route::new(vec![NodeId(1), NodeId(2), NodeId(3), NodeId(0)]).is_valid(DEPOT, &cs));
        // duplicate customer
        assert!(!Route::new(vec![NodeId(0), NodeId(1), NodeId(1), NodeId(3), NodeId(0)])
            .is_valid(DEPOT, &cs));
        // omission
        assert!(!Route::new(vec![NodeId(0), NodeId(1), NodeId(2), NodeId(0)]).is_valid(DEPOT, &cs));
        // stray node
        assert!(!Route::new(vec![NodeId(0), NodeId(1), NodeId(2), NodeId(9), NodeId(0)])
            .is_valid(DEPOT, &cs));
    }

    #[test]
    fn ensure_valid_names_the_policy() {
        let bad = Route::new(vec![DEPOT, DEPOT]);
        let err = bad.ensure_valid(DEPOT, &customers(1), "test-policy").unwrap_err();
        assert!(err.to_string().contains("test-policy"));
    }

    #[test]
    fn total_minutes_sums_legs() {
        let g = greedy_trap();
        let r = Route::new(vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3), NodeId(4), NodeId(0)]);
        assert_eq!(r.total_minutes(&g).unwrap(), 1 + 1 + 1 + 10 + 1);
    }

    #[test]
    fn duplicate_adjacent_stop_costs_nothing() {
        let g = greedy_trap();
        let r = Route::new(vec![NodeId(0), NodeId(1), NodeId(1), NodeId(0)]);
        assert_eq!(r.total_minutes(&g).unwrap(), 2);
    }
}

#[cfg(test)]
mod nearest {
    use super::*;

    #[test]
    fn walks_the_cheap_chain() {
        let g = greedy_trap();
        let r = NearestNeighbor.build_route(&g, DEPOT, &customers(4)).unwrap();
        assert_eq!(
            r.stops(),
            &[NodeId(0), NodeId(1), NodeId(2), NodeId(3), NodeId(4), NodeId(0)]
        );
        assert_eq!(r.total_minutes(&g).unwrap(), 14);
    }

    #[test]
    fn equal_times_break_to_lowest_node_id() {
        let mut b = TravelGraphBuilder::new(4);
        b.set_leg(NodeId(0), NodeId(1), 5).unwrap();
        b.set_leg(NodeId(0), NodeId(2), 5).unwrap(); // tie with node 1
        b.set_leg(NodeId(0), NodeId(3), 9).unwrap();
        b.set_leg(NodeId(1), NodeId(2), 2).unwrap();
        b.set_leg(NodeId(1), NodeId(3), 2).unwrap(); // tie with node 2
        b.set_leg(NodeId(2), NodeId(3), 4).unwrap();
        let g = b.build();

        let r = NearestNeighbor.build_route(&g, DEPOT, &customers(3)).unwrap();
        // 0: {1,2} tie at 5 → 1.  1: {2,3} tie at 2 → 2.
        assert_eq!(r.stops(), &[NodeId(0), NodeId(1), NodeId(2), NodeId(3), NodeId(0)]);
    }

    #[test]
    fn customer_ordering_does_not_matter() {
        let g = symmetric_instance(9, 3, 12.0);
        let cs = customers(9);
        let mut reversed = cs.clone();
        reversed.reverse();
        let a = NearestNeighbor.build_route(&g, DEPOT, &cs).unwrap();
        let b = NearestNeighbor.build_route(&g, DEPOT, &reversed).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn valid_on_generated_instances() {
        for seed in 0..8 {
            let g = asymmetric_instance(10, seed, 12.0, 0.5, 0.35);
            let cs = customers(10);
            let r = NearestNeighbor.build_route(&g, DEPOT, &cs).unwrap();
            assert!(r.is_valid(DEPOT, &cs), "seed {seed}: {:?}", r.stops());
        }
    }
}

#[cfg(test)]
mod two_opt {
    use super::*;

    #[test]
    fn splices_out_the_expensive_leg() {
        let g = greedy_trap();
        let cs = customers(4);
        let nn = NearestNeighbor.build_route(&g, DEPOT, &cs).unwrap();
        let improved = TwoOpt.build_route(&g, DEPOT, &cs).unwrap();
        assert!(improved.is_valid(DEPOT, &cs));
        assert!(
            improved.total_minutes(&g).unwrap() < nn.total_minutes(&g).unwrap(),
            "expected strict improvement over {:?}",
            nn.stops()
        );
    }

    #[test]
    fn never_worse_than_seed() {
        for seed in 0..12 {
            let g = asymmetric_instance(10, seed, 12.0, 0.5, 0.35);
            let cs = customers(10);
            let nn = NearestNeighbor.build_route(&g, DEPOT, &cs).unwrap();
            let lo = TwoOpt.build_route(&g, DEPOT, &cs).unwrap();
            assert!(lo.is_valid(DEPOT, &cs), "seed {seed}");
            assert!(
                lo.total_minutes(&g).unwrap() <= nn.total_minutes(&g).unwrap(),
                "seed {seed}: 2-opt worsened the seed route"
            );
        }
    }

    #[test]
    fn single_customer_is_a_fixed_point() {
        let mut b = TravelGraphBuilder::new(2);
        b.set_leg(NodeId(0), NodeId(1), 5).unwrap();
        let g = b.build();
        let r = TwoOpt.build_route(&g, DEPOT, &customers(1)).unwrap();
        assert_eq!(r.stops(), &[NodeId(0), NodeId(1), NodeId(0)]);
    }
}

#[cfg(test)]
mod solver {
    use super::*;

    /// Solver stub that always declines.
    struct Declines;
    impl TspSolver for Declines {
        fn name(&self) -> &'static str {
            "declines"
        }
        fn solve(&self, _: &TravelGraph, _: NodeId, _: &[NodeId]) -> Option<Route> {
            None
        }
    }

    /// Solver stub that returns a malformed tour.
    struct Malformed;
    impl TspSolver for Malformed {
        fn name(&self) -> &'static str {
            "malformed"
        }
        fn solve(&self, _: &TravelGraph, depot: NodeId, _: &[NodeId]) -> Option<Route> {
            Some(Route::new(vec![depot, depot]))
        }
    }

    #[test]
    fn unavailable_solver_matches_nearest_neighbor_exactly() {
        let g = asymmetric_instance(10, 7, 12.0, 0.5, 0.35);
        let cs = customers(10);
        let via_policy = SolverRoutePolicy::unavailable().build_route(&g, DEPOT, &cs).unwrap();
        let direct = NearestNeighbor.build_route(&g, DEPOT, &cs).unwrap();
        assert_eq!(via_policy, direct);
    }

    #[test]
    fn declining_solver_falls_back() {
        let g = greedy_trap();
        let cs = customers(4);
        let r = SolverRoutePolicy::new(Box::new(Declines)).build_route(&g, DEPOT, &cs).unwrap();
        assert_eq!(r, NearestNeighbor.build_route(&g, DEPOT, &cs).unwrap());
    }

    #[test]
    fn malformed_tour_falls_back() {
        let g = greedy_trap();
        let cs = customers(4);
        let r = SolverRoutePolicy::new(Box::new(Malformed)).build_route(&g, DEPOT, &cs).unwrap();
        assert_eq!(r, NearestNeighbor.build_route(&g, DEPOT, &cs).unwrap());
    }

    #[test]
    fn ils_tour_is_valid_and_no_worse_than_nearest_neighbor() {
        for seed in 0..6 {
            let g = asymmetric_instance(10, seed, 12.0, 0.5, 0.35);
            let cs = customers(10);
            let solver = IteratedLocalSearchSolver::new(seed).with_max_passes(32);
            let r = SolverRoutePolicy::new(Box::new(solver)).build_route(&g, DEPOT, &cs).unwrap();
            let nn = NearestNeighbor.build_route(&g, DEPOT, &cs).unwrap();
            assert!(r.is_valid(DEPOT, &cs), "seed {seed}");
            assert!(
                r.total_minutes(&g).unwrap() <= nn.total_minutes(&g).unwrap(),
                "seed {seed}: solver tour worse than greedy"
            );
        }
    }

    #[test]
    fn ils_beats_plain_greedy_on_the_trap() {
        let g = greedy_trap();
        let cs = customers(4);
        let solver = IteratedLocalSearchSolver::new(1).with_max_passes(16);
        let r = SolverRoutePolicy::new(Box::new(solver)).build_route(&g, DEPOT, &cs).unwrap();
        let nn = NearestNeighbor.build_route(&g, DEPOT, &cs).unwrap();
        assert!(r.total_minutes(&g).unwrap() < nn.total_minutes(&g).unwrap());
    }
}
