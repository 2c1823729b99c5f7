//! Directed travel-time graph and builder.
//!
//! # Data layout
//!
//! Travel times live in a dense row-major `node_count × node_count` matrix
//! of minutes.  Entry 0 means "no arc defined" — legal arcs always carry a
//! time ≥ 1 by the instance invariant, and the diagonal is never defined.
//! For the complete graphs this simulation routes over, the dense matrix is
//! both the smallest and the fastest representation.

use reefer_core::NodeId;

use crate::{GraphError, GraphResult};

// ── TravelGraph ───────────────────────────────────────────────────────────────

/// Immutable directed travel-time graph in minutes.
///
/// Do not construct directly; use [`TravelGraphBuilder`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelGraph {
    node_count: usize,
    /// Row-major `from × to` minutes; 0 = arc not defined.
    minutes: Vec<u32>,
}

impl TravelGraph {
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// All node ids in this graph, ascending.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count as u32).map(NodeId)
    }

    #[inline]
    fn slot(&self, from: NodeId, to: NodeId) -> Option<usize> {
        if from.index() >= self.node_count || to.index() >= self.node_count || from == to {
            return None;
        }
        Some(from.index() * self.node_count + to.index())
    }

    /// Raw travel time of the arc `from → to`, if defined.
    #[inline]
    pub fn minutes(&self, from: NodeId, to: NodeId) -> Option<u32> {
        let m = self.minutes[self.slot(from, to)?];
        (m > 0).then_some(m)
    }

    /// Travel time as consumed by the vehicle: defined arcs are clamped to a
    /// 1-minute floor so no leg ever takes zero elapsed time.
    pub fn leg_minutes(&self, from: NodeId, to: NodeId) -> GraphResult<u32> {
        self.minutes(from, to)
            .map(|m| m.max(1))
            .ok_or(GraphError::MissingArc { from, to })
    }
}

// ── TravelGraphBuilder ────────────────────────────────────────────────────────

/// Construct a [`TravelGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use reefer_core::NodeId;
/// use reefer_graph::TravelGraphBuilder;
///
/// let mut b = TravelGraphBuilder::new(3);
/// b.set_leg(NodeId(0), NodeId(1), 5).unwrap();
/// b.set_arc(NodeId(1), NodeId(2), 7).unwrap();
/// let g = b.build();
/// assert_eq!(g.minutes(NodeId(1), NodeId(0)), Some(5)); // set_leg is symmetric
/// assert_eq!(g.minutes(NodeId(2), NodeId(1)), None);    // set_arc is not
/// ```
pub struct TravelGraphBuilder {
    node_count: usize,
    minutes: Vec<u32>,
}

impl TravelGraphBuilder {
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            minutes: vec![0; node_count * node_count],
        }
    }

    fn check(&self, from: NodeId, to: NodeId) -> GraphResult<usize> {
        if from.index() >= self.node_count {
            return Err(GraphError::UnknownNode(from));
        }
        if to.index() >= self.node_count {
            return Err(GraphError::UnknownNode(to));
        }
        if from == to {
            return Err(GraphError::SelfArc(from));
        }
        Ok(from.index() * self.node_count + to.index())
    }

    /// Set the **directed** arc `from → to`.  Times below 1 are stored as 1
    /// (the graph invariant; zero is reserved for "undefined").
    pub fn set_arc(&mut self, from: NodeId, to: NodeId, minutes: u32) -> GraphResult<()> {
        let slot = self.check(from, to)?;
        self.minutes[slot] = minutes.max(1);
        Ok(())
    }

    /// Convenience: set both directions of a symmetric leg.
    pub fn set_leg(&mut self, a: NodeId, b: NodeId, minutes: u32) -> GraphResult<()> {
        self.set_arc(a, b, minutes)?;
        self.set_arc(b, a, minutes)
    }

    pub fn build(self) -> TravelGraph {
        TravelGraph {
            node_count: self.node_count,
            minutes: self.minutes,
        }
    }
}
