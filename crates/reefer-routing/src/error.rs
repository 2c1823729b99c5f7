use reefer_core::NodeId;
use reefer_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutingError {
    /// A policy produced a route violating the depot-anchored-permutation
    /// contract.  Programming-error class: construction must not proceed.
    #[error("policy {policy:?} produced an invalid route: {stops:?}")]
    Invalid { policy: String, stops: Vec<NodeId> },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
