use reefer_core::NodeId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0} not in graph")]
    UnknownNode(NodeId),

    #[error("no travel time defined for arc {from} -> {to}")]
    MissingArc { from: NodeId, to: NodeId },

    #[error("self-arc {0} -> {0} is not allowed")]
    SelfArc(NodeId),
}

pub type GraphResult<T> = Result<T, GraphError>;
