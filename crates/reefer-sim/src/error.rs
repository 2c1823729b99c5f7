use reefer_core::{CoreError, NodeId, SkuId};
use reefer_graph::GraphError;
use reefer_routing::RoutingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Routing(#[from] RoutingError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("demand references {0}, which is not a node of the travel graph")]
    DemandNodeUnknown(NodeId),

    #[error("demand at the depot ({0}) cannot be serviced")]
    DemandAtDepot(NodeId),

    #[error("{0} is not registered in the run's SKU table")]
    SkuUnknown(SkuId),
}

pub type SimResult<T> = Result<T, SimError>;
