//! The object model: graphs, subgraphs, clusters, nodes and edges, and the
//! writer that turns them into DOT text.

pub mod common;
pub mod convert;
pub mod dot;
pub mod edge;
pub mod graph;
pub mod node;
pub mod snapshot;
mod writer;

pub use common::Common;
pub use convert::{
    graph_from_adjacency_matrix, graph_from_edges, graph_from_incidence_matrix,
};
pub use dot::Dot;
pub use edge::{Edge, Endpoint};
pub use graph::{Graph, GraphKind, GraphType};
pub use node::{DefaultTarget, Node};
pub use snapshot::SubgraphSnapshot;
