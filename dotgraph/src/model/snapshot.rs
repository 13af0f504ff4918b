//! Frozen copies of subgraphs. An edge like `a -> {b c}` keeps a copy of the
//! subgraph as its endpoint rather than a live reference.

use super::common::Common;
use super::edge::{Edge, EdgeData, Endpoint};
use super::graph::{Graph, GraphKind, GraphType};
use super::node::{Node, NodeData};
use crate::core::attr::{AttrValue, AttributeTable};
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeSnapshot {
    name: String,
    port: Option<String>,
    defaults: bool,
    attributes: Vec<(String, AttrValue)>,
    sequence: Option<usize>,
}

impl NodeSnapshot {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, AttrValue)] {
        &self.attributes
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeSnapshot {
    source: Endpoint,
    destination: Endpoint,
    attributes: Vec<(String, AttrValue)>,
    sequence: Option<usize>,
}

impl EdgeSnapshot {
    pub fn source(&self) -> &Endpoint {
        &self.source
    }

    pub fn destination(&self) -> &Endpoint {
        &self.destination
    }

    pub fn attributes(&self) -> &[(String, AttrValue)] {
        &self.attributes
    }
}

/// A deep, read-only copy of a subgraph. Two snapshots are equal when their
/// contents are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubgraphSnapshot {
    name: String,
    kind: GraphKind,
    show_keyword: bool,
    suppress_disconnected: bool,
    simplify: bool,
    attributes: Vec<(String, AttrValue)>,
    nodes: Vec<NodeSnapshot>,
    edges: Vec<EdgeSnapshot>,
    subgraphs: Vec<SubgraphSnapshot>,
    sequence: Option<usize>,
}

fn freeze_table(table: &AttributeTable) -> Vec<(String, AttrValue)> {
    table.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

fn thaw_table(list: &[(String, AttrValue)]) -> AttributeTable {
    list.iter().cloned().collect()
}

impl SubgraphSnapshot {
    /// Copies the current contents of \p graph.
    pub fn capture(graph: &Graph) -> Self {
        let data = graph.0.borrow();
        let nodes = data
            .nodes
            .values()
            .map(|node| {
                let n = node.0.borrow();
                NodeSnapshot {
                    name: n.name.clone(),
                    port: n.port.clone(),
                    defaults: n.defaults,
                    attributes: freeze_table(&n.attributes),
                    sequence: n.sequence,
                }
            })
            .collect();
        let edges = data
            .edges
            .values()
            .map(|edge| {
                let e = edge.0.borrow();
                EdgeSnapshot {
                    source: e.source.clone(),
                    destination: e.destination.clone(),
                    attributes: freeze_table(&e.attributes),
                    sequence: e.sequence,
                }
            })
            .collect();
        let subgraphs = data.subgraphs.values().map(Self::capture).collect();

        SubgraphSnapshot {
            name: data.name.clone(),
            kind: data.kind,
            show_keyword: data.show_keyword,
            suppress_disconnected: data.suppress_disconnected,
            simplify: data.simplify,
            attributes: freeze_table(&data.attributes),
            nodes,
            edges,
            subgraphs,
            sequence: data.sequence,
        }
    }

    /// Builds a detached graph with the contents of the snapshot. Sequence
    /// numbers are kept, so the statement order is preserved.
    pub fn to_graph(&self) -> Graph {
        let graph = Graph::create(&self.name, self.kind, GraphType::Digraph);
        {
            let mut data = graph.0.borrow_mut();
            data.show_keyword = self.show_keyword;
            data.suppress_disconnected = self.suppress_disconnected;
            data.simplify = self.simplify;
            data.attributes = thaw_table(&self.attributes);
            data.sequence = self.sequence;
        }

        let mut last_seq = 0;
        for n in &self.nodes {
            let node = Node::from_data(NodeData {
                name: n.name.clone(),
                port: n.port.clone(),
                attributes: thaw_table(&n.attributes),
                defaults: n.defaults,
                parent: Rc::downgrade(&graph.0),
                sequence: n.sequence,
            });
            graph.0.borrow_mut().nodes.insert(n.name.clone(), node);
            last_seq = last_seq.max(n.sequence.unwrap_or(0));
        }
        for e in &self.edges {
            let edge = Edge::from_data(EdgeData {
                source: e.source.clone(),
                destination: e.destination.clone(),
                attributes: thaw_table(&e.attributes),
                parent: Weak::new(),
                sequence: e.sequence,
            });
            edge.set_parent_graph(&graph);
            let key = (e.source.clone(), e.destination.clone());
            graph.0.borrow_mut().edges.insert(key, edge);
            last_seq = last_seq.max(e.sequence.unwrap_or(0));
        }
        for s in &self.subgraphs {
            let sgraph = s.to_graph();
            sgraph.set_parent_graph(&graph);
            graph.0.borrow_mut().subgraphs.insert(s.name.clone(), sgraph);
            last_seq = last_seq.max(s.sequence.unwrap_or(0));
        }
        graph.0.borrow_mut().next_child = last_seq + 1;
        graph
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn attributes(&self) -> &[(String, AttrValue)] {
        &self.attributes
    }

    pub fn nodes(&self) -> &[NodeSnapshot] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeSnapshot] {
        &self.edges
    }

    pub fn subgraphs(&self) -> &[SubgraphSnapshot] {
        &self.subgraphs
    }
}

impl Graph {
    /// Takes a frozen copy of the graph, for use as an edge endpoint.
    pub fn freeze(&self) -> SubgraphSnapshot {
        SubgraphSnapshot::capture(self)
    }
}
