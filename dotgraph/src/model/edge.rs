//! Edges and their endpoints.

use super::common::Common;
use super::graph::{Graph, GraphData, GraphType};
use super::node::Node;
use super::snapshot::SubgraphSnapshot;
use super::writer;
use crate::core::attr::{AttrValue, AttributeTable};
use crate::core::constants::EDGE_ATTRIBUTES;
use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

/// One end of an edge: a node reference (possibly with a port, as in `a:p`),
/// or a frozen copy of a subgraph, as in `a -- {b c}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Name(String),
    Subgraph(Rc<SubgraphSnapshot>),
}

impl Endpoint {
    /// Returns the node reference, if this endpoint is one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Endpoint::Name(name) => Some(name),
            Endpoint::Subgraph(_) => None,
        }
    }
}

impl From<&str> for Endpoint {
    fn from(name: &str) -> Self {
        Endpoint::Name(name.to_string())
    }
}

impl From<String> for Endpoint {
    fn from(name: String) -> Self {
        Endpoint::Name(name)
    }
}

impl From<&String> for Endpoint {
    fn from(name: &String) -> Self {
        Endpoint::Name(name.clone())
    }
}

impl From<&Node> for Endpoint {
    fn from(node: &Node) -> Self {
        Endpoint::Name(node.name())
    }
}

/// Subgraphs and clusters are referenced by name.
impl From<&Graph> for Endpoint {
    fn from(graph: &Graph) -> Self {
        Endpoint::Name(graph.name())
    }
}

impl From<SubgraphSnapshot> for Endpoint {
    fn from(snapshot: SubgraphSnapshot) -> Self {
        Endpoint::Subgraph(Rc::new(snapshot))
    }
}

impl From<Rc<SubgraphSnapshot>> for Endpoint {
    fn from(snapshot: Rc<SubgraphSnapshot>) -> Self {
        Endpoint::Subgraph(snapshot)
    }
}

/// Compares two endpoint pairs. Undirected pairs match in either order.
pub(crate) fn same_points(
    a: &(Endpoint, Endpoint),
    b: &(Endpoint, Endpoint),
    directed: bool,
) -> bool {
    if a == b {
        return true;
    }
    !directed && a.0 == b.1 && a.1 == b.0
}

#[derive(Debug)]
pub(crate) struct EdgeData {
    pub(crate) source: Endpoint,
    pub(crate) destination: Endpoint,
    pub(crate) attributes: AttributeTable,
    pub(crate) parent: Weak<RefCell<GraphData>>,
    pub(crate) sequence: Option<usize>,
}

/// An edge between two endpoints. Cloning an edge creates another handle to
/// the same edge.
///
/// Two edges are equal when they connect the same endpoints. In an undirected
/// graph the order of the endpoints doesn't matter. The check uses the type of
/// the graph at the time of the comparison.
#[derive(Debug, Clone)]
pub struct Edge(pub(crate) Rc<RefCell<EdgeData>>);

impl Edge {
    pub fn new<S, D>(src: S, dst: D) -> Self
    where
        S: Into<Endpoint>,
        D: Into<Endpoint>,
    {
        Self::with_attributes(src, dst, AttributeTable::new())
    }

    pub fn with_attributes<S, D>(
        src: S,
        dst: D,
        attributes: AttributeTable,
    ) -> Self
    where
        S: Into<Endpoint>,
        D: Into<Endpoint>,
    {
        Self::from_data(EdgeData {
            source: src.into(),
            destination: dst.into(),
            attributes,
            parent: Weak::new(),
            sequence: None,
        })
    }

    pub(crate) fn from_data(data: EdgeData) -> Self {
        Edge(Rc::new(RefCell::new(data)))
    }

    /// Sets the attribute \p key and returns the edge.
    pub fn with<V: Into<AttrValue>>(self, key: &str, value: V) -> Self {
        self.set(key, value);
        self
    }

    pub fn source(&self) -> Endpoint {
        self.0.borrow().source.clone()
    }

    pub fn destination(&self) -> Endpoint {
        self.0.borrow().destination.clone()
    }

    pub fn points(&self) -> (Endpoint, Endpoint) {
        let data = self.0.borrow();
        (data.source.clone(), data.destination.clone())
    }

    /// Returns true if both handles refer to the same edge.
    pub fn ptr_eq(&self, other: &Edge) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn to_dot_string(&self) -> String {
        let ctx = writer::Context::new("", self.top_graph_type());
        writer::write_edge(self, &ctx)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Edge) -> bool {
        let directed = self.top_graph_type() != Some(GraphType::Graph);
        same_points(&self.points(), &other.points(), directed)
    }
}

impl Eq for Edge {}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// The endpoint hashes are summed, so reversed edges hash alike. This keeps the
// hash consistent with the undirected equality.
impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (src, dst) = self.points();
        state.write_u64(hash_of(&src).wrapping_add(hash_of(&dst)));
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dot_string())
    }
}

impl Common for Edge {
    fn read_attributes<R>(&self, f: impl FnOnce(&AttributeTable) -> R) -> R {
        f(&self.0.borrow().attributes)
    }

    fn update_attributes<R>(
        &self,
        f: impl FnOnce(&mut AttributeTable) -> R,
    ) -> R {
        f(&mut self.0.borrow_mut().attributes)
    }

    fn parent_graph(&self) -> Option<Graph> {
        self.0.borrow().parent.upgrade().map(Graph)
    }

    fn set_parent_graph(&self, parent: &Graph) {
        self.0.borrow_mut().parent = Rc::downgrade(&parent.0);
    }

    fn sequence(&self) -> Option<usize> {
        self.0.borrow().sequence
    }

    fn set_sequence(&self, seq: usize) {
        self.0.borrow_mut().sequence = Some(seq);
    }

    fn defaults_name(&self) -> &'static str {
        "edge"
    }

    fn known_attributes(&self) -> &'static [&'static str] {
        EDGE_ATTRIBUTES
    }
}
