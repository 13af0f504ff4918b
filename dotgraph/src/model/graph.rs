//! Graphs, subgraphs and clusters.

use super::common::Common;
use super::edge::{Edge, Endpoint};
use super::node::{DefaultTarget, Node};
use super::writer::{self, Placement};
use crate::adt::multimap::MultiMap;
use crate::core::attr::{AttrValue, AttributeTable};
use crate::core::constants::{CLUSTER_ATTRIBUTES, GRAPH_ATTRIBUTES};
use crate::core::error::DotError;
use crate::core::quote::quote_if_necessary;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;

/// The directedness of a top-level graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphType {
    Graph,
    Digraph,
}

impl GraphType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphType::Graph => "graph",
            GraphType::Digraph => "digraph",
        }
    }

    pub fn is_directed(&self) -> bool {
        matches!(self, GraphType::Digraph)
    }

    /// The edge operator of this graph type.
    pub fn edge_op(&self) -> &'static str {
        match self {
            GraphType::Graph => "--",
            GraphType::Digraph => "->",
        }
    }
}

impl FromStr for GraphType {
    type Err = DotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "graph" => Ok(GraphType::Graph),
            "digraph" => Ok(GraphType::Digraph),
            _ => Err(DotError::InvalidGraphType(s.to_string())),
        }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Selects the header keyword of a graph and how its name is formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    /// A top-level `graph` or `digraph`.
    Root,
    Subgraph,
    /// A subgraph whose name starts with `cluster_`.
    Cluster,
}

#[derive(Debug)]
pub(crate) struct GraphData {
    pub(crate) name: String,
    pub(crate) kind: GraphKind,
    pub(crate) graph_type: GraphType,
    pub(crate) strict: bool,
    pub(crate) suppress_disconnected: bool,
    pub(crate) simplify: bool,
    // Cleared for anonymous `{ ... }` bodies.
    pub(crate) show_keyword: bool,
    pub(crate) attributes: AttributeTable,
    pub(crate) nodes: MultiMap<String, Node>,
    pub(crate) edges: MultiMap<(Endpoint, Endpoint), Edge>,
    pub(crate) subgraphs: MultiMap<String, Graph>,
    // The sequence number of the next child.
    pub(crate) next_child: usize,
    pub(crate) parent: Weak<RefCell<GraphData>>,
    pub(crate) sequence: Option<usize>,
}

/// A graph, subgraph or cluster. Cloning a graph creates another handle to the
/// same graph.
///
/// Every element keeps a non-owning link to the top-level graph it belongs to.
/// A graph that was not added to another graph is its own parent.
#[derive(Debug, Clone)]
pub struct Graph(pub(crate) Rc<RefCell<GraphData>>);

/// Follows the parent links from \p start to the graph that is its own parent.
pub(crate) fn top_graph(start: Option<Graph>) -> Option<Graph> {
    let mut current = start?;
    loop {
        match current.parent_graph() {
            Some(parent) if !parent.ptr_eq(&current) => current = parent,
            _ => return Some(current),
        }
    }
}

/// Returns the type of the top-level graph above \p start. A detached subgraph
/// has no type.
pub(crate) fn top_graph_type(start: Option<Graph>) -> Option<GraphType> {
    let top = top_graph(start)?;
    let data = top.0.borrow();
    match data.kind {
        GraphKind::Root => Some(data.graph_type),
        _ => None,
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new("G", GraphType::Digraph)
    }
}

impl Graph {
    pub(crate) fn create(
        name: &str,
        kind: GraphKind,
        graph_type: GraphType,
    ) -> Self {
        let graph = Graph(Rc::new_cyclic(|me| {
            RefCell::new(GraphData {
                name: name.to_string(),
                kind,
                graph_type,
                strict: false,
                suppress_disconnected: false,
                simplify: false,
                show_keyword: true,
                attributes: AttributeTable::new(),
                nodes: MultiMap::new(),
                edges: MultiMap::new(),
                subgraphs: MultiMap::new(),
                next_child: 1,
                parent: me.clone(),
                sequence: None,
            })
        }));
        #[cfg(feature = "log")]
        log::debug!("Created {:?} '{}'", kind, name);
        graph
    }

    /// Creates a top-level graph.
    pub fn new(name: &str, graph_type: GraphType) -> Self {
        Self::create(name, GraphKind::Root, graph_type)
    }

    pub fn new_subgraph(name: &str) -> Self {
        Self::create(name, GraphKind::Subgraph, GraphType::Digraph)
    }

    /// Creates a cluster. The name gets the `cluster_` prefix.
    pub fn new_cluster(name: &str) -> Self {
        let name = quote_if_necessary(&format!("cluster_{}", name));
        Self::create(&name, GraphKind::Cluster, GraphType::Digraph)
    }

    /// Sets the attribute \p key and returns the graph.
    pub fn with<V: Into<AttrValue>>(self, key: &str, value: V) -> Self {
        self.set(key, value);
        self
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    pub fn set_name(&self, name: &str) {
        self.0.borrow_mut().name = name.to_string();
    }

    pub fn kind(&self) -> GraphKind {
        self.0.borrow().kind
    }

    pub fn graph_type(&self) -> GraphType {
        self.0.borrow().graph_type
    }

    pub fn set_type(&self, graph_type: GraphType) {
        self.0.borrow_mut().graph_type = graph_type;
    }

    pub fn is_strict(&self) -> bool {
        self.0.borrow().strict
    }

    pub fn set_strict(&self, strict: bool) {
        self.0.borrow_mut().strict = strict;
    }

    pub fn suppress_disconnected(&self) -> bool {
        self.0.borrow().suppress_disconnected
    }

    /// Nodes that are not connected to any edge are left out of the output.
    pub fn set_suppress_disconnected(&self, value: bool) {
        self.0.borrow_mut().suppress_disconnected = value;
    }

    pub fn simplify(&self) -> bool {
        self.0.borrow().simplify
    }

    /// Duplicate edges are left out of the output.
    pub fn set_simplify(&self, value: bool) {
        self.0.borrow_mut().simplify = value;
    }

    pub fn show_keyword(&self) -> bool {
        self.0.borrow().show_keyword
    }

    pub fn set_show_keyword(&self, value: bool) {
        self.0.borrow_mut().show_keyword = value;
    }

    /// Returns true if both handles refer to the same graph.
    pub fn ptr_eq(&self, other: &Graph) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns true if the graph is its own parent.
    pub fn is_top_level(&self) -> bool {
        self.parent_graph().map_or(false, |p| p.ptr_eq(self))
    }

    // The graph that elements added to this graph are linked to.
    fn owner(&self) -> Graph {
        self.parent_graph().unwrap_or_else(|| self.clone())
    }

    fn contains_graph(&self, other: &Graph) -> bool {
        self.0
            .borrow()
            .subgraphs
            .values()
            .any(|sg| sg.ptr_eq(other) || sg.contains_graph(other))
    }

    pub fn next_sequence_number(&self) -> usize {
        let mut data = self.0.borrow_mut();
        let seq = data.next_child;
        data.next_child += 1;
        seq
    }

    /// Adds \p node to the graph. The node is linked to the parent of this
    /// graph, unless a node with the same name exists already and the node is
    /// linked to some graph.
    pub fn add_node(&self, node: &Node) {
        let seq = self.next_sequence_number();
        let known = {
            let mut data = self.0.borrow_mut();
            let name = node.name();
            let known = data.nodes.contains_key(name.as_str());
            data.nodes.insert(name, node.clone());
            known
        };
        if !known || node.parent_graph().is_none() {
            node.set_parent_graph(&self.owner());
        }
        node.set_sequence(seq);
    }

    /// Deletes the nodes named \p name, or only the one at \p index among
    /// them. Returns false if nothing was deleted.
    pub fn del_node(&self, name: &str, index: Option<usize>) -> bool {
        self.0.borrow_mut().nodes.remove(name, index)
    }

    /// Returns all the nodes named \p name.
    pub fn get_node(&self, name: &str) -> Vec<Node> {
        self.0.borrow().nodes.get(name).into_iter().cloned().collect()
    }

    /// Returns all the nodes, grouped by name.
    pub fn get_nodes(&self) -> Vec<Node> {
        self.0.borrow().nodes.grouped().cloned().collect()
    }

    pub fn add_edge(&self, edge: &Edge) {
        let seq = self.next_sequence_number();
        self.0.borrow_mut().edges.insert(edge.points(), edge.clone());
        edge.set_parent_graph(&self.owner());
        edge.set_sequence(seq);
    }

    /// Deletes the edges from \p src to \p dst, or only the one at \p index
    /// among them. Returns false if nothing was deleted.
    pub fn del_edge<S, D>(&self, src: S, dst: D, index: Option<usize>) -> bool
    where
        S: Into<Endpoint>,
        D: Into<Endpoint>,
    {
        let key = (src.into(), dst.into());
        self.0.borrow_mut().edges.remove(&key, index)
    }

    /// Returns the edges from \p src to \p dst. In an undirected graph the
    /// edges from \p dst to \p src are returned if there are none in the
    /// given direction.
    pub fn get_edge<S, D>(&self, src: S, dst: D) -> Vec<Edge>
    where
        S: Into<Endpoint>,
        D: Into<Endpoint>,
    {
        let (src, dst) = (src.into(), dst.into());
        let data = self.0.borrow();
        let forward = (src, dst);
        if data.edges.contains_key(&forward) {
            return data.edges.get(&forward).into_iter().cloned().collect();
        }

        let reverse = (forward.1, forward.0);
        if self.top_graph_type() == Some(GraphType::Graph) {
            return data.edges.get(&reverse).into_iter().cloned().collect();
        }
        Vec::new()
    }

    /// Returns all the edges, grouped by their endpoints.
    pub fn get_edges(&self) -> Vec<Edge> {
        self.0.borrow().edges.grouped().cloned().collect()
    }

    /// Adds a subgraph or cluster. The subgraph and everything in it are
    /// linked to the parent of this graph.
    pub fn add_subgraph(&self, sgraph: &Graph) {
        assert!(
            sgraph.kind() != GraphKind::Root,
            "add_subgraph() expects a subgraph or a cluster"
        );
        assert!(
            !sgraph.ptr_eq(self) && !sgraph.contains_graph(self),
            "a graph can't contain itself"
        );
        let seq = self.next_sequence_number();
        self.0
            .borrow_mut()
            .subgraphs
            .insert(sgraph.name(), sgraph.clone());
        sgraph.set_sequence(seq);
        sgraph.set_parent_graph(&self.owner());
    }

    pub fn get_subgraph(&self, name: &str) -> Vec<Graph> {
        self.0.borrow().subgraphs.get(name).into_iter().cloned().collect()
    }

    /// Returns all the subgraphs, grouped by name.
    pub fn get_subgraphs(&self) -> Vec<Graph> {
        self.0.borrow().subgraphs.grouped().cloned().collect()
    }

    fn add_defaults(&self, target: DefaultTarget, attributes: AttributeTable) {
        self.add_node(&Node::defaults(target, attributes));
    }

    fn defaults_of(&self, target: DefaultTarget) -> Vec<AttributeTable> {
        self.get_node(target.as_str())
            .iter()
            .filter(|node| node.is_defaults())
            .map(|node| node.attributes())
            .collect()
    }

    /// Adds a `graph [...]` block.
    pub fn set_graph_defaults(&self, attributes: AttributeTable) {
        self.add_defaults(DefaultTarget::Graph, attributes);
    }

    pub fn get_graph_defaults(&self) -> Vec<AttributeTable> {
        self.defaults_of(DefaultTarget::Graph)
    }

    /// Adds a `node [...]` block.
    pub fn set_node_defaults(&self, attributes: AttributeTable) {
        self.add_defaults(DefaultTarget::Node, attributes);
    }

    pub fn get_node_defaults(&self) -> Vec<AttributeTable> {
        self.defaults_of(DefaultTarget::Node)
    }

    /// Adds an `edge [...]` block.
    pub fn set_edge_defaults(&self, attributes: AttributeTable) {
        self.add_defaults(DefaultTarget::Edge, attributes);
    }

    pub fn get_edge_defaults(&self) -> Vec<AttributeTable> {
        self.defaults_of(DefaultTarget::Edge)
    }

    pub fn to_dot_string(&self) -> String {
        self.to_dot_string_indented("")
    }

    /// Renders the graph, indenting each nesting level with \p indent.
    pub fn to_dot_string_indented(&self, indent: &str) -> String {
        let ctx = writer::Context::new(indent, self.top_graph_type());
        writer::write_graph(self, &ctx, Placement::TopLevel)
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Graph) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dot_string())
    }
}

impl Common for Graph {
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

    /// Links the graph and everything it contains to \p parent.
    fn set_parent_graph(&self, parent: &Graph) {
        self.0.borrow_mut().parent = Rc::downgrade(&parent.0);
        let data = self.0.borrow();
        for node in data.nodes.values() {
            node.set_parent_graph(parent);
        }
        for edge in data.edges.values() {
            edge.set_parent_graph(parent);
        }
        for sgraph in data.subgraphs.values() {
            sgraph.set_parent_graph(parent);
        }
    }

    fn sequence(&self) -> Option<usize> {
        self.0.borrow().sequence
    }

    fn set_sequence(&self, seq: usize) {
        self.0.borrow_mut().sequence = Some(seq);
    }

    fn defaults_name(&self) -> &'static str {
        "graph"
    }

    fn known_attributes(&self) -> &'static [&'static str] {
        match self.kind() {
            GraphKind::Cluster => CLUSTER_ATTRIBUTES,
            _ => GRAPH_ATTRIBUTES,
        }
    }

    // Clusters accept the graph attributes too.
    fn is_known_attribute(&self, name: &str) -> bool {
        GRAPH_ATTRIBUTES.contains(&name)
            || self.known_attributes().contains(&name)
    }
}
