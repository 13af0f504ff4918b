//! A graph builder that converts parsed AST trees to graphs.

use crate::core::attr::{AttrValue, AttributeTable};
use crate::gv::parser::ast;
use crate::model::{
    Common, DefaultTarget, Dot, Edge, Endpoint, Graph, GraphType, Node,
};
use std::rc::Rc;

// The methods in this file are responsible for converting the parsed Graphviz
// AST into the object model. Every top-level graph becomes one `Dot`.

/// This class constructs the object model from the parsed AST.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    // The reduced top-level graphs, in the order of the source.
    graphs: Vec<Dot>,
}

/// Merges the attribute lists of a statement. Later values replace earlier
/// ones but keep their position.
fn to_attributes(list: &ast::AttributeList) -> AttributeTable {
    let mut table = AttributeTable::new();
    for (key, value) in list.iter() {
        let value = match value {
            Some(text) => AttrValue::Text(text.clone()),
            None => AttrValue::Implicit,
        };
        table.insert(key.clone(), value);
    }
    table
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self { graphs: Vec::new() }
    }

    pub fn visit_graph(&mut self, graph: &ast::Graph) {
        let graph_type = if graph.directed {
            GraphType::Digraph
        } else {
            GraphType::Graph
        };
        let dot = Dot::new(&graph.name, graph_type);
        dot.set_strict(graph.strict);

        for stmt in &graph.list.list {
            self.visit_stmt(&dot, stmt);
        }
        Self::update_parent_graph_hierarchy(&dot);

        #[cfg(feature = "log")]
        log::debug!(
            "Reduced {} '{}' with {} statements",
            graph_type,
            graph.name,
            graph.list.list.len()
        );
        self.graphs.push(dot);
    }

    /// Links every element under \p dot, including the ones in nested
    /// subgraphs, to the top-level graph.
    fn update_parent_graph_hierarchy(dot: &Dot) {
        let root = dot.graph();
        root.set_parent_graph(root);
    }

    fn visit_stmt(&mut self, g: &Graph, stmt: &ast::Stmt) {
        match stmt {
            ast::Stmt::Edge(e) => {
                self.visit_edge(g, e);
            }
            ast::Stmt::Node(n) => {
                self.visit_node(g, n);
            }
            ast::Stmt::Attribute(a) => {
                self.visit_att(g, a);
            }
            ast::Stmt::Assignment(key, value) => {
                g.set(key, AttrValue::Text(value.clone()));
            }
            ast::Stmt::SubGraph(sg) => {
                let sgraph = self.build_subgraph(sg);
                g.add_subgraph(&sgraph);
            }
        }
    }

    fn build_subgraph(&mut self, sg: &ast::SubGraph) -> Graph {
        let sgraph = Graph::new_subgraph(&sg.name);
        sgraph.set_show_keyword(sg.keyword);
        for stmt in &sg.list.list {
            self.visit_stmt(&sgraph, stmt);
        }
        sgraph
    }

    fn to_endpoint(&mut self, e: &ast::EdgeEndpoint) -> Endpoint {
        match e {
            ast::EdgeEndpoint::Node(id) => Endpoint::Name(id.to_ref()),
            ast::EdgeEndpoint::SubGraph(sg) => {
                let sgraph = self.build_subgraph(sg);
                Endpoint::Subgraph(Rc::new(sgraph.freeze()))
            }
        }
    }

    // a -> b -> c becomes the edges a -> b and b -> c, with the same
    // attributes.
    fn visit_edge(&mut self, g: &Graph, e: &ast::EdgeStmt) {
        let attrs = to_attributes(&e.list);
        let mut prev = self.to_endpoint(&e.from);
        for dest in &e.to {
            let curr = self.to_endpoint(&dest.0);
            let edge = Edge::with_attributes(prev, curr.clone(), attrs.clone());
            g.add_edge(&edge);
            prev = curr;
        }
    }

    fn visit_node(&mut self, g: &Graph, n: &ast::NodeStmt) {
        let node = Node::with_attributes(n.id.to_ref(), to_attributes(&n.list));
        g.add_node(&node);
    }

    fn visit_att(&mut self, g: &Graph, att: &ast::AttrStmt) {
        let target = match att.target {
            ast::AttrStmtTarget::Graph => DefaultTarget::Graph,
            ast::AttrStmtTarget::Node => DefaultTarget::Node,
            ast::AttrStmtTarget::Edge => DefaultTarget::Edge,
        };
        g.add_node(&Node::defaults(target, to_attributes(&att.list)));
    }

    /// Returns the graphs that were built so far.
    pub fn get(&self) -> Vec<Dot> {
        self.graphs.clone()
    }
}
