//! Renders the object model as DOT text.
//!
//! Children are written in the order of their sequence numbers, so nodes,
//! edges and subgraphs come out interleaved the way they were added.

use super::common::Common;
use super::edge::{same_points, Edge, Endpoint};
use super::graph::{Graph, GraphKind, GraphType};
use super::node::Node;
use crate::core::attr::{AttrValue, AttributeTable};
use crate::core::quote::{
    quote_attr_if_necessary, quote_id_if_necessary, quote_if_necessary,
    DEFAULT_BLOCK_NAMES,
};

/// The state that is threaded through the writer.
#[derive(Debug, Clone)]
pub(crate) struct Context<'a> {
    indent: &'a str,
    level: usize,
    // The type of the enclosing top-level graph. It selects the edge operator.
    graph_type: Option<GraphType>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(indent: &'a str, graph_type: Option<GraphType>) -> Self {
        Self {
            indent,
            level: 0,
            graph_type,
        }
    }

    pub(crate) fn prefix(&self) -> String {
        self.indent.repeat(self.level)
    }

    pub(crate) fn nested(&self) -> Self {
        Self {
            indent: self.indent,
            level: self.level + 1,
            graph_type: self.graph_type,
        }
    }

    fn is_directed(&self) -> bool {
        self.graph_type != Some(GraphType::Graph)
    }

    fn edge_op(&self) -> &'static str {
        match self.graph_type {
            Some(GraphType::Digraph) => "->",
            _ => "--",
        }
    }
}

/// Where a graph is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// A standalone document. Ends with a newline.
    TopLevel,
    /// A statement inside another graph.
    Nested,
    /// An edge endpoint, as in `a -> { b c }`. Starts on the edge's line.
    Inline,
}

/// Formats a single `key=value` pair. Implicit values are written as the bare
/// key.
pub(crate) fn format_attr(key: &str, value: &AttrValue) -> String {
    match value {
        AttrValue::Implicit => key.to_string(),
        _ => format!("{}={}", key, quote_attr_if_necessary(value)),
    }
}

/// Formats the attribute list as `[a=1, b=2]`. Returns an empty string, without
/// the prefix, if there are no attributes.
pub(crate) fn attrs_string(attrs: &AttributeTable, prefix: &str) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let list: Vec<String> =
        attrs.iter().map(|(k, v)| format_attr(k, v)).collect();
    format!("{}[{}]", prefix, list.join(", "))
}

/// Quotes a node reference. The node and the port are quoted separately, and
/// references that are quoted already are kept as they are.
pub(crate) fn node_ref(name: &str) -> String {
    if name.len() >= 2 && name.starts_with('"') && name.ends_with('"') {
        return name.to_string();
    }

    if let Some(idx) = name.rfind(':') {
        if idx > 0 {
            if name.starts_with('"') && name[..idx].ends_with('"') {
                return name.to_string();
            }
            let node = quote_if_necessary(&name[..idx]);
            let port = quote_if_necessary(&name[idx + 1..]);
            return format!("{}:{}", node, port);
        }
    }
    quote_if_necessary(name)
}

pub(crate) fn write_node(node: &Node, ctx: &Context) -> String {
    let data = node.0.borrow();

    // A default block without attributes says nothing.
    if DEFAULT_BLOCK_NAMES.contains(&data.name.as_str())
        && data.attributes.is_empty()
    {
        return String::new();
    }

    let unquoted: &[&str] = if data.defaults {
        &DEFAULT_BLOCK_NAMES
    } else {
        &[]
    };
    let name = quote_id_if_necessary(&data.name, unquoted);
    format!(
        "{}{}{};",
        ctx.prefix(),
        name,
        attrs_string(&data.attributes, " ")
    )
}

fn write_endpoint(endpoint: &Endpoint, ctx: &Context) -> String {
    match endpoint {
        Endpoint::Name(name) => node_ref(name),
        Endpoint::Subgraph(snapshot) => {
            write_graph(&snapshot.to_graph(), ctx, Placement::Inline)
        }
    }
}

pub(crate) fn write_edge(edge: &Edge, ctx: &Context) -> String {
    let (src, dst) = edge.points();
    let attrs = edge.attributes();
    format!(
        "{}{} {} {}{};",
        ctx.prefix(),
        write_endpoint(&src, ctx),
        ctx.edge_op(),
        write_endpoint(&dst, ctx),
        attrs_string(&attrs, " ")
    )
}

enum Child {
    Node(Node),
    Edge(Edge),
    Subgraph(Graph),
}

fn write_header(graph: &Graph) -> String {
    let data = graph.0.borrow();
    let mut first_line: Vec<String> = Vec::new();

    if data.strict && graph.is_top_level() {
        first_line.push("strict".to_string());
    }

    let keyword = match data.kind {
        GraphKind::Root => data.graph_type.as_str(),
        GraphKind::Subgraph | GraphKind::Cluster => "subgraph",
    };
    // Anonymous bodies hide the keyword and the name.
    if data.kind == GraphKind::Root || data.show_keyword {
        first_line.push(keyword.to_string());
        if !data.name.is_empty() {
            first_line.push(quote_if_necessary(&data.name));
        }
    }
    first_line.push("{".to_string());
    first_line.join(" ")
}

pub(crate) fn write_graph(
    graph: &Graph,
    ctx: &Context,
    placement: Placement,
) -> String {
    let inner = ctx.nested();
    let mut out = String::new();

    if placement != Placement::Inline {
        out.push_str(&ctx.prefix());
    }
    out.push_str(&write_header(graph));
    out.push('\n');

    for (key, value) in graph.attributes().iter() {
        out.push_str(&format!("{}{};\n", inner.prefix(), format_attr(key, value)));
    }

    let (suppress, simplify, mut children) = {
        let data = graph.0.borrow();
        let mut children: Vec<(Option<usize>, Child)> = Vec::new();
        for edge in data.edges.grouped() {
            children.push((edge.sequence(), Child::Edge(edge.clone())));
        }
        for node in data.nodes.grouped() {
            children.push((node.sequence(), Child::Node(node.clone())));
        }
        for sgraph in data.subgraphs.grouped() {
            children.push((sgraph.sequence(), Child::Subgraph(sgraph.clone())));
        }
        (data.suppress_disconnected, data.simplify, children)
    };
    children.sort_by_key(|(seq, _)| seq.unwrap_or(0));

    let endpoints: Vec<Endpoint> = if suppress {
        children
            .iter()
            .filter_map(|(_, child)| match child {
                Child::Edge(edge) => Some(edge.points()),
                _ => None,
            })
            .flat_map(|(src, dst)| vec![src, dst])
            .collect()
    } else {
        Vec::new()
    };

    let mut edges_done: Vec<(Endpoint, Endpoint)> = Vec::new();
    for (_, child) in children.iter() {
        match child {
            Child::Node(node) => {
                if suppress {
                    let name = Endpoint::Name(node.name());
                    if !endpoints.contains(&name) {
                        continue;
                    }
                }
                let text = write_node(node, &inner);
                if !text.is_empty() {
                    out.push_str(&text);
                    out.push('\n');
                }
            }
            Child::Edge(edge) => {
                let points = edge.points();
                if simplify
                    && edges_done
                        .iter()
                        .any(|p| same_points(p, &points, ctx.is_directed()))
                {
                    continue;
                }
                out.push_str(&write_edge(edge, &inner));
                out.push('\n');
                edges_done.push(points);
            }
            Child::Subgraph(sgraph) => {
                out.push_str(&write_graph(sgraph, &inner, Placement::Nested));
                out.push('\n');
            }
        }
    }

    out.push_str(&ctx.prefix());
    out.push('}');
    if placement == Placement::TopLevel {
        out.push('\n');
    }
    out
}

#[test]
fn test_node_ref() {
    assert_eq!(node_ref("a"), "a");
    assert_eq!(node_ref("a:p"), "a:p");
    assert_eq!(node_ref("a b:p q"), "\"a b\":\"p q\"");
    assert_eq!(node_ref("\"a:b\""), "\"a:b\"");
    assert_eq!(node_ref("\"a b\":p"), "\"a b\":p");
    assert_eq!(node_ref("graph"), "\"graph\"");
    assert_eq!(node_ref(":a"), "\":a\"");
}

#[test]
fn test_format_attr() {
    assert_eq!(format_attr("shape", &AttrValue::from("box")), "shape=box");
    assert_eq!(format_attr("label", &AttrValue::from("")), "label=\"\"");
    assert_eq!(format_attr("center", &AttrValue::Implicit), "center");
    assert_eq!(format_attr("w", &AttrValue::from(1.5)), "w=1.5");
    assert_eq!(format_attr("w", &AttrValue::from(2.0)), "w=2.0");

    let mut attrs = AttributeTable::new();
    assert_eq!(attrs_string(&attrs, " "), "");
    attrs.insert("a".to_string(), AttrValue::from(1));
    attrs.insert("b".to_string(), AttrValue::from("x y"));
    assert_eq!(attrs_string(&attrs, " "), " [a=1, b=\"x y\"]");
}
