//! Nodes and the default-attribute pseudo-nodes.

use super::common::Common;
use super::graph::{Graph, GraphData};
use super::writer;
use crate::core::attr::{AttrValue, AttributeTable};
use crate::core::constants::NODE_ATTRIBUTES;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

#[derive(Debug)]
pub(crate) struct NodeData {
    pub(crate) name: String,
    pub(crate) port: Option<String>,
    pub(crate) attributes: AttributeTable,
    // Set for the `graph`/`node`/`edge` blocks that hold default attributes.
    pub(crate) defaults: bool,
    pub(crate) parent: Weak<RefCell<GraphData>>,
    pub(crate) sequence: Option<usize>,
}

/// The kind of default block: `graph [...]`, `node [...]` or `edge [...]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultTarget {
    Graph,
    Node,
    Edge,
}

impl DefaultTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefaultTarget::Graph => "graph",
            DefaultTarget::Node => "node",
            DefaultTarget::Edge => "edge",
        }
    }
}

/// A node in a graph. Cloning a node creates another handle to the same node,
/// so a node that was added to a graph can still be modified.
#[derive(Debug, Clone)]
pub struct Node(pub(crate) Rc<RefCell<NodeData>>);

// "a:p" names node "a" with port "p"; quoted names are never split.
fn split_port(name: &str) -> (String, Option<String>) {
    if !name.starts_with('"') {
        if let Some(idx) = name.find(':') {
            if idx > 0 && idx + 1 < name.len() {
                let port = name[idx + 1..].to_string();
                return (name[..idx].to_string(), Some(port));
            }
        }
    }
    (name.to_string(), None)
}

impl Node {
    /// Creates a node. Numeric names are stored in their string form.
    pub fn new<S: ToString>(name: S) -> Self {
        Self::with_attributes(name, AttributeTable::new())
    }

    pub fn with_attributes<S: ToString>(
        name: S,
        attributes: AttributeTable,
    ) -> Self {
        let (name, port) = split_port(&name.to_string());
        Self::from_data(NodeData {
            name,
            port,
            attributes,
            defaults: false,
            parent: Weak::new(),
            sequence: None,
        })
    }

    /// Creates the pseudo-node that holds a default attribute block.
    pub fn defaults(target: DefaultTarget, attributes: AttributeTable) -> Self {
        Self::from_data(NodeData {
            name: target.as_str().to_string(),
            port: None,
            attributes,
            defaults: true,
            parent: Weak::new(),
            sequence: None,
        })
    }

    pub(crate) fn from_data(data: NodeData) -> Self {
        Node(Rc::new(RefCell::new(data)))
    }

    /// Sets the attribute \p key and returns the node.
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

    /// Returns the port that followed the first `:` of the name, without the
    /// separator: `a:p1` has the port `p1`, and `a:p1:n` has `p1:n`.
    pub fn port(&self) -> Option<String> {
        self.0.borrow().port.clone()
    }

    pub fn is_defaults(&self) -> bool {
        self.0.borrow().defaults
    }

    /// Appends \p style to the comma separated `style` attribute.
    pub fn add_style(&self, style: &str) {
        self.update_attributes(|attrs| {
            let merged = match attrs.get("style") {
                Some(AttrValue::Text(current)) if !current.is_empty() => {
                    format!("{},{}", current, style)
                }
                _ => style.to_string(),
            };
            attrs.insert("style".to_string(), AttrValue::Text(merged));
        });
    }

    /// Returns true if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn to_dot_string(&self) -> String {
        writer::write_node(self, &writer::Context::new("", None))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Node) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dot_string())
    }
}

impl Common for Node {
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
        "node"
    }

    fn known_attributes(&self) -> &'static [&'static str] {
        NODE_ATTRIBUTES
    }
}

#[test]
fn test_port_split() {
    let n = Node::new("a:p1");
    assert_eq!(n.name(), "a");
    assert_eq!(n.port(), Some("p1".to_string()));

    let n = Node::new("a:p1:n");
    assert_eq!(n.name(), "a");
    assert_eq!(n.port(), Some("p1:n".to_string()));

    let n = Node::new("\"a:p1\"");
    assert_eq!(n.name(), "\"a:p1\"");
    assert_eq!(n.port(), None);

    assert_eq!(Node::new(":a").name(), ":a");
    assert_eq!(Node::new("a:").name(), "a:");
    assert_eq!(Node::new(12).name(), "12");
}

#[test]
fn test_add_style() {
    let n = Node::new("a");
    n.add_style("filled");
    n.add_style("rounded");
    assert_eq!(n.get("style"), Some(AttrValue::from("filled,rounded")));
}
