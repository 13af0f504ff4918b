//! An AST that represents the GraphViz file format.

// "first:f0:n"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeId {
    pub name: String,
    pub port: Option<String>,
    pub compass: Option<String>,
}

impl NodeId {
    pub fn new(name: &str, port: &Option<String>) -> Self {
        Self {
            name: name.to_string(),
            port: port.clone(),
            compass: None,
        }
    }

    /// Returns the reference as it is written in the source, such as `a:p:n`.
    pub fn to_ref(&self) -> String {
        let mut result = self.name.clone();
        for part in self.port.iter().chain(self.compass.iter()) {
            result.push(':');
            result.push_str(part);
        }
        result
    }
}

// [a=b, c=d, e ... ]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList {
    /// Attribute names and values, as written. A name without a value has
    /// no value.
    pub list: Vec<(String, Option<String>)>,
}

impl AttributeList {
    pub fn new() -> Self {
        Self { list: Vec::new() }
    }

    pub fn add_attr_str(&mut self, from: &str, to: &str) {
        self.list.push((from.to_string(), Some(to.to_string())));
    }

    pub fn add_attr_flag(&mut self, from: &str) {
        self.list.push((from.to_string(), None));
    }

    pub fn iter(&self) -> std::slice::Iter<(String, Option<String>)> {
        self.list.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

// (graph | node | edge)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrStmtTarget {
    Graph,
    Node,
    Edge,
}

// (graph | node | edge) [ ... ]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrStmt {
    pub target: AttrStmtTarget,
    pub list: AttributeList,
}

impl AttrStmt {
    pub fn new(target: AttrStmtTarget, list: AttributeList) -> Self {
        Self { target, list }
    }
}

// node-name [ ... ]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStmt {
    pub id: NodeId,
    pub list: AttributeList,
}

impl NodeStmt {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            list: AttributeList::new(),
        }
    }
    pub fn new_with_list(id: NodeId, list: AttributeList) -> Self {
        Self { id, list }
    }
}

// (-> | -- )
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKind {
    Arrow,
    Line,
}

// A node reference, or a subgraph as in `a -> { b c }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeEndpoint {
    Node(NodeId),
    SubGraph(SubGraph),
}

// a -> b -> c [...]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeStmt {
    pub from: EdgeEndpoint,
    pub to: Vec<(EdgeEndpoint, ArrowKind)>,
    pub list: AttributeList,
}

impl EdgeStmt {
    pub fn new(from: EdgeEndpoint) -> Self {
        Self {
            from,
            to: Vec::new(),
            list: AttributeList::new(),
        }
    }

    pub fn insert(&mut self, n: EdgeEndpoint, ak: ArrowKind) {
        self.to.push((n, ak));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Edge(EdgeStmt),
    Node(NodeStmt),
    Attribute(AttrStmt),
    // ID '=' ID
    Assignment(String, String),
    SubGraph(SubGraph),
}

// { ... }
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StmtList {
    pub list: Vec<Stmt>,
}

impl StmtList {
    pub fn new() -> Self {
        Self { list: Vec::new() }
    }
}

// subgraph name { ... }, or an anonymous { ... }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubGraph {
    pub name: String,
    /// False for a bare `{ ... }` body.
    pub keyword: bool,
    pub list: StmtList,
}

impl SubGraph {
    pub fn new(name: &str, keyword: bool) -> Self {
        Self {
            name: name.to_string(),
            keyword,
            list: StmtList::new(),
        }
    }
}

// [strict] (graph | digraph) [name] { ... }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub strict: bool,
    pub directed: bool,
    pub name: String,
    pub list: StmtList,
}

impl Graph {
    pub fn new(name: &str) -> Self {
        Self {
            strict: false,
            directed: false,
            name: name.to_string(),
            list: StmtList::new(),
        }
    }
}
