//! A collection of methods for printing the AST.

use super::ast;

fn print_node_id(n: &ast::NodeId, indent: usize) {
    print!("{}", " ".repeat(indent));
    println!("{}", n.to_ref());
}
fn print_arrow(k: &ast::ArrowKind, indent: usize) {
    print!("{}", " ".repeat(indent));
    match k {
        ast::ArrowKind::Arrow => {
            println!("->");
        }
        ast::ArrowKind::Line => {
            println!("--");
        }
    }
}
fn print_attribute(a: &str, b: &Option<String>, indent: usize, i: usize) {
    print!("{}", " ".repeat(indent));
    match b {
        Some(value) => println!("{}) {} = {}", i, a, value),
        None => println!("{}) {}", i, a),
    }
}
fn print_attribute_list(ll: &ast::AttributeList, indent: usize) {
    for (i, att) in ll.list.iter().enumerate() {
        print_attribute(&att.0, &att.1, indent, i);
    }
}
fn print_endpoint(e: &ast::EdgeEndpoint, indent: usize) {
    match e {
        ast::EdgeEndpoint::Node(id) => print_node_id(id, indent),
        ast::EdgeEndpoint::SubGraph(g) => print_subgraph(g, indent),
    }
}
fn print_edge(e: &ast::EdgeStmt, indent: usize) {
    print!("{}", " ".repeat(indent));
    println!("Edge:");
    print_endpoint(&e.from, indent + 1);
    for dest in &e.to {
        print_arrow(&dest.1, indent + 1);
        print_endpoint(&dest.0, indent + 1);
    }
    print_attribute_list(&e.list, indent + 1);
}
fn print_node(n: &ast::NodeStmt, indent: usize) {
    print!("{}", " ".repeat(indent));
    println!("Node:");
    print_node_id(&n.id, indent + 1);
    print_attribute_list(&n.list, indent + 1);
}
fn print_att(att: &ast::AttrStmt, indent: usize) {
    print!("{}", " ".repeat(indent));

    match att.target {
        ast::AttrStmtTarget::Graph => {
            println!("Attribute Graph:");
        }
        ast::AttrStmtTarget::Node => {
            println!("Attribute Node:");
        }
        ast::AttrStmtTarget::Edge => {
            println!("Attribute Edge:");
        }
    }
    print_attribute_list(&att.list, indent + 1);
}

fn print_stmt(stmt: &ast::Stmt, indent: usize) {
    match stmt {
        ast::Stmt::Edge(e) => {
            print_edge(e, indent);
        }
        ast::Stmt::Node(n) => {
            print_node(n, indent);
        }
        ast::Stmt::Attribute(a) => {
            print_att(a, indent);
        }
        ast::Stmt::Assignment(key, value) => {
            print!("{}", " ".repeat(indent));
            println!("Assign: {} = {}", key, value);
        }
        ast::Stmt::SubGraph(g) => {
            print_subgraph(g, indent);
        }
    }
}

fn print_subgraph(graph: &ast::SubGraph, indent: usize) {
    print!("{}", " ".repeat(indent));
    if graph.keyword {
        println!("Subgraph: {}", graph.name);
    } else {
        println!("Anonymous subgraph:");
    }
    for stmt in &graph.list.list {
        print_stmt(stmt, indent + 1);
    }
}

fn print_graph(graph: &ast::Graph, indent: usize) {
    print!("{}", " ".repeat(indent));
    let strict = if graph.strict { "strict " } else { "" };
    let kind = if graph.directed { "Digraph" } else { "Graph" };
    println!("{}{}: {}", strict, kind, graph.name);
    for stmt in &graph.list.list {
        print_stmt(stmt, indent + 1);
    }
}

pub fn dump_ast(graphs: &[ast::Graph]) {
    for graph in graphs {
        print_graph(graph, 0);
    }
}
