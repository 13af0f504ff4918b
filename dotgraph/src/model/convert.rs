//! Builds graphs from edge lists and matrices.

use super::dot::Dot;
use super::edge::Edge;
use super::graph::GraphType;

fn new_dot(directed: bool) -> Dot {
    let graph_type = if directed {
        GraphType::Digraph
    } else {
        GraphType::Graph
    };
    Dot::new("G", graph_type)
}

/// Creates a graph with one edge per pair in \p edges. The node names are
/// prefixed with \p node_prefix.
pub fn graph_from_edges<S, D>(
    edges: &[(S, D)],
    node_prefix: &str,
    directed: bool,
) -> Dot
where
    S: ToString,
    D: ToString,
{
    let dot = new_dot(directed);
    for (src, dst) in edges {
        let src = format!("{}{}", node_prefix, src.to_string());
        let dst = format!("{}{}", node_prefix, dst.to_string());
        dot.add_edge(&Edge::new(src, dst));
    }
    dot
}

/// Creates a graph from an adjacency matrix. Nodes are numbered from 1 and
/// every non-default entry adds an edge. Undirected graphs only read the
/// upper triangle, including the diagonal.
pub fn graph_from_adjacency_matrix<T>(
    matrix: &[Vec<T>],
    node_prefix: &str,
    directed: bool,
) -> Dot
where
    T: Default + PartialEq,
{
    let dot = new_dot(directed);
    let empty = T::default();
    for (i, row) in matrix.iter().enumerate() {
        let skip = if directed { 0 } else { i.min(row.len()) };
        for (j, value) in row.iter().enumerate().skip(skip) {
            if *value != empty {
                let src = format!("{}{}", node_prefix, i + 1);
                let dst = format!("{}{}", node_prefix, j + 1);
                dot.add_edge(&Edge::new(src, dst));
            }
        }
    }
    dot
}

/// Creates a graph from an incidence matrix: one row per edge, one column per
/// node. A row with exactly two non-zero entries adds an edge from the
/// negative entry to the positive one. Undirected graphs are simplified.
pub fn graph_from_incidence_matrix(
    matrix: &[Vec<i64>],
    node_prefix: &str,
    directed: bool,
) -> Dot {
    let dot = new_dot(directed);
    for row in matrix {
        let mut nodes: Vec<i64> = row
            .iter()
            .enumerate()
            .filter(|(_, value)| **value != 0)
            .map(|(j, value)| (j as i64 + 1) * value)
            .collect();
        nodes.sort_unstable();

        if nodes.len() == 2 {
            let src = format!("{}{}", node_prefix, nodes[0].abs());
            let dst = format!("{}{}", node_prefix, nodes[1]);
            dot.add_edge(&Edge::new(src, dst));
        }
    }
    if !directed {
        dot.set_simplify(true);
    }
    dot
}
