/*!
This crate provides a library for reading, building and writing graphs in the
GraphViz DOT language. Graphs can be parsed from DOT text, built with the
object model, written back as DOT text, or handed to the GraphViz programs
(`dot`, `neato`, ...) to produce images.

For more specific details on the API, see the documentation for the specific
sub modules.

The project also comes with a command line utility that parses `.dot` files
and writes them back, or renders them with GraphViz.

# Parser example: parse a dot file

This crate provides an API for parsing DOT files. For example,
to load, parse and print the AST:

```rust
    use dotgraph::gv;

    let contents = "digraph { a -> b [label=\"foo\"]; }";
    let mut parser = gv::DotParser::new(&contents);
    let tree = parser.process();

    match tree {
        Result::Err(err) => {
            parser.print_error();
            println!("Error: {}", err);
        }

        Result::Ok(graphs) => {
            gv::dump_ast(&graphs);
        }
    }
```

The example above would print the program AST, or a readable error message,
such as:

```txt
node [fillcolor="green"] G; a = ;
                                ^
Expected an identifier (line:4, col:33)
```

# Graph Builder example: create a new graph

This code builds a graph with two nodes that are connected with an edge, and
prints it as DOT text.

```rust
    use dotgraph::model::{Common, Dot, Edge, GraphType, Node};

    let g = Dot::new("G", GraphType::Digraph);
    let legend = Node::new("legend");
    legend.set("shape", "box");
    legend.set("label", "mine");
    g.add_node(&legend);
    g.add_edge(&Edge::new("a", "b"));

    assert_eq!(
        g.to_dot_string(),
        "digraph G {\nlegend [shape=box, label=mine];\na -> b;\n}\n"
    );
```

# Round trip example

```rust
    let graphs = dotgraph::graph_from_dot_data("graph A { a -- b };\ngraph B { c -- d }")
        .unwrap();
    assert_eq!(graphs.len(), 2);
    assert_eq!(graphs[0].name(), "A");
    assert_eq!(graphs[1].get_edges().len(), 1);
```

*/

pub mod adt;
pub mod backends;
pub mod core;
pub mod gv;
pub mod model;

use crate::core::error::{DotError, ParseError};
use crate::core::utils::read_text_file;
use gv::{DotParser, GraphBuilder};
use model::Dot;
use std::path::Path;

/// Parses \p data and returns one graph per top-level graph in the text.
pub fn graph_from_dot_data(data: &str) -> Result<Vec<Dot>, ParseError> {
    let mut parser = DotParser::new(data);
    let graphs = parser.process()?;
    let mut gb = GraphBuilder::new();
    for graph in &graphs {
        gb.visit_graph(graph);
    }
    Ok(gb.get())
}

/// Reads and parses the DOT file at \p path. Files that are not valid UTF-8
/// are read as Latin-1.
pub fn graph_from_dot_file<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<Dot>, DotError> {
    let data = read_text_file(path)?;
    Ok(graph_from_dot_data(&data)?)
}
