#[cfg(test)]
mod tests {

    use dotgraph::core::attr::{attributes, AttrValue};
    use dotgraph::core::error::{DotError, RenderError};
    use dotgraph::core::quote::quote_if_necessary;
    use dotgraph::model::{
        graph_from_adjacency_matrix, graph_from_edges,
        graph_from_incidence_matrix, Common, Dot, Edge, Endpoint, Graph,
        GraphKind, GraphType, Node,
    };
    use std::fs;

    fn four_edges(graph_type: GraphType) -> Dot {
        let g = Dot::new("G", graph_type);
        g.add_edge(&Edge::new("a", "b"));
        g.add_edge(&Edge::new("a", "b"));
        g.add_edge(&Edge::new("b", "a"));
        g.add_edge(&Edge::new("b", "a"));
        g
    }

    #[test]
    fn legend() {
        let g = Dot::new("G", GraphType::Digraph);
        let legend = Node::new("legend").with("shape", "box");
        legend.set("label", "mine");
        g.add_node(&legend);
        g.add_edge(&Edge::new("a", "b"));
        assert_eq!(
            g.to_dot_string(),
            "digraph G {\nlegend [shape=box, label=mine];\na -> b;\n}\n"
        );
    }

    #[test]
    fn interleaved_statements() {
        let g = Graph::new("G", GraphType::Digraph);
        g.add_node(&Node::new("a"));
        g.add_edge(&Edge::new("a", "b"));
        g.add_node(&Node::new("c"));
        g.set("rankdir", "LR");
        assert_eq!(
            g.to_dot_string(),
            "digraph G {\nrankdir=LR;\na;\na -> b;\nc;\n}\n"
        );
    }

    #[test]
    fn nested_indentation() {
        let g = Graph::new("G", GraphType::Digraph);
        let sg = Graph::new_subgraph("s");
        sg.add_node(&Node::new("x"));
        g.add_subgraph(&sg);
        g.add_edge(&Edge::new("a", "b"));

        assert_eq!(
            g.to_dot_string_indented("  "),
            "digraph G {\n  subgraph s {\n    x;\n  }\n  a -> b;\n}\n"
        );
        assert_eq!(
            g.to_dot_string(),
            "digraph G {\nsubgraph s {\nx;\n}\na -> b;\n}\n"
        );
    }

    #[test]
    fn subgraph_parent_links() {
        let g = Graph::new("G", GraphType::Graph);
        let sg = Graph::new_subgraph("s");
        let inner = Graph::new_subgraph("t");
        let x = Node::new("x");
        inner.add_node(&x);
        sg.add_subgraph(&inner);
        assert!(x.parent_graph().unwrap().ptr_eq(&sg));

        g.add_subgraph(&sg);
        assert!(x.parent_graph().unwrap().ptr_eq(&g));
        assert!(inner.parent_graph().unwrap().ptr_eq(&g));
        assert!(g.is_top_level());
        assert!(!sg.is_top_level());
        assert_eq!(x.top_graph_type(), Some(GraphType::Graph));
    }

    #[test]
    #[should_panic]
    fn subgraph_cycle() {
        let sg = Graph::new_subgraph("s");
        let inner = Graph::new_subgraph("t");
        sg.add_subgraph(&inner);
        inner.add_subgraph(&sg);
    }

    #[test]
    #[should_panic]
    fn subgraph_root() {
        let g = Graph::new("G", GraphType::Graph);
        g.add_subgraph(&Graph::new("H", GraphType::Graph));
    }

    #[test]
    fn clusters() {
        let g = Graph::new("G", GraphType::Digraph);
        let c = Graph::new_cluster("x").with("pencolor", "red");
        c.add_node(&Node::new("a"));
        g.add_subgraph(&c);
        assert_eq!(c.name(), "cluster_x");
        assert_eq!(c.kind(), GraphKind::Cluster);
        assert!(c.is_known_attribute("pencolor"));
        assert!(c.is_known_attribute("rankdir"));
        assert!(!g.is_known_attribute("pencolor"));
        assert_eq!(Graph::new_cluster("a b").name(), "\"cluster_a b\"");
        assert_eq!(g.get_subgraph("cluster_x").len(), 1);
        assert_eq!(
            g.to_dot_string(),
            "digraph G {\nsubgraph cluster_x {\npencolor=red;\na;\n}\n}\n"
        );
    }

    #[test]
    fn strict_top_level_only() {
        let g = Graph::new("G", GraphType::Graph);
        g.set_strict(true);
        let sg = Graph::new_subgraph("");
        sg.set_strict(true);
        g.add_subgraph(&sg);
        assert_eq!(g.to_dot_string(), "strict graph G {\nsubgraph {\n}\n}\n");
    }

    #[test]
    fn edge_equality_follows_graph_type() {
        let g = Graph::new("G", GraphType::Digraph);
        let e1 = Edge::new("a", "b");
        let e2 = Edge::new("b", "a");
        g.add_edge(&e1);
        g.add_edge(&e2);
        assert!(e1 != e2);

        g.set_type(GraphType::Graph);
        assert!(e1 == e2);
        assert_eq!(g.get_edge("b", "a").len(), 1);

        g.set_type(GraphType::Digraph);
        assert!(e1 != e2);
    }

    #[test]
    fn get_edge_reverse() {
        let g = Graph::new("G", GraphType::Graph);
        g.add_edge(&Edge::new("a", "b"));
        assert_eq!(g.get_edge("a", "b").len(), 1);
        assert_eq!(g.get_edge("b", "a").len(), 1);

        let d = Graph::new("G", GraphType::Digraph);
        d.add_edge(&Edge::new("a", "b"));
        assert_eq!(d.get_edge("b", "a").len(), 0);
        let e = &d.get_edge("a", "b")[0];
        assert_eq!(e.source(), Endpoint::from("a"));
        assert_eq!(e.destination(), Endpoint::from("b"));
    }

    #[test]
    fn simplify() {
        let g = four_edges(GraphType::Graph);
        assert_eq!(g.to_dot_string().matches("--").count(), 4);
        g.set_simplify(true);
        assert_eq!(g.to_dot_string(), "graph G {\na -- b;\n}\n");

        let d = four_edges(GraphType::Digraph);
        d.set_simplify(true);
        assert_eq!(d.to_dot_string(), "digraph G {\na -> b;\nb -> a;\n}\n");
    }

    #[test]
    fn suppress_disconnected() {
        let g = Graph::new("G", GraphType::Graph);
        for name in ["a", "b", "c", "d", "e"].iter() {
            g.add_node(&Node::new(name));
        }
        g.add_edge(&Edge::new("a", "b"));
        g.add_edge(&Edge::new("a", "c"));
        g.add_edge(&Edge::new("b", "c"));
        assert_eq!(g.to_dot_string().matches(';').count(), 8);

        g.set_suppress_disconnected(true);
        assert_eq!(
            g.to_dot_string(),
            "graph G {\na;\nb;\nc;\na -- b;\na -- c;\nb -- c;\n}\n"
        );
    }

    #[test]
    fn keyword_node_names() {
        let g = Graph::new("G", GraphType::Digraph);
        g.add_node(&Node::new("graph"));
        assert_eq!(g.to_dot_string(), "digraph G {\n}\n");

        let n = Node::new("graph").with("color", "red");
        assert_eq!(n.to_dot_string(), "\"graph\" [color=red];");

        let g = Graph::new("G", GraphType::Digraph);
        g.set_node_defaults(attributes(vec![("color", "red")]));
        assert_eq!(g.to_dot_string(), "digraph G {\nnode [color=red];\n}\n");
    }

    #[test]
    fn defaults_lookup() {
        let g = Graph::new("G", GraphType::Digraph);
        g.set_node_defaults(attributes(vec![("shape", "")]));
        g.set_node_defaults(attributes(vec![("shape", "box")]));
        g.set_edge_defaults(attributes(vec![("color", "blue")]));
        g.set_graph_defaults(attributes(vec![("rankdir", "LR")]));

        let x = Node::new("x").with("color", "red");
        let e = Edge::new("x", "y");
        g.add_node(&x);
        g.add_edge(&e);

        assert_eq!(x.lookup("shape"), Some(AttrValue::from("box")));
        assert_eq!(x.lookup("color"), Some(AttrValue::from("red")));
        assert_eq!(x.lookup("width"), None);
        assert_eq!(e.lookup("color"), Some(AttrValue::from("blue")));
        assert_eq!(g.lookup("rankdir"), Some(AttrValue::from("LR")));
        assert_eq!(g.get_node_defaults().len(), 2);
        assert_eq!(g.get_edge_defaults()[0]["color"], AttrValue::from("blue"));

        // The pseudo-nodes don't count as nodes named "node".
        g.add_node(&Node::new("node"));
        assert_eq!(g.get_node_defaults().len(), 2);
    }

    #[test]
    fn delete_elements() {
        let g = Graph::new("G", GraphType::Graph);
        g.add_node(&Node::new("a"));
        g.add_node(&Node::new("a").with("color", "red"));
        g.add_node(&Node::new("b"));
        assert_eq!(g.get_node("a").len(), 2);

        assert!(!g.del_node("a", Some(5)));
        assert!(g.del_node("a", Some(0)));
        let left = g.get_node("a");
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].get("color"), Some(AttrValue::from("red")));
        assert!(g.del_node("b", None));
        assert!(!g.del_node("b", None));
        assert_eq!(g.get_nodes().len(), 1);

        g.add_edge(&Edge::new("a", "b"));
        g.add_edge(&Edge::new("a", "b"));
        assert!(!g.del_edge("a", "c", None));
        assert!(g.del_edge("a", "b", Some(1)));
        assert_eq!(g.get_edges().len(), 1);
        assert!(g.del_edge("a", "b", None));
        assert!(g.get_edges().is_empty());
        assert_eq!(g.to_dot_string(), "graph G {\na [color=red];\n}\n");
    }

    #[test]
    fn duplicate_nodes_keep_parent() {
        let g = Graph::new("G", GraphType::Graph);
        let h = Graph::new("H", GraphType::Graph);
        let n = Node::new("n");
        g.add_node(&n);
        assert!(n.parent_graph().unwrap().ptr_eq(&g));

        // A second node with the same name gets linked only if it is loose.
        h.add_node(&Node::new("n"));
        h.add_node(&n);
        assert!(n.parent_graph().unwrap().ptr_eq(&g));
    }

    #[test]
    fn subgraph_endpoint() {
        let g = Graph::new("G", GraphType::Digraph);
        let sg = Graph::new_subgraph("");
        sg.set_show_keyword(false);
        sg.add_node(&Node::new("b"));
        sg.add_node(&Node::new("c"));
        let snapshot = sg.freeze();
        g.add_edge(&Edge::new("a", snapshot.clone()));

        // Later changes don't reach the frozen copy.
        sg.add_node(&Node::new("d"));
        assert_eq!(snapshot.nodes().len(), 2);
        assert_eq!(g.get_edge("a", snapshot).len(), 1);
        assert_eq!(
            g.to_dot_string(),
            "digraph G {\na -> {\nb;\nc;\n};\n}\n"
        );
    }

    #[test]
    fn edge_to_named_subgraph() {
        let g = Graph::new("G", GraphType::Graph);
        let sg = Graph::new_subgraph("s");
        let n = Node::new("n");
        g.add_subgraph(&sg);
        g.add_edge(&Edge::new(&n, &sg).with("style", "dotted"));
        assert_eq!(
            g.to_dot_string(),
            "graph G {\nsubgraph s {\n}\nn -- s [style=dotted];\n}\n"
        );
    }

    #[test]
    fn quoting_in_output() {
        let g = Graph::new("my graph", GraphType::Graph);
        g.add_node(&Node::new("a b").with("label", "x y"));
        g.add_node(&Node::new("12").with("width", 1.5));
        g.add_node(&Node::new("c").with("label", "<<b>bold</b>>"));
        g.add_edge(&Edge::new("a b:p", "12").with("decorate", AttrValue::Implicit));
        assert_eq!(
            g.to_dot_string(),
            "graph \"my graph\" {\n\"a b\" [label=\"x y\"];\n12 [width=1.5];\n\
             c [label=<<b>bold</b>>];\n\"a b\":p -- 12 [decorate];\n}\n"
        );

        for s in ["a b", "11herbs", "x\"y", "digraph"].iter() {
            let once = quote_if_necessary(s);
            assert_eq!(quote_if_necessary(&once), once);
        }
    }

    #[test]
    fn round_trip() {
        let g = Graph::new("G", GraphType::Digraph);
        g.set("rankdir", "LR");
        g.set_node_defaults(attributes(vec![("shape", "box")]));
        g.add_node(&Node::new("a b").with("color", "red"));
        g.add_edge(&Edge::new("a b", "c").with("label", "one two"));
        let c = Graph::new_cluster("0");
        c.add_node(&Node::new("d"));
        g.add_subgraph(&c);

        let text = g.to_dot_string();
        let graphs = dotgraph::graph_from_dot_data(&text).unwrap();
        assert_eq!(graphs.len(), 1);
        let parsed = &graphs[0];
        assert_eq!(parsed.graph_type(), GraphType::Digraph);
        assert_eq!(parsed.get("rankdir"), Some(AttrValue::from("LR")));
        assert_eq!(parsed.get_node("\"a b\"").len(), 1);
        assert_eq!(parsed.get_edge("\"a b\"", "c").len(), 1);
        assert_eq!(parsed.get_subgraph("cluster_0").len(), 1);
        assert_eq!(parsed.to_dot_string(), text);
    }

    #[test]
    fn two_graphs() {
        let graphs =
            dotgraph::graph_from_dot_data("graph A { a -- b }\ngraph B { c -- d }")
                .unwrap();
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].name(), "A");
        assert_eq!(graphs[1].name(), "B");
        assert_eq!(graphs[0].get_edge("a", "b").len(), 1);
        assert!(graphs[0].get_edge("c", "d").is_empty());
        assert_eq!(graphs[1].get_edge("d", "c").len(), 1);
    }

    #[test]
    fn graph_type_names() {
        assert_eq!("graph".parse::<GraphType>().unwrap(), GraphType::Graph);
        assert_eq!("digraph".parse::<GraphType>().unwrap(), GraphType::Digraph);
        match "tree".parse::<GraphType>() {
            Err(DotError::InvalidGraphType(name)) => assert_eq!(name, "tree"),
            _ => panic!(),
        }
        assert_eq!(GraphType::Digraph.edge_op(), "->");
        assert_eq!(GraphType::Graph.to_string(), "graph");
    }

    #[test]
    fn from_edges() {
        let g = graph_from_edges(&[(1, 2), (2, 3)], "n", true);
        assert_eq!(g.to_dot_string(), "digraph G {\nn1 -> n2;\nn2 -> n3;\n}\n");

        let g = graph_from_edges(&[("a", "b")], "", false);
        assert_eq!(g.to_dot_string(), "graph G {\na -- b;\n}\n");
    }

    #[test]
    fn from_adjacency_matrix() {
        let matrix = vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 1, 1]];
        let g = graph_from_adjacency_matrix(&matrix, "", true);
        assert_eq!(
            g.to_dot_string(),
            "digraph G {\n1 -> 2;\n2 -> 1;\n3 -> 2;\n3 -> 3;\n}\n"
        );

        let g = graph_from_adjacency_matrix(&matrix, "", false);
        assert_eq!(g.to_dot_string(), "graph G {\n1 -- 2;\n3 -- 3;\n}\n");

        let g = graph_from_adjacency_matrix(&[vec![false, true]], "v", true);
        assert_eq!(g.to_dot_string(), "digraph G {\nv1 -> v2;\n}\n");
    }

    #[test]
    fn from_incidence_matrix() {
        let matrix = vec![vec![-1, 1, 0], vec![0, -1, 1], vec![1, 1, 1]];
        let g = graph_from_incidence_matrix(&matrix, "", true);
        assert_eq!(g.to_dot_string(), "digraph G {\n1 -> 2;\n2 -> 3;\n}\n");

        let matrix = vec![vec![-1, 1], vec![1, -1]];
        let g = graph_from_incidence_matrix(&matrix, "", false);
        assert!(g.simplify());
        assert_eq!(g.to_dot_string(), "graph G {\n1 -- 2;\n}\n");
    }

    #[test]
    fn write_raw() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dot");
        let g = Dot::new("G", GraphType::Graph);
        g.add_edge(&Edge::new("a", "b"));
        g.write(&path, "raw").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), g.to_dot_string());
    }

    #[test]
    fn read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.dot");
        fs::write(&path, b"graph { \"caf\xe9\" -- b }").unwrap();
        let graphs = dotgraph::graph_from_dot_file(&path).unwrap();
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].get_edge("\"caf\u{e9}\"", "b").len(), 1);

        fs::write(&path, "graph { a -- }").unwrap();
        match dotgraph::graph_from_dot_file(&path) {
            Err(DotError::Parse(err)) => assert_eq!(err.line, 1),
            _ => panic!(),
        }

        let missing = dir.path().join("missing.dot");
        assert!(matches!(
            dotgraph::graph_from_dot_file(&missing),
            Err(DotError::Io(_))
        ));
    }

    #[test]
    fn missing_program() {
        let mut g = Dot::new("G", GraphType::Digraph);
        g.add_edge(&Edge::new("a", "b"));
        g.set_prog("dotgraph-no-such-program");
        assert_eq!(g.prog(), "dotgraph-no-such-program");

        match g.create("svg") {
            Err(DotError::Render(RenderError::ExecutableNotFound { program })) => {
                assert_eq!(program, "dotgraph-no-such-program");
            }
            _ => panic!(),
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        assert!(g.write(&path, "svg").is_err());
        assert!(!path.exists());
    }
}
