#[cfg(test)]
mod tests {

    use dotgraph::core::attr::AttrValue;
    use dotgraph::gv::parser::ast;
    use dotgraph::gv::DotParser;
    use dotgraph::gv::GraphBuilder;
    use dotgraph::gv::Lexer;
    use dotgraph::gv::Token;
    use dotgraph::model::{Common, Endpoint, GraphKind, GraphType};

    fn is_identifier(t: Token, target: &str) -> bool {
        match t {
            Token::Identifier(name) => target == name,
            _ => false,
        }
    }

    fn parse(program: &str) -> Vec<ast::Graph> {
        let mut parser = DotParser::new(program);
        match parser.process() {
            Result::Ok(graphs) => graphs,
            Result::Err(err) => {
                parser.print_error();
                println!("Error: {}", err);
                panic!();
            }
        }
    }

    fn get_sample_program() -> String {
        r##"/* ancestor graph from Caroline Bouvier Kennedy */
        graph G {
            I5 [shape=ellipse,color=red,style=bold,label="Caroline Bouvier Kennedy\nb. 27.11.1957 New York",labelloc=b];
            I1 [shape=box,color=blue,style=bold,label="John Fitzgerald Kennedy\nb. 29.5.1917 Brookline"];
            I2 [shape=ellipse,color=red,style=bold,label="Jaqueline Lee Bouvier\nb. 28.7.1929 Southampton"];
            # family ties
             I1 -- I5  [style=bold,color=blue];
             I2 -- I5  [style=bold,color=red];
             I1 -- I2  [style=bold,color=violet];
            }
        "##
        .to_string()
    }

    #[test]
    fn simple() {
        let mut lexer = Lexer::from_string("a -> b");
        let t0 = lexer.next_token();
        let t1 = lexer.next_token();
        let t2 = lexer.next_token();
        assert!(is_identifier(t0, "a"));
        assert!(matches!(t1, Token::ArrowRight));
        assert!(is_identifier(t2, "b"));
    }

    #[test]
    fn simple_number() {
        let mut lexer = Lexer::from_string("-12345");
        let t0 = lexer.next_token();
        let t1 = lexer.next_token();
        assert!(is_identifier(t0, "-12345"));
        assert!(matches!(t1, Token::EOF));
    }

    #[test]
    fn simple_float_number() {
        let mut lexer = Lexer::from_string("1.12 -.5");
        assert!(is_identifier(lexer.next_token(), "1.12"));
        assert!(is_identifier(lexer.next_token(), "-.5"));
        assert!(matches!(lexer.next_token(), Token::EOF));
    }

    #[test]
    fn simple_program() {
        let mut lexer = Lexer::from_string("digraph { a -> b; } ");
        assert!(matches!(lexer.next_token(), Token::DigraphKW));
        assert!(matches!(lexer.next_token(), Token::OpenBrace));
        assert!(matches!(lexer.next_token(), Token::Identifier(_)));
        assert!(matches!(lexer.next_token(), Token::ArrowRight));
        assert!(matches!(lexer.next_token(), Token::Identifier(_)));
        assert!(matches!(lexer.next_token(), Token::Semicolon));
        assert!(matches!(lexer.next_token(), Token::CloseBrace));
        assert!(matches!(lexer.next_token(), Token::EOF));
    }

    #[test]
    fn lex_program() {
        let program = get_sample_program();
        let mut lexer = Lexer::from_string(&program[..]);
        let mut tok = lexer.next_token();
        let mut counter = 1;
        while !matches!(tok, Token::EOF) {
            if let Token::Error(_) = tok {
                panic!("unexpected error token");
            }
            tok = lexer.next_token();
            counter += 1;
        }
        // The count includes the EOF token.
        assert_eq!(counter, 105);
    }

    #[test]
    fn lex_tabs_and_bom() {
        let mut lexer = Lexer::from_string("\u{feff}graph\t{\ta\t}");
        assert!(matches!(lexer.next_token(), Token::GraphKW));
        assert!(matches!(lexer.next_token(), Token::OpenBrace));
        assert!(is_identifier(lexer.next_token(), "a"));
        assert!(matches!(lexer.next_token(), Token::CloseBrace));
    }

    #[test]
    fn parse_program0() {
        let graphs = parse("graph { a -> b; b -> c;}");
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].list.list.len(), 2);
    }

    #[test]
    fn parse_program1() {
        let graphs = parse("graph { a -> b -> c; }");
        match &graphs[0].list.list[0] {
            ast::Stmt::Edge(es) => assert_eq!(es.to.len(), 2),
            _ => panic!("expected an edge"),
        }
    }

    #[test]
    fn parse_program2() {
        let graphs = parse(&get_sample_program());
        assert_eq!(graphs[0].name, "G");
        assert_eq!(graphs[0].list.list.len(), 6);
    }

    #[test]
    fn parse_program_header() {
        let graphs = parse("strict digraph \"my graph\" { }");
        assert!(graphs[0].strict);
        assert!(graphs[0].directed);
        assert_eq!(graphs[0].name, "\"my graph\"");

        let graphs = parse("GRAPH { }");
        assert!(!graphs[0].strict);
        assert!(!graphs[0].directed);
        assert_eq!(graphs[0].name, "");
    }

    #[test]
    fn parse_program_statements() {
        let graphs = parse(
            "digraph { rankdir=LR; node [shape=box][color=red]; a:p1:n -> {b c}; \
             subgraph cluster_x { d } { e } }",
        );
        let list = &graphs[0].list.list;
        assert_eq!(list.len(), 5);
        assert_eq!(
            list[0],
            ast::Stmt::Assignment("rankdir".to_string(), "LR".to_string())
        );
        match &list[1] {
            ast::Stmt::Attribute(a) => {
                assert_eq!(a.target, ast::AttrStmtTarget::Node);
                assert_eq!(a.list.list.len(), 2);
            }
            _ => panic!("expected a default statement"),
        }
        match &list[2] {
            ast::Stmt::Edge(es) => {
                match &es.from {
                    ast::EdgeEndpoint::Node(id) => assert_eq!(id.to_ref(), "a:p1:n"),
                    _ => panic!("expected a node"),
                }
                assert!(matches!(es.to[0].0, ast::EdgeEndpoint::SubGraph(_)));
                assert_eq!(es.to[0].1, ast::ArrowKind::Arrow);
            }
            _ => panic!("expected an edge"),
        }
        match &list[3] {
            ast::Stmt::SubGraph(sg) => {
                assert!(sg.keyword);
                assert_eq!(sg.name, "cluster_x");
            }
            _ => panic!("expected a subgraph"),
        }
        match &list[4] {
            ast::Stmt::SubGraph(sg) => assert!(!sg.keyword),
            _ => panic!("expected an anonymous subgraph"),
        }
    }

    #[test]
    fn parse_program_attributes() {
        let graphs =
            parse("graph { a [label=<<b>bold</b>>, fixedsize, width=-1.5; x=\"y\"] }");
        match &graphs[0].list.list[0] {
            ast::Stmt::Node(ns) => {
                let list = &ns.list.list;
                assert_eq!(list[0].1, Some("<<b>bold</b>>".to_string()));
                assert_eq!(list[1], ("fixedsize".to_string(), None));
                assert_eq!(list[2].1, Some("-1.5".to_string()));
                assert_eq!(list[3].1, Some("\"y\"".to_string()));
            }
            _ => panic!("expected a node"),
        }
    }

    #[test]
    fn parse_program_concat() {
        let graphs = parse("graph { a [label=\"one \" + \"two\" + \"three\"] }");
        match &graphs[0].list.list[0] {
            ast::Stmt::Node(ns) => {
                assert_eq!(ns.list.list[0].1, Some("\"one twothree\"".to_string()));
            }
            _ => panic!("expected a node"),
        }
    }

    #[test]
    fn parse_program_multiple() {
        let graphs = parse("graph A { a->b };\ngraph B {c->d}");
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].name, "A");
        assert_eq!(graphs[1].name, "B");
    }

    #[test]
    fn parse_program_fail() {
        let mut parser = DotParser::new("graph {\n  a -> ;\n}");
        let err = parser.process().unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 8);
        assert!(parser.error().is_some());

        let programs = [
            "graph { a -> b",
            "graph { a [label=<<b>x</b>] }",
            "digraph { a } trailing",
            "graph { a = }",
            "graph { /* open }",
            "graph { \"open }",
            "graph { a [label=\"x\" + b] }",
            "",
        ];
        for program in programs.iter() {
            let mut parser = DotParser::new(program);
            assert!(parser.process().is_err(), "{}", program);
        }
    }

    #[test]
    fn parse_html_error_line() {
        let mut parser = DotParser::new("graph {\n a [label=<<b>]\n}");
        let err = parser.process().unwrap_err();
        assert!(err.message.contains("on line 2"), "{}", err.message);
    }

    #[test]
    fn build_graphs() {
        let graphs = dotgraph::graph_from_dot_data("graph A { a->b };\ngraph B {c->d}")
            .unwrap();
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].name(), "A");
        assert_eq!(graphs[1].name(), "B");
        assert_eq!(graphs[0].get_edges().len(), 1);
        assert_eq!(graphs[1].get_edges().len(), 1);
        assert_eq!(graphs[0].graph_type(), GraphType::Graph);
    }

    #[test]
    fn build_edge_chain() {
        let graphs =
            dotgraph::graph_from_dot_data("digraph { a -> b -> c [color=red] }").unwrap();
        let edges = graphs[0].get_edges();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].source(), Endpoint::from("a"));
        assert_eq!(edges[0].destination(), Endpoint::from("b"));
        assert_eq!(edges[1].source(), Endpoint::from("b"));
        assert_eq!(edges[1].destination(), Endpoint::from("c"));
        for e in edges.iter() {
            assert_eq!(e.get("color"), Some(AttrValue::from("red")));
        }
    }

    #[test]
    fn build_defaults_and_lookup() {
        let program = "digraph { rankdir=LR; node [shape=box]; edge [color=blue]; a; a -> b }";
        let graphs = dotgraph::graph_from_dot_data(program).unwrap();
        let g = &graphs[0];
        assert_eq!(g.get("rankdir"), Some(AttrValue::from("LR")));
        assert_eq!(g.get_node_defaults().len(), 1);
        assert_eq!(g.get_edge_defaults().len(), 1);

        let a = &g.get_node("a")[0];
        assert_eq!(a.get("shape"), None);
        assert_eq!(a.lookup("shape"), Some(AttrValue::from("box")));
        let e = &g.get_edge("a", "b")[0];
        assert_eq!(e.lookup("color"), Some(AttrValue::from("blue")));
    }

    #[test]
    fn build_defaults_without_attributes() {
        let graphs = parse("digraph { node; a }");
        match &graphs[0].list.list[0] {
            ast::Stmt::Attribute(att) => {
                assert_eq!(att.target, ast::AttrStmtTarget::Node);
                assert!(att.list.is_empty());
            }
            _ => panic!(),
        }

        let graphs = dotgraph::graph_from_dot_data("digraph { node; a }").unwrap();
        assert_eq!(graphs[0].get_node("a").len(), 1);
        assert!(graphs[0].get_node_defaults()[0].is_empty());
        assert_eq!(graphs[0].to_dot_string(), "digraph {\na;\n}\n");

        let graphs =
            dotgraph::graph_from_dot_data("graph { edge; graph; a -- b }").unwrap();
        assert_eq!(graphs[0].to_dot_string(), "graph {\na -- b;\n}\n");
    }

    #[test]
    fn build_subgraphs() {
        let program = "graph { subgraph cluster_x { a -- b } { c } }";
        let graphs = dotgraph::graph_from_dot_data(program).unwrap();
        let g = &graphs[0];
        let x = &g.get_subgraph("cluster_x")[0];
        assert_eq!(x.kind(), GraphKind::Subgraph);
        assert!(x.show_keyword());
        assert_eq!(x.get_edges().len(), 1);

        let anon = &g.get_subgraph("")[0];
        assert!(!anon.show_keyword());
        assert_eq!(anon.get_nodes().len(), 1);

        // Everything is linked to the top-level graph.
        let edge = &x.get_edges()[0];
        assert!(edge.parent_graph().unwrap().ptr_eq(g.graph()));
        assert!(x.parent_graph().unwrap().ptr_eq(g.graph()));
        assert_eq!(edge.top_graph_type(), Some(GraphType::Graph));
    }

    #[test]
    fn build_subgraph_endpoint() {
        let graphs = dotgraph::graph_from_dot_data("digraph { a -> {b c} }").unwrap();
        let g = &graphs[0];
        let edges = g.get_edges();
        assert_eq!(edges.len(), 1);
        match edges[0].destination() {
            Endpoint::Subgraph(snapshot) => {
                assert_eq!(snapshot.nodes().len(), 2);
                assert_eq!(snapshot.nodes()[0].name(), "b");
            }
            _ => panic!("expected a subgraph endpoint"),
        }
        // The endpoint is not a subgraph of the graph.
        assert!(g.get_subgraphs().is_empty());
        assert_eq!(g.to_dot_string(), "digraph {\na -> {\nb;\nc;\n};\n}\n");
    }

    #[test]
    fn build_ports() {
        let graphs =
            dotgraph::graph_from_dot_data("digraph { a:p1 [color=red]; a:p1 -> b:p2:n }")
                .unwrap();
        let g = &graphs[0];
        let a = &g.get_node("a")[0];
        assert_eq!(a.port(), Some("p1".to_string()));
        let e = &g.get_edges()[0];
        assert_eq!(e.source(), Endpoint::from("a:p1"));
        assert_eq!(e.destination(), Endpoint::from("b:p2:n"));
        assert_eq!(
            g.to_dot_string(),
            "digraph {\na [color=red];\na:p1 -> b:p2:n;\n}\n"
        );
    }

    #[test]
    fn round_trip() {
        let program = r#"strict digraph "G 1" {
            label="A \"quoted\" label"; fontsize=12;
            node [shape=box];
            a [label=<<b>a</b>>];
            "b c" -> a [weight=2];
            subgraph cluster_0 { color=blue; x -> y }
            a -> { m n };
        }"#;
        let first = dotgraph::graph_from_dot_data(program).unwrap();
        let text = first[0].to_dot_string();
        let second = dotgraph::graph_from_dot_data(&text).unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].to_dot_string(), text);
        assert!(second[0].is_strict());
        assert_eq!(second[0].name(), "\"G 1\"");

        let mut gb = GraphBuilder::new();
        for g in parse(&text).iter() {
            gb.visit_graph(g);
        }
        assert_eq!(gb.get()[0].to_dot_string(), text);
    }
}
