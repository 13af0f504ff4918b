use super::ast;
use super::lexer::Lexer;
use super::lexer::Token;
use crate::core::error::ParseError;

#[derive(Debug, Clone)]
pub struct DotParser {
    lexer: Lexer,
    tok: Token,
    // Where the current token starts.
    tok_start: usize,
    error: Option<ParseError>,
}

impl DotParser {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        Self {
            lexer: Lexer::new(chars),
            tok: Token::Colon,
            tok_start: 0,
            error: None,
        }
    }

    /// Prints the line where parsing failed, a marker under the failing
    /// token and the error message.
    pub fn print_error(&self) {
        if let Some(err) = &self.error {
            println!("{}", err.annotate(&self.lexer.source()));
        }
    }

    /// Returns the error of the last call to `process`, if it failed.
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Creates an error at the current token.
    fn to_error<T>(&self, msg: &str) -> Result<T, ParseError> {
        let (line, column) = self.lexer.location(self.tok_start);
        Result::Err(ParseError::new(line, column, msg))
    }

    pub fn lex(&mut self) -> Result<(), ParseError> {
        if let Token::EOF = self.tok {
            return Ok(());
        }
        // Lex the next token.
        self.tok = self.lexer.next_token();
        self.tok_start = self.lexer.start;
        if let Token::Error(msg) = self.tok.clone() {
            return self.to_error(&msg);
        }
        Ok(())
    }

    fn is_id_token(&self) -> bool {
        matches!(
            self.tok,
            Token::Identifier(_) | Token::QuotedString(_) | Token::Html(_)
        )
    }

    fn is_edge_token(&self) -> bool {
        matches!(self.tok, Token::ArrowLine | Token::ArrowRight)
    }

    // ID : identifier | number | quoted ('+' quoted)* | html
    pub fn parse_id(&mut self) -> Result<String, ParseError> {
        match self.tok.clone() {
            Token::Identifier(id) | Token::Html(id) => {
                self.lex()?;
                Ok(id)
            }
            Token::QuotedString(first) => {
                self.lex()?;
                if !matches!(self.tok, Token::Plus) {
                    return Ok(first);
                }

                let mut parts = vec![first];
                while let Token::Plus = self.tok {
                    // Consume the '+'.
                    self.lex()?;
                    if let Token::QuotedString(next) = self.tok.clone() {
                        parts.push(next);
                        self.lex()?;
                    } else {
                        return self.to_error("Expected a quoted string after '+'");
                    }
                }
                let inner: String =
                    parts.iter().map(|p| &p[1..p.len() - 1]).collect();
                Ok(format!("\"{}\"", inner))
            }
            _ => self.to_error("Expected an identifier"),
        }
    }

    // graph : [ strict ] (graph | digraph) [ ID ] '{' stmt_list '}'
    pub fn parse_graph(&mut self) -> Result<ast::Graph, ParseError> {
        let mut graph = ast::Graph::new("");

        // Consume the 'strict' keyword.
        if let Token::StrictKW = self.tok {
            graph.strict = true;
            self.lex()?;
        }

        match self.tok {
            Token::GraphKW => {
                graph.directed = false;
            }
            Token::DigraphKW => {
                graph.directed = true;
            }
            _ => {
                return self.to_error("Expected (graph|digraph)");
            }
        }
        self.lex()?;

        // Consume the optional graph name.
        if self.is_id_token() {
            graph.name = self.parse_id()?;
        }

        graph.list = self.parse_stmt_list()?;
        Result::Ok(graph)
    }

    // subgraph : [ subgraph [ ID ] ] '{' stmt_list '}'
    pub fn parse_subgraph(&mut self) -> Result<ast::SubGraph, ParseError> {
        let mut graph = ast::SubGraph::new("", false);

        if let Token::SubgraphKW = self.tok {
            graph.keyword = true;
            self.lex()?;
            // Consume the optional graph name.
            if self.is_id_token() {
                graph.name = self.parse_id()?;
            }
        }

        graph.list = self.parse_stmt_list()?;
        Result::Ok(graph)
    }

    // stmt_list : '{' [ stmt [ ';' ] stmt_list ] '}'
    pub fn parse_stmt_list(&mut self) -> Result<ast::StmtList, ParseError> {
        let mut lst = ast::StmtList::new();

        if let Token::OpenBrace = self.tok {
            self.lex()?;
        } else {
            return self.to_error("Expected '{'");
        }

        loop {
            match self.tok {
                Token::Semicolon => {
                    self.lex()?;
                }
                Token::CloseBrace => {
                    // Consume the '}' and exit.
                    self.lex()?;
                    return Result::Ok(lst);
                }
                Token::EOF => {
                    return self.to_error("Expected '}'");
                }
                _ => {
                    let stmt = self.parse_stmt()?;
                    lst.list.push(stmt);
                }
            }
        }
    }

    // stmt : node_stmt | edge_stmt | attr_stmt | ID '=' ID | subgraph
    pub fn parse_stmt(&mut self) -> Result<ast::Stmt, ParseError> {
        match self.tok {
            //attr_stmt : (graph | node | edge) attr_list
            Token::GraphKW => {
                self.parse_attr_stmt(ast::AttrStmtTarget::Graph)
            }
            Token::NodeKW => {
                self.parse_attr_stmt(ast::AttrStmtTarget::Node)
            }
            Token::EdgeKW => {
                self.parse_attr_stmt(ast::AttrStmtTarget::Edge)
            }
            Token::SubgraphKW | Token::OpenBrace => {
                let subgraph = self.parse_subgraph()?;
                if self.is_edge_token() {
                    let from = ast::EdgeEndpoint::SubGraph(subgraph);
                    let es = self.parse_edge_stmt(from)?;
                    return Result::Ok(ast::Stmt::Edge(es));
                }
                Result::Ok(ast::Stmt::SubGraph(subgraph))
            }
            _ if self.is_id_token() => {
                let id0 = self.parse_id()?;
                if let Token::Equal = self.tok {
                    // Consume the '='.
                    self.lex()?;
                    let value = self.parse_id()?;
                    return Result::Ok(ast::Stmt::Assignment(id0, value));
                }

                let node_id = self.parse_port(id0)?;
                if self.is_edge_token() {
                    let from = ast::EdgeEndpoint::Node(node_id);
                    let es = self.parse_edge_stmt(from)?;
                    return Result::Ok(ast::Stmt::Edge(es));
                }

                if let Token::OpenBracket = self.tok {
                    let al = self.parse_attr_list()?;
                    let ns = ast::NodeStmt::new_with_list(node_id, al);
                    return Result::Ok(ast::Stmt::Node(ns));
                }
                Result::Ok(ast::Stmt::Node(ast::NodeStmt::new(node_id)))
            }
            _ => self.to_error("Expected a statement"),
        }
    }

    // The attribute list of a default statement may be missing, as in
    // `node;`.
    fn parse_attr_stmt(
        &mut self,
        target: ast::AttrStmtTarget,
    ) -> Result<ast::Stmt, ParseError> {
        // Consume the keyword.
        self.lex()?;
        let list = if let Token::OpenBracket = self.tok {
            self.parse_attr_list()?
        } else {
            ast::AttributeList::new()
        };
        let atts = ast::AttrStmt::new(target, list);
        Result::Ok(ast::Stmt::Attribute(atts))
    }

    //attr_list : '[' [ a_list ] ']' [ attr_list ]
    pub fn parse_attr_list(&mut self) -> Result<ast::AttributeList, ParseError> {
        let mut lst = ast::AttributeList::new();

        if !matches!(self.tok, Token::OpenBracket) {
            return self.to_error("Expected '['");
        }

        while let Token::OpenBracket = self.tok {
            self.lex()?;

            while !matches!(self.tok, Token::CloseBracket) {
                if !self.is_id_token() {
                    return self.to_error("Expected an attribute name");
                }
                let prop = self.parse_id()?;

                if let Token::Equal = self.tok {
                    // Consume the '='.
                    self.lex()?;
                    let value = self.parse_id()?;
                    lst.add_attr_str(&prop, &value);
                } else {
                    lst.add_attr_flag(&prop);
                }

                // Skip separators.
                if let Token::Comma | Token::Semicolon = self.tok {
                    self.lex()?;
                }
            }
            // Consume the ']'.
            self.lex()?;
        }
        Result::Ok(lst)
    }

    //edge_stmt : (node_id | subgraph) edgeRHS [ attr_list ]
    pub fn parse_edge_stmt(
        &mut self,
        from: ast::EdgeEndpoint,
    ) -> Result<ast::EdgeStmt, ParseError> {
        let mut es = ast::EdgeStmt::new(from);

        while self.is_edge_token() {
            let ak = match self.tok {
                Token::ArrowLine => ast::ArrowKind::Line,
                _ => ast::ArrowKind::Arrow,
            };
            // Consume the arrow.
            self.lex()?;
            let to = self.parse_edge_endpoint()?;
            es.insert(to, ak);
        }
        // Parse the optional attribute list.
        if let Token::OpenBracket = self.tok {
            es.list = self.parse_attr_list()?;
        }

        Result::Ok(es)
    }

    fn parse_edge_endpoint(&mut self) -> Result<ast::EdgeEndpoint, ParseError> {
        match self.tok {
            Token::SubgraphKW | Token::OpenBrace => {
                Ok(ast::EdgeEndpoint::SubGraph(self.parse_subgraph()?))
            }
            _ if self.is_id_token() => {
                Ok(ast::EdgeEndpoint::Node(self.parse_node_id()?))
            }
            _ => self.to_error("Expected a node or a subgraph"),
        }
    }

    //node_id : ID [ ':' ID [ ':' ID ] ]
    pub fn parse_node_id(&mut self) -> Result<ast::NodeId, ParseError> {
        let name = self.parse_id()?;
        self.parse_port(name)
    }

    // Parses the optional port and compass point that follow a node name.
    fn parse_port(&mut self, name: String) -> Result<ast::NodeId, ParseError> {
        let mut id = ast::NodeId::new(&name, &None);
        if let Token::Colon = self.tok {
            // Consume the colon.
            self.lex()?;
            id.port = Some(self.parse_id()?);
            if let Token::Colon = self.tok {
                self.lex()?;
                id.compass = Some(self.parse_id()?);
            }
        }
        Result::Ok(id)
    }

    /// Parses dot files, as specified here:
    /// <https://graphviz.org/doc/info/lang.html>
    /// The input may hold several graphs.
    pub fn process(&mut self) -> Result<Vec<ast::Graph>, ParseError> {
        #[cfg(feature = "log")]
        log::debug!("Parsing {} characters", self.lexer.source().len());

        let result = self.parse_graphs();
        match &result {
            Result::Ok(_graphs) => {
                #[cfg(feature = "log")]
                log::debug!("Parsed {} graph(s)", _graphs.len());
                self.error = None;
            }
            Result::Err(err) => {
                self.error = Some(err.clone());
            }
        }
        result
    }

    fn parse_graphs(&mut self) -> Result<Vec<ast::Graph>, ParseError> {
        let mut graphs = Vec::new();
        self.lex()?;
        loop {
            graphs.push(self.parse_graph()?);
            if let Token::Semicolon = self.tok {
                self.lex()?;
            }
            if let Token::EOF = self.tok {
                return Result::Ok(graphs);
            }
        }
    }
}
