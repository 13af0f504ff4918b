//! The Lexer implementation for the GraphViz file format.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    EOF,
    /// A bare word or a number, such as `a_1`, `1.5` or `-2`.
    Identifier(String),
    /// A double-quoted string, including the quotes. Escapes are kept as they
    /// were written; only line continuations are removed.
    QuotedString(String),
    /// An HTML-like string, including the outer angle brackets.
    Html(String),
    GraphKW,
    NodeKW,
    EdgeKW,
    DigraphKW,
    StrictKW,
    SubgraphKW,
    Equal,
    Colon,
    Comma,
    Semicolon,
    Plus,
    ArrowRight,
    ArrowLine,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Error(String),
}

#[derive(Debug, Clone)]
pub struct Lexer {
    input: Vec<char>,
    /// The index of the current character.
    pub pos: usize,
    pub ch: char,
    /// The index where the last token started.
    pub start: usize,
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '.'
}

impl Lexer {
    pub fn from_string(input: &str) -> Self {
        let chars = input.chars().collect();
        Lexer::new(chars)
    }

    pub fn new(input: Vec<char>) -> Self {
        let ch = input.first().copied().unwrap_or('\0');
        Self {
            input,
            pos: 0,
            ch,
            start: 0,
        }
    }

    /// Returns the text that is being lexed.
    pub fn source(&self) -> String {
        self.input.iter().collect()
    }

    /// Converts the character index \p idx to a 1-based line and column.
    pub fn location(&self, idx: usize) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;
        for ch in self.input.iter().take(idx) {
            if *ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    pub fn has_next(&self) -> bool {
        self.pos < self.input.len()
    }

    pub fn read_char(&mut self) {
        if self.has_next() {
            self.pos += 1;
        }
        self.ch = self.input.get(self.pos).copied().unwrap_or('\0');
    }

    fn peek(&self) -> char {
        self.input.get(self.pos + 1).copied().unwrap_or('\0')
    }

    pub fn skip_whitespace(&mut self) -> bool {
        let mut changed = false;
        while self.has_next() && (self.ch.is_whitespace() || self.ch == '\u{feff}')
        {
            self.read_char();
            changed = true;
        }
        changed
    }

    fn skip_line(&mut self) {
        while self.has_next() && self.ch != '\n' {
            self.read_char();
        }
    }

    /// Skips a single comment. Returns Ok(false) if there is no comment at
    /// the current position.
    pub fn skip_comment(&mut self) -> Result<bool, String> {
        if !self.has_next() {
            return Ok(false);
        }

        match (self.ch, self.peek()) {
            ('#', _) | ('/', '/') => {
                self.skip_line();
                Ok(true)
            }
            ('/', '*') => {
                self.read_char();
                self.read_char();
                while self.has_next() {
                    if self.ch == '*' && self.peek() == '/' {
                        self.read_char();
                        self.read_char();
                        return Ok(true);
                    }
                    self.read_char();
                }
                Err("Unterminated comment".to_string())
            }
            _ => Ok(false),
        }
    }

    pub fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while self.has_next() && is_word_char(self.ch) {
            result.push(self.ch);
            self.read_char();
        }
        result
    }

    pub fn read_number(&mut self) -> String {
        let mut result = String::new();
        if self.ch == '-' {
            result.push('-');
            self.read_char();
        }
        while self.has_next() && (self.ch.is_ascii_digit() || self.ch == '.') {
            result.push(self.ch);
            self.read_char();
        }
        result
    }

    pub fn read_string(&mut self) -> Token {
        let mut result = String::new();
        result.push('"');
        self.read_char();
        loop {
            if !self.has_next() {
                // Reached EOF without completing the string
                return Token::Error("Unterminated string".to_string());
            }
            match self.ch {
                '"' => break,
                '\\' => {
                    self.read_char();
                    match self.ch {
                        // A line continuation.
                        '\n' => {}
                        '\r' if self.peek() == '\n' => self.read_char(),
                        _ => {
                            result.push('\\');
                            if self.has_next() {
                                result.push(self.ch);
                            }
                        }
                    }
                }
                ch => result.push(ch),
            }
            self.read_char();
        }
        result.push('"');
        self.read_char();
        Token::QuotedString(result)
    }

    /// Reads an HTML string. Nested angle brackets must be balanced.
    pub fn read_html(&mut self) -> Token {
        let mut result = String::new();
        let mut bracket_balance = 0;
        while self.has_next() {
            match self.ch {
                '<' => bracket_balance += 1,
                '>' => bracket_balance -= 1,
                _ => {}
            }
            result.push(self.ch);
            self.read_char();
            if bracket_balance == 0 {
                return Token::Html(result);
            }
        }
        let (line, _) = self.location(self.start);
        Token::Error(format!(
            "HTML: expected '>' to match '<' on line {}",
            line
        ))
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();
            match self.skip_comment() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(msg) => return Token::Error(msg),
            }
        }
        self.start = self.pos;

        if !self.has_next() {
            return Token::EOF;
        }

        let tok = match self.ch {
            '=' => Token::Equal,
            ';' => Token::Semicolon,
            ':' => Token::Colon,
            ',' => Token::Comma,
            '+' => Token::Plus,
            '[' => Token::OpenBracket,
            ']' => Token::CloseBracket,
            '{' => Token::OpenBrace,
            '}' => Token::CloseBrace,
            '"' => return self.read_string(),
            '<' => return self.read_html(),
            '-' => match self.peek() {
                '>' => {
                    self.read_char();
                    Token::ArrowRight
                }
                '-' => {
                    self.read_char();
                    Token::ArrowLine
                }
                ch if ch.is_ascii_digit() || ch == '.' => {
                    return Token::Identifier(self.read_number());
                }
                _ => return Token::Error("Expected '->' or '--'".to_string()),
            },
            ch if is_word_char(ch) => {
                let name = self.read_identifier();
                return match name.to_ascii_lowercase().as_str() {
                    "graph" => Token::GraphKW,
                    "node" => Token::NodeKW,
                    "edge" => Token::EdgeKW,
                    "digraph" => Token::DigraphKW,
                    "strict" => Token::StrictKW,
                    "subgraph" => Token::SubgraphKW,
                    _ => Token::Identifier(name),
                };
            }
            ch => return Token::Error(format!("Unexpected character '{}'", ch)),
        };
        self.read_char();
        tok
    }
}

#[test]
fn test_lex_comments() {
    let mut lexer = Lexer::from_string("// one\n a # two\n /* three\n */ b");
    assert_eq!(lexer.next_token(), Token::Identifier("a".to_string()));
    assert_eq!(lexer.next_token(), Token::Identifier("b".to_string()));
    assert_eq!(lexer.next_token(), Token::EOF);

    let mut lexer = Lexer::from_string("a /* open");
    assert_eq!(lexer.next_token(), Token::Identifier("a".to_string()));
    assert!(matches!(lexer.next_token(), Token::Error(_)));
}

#[test]
fn test_lex_strings() {
    let mut lexer = Lexer::from_string("\"a \\\"b\\\"\" \"one\\\ntwo\"");
    assert_eq!(
        lexer.next_token(),
        Token::QuotedString("\"a \\\"b\\\"\"".to_string())
    );
    assert_eq!(
        lexer.next_token(),
        Token::QuotedString("\"onetwo\"".to_string())
    );
    assert!(matches!(
        Lexer::from_string("\"open").next_token(),
        Token::Error(_)
    ));
}

#[test]
fn test_lex_html() {
    let mut lexer = Lexer::from_string("<<b>x</b>> ]");
    assert_eq!(lexer.next_token(), Token::Html("<<b>x</b>>".to_string()));
    assert_eq!(lexer.next_token(), Token::CloseBracket);

    let mut lexer = Lexer::from_string("a\n<<b>x</b>");
    lexer.next_token();
    assert_eq!(
        lexer.next_token(),
        Token::Error("HTML: expected '>' to match '<' on line 2".to_string())
    );
}

#[test]
fn test_lex_keywords() {
    let mut lexer = Lexer::from_string("DiGraph Strict graphs");
    assert_eq!(lexer.next_token(), Token::DigraphKW);
    assert_eq!(lexer.next_token(), Token::StrictKW);
    assert_eq!(lexer.next_token(), Token::Identifier("graphs".to_string()));
}

#[test]
fn test_location() {
    let lexer = Lexer::from_string("ab\n\tcd");
    assert_eq!(lexer.location(0), (1, 1));
    assert_eq!(lexer.location(4), (2, 2));
}
