//! Error types for parsing, rendering and file handling.

use std::io;
use thiserror::Error;

/// A syntax error in DOT source. Line and column are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (line:{line}, col:{column})")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(line: usize, column: usize, message: &str) -> Self {
        Self {
            line,
            column,
            message: message.to_string(),
        }
    }

    /// Renders the offending line of \p source, a caret under the column and
    /// the message.
    pub fn annotate(&self, source: &str) -> String {
        let line = source
            .lines()
            .nth(self.line.saturating_sub(1))
            .unwrap_or("");
        let line = line.replace('\t', " ");
        let marker = " ".repeat(self.column.saturating_sub(1));
        format!("{}\n{}^\n{}", line, marker, self)
    }
}

/// A failure to produce output with an external layout program.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The program could not be found on the `PATH`.
    #[error("\"{program}\" not found in path.")]
    ExecutableNotFound { program: String },

    /// The program ran but exited with an error.
    #[error("\"{program}\" with args {arguments:?} returned code: {code:?}\n\nstderr:\n{stderr}")]
    Failed {
        program: String,
        arguments: Vec<String>,
        code: Option<i32>,
        stderr: String,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum DotError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Invalid type \"{0}\". Accepted graph types are: graph, digraph")]
    InvalidGraphType(String),
}

#[test]
fn test_annotate() {
    let source = "graph {\n  a -> ;\n}";
    let err = ParseError::new(2, 8, "Expected an identifier");
    let text = err.annotate(source);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "  a -> ;");
    assert_eq!(lines[1], "       ^");
    assert!(lines[2].starts_with("Expected an identifier"));
}
