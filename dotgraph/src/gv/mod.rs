//! A module that contains everything that has to do with handling the GraphViz
//! file format (parsing, building the object model, etc.)

pub mod builder;
pub mod parser;

pub use builder::GraphBuilder;
pub use parser::lexer::Lexer;
pub use parser::lexer::Token;
pub use parser::printer::dump_ast;
pub use parser::DotParser;
