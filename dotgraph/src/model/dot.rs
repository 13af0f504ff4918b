//! A top-level graph that knows how to render itself with GraphViz.

use super::graph::{Graph, GraphType};
use crate::backends::launcher;
use crate::core::constants::RAW_FORMAT;
use crate::core::error::DotError;
use crate::core::utils::save_to_file;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Wraps a top-level graph with the settings that are needed to render it:
/// the layout program and the image files that the graph refers to.
#[derive(Debug, Clone)]
pub struct Dot {
    graph: Graph,
    prog: String,
    shape_files: Vec<PathBuf>,
}

impl Default for Dot {
    fn default() -> Self {
        Self::new("G", GraphType::Digraph)
    }
}

impl Dot {
    pub fn new(name: &str, graph_type: GraphType) -> Self {
        Self::from_graph(Graph::new(name, graph_type))
    }

    pub fn from_graph(graph: Graph) -> Self {
        Self {
            graph,
            prog: "dot".to_string(),
            shape_files: Vec::new(),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    pub fn prog(&self) -> &str {
        &self.prog
    }

    /// Selects the layout program, such as `neato` or `twopi`.
    pub fn set_prog(&mut self, prog: &str) {
        self.prog = prog.to_string();
    }

    pub fn shape_files(&self) -> &[PathBuf] {
        &self.shape_files
    }

    /// Sets the image files that are copied next to the DOT file when the
    /// graph is rendered.
    pub fn set_shape_files<P: AsRef<Path>>(&mut self, files: &[P]) {
        self.shape_files =
            files.iter().map(|f| f.as_ref().to_path_buf()).collect();
    }

    /// Renders the graph in \p format with the selected program.
    pub fn create(&self, format: &str) -> Result<Vec<u8>, DotError> {
        let prog = self.prog.clone();
        self.create_with(&prog, &[], format)
    }

    /// Renders the graph in \p format with \p prog, passing \p args before
    /// the input file.
    pub fn create_with(
        &self,
        prog: &str,
        args: &[String],
        format: &str,
    ) -> Result<Vec<u8>, DotError> {
        let text = self.graph.to_dot_string();
        let bytes =
            launcher::render(&text, prog, args, format, &self.shape_files)?;
        Ok(bytes)
    }

    /// Writes the graph to \p path. The `raw` format writes the DOT text,
    /// every other format is rendered first.
    pub fn write<P: AsRef<Path>>(
        &self,
        path: P,
        format: &str,
    ) -> Result<(), DotError> {
        if format == RAW_FORMAT {
            save_to_file(path, self.graph.to_dot_string().as_bytes())?;
        } else {
            save_to_file(path, &self.create(format)?)?;
        }
        Ok(())
    }
}

impl Deref for Dot {
    type Target = Graph;

    fn deref(&self) -> &Graph {
        &self.graph
    }
}

impl std::fmt::Display for Dot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.graph)
    }
}
