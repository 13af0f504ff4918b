//! Interfaces to the external programs that render graphs.

pub mod launcher;

pub use launcher::{call_graphviz, render};
