//! tregraph compiler: query graph to tree pattern query text.
//!
//! This crate turns a [`QueryGraph`] into a single linear expression of the
//! shape `PATTERN=label REL (PATTERN=label ...) REL (=label)`:
//! - `labels` - back-reference names for every node (pre-pass)
//! - `compile` - depth-first traversal from the head node
//! - `expr` - the compiled expression tree and its text rendering
//! - `diagnostics` - warnings and errors found while compiling
//! - `config` - compile options
//! - `dump` - graph dumps for debugging and snapshots
//!
//! # Example
//!
//! ```
//! use tregraph_compiler::to_query;
//! use tregraph_core::{QueryGraph, RelationKind};
//!
//! let mut graph = QueryGraph::new();
//! let s = graph.create_node_with_pattern("S");
//! let np = graph.create_node_with_pattern("NP");
//! graph.node_mut(np).unwrap().set_label("subj");
//! let rel = graph.create_relation(s, np).unwrap();
//! graph
//!     .relation_mut(rel)
//!     .unwrap()
//!     .descriptor_mut()
//!     .set_kind(RelationKind::DirectDescendant);
//!
//! assert_eq!(to_query(&graph).unwrap(), "S=___g0 > (NP=subj)");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod config;
pub mod diagnostics;
pub mod dump;
pub mod expr;
mod invariants;
pub mod labels;

#[cfg(test)]
pub mod test_utils;

pub use compile::{Compiled, Compiler};
pub use config::{Config, DEFAULT_LABEL_PREFIX, UnreachablePolicy};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use dump::GraphPrinter;
pub use expr::{Clause, NodeExpr, QueryExpr};
pub use labels::Labels;

use tregraph_core::{GraphError, QueryGraph};

/// Errors that can occur during compilation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The graph rejected a lookup (e.g. a head that is not one of its nodes).
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("query compilation failed with {} errors", .0.error_count())]
    CompileFailed(Diagnostics),
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Compile `graph` from its head with the default configuration.
///
/// An empty graph compiles to an empty string.
pub fn to_query(graph: &QueryGraph) -> Result<String> {
    Compiler::compile(graph, &Config::default()).map(|compiled| compiled.text)
}
