#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data model for tregraph query graphs.
//!
//! A query graph holds pattern nodes (regex-like match patterns with optional
//! labels) connected by typed structural relations ("descendant of",
//! "immediately precedes", ...). One node is the head from which the graph
//! is serialized into a tree pattern query by `tregraph-compiler`.
//!
//! ```
//! use tregraph_core::{QueryGraph, RelationKind};
//!
//! let mut graph = QueryGraph::new();
//! let np = graph.create_node_with_pattern("NP");
//! let nn = graph.create_node_with_pattern("NN");
//! let rel = graph.create_relation(np, nn).unwrap();
//! graph
//!     .relation_mut(rel)
//!     .unwrap()
//!     .descriptor_mut()
//!     .set_kind(RelationKind::DirectDescendant);
//!
//! assert_eq!(graph.head_node(), Some(np));
//! assert_eq!(graph.relation(rel).unwrap().render(false), ">");
//! ```

mod colors;
mod graph;
mod invariants;
mod node;
mod pattern;
mod relation;

#[cfg(test)]
mod graph_tests;

pub use colors::Colors;
pub use graph::{NodeId, QueryGraph, Relation, RelationId};
pub use node::{MAX_GROUP_LABELS, PatternNode};
pub use pattern::{capture_group_count, is_valid_pattern};
pub use relation::{MATCH_ANY, RelationDescriptor, RelationKind};

/// Errors from invalid graph mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("node {0} is not part of this graph")]
    UnknownNode(NodeId),

    #[error("relation {0} is not part of this graph")]
    UnknownRelation(RelationId),

    /// A relation would connect a node to itself.
    #[error("node {0} cannot be related to itself")]
    SelfRelation(NodeId),

    /// Deleting the head without force would leave the graph headless.
    #[error("cannot delete head node {0} without force")]
    HeadNodeDeletion(NodeId),

    #[error("group index {index} out of range (at most {max} group labels)")]
    GroupIndexOutOfRange { index: usize, max: usize },
}

/// Result type for graph mutations.
pub type Result<T> = std::result::Result<T, GraphError>;
