//! Test helpers for building and compiling small graphs.

use tregraph_core::{NodeId, QueryGraph, RelationDescriptor, RelationId, RelationKind};

use crate::{Compiled, Compiler, Config};

/// Add a node with `pattern` and user `label` (empty for none).
pub fn node(graph: &mut QueryGraph, pattern: &str, label: &str) -> NodeId {
    let id = graph.create_node_with_pattern(pattern);
    graph.node_mut(id).unwrap().set_label(label);
    id
}

pub fn relate(graph: &mut QueryGraph, from: NodeId, to: NodeId, kind: RelationKind) -> RelationId {
    graph
        .create_relation_with(from, to, RelationDescriptor::new(kind))
        .unwrap()
}

/// Compile with the default config, panicking on error.
pub fn compile(graph: &QueryGraph) -> Compiled {
    Compiler::compile(graph, &Config::default()).unwrap()
}

/// Compiled query text with the default config.
pub fn query(graph: &QueryGraph) -> String {
    compile(graph).text
}
