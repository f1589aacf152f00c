//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use tregraph_core::{NodeId, PatternNode, QueryGraph, Relation, RelationId};

use crate::labels::Labels;

pub(crate) fn ensure_node(graph: &QueryGraph, id: NodeId) -> &PatternNode {
    graph.node(id).unwrap_or_else(|| {
        panic!("Compiler: node {id} not found (traversal only follows live relations)")
    })
}

pub(crate) fn ensure_relation(graph: &QueryGraph, id: RelationId) -> &Relation {
    graph.relation(id).unwrap_or_else(|| {
        panic!("Compiler: relation {id} not found (incidence lists must name live relations)")
    })
}

impl Labels {
    pub(crate) fn ensure(&self, id: NodeId) -> &str {
        self.get(id).unwrap_or_else(|| {
            panic!("Labels: node {id} has no label (labels must be assigned for the compiled graph)")
        })
    }
}
