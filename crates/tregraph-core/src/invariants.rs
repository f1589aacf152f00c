//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{NodeId, PatternNode, QueryGraph, Relation, RelationId};

impl QueryGraph {
    pub(crate) fn ensure_node(&self, id: NodeId) -> &PatternNode {
        self.node(id).unwrap_or_else(|| {
            panic!("QueryGraph: node {id} not found (relation endpoints must be live nodes)")
        })
    }

    pub(crate) fn ensure_node_mut(&mut self, id: NodeId) -> &mut PatternNode {
        self.node_mut(id).unwrap_or_else(|| {
            panic!("QueryGraph: node {id} not found (relation endpoints must be live nodes)")
        })
    }

    /// Resolve a relation ID taken from a node's incidence list.
    pub(crate) fn ensure_relation(&self, id: RelationId) -> &Relation {
        self.relation(id).unwrap_or_else(|| {
            panic!("QueryGraph: relation {id} not found (incidence lists must name live relations)")
        })
    }
}
