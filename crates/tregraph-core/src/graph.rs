//! Query graph arena and its mutation API.
//!
//! Nodes and relations live in insertion-ordered maps keyed by handles that
//! are never reused, so IDs held by an editing surface stay unambiguous
//! after deletions. Incidence lists on each node hold relation IDs.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::node::PatternNode;
use crate::relation::RelationDescriptor;
use crate::{GraphError, Result};

/// Handle of a node in a [`QueryGraph`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Create a NodeId from a raw index. Lookups with it may fail.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// Handle of a relation in a [`QueryGraph`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct RelationId(u32);

impl RelationId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for RelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// An edge between two nodes, stored with the orientation it was created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub(crate) from: NodeId,
    pub(crate) to: NodeId,
    pub(crate) descriptor: RelationDescriptor,
}

impl Relation {
    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn descriptor(&self) -> &RelationDescriptor {
        &self.descriptor
    }

    pub fn descriptor_mut(&mut self) -> &mut RelationDescriptor {
        &mut self.descriptor
    }

    /// The endpoint opposite to `node`, or `None` if `node` is not an endpoint.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.from {
            Some(self.to)
        } else if node == self.to {
            Some(self.from)
        } else {
            None
        }
    }

    pub fn render(&self, reverse: bool) -> String {
        self.descriptor.render(reverse)
    }
}

/// Pattern nodes, typed relations between them, and the head node.
///
/// Invariant: the head is `Some` exactly when the graph has nodes.
#[derive(Debug, Clone, Default)]
pub struct QueryGraph {
    nodes: IndexMap<NodeId, PatternNode>,
    relations: IndexMap<RelationId, Relation>,
    head: Option<NodeId>,
    next_node_id: u32,
    next_relation_id: u32,
}

impl QueryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Nodes
    // ─────────────────────────────────────────────────────────────────────

    /// Add a node matching anything. The first node of an empty graph becomes head.
    pub fn create_node(&mut self) -> NodeId {
        self.insert_node(PatternNode::new())
    }

    pub fn create_node_with_pattern(&mut self, pattern: impl Into<String>) -> NodeId {
        self.insert_node(PatternNode::with_pattern(pattern))
    }

    fn insert_node(&mut self, node: PatternNode) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.insert(id, node);

        if self.head.is_none() {
            self.head = Some(id);
        }
        tracing::debug!(node = %id, head = self.head == Some(id), "created node");
        id
    }

    /// Delete a node and every relation touching it.
    ///
    /// Deleting the head fails with [`GraphError::HeadNodeDeletion`];
    /// use [`force_delete_node`](Self::force_delete_node) for that.
    pub fn delete_node(&mut self, id: NodeId) -> Result<PatternNode> {
        self.remove_node(id, false)
    }

    /// Delete a node even if it is the head.
    ///
    /// A deleted head is replaced by the oldest remaining node.
    pub fn force_delete_node(&mut self, id: NodeId) -> Result<PatternNode> {
        self.remove_node(id, true)
    }

    fn remove_node(&mut self, id: NodeId, force: bool) -> Result<PatternNode> {
        let node = self.node(id).ok_or(GraphError::UnknownNode(id))?;
        if self.head == Some(id) && !force {
            return Err(GraphError::HeadNodeDeletion(id));
        }

        let incident: Vec<RelationId> = node
            .incoming
            .iter()
            .chain(node.outgoing.iter())
            .copied()
            .collect();
        for relation in incident {
            self.delete_relation(relation)?;
        }

        let removed = self
            .nodes
            .shift_remove(&id)
            .ok_or(GraphError::UnknownNode(id))?;

        if self.head == Some(id) {
            self.head = self.nodes.keys().next().copied();
        }
        tracing::debug!(node = %id, head = ?self.head, "deleted node");
        Ok(removed)
    }

    /// Delete every node and relation.
    ///
    /// ID counters keep running, so handles from before the clear stay dead.
    pub fn clear(&mut self) {
        let nodes = self.nodes.len();
        let relations = self.relations.len();
        self.relations.clear();
        self.nodes.clear();
        self.head = None;
        tracing::debug!(nodes, relations, "cleared graph");
    }

    pub fn node(&self, id: NodeId) -> Option<&PatternNode> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut PatternNode> {
        self.nodes.get_mut(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &PatternNode)> {
        self.nodes.iter().map(|(id, n)| (*id, n))
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Head
    // ─────────────────────────────────────────────────────────────────────

    pub fn head_node(&self) -> Option<NodeId> {
        self.head
    }

    pub fn is_head(&self, id: NodeId) -> bool {
        self.head == Some(id)
    }

    pub fn set_head_node(&mut self, id: NodeId) -> Result<()> {
        if !self.contains_node(id) {
            return Err(GraphError::UnknownNode(id));
        }
        let previous = self.head.replace(id);
        tracing::debug!(node = %id, previous = ?previous, "set head node");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Relations
    // ─────────────────────────────────────────────────────────────────────

    /// Relate `from` to `to` with a default descendant relation.
    pub fn create_relation(&mut self, from: NodeId, to: NodeId) -> Result<RelationId> {
        self.create_relation_with(from, to, RelationDescriptor::default())
    }

    pub fn create_relation_with(
        &mut self,
        from: NodeId,
        to: NodeId,
        descriptor: RelationDescriptor,
    ) -> Result<RelationId> {
        for id in [from, to] {
            if !self.contains_node(id) {
                return Err(GraphError::UnknownNode(id));
            }
        }
        if from == to {
            return Err(GraphError::SelfRelation(from));
        }

        let id = RelationId(self.next_relation_id);
        self.next_relation_id += 1;

        self.ensure_node_mut(from).outgoing.push(id);
        self.ensure_node_mut(to).incoming.push(id);
        tracing::debug!(
            relation = %id,
            from = %from,
            to = %to,
            kind = ?descriptor.kind(),
            "created relation"
        );
        self.relations.insert(
            id,
            Relation {
                from,
                to,
                descriptor,
            },
        );
        Ok(id)
    }

    /// Remove a relation from the graph and from both endpoints.
    pub fn delete_relation(&mut self, id: RelationId) -> Result<Relation> {
        let relation = self
            .relations
            .shift_remove(&id)
            .ok_or(GraphError::UnknownRelation(id))?;

        self.ensure_node_mut(relation.from)
            .outgoing
            .retain(|r| *r != id);
        self.ensure_node_mut(relation.to)
            .incoming
            .retain(|r| *r != id);
        tracing::debug!(relation = %id, "deleted relation");
        Ok(relation)
    }

    /// Flip a relation's orientation.
    ///
    /// The old relation is deleted and a new one is created from its target
    /// to its source, carrying the old descriptor. The old ID becomes invalid.
    pub fn reverse_relation(&mut self, id: RelationId) -> Result<RelationId> {
        let old = self.delete_relation(id)?;
        let new = self.create_relation_with(old.to, old.from, old.descriptor)?;
        tracing::debug!(old = %id, new = %new, "reversed relation");
        Ok(new)
    }

    pub fn relation(&self, id: RelationId) -> Option<&Relation> {
        self.relations.get(&id)
    }

    pub fn relation_mut(&mut self, id: RelationId) -> Option<&mut Relation> {
        self.relations.get_mut(&id)
    }

    pub fn contains_relation(&self, id: RelationId) -> bool {
        self.relations.contains_key(&id)
    }

    /// Relations in creation order.
    pub fn relations(&self) -> impl Iterator<Item = (RelationId, &Relation)> {
        self.relations.iter().map(|(id, r)| (*id, r))
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    /// Relations touching `node`: incoming first, then outgoing.
    pub fn incident_relations(&self, node: NodeId) -> Result<Vec<RelationId>> {
        let node = self.node(node).ok_or(GraphError::UnknownNode(node))?;
        Ok(node
            .incoming
            .iter()
            .chain(node.outgoing.iter())
            .copied()
            .collect())
    }

    pub fn degree(&self, node: NodeId) -> Result<usize> {
        self.node(node)
            .map(PatternNode::degree)
            .ok_or(GraphError::UnknownNode(node))
    }

    /// Whether some relation runs from `from` to `to`.
    pub fn has_relation_to(&self, from: NodeId, to: NodeId) -> bool {
        self.node(from).is_some_and(|n| {
            n.outgoing
                .iter()
                .any(|r| self.ensure_relation(*r).to == to)
        })
    }

    /// Whether some relation runs into `to` from `from`.
    pub fn has_relation_from(&self, to: NodeId, from: NodeId) -> bool {
        self.node(to).is_some_and(|n| {
            n.incoming
                .iter()
                .any(|r| self.ensure_relation(*r).from == from)
        })
    }

    /// Nodes reachable from `start` following relations in either direction.
    ///
    /// Order is depth-first discovery order.
    pub fn reachable_from(&self, start: NodeId) -> Result<IndexSet<NodeId>> {
        if !self.contains_node(start) {
            return Err(GraphError::UnknownNode(start));
        }

        let mut seen = IndexSet::new();
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            let node = self.ensure_node(id);
            for relation in node.outgoing.iter().chain(node.incoming.iter()).rev() {
                let other = self.ensure_relation(*relation).other(id);
                if let Some(other) = other.filter(|o| !seen.contains(o)) {
                    stack.push(other);
                }
            }
        }
        Ok(seen)
    }
}
