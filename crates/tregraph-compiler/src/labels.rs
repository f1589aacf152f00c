//! Back-reference label assignment.
//!
//! Every node gets a name before traversal starts: its user label when it
//! has one, otherwise a synthesized `<prefix><counter>` name. Synthesized
//! names skip any counter value whose name a user already took, so a
//! generated label never collides with a user label, whatever the prefix.

use std::collections::HashSet;

use indexmap::IndexMap;
use tregraph_core::{NodeId, QueryGraph};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Label {
    name: String,
    generated: bool,
}

/// Label of every node in a graph, in node creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    map: IndexMap<NodeId, Label>,
}

impl Labels {
    /// Assign labels to all nodes of `graph`.
    ///
    /// The counter is local to this call; labels of an edited graph may
    /// change between compiles.
    pub fn assign(graph: &QueryGraph, prefix: &str) -> Self {
        let taken: HashSet<&str> = graph
            .nodes()
            .filter(|(_, n)| n.has_label())
            .map(|(_, n)| n.label())
            .collect();

        let mut counter = 0u32;
        let mut map = IndexMap::with_capacity(graph.node_count());
        for (id, node) in graph.nodes() {
            let label = if node.has_label() {
                Label {
                    name: node.label().to_owned(),
                    generated: false,
                }
            } else {
                let name = loop {
                    let candidate = format!("{prefix}{counter}");
                    counter += 1;
                    if !taken.contains(candidate.as_str()) {
                        break candidate;
                    }
                };
                Label {
                    name,
                    generated: true,
                }
            };
            tracing::trace!(node = %id, label = %label.name, generated = label.generated, "assigned label");
            map.insert(id, label);
        }

        Self { map }
    }

    pub fn get(&self, id: NodeId) -> Option<&str> {
        self.map.get(&id).map(|l| l.name.as_str())
    }

    /// Whether the label of `id` was synthesized rather than user-assigned.
    pub fn is_generated(&self, id: NodeId) -> bool {
        self.map.get(&id).is_some_and(|l| l.generated)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.map.iter().map(|(id, l)| (*id, l.name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Labels carried by more than one node, with those nodes in creation order.
    ///
    /// Only user labels can repeat.
    pub fn duplicates(&self) -> IndexMap<&str, Vec<NodeId>> {
        let mut by_name: IndexMap<&str, Vec<NodeId>> = IndexMap::new();
        for (id, name) in self.iter() {
            by_name.entry(name).or_default().push(id);
        }
        by_name.retain(|_, ids| ids.len() > 1);
        by_name
    }
}
