//! Pattern nodes: the vertices of a query graph.

use std::collections::BTreeMap;

use crate::graph::RelationId;
use crate::pattern::capture_group_count;
use crate::relation::MATCH_ANY;
use crate::{GraphError, Result};

/// Maximum number of group labels a node carries.
pub const MAX_GROUP_LABELS: usize = 4;

/// A vertex of the query graph.
///
/// Owned by [`QueryGraph`](crate::QueryGraph); incidence lists are kept in
/// sync by the graph's mutation API and hold relation IDs in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternNode {
    pattern: String,
    label: String,
    group_labels: BTreeMap<usize, String>,
    pub(crate) incoming: Vec<RelationId>,
    pub(crate) outgoing: Vec<RelationId>,
}

impl Default for PatternNode {
    fn default() -> Self {
        Self::with_pattern(MATCH_ANY)
    }
}

impl PatternNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            label: String::new(),
            group_labels: BTreeMap::new(),
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    /// User-assigned label; empty if none.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Set the user label. Surrounding whitespace is dropped.
    pub fn set_label(&mut self, label: &str) {
        self.label = label.trim().to_owned();
    }

    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }

    /// Label for capture group `index` (0-based), if set.
    pub fn group_label(&self, index: usize) -> Option<&str> {
        self.group_labels.get(&index).map(String::as_str)
    }

    /// Name capture group `index` (0-based). An empty label clears it.
    pub fn set_group_label(&mut self, index: usize, label: &str) -> Result<()> {
        if index >= MAX_GROUP_LABELS {
            return Err(GraphError::GroupIndexOutOfRange {
                index,
                max: MAX_GROUP_LABELS,
            });
        }

        let label = label.trim();
        if label.is_empty() {
            self.group_labels.remove(&index);
        } else {
            self.group_labels.insert(index, label.to_owned());
        }
        Ok(())
    }

    /// All group labels in index order, including ones the pattern cannot fill.
    pub fn group_labels(&self) -> impl Iterator<Item = (usize, &str)> {
        self.group_labels.iter().map(|(i, l)| (*i, l.as_str()))
    }

    /// Capture groups in the pattern, or `None` if it is not a valid regex.
    pub fn capture_group_count(&self) -> Option<usize> {
        capture_group_count(&self.pattern)
    }

    /// Group labels whose index is below the pattern's capture-group count.
    pub fn active_group_labels(&self) -> impl Iterator<Item = (usize, &str)> {
        let count = self.capture_group_count().unwrap_or(0);
        self.group_labels().filter(move |(i, _)| *i < count)
    }

    /// Relations ending at this node, in creation order.
    pub fn incoming(&self) -> &[RelationId] {
        &self.incoming
    }

    /// Relations starting at this node, in creation order.
    pub fn outgoing(&self) -> &[RelationId] {
        &self.outgoing
    }

    pub fn degree(&self) -> usize {
        self.incoming.len() + self.outgoing.len()
    }
}
