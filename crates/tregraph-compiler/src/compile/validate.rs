//! Pre-pass checks on labels and group labels.

use tregraph_core::QueryGraph;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::labels::Labels;

/// Warn about user labels shared by several nodes.
///
/// Every node after the first gets a warning pointing back at the first.
pub(super) fn check_labels(labels: &Labels, diag: &mut Diagnostics) {
    for (name, nodes) in labels.duplicates() {
        let (first, rest) = nodes.split_first().expect("duplicates have at least two nodes");
        for node in rest {
            diag.report(DiagnosticKind::DuplicateLabel, *node)
                .message(name)
                .related_to("first used here", *first)
                .emit();
        }
    }
}

/// Warn about group labels the node's pattern has no capture group for.
pub(super) fn check_group_labels(graph: &QueryGraph, diag: &mut Diagnostics) {
    for (id, node) in graph.nodes() {
        let count = node.capture_group_count();
        for (index, name) in node.group_labels() {
            let active = count.is_some_and(|c| index < c);
            if active {
                continue;
            }

            let hint = match count {
                None => "pattern is not a valid regular expression".to_string(),
                Some(c) => format!("pattern has {c} capture groups, label names group {}", index + 1),
            };
            diag.report(DiagnosticKind::InactiveGroupLabel, id)
                .message(name)
                .hint(hint)
                .emit();
        }
    }
}
