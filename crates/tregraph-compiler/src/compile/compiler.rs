//! Core compiler state and entry points.

use std::collections::HashSet;

use indexmap::IndexSet;
use tregraph_core::{Colors, GraphError, NodeId, QueryGraph, RelationId};

use crate::config::{Config, UnreachablePolicy};
use crate::diagnostics::{DiagnosticKind, Diagnostics, Severity};
use crate::expr::{Clause, NodeExpr, QueryExpr};
use crate::invariants;
use crate::labels::Labels;
use crate::{Error, Result};

use super::validate;

/// Output of a successful compile.
#[derive(Debug, Clone)]
pub struct Compiled {
    /// Expression tree; `None` for an empty graph.
    pub expr: Option<QueryExpr>,
    /// Rendered query text; empty for an empty graph.
    pub text: String,
    pub labels: Labels,
    /// Warnings found along the way. Never contains errors.
    pub diagnostics: Diagnostics,
    colors: Colors,
}

impl Compiled {
    fn empty(config: &Config) -> Self {
        Self {
            expr: None,
            text: String::new(),
            labels: Labels::default(),
            diagnostics: Diagnostics::new(),
            colors: config.colors(),
        }
    }

    /// Render diagnostics with the colors chosen in the compile config.
    pub fn render_diagnostics(&self) -> String {
        self.diagnostics.printer().colors(self.colors).render()
    }
}

/// Traversal state for one compile.
pub struct Compiler<'a> {
    graph: &'a QueryGraph,
    labels: &'a Labels,
    config: &'a Config,
    visited_nodes: IndexSet<NodeId>,
    visited_relations: HashSet<RelationId>,
}

impl<'a> Compiler<'a> {
    fn new(graph: &'a QueryGraph, labels: &'a Labels, config: &'a Config) -> Self {
        Self {
            graph,
            labels,
            config,
            visited_nodes: IndexSet::new(),
            visited_relations: HashSet::new(),
        }
    }

    /// Compile `graph` starting at its head node.
    ///
    /// An empty graph compiles to an empty query.
    ///
    /// Traversal, rendering and dropping of the result all recurse once per
    /// node along the longest expanded path, so stack use grows with the
    /// depth of the graph. Editor-sized graphs (hundreds of nodes) are fine;
    /// chains of many thousands of nodes may need a larger stack.
    pub fn compile(graph: &QueryGraph, config: &Config) -> Result<Compiled> {
        match graph.head_node() {
            Some(head) => Self::compile_from(graph, head, config),
            None => Ok(Compiled::empty(config)),
        }
    }

    /// Compile `graph` starting at `head`, which need not be the graph's head.
    pub fn compile_from(graph: &QueryGraph, head: NodeId, config: &Config) -> Result<Compiled> {
        if !graph.contains_node(head) {
            return Err(GraphError::UnknownNode(head).into());
        }

        let labels = Labels::assign(graph, &config.label_prefix);
        let mut diagnostics = Diagnostics::new();
        validate::check_labels(&labels, &mut diagnostics);
        if config.group_labels {
            validate::check_group_labels(graph, &mut diagnostics);
        }

        let mut compiler = Compiler::new(graph, &labels, config);
        let expr = compiler.visit(head);
        compiler.report_unreachable(&mut diagnostics);

        if diagnostics.has_errors() {
            tracing::debug!(
                errors = diagnostics.error_count(),
                "query compilation failed"
            );
            return Err(Error::CompileFailed(diagnostics));
        }

        let text = expr.to_string();
        tracing::debug!(
            head = %head,
            nodes = compiler.visited_nodes.len(),
            relations = compiler.visited_relations.len(),
            warnings = diagnostics.warning_count(),
            "compiled query"
        );

        Ok(Compiled {
            expr: Some(expr),
            text,
            labels,
            diagnostics,
            colors: config.colors(),
        })
    }

    fn visit(&mut self, id: NodeId) -> QueryExpr {
        let label = self.labels.ensure(id).to_owned();
        if !self.visited_nodes.insert(id) {
            tracing::trace!(node = %id, "back-reference");
            return QueryExpr::BackRef { node: id, label };
        }
        tracing::trace!(node = %id, "expanding node");

        let graph = self.graph;
        let node = invariants::ensure_node(graph, id);
        let groups = if self.config.group_labels {
            node.active_group_labels()
                .map(|(i, name)| (i, name.to_owned()))
                .collect()
        } else {
            Vec::new()
        };

        let mut clauses = Vec::new();
        for &relation in node.outgoing() {
            if let Some(clause) = self.visit_relation(id, relation, false) {
                clauses.push(clause);
            }
        }
        for &relation in node.incoming() {
            if let Some(clause) = self.visit_relation(id, relation, true) {
                clauses.push(clause);
            }
        }

        QueryExpr::Node(NodeExpr {
            node: id,
            pattern: node.pattern().to_owned(),
            groups,
            label,
            clauses,
        })
    }

    /// Render `relation` as seen from `from`, unless it was rendered already.
    fn visit_relation(&mut self, from: NodeId, relation: RelationId, reverse: bool) -> Option<Clause> {
        // mark before recursing so the far endpoint skips it
        if !self.visited_relations.insert(relation) {
            return None;
        }

        let graph = self.graph;
        let rel = invariants::ensure_relation(graph, relation);
        let other = if reverse { rel.from() } else { rel.to() };
        debug_assert_eq!(rel.other(from), Some(other));

        let operator = rel.render(reverse);
        let target = self.visit(other);
        Some(Clause {
            relation,
            operator,
            target,
        })
    }

    fn report_unreachable(&self, diagnostics: &mut Diagnostics) {
        let severity = match self.config.unreachable {
            UnreachablePolicy::Ignore => return,
            UnreachablePolicy::Warn => Severity::Warning,
            UnreachablePolicy::Error => Severity::Error,
        };

        for (id, node) in self.graph.nodes() {
            if self.visited_nodes.contains(&id) {
                continue;
            }
            diagnostics
                .report(DiagnosticKind::UnreachableNode, id)
                .message(node.pattern())
                .severity(severity)
                .emit();
        }
    }
}
