//! Dump helpers for graph inspection and testing.
//!
//! One line per node, then one line per relation, both in creation order:
//!
//! ```text
//! N0 (head): NP =subj
//! N1: ^(NN)(S?)$ #1%base
//! R0: N0 > N1
//! ```

use std::fmt::Write;

use tregraph_core::{Colors, QueryGraph};

use crate::labels::Labels;

/// Printer for `QueryGraph` with configurable output options.
pub struct GraphPrinter<'a> {
    graph: &'a QueryGraph,
    labels: Option<&'a Labels>,
    colors: Colors,
}

impl<'a> GraphPrinter<'a> {
    pub fn new(graph: &'a QueryGraph) -> Self {
        Self {
            graph,
            labels: None,
            colors: Colors::OFF,
        }
    }

    /// Show assigned labels (including synthesized ones) instead of user labels.
    pub fn with_labels(mut self, labels: &'a Labels) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colors = Colors::new(value);
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let c = &self.colors;

        for (id, node) in self.graph.nodes() {
            write!(w, "{}{}{}", c.blue, id, c.reset)?;
            if self.graph.is_head(id) {
                write!(w, " {}(head){}", c.dim, c.reset)?;
            }
            write!(w, ": {}{}{}", c.green, node.pattern(), c.reset)?;

            let label = match self.labels {
                Some(labels) => labels.get(id),
                None => Some(node.label()).filter(|l| !l.is_empty()),
            };
            if let Some(label) = label {
                write!(w, " {}={}{}", c.blue, label, c.reset)?;
            }

            for (index, name) in node.group_labels() {
                write!(w, " #{}%{}", index + 1, name)?;
            }
            writeln!(w)?;
        }

        for (id, relation) in self.graph.relations() {
            writeln!(
                w,
                "{}{}{}: {} {}{}{} {}",
                c.blue,
                id,
                c.reset,
                relation.from(),
                c.dim,
                relation.render(false),
                c.reset,
                relation.to()
            )?;
        }

        Ok(())
    }
}
