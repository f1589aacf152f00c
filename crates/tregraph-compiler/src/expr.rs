//! Compiled query expressions.
//!
//! The compiler builds a `QueryExpr` tree first and renders it through
//! `Display`. A node's first mention carries its pattern and label; later
//! mentions are back-references.
//!
//! ```text
//! NP=np > (DT=___g1) $. (=vp)
//! └─ NodeExpr ──┘ └ Clause ┘ └ Clause with BackRef ┘
//! ```

use std::fmt;

use tregraph_core::{NodeId, RelationId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryExpr {
    Node(NodeExpr),
    /// Same node as the one defined earlier under `label`.
    BackRef { node: NodeId, label: String },
}

/// First mention of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeExpr {
    pub node: NodeId,
    pub pattern: String,
    /// Named capture groups as (0-based group index, name).
    pub groups: Vec<(usize, String)>,
    pub label: String,
    pub clauses: Vec<Clause>,
}

/// One relation rendered from the enclosing node to `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub relation: RelationId,
    pub operator: String,
    pub target: QueryExpr,
}

impl QueryExpr {
    pub fn node(&self) -> NodeId {
        match self {
            Self::Node(n) => n.node,
            Self::BackRef { node, .. } => *node,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Node(n) => &n.label,
            Self::BackRef { label, .. } => label,
        }
    }

    /// Labels defined by this expression, in pre-order.
    pub fn definitions(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |e| {
            if let Self::Node(n) = e {
                out.push(n.label.as_str());
            }
        });
        out
    }

    /// Labels referenced by back-references, in pre-order.
    pub fn back_references(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |e| {
            if let Self::BackRef { label, .. } = e {
                out.push(label.as_str());
            }
        });
        out
    }

    /// Total number of relation clauses.
    pub fn clause_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |e| {
            if let Self::Node(n) = e {
                count += n.clauses.len();
            }
        });
        count
    }

    fn walk<'a>(&'a self, f: &mut impl FnMut(&'a QueryExpr)) {
        f(self);
        if let Self::Node(n) = self {
            for clause in &n.clauses {
                clause.target.walk(f);
            }
        }
    }
}

impl fmt::Display for QueryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(n) => fmt::Display::fmt(n, f),
            Self::BackRef { label, .. } => write!(f, "={label}"),
        }
    }
}

impl fmt::Display for NodeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)?;
        for (index, name) in &self.groups {
            // group numbers are 1-based in the query language
            write!(f, "#{}%{}", index + 1, name)?;
        }
        write!(f, "={}", self.label)?;
        for clause in &self.clauses {
            write!(f, " {clause}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.operator, self.target)
    }
}
