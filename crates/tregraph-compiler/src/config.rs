//! Configuration types for query compilation.

use tregraph_core::Colors;

/// Prefix of synthesized back-reference labels.
pub const DEFAULT_LABEL_PREFIX: &str = "___g";

/// What to do with nodes the traversal cannot reach from the head.
///
/// Such nodes are never part of the output; the policy only decides
/// whether that is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnreachablePolicy {
    /// Drop them silently.
    Ignore,
    /// Drop them and report a warning per node.
    #[default]
    Warn,
    /// Report an error per node and fail the compile.
    Error,
}

/// Configuration for query compilation.
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) unreachable: UnreachablePolicy,
    pub(crate) label_prefix: String,
    /// Whether named capture groups are rendered after node patterns
    pub(crate) group_labels: bool,
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unreachable: UnreachablePolicy::default(),
            label_prefix: DEFAULT_LABEL_PREFIX.to_owned(),
            group_labels: true,
            colors: Colors::OFF,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unreachable(mut self, policy: UnreachablePolicy) -> Self {
        self.unreachable = policy;
        self
    }

    /// Set the prefix for synthesized labels.
    pub fn label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }

    pub fn group_labels(mut self, value: bool) -> Self {
        self.group_labels = value;
        self
    }

    /// Set whether printers use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn colors(&self) -> Colors {
        self.colors
    }
}
