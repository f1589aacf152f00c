//! Helpers over node match patterns.
//!
//! Patterns are stored as opaque strings. These helpers let an editing
//! surface check a pattern before storing it and find out how many capture
//! groups it exposes for group labels.

use regex_syntax::ParserBuilder;

/// Parse a pattern as a regular expression.
fn parse(pattern: &str) -> Option<regex_syntax::hir::Hir> {
    ParserBuilder::new().build().parse(pattern).ok()
}

/// Whether `pattern` is a valid regular expression.
pub fn is_valid_pattern(pattern: &str) -> bool {
    parse(pattern).is_some()
}

/// Number of explicit capture groups in `pattern`.
///
/// Returns `None` when the pattern does not parse as a regular expression.
pub fn capture_group_count(pattern: &str) -> Option<usize> {
    parse(pattern).map(|hir| hir.properties().explicit_captures_len())
}
