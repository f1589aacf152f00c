//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use tregraph_core::Colors;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d> {
    diagnostics: &'d Diagnostics,
    colors: Colors,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            colors: Colors::OFF,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colors = Colors::new(value);
        self
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    /// One line per diagnostic, with related notes and hints indented below.
    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            self.format_one(w, diag)?;
        }
        Ok(())
    }

    fn format_one(&self, w: &mut impl Write, diag: &DiagnosticMessage) -> std::fmt::Result {
        let c = &self.colors;
        let severity_color = match diag.severity {
            Severity::Error => c.red,
            Severity::Warning => c.yellow,
        };

        write!(
            w,
            "{}{}{}: {}{}{}: {}",
            severity_color, diag.severity, c.reset, c.blue, diag.node, c.reset, diag.message
        )?;
        for related in &diag.related {
            write!(
                w,
                "\n  {}note{}: {}{}{}: {}",
                c.dim, c.reset, c.blue, related.node, c.reset, related.message
            )?;
        }
        for hint in &diag.hints {
            write!(w, "\n  {}help{}: {}", c.dim, c.reset, hint)?;
        }
        Ok(())
    }
}
