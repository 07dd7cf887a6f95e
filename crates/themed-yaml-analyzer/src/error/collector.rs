//! Collector for accumulating diagnostics during an analysis pass.
//!
//! Every validator and the resolver report through a single
//! [`DiagnosticCollector`] owned by the pass, so that all problems of a
//! document surface together instead of stopping at the first one.

use crate::error::Diagnostic;

/// A collector for accumulating diagnostics during an analysis pass.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and return every diagnostic in emission order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
