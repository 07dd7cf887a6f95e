//! Per-pass analysis state.

use crate::{
    config::AnalyzerConfig,
    decorations::{ColorDecorations, Hover},
    error::{Diagnostic, DiagnosticCollector},
    registry::ImportRegistry,
    themes::ThemeRegistry,
};

/// Everything a single analysis pass reads and produces.
///
/// Created when a pass starts and consumed when it finishes; nothing in it
/// outlives the pass.
#[derive(Debug)]
pub(crate) struct AnalysisContext<'src> {
    pub source: &'src str,
    pub config: AnalyzerConfig,
    pub themes: ThemeRegistry,
    /// The root `.platforms` list, empty when absent.
    pub platforms: Vec<String>,
    pub registry: ImportRegistry,
    pub collector: DiagnosticCollector,
    pub decorations: ColorDecorations,
    pub hovers: Vec<Hover>,
}

impl<'src> AnalysisContext<'src> {
    pub fn new(source: &'src str, config: AnalyzerConfig) -> Self {
        Self {
            source,
            config,
            themes: ThemeRegistry::default(),
            platforms: Vec::new(),
            registry: ImportRegistry::new(),
            collector: DiagnosticCollector::new(),
            decorations: ColorDecorations::new(),
            hovers: Vec::new(),
        }
    }

    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.collector.emit(diagnostic);
    }
}
