//! Analyzer options.

/// Switches for optional parts of an analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Report literals that cannot be cast to the item type.
    pub validate_literals: bool,
    /// Collect color decorations and hover records.
    pub decorate_colors: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            validate_literals: true,
            decorate_colors: true,
        }
    }
}
