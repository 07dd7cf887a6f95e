//! Themed YAML - analysis of themed design-token documents.
//!
//! A themed YAML document declares themes, shared values and per-theme
//! values that may import each other. This crate wraps the analyzer with a
//! configurable [`DocumentAnalyzer`], markdown hover rendering and a
//! [`Workspace`](workspace::Workspace) that keeps per-document results and
//! publishes them to host-provided sinks.

pub mod config;
pub mod hover;
pub mod workspace;

mod error;

pub use themed_yaml_analyzer::{
    Analysis, Diagnostic, ErrorCode, Hover, LineIndex, Position, Range, ResolvedValue, Severity,
    Span, ThemedColor,
};
pub use themed_yaml_core::{color, item_type, path, value};

pub use error::ThemedYamlError;

use log::{debug, info};

use config::AppConfig;

/// Entry point for analyzing themed YAML documents.
///
/// # Examples
///
/// ```
/// use themed_yaml::{DocumentAnalyzer, config::AppConfig};
///
/// let source = "\
/// .themes: [light]
/// .themed:
///   accent:
///     .type: color
///     light: ff3366ff
/// ";
///
/// let analyzer = DocumentAnalyzer::new(AppConfig::default());
/// let analysis = analyzer.analyze(source).expect("Failed to analyze");
/// assert!(analysis.diagnostics().is_empty());
///
/// // Or fail on any error diagnostic
/// assert!(DocumentAnalyzer::default().check(source).is_ok());
/// ```
#[derive(Debug, Default)]
pub struct DocumentAnalyzer {
    config: AppConfig,
}

impl DocumentAnalyzer {
    /// Create a new analyzer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Analyze `source` and return every result of the pass.
    ///
    /// Problems in the document are diagnostics of the returned
    /// [`Analysis`], not errors.
    ///
    /// # Errors
    ///
    /// Returns [`ThemedYamlError::Analysis`] if the text is not valid YAML
    /// or its keys cannot be matched back to the text.
    pub fn analyze(&self, source: &str) -> Result<Analysis, ThemedYamlError> {
        info!("Analyzing themed document");

        let analysis =
            themed_yaml_analyzer::analyze(source, &self.config.analysis().analyzer_config())
                .map_err(|err| ThemedYamlError::new_analysis_error(err, source))?;

        debug!(
            diagnostics = analysis.diagnostics().len(),
            items = analysis.registry().len();
            "Document analyzed"
        );
        Ok(analysis)
    }

    /// Analyze `source` and fail if any error diagnostic was produced.
    ///
    /// # Errors
    ///
    /// Returns [`ThemedYamlError::Invalid`] with every diagnostic when the
    /// document has errors, and the errors of [`Self::analyze`].
    pub fn check(&self, source: &str) -> Result<Analysis, ThemedYamlError> {
        let analysis = self.analyze(source)?;
        if analysis.has_errors() {
            return Err(ThemedYamlError::new_invalid(
                analysis.diagnostics().to_vec(),
                source,
            ));
        }
        Ok(analysis)
    }
}
