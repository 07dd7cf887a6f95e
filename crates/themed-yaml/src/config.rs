//! Configuration types for themed YAML analysis.
//!
//! All types implement [`serde::Deserialize`] so that front ends can load
//! them from TOML or any other serde format. Missing fields take their
//! defaults.
//!
//! # Example
//!
//! ```
//! # use themed_yaml::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.analysis().validate_literals());
//! assert!(!config.report().show_colors());
//! ```

use serde::Deserialize;

use themed_yaml_analyzer::AnalyzerConfig;

/// Top-level configuration combining analysis and report settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Analysis configuration section.
    #[serde(default)]
    analysis: AnalysisConfig,

    /// Report configuration section.
    #[serde(default)]
    report: ReportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(analysis: AnalysisConfig, report: ReportConfig) -> Self {
        Self { analysis, report }
    }

    /// Returns the analysis configuration.
    pub fn analysis(&self) -> &AnalysisConfig {
        &self.analysis
    }

    /// Returns the report configuration.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }
}

/// Options forwarded to the analyzer.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Report literals that do not match the item type.
    #[serde(default = "enabled")]
    validate_literals: bool,

    /// Collect color decorations and hover records.
    #[serde(default = "enabled")]
    decorate_colors: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            validate_literals: true,
            decorate_colors: true,
        }
    }
}

impl AnalysisConfig {
    pub fn new(validate_literals: bool, decorate_colors: bool) -> Self {
        Self {
            validate_literals,
            decorate_colors,
        }
    }

    pub fn validate_literals(&self) -> bool {
        self.validate_literals
    }

    pub fn decorate_colors(&self) -> bool {
        self.decorate_colors
    }

    /// Returns the equivalent [`AnalyzerConfig`].
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            validate_literals: self.validate_literals,
            decorate_colors: self.decorate_colors,
        }
    }
}

/// Options for how results are reported.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// Print the resolved colors of every color item.
    #[serde(default)]
    show_colors: bool,
}

impl ReportConfig {
    pub fn new(show_colors: bool) -> Self {
        Self { show_colors }
    }

    pub fn show_colors(&self) -> bool {
        self.show_colors
    }
}

fn enabled() -> bool {
    true
}
