//! Themed YAML CLI library
//!
//! This module contains the core CLI logic for checking themed YAML
//! documents.

pub mod error_adapter;
pub mod report;

mod args;
mod config;

pub use args::{Args, Location};

use std::fs;

use log::{info, warn};

use themed_yaml::{Analysis, DocumentAnalyzer, ThemedYamlError};

/// The result of a successful run.
#[derive(Debug)]
pub struct Outcome {
    /// The analyzed source.
    pub source: String,
    /// The analysis; it has no error diagnostics.
    pub analysis: Analysis,
    /// Text to print on standard output.
    pub output: String,
}

/// Run the themed YAML CLI application
///
/// Checks the input file and renders the requested color table and hover.
///
/// # Errors
///
/// Returns `ThemedYamlError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid YAML or unmatched keys
/// - Documents with error diagnostics
pub fn run(args: &Args) -> Result<Outcome, ThemedYamlError> {
    info!(input_path = args.input; "Checking document");

    let app_config = config::load_config(args.config.as_ref())?;
    let show_colors = args.colors || app_config.report().show_colors();

    let source = fs::read_to_string(&args.input)?;

    let analyzer = DocumentAnalyzer::new(app_config);
    let analysis = analyzer.check(&source)?;

    let warnings = analysis.diagnostics().len();
    if warnings > 0 {
        warn!(input_path = args.input, count = warnings; "Document has warnings");
    }

    let mut output = String::new();
    if show_colors {
        output.push_str(&report::color_table(&analysis));
    }
    if let Some(location) = args.hover {
        match report::hover(&analysis, location.to_position()) {
            Some(hover) => output.push_str(&hover),
            None => output.push_str(&format!(
                "No hover information at {}:{}\n",
                location.line, location.column
            )),
        }
    }

    info!(input_path = args.input; "Document checked successfully");

    Ok(Outcome {
        source,
        analysis,
        output,
    })
}
