//! Error types for themed YAML operations.
//!
//! This module provides the main error type [`ThemedYamlError`] which wraps
//! the error conditions that can occur while loading and analyzing a document.

use std::io;

use thiserror::Error;

use themed_yaml_analyzer::{AnalysisError, Diagnostic};

/// The main error type for themed YAML operations.
///
/// # Diagnostic Variants
///
/// `Analysis` and `Invalid` carry the analyzed source so that front ends can
/// render the problems with source snippets.
#[derive(Debug, Error)]
pub enum ThemedYamlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Analysis { err: AnalysisError, src: String },

    #[error("{} problem(s) found", .diagnostics.len())]
    Invalid {
        diagnostics: Vec<Diagnostic>,
        src: String,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl ThemedYamlError {
    /// Create a new `Analysis` error with the associated source code.
    pub fn new_analysis_error(err: AnalysisError, src: impl Into<String>) -> Self {
        Self::Analysis {
            err,
            src: src.into(),
        }
    }

    /// Create a new `Invalid` error with the associated source code.
    pub fn new_invalid(diagnostics: Vec<Diagnostic>, src: impl Into<String>) -> Self {
        Self::Invalid {
            diagnostics,
            src: src.into(),
        }
    }
}
