//! Error and diagnostic system for the themed YAML analyzer.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating every problem of a pass
//! - [`AnalysisError`] for the conditions that abort a pass
//!
//! # Overview
//!
//! Problems found in a document are [`Diagnostic`]s: they are the normal
//! output of an analysis pass, not failures. Only an unparsable document or
//! a mismatch between the parsed tree and the raw text produces an
//! [`AnalysisError`].
//!
//! # Example
//!
//! ```
//! # use themed_yaml_analyzer::error::{Diagnostic, ErrorCode};
//! # use themed_yaml_analyzer::Span;
//!
//! let diag = Diagnostic::error("Unknown theme: 'dim'. All the themes must be defined in the '.themes' array.")
//!     .with_code(ErrorCode::E101)
//!     .with_label(Span::new(42..45), "unknown theme")
//!     .with_help("declare the theme in `.themes` or remove the key");
//! ```

mod analysis_error;
mod collector;
mod diagnostic;
mod error_code;
mod label;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use analysis_error::AnalysisError;
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use severity::Severity;
