//! Errors that abort an analysis pass.

use thiserror::Error;

use crate::locator::LocateError;

/// A condition that stops the analysis of a document.
///
/// Everything else is reported as a [`Diagnostic`](crate::error::Diagnostic).
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The document is not valid YAML.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A key present in the parsed tree could not be found in the text.
    #[error("internal error: {0}")]
    Locate(#[from] LocateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_error_display() {
        let err: AnalysisError = LocateError::KeyNotFound {
            key: "dark".to_string(),
            from: 12,
        }
        .into();

        assert_eq!(
            err.to_string(),
            "internal error: key `dark` not found in the text after offset 12"
        );
    }
}
