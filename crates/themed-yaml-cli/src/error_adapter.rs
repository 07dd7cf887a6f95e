//! miette reports for analysis results.
//!
//! Each analyzer [`Diagnostic`] is rendered as its own report and keeps its
//! severity, so duplicate theme warnings print as warnings. Errors that abort
//! a pass are pointed at the document offset where analysis stopped.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use themed_yaml::ThemedYamlError;
use themed_yaml_analyzer::{AnalysisError, Diagnostic, LocateError, Severity, Span};

/// A report ready for a miette handler.
pub type Reportable<'a> = Box<dyn MietteDiagnostic + 'a>;

#[derive(Debug)]
struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|code| Box::new(code) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.diag.severity() {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = to_source_span(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// A [`ThemedYamlError`] that is not a list of diagnostics.
#[derive(Debug)]
struct FatalAdapter<'a>(&'a ThemedYamlError);

impl fmt::Display for FatalAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl std::error::Error for FatalAdapter<'_> {}

impl MietteDiagnostic for FatalAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            ThemedYamlError::Io(_) => "themed_yaml::io",
            ThemedYamlError::Analysis { .. } => "themed_yaml::analysis",
            ThemedYamlError::Invalid { .. } => return None,
            ThemedYamlError::Config(_) => "themed_yaml::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            ThemedYamlError::Analysis {
                err: AnalysisError::Locate(_),
                ..
            } => Some(Box::new(
                "keys must be written as block mappings, one key per line",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.0 {
            ThemedYamlError::Analysis { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let ThemedYamlError::Analysis { err, src } = self.0 else {
            return None;
        };

        let (offset, message) = match err {
            AnalysisError::Yaml(err) => {
                let location = err.location()?;
                (location.index(), "the YAML parser stopped here".to_string())
            }
            AnalysisError::Locate(LocateError::KeyNotFound { key, from }) => {
                (*from, format!("`{key}` was searched for from here"))
            }
        };
        let offset = offset.min(src.len());
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some(message),
            SourceSpan::new(offset.into(), 0),
        ))))
    }
}

fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// One report per diagnostic for [`ThemedYamlError::Invalid`], a single
/// report otherwise.
pub fn to_reportables(err: &ThemedYamlError) -> Vec<Reportable<'_>> {
    match err {
        ThemedYamlError::Invalid { diagnostics, src } => {
            diagnostics_to_reportables(diagnostics, src)
        }
        _ => vec![Box::new(FatalAdapter(err)) as Reportable<'_>],
    }
}

/// Reports for diagnostics that did not fail the run, such as warnings.
pub fn diagnostics_to_reportables<'a>(
    diagnostics: &'a [Diagnostic],
    src: &'a str,
) -> Vec<Reportable<'a>> {
    diagnostics
        .iter()
        .map(|diag| Box::new(DiagnosticAdapter { diag, src }) as Reportable<'a>)
        .collect()
}
