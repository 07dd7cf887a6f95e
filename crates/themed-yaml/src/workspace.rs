//! Per-document analysis sessions for editor hosts.
//!
//! A [`Workspace`] re-analyzes a document from scratch on every update and
//! pushes the results to two host-provided sinks. Every update first clears
//! the document's diagnostics, then publishes the fresh set. Decoration
//! updates also list every color the previous pass showed, with no ranges,
//! so the host can drop swatches that disappeared.

use std::fmt;

use indexmap::IndexMap;
use log::{debug, warn};

use themed_yaml_analyzer::{
    Analysis, Diagnostic, ErrorCode, Hover, LineIndex, Position, Range, Severity,
};
use themed_yaml_core::color::Color;

use crate::{DocumentAnalyzer, ThemedYamlError};

/// Identifies a document within a [`Workspace`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A diagnostic converted to line and column coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedDiagnostic {
    pub range: Range,
    pub message: String,
    pub code: Option<ErrorCode>,
    pub severity: Severity,
}

/// Decoration ranges for one document, grouped by color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationUpdate {
    /// Literal and imported colors shown inline.
    pub single: IndexMap<Color, Vec<Range>>,
    /// Per-theme swatches after item keys, keyed by the joined theme colors.
    pub multi: IndexMap<String, Vec<Range>>,
}

/// Receives the diagnostics of a document, replacing any earlier set.
pub trait DiagnosticSink {
    fn replace_all(&mut self, document: &DocumentId, diagnostics: Vec<PublishedDiagnostic>);
}

/// Receives the color decorations of a document.
pub trait DecorationSink {
    fn apply(&mut self, document: &DocumentId, update: &DecorationUpdate);
}

#[derive(Debug, Default)]
struct Session {
    analysis: Option<Analysis>,
    single: Vec<Color>,
    multi: Vec<String>,
}

impl Session {
    /// An update that clears every decoration of the previous pass.
    fn cleared(&self) -> DecorationUpdate {
        DecorationUpdate {
            single: self.single.iter().map(|color| (*color, Vec::new())).collect(),
            multi: self.multi.iter().map(|key| (key.clone(), Vec::new())).collect(),
        }
    }
}

/// Open documents with their latest analysis.
pub struct Workspace<D, C> {
    analyzer: DocumentAnalyzer,
    diagnostics: D,
    decorations: C,
    sessions: IndexMap<DocumentId, Session>,
}

impl<D: DiagnosticSink, C: DecorationSink> Workspace<D, C> {
    pub fn new(analyzer: DocumentAnalyzer, diagnostics: D, decorations: C) -> Self {
        Self {
            analyzer,
            diagnostics,
            decorations,
            sessions: IndexMap::new(),
        }
    }

    /// Re-analyze `document` with its new `text` and publish the results.
    ///
    /// # Errors
    ///
    /// Returns the fatal analysis error, if any. The document is then left
    /// with no diagnostics and no decorations.
    pub fn update(&mut self, document: DocumentId, text: &str) -> Result<(), ThemedYamlError> {
        debug!(document = document.as_str(); "Updating document");
        self.diagnostics.replace_all(&document, Vec::new());

        let session = self.sessions.entry(document.clone()).or_default();
        let mut update = session.cleared();

        let analysis = match self.analyzer.analyze(text) {
            Ok(analysis) => analysis,
            Err(err) => {
                warn!(document = document.as_str(), err:% = err; "Analysis aborted");
                *session = Session::default();
                self.decorations.apply(&document, &update);
                return Err(err);
            }
        };

        let line_index = analysis.line_index();
        let published = analysis
            .diagnostics()
            .iter()
            .map(|diagnostic| publish(diagnostic, line_index))
            .collect();
        for (color, spans) in analysis.decorations().single() {
            let ranges = spans.iter().map(|span| line_index.range(*span));
            update.single.entry(*color).or_default().extend(ranges);
        }
        for (colors, spans) in analysis.decorations().multi() {
            let ranges = spans.iter().map(|span| line_index.range(*span));
            update.multi.entry(colors.clone()).or_default().extend(ranges);
        }

        session.single = analysis.decorations().single().keys().copied().collect();
        session.multi = analysis.decorations().multi().keys().cloned().collect();
        session.analysis = Some(analysis);

        self.diagnostics.replace_all(&document, published);
        self.decorations.apply(&document, &update);
        Ok(())
    }

    /// Forget `document`, clearing its diagnostics and decorations.
    pub fn close(&mut self, document: &DocumentId) {
        debug!(document = document.as_str(); "Closing document");
        if let Some(session) = self.sessions.shift_remove(document) {
            self.decorations.apply(document, &session.cleared());
        }
        self.diagnostics.replace_all(document, Vec::new());
    }

    /// Returns the hover at `position`, if it falls on a themed color key.
    pub fn hover_at(&self, document: &DocumentId, position: Position) -> Option<&Hover> {
        let analysis = self.analysis(document)?;
        let offset = analysis.line_index().offset(position)?;
        analysis.hover_at(offset)
    }

    /// Returns the latest successful analysis of `document`.
    pub fn analysis(&self, document: &DocumentId) -> Option<&Analysis> {
        self.sessions.get(document)?.analysis.as_ref()
    }

    pub fn diagnostic_sink(&self) -> &D {
        &self.diagnostics
    }

    pub fn decoration_sink(&self) -> &C {
        &self.decorations
    }
}

fn publish(diagnostic: &Diagnostic, line_index: &LineIndex) -> PublishedDiagnostic {
    let span = diagnostic.primary_span().unwrap_or_default();
    PublishedDiagnostic {
        range: line_index.range(span),
        message: diagnostic.message().to_string(),
        code: diagnostic.code(),
        severity: diagnostic.severity(),
    }
}
