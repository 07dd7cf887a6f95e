//! Static analysis of themed design-token YAML documents.
//!
//! A document declares `.themes`, an optional root `.platforms` list, a
//! `.shared` tree of single-valued items and a `.themed` tree of items with
//! one value per theme. [`analyze`] walks both trees once, re-locating every
//! key in the raw text, and produces:
//!
//! - [`Diagnostic`]s anchored at the offending key or value,
//! - the resolved value of every item, addressable by dotted path,
//! - color decorations and hover records for color items.
//!
//! # Examples
//!
//! ```
//! use themed_yaml_analyzer::{AnalyzerConfig, analyze};
//!
//! let source = "\
//! .themes: [light, dark]
//! .themed:
//!   background:
//!     .type: color
//!     light: ffffffff
//!     dark: ff000000
//! ";
//! let analysis = analyze(source, &AnalyzerConfig::default()).unwrap();
//! assert!(analysis.diagnostics().is_empty());
//! assert!(analysis.resolved("background").is_some());
//! ```

pub mod config;
pub mod decorations;
pub mod document;
pub mod error;
pub mod locator;
pub mod registry;
pub mod span;
pub mod themes;

mod context;
mod resolver;
mod validator;
mod walker;

pub use config::AnalyzerConfig;
pub use decorations::{ColorDecorations, Hover, ThemedColor};
pub use error::{AnalysisError, Diagnostic, ErrorCode, Label, Severity};
pub use locator::{Cursor, LocateError, locate_key, locate_literal, locate_scalar};
pub use registry::{ImportRegistry, ResolvedValue};
pub use span::{LineIndex, Position, Range, Span};
pub use themes::ThemeRegistry;

use log::{debug, info};

use themed_yaml_core::path::ItemPath;

use context::AnalysisContext;
use document::{Document, SHARED_KEY, THEMED_KEY, THEMES_KEY};
use walker::Analyzer;

/// The outcome of one analysis pass.
#[derive(Debug, Clone)]
pub struct Analysis {
    diagnostics: Vec<Diagnostic>,
    decorations: ColorDecorations,
    hovers: Vec<Hover>,
    registry: ImportRegistry,
    themes: ThemeRegistry,
    line_index: LineIndex,
}

impl Analysis {
    /// Returns every diagnostic in the order it was found.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity().is_error())
    }

    pub fn decorations(&self) -> &ColorDecorations {
        &self.decorations
    }

    pub fn hovers(&self) -> &[Hover] {
        &self.hovers
    }

    /// Returns the hover record whose key span contains `offset`.
    pub fn hover_at(&self, offset: usize) -> Option<&Hover> {
        self.hovers.iter().find(|hover| hover.span.contains(offset))
    }

    /// Returns the resolved bundle registered at the dotted `path`.
    pub fn resolved(&self, path: &str) -> Option<&ResolvedValue> {
        self.registry.get(path)
    }

    /// Returns every resolved item in walk order.
    pub fn registry(&self) -> &ImportRegistry {
        &self.registry
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }
}

/// Analyze `source` from scratch.
///
/// # Errors
///
/// Returns [`AnalysisError::Yaml`] if the text is not valid YAML and
/// [`AnalysisError::Locate`] if a parsed key cannot be found in the text.
/// Problems in the document itself are reported as diagnostics instead.
pub fn analyze(source: &str, config: &AnalyzerConfig) -> Result<Analysis, AnalysisError> {
    info!(bytes = source.len(); "Analyzing document");

    let document = Document::parse(source)?;
    let root = Cursor::new(source, 0);
    let mut ctx = AnalysisContext::new(source, *config);
    ctx.platforms = document.platforms().unwrap_or_default();

    if let Some(declarations) = document.themes() {
        let anchor = root.key(THEMES_KEY)?;
        ctx.themes = ThemeRegistry::build(
            declarations,
            anchor,
            root.advance_to(anchor.end()),
            &mut ctx.collector,
        );
    }
    debug!(themes = ctx.themes.len(), platforms = ctx.platforms.len(); "Declarations read");

    let inherited = ctx.platforms.clone();
    let themed = document.themed().filter(|_| !ctx.themes.is_empty());
    if document.themed().is_some() && themed.is_none() {
        debug!("No themes declared, skipping the themed section");
    }

    let mut analyzer = Analyzer::new(&mut ctx);
    if let Some(shared) = document.shared() {
        debug!("Analyzing shared section");
        let key = root.key(SHARED_KEY)?;
        analyzer.analyze(shared, key, &ItemPath::shared_root(), &inherited)?;
    }
    if let Some(themed) = themed {
        debug!("Analyzing themed section");
        let key = root.key(THEMED_KEY)?;
        analyzer.analyze(themed, key, &ItemPath::themed_root(), &inherited)?;
    }

    let diagnostics = ctx.collector.finish();
    info!(diagnostics = diagnostics.len(), items = ctx.registry.len(); "Analysis finished");

    Ok(Analysis {
        diagnostics,
        decorations: ctx.decorations,
        hovers: ctx.hovers,
        registry: ctx.registry,
        themes: ctx.themes,
        line_index: LineIndex::new(source),
    })
}
