//! Color swatch metadata collected while walking color items.

use indexmap::IndexMap;

use themed_yaml_core::color::Color;

use crate::span::Span;

/// Text ranges to decorate, grouped by color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorDecorations {
    single: IndexMap<Color, Vec<Span>>,
    multi: IndexMap<String, Vec<Span>>,
}

impl ColorDecorations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a literal or imported color written at `span`.
    pub fn add_single(&mut self, color: Color, span: Span) {
        self.single.entry(color).or_default().push(span);
    }

    /// Record the per-theme colors of a themed item at its key.
    ///
    /// `colors` is the joined key built by [`multi_key`].
    pub fn add_multi(&mut self, colors: String, span: Span) {
        self.multi.entry(colors).or_default().push(span);
    }

    /// Returns the single-color ranges in first-seen order.
    pub fn single(&self) -> &IndexMap<Color, Vec<Span>> {
        &self.single
    }

    /// Returns the multi-color ranges in first-seen order.
    pub fn multi(&self) -> &IndexMap<String, Vec<Span>> {
        &self.multi
    }

    pub fn is_empty(&self) -> bool {
        self.single.is_empty() && self.multi.is_empty()
    }
}

/// Join per-theme colors into a multi-decoration key.
///
/// Unresolved themes contribute an empty string, so the number of entries
/// always equals the number of themes.
pub fn multi_key(colors: &[ThemedColor]) -> String {
    colors
        .iter()
        .map(|themed| themed.color.map(|color| color.to_string()).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
}

/// The color a theme resolved to, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemedColor {
    pub theme: String,
    pub color: Option<Color>,
}

/// Hover information recorded at the key of a themed color item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hover {
    pub span: Span,
    pub path: String,
    pub colors: Vec<ThemedColor>,
}
