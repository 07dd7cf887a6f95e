//! The recursive descent over a section's collection tree.
//!
//! Each call receives the span of the node's key and hands back a cursor
//! past the node, so siblings always resume scanning after the subtree that
//! precedes them.

use log::{debug, trace};
use serde_yaml::Value as YamlValue;

use themed_yaml_core::{color::Color, item_type::ItemType, path::ItemPath};

use crate::{
    context::AnalysisContext,
    decorations::{Hover, ThemedColor, multi_key},
    document::{Collection, Item, Node, TYPE_KEY, VALUE_KEY, render},
    error::{Diagnostic, ErrorCode},
    locator::{Cursor, LocateError, locate_literal},
    registry::ResolvedValue,
    resolver::{IMPORT_KEY, LITERAL_VALUE_KEY, cast_literal, literal_text, resolve_item},
    span::Span,
    validator::{verify_default_theme, verify_platforms, verify_theme_keys},
};

pub(crate) struct Analyzer<'a, 'src> {
    ctx: &'a mut AnalysisContext<'src>,
}

/// A collection's own `.platforms` list and the set it inherits.
#[derive(Debug, Clone, Copy)]
struct Scope<'p> {
    own: Option<&'p [String]>,
    inherited: &'p [String],
}

impl<'p> Scope<'p> {
    /// The platforms children inherit.
    fn effective(&self) -> &'p [String] {
        self.own.unwrap_or(self.inherited)
    }
}

impl<'a, 'src> Analyzer<'a, 'src> {
    pub fn new(ctx: &'a mut AnalysisContext<'src>) -> Self {
        Self { ctx }
    }

    /// Analyze the node written under the key at `key`.
    ///
    /// Returns a cursor positioned after the node.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError`] if a key of the tree is missing from the text.
    pub fn analyze(
        &mut self,
        value: &YamlValue,
        key: Span,
        path: &ItemPath,
        inherited: &[String],
    ) -> Result<Cursor<'src>, LocateError> {
        let body = Cursor::new(self.ctx.source, key.end());
        let node = Node::classify(value);
        let own = node.platforms();
        let scope = Scope {
            own: own.as_deref(),
            inherited,
        };

        match node {
            Node::Collection(collection) => self.analyze_collection(&collection, body, path, scope),
            Node::Item(item) => {
                verify_platforms(
                    self.ctx,
                    scope.own.unwrap_or_default(),
                    inherited,
                    path,
                    body,
                )?;
                self.analyze_item(&item, key, body, path)
            }
        }
    }

    /// Walk the children in document order.
    ///
    /// The collection's own `.platforms` is checked where it is written, so
    /// a list placed after the children is searched past their subtrees.
    fn analyze_collection(
        &mut self,
        collection: &Collection<'_>,
        body: Cursor<'src>,
        path: &ItemPath,
        scope: Scope<'_>,
    ) -> Result<Cursor<'src>, LocateError> {
        let children = collection.children();
        let declared_at = collection.platforms_position();

        let mut cursor = body;
        for idx in 0..=children.len() {
            if declared_at == Some(idx) {
                cursor = verify_platforms(
                    self.ctx,
                    scope.own.unwrap_or_default(),
                    scope.inherited,
                    path,
                    cursor,
                )?;
            }
            let Some((key, child)) = children.get(idx) else {
                break;
            };
            let span = cursor.key(key)?;
            cursor = self.analyze(child, span, &path.child(key), scope.effective())?;
        }
        Ok(cursor)
    }

    fn analyze_item(
        &mut self,
        item: &Item<'_>,
        key: Span,
        body: Cursor<'src>,
        path: &ItemPath,
    ) -> Result<Cursor<'src>, LocateError> {
        trace!(path:% = path; "Analyzing item");

        if !path.is_shared() {
            verify_default_theme(self.ctx, item, key);
            verify_theme_keys(self.ctx, item, body)?;
        }

        match item.item_type() {
            Ok(item_type) => {
                let resolved = resolve_item(self.ctx, item, item_type, path, key)?;
                if item_type == ItemType::Color && self.ctx.config.decorate_colors {
                    self.decorate(item, key, body, path, &resolved)?;
                }
                self.ctx.registry.register(path, resolved);
            }
            Err(marker) => {
                let type_key = body.key(TYPE_KEY)?;
                let span =
                    locate_literal(self.ctx.source, type_key.end(), &marker).unwrap_or(type_key);
                debug!(path:% = path, marker = marker.as_str(); "Skipping item with unknown type");
                self.ctx.emit(
                    Diagnostic::error(format!(
                        "Unknown type: '{marker}'. The type must be one of: int, double, color, fontWeight, bool, brightness."
                    ))
                    .with_code(ErrorCode::E103)
                    .with_label(span, "unsupported type"),
                );
            }
        }

        let Some(last_key) = item.last_key() else {
            return Ok(body);
        };
        let last = body.key(&last_key)?;
        Ok(body.advance_to(last.end()))
    }

    /// Record single-color ranges for every written entry and, for themed
    /// items, the multi-color swatch and hover at the item key.
    fn decorate(
        &mut self,
        item: &Item<'_>,
        key: Span,
        body: Cursor<'src>,
        path: &ItemPath,
        resolved: &ResolvedValue,
    ) -> Result<(), LocateError> {
        let keys = if path.is_shared() {
            vec![VALUE_KEY.to_string()]
        } else {
            item.theme_keys()
        };

        let mut cursor = body;
        for entry_key in keys {
            let Some(entry) = item.entry(&entry_key) else {
                continue;
            };
            let entry_span = cursor.key(&entry_key)?;
            cursor = cursor.advance_to(entry_span.end());

            let Some((text, color)) = self.single_color(entry, &entry_key, entry_span) else {
                continue;
            };
            if let Some(span) = locate_literal(self.ctx.source, entry_span.end(), &text) {
                self.ctx.decorations.add_single(color, span);
            }
        }

        if path.is_shared() {
            return Ok(());
        }

        let colors: Vec<ThemedColor> = self
            .ctx
            .themes
            .names()
            .map(|theme| ThemedColor {
                theme: theme.to_string(),
                color: resolved.value_for(theme).and_then(|value| value.as_color()),
            })
            .collect();
        self.ctx.decorations.add_multi(multi_key(&colors), key);
        self.ctx.hovers.push(Hover {
            span: key,
            path: path.to_string(),
            colors,
        });
        Ok(())
    }

    /// The text to highlight for an entry and the color it shows.
    fn single_color(
        &self,
        entry: &YamlValue,
        key: &str,
        entry_span: Span,
    ) -> Option<(String, Color)> {
        let source = self.ctx.source;
        let Some(mapping) = entry.as_mapping() else {
            let text = literal_text(source, entry, Some(entry_span));
            let color = cast_literal(entry, &text, ItemType::Color)?.as_color()?;
            return Some((text, color));
        };

        if let Some(import) = mapping.get(IMPORT_KEY) {
            let path = render(import);
            let color = self
                .ctx
                .registry
                .get(&path)?
                .value_for(key)?
                .as_color()?;
            return Some((path, color));
        }

        let literal = mapping.get(LITERAL_VALUE_KEY)?;
        let origin = locate_literal(source, entry_span.end(), LITERAL_VALUE_KEY);
        let text = literal_text(source, literal, origin);
        let color = cast_literal(literal, &text, ItemType::Color)?.as_color()?;
        Some((text, color))
    }
}
