//! Value resolution for a single item.
//!
//! Every theme of a themed item (or the `.value` of a shared item) is turned
//! into a typed [`Value`]: literals are cast, imports are looked up in the
//! [`ImportRegistry`](crate::registry::ImportRegistry) and `withOpacity`
//! rewrites the alpha byte of colors. A key whose resolution fails is left
//! unresolved.

use indexmap::IndexMap;
use serde_yaml::Value as YamlValue;

use themed_yaml_core::{
    color::Color,
    item_type::ItemType,
    path::ItemPath,
    value::{Brightness, FontWeight, Value},
};

use crate::{
    context::AnalysisContext,
    document::{Item, VALUE_KEY, render},
    error::{Diagnostic, ErrorCode},
    locator::{Cursor, LocateError, locate_literal, locate_scalar},
    registry::ResolvedValue,
    span::Span,
};

pub(crate) const IMPORT_KEY: &str = "import";
pub(crate) const LITERAL_VALUE_KEY: &str = "value";
const OPACITY_KEY: &str = "withOpacity";

/// The key span an explicitly written entry hangs off.
///
/// Entries that fall back to another theme have no site and report nothing.
#[derive(Debug, Clone, Copy)]
struct Site {
    key: Span,
}

/// Resolve every key of `item` and return its bundle.
///
/// `key_span` is the span of the item's own key; entry keys are searched
/// from its end.
///
/// # Errors
///
/// Returns [`LocateError`] if an entry key present in the tree cannot be
/// found in the text.
pub(crate) fn resolve_item(
    ctx: &mut AnalysisContext<'_>,
    item: &Item<'_>,
    item_type: ItemType,
    path: &ItemPath,
    key_span: Span,
) -> Result<ResolvedValue, LocateError> {
    let body = Cursor::new(ctx.source, key_span.end());
    let shared = path.is_shared();
    let mut resolver = EntryResolver {
        ctx,
        item_type,
        shared,
    };

    if shared {
        let value = match item.entry(VALUE_KEY) {
            Some(entry) => {
                let key = body.key(VALUE_KEY)?;
                resolver.entry(entry, VALUE_KEY, Some(Site { key }), key)
            }
            None => {
                resolver.ctx.emit(
                    Diagnostic::error(format!("The shared item '{path}' must define a '.value'."))
                        .with_code(ErrorCode::E102)
                        .with_label(key_span, "missing `.value`"),
                );
                None
            }
        };
        return Ok(ResolvedValue::Shared { item_type, value });
    }

    let themes: Vec<String> = resolver.ctx.themes.names().map(str::to_string).collect();
    let mut values = IndexMap::new();
    for theme in &themes {
        let Some((entry, written_under)) = resolver.raw_entry(item, theme) else {
            continue;
        };
        let origin = body.key(&written_under)?;
        let site = (written_under == *theme).then_some(Site { key: origin });
        if let Some(value) = resolver.entry(entry, theme, site, origin) {
            values.insert(theme.clone(), value);
        }
    }

    Ok(ResolvedValue::Themed { item_type, values })
}

/// The text of `literal` as written after the key at `origin`.
///
/// YAML reads colors such as `00000001` or `10e00000` as numbers, so numbers
/// are taken from the source when the scalar can be found there.
pub(crate) fn literal_text(source: &str, literal: &YamlValue, origin: Option<Span>) -> String {
    let written = origin
        .filter(|_| literal.is_number())
        .and_then(|origin| locate_scalar(source, origin))
        .and_then(|span| source.get(span.start()..span.end()));
    written.map_or_else(|| render(literal), str::to_string)
}

/// Cast a YAML literal to `item_type`.
///
/// `text` is the literal as written. Colors that YAML parsed as numbers are
/// read from it, falling back to zero-padding integers to eight digits.
pub(crate) fn cast_literal(literal: &YamlValue, text: &str, item_type: ItemType) -> Option<Value> {
    match item_type {
        ItemType::Int => literal.as_i64().map(Value::Int),
        ItemType::Double => literal.as_f64().map(Value::Double),
        ItemType::Color => cast_color(literal, text).map(Value::Color),
        ItemType::FontWeight => cast_font_weight(literal).map(Value::FontWeight),
        ItemType::Bool => literal.as_bool().map(Value::Bool),
        ItemType::Brightness => literal
            .as_str()
            .and_then(|brightness| brightness.parse::<Brightness>().ok())
            .map(Value::Brightness),
    }
}

fn cast_color(literal: &YamlValue, text: &str) -> Option<Color> {
    match literal {
        YamlValue::String(hex) => hex.parse().ok(),
        YamlValue::Number(number) => text
            .parse()
            .ok()
            .or_else(|| format!("{:08}", number.as_u64()?).parse().ok()),
        _ => None,
    }
}

fn cast_font_weight(literal: &YamlValue) -> Option<FontWeight> {
    match literal {
        YamlValue::Number(number) => FontWeight::new(number.as_i64()?).ok(),
        YamlValue::String(weight) => weight.parse().ok(),
        _ => None,
    }
}

struct EntryResolver<'a, 'src> {
    ctx: &'a mut AnalysisContext<'src>,
    item_type: ItemType,
    shared: bool,
}

impl EntryResolver<'_, '_> {
    /// Find the entry used for `theme`: its own, then along its alias chain,
    /// then the default theme's. Also returns the theme key it is written
    /// under.
    fn raw_entry<'doc>(
        &self,
        item: &Item<'doc>,
        theme: &str,
    ) -> Option<(&'doc YamlValue, String)> {
        if let Some(entry) = item.entry(theme) {
            return Some((entry, theme.to_string()));
        }

        let themes = &self.ctx.themes;
        let mut current = theme;
        while let Some(target) = themes.alias_of(current) {
            if let Some(entry) = item.entry(target) {
                return Some((entry, target.to_string()));
            }
            current = target;
        }

        let default = themes.default_theme()?;
        item.entry(default).map(|entry| (entry, default.to_string()))
    }

    /// Resolve `entry` for `key`. `origin` is the key the entry is written
    /// under, which differs from the site key for delegated entries.
    fn entry(
        &mut self,
        entry: &YamlValue,
        key: &str,
        site: Option<Site>,
        origin: Span,
    ) -> Option<Value> {
        let YamlValue::Mapping(mapping) = entry else {
            return self.cast(entry, site, Some(origin));
        };

        let base = if let Some(path) = mapping.get(IMPORT_KEY) {
            self.import(path, self.item_type, key, site)?
        } else if let Some(literal) = mapping.get(LITERAL_VALUE_KEY).filter(|v| !v.is_null()) {
            let origin = locate_literal(self.ctx.source, origin.end(), LITERAL_VALUE_KEY);
            self.cast(literal, site, origin)?
        } else {
            return None;
        };

        match (self.item_type, mapping.get(OPACITY_KEY)) {
            (ItemType::Color, Some(opacity)) if !opacity.is_null() => {
                let color = base.as_color()?;
                self.opacity(color, opacity, key, site).map(Value::Color)
            }
            _ => Some(base),
        }
    }

    fn cast(
        &mut self,
        literal: &YamlValue,
        site: Option<Site>,
        origin: Option<Span>,
    ) -> Option<Value> {
        let text = literal_text(self.ctx.source, literal, origin);
        let value = cast_literal(literal, &text, self.item_type);
        if value.is_none() && self.ctx.config.validate_literals {
            let item_type = self.item_type;
            self.report(site, &text, |span| {
                Diagnostic::error(format!("The value '{text}' is not a valid '{item_type}'."))
                .with_code(ErrorCode::E303)
                .with_label(span, format!("expected a `{item_type}`"))
            });
        }
        value
    }

    fn import(
        &mut self,
        path: &YamlValue,
        expected: ItemType,
        key: &str,
        site: Option<Site>,
    ) -> Option<Value> {
        let path = render(path);
        let Some(imported) = self.ctx.registry.get(&path) else {
            self.report(site, &path, |span| {
                Diagnostic::error(format!(
                    "The value '{path}' does not exist. Make sure the item has been defined ABOVE in the file."
                ))
                .with_code(ErrorCode::E300)
                .with_label(span, "not defined above")
            });
            return None;
        };

        let actual = imported.item_type();
        if actual != expected {
            self.report(site, &path, |span| {
                Diagnostic::error(format!(
                    "The value '{path}' is not of type '{expected}' but '{actual}'."
                ))
                .with_code(ErrorCode::E301)
                .with_label(span, format!("this is a `{actual}`"))
            });
            return None;
        }

        imported.value_for(key).cloned()
    }

    fn opacity(
        &mut self,
        color: Color,
        opacity: &YamlValue,
        key: &str,
        site: Option<Site>,
    ) -> Option<Color> {
        if let Some(opacity) = opacity.as_f64() {
            if !(0.0..=1.0).contains(&opacity) {
                self.report(site, OPACITY_KEY, |span| {
                    Diagnostic::error(format!("The opacity {opacity} must be between 0 and 1."))
                        .with_code(ErrorCode::E302)
                        .with_label(span, "out of range")
                });
                return None;
            }
            return color.with_opacity(opacity).ok();
        }

        let Some(path) = opacity.as_mapping().and_then(|m| m.get(IMPORT_KEY)) else {
            return self
                .cast_opacity(opacity, site)
                .and_then(|opacity| color.with_opacity(opacity).ok());
        };

        let opacity = self.import(path, ItemType::Double, key, site)?.as_double()?;
        if !(0.0..=1.0).contains(&opacity) {
            let path = render(path);
            let message = if self.shared {
                format!("The value '{path}' is {opacity} but it must be between 0 and 1.")
            } else {
                format!(
                    "The value '{path}' for theme '{key}' is {opacity} but it must be between 0 and 1."
                )
            };
            self.report(site, &path, |span| {
                Diagnostic::error(message)
                    .with_code(ErrorCode::E302)
                    .with_label(span, "out of range")
            });
            return None;
        }

        color.with_opacity(opacity).ok()
    }

    /// An opacity that is neither a number nor an import.
    fn cast_opacity(&mut self, opacity: &YamlValue, site: Option<Site>) -> Option<f64> {
        if self.ctx.config.validate_literals {
            let rendered = render(opacity);
            self.report(site, &rendered, |span| {
                Diagnostic::error(format!("The value '{rendered}' is not a valid 'double'."))
                    .with_code(ErrorCode::E303)
                    .with_label(span, "expected a `double`")
            });
        }
        None
    }

    /// Emit the diagnostic built by `build` at `literal`, searched after the
    /// site's key, or at the key itself when the literal is not in the text.
    fn report(&mut self, site: Option<Site>, literal: &str, build: impl FnOnce(Span) -> Diagnostic) {
        let Some(site) = site else {
            return;
        };
        let span = locate_literal(self.ctx.source, site.key.end(), literal).unwrap_or(site.key);
        self.ctx.emit(build(span));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cast(source: &str, item_type: ItemType) -> Option<Value> {
        let literal: YamlValue = serde_yaml::from_str(source).unwrap();
        cast_literal(&literal, source, item_type)
    }

    #[test]
    fn test_cast_color_from_string_and_digits() {
        assert_eq!(
            cast("'ffaabbcc'", ItemType::Color),
            Some(Value::Color(Color::from_argb(0xffaa_bbcc)))
        );
        assert_eq!(
            cast("12345678", ItemType::Color),
            Some(Value::Color(Color::from_argb(0x1234_5678)))
        );
        assert_eq!(
            cast("1", ItemType::Color),
            Some(Value::Color(Color::from_argb(0x0000_0001)))
        );
        assert_eq!(cast("red", ItemType::Color), None);
    }

    #[test]
    fn test_cast_color_from_exponent_like_text() {
        assert_eq!(
            cast("10e00000", ItemType::Color),
            Some(Value::Color(Color::from_argb(0x10e0_0000)))
        );
        assert_eq!(cast("1e3", ItemType::Color), None);
    }

    #[test]
    fn test_literal_text_reads_numbers_from_source() {
        let source = "light: 10e00000\ndark: 'ffffffff'\n";
        let origin = Span::new(0..5);
        let number: YamlValue = serde_yaml::from_str("10e00000").unwrap();
        assert_eq!(literal_text(source, &number, Some(origin)), "10e00000");
        assert_eq!(literal_text(source, &number, None), "10.0");

        let string: YamlValue = serde_yaml::from_str("'ffffffff'").unwrap();
        assert_eq!(literal_text(source, &string, Some(Span::new(16..20))), "ffffffff");
    }

    #[test]
    fn test_cast_numbers() {
        assert_eq!(cast("3", ItemType::Int), Some(Value::Int(3)));
        assert_eq!(cast("3.5", ItemType::Int), None);
        assert_eq!(
            cast("3", ItemType::Double),
            Some(Value::Double(3.0))
        );
    }

    #[test]
    fn test_cast_font_weight_and_brightness() {
        assert_eq!(
            cast("700", ItemType::FontWeight),
            Some(Value::FontWeight(FontWeight::BOLD))
        );
        assert_eq!(
            cast("normal", ItemType::FontWeight),
            Some(Value::FontWeight(FontWeight::NORMAL))
        );
        assert_eq!(cast("750", ItemType::FontWeight), None);
        assert_eq!(
            cast("dark", ItemType::Brightness),
            Some(Value::Brightness(Brightness::Dark))
        );
        assert_eq!(cast("yes", ItemType::Bool), None);
        assert_eq!(
            cast("true", ItemType::Bool),
            Some(Value::Bool(true))
        );
    }
}
