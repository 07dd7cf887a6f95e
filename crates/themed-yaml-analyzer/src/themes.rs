//! The theme registry built from the `.themes` declarations.

use indexmap::IndexMap;
use log::debug;
use serde_yaml::{Mapping, Value as YamlValue};

use crate::{
    document::render,
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    locator::Cursor,
    span::Span,
};

/// Keys accepted for a theme alias target.
const ALIAS_KEYS: [&str; 2] = ["import", "aliasOf"];

/// Ordered theme names and their aliases.
///
/// The first registered theme is the default theme, whether or not it is an
/// alias.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Option<String>>,
}

/// One well-formed `.themes` entry.
enum Declaration<'doc> {
    Plain(&'doc str),
    Alias { name: &'doc str, target: &'doc str },
}

impl ThemeRegistry {
    /// Build the registry from the `.themes` entries.
    ///
    /// `anchor` is the span of the `.themes` key and `cursor` starts right
    /// after it. Invalid entries are reported and treated as absent.
    pub(crate) fn build(
        declarations: &[YamlValue],
        anchor: Span,
        mut cursor: Cursor<'_>,
        collector: &mut DiagnosticCollector,
    ) -> Self {
        let mut registry = Self::default();
        let mut declared: IndexMap<&str, Span> = IndexMap::new();

        for declaration in declarations {
            let Some(parsed) = parse_declaration(declaration) else {
                let rendered = render(declaration);
                let span = cursor.literal(&rendered).unwrap_or(anchor);
                cursor = cursor.advance_to(span.end());
                collector.emit(
                    Diagnostic::error(format!(
                        "Bad theme type: \"{rendered}\". All the themes must be either a string or an object with a single entry: {{$themeName: {{import: $themeToImport}}}}"
                    ))
                    .with_code(ErrorCode::E001)
                    .with_label(span, "not a theme declaration"),
                );
                continue;
            };

            let (name, target) = match parsed {
                Declaration::Plain(name) => (name, None),
                Declaration::Alias { name, target } => (name, Some(target)),
            };
            let span = cursor.literal(name).unwrap_or(anchor);
            cursor = cursor.advance_to(span.end());

            if let Some(first) = declared.get(name) {
                collector.emit(
                    Diagnostic::warning(format!("Duplicate theme: '{name}'."))
                        .with_code(ErrorCode::E003)
                        .with_label(span, "already declared above")
                        .with_secondary_label(*first, "first declared here"),
                );
                continue;
            }

            if let Some(target) = target.filter(|target| !registry.contains(target)) {
                let target_span = cursor.literal(target).unwrap_or(span);
                cursor = cursor.advance_to(target_span.end());
                collector.emit(
                    Diagnostic::error(format!("Unknown theme to import: {target}"))
                        .with_code(ErrorCode::E002)
                        .with_label(target_span, "must be declared before this theme"),
                );
                continue;
            }

            debug!(theme = name, alias_of:? = target; "Registered theme");
            declared.insert(name, span);
            registry
                .themes
                .insert(name.to_string(), target.map(str::to_string));
        }

        registry
    }

    /// Returns the theme names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Returns the first declared theme.
    pub fn default_theme(&self) -> Option<&str> {
        self.themes.keys().next().map(String::as_str)
    }

    /// Returns the theme `name` directly imports, if it is an alias.
    pub fn alias_of(&self, name: &str) -> Option<&str> {
        self.themes.get(name)?.as_deref()
    }

    /// Follow the alias chain of `name` down to a theme that is not an alias.
    ///
    /// Targets are always declared earlier, so the chain terminates.
    pub fn resolve_alias<'a>(&'a self, name: &'a str) -> &'a str {
        let mut current = name;
        while let Some(target) = self.alias_of(current) {
            current = target;
        }
        current
    }

    /// Returns `true` if `name` is a registered theme.
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }
}

fn parse_declaration(declaration: &YamlValue) -> Option<Declaration<'_>> {
    match declaration {
        YamlValue::String(name) => Some(Declaration::Plain(name)),
        YamlValue::Mapping(mapping) if mapping.len() == 1 => {
            let (name, body) = mapping.iter().next()?;
            let name = name.as_str()?;
            let target = alias_target(body.as_mapping()?)?;
            Some(Declaration::Alias { name, target })
        }
        _ => None,
    }
}

fn alias_target(body: &Mapping) -> Option<&str> {
    if body.len() != 1 {
        return None;
    }
    ALIAS_KEYS
        .iter()
        .find_map(|key| body.get(*key))
        .and_then(YamlValue::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(source: &str) -> (ThemeRegistry, Vec<Diagnostic>) {
        let value: YamlValue = serde_yaml::from_str(source).unwrap();
        let declarations = value
            .get(".themes")
            .and_then(YamlValue::as_sequence)
            .unwrap();
        let cursor = Cursor::new(source, 0);
        let anchor = cursor.key(".themes").unwrap();
        let mut collector = DiagnosticCollector::new();
        let registry = ThemeRegistry::build(
            declarations,
            anchor,
            cursor.advance_to(anchor.end()),
            &mut collector,
        );
        (registry, collector.finish())
    }

    #[test]
    fn test_plain_themes_keep_declaration_order() {
        let (registry, diagnostics) = build(".themes: [light, dark, sepia]\n");

        assert!(diagnostics.is_empty());
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["light", "dark", "sepia"]
        );
        assert_eq!(registry.default_theme(), Some("light"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_alias_chain() {
        let source = ".themes:\n  - a\n  - b: {import: a}\n  - c: {aliasOf: b}\n";
        let (registry, diagnostics) = build(source);

        assert!(diagnostics.is_empty());
        assert_eq!(registry.alias_of("b"), Some("a"));
        assert_eq!(registry.alias_of("a"), None);
        assert_eq!(registry.resolve_alias("c"), "a");
        assert_eq!(registry.resolve_alias("a"), "a");
    }

    #[test]
    fn test_forward_alias_is_rejected() {
        let source = ".themes:\n  - b: {import: a}\n  - a\n";
        let (registry, diagnostics) = build(source);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code(), Some(ErrorCode::E002));
        assert_eq!(diagnostics[0].message(), "Unknown theme to import: a");
        assert!(!registry.contains("b"));
        assert_eq!(registry.default_theme(), Some("a"));
    }

    #[test]
    fn test_self_alias_is_rejected() {
        let (registry, diagnostics) = build(".themes:\n  - a: {import: a}\n");

        assert_eq!(diagnostics.len(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_bad_theme_type() {
        let source = ".themes: [light, dark, 9]\n";
        let (registry, diagnostics) = build(source);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message(),
            "Bad theme type: \"9\". All the themes must be either a string or an object with a single entry: {$themeName: {import: $themeToImport}}"
        );
        assert_eq!(diagnostics[0].primary_span(), Some(Span::new(23..24)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_multi_entry_object_is_bad_type() {
        let (_, diagnostics) = build(".themes:\n  - light\n  - {a: {import: light}, b: x}\n");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code(), Some(ErrorCode::E001));
    }

    #[test]
    fn test_duplicate_theme_is_a_warning() {
        let (registry, diagnostics) = build(".themes: [light, dark, light]\n");

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity().is_warning());
        assert_eq!(diagnostics[0].primary_span(), Some(Span::new(23..28)));
        assert_eq!(diagnostics[0].labels()[1].span(), Span::new(10..15));
        assert!(!diagnostics[0].labels()[1].is_primary());
        assert_eq!(registry.len(), 2);
    }
}
