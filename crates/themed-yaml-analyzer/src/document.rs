//! Read-only views over a parsed themed YAML document.
//!
//! The YAML tree is produced by `serde_yaml`, whose mappings keep keys in
//! document order. The analyzer relies on that order to re-locate keys in
//! the text.

use serde_yaml::{Mapping, Value as YamlValue};

use themed_yaml_core::item_type::ItemType;

pub const THEMES_KEY: &str = ".themes";
pub const PLATFORMS_KEY: &str = ".platforms";
pub const SHARED_KEY: &str = ".shared";
pub const THEMED_KEY: &str = ".themed";
pub const TYPE_KEY: &str = ".type";
pub const VALUE_KEY: &str = ".value";

/// The root of a themed YAML document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    root: Mapping,
}

impl Document {
    /// Parse `source` into a document.
    ///
    /// A document whose root is not a mapping (including an empty one) is
    /// treated as having no sections.
    ///
    /// # Errors
    ///
    /// Returns the YAML error if `source` cannot be parsed.
    pub fn parse(source: &str) -> Result<Self, serde_yaml::Error> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let root = match serde_yaml::from_str::<YamlValue>(source)? {
            YamlValue::Mapping(root) => root,
            _ => Mapping::new(),
        };
        Ok(Self { root })
    }

    /// Returns the `.themes` declarations, if present as a list.
    pub fn themes(&self) -> Option<&[YamlValue]> {
        self.root
            .get(THEMES_KEY)
            .and_then(YamlValue::as_sequence)
            .map(Vec::as_slice)
    }

    /// Returns the root `.platforms` list, if present.
    pub fn platforms(&self) -> Option<Vec<String>> {
        platforms_of(&self.root)
    }

    /// Returns the `.shared` section, if present.
    pub fn shared(&self) -> Option<&YamlValue> {
        self.root.get(SHARED_KEY).filter(|value| !value.is_null())
    }

    /// Returns the `.themed` section, if present.
    pub fn themed(&self) -> Option<&YamlValue> {
        self.root.get(THEMED_KEY).filter(|value| !value.is_null())
    }
}

/// A node of a collection tree.
#[derive(Debug, Clone, Copy)]
pub enum Node<'doc> {
    /// A node without `.type`. Values that are not mappings are treated as
    /// empty collections.
    Collection(Collection<'doc>),
    /// A node with a `.type` marker.
    Item(Item<'doc>),
}

impl<'doc> Node<'doc> {
    /// Classify a YAML value as a collection or an item.
    pub fn classify(value: &'doc YamlValue) -> Self {
        match value.as_mapping() {
            Some(mapping) if mapping.contains_key(TYPE_KEY) => Node::Item(Item { mapping }),
            mapping => Node::Collection(Collection { mapping }),
        }
    }

    /// Returns the node's own `.platforms` list, if declared.
    pub fn platforms(&self) -> Option<Vec<String>> {
        match self {
            Node::Collection(collection) => collection.mapping.and_then(platforms_of),
            Node::Item(item) => platforms_of(item.mapping),
        }
    }
}

/// A collection of child nodes.
#[derive(Debug, Clone, Copy)]
pub struct Collection<'doc> {
    mapping: Option<&'doc Mapping>,
}

impl<'doc> Collection<'doc> {
    /// Returns the children in document order, skipping dot-prefixed keys.
    pub fn children(&self) -> Vec<(String, &'doc YamlValue)> {
        self.mapping
            .map(|mapping| {
                mapping
                    .iter()
                    .filter_map(|(key, value)| key_text(key).map(|key| (key, value)))
                    .filter(|(key, _)| !key.starts_with('.'))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns how many children are written before the collection's own
    /// `.platforms` key, if it has one.
    pub fn platforms_position(&self) -> Option<usize> {
        let mapping = self.mapping?;
        let mut children = 0;
        for key in mapping.keys().filter_map(key_text) {
            if key == PLATFORMS_KEY {
                return Some(children);
            }
            if !key.starts_with('.') {
                children += 1;
            }
        }
        None
    }
}

/// A leaf item carrying `.type` and its value entries.
#[derive(Debug, Clone, Copy)]
pub struct Item<'doc> {
    mapping: &'doc Mapping,
}

impl<'doc> Item<'doc> {
    /// Returns the raw `.type` marker.
    pub fn type_marker(&self) -> Option<&'doc YamlValue> {
        self.mapping.get(TYPE_KEY)
    }

    /// Returns the declared type, or the rendered marker if unsupported.
    pub fn item_type(&self) -> Result<ItemType, String> {
        let marker = self.type_marker().cloned().unwrap_or(YamlValue::Null);
        serde_yaml::from_value::<ItemType>(marker.clone()).map_err(|_| render(&marker))
    }

    /// Returns the entry written under `key`. Null entries count as absent.
    pub fn entry(&self, key: &str) -> Option<&'doc YamlValue> {
        self.mapping.get(key).filter(|value| !value.is_null())
    }

    /// Returns `true` if `key` is written on the item, even with a null value.
    pub fn has_key(&self, key: &str) -> bool {
        self.mapping.contains_key(key)
    }

    /// Returns every key in document order.
    pub fn keys(&self) -> Vec<String> {
        self.mapping.keys().filter_map(key_text).collect()
    }

    /// Returns the theme keys (not dot-prefixed) in document order.
    pub fn theme_keys(&self) -> Vec<String> {
        self.keys()
            .into_iter()
            .filter(|key| !key.starts_with('.'))
            .collect()
    }

    /// Returns the last key in document order.
    pub fn last_key(&self) -> Option<String> {
        self.mapping.keys().filter_map(key_text).last()
    }
}

/// Returns the text of a mapping key as it would appear in the source.
pub(crate) fn key_text(key: &YamlValue) -> Option<String> {
    match key {
        YamlValue::String(key) => Some(key.clone()),
        YamlValue::Number(key) => Some(key.to_string()),
        YamlValue::Bool(key) => Some(key.to_string()),
        _ => None,
    }
}

/// Compact single-line rendering of a YAML value for messages.
pub(crate) fn render(value: &YamlValue) -> String {
    match value {
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(value) => value.to_string(),
        YamlValue::Number(value) => value.to_string(),
        YamlValue::String(value) => value.clone(),
        YamlValue::Sequence(values) => {
            let values: Vec<String> = values.iter().map(render).collect();
            format!("[{}]", values.join(", "))
        }
        YamlValue::Mapping(mapping) => {
            let entries: Vec<String> = mapping
                .iter()
                .map(|(key, value)| format!("{}: {}", render(key), render(value)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        YamlValue::Tagged(tagged) => render(&tagged.value),
    }
}

fn platforms_of(mapping: &Mapping) -> Option<Vec<String>> {
    match mapping.get(PLATFORMS_KEY)? {
        YamlValue::Sequence(platforms) => Some(platforms.iter().map(render).collect()),
        YamlValue::Null => None,
        platform => Some(vec![render(platform)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Document {
        Document::parse(source).expect("valid YAML")
    }

    #[test]
    fn test_document_sections() {
        let document = parse(
            ".themes: [light, dark]\n.platforms: [ios, web]\n.shared: {}\n.themed:\n  a: 1\n",
        );

        assert_eq!(document.themes().map(<[YamlValue]>::len), Some(2));
        assert_eq!(
            document.platforms(),
            Some(vec!["ios".to_string(), "web".to_string()])
        );
        assert!(document.shared().is_some());
        assert!(document.themed().is_some());
    }

    #[test]
    fn test_document_empty_and_scalar_roots() {
        assert!(parse("").themes().is_none());
        assert!(parse("just a string").shared().is_none());
    }

    #[test]
    fn test_document_invalid_yaml() {
        assert!(Document::parse("a: [1, 2").is_err());
    }

    #[test]
    fn test_classify_nodes() {
        let value: YamlValue =
            serde_yaml::from_str("b:\n  .type: color\n  light: ffffffff\nc: 3\n.platforms: [ios]\n")
                .unwrap();

        let Node::Collection(collection) = Node::classify(&value) else {
            panic!("Expected a collection");
        };
        let children = collection.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].0, "b");
        assert!(matches!(Node::classify(children[0].1), Node::Item(_)));
        assert!(matches!(Node::classify(children[1].1), Node::Collection(_)));
        assert_eq!(
            Node::classify(&value).platforms(),
            Some(vec!["ios".to_string()])
        );
        assert_eq!(collection.platforms_position(), Some(2));
    }

    #[test]
    fn test_item_keys_in_document_order() {
        let value: YamlValue =
            serde_yaml::from_str("dark: ff000000\n.type: color\nlight: ffffffff\nsepia:\n")
                .unwrap();
        let Node::Item(item) = Node::classify(&value) else {
            panic!("Expected an item");
        };

        assert_eq!(item.item_type(), Ok(ItemType::Color));
        assert_eq!(item.theme_keys(), vec!["dark", "light", "sepia"]);
        assert_eq!(item.last_key().as_deref(), Some("sepia"));
        assert!(item.entry("sepia").is_none());
        assert!(item.has_key("sepia"));
    }

    #[test]
    fn test_item_unknown_type() {
        let value: YamlValue = serde_yaml::from_str(".type: colour\n").unwrap();
        let Node::Item(item) = Node::classify(&value) else {
            panic!("Expected an item");
        };

        assert_eq!(item.item_type(), Err("colour".to_string()));
    }

    #[test]
    fn test_render() {
        let value: YamlValue = serde_yaml::from_str("{b: {import: [a, 9]}}").unwrap();
        assert_eq!(render(&value), "{b: {import: [a, 9]}}");
    }
}
