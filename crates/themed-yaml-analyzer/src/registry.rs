//! Resolved item values addressed by dotted path.
//!
//! Items are registered in document order as the walk reaches them, so an
//! import can only see items defined above it.

use indexmap::IndexMap;
use log::debug;

use themed_yaml_core::{item_type::ItemType, path::ItemPath, value::Value};

/// The resolved values of a single item.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue {
    /// A shared item, with its `.value` if it resolved.
    Shared {
        item_type: ItemType,
        value: Option<Value>,
    },
    /// A themed item, with one entry per theme that resolved.
    Themed {
        item_type: ItemType,
        values: IndexMap<String, Value>,
    },
}

impl ResolvedValue {
    /// Returns the declared type of the item.
    pub fn item_type(&self) -> ItemType {
        match self {
            ResolvedValue::Shared { item_type, .. } | ResolvedValue::Themed { item_type, .. } => {
                *item_type
            }
        }
    }

    /// Returns the value seen by `key`.
    ///
    /// A shared value is the same for every key; a themed value is looked up
    /// by theme name.
    pub fn value_for(&self, key: &str) -> Option<&Value> {
        match self {
            ResolvedValue::Shared { value, .. } => value.as_ref(),
            ResolvedValue::Themed { values, .. } => values.get(key),
        }
    }
}

/// The path to value map filled in during a pass.
#[derive(Debug, Clone, Default)]
pub struct ImportRegistry {
    values: IndexMap<String, ResolvedValue>,
}

impl ImportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the resolved bundle of the item at `path`.
    pub fn register(&mut self, path: &ItemPath, value: ResolvedValue) {
        let path = path.to_string();
        debug!(path = path.as_str(), item_type = value.item_type().as_str(); "Registered item");
        self.values.insert(path, value);
    }

    /// Returns the bundle registered at `path`.
    pub fn get(&self, path: &str) -> Option<&ResolvedValue> {
        self.values.get(path)
    }

    /// Returns every registered path with its bundle, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
        self.values.iter().map(|(path, value)| (path.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_value_ignores_key() {
        let value = ResolvedValue::Shared {
            item_type: ItemType::Int,
            value: Some(Value::Int(4)),
        };

        assert_eq!(value.value_for(".value"), Some(&Value::Int(4)));
        assert_eq!(value.value_for("dark"), Some(&Value::Int(4)));
    }

    #[test]
    fn test_themed_value_by_theme() {
        let mut values = IndexMap::new();
        values.insert("light".to_string(), Value::Bool(true));
        let value = ResolvedValue::Themed {
            item_type: ItemType::Bool,
            values,
        };

        assert_eq!(value.value_for("light"), Some(&Value::Bool(true)));
        assert_eq!(value.value_for("dark"), None);
        assert_eq!(value.item_type(), ItemType::Bool);
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ImportRegistry::new();
        let path = ItemPath::shared_root().child("spacing");
        registry.register(
            &path,
            ResolvedValue::Shared {
                item_type: ItemType::Double,
                value: Some(Value::Double(0.5)),
            },
        );

        assert!(registry.get(".shared.spacing").is_some());
        assert!(registry.get("spacing").is_none());
        assert_eq!(registry.len(), 1);
    }
}
