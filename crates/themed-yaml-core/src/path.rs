//! Dotted item paths.
//!
//! Items are addressed by the keys leading to them joined with `.`. Themed
//! items live at `collection.item`, shared items at `.shared.collection.item`.

use std::fmt;

/// The key of the root shared section.
pub const SHARED_ROOT: &str = ".shared";

/// A path from the root of a section down to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ItemPath {
    segments: Vec<String>,
}

impl ItemPath {
    /// The path of the `.shared` section.
    pub fn shared_root() -> Self {
        Self {
            segments: vec![SHARED_ROOT.to_string()],
        }
    }

    /// The path of the `.themed` section, which is empty.
    pub fn themed_root() -> Self {
        Self::default()
    }

    /// Returns a new path with `key` appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use themed_yaml_core::path::ItemPath;
    ///
    /// let path = ItemPath::shared_root().child("palette").child("primary");
    /// assert_eq!(path.to_string(), ".shared.palette.primary");
    /// ```
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.to_string());
        Self { segments }
    }

    /// Returns `true` if the path points into the `.shared` section.
    pub fn is_shared(&self) -> bool {
        self.segments.first().is_some_and(|s| s == SHARED_ROOT)
    }
}

impl fmt::Display for ItemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}
