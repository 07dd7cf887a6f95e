//! Item type markers.
//!
//! Every item in a themed YAML document declares its kind through a `.type`
//! key. [`ItemType`] enumerates the supported markers.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Error returned when a `.type` marker is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown item type `{0}`")]
pub struct UnknownItemType(pub String);

/// The `.type` marker of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemType {
    Int,
    Double,
    Color,
    FontWeight,
    Bool,
    Brightness,
}

impl ItemType {
    /// Returns the marker exactly as written in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Int => "int",
            ItemType::Double => "double",
            ItemType::Color => "color",
            ItemType::FontWeight => "fontWeight",
            ItemType::Bool => "bool",
            ItemType::Brightness => "brightness",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = UnknownItemType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(ItemType::Int),
            "double" => Ok(ItemType::Double),
            "color" => Ok(ItemType::Color),
            "fontWeight" => Ok(ItemType::FontWeight),
            "bool" => Ok(ItemType::Bool),
            "brightness" => Ok(ItemType::Brightness),
            other => Err(UnknownItemType(other.to_string())),
        }
    }
}
