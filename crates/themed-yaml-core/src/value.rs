//! Typed item values.
//!
//! A [`Value`] is what a single theme entry (or the single shared entry) of
//! an item resolves to once literals are cast to the item's [`ItemType`] and
//! imports are followed.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{color::Color, item_type::ItemType};

/// Error returned when a literal cannot represent a value of the expected type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{literal}` is not a valid `{expected}`")]
pub struct InvalidLiteral {
    pub literal: String,
    pub expected: ItemType,
}

impl InvalidLiteral {
    fn new(literal: impl Into<String>, expected: ItemType) -> Self {
        Self {
            literal: literal.into(),
            expected,
        }
    }
}

/// A font weight between 100 and 900 in steps of 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontWeight(u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);

    /// Create a font weight from its numeric value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidLiteral`] unless `weight` is one of 100, 200, ..., 900.
    pub fn new(weight: i64) -> Result<Self, InvalidLiteral> {
        if (100..=900).contains(&weight) && weight % 100 == 0 {
            Ok(Self(weight as u16))
        } else {
            Err(InvalidLiteral::new(weight.to_string(), ItemType::FontWeight))
        }
    }

    /// Returns the numeric weight.
    pub fn weight(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

impl FromStr for FontWeight {
    type Err = InvalidLiteral;

    /// Accepts `normal`, `bold` and `w100` through `w900`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::NORMAL),
            "bold" => Ok(Self::BOLD),
            _ => s
                .strip_prefix('w')
                .and_then(|digits| digits.parse::<i64>().ok())
                .and_then(|weight| Self::new(weight).ok())
                .ok_or_else(|| InvalidLiteral::new(s, ItemType::FontWeight)),
        }
    }
}

/// Whether a theme is light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brightness {
    Light,
    Dark,
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brightness::Light => f.write_str("light"),
            Brightness::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Brightness {
    type Err = InvalidLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Brightness::Light),
            "dark" => Ok(Brightness::Dark),
            _ => Err(InvalidLiteral::new(s, ItemType::Brightness)),
        }
    }
}

/// A resolved item value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Double(f64),
    Color(Color),
    FontWeight(FontWeight),
    Bool(bool),
    Brightness(Brightness),
}

impl Value {
    /// Returns the [`ItemType`] this value belongs to.
    pub fn item_type(&self) -> ItemType {
        match self {
            Value::Int(_) => ItemType::Int,
            Value::Double(_) => ItemType::Double,
            Value::Color(_) => ItemType::Color,
            Value::FontWeight(_) => ItemType::FontWeight,
            Value::Bool(_) => ItemType::Bool,
            Value::Brightness(_) => ItemType::Brightness,
        }
    }

    /// Returns the color if this is a color value.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Value::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// Returns the number if this is a double value.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Double(value) => write!(f, "{value}"),
            Value::Color(color) => write!(f, "{color}"),
            Value::FontWeight(weight) => write!(f, "{weight}"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Brightness(brightness) => write!(f, "{brightness}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_weight_numeric() {
        assert_eq!(FontWeight::new(400), Ok(FontWeight::NORMAL));
        assert!(FontWeight::new(450).is_err());
        assert!(FontWeight::new(1000).is_err());
        assert!(FontWeight::new(0).is_err());
    }

    #[test]
    fn test_font_weight_from_str() {
        assert_eq!("bold".parse(), Ok(FontWeight::BOLD));
        assert_eq!("w300".parse::<FontWeight>().map(|w| w.weight()), Ok(300));
        assert!("heavy".parse::<FontWeight>().is_err());
        assert!("w350".parse::<FontWeight>().is_err());
    }

    #[test]
    fn test_brightness_from_str() {
        assert_eq!("dark".parse(), Ok(Brightness::Dark));
        assert!("dim".parse::<Brightness>().is_err());
    }

    #[test]
    fn test_value_item_type() {
        assert_eq!(Value::Double(0.5).item_type(), ItemType::Double);
        assert_eq!(
            Value::Color(Color::WHITE).item_type(),
            ItemType::Color
        );
        assert_eq!(Value::Color(Color::WHITE).as_color(), Some(Color::WHITE));
        assert_eq!(Value::Int(3).as_double(), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::FontWeight(FontWeight::BOLD).to_string(), "w700");
        assert_eq!(Value::Color(Color::BLACK).to_string(), "ff000000");
        assert_eq!(Value::Bool(true).to_string(), "true");
    }
}
