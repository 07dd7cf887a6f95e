//! Color handling for themed YAML documents
//!
//! Colors are written in documents as eight hexadecimal digits in
//! `AARRGGBB` order. This module provides the [`Color`] type which wraps the
//! `AlphaColor<Srgb>` type from the color crate, keeping the document order
//! for display while offering a CSS style `#RRGGBBAA` rendering for
//! presentation.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{AlphaColor, Rgba8, Srgb, palette};
use thiserror::Error;

/// Errors produced while building a [`Color`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("invalid color `{0}`: expected 8 hexadecimal digits in AARRGGBB order")]
    InvalidFormat(String),

    #[error("opacity {0} must be between 0 and 1")]
    OpacityOutOfRange(f64),
}

/// Wrapper around the `AlphaColor<Srgb>` type from the color crate.
///
/// Colors from documents are 8-bit per channel, so equality, ordering and
/// hashing compare the 8-bit channels.
///
/// # Examples
///
/// ```
/// use themed_yaml_core::color::Color;
///
/// let color: Color = "ffaabbcc".parse().unwrap();
/// assert_eq!(color.alpha(), 0xff);
/// assert_eq!(color.to_string(), "ffaabbcc");
/// assert_eq!(color.to_css(), "#aabbccff");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Color {
    color: AlphaColor<Srgb>,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color {
        color: palette::css::BLACK,
    };

    /// Opaque white.
    pub const WHITE: Color = Color {
        color: palette::css::WHITE,
    };

    /// Create a color from a packed `AARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self {
            color: AlphaColor::from_rgba8(r, g, b, a),
        }
    }

    /// Parse a color from exactly eight hexadecimal digits in `AARRGGBB` order.
    ///
    /// The digits are reordered into a CSS `#RRGGBBAA` color and parsed by
    /// the color crate.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] when the string is not made of
    /// exactly eight hexadecimal digits.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidFormat(hex.to_string());
        if hex.len() != 8 || !hex.is_ascii() {
            return Err(invalid());
        }

        let (alpha, rgb) = hex.split_at(2);
        let color = color::parse_color(&format!("#{rgb}{alpha}")).map_err(|_| invalid())?;
        Ok(Self {
            color: color.to_alpha_color::<Srgb>(),
        })
    }

    /// Returns the 8-bit channels.
    pub fn to_rgba8(&self) -> Rgba8 {
        self.color.to_rgba8()
    }

    /// Returns the packed `AARRGGBB` value.
    pub fn argb(&self) -> u32 {
        let Rgba8 { r, g, b, a } = self.to_rgba8();
        u32::from_be_bytes([a, r, g, b])
    }

    /// Returns the alpha byte.
    pub fn alpha(&self) -> u8 {
        self.to_rgba8().a
    }

    /// Creates a new color with the alpha byte replaced.
    ///
    /// The red, green and blue channels are left untouched.
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self {
            color: self.color.with_alpha(f32::from(alpha) / 255.0),
        }
    }

    /// Creates a new color whose alpha byte is `round(255 * opacity)`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OpacityOutOfRange`] if `opacity` is not within
    /// `0.0..=1.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use themed_yaml_core::color::Color;
    ///
    /// let color = Color::from_hex("ffaabbcc").unwrap();
    /// assert_eq!(color.with_opacity(0.5).unwrap().to_string(), "80aabbcc");
    /// ```
    pub fn with_opacity(self, opacity: f64) -> Result<Self, ColorError> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ColorError::OpacityOutOfRange(opacity));
        }
        Ok(self.with_alpha((255.0 * opacity).round() as u8))
    }

    /// Returns the CSS style `#RRGGBBAA` representation.
    pub fn to_css(&self) -> String {
        let Rgba8 { r, g, b, a } = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    /// Returns `true` if the perceived brightness of the color is high.
    ///
    /// Uses the `(299 R + 587 G + 114 B) / 1000` weighting and ignores alpha.
    pub fn is_light(&self) -> bool {
        let Rgba8 { r, g, b, .. } = self.to_rgba8();
        let brightness = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
        brightness > 125
    }

    /// Returns the color to draw on top of this one: black on light colors,
    /// white on dark ones.
    pub fn contrast(&self) -> Color {
        if self.is_light() {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.argb() == other.argb()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.argb().hash(state);
    }
}

impl PartialOrd for Color {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Color {
    fn cmp(&self, other: &Self) -> Ordering {
        self.argb().cmp(&other.argb())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.argb())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex("80aabbcc").unwrap();
        assert_eq!(
            color.to_rgba8(),
            Rgba8 {
                r: 0xaa,
                g: 0xbb,
                b: 0xcc,
                a: 0x80
            }
        );
        assert_eq!(color.argb(), 0x80aa_bbcc);
    }

    #[test]
    fn test_color_from_hex_uppercase() {
        let color = Color::from_hex("FFAABBCC").unwrap();
        assert_eq!(color.to_string(), "ffaabbcc");
    }

    #[test]
    fn test_color_from_hex_invalid() {
        assert!(Color::from_hex("fff").is_err());
        assert!(Color::from_hex("ffaabbccdd").is_err());
        assert!(Color::from_hex("gghhiijj").is_err());
        assert!(Color::from_hex("+faabbcc").is_err());
        assert!(Color::from_hex("é1234567").is_err());
    }

    #[test]
    fn test_color_constants() {
        assert_eq!(Color::BLACK, Color::from_argb(0xff00_0000));
        assert_eq!(Color::WHITE.to_string(), "ffffffff");
    }

    #[test]
    fn test_color_to_css() {
        let color = Color::from_hex("80aabbcc").unwrap();
        assert_eq!(color.to_css(), "#aabbcc80");
    }

    #[test]
    fn test_with_opacity_half() {
        let color = Color::from_hex("ffaabbcc").unwrap();
        let faded = color.with_opacity(0.5).unwrap();
        assert_eq!(faded.to_string(), "80aabbcc");
        assert_eq!(faded, Color::from_argb(0x80aa_bbcc));
    }

    #[test]
    fn test_with_opacity_bounds() {
        let color = Color::from_hex("12345678").unwrap();
        assert_eq!(color.with_opacity(0.0).unwrap().to_string(), "00345678");
        assert_eq!(color.with_opacity(1.0).unwrap().to_string(), "ff345678");
        assert_eq!(
            color.with_opacity(1.5),
            Err(ColorError::OpacityOutOfRange(1.5))
        );
        assert!(color.with_opacity(-0.1).is_err());
    }

    #[test]
    fn test_with_opacity_small_alpha_is_two_digits() {
        let color = Color::from_hex("ffaabbcc").unwrap();
        assert_eq!(color.with_opacity(0.02).unwrap().to_string(), "05aabbcc");
    }

    #[test]
    fn test_contrast() {
        assert_eq!(Color::WHITE.contrast(), Color::BLACK);
        assert_eq!(Color::BLACK.contrast(), Color::WHITE);
        assert!(Color::from_hex("ffffff00").unwrap().is_light());
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn check_opacity_keeps_rgb(argb: u32, opacity: f64) -> Result<(), TestCaseError> {
        let color = Color::from_argb(argb);
        let faded = color.with_opacity(opacity).unwrap();

        prop_assert_eq!(faded.argb() & 0x00ff_ffff, argb & 0x00ff_ffff);
        prop_assert_eq!(faded.alpha(), (255.0 * opacity).round() as u8);
        Ok(())
    }

    fn check_hex_round_trip(argb: u32) -> Result<(), TestCaseError> {
        let hex = format!("{argb:08x}");
        let color = Color::from_hex(&hex).unwrap();

        prop_assert_eq!(color.argb(), argb);
        prop_assert_eq!(color.to_string(), hex);
        Ok(())
    }

    proptest! {
        #[test]
        fn opacity_keeps_rgb(argb in any::<u32>(), opacity in 0.0f64..=1.0) {
            check_opacity_keeps_rgb(argb, opacity)?;
        }

        #[test]
        fn hex_round_trip(argb in any::<u32>()) {
            check_hex_round_trip(argb)?;
        }
    }
}
