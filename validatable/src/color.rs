//! Colour capability injected into a field's validation state.

use color::{AlphaColor, Srgb};

use crate::error::{Result, ValidationError};

/// A field colour as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// RGB colour
    Rgb { r: u8, g: u8, b: u8 },

    /// Hex colour (0xRRGGBB)
    Hex(u32),

    /// Named theme colour (resolved by the renderer)
    Named(String),

    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub const fn hex(value: u32) -> Self {
        Self::Hex(value)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Parse a CSS colour string
    pub fn parse(s: &str) -> Result<Self> {
        let parsed = color::parse_color(s).map_err(|_| ValidationError::InvalidColor(s.into()))?;
        let srgb: AlphaColor<Srgb> = parsed.to_alpha_color();
        let [r, g, b, _] = srgb.components;
        Ok(Self::Rgb {
            r: (r.clamp(0.0, 1.0) * 255.0).round() as u8,
            g: (g.clamp(0.0, 1.0) * 255.0).round() as u8,
            b: (b.clamp(0.0, 1.0) * 255.0).round() as u8,
        })
    }

    /// Convert to RGB tuple. Named colours have no fixed value.
    pub fn to_rgb(&self) -> Option<(u8, u8, u8)> {
        Some(match self {
            Self::Rgb { r, g, b } => (*r, *g, *b),
            Self::Hex(value) => (
                ((value >> 16) & 0xFF) as u8,
                ((value >> 8) & 0xFF) as u8,
                (value & 0xFF) as u8,
            ),
            Self::Named(_) => return None,
            Self::Black => (0, 0, 0),
            Self::Red => (128, 0, 0),
            Self::Green => (0, 128, 0),
            Self::Yellow => (128, 128, 0),
            Self::Blue => (0, 0, 128),
            Self::Magenta => (128, 0, 128),
            Self::Cyan => (0, 128, 128),
            Self::White => (192, 192, 192),
        })
    }
}

/// Provides the host component's colour state.
pub trait ColorProvider {
    fn has_color(&self) -> bool;

    fn color(&self) -> Option<Color>;
}

/// A provider that never has a colour.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoColor;

impl ColorProvider for NoColor {
    fn has_color(&self) -> bool {
        false
    }

    fn color(&self) -> Option<Color> {
        None
    }
}

impl ColorProvider for Color {
    fn has_color(&self) -> bool {
        true
    }

    fn color(&self) -> Option<Color> {
        Some(self.clone())
    }
}

impl ColorProvider for Option<Color> {
    fn has_color(&self) -> bool {
        self.is_some()
    }

    fn color(&self) -> Option<Color> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_css_color() {
        assert_eq!(Color::parse("#ff0000").ok(), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::parse("white").ok(), Some(Color::rgb(255, 255, 255)));
    }

    #[test]
    fn test_parse_invalid_color() {
        assert!(matches!(
            Color::parse("not-a-colour"),
            Err(ValidationError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(Color::hex(0x123456).to_rgb(), Some((0x12, 0x34, 0x56)));
        assert_eq!(Color::named("primary").to_rgb(), None);
    }
}
