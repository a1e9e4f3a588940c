//! RGBA colors and CSS color-string parsing.
//!
//! Application records carry their accent color as a free-form CSS color
//! value. Rendering needs an actual RGBA value, so this module parses the
//! common CSS forms and falls back to a default accent for anything it
//! does not recognise.

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Return the same color with a different alpha value.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Default tile accent used when a record's color fails to parse.
    pub const DEFAULT_ACCENT: Self = Self::rgb(0x3b, 0x82, 0xf6);

    /// Parse a CSS color value.
    ///
    /// Supports `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`, and
    /// `rgba(r, g, b, a)` with a 0.0-1.0 alpha. Returns `None` for
    /// anything else (keywords, `hsl()`, gradients).
    pub fn parse_css(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Some(body) = value
            .strip_prefix("rgba(")
            .and_then(|v| v.strip_suffix(')'))
        {
            return Self::parse_rgb_args(body, true);
        }
        if let Some(body) = value.strip_prefix("rgb(").and_then(|v| v.strip_suffix(')')) {
            return Self::parse_rgb_args(body, false);
        }
        None
    }

    /// Parse a CSS color, substituting [`Color::DEFAULT_ACCENT`] on failure.
    pub fn parse_css_or_accent(value: &str) -> Self {
        Self::parse_css(value).unwrap_or(Self::DEFAULT_ACCENT)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        let nibble = |c: u8| char::from(c).to_digit(16).map(|d| d as u8);
        let byte = |hi: u8, lo: u8| Some(nibble(hi)? * 16 + nibble(lo)?);
        let b = hex.as_bytes();
        match b.len() {
            3 => Some(Self::rgb(
                byte(b[0], b[0])?,
                byte(b[1], b[1])?,
                byte(b[2], b[2])?,
            )),
            6 => Some(Self::rgb(
                byte(b[0], b[1])?,
                byte(b[2], b[3])?,
                byte(b[4], b[5])?,
            )),
            8 => Some(Self::rgba(
                byte(b[0], b[1])?,
                byte(b[2], b[3])?,
                byte(b[4], b[5])?,
                byte(b[6], b[7])?,
            )),
            _ => None,
        }
    }

    fn parse_rgb_args(body: &str, with_alpha: bool) -> Option<Self> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != if with_alpha { 4 } else { 3 } {
            return None;
        }
        let r: u8 = parts[0].parse().ok()?;
        let g: u8 = parts[1].parse().ok()?;
        let b: u8 = parts[2].parse().ok()?;
        let a = if with_alpha {
            let f: f32 = parts[3].parse().ok()?;
            if !(0.0..=1.0).contains(&f) {
                return None;
            }
            (f * 255.0).round() as u8
        } else {
            255
        };
        Some(Self::rgba(r, g, b, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_six_digit_hex() {
        assert_eq!(Color::parse_css("#3b82f6"), Some(Color::rgb(59, 130, 246)));
    }

    #[test]
    fn parse_hex_uppercase() {
        assert_eq!(Color::parse_css("#3B82F6"), Some(Color::rgb(59, 130, 246)));
    }

    #[test]
    fn parse_three_digit_hex() {
        assert_eq!(Color::parse_css("#f80"), Some(Color::rgb(255, 136, 0)));
    }

    #[test]
    fn parse_eight_digit_hex() {
        assert_eq!(
            Color::parse_css("#11223344"),
            Some(Color::rgba(0x11, 0x22, 0x33, 0x44)),
        );
    }

    #[test]
    fn parse_rgb_function() {
        assert_eq!(
            Color::parse_css("rgb(12, 34, 56)"),
            Some(Color::rgb(12, 34, 56)),
        );
    }

    #[test]
    fn parse_rgba_function() {
        assert_eq!(
            Color::parse_css("rgba(12, 34, 56, 0.5)"),
            Some(Color::rgba(12, 34, 56, 128)),
        );
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(Color::parse_css("  #ffffff "), Some(Color::WHITE));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Color::parse_css("cornflowerblue"), None);
        assert_eq!(Color::parse_css("#12345"), None);
        assert_eq!(Color::parse_css("#xyzxyz"), None);
        assert_eq!(Color::parse_css("rgb(1,2)"), None);
        assert_eq!(Color::parse_css("rgba(1,2,3,2.0)"), None);
        assert_eq!(Color::parse_css(""), None);
    }

    #[test]
    fn accent_fallback_applies() {
        assert_eq!(
            Color::parse_css_or_accent("not-a-color"),
            Color::DEFAULT_ACCENT,
        );
        assert_eq!(Color::parse_css_or_accent("#000"), Color::BLACK);
    }

    #[test]
    fn with_alpha_preserves_channels() {
        let c = Color::rgb(1, 2, 3).with_alpha(9);
        assert_eq!(c, Color::rgba(1, 2, 3, 9));
    }
}
