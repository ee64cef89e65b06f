use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const ROYAL_BLUE: Color = Color::rgb(65, 105, 225);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` (leading `#` optional). Malformed channels read as 0;
    /// use [`Color::parse_hex`] to reject them instead.
    pub fn hex(s: &str) -> Self {
        let s = s.strip_prefix('#').unwrap_or(s);
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(0)
        };
        Self::rgb(channel(0..2), channel(2..4), channel(4..6))
    }

    /// Strict `#rrggbb` parser: exactly six hex digits after an optional `#`.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub const fn with_alpha(mut self, a: f64) -> Self {
        self.a = a;
        self
    }

    pub fn to_svg_fill(&self) -> String {
        if (self.a - 1.0).abs() < 1e-6 {
            self.to_hex()
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg_fill())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::parse_hex(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid color '{s}', expected #rrggbb"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let c = Color::hex("#4169e1");
        assert_eq!(c, Color::ROYAL_BLUE);
        assert_eq!(c.to_hex(), "#4169e1");
    }

    #[test]
    fn alpha_uses_rgba() {
        let c = Color::WHITE.with_alpha(0.8);
        assert_eq!(c.to_svg_fill(), "rgba(255,255,255,0.800)");
    }

    #[test]
    fn malformed_hex_reads_zero() {
        assert_eq!(Color::hex("#zz"), Color::BLACK);
    }

    #[test]
    fn parse_hex_is_strict() {
        assert_eq!(Color::parse_hex("4169E1"), Some(Color::ROYAL_BLUE));
        assert_eq!(Color::parse_hex("#4169e"), None);
        assert_eq!(Color::parse_hex("#4169eg"), None);
        assert_eq!(Color::parse_hex("#4169e1ff"), None);
    }

    #[test]
    fn malformed_color_in_json_is_an_error() {
        let ok: Color = serde_json::from_str("\"#ffa500\"").unwrap();
        assert_eq!(ok, Color::ORANGE);

        let err = serde_json::from_str::<Color>("\"#ff a500\"").unwrap_err();
        assert!(err.to_string().contains("expected #rrggbb"), "{err}");
    }
}
