//! Approximate text metrics for layout.
//!
//! Labels are rendered by the SVG consumer with a generic sans-serif face, so
//! exact glyph advances are unknown at layout time. Widths use per-class
//! average advances of common sans-serif fonts (em fractions), which is close
//! enough for margins and legend boxes.

use crate::primitives::TextStyle;

#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub ascent: f64,
}

fn advance_em(ch: char) -> f64 {
    match ch {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.28,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | ' ' => 0.33,
        'm' | 'w' | 'M' | 'W' => 0.85,
        '0'..='9' => 0.556,
        c if c.is_ascii_uppercase() => 0.67,
        _ => 0.55,
    }
}

/// Measure text width and height in points.
pub fn measure_text(text: &str, size_pt: f64) -> TextMetrics {
    let width: f64 = text.chars().map(advance_em).sum::<f64>() * size_pt;
    TextMetrics {
        width,
        height: 1.2 * size_pt,
        ascent: 0.93 * size_pt,
    }
}

pub fn measure_styled(text: &str, style: &TextStyle) -> TextMetrics {
    let m = measure_text(text, style.size);
    if style.bold {
        TextMetrics {
            width: m.width * 1.07,
            ..m
        }
    } else {
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_hello() {
        let m = measure_text("Hello", 12.0);
        assert!(m.width > 20.0);
        assert!(m.height > 8.0);
        assert!(m.ascent > 0.0);
    }

    #[test]
    fn bold_wider_than_regular() {
        let regular = TextStyle::default();
        let bold = TextStyle {
            bold: true,
            ..Default::default()
        };
        assert!(measure_styled("Test", &bold).width > measure_styled("Test", &regular).width);
    }

    #[test]
    fn width_scales_with_size() {
        let a = measure_text("R² = 0.8704", 10.0).width;
        let b = measure_text("R² = 0.8704", 20.0).width;
        assert!((b - 2.0 * a).abs() < 1e-9);
    }
}
