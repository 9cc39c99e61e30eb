//! RGBA color handling for symbol paint.

use serde::{Deserialize, Serialize};

/// An RGBA color as served by renderer definitions: `[r, g, b, alpha]`
/// with every component in 0-255.
///
/// Symbols carry `Option<Color>`; absence means "no paint" (fill or stroke
/// `none` with opacity 0), not black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// CSS `rgb(r,g,b)` string for SVG paint attributes.
    pub fn css(&self) -> String {
        let [r, g, b, _] = self.0;
        format!("rgb({},{},{})", r, g, b)
    }

    /// Opacity in 0.0..=1.0, derived from the alpha component.
    pub fn opacity(&self) -> f32 {
        self.0[3] as f32 / 255.0
    }
}

/// SVG paint value for an optional color: the CSS color, or `none`.
pub fn paint(color: Option<&Color>) -> String {
    match color {
        Some(c) => c.css(),
        None => "none".to_string(),
    }
}

/// SVG opacity value for an optional color: alpha-derived, or 0.
pub fn paint_opacity(color: Option<&Color>) -> f32 {
    color.map(Color::opacity).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_format() {
        assert_eq!(Color::new(255, 0, 128, 255).css(), "rgb(255,0,128)");
    }

    #[test]
    fn test_opacity() {
        assert_eq!(Color::new(0, 0, 0, 255).opacity(), 1.0);
        assert_eq!(Color::new(0, 0, 0, 0).opacity(), 0.0);
        assert!((Color::new(0, 0, 0, 128).opacity() - 0.50196).abs() < 1e-4);
    }

    #[test]
    fn test_missing_color_is_no_paint() {
        assert_eq!(paint(None), "none");
        assert_eq!(paint_opacity(None), 0.0);
    }

    #[test]
    fn test_serde_as_array() {
        let c: Color = serde_json::from_str("[10,20,30,40]").unwrap();
        assert_eq!(c, Color::new(10, 20, 30, 40));
        assert_eq!(serde_json::to_string(&c).unwrap(), "[10,20,30,40]");
    }
}
