//! Text width measurement seam.
//!
//! Hit-testing needs the rendered width of a text run, but the engine has no
//! font stack. Hosts that can measure for real (a browser canvas context, a
//! shaping library) implement [`TextMeasurer`]; everyone else gets the
//! built-in heuristic, which is close enough for the default family at the
//! sizes the editor uses.

#[cfg(test)]
#[path = "text_test.rs"]
mod tests;

use crate::consts::AVG_GLYPH_ADVANCE;

/// Supplies rendered text widths to the hit-tester.
pub trait TextMeasurer {
    /// Width in canvas pixels of `text` drawn at `font_size` in `font_family`.
    fn text_width(&self, text: &str, font_size: f64, font_family: &str) -> f64;
}

/// Width as a fixed fraction of the font size per character.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMeasurer;

impl TextMeasurer for HeuristicMeasurer {
    fn text_width(&self, text: &str, font_size: f64, _font_family: &str) -> f64 {
        let chars = text.chars().count();
        chars as f64 * font_size * AVG_GLYPH_ADVANCE
    }
}
