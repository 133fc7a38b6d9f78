//! Fixed numbers shared across the engine.

/// Width and height of the square design surface, in canvas pixels.
pub const CANVAS_SIZE: f64 = 600.0;

/// Inset of the product outline rectangle from the canvas edge.
pub const PRODUCT_INSET: f64 = 50.0;

/// Font size applied to text elements that carry no explicit size.
pub const DEFAULT_FONT_SIZE: f64 = 20.0;

/// Font family applied to text elements that carry no explicit family.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Fill color applied to text elements that carry no explicit color.
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

/// Horizontal slop on both sides of a text element's measured width.
pub const TEXT_HIT_PADDING: f64 = 5.0;

/// How far above the text anchor the hit box reaches.
pub const TEXT_HIT_ASCENT: f64 = 20.0;

/// How far below the text anchor the hit box reaches.
pub const TEXT_HIT_DESCENT: f64 = 5.0;

/// Where new text elements spawn.
pub const TEXT_SPAWN: (f64, f64) = (300.0, 300.0);

/// Content new text elements spawn with.
pub const TEXT_SPAWN_CONTENT: &str = "Double click to edit";

/// Where new image placeholders spawn.
pub const IMAGE_SPAWN: (f64, f64) = (200.0, 200.0);

/// Box size new image placeholders spawn with.
pub const IMAGE_SPAWN_SIZE: (f64, f64) = (100.0, 100.0);

/// Asset reference stored on new image placeholders.
pub const IMAGE_SPAWN_CONTENT: &str = "placeholder-image";

/// Average glyph advance as a fraction of the font size, tuned for the
/// default family. Used by the heuristic measurer only.
pub const AVG_GLYPH_ADVANCE: f64 = 0.55;
