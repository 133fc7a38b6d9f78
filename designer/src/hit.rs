//! Pointer-to-element hit-testing.
//!
//! Text elements hit on a padded box around their measured width: five
//! pixels of slop on each side, twenty pixels above the anchor and five
//! below it, matching how the text is painted relative to its anchor.
//! Images hit on their exact box.

#[cfg(test)]
#[path = "hit_test.rs"]
mod tests;

use crate::consts::{TEXT_HIT_ASCENT, TEXT_HIT_DESCENT, TEXT_HIT_PADDING};
use crate::doc::{Element, ElementKind, ElementList, Point};
use crate::text::TextMeasurer;

/// The element under `pt`, if any.
///
/// Scans in append order and returns the first hit. Paint order is also
/// append order, so when elements overlap the one painted underneath wins
/// the hit.
#[must_use]
pub fn hit_test<'a>(
    pt: Point,
    elements: &'a ElementList,
    measurer: &dyn TextMeasurer,
) -> Option<&'a Element> {
    elements.iter().find(|el| hits(pt, el, measurer))
}

/// Whether `pt` falls inside `element`'s hit box. Edges count as inside.
#[must_use]
pub fn hits(pt: Point, element: &Element, measurer: &dyn TextMeasurer) -> bool {
    match &element.kind {
        ElementKind::Text { content, .. } => {
            let width = measurer.text_width(content, element.font_size(), element.font_family());
            pt.x >= element.x - TEXT_HIT_PADDING
                && pt.x <= element.x + width + TEXT_HIT_PADDING
                && pt.y >= element.y - TEXT_HIT_ASCENT
                && pt.y <= element.y + TEXT_HIT_DESCENT
        }
        ElementKind::Image { width, height, .. } => {
            pt.x >= element.x
                && pt.x <= element.x + width
                && pt.y >= element.y
                && pt.y <= element.y + height
        }
    }
}
