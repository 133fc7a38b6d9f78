//! Full-frame display list builder.
//!
//! Every repaint rebuilds the whole frame: clear, background, product
//! chrome, then the elements in paint order. The output is an ordered list
//! of [`DrawCmd`]s a host replays onto whatever 2D surface it has. Building
//! a frame reads the session and never mutates it, so the same session
//! always yields the same list.

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

use crate::consts::{CANVAS_SIZE, DEFAULT_FONT_FAMILY, PRODUCT_INSET};
use crate::doc::ElementKind;
use crate::editor::Editor;

const BACKGROUND_COLOR: &str = "#f0f0f0";
const CHROME_COLOR: &str = "#333";
const OUTLINE_WIDTH: f64 = 2.0;
const IMAGE_FILL_COLOR: &str = "#ddd";
const IMAGE_STROKE_COLOR: &str = "#999";
const LABEL_FONT_SIZE: f64 = 16.0;
const TITLE_FONT_SIZE: f64 = 20.0;

/// Horizontal anchor of a text draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    /// Anchor is the midpoint of the run. The whole frame draws centered,
    /// labels and elements alike.
    Center,
}

/// One 2D drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Wipe the surface.
    Clear { width: f64, height: f64 },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
    },
    StrokeRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
        line_width: f64,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        font_size: f64,
        font_family: String,
        color: String,
        align: TextAlign,
    },
}

/// A complete frame, ready to replay in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub commands: Vec<DrawCmd>,
}

impl Frame {
    /// Build the frame for the session's current state.
    #[must_use]
    pub fn build(editor: &Editor) -> Self {
        let mid = CANVAS_SIZE / 2.0;
        let choices = editor.choices();

        let mut commands = vec![
            DrawCmd::Clear {
                width: CANVAS_SIZE,
                height: CANVAS_SIZE,
            },
            DrawCmd::FillRect {
                x: 0.0,
                y: 0.0,
                width: CANVAS_SIZE,
                height: CANVAS_SIZE,
                color: BACKGROUND_COLOR.to_owned(),
            },
            DrawCmd::StrokeRect {
                x: PRODUCT_INSET,
                y: PRODUCT_INSET,
                width: CANVAS_SIZE - 2.0 * PRODUCT_INSET,
                height: CANVAS_SIZE - 2.0 * PRODUCT_INSET,
                color: CHROME_COLOR.to_owned(),
                line_width: OUTLINE_WIDTH,
            },
            label(choices.product.name.clone(), mid, 30.0, TITLE_FONT_SIZE),
            label(format!("Fabric: {}", choices.fabric.name), mid, 60.0, LABEL_FONT_SIZE),
            label(format!("Style: {}", choices.style.name), mid, 90.0, LABEL_FONT_SIZE),
            label(format!("Patch: {}", choices.patch.name), mid, 120.0, LABEL_FONT_SIZE),
        ];

        for el in editor.elements() {
            match &el.kind {
                ElementKind::Text { .. } => {
                    commands.push(DrawCmd::FillText {
                        text: el.content().to_owned(),
                        x: el.x,
                        y: el.y,
                        font_size: el.font_size(),
                        font_family: el.font_family().to_owned(),
                        color: el.color().to_owned(),
                        align: TextAlign::Center,
                    });
                }
                ElementKind::Image { width, height, .. } => {
                    commands.push(DrawCmd::FillRect {
                        x: el.x,
                        y: el.y,
                        width: *width,
                        height: *height,
                        color: IMAGE_FILL_COLOR.to_owned(),
                    });
                    commands.push(DrawCmd::StrokeRect {
                        x: el.x,
                        y: el.y,
                        width: *width,
                        height: *height,
                        color: IMAGE_STROKE_COLOR.to_owned(),
                        line_width: OUTLINE_WIDTH,
                    });
                }
            }
        }

        Self { commands }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn label(text: String, x: f64, y: f64, font_size: f64) -> DrawCmd {
    DrawCmd::FillText {
        text,
        x,
        y,
        font_size,
        font_family: DEFAULT_FONT_FAMILY.to_owned(),
        color: CHROME_COLOR.to_owned(),
        align: TextAlign::Center,
    }
}
