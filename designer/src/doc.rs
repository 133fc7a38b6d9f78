//! Canvas elements and the append-ordered session list.
//!
//! Elements are a closed set of kinds carried as a tagged union. The wire
//! shape is a flat JSON object with a `type` tag and camelCase keys, so a
//! serialized element looks like
//! `{"id":"text-1","type":"text","content":"Hi","x":300.0,"y":300.0,...}`.
//! Style attributes on text are optional on the wire; readers apply the
//! fixed defaults instead of rejecting the element.

#[cfg(test)]
#[path = "doc_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_TEXT_COLOR, IMAGE_SPAWN, IMAGE_SPAWN_CONTENT,
    IMAGE_SPAWN_SIZE, TEXT_SPAWN, TEXT_SPAWN_CONTENT,
};

/// Identifier of a canvas element, unique within one editing session.
///
/// Shaped as `{kind}-{seq}` where `seq` counts up across both kinds, so ids
/// never collide and never get reused even after a list reload.
pub type ElementId = String;

/// A position on the design surface, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Kind-specific body of an element.
///
/// Flattened into the parent [`Element`] on the wire with `type` as the tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    /// A run of text anchored at the element position.
    #[serde(rename_all = "camelCase")]
    Text {
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        font_size: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        font_family: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    /// A placeholder image box with explicit dimensions.
    Image {
        content: String,
        width: f64,
        height: f64,
    },
}

/// One user-placed element on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.kind, ElementKind::Text { .. })
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        matches!(self.kind, ElementKind::Image { .. })
    }

    /// Position as a [`Point`].
    #[must_use]
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Text content or image reference carried by the element.
    #[must_use]
    pub fn content(&self) -> &str {
        match &self.kind {
            ElementKind::Text { content, .. } | ElementKind::Image { content, .. } => content,
        }
    }

    /// Font size in canvas px. Defaults to `20.0` when absent.
    #[must_use]
    pub fn font_size(&self) -> f64 {
        match &self.kind {
            ElementKind::Text { font_size, .. } => font_size.unwrap_or(DEFAULT_FONT_SIZE),
            ElementKind::Image { .. } => DEFAULT_FONT_SIZE,
        }
    }

    /// Font family name. Defaults to `"Arial"` when absent.
    #[must_use]
    pub fn font_family(&self) -> &str {
        match &self.kind {
            ElementKind::Text { font_family, .. } => {
                font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
            }
            ElementKind::Image { .. } => DEFAULT_FONT_FAMILY,
        }
    }

    /// Text color as a CSS color string. Defaults to `"#000000"` when absent.
    #[must_use]
    pub fn color(&self) -> &str {
        match &self.kind {
            ElementKind::Text { color, .. } => color.as_deref().unwrap_or(DEFAULT_TEXT_COLOR),
            ElementKind::Image { .. } => DEFAULT_TEXT_COLOR,
        }
    }
}

/// The session's elements in append order.
///
/// Append order is paint order: later elements draw over earlier ones.
/// Nothing in the current tool set removes an element, so ids plus order
/// fully describe the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementList {
    items: Vec<Element>,
    next_seq: u64,
}

impl ElementList {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_seq: 1,
        }
    }

    /// Append a text element with the fixed spawn content and style.
    /// Returns the new element's id.
    pub fn add_text(&mut self) -> ElementId {
        let id = self.next_id("text");
        self.items.push(Element {
            id: id.clone(),
            x: TEXT_SPAWN.0,
            y: TEXT_SPAWN.1,
            kind: ElementKind::Text {
                content: TEXT_SPAWN_CONTENT.to_owned(),
                font_size: Some(DEFAULT_FONT_SIZE),
                font_family: Some(DEFAULT_FONT_FAMILY.to_owned()),
                color: Some(DEFAULT_TEXT_COLOR.to_owned()),
            },
        });
        id
    }

    /// Append an image placeholder with the fixed spawn box.
    /// Returns the new element's id.
    pub fn add_image(&mut self) -> ElementId {
        let id = self.next_id("image");
        self.items.push(Element {
            id: id.clone(),
            x: IMAGE_SPAWN.0,
            y: IMAGE_SPAWN.1,
            kind: ElementKind::Image {
                content: IMAGE_SPAWN_CONTENT.to_owned(),
                width: IMAGE_SPAWN_SIZE.0,
                height: IMAGE_SPAWN_SIZE.1,
            },
        });
        id
    }

    /// Move an element by a delta. Returns `false` when the id is unknown,
    /// which callers treat as a no-op rather than a fault.
    pub fn translate(&mut self, id: &str, dx: f64, dy: f64) -> bool {
        match self.items.iter_mut().find(|el| el.id == id) {
            Some(el) => {
                el.x += dx;
                el.y += dy;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Element> {
        self.items.iter().find(|el| el.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Elements in paint order.
    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the whole list, keeping the id counter ahead of every
    /// numeric suffix in `elements` so later appends cannot collide.
    pub fn load(&mut self, elements: Vec<Element>) {
        for el in &elements {
            if let Some(seq) = id_seq(&el.id) {
                self.next_seq = self.next_seq.max(seq + 1);
            }
        }
        self.items = elements;
    }

    fn next_id(&mut self, kind: &str) -> ElementId {
        let id = format!("{kind}-{}", self.next_seq);
        self.next_seq += 1;
        id
    }
}

impl Default for ElementList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ElementList {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Numeric suffix of an id like `text-12`, if it has one.
fn id_seq(id: &str) -> Option<u64> {
    let (_, suffix) = id.rsplit_once('-')?;
    match suffix.parse() {
        Ok(seq) => Some(seq),
        Err(_) => None,
    }
}
