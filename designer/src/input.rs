//! Panel tabs, selection, preview flag, and the drag gesture machine.

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;

use crate::doc::{ElementId, Point};

/// The side panel tab currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Canvas,
    Product,
    Fabric,
    Patches,
    Style,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 5] = [Tab::Canvas, Tab::Product, Tab::Fabric, Tab::Patches, Tab::Style];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Canvas => "canvas",
            Tab::Product => "product",
            Tab::Fabric => "fabric",
            Tab::Patches => "patches",
            Tab::Style => "style",
        }
    }
}

/// Session UI state outside the canvas itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub active_tab: Tab,
    /// The selected element, at most one. Only an explicit click assigns
    /// this; drags move whatever is already here.
    pub selected: Option<ElementId>,
    /// Preview hides the editing chrome and touches nothing else.
    pub preview: bool,
}

/// Drag gesture state.
///
/// Pointer-down arms a drag only when something is selected; it never
/// selects by itself. Pointer-up and pointer-leave both disarm it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Mid-drag. `last` is the pointer position at the previous event and
    /// is the reference point for the next delta.
    Dragging { last: Point },
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}
