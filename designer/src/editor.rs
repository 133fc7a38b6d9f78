//! The session engine.
//!
//! [`Editor`] owns everything a design session mutates: the element list,
//! the active catalog choices, selection, tabs, the drag machine, and the
//! save lifecycle. State changes only inside event methods, and each event
//! method returns the [`Action`]s the host must carry out. The engine is
//! single-threaded by construction; drive it from one event loop.

#[cfg(test)]
#[path = "editor_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Choices};
use crate::doc::{Element, ElementId, ElementList, Point};
use crate::hit;
use crate::input::{DragState, Tab, UiState};
use crate::text::TextMeasurer;

/// What the host must do after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// An element was appended and auto-selected.
    ElementAdded { id: ElementId },
    /// The selected element moved by a delta.
    ElementMoved { id: ElementId, dx: f64, dy: f64 },
    /// Selection changed; `None` means cleared.
    SelectionChanged(Option<ElementId>),
    /// The visible frame is stale; rebuild it.
    RenderNeeded,
    /// A save or publish request is ready for the persistence collaborator.
    SubmitRequested(DesignSubmission),
}

/// Lifecycle of the in-flight save call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    /// Handed to the host, completion pending. Further submits are ignored
    /// until the host reports back.
    Pending { publish: bool },
    Succeeded { published: bool },
    /// The message is what the user sees; the session stays editable and
    /// re-submittable.
    Failed { message: String },
}

/// The record a save or publish emits.
///
/// Catalog choices travel as ids; elements travel in paint order with their
/// full wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSubmission {
    pub name: String,
    pub description: String,
    pub product: String,
    pub fabric: String,
    pub style: String,
    pub patch: String,
    pub elements: Vec<Element>,
    #[serde(default)]
    pub publish: bool,
}

/// One design session.
#[derive(Debug, Clone)]
pub struct Editor {
    elements: ElementList,
    catalog: Catalog,
    choices: Choices,
    ui: UiState,
    drag: DragState,
    name: String,
    description: String,
    submit: SubmitState,
}

impl Editor {
    /// Open a session against `catalog`. The first entry of each option
    /// list starts active. `None` when any list is empty.
    #[must_use]
    pub fn new(catalog: Catalog) -> Option<Self> {
        let choices = Choices::first_of(&catalog)?;
        Some(Self {
            elements: ElementList::new(),
            catalog,
            choices,
            ui: UiState::default(),
            drag: DragState::default(),
            name: String::new(),
            description: String::new(),
            submit: SubmitState::default(),
        })
    }

    // ===== reads =====

    #[must_use]
    pub fn elements(&self) -> &ElementList {
        &self.elements
    }

    #[must_use]
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn choices(&self) -> &Choices {
        &self.choices
    }

    #[must_use]
    pub fn selection(&self) -> Option<&ElementId> {
        self.ui.selected.as_ref()
    }

    #[must_use]
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    #[must_use]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn submit_state(&self) -> &SubmitState {
        &self.submit
    }

    // ===== element tools =====

    /// Append a text element at the spawn point and select it.
    pub fn add_text(&mut self) -> Vec<Action> {
        let id = self.elements.add_text();
        self.after_add(id)
    }

    /// Append an image placeholder at the spawn point and select it.
    pub fn add_image(&mut self) -> Vec<Action> {
        let id = self.elements.add_image();
        self.after_add(id)
    }

    fn after_add(&mut self, id: ElementId) -> Vec<Action> {
        self.ui.selected = Some(id.clone());
        vec![
            Action::ElementAdded { id: id.clone() },
            Action::SelectionChanged(Some(id)),
            Action::RenderNeeded,
        ]
    }

    // ===== pointer events =====

    /// A click on the canvas. Hit-tests and moves selection to the result;
    /// a miss clears it. This is the only pointer event that selects.
    pub fn on_click(&mut self, pt: Point, measurer: &dyn TextMeasurer) -> Vec<Action> {
        let target = hit::hit_test(pt, &self.elements, measurer).map(|el| el.id.clone());
        if target == self.ui.selected {
            return Vec::new();
        }
        self.ui.selected = target.clone();
        vec![Action::SelectionChanged(target)]
    }

    /// Pointer pressed. Arms a drag when something is selected; never
    /// changes selection.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        if self.ui.selected.is_some() {
            self.drag = DragState::Dragging { last: pt };
        }
        Vec::new()
    }

    /// Pointer moved. Mid-drag, translates the selected element by the
    /// delta from the previous event and re-anchors on the new position.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let DragState::Dragging { last } = self.drag else {
            return Vec::new();
        };
        let Some(id) = self.ui.selected.clone() else {
            return Vec::new();
        };
        let dx = pt.x - last.x;
        let dy = pt.y - last.y;
        let moved = self.elements.translate(&id, dx, dy);
        self.drag = DragState::Dragging { last: pt };
        if moved {
            vec![Action::ElementMoved { id, dx, dy }, Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Pointer released. Ends any drag; position is wherever the last move
    /// left it.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.drag = DragState::Idle;
        Vec::new()
    }

    /// Pointer left the canvas. Same as release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.drag = DragState::Idle;
        Vec::new()
    }

    // ===== panel events =====

    /// Select an element from the canvas tab's list. Unknown ids no-op.
    pub fn select_element(&mut self, id: &str) -> Vec<Action> {
        if !self.elements.contains(id) || self.ui.selected.as_deref() == Some(id) {
            return Vec::new();
        }
        let id = id.to_owned();
        self.ui.selected = Some(id.clone());
        vec![Action::SelectionChanged(Some(id))]
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.ui.active_tab = tab;
    }

    /// Flip preview mode. Returns the new value. Canvas state is untouched.
    pub fn toggle_preview(&mut self) -> bool {
        self.ui.preview = !self.ui.preview;
        self.ui.preview
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    // ===== catalog choices =====

    /// Make a product active. Unknown ids and re-picks no-op.
    pub fn select_product(&mut self, id: &str) -> Vec<Action> {
        let Some(product) = self.catalog.product(id) else {
            return Vec::new();
        };
        if self.choices.product.id == product.id {
            return Vec::new();
        }
        self.choices.product = product.clone();
        vec![Action::RenderNeeded]
    }

    /// Make a fabric active. Unknown ids and re-picks no-op.
    pub fn select_fabric(&mut self, id: &str) -> Vec<Action> {
        let Some(fabric) = self.catalog.fabric(id) else {
            return Vec::new();
        };
        if self.choices.fabric.id == fabric.id {
            return Vec::new();
        }
        self.choices.fabric = fabric.clone();
        vec![Action::RenderNeeded]
    }

    /// Make a style active. Unknown ids and re-picks no-op.
    pub fn select_style(&mut self, id: &str) -> Vec<Action> {
        let Some(style) = self.catalog.style(id) else {
            return Vec::new();
        };
        if self.choices.style.id == style.id {
            return Vec::new();
        }
        self.choices.style = style.clone();
        vec![Action::RenderNeeded]
    }

    /// Make a patch active. Unknown ids and re-picks no-op.
    pub fn select_patch(&mut self, id: &str) -> Vec<Action> {
        let Some(patch) = self.catalog.patch(id) else {
            return Vec::new();
        };
        if self.choices.patch.id == patch.id {
            return Vec::new();
        }
        self.choices.patch = patch.clone();
        vec![Action::RenderNeeded]
    }

    // ===== save lifecycle =====

    /// Snapshot the session as a submission record.
    #[must_use]
    pub fn submission(&self, publish: bool) -> DesignSubmission {
        DesignSubmission {
            name: self.name.clone(),
            description: self.description.clone(),
            product: self.choices.product.id.clone(),
            fabric: self.choices.fabric.id.clone(),
            style: self.choices.style.id.clone(),
            patch: self.choices.patch.id.clone(),
            elements: self.elements.as_slice().to_vec(),
            publish,
        }
    }

    /// Start a save (`publish` false) or publish (`publish` true).
    /// Ignored while a previous submit is still pending.
    pub fn begin_submit(&mut self, publish: bool) -> Vec<Action> {
        if matches!(self.submit, SubmitState::Pending { .. }) {
            return Vec::new();
        }
        self.submit = SubmitState::Pending { publish };
        vec![Action::SubmitRequested(self.submission(publish))]
    }

    /// Host reports how the pending submit ended. Ignored when nothing is
    /// pending.
    pub fn complete_submit(&mut self, result: Result<(), String>) {
        if let SubmitState::Pending { publish } = self.submit {
            self.submit = match result {
                Ok(()) => SubmitState::Succeeded { published: publish },
                Err(message) => SubmitState::Failed { message },
            };
        }
    }

    /// Replace the session contents with a previously saved design.
    /// Unknown choice ids keep the current choice.
    pub fn hydrate(&mut self, design: DesignSubmission) -> Vec<Action> {
        self.name = design.name;
        self.description = design.description;
        if let Some(product) = self.catalog.product(&design.product) {
            self.choices.product = product.clone();
        }
        if let Some(fabric) = self.catalog.fabric(&design.fabric) {
            self.choices.fabric = fabric.clone();
        }
        if let Some(style) = self.catalog.style(&design.style) {
            self.choices.style = style.clone();
        }
        if let Some(patch) = self.catalog.patch(&design.patch) {
            self.choices.patch = patch.clone();
        }
        self.elements.load(design.elements);
        self.ui.selected = None;
        self.drag = DragState::Idle;
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    }
}
