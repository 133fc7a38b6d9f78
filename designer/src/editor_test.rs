use super::*;
use crate::catalog::test_helpers::sample_catalog;
use crate::text::HeuristicMeasurer;

// ===== helpers =====

fn editor() -> Editor {
    Editor::new(sample_catalog()).unwrap()
}

fn editor_with_text() -> (Editor, ElementId) {
    let mut ed = editor();
    ed.add_text();
    let id = ed.selection().unwrap().clone();
    (ed, id)
}

const M: HeuristicMeasurer = HeuristicMeasurer;

// ===== construction =====

#[test]
fn new_session_starts_on_first_catalog_entries() {
    let ed = editor();

    assert_eq!(ed.choices().product.id, "tshirt");
    assert_eq!(ed.choices().fabric.id, "cotton");
    assert_eq!(ed.choices().style.id, "minimal");
    assert_eq!(ed.choices().patch.id, "embroidered");
    assert!(ed.elements().is_empty());
    assert_eq!(ed.selection(), None);
    assert_eq!(ed.submit_state(), &SubmitState::Idle);
}

#[test]
fn new_session_requires_a_complete_catalog() {
    let mut catalog = sample_catalog();
    catalog.design_styles.clear();

    assert!(Editor::new(catalog).is_none());
}

// ===== element tools =====

#[test]
fn add_text_appends_and_selects() {
    let mut ed = editor();
    let actions = ed.add_text();

    assert_eq!(
        actions,
        vec![
            Action::ElementAdded {
                id: "text-1".to_owned()
            },
            Action::SelectionChanged(Some("text-1".to_owned())),
            Action::RenderNeeded,
        ]
    );
    assert_eq!(ed.selection().map(String::as_str), Some("text-1"));
    assert_eq!(ed.elements().len(), 1);
}

#[test]
fn add_image_appends_and_selects() {
    let mut ed = editor();
    ed.add_text();
    let actions = ed.add_image();

    assert_eq!(
        actions,
        vec![
            Action::ElementAdded {
                id: "image-2".to_owned()
            },
            Action::SelectionChanged(Some("image-2".to_owned())),
            Action::RenderNeeded,
        ]
    );
    assert_eq!(ed.selection().map(String::as_str), Some("image-2"));
}

#[test]
fn elements_keep_append_order() {
    let mut ed = editor();
    ed.add_text();
    ed.add_image();
    ed.add_text();

    let ids: Vec<&str> = ed.elements().iter().map(|el| el.id.as_str()).collect();
    assert_eq!(ids, vec!["text-1", "image-2", "text-3"]);
}

// ===== click selection =====

#[test]
fn click_on_element_selects_it() {
    let mut ed = editor();
    ed.add_image();
    ed.on_click(Point::new(0.0, 0.0), &M);
    assert_eq!(ed.selection(), None);

    let actions = ed.on_click(Point::new(250.0, 250.0), &M);
    assert_eq!(
        actions,
        vec![Action::SelectionChanged(Some("image-1".to_owned()))]
    );
    assert_eq!(ed.selection().map(String::as_str), Some("image-1"));
}

#[test]
fn click_on_empty_canvas_clears_selection() {
    let (mut ed, _) = editor_with_text();

    let actions = ed.on_click(Point::new(10.0, 10.0), &M);
    assert_eq!(actions, vec![Action::SelectionChanged(None)]);
    assert_eq!(ed.selection(), None);
}

#[test]
fn click_that_does_not_change_selection_is_silent() {
    let (mut ed, _) = editor_with_text();

    // Spawn text sits at (300, 300); clicking it again changes nothing.
    let actions = ed.on_click(Point::new(310.0, 300.0), &M);
    assert_eq!(actions, vec![]);

    ed.on_click(Point::new(10.0, 10.0), &M);
    let actions = ed.on_click(Point::new(10.0, 10.0), &M);
    assert_eq!(actions, vec![]);
}

#[test]
fn select_element_from_panel() {
    let mut ed = editor();
    ed.add_text();
    ed.add_image();
    ed.on_click(Point::new(10.0, 10.0), &M);

    let actions = ed.select_element("text-1");
    assert_eq!(
        actions,
        vec![Action::SelectionChanged(Some("text-1".to_owned()))]
    );
}

#[test]
fn select_element_with_unknown_id_is_noop() {
    let (mut ed, id) = editor_with_text();

    assert_eq!(ed.select_element("text-99"), vec![]);
    assert_eq!(ed.selection(), Some(&id));
}

// ===== drag machine =====

#[test]
fn pointer_down_without_selection_stays_idle() {
    let mut ed = editor();
    ed.add_text();
    ed.on_click(Point::new(10.0, 10.0), &M);

    ed.on_pointer_down(Point::new(300.0, 300.0));
    assert_eq!(ed.drag(), DragState::Idle);

    let actions = ed.on_pointer_move(Point::new(320.0, 320.0));
    assert_eq!(actions, vec![]);
}

#[test]
fn pointer_down_with_selection_arms_a_drag() {
    let (mut ed, _) = editor_with_text();

    ed.on_pointer_down(Point::new(310.0, 300.0));
    assert_eq!(
        ed.drag(),
        DragState::Dragging {
            last: Point::new(310.0, 300.0)
        }
    );
}

#[test]
fn pointer_down_never_changes_selection() {
    let mut ed = editor();
    ed.add_text();
    ed.add_image();
    // image-2 is selected; press on top of text-1.
    let actions = ed.on_pointer_down(Point::new(300.0, 300.0));

    assert_eq!(actions, vec![]);
    assert_eq!(ed.selection().map(String::as_str), Some("image-2"));
}

#[test]
fn drag_translates_by_the_delta_between_events() {
    let (mut ed, id) = editor_with_text();

    ed.on_pointer_down(Point::new(310.0, 300.0));
    let actions = ed.on_pointer_move(Point::new(320.0, 305.0));

    assert_eq!(
        actions,
        vec![
            Action::ElementMoved {
                id: id.clone(),
                dx: 10.0,
                dy: 5.0
            },
            Action::RenderNeeded,
        ]
    );
    let el = ed.element(&id).unwrap();
    assert_eq!((el.x, el.y), (310.0, 305.0));
}

#[test]
fn drag_accumulates_across_moves() {
    let (mut ed, id) = editor_with_text();

    ed.on_pointer_down(Point::new(310.0, 300.0));
    ed.on_pointer_move(Point::new(320.0, 305.0));
    ed.on_pointer_move(Point::new(340.0, 325.0));
    ed.on_pointer_up();

    // Net pointer travel is (30, 25) from the press point.
    let el = ed.element(&id).unwrap();
    assert_eq!((el.x, el.y), (330.0, 325.0));
}

#[test]
fn pointer_up_ends_the_drag() {
    let (mut ed, id) = editor_with_text();

    ed.on_pointer_down(Point::new(310.0, 300.0));
    ed.on_pointer_up();
    let actions = ed.on_pointer_move(Point::new(400.0, 400.0));

    assert_eq!(actions, vec![]);
    let el = ed.element(&id).unwrap();
    assert_eq!((el.x, el.y), (300.0, 300.0));
}

#[test]
fn pointer_leave_ends_the_drag() {
    let (mut ed, id) = editor_with_text();

    ed.on_pointer_down(Point::new(310.0, 300.0));
    ed.on_pointer_move(Point::new(315.0, 300.0));
    ed.on_pointer_leave();
    ed.on_pointer_move(Point::new(500.0, 500.0));

    let el = ed.element(&id).unwrap();
    assert_eq!((el.x, el.y), (305.0, 300.0));
}

#[test]
fn move_without_a_drag_is_noop() {
    let (mut ed, id) = editor_with_text();

    let actions = ed.on_pointer_move(Point::new(450.0, 450.0));

    assert_eq!(actions, vec![]);
    let el = ed.element(&id).unwrap();
    assert_eq!((el.x, el.y), (300.0, 300.0));
}

// ===== panel state =====

#[test]
fn set_tab_switches_the_active_tab() {
    let mut ed = editor();
    ed.set_tab(Tab::Fabric);

    assert_eq!(ed.ui().active_tab, Tab::Fabric);
}

#[test]
fn preview_toggles_and_leaves_the_canvas_alone() {
    let (mut ed, id) = editor_with_text();

    assert!(ed.toggle_preview());
    assert!(!ed.toggle_preview());
    assert_eq!(ed.selection(), Some(&id));
    assert_eq!(ed.elements().len(), 1);
}

// ===== catalog choices =====

#[test]
fn select_product_replaces_the_active_product() {
    let mut ed = editor();

    let actions = ed.select_product("polo");
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(ed.choices().product.name, "Polo Shirt");
}

#[test]
fn select_product_with_unknown_id_is_noop() {
    let mut ed = editor();

    assert_eq!(ed.select_product("socks"), vec![]);
    assert_eq!(ed.choices().product.id, "tshirt");
}

#[test]
fn reselecting_the_active_product_is_silent() {
    let mut ed = editor();

    assert_eq!(ed.select_product("tshirt"), vec![]);
}

#[test]
fn fabric_style_and_patch_choices_replace_too() {
    let mut ed = editor();

    assert_eq!(ed.select_fabric("polyester"), vec![Action::RenderNeeded]);
    assert_eq!(ed.select_style("vintage"), vec![Action::RenderNeeded]);
    assert_eq!(ed.select_patch("printed"), vec![Action::RenderNeeded]);
    assert_eq!(ed.choices().fabric.id, "polyester");
    assert_eq!(ed.choices().style.id, "vintage");
    assert_eq!(ed.choices().patch.id, "printed");
}

// ===== save lifecycle =====

#[test]
fn submission_snapshots_the_session() {
    let mut ed = editor();
    ed.set_name("Summer Drop");
    ed.set_description("First run");
    ed.select_product("polo");
    ed.add_text();

    let sub = ed.submission(false);
    assert_eq!(sub.name, "Summer Drop");
    assert_eq!(sub.description, "First run");
    assert_eq!(sub.product, "polo");
    assert_eq!(sub.fabric, "cotton");
    assert_eq!(sub.style, "minimal");
    assert_eq!(sub.patch, "embroidered");
    assert_eq!(sub.elements.len(), 1);
    assert!(!sub.publish);
}

#[test]
fn submission_serializes_camel_case() {
    let mut ed = editor();
    ed.set_name("x");
    ed.add_text();

    let value = serde_json::to_value(ed.submission(true)).unwrap();
    let obj = value.as_object().unwrap();
    assert!(obj.contains_key("name"));
    assert!(obj.contains_key("description"));
    assert!(obj.contains_key("product"));
    assert!(obj.contains_key("fabric"));
    assert!(obj.contains_key("style"));
    assert!(obj.contains_key("patch"));
    assert!(obj.contains_key("elements"));
    assert_eq!(value["publish"], serde_json::Value::Bool(true));
}

#[test]
fn begin_submit_goes_pending_and_emits_the_payload() {
    let mut ed = editor();
    ed.set_name("Drop");

    let actions = ed.begin_submit(true);
    assert_eq!(actions.len(), 1);
    match &actions[0] {
        Action::SubmitRequested(sub) => {
            assert_eq!(sub.name, "Drop");
            assert!(sub.publish);
        }
        other => panic!("unexpected action {other:?}"),
    }
    assert_eq!(ed.submit_state(), &SubmitState::Pending { publish: true });
}

#[test]
fn begin_submit_while_pending_is_ignored() {
    let mut ed = editor();
    ed.begin_submit(false);

    assert_eq!(ed.begin_submit(true), vec![]);
    assert_eq!(ed.submit_state(), &SubmitState::Pending { publish: false });
}

#[test]
fn complete_submit_records_success() {
    let mut ed = editor();
    ed.begin_submit(true);
    ed.complete_submit(Ok(()));

    assert_eq!(ed.submit_state(), &SubmitState::Succeeded { published: true });
}

#[test]
fn complete_submit_records_failure_and_allows_retry() {
    let mut ed = editor();
    ed.begin_submit(false);
    ed.complete_submit(Err("store unreachable".to_owned()));

    assert_eq!(
        ed.submit_state(),
        &SubmitState::Failed {
            message: "store unreachable".to_owned()
        }
    );

    let actions = ed.begin_submit(false);
    assert_eq!(actions.len(), 1);
    assert_eq!(ed.submit_state(), &SubmitState::Pending { publish: false });
}

#[test]
fn complete_submit_without_pending_is_ignored() {
    let mut ed = editor();
    ed.complete_submit(Ok(()));

    assert_eq!(ed.submit_state(), &SubmitState::Idle);
}

#[test]
fn failure_keeps_the_session_editable() {
    let mut ed = editor();
    ed.add_text();
    ed.begin_submit(false);
    ed.complete_submit(Err("boom".to_owned()));

    let actions = ed.add_image();
    assert_eq!(actions.len(), 3);
    assert_eq!(ed.elements().len(), 2);
}

// ===== hydrate =====

#[test]
fn hydrate_restores_a_saved_design() {
    let mut source = editor();
    source.set_name("Saved");
    source.set_description("From the shelf");
    source.select_product("polo");
    source.add_text();
    source.add_image();
    let saved = source.submission(false);

    let mut ed = editor();
    let actions = ed.hydrate(saved);

    assert_eq!(
        actions,
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    );
    assert_eq!(ed.name(), "Saved");
    assert_eq!(ed.choices().product.id, "polo");
    assert_eq!(ed.elements().len(), 2);
    assert_eq!(ed.selection(), None);
}

#[test]
fn hydrate_keeps_choices_with_unknown_ids() {
    let mut ed = editor();
    let mut saved = ed.submission(false);
    saved.product = "hoodie".to_owned();

    ed.hydrate(saved);
    assert_eq!(ed.choices().product.id, "tshirt");
}

#[test]
fn adding_after_hydrate_never_reuses_ids() {
    let mut source = editor();
    source.add_text();
    source.add_text();
    let saved = source.submission(false);

    let mut ed = editor();
    ed.hydrate(saved);
    let actions = ed.add_text();

    assert_eq!(
        actions[0],
        Action::ElementAdded {
            id: "text-3".to_owned()
        }
    );
}
