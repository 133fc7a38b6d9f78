use super::*;
use crate::services::design::StoreError;

// ===== Error Mapping =====

#[test]
fn design_errors_map_to_api_errors() {
    let id = Uuid::new_v4();

    assert!(matches!(
        design_error_to_api(DesignError::Validation("bad".to_owned())),
        ApiError::Validation(_)
    ));
    assert!(matches!(
        design_error_to_api(DesignError::NotFound(id)),
        ApiError::NotFound(msg) if msg.contains(&id.to_string())
    ));
    assert!(matches!(
        design_error_to_api(DesignError::Forbidden),
        ApiError::Forbidden
    ));
    assert!(matches!(
        design_error_to_api(DesignError::Store(StoreError("down".to_owned()))),
        ApiError::Transport(_)
    ));
}

#[test]
fn version_conflict_names_both_versions() {
    let api = design_error_to_api(DesignError::VersionConflict { current: 3, submitted: 1 });
    match api {
        ApiError::Conflict(msg) => {
            assert!(msg.contains("version 3"));
            assert!(msg.contains("version 1"));
        }
        other => panic!("expected conflict, got {other:?}"),
    }
}

// ===== Submit Body Wire Format =====

#[test]
fn submit_body_deserializes_editor_payload() {
    let body: SubmitDesignBody = serde_json::from_value(serde_json::json!({
        "name": "Tour Shirt",
        "description": "Front print",
        "product": "tshirt",
        "fabric": "cotton",
        "style": "minimal",
        "patch": "embroidered",
        "elements": [
            {
                "id": "text-1",
                "type": "text",
                "content": "Double click to edit",
                "x": 300.0,
                "y": 300.0,
                "fontSize": 20.0,
                "fontFamily": "Arial",
                "color": "#000000"
            }
        ]
    }))
    .expect("payload deserializes");

    assert_eq!(body.submission.name, "Tour Shirt");
    assert_eq!(body.submission.elements.len(), 1);
    assert!(!body.submission.publish);
    assert_eq!(body.design_id, None);
    assert_eq!(body.version, None);
    assert_eq!(body.idempotency_key, None);
}

#[test]
fn submit_body_accepts_overwrite_fields() {
    let id = Uuid::new_v4();
    let body: SubmitDesignBody = serde_json::from_value(serde_json::json!({
        "name": "Tour Shirt",
        "description": "",
        "product": "tshirt",
        "fabric": "cotton",
        "style": "minimal",
        "patch": "embroidered",
        "elements": [],
        "publish": true,
        "designId": id.to_string(),
        "version": 4,
        "idempotencyKey": "retry-9"
    }))
    .expect("payload deserializes");

    assert!(body.submission.publish);
    assert_eq!(body.design_id, Some(id));
    assert_eq!(body.version, Some(4));
    assert_eq!(body.idempotency_key.as_deref(), Some("retry-9"));
}
