//! Design routes — submit, list, fetch.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use designer::editor::DesignSubmission;

use crate::error::ApiError;
use crate::routes::auth::AuthUser;
use crate::services::design::{self, DesignError, DesignRecord};
use crate::state::AppState;

/// Body of `POST /api/designs`: the editor's submission plus the optional
/// overwrite target, version, and retry key.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitDesignBody {
    #[serde(flatten)]
    pub submission: DesignSubmission,
    pub design_id: Option<Uuid>,
    pub version: Option<i64>,
    pub idempotency_key: Option<String>,
}

pub(crate) fn design_error_to_api(err: DesignError) -> ApiError {
    match err {
        DesignError::Validation(msg) => ApiError::Validation(msg),
        DesignError::NotFound(id) => ApiError::NotFound(format!("design {id}")),
        DesignError::Forbidden => ApiError::Forbidden,
        DesignError::VersionConflict { current, submitted } => ApiError::Conflict(format!(
            "design is at version {current}, submitted version {submitted}"
        )),
        DesignError::Store(e) => ApiError::Transport(e.to_string()),
    }
}

/// `POST /api/designs` — save or publish a design. 201 on create, 200 on
/// overwrite or idempotent replay.
pub async fn submit_design(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<SubmitDesignBody>,
) -> Result<(StatusCode, Json<DesignRecord>), ApiError> {
    let outcome = design::save_design(
        &state,
        auth.user.id,
        body.submission,
        body.design_id,
        body.version,
        body.idempotency_key,
    )
    .await
    .map_err(design_error_to_api)?;

    let status = if outcome.created { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(outcome.record)))
}

/// `GET /api/designs` — list the caller's designs, most recent first.
pub async fn list_designs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<DesignRecord>>, ApiError> {
    let records = design::list_designs(&state, auth.user.id)
        .await
        .map_err(design_error_to_api)?;
    Ok(Json(records))
}

/// `GET /api/designs/{id}` — fetch one design, owner only.
pub async fn get_design(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DesignRecord>, ApiError> {
    let record = design::get_design(&state, auth.user.id, id)
        .await
        .map_err(design_error_to_api)?;
    Ok(Json(record))
}

#[cfg(test)]
#[path = "designs_test.rs"]
mod tests;
