//! Catalog route.

use axum::extract::State;
use axum::response::Json;

use designer::catalog::Catalog;

use crate::state::AppState;

/// `GET /api/catalog` — the four option lists for the design editor.
pub async fn catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json((*state.catalog).clone())
}
