//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the whole platform: public pages at `/` and
//! `/design`, the guarded page groups (`/dashboard/*`, `/admin/*`,
//! `/auth/*`), and the JSON API under `/api`. Page-level authorization is
//! the guard middleware; API-level authorization is the `AuthUser` and
//! `AdminUser` extractors.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod designs;
pub mod guard;
pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, patch, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let guarded_pages = Router::new()
        .route("/dashboard", get(pages::dashboard))
        .route("/dashboard/products", get(pages::dashboard_products))
        .route("/dashboard/shop", get(pages::dashboard_shop))
        .route("/dashboard/settings", get(pages::dashboard_settings))
        .route("/admin", get(pages::admin))
        .route("/auth/login", get(pages::login_form).post(auth::login))
        .route("/auth/register", get(pages::register_form).post(auth::register))
        .route_layer(middleware::from_fn_with_state(state.clone(), guard::page_guard));

    let api = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/catalog", get(catalog::catalog))
        .route("/api/designs", get(designs::list_designs).post(designs::submit_design))
        .route("/api/designs/{id}", get(designs::get_design))
        .route("/api/admin/pricing", get(admin::list_product_pricing))
        .route("/api/admin/pricing/{id}", patch(admin::update_product_pricing))
        .route("/api/admin/patches", get(admin::list_patch_pricing))
        .route("/api/admin/patches/{id}", patch(admin::update_patch_pricing))
        .route("/api/admin/fabrics", get(admin::list_fabric_pricing))
        .route("/api/admin/fabrics/{id}", patch(admin::update_fabric_pricing))
        .layer(cors);

    Router::new()
        .route("/", get(pages::home))
        .route("/design", get(pages::design))
        .route("/healthz", get(healthz))
        .merge(guarded_pages)
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
