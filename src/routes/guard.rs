//! Route guard for the server-rendered page groups.
//!
//! DESIGN
//! ======
//! Applied to `/dashboard/*`, `/admin/*`, and `/auth/*` only; `/` and
//! `/design` stay public. The policy itself is the pure [`evaluate`] so it
//! can be tested without a router. Unauthenticated page access is a
//! redirect, never a 401: visitors are bounced to the login form with the
//! original destination in the `from` parameter, and non-admins asking for
//! the admin console land back on their dashboard.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::routes::auth::COOKIE_NAME;
use crate::services::session::{self, SessionUser};
use crate::state::AppState;

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LOGIN_PATH: &str = "/auth/login";

/// Outcome of the page guard policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the request through.
    Allow,
    /// See-other redirect to the dashboard. Covers signed-in visitors on
    /// auth pages and non-admins on admin pages.
    Dashboard,
    /// Temporary redirect to the login form, carrying the original
    /// destination so login can return there.
    Login(String),
}

fn is_auth_page(path: &str) -> bool {
    path == "/auth" || path.starts_with("/auth/")
}

fn is_admin_page(path: &str) -> bool {
    path == "/admin" || path.starts_with("/admin/")
}

/// Build the login URL carrying the original path and query.
fn login_redirect(path: &str, query: Option<&str>) -> String {
    let mut target = path.to_owned();
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    let encoded = url::form_urlencoded::byte_serialize(target.as_bytes()).collect::<String>();
    format!("{LOGIN_PATH}?from={encoded}")
}

/// The guard policy for one request on a guarded path.
#[must_use]
pub fn evaluate(path: &str, query: Option<&str>, user: Option<&SessionUser>) -> GuardDecision {
    if is_auth_page(path) {
        return match user {
            Some(_) => GuardDecision::Dashboard,
            None => GuardDecision::Allow,
        };
    }
    match user {
        None => GuardDecision::Login(login_redirect(path, query)),
        Some(user) if is_admin_page(path) && !user.is_admin() => GuardDecision::Dashboard,
        Some(_) => GuardDecision::Allow,
    }
}

/// Middleware wrapper around [`evaluate`]. Resolves the session cookie and
/// applies the decision.
pub async fn page_guard(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    let user = if token.is_empty() {
        None
    } else {
        session::validate_session(&state, token).await
    };

    let decision = evaluate(request.uri().path(), request.uri().query(), user.as_ref());
    match decision {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Dashboard => Redirect::to(DASHBOARD_PATH).into_response(),
        GuardDecision::Login(login_url) => Redirect::temporary(&login_url).into_response(),
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
