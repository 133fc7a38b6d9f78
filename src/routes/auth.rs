//! Auth routes — login/register forms, session cookie, `me`, logout.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::error::ApiError;
use crate::routes::guard::DASHBOARD_PATH;
use crate::routes::pages;
use crate::services::auth::{self as auth_svc, AuthError};
use crate::services::session;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

fn session_cookie(token: String, max_age: Duration) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(max_age)
        .build()
}

/// Only local paths are honored as post-login destinations.
fn sanitize_from(from: Option<&str>) -> &str {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => DASHBOARD_PATH,
    }
}

// =============================================================================
// AUTH EXTRACTORS
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(ApiError::Unauthenticated);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state, token)
            .await
            .ok_or(ApiError::Unauthenticated)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

/// Authenticated admin. Use as a handler parameter to require the admin role.
pub struct AdminUser(pub session::SessionUser);

impl<S> axum::extract::FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        if !auth.user.is_admin() {
            return Err(ApiError::Forbidden);
        }
        Ok(Self(auth.user))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub from: Option<String>,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub from: Option<String>,
}

fn auth_error_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::BadCredentials => StatusCode::UNAUTHORIZED,
        AuthError::EmailTaken => StatusCode::CONFLICT,
        AuthError::InvalidEmail | AuthError::WeakPassword => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// `POST /auth/login` — verify credentials, set cookie, redirect to `from`.
pub async fn login(
    State(state): State<AppState>,
    axum::extract::Form(form): axum::extract::Form<LoginForm>,
) -> Response {
    let user = match auth_svc::verify_credentials(&state, &form.email, &form.password).await {
        Ok(user) => user,
        Err(e) => {
            let status = auth_error_status(&e);
            let body = pages::login_page(form.from.as_deref(), Some(&e.to_string()));
            return (status, Html(body)).into_response();
        }
    };

    let token = session::create_session(&state, user.id).await;
    let jar = CookieJar::new().add(session_cookie(token, state.session_ttl));
    (jar, Redirect::to(sanitize_from(form.from.as_deref()))).into_response()
}

/// `POST /auth/register` — create account, set cookie, redirect to `from`.
pub async fn register(
    State(state): State<AppState>,
    axum::extract::Form(form): axum::extract::Form<RegisterForm>,
) -> Response {
    let user = match auth_svc::register_user(
        &state,
        &form.email,
        &form.password,
        form.name.as_deref(),
    )
    .await
    {
        Ok(user) => user,
        Err(e) => {
            let status = auth_error_status(&e);
            let body = pages::register_page(form.from.as_deref(), Some(&e.to_string()));
            return (status, Html(body)).into_response();
        }
    };

    let token = session::create_session(&state, user.id).await;
    let jar = CookieJar::new().add(session_cookie(token, state.session_ttl));
    (jar, Redirect::to(sanitize_from(form.from.as_deref()))).into_response()
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie, back to home.
///
/// Tolerant of missing or stale cookies so a sign-out click always lands
/// on the home page.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(cookie) = jar.get(COOKIE_NAME) {
        session::delete_session(&state, cookie.value()).await;
    }

    let jar = CookieJar::new().add(session_cookie(String::new(), Duration::ZERO));
    (jar, Redirect::to("/"))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
