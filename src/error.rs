//! API error taxonomy and response mapping.
//!
//! ERROR HANDLING
//! ==============
//! Page-route authorization failures never surface here; the guard turns
//! those into redirects. `ApiError` is the JSON API's whole failure
//! surface: every handler error maps onto one of these variants, each with
//! a stable machine code and an HTTP status.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("you must be signed in to do this")]
    Unauthenticated,
    #[error("you don't have permission to do this")]
    Forbidden,
    #[error("invalid design: {0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0} not found")]
    NotFound(String),
    /// The persistence backend is unreachable or failing. The client may
    /// retry the same request.
    #[error("design service unavailable: {0}")]
    Transport(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Stable machine-readable code, independent of the message text.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "E_UNAUTHENTICATED",
            Self::Forbidden => "E_FORBIDDEN",
            Self::Validation(_) => "E_VALIDATION",
            Self::Conflict(_) => "E_CONFLICT",
            Self::NotFound(_) => "E_NOT_FOUND",
            Self::Transport(_) => "E_TRANSPORT",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
