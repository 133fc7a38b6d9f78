//! Session management.
//!
//! ARCHITECTURE
//! ============
//! Sessions are opaque random tokens mapped to a user id and an expiry in
//! the in-memory session table. The token travels only in an HttpOnly
//! cookie. Validation is a read; expired entries are swept whenever a new
//! session is created.

use std::fmt::Write;

use rand::Rng;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::state::{AppState, Role, Session};

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// User view returned from session validation. Safe for the wire; carries
/// no credential material.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl SessionUser {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Create a session for the given user, returning the token.
pub async fn create_session(state: &AppState, user_id: Uuid) -> String {
    purge_expired(state).await;

    let token = generate_token();
    let session = Session {
        user_id,
        expires_at: OffsetDateTime::now_utc() + state.session_ttl,
    };
    state.sessions.write().await.insert(token.clone(), session);
    token
}

/// Validate a session token and return the associated user. `None` for
/// unknown tokens, expired sessions, and sessions whose user is gone.
pub async fn validate_session(state: &AppState, token: &str) -> Option<SessionUser> {
    let user_id = {
        let sessions = state.sessions.read().await;
        let session = sessions.get(token)?;
        if session.expires_at <= OffsetDateTime::now_utc() {
            return None;
        }
        session.user_id
    };

    let users = state.users.read().await;
    users.get(&user_id).map(|u| SessionUser {
        id: u.id,
        email: u.email.clone(),
        name: u.name.clone(),
        role: u.role,
    })
}

/// Delete a session by token.
pub async fn delete_session(state: &AppState, token: &str) {
    state.sessions.write().await.remove(token);
}

/// Drop every expired session.
pub async fn purge_expired(state: &AppState) {
    let now = OffsetDateTime::now_utc();
    state.sessions.write().await.retain(|_, s| s.expires_at > now);
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
