//! Credentials auth: seeded demo accounts, registration, verification.
//!
//! Passwords are stored as SHA-256 hex digests in the in-memory user table.
//! Two demo accounts exist from boot so the storefront is explorable
//! without a registration step: one administrator, one maker.

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::state::{AppState, Role, User};

pub const MIN_PASSWORD_LEN: usize = 8;

pub const DEMO_ADMIN_EMAIL: &str = "admin@designpiece.dev";
pub const DEMO_MAKER_EMAIL: &str = "maker@designpiece.dev";
const DEMO_ADMIN_PASSWORD: &str = "stitch-in-time";
const DEMO_MAKER_PASSWORD: &str = "measure-twice";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("incorrect email or password")]
    BadCredentials,
    #[error("an account with this email already exists")]
    EmailTaken,
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    WeakPassword,
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    let bytes = hasher.finalize();
    bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
}

fn name_from_email(email: &str) -> String {
    let local = email
        .split('@')
        .next()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("maker");
    local.to_owned()
}

/// The accounts present at boot.
#[must_use]
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: Uuid::new_v4(),
            email: DEMO_ADMIN_EMAIL.to_owned(),
            name: "Studio Admin".to_owned(),
            password_hash: hash_password(DEMO_ADMIN_PASSWORD),
            role: Role::Admin,
        },
        User {
            id: Uuid::new_v4(),
            email: DEMO_MAKER_EMAIL.to_owned(),
            name: "Demo Maker".to_owned(),
            password_hash: hash_password(DEMO_MAKER_PASSWORD),
            role: Role::Member,
        },
    ]
}

/// Check an email/password pair against the user table.
///
/// # Errors
///
/// `InvalidEmail` for malformed emails, `BadCredentials` when no account
/// matches. Unknown email and wrong password are indistinguishable on
/// purpose.
pub async fn verify_credentials(
    state: &AppState,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    let normalized = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    let hash = hash_password(password);

    let users = state.users.read().await;
    users
        .values()
        .find(|u| u.email == normalized && u.password_hash == hash)
        .cloned()
        .ok_or(AuthError::BadCredentials)
}

/// Register a new maker account.
///
/// # Errors
///
/// `InvalidEmail`, `WeakPassword`, or `EmailTaken`.
pub async fn register_user(
    state: &AppState,
    email: &str,
    password: &str,
    name: Option<&str>,
) -> Result<User, AuthError> {
    let normalized = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword);
    }

    let mut users = state.users.write().await;
    if users.values().any(|u| u.email == normalized) {
        return Err(AuthError::EmailTaken);
    }

    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map_or_else(|| name_from_email(&normalized), ToOwned::to_owned);
    let user = User {
        id: Uuid::new_v4(),
        email: normalized,
        name,
        password_hash: hash_password(password),
        role: Role::Member,
    };
    users.insert(user.id, user.clone());
    Ok(user)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
