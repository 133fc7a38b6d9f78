use super::*;
use crate::state::test_helpers::{seed_expired_session, seed_user, test_app_state};

#[test]
fn bytes_to_hex_formats_lowercase_pairs() {
    assert_eq!(bytes_to_hex(&[0x00, 0xff, 0x1a]), "00ff1a");
}

#[test]
fn generated_tokens_are_64_hex_chars_and_unique() {
    let a = generate_token();
    let b = generate_token();

    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

#[tokio::test]
async fn create_then_validate_roundtrips() {
    let state = test_app_state();
    let user = seed_user(&state, "maker@example.com", "sewing-kit-1", crate::state::Role::Member).await;

    let token = create_session(&state, user.id).await;
    let session_user = validate_session(&state, &token).await.unwrap();

    assert_eq!(session_user.id, user.id);
    assert_eq!(session_user.email, "maker@example.com");
    assert!(!session_user.is_admin());
}

#[tokio::test]
async fn unknown_token_is_rejected() {
    let state = test_app_state();

    assert!(validate_session(&state, "deadbeef").await.is_none());
}

#[tokio::test]
async fn expired_session_is_rejected() {
    let state = test_app_state();
    let user = seed_user(&state, "maker@example.com", "sewing-kit-1", crate::state::Role::Member).await;
    let token = seed_expired_session(&state, user.id).await;

    assert!(validate_session(&state, &token).await.is_none());
}

#[tokio::test]
async fn session_for_a_deleted_user_is_rejected() {
    let state = test_app_state();
    let user = seed_user(&state, "maker@example.com", "sewing-kit-1", crate::state::Role::Member).await;
    let token = create_session(&state, user.id).await;

    state.users.write().await.remove(&user.id);
    assert!(validate_session(&state, &token).await.is_none());
}

#[tokio::test]
async fn delete_session_invalidates_the_token() {
    let state = test_app_state();
    let user = seed_user(&state, "maker@example.com", "sewing-kit-1", crate::state::Role::Member).await;
    let token = create_session(&state, user.id).await;

    delete_session(&state, &token).await;
    assert!(validate_session(&state, &token).await.is_none());
}

#[tokio::test]
async fn purge_drops_only_expired_sessions() {
    let state = test_app_state();
    let user = seed_user(&state, "maker@example.com", "sewing-kit-1", crate::state::Role::Member).await;
    let live = create_session(&state, user.id).await;
    let stale = seed_expired_session(&state, user.id).await;

    purge_expired(&state).await;

    let sessions = state.sessions.read().await;
    assert!(sessions.contains_key(&live));
    assert!(!sessions.contains_key(&stale));
}

#[test]
fn session_user_serializes_without_credentials() {
    let user = SessionUser {
        id: Uuid::nil(),
        email: "maker@example.com".to_owned(),
        name: "maker".to_owned(),
        role: crate::state::Role::Admin,
    };

    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["role"], "ADMIN");
    assert!(value.get("passwordHash").is_none());
    assert!(value.get("password_hash").is_none());
}
