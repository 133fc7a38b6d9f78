use super::*;
use crate::state::Role;
use uuid::Uuid;

fn user(role: Role) -> SessionUser {
    SessionUser {
        id: Uuid::new_v4(),
        email: "user@designpiece.dev".to_owned(),
        name: "User".to_owned(),
        role,
    }
}

// ===== Auth Pages =====

#[test]
fn anonymous_passes_through_auth_pages() {
    assert_eq!(evaluate("/auth/login", None, None), GuardDecision::Allow);
    assert_eq!(evaluate("/auth/register", None, None), GuardDecision::Allow);
}

#[test]
fn signed_in_visitor_is_bounced_off_auth_pages() {
    let member = user(Role::Member);
    let admin = user(Role::Admin);

    assert_eq!(
        evaluate("/auth/login", None, Some(&member)),
        GuardDecision::Dashboard
    );
    assert_eq!(
        evaluate("/auth/register", None, Some(&admin)),
        GuardDecision::Dashboard
    );
}

// ===== Dashboard Pages =====

#[test]
fn anonymous_is_sent_to_login_with_destination() {
    let decision = evaluate("/dashboard", None, None);
    assert_eq!(
        decision,
        GuardDecision::Login("/auth/login?from=%2Fdashboard".to_owned())
    );
}

#[test]
fn login_redirect_preserves_nested_path() {
    let decision = evaluate("/dashboard/settings", None, None);
    assert_eq!(
        decision,
        GuardDecision::Login("/auth/login?from=%2Fdashboard%2Fsettings".to_owned())
    );
}

#[test]
fn login_redirect_preserves_query() {
    let decision = evaluate("/dashboard/shop", Some("tab=orders"), None);
    assert_eq!(
        decision,
        GuardDecision::Login("/auth/login?from=%2Fdashboard%2Fshop%3Ftab%3Dorders".to_owned())
    );
}

#[test]
fn empty_query_is_not_appended() {
    let decision = evaluate("/dashboard", Some(""), None);
    assert_eq!(
        decision,
        GuardDecision::Login("/auth/login?from=%2Fdashboard".to_owned())
    );
}

#[test]
fn members_and_admins_reach_the_dashboard() {
    let member = user(Role::Member);
    let admin = user(Role::Admin);

    assert_eq!(evaluate("/dashboard", None, Some(&member)), GuardDecision::Allow);
    assert_eq!(
        evaluate("/dashboard/products", None, Some(&member)),
        GuardDecision::Allow
    );
    assert_eq!(evaluate("/dashboard", None, Some(&admin)), GuardDecision::Allow);
}

// ===== Admin Pages =====

#[test]
fn anonymous_admin_request_goes_to_login() {
    let decision = evaluate("/admin", None, None);
    assert_eq!(
        decision,
        GuardDecision::Login("/auth/login?from=%2Fadmin".to_owned())
    );
}

#[test]
fn member_on_admin_page_lands_on_dashboard() {
    let member = user(Role::Member);
    assert_eq!(evaluate("/admin", None, Some(&member)), GuardDecision::Dashboard);
}

#[test]
fn admin_reaches_admin_page() {
    let admin = user(Role::Admin);
    assert_eq!(evaluate("/admin", None, Some(&admin)), GuardDecision::Allow);
}

// ===== Path Classification =====

#[test]
fn auth_prefix_requires_a_segment_boundary() {
    // A hypothetical "/authoring" page is not an auth page.
    let member = user(Role::Member);
    assert_eq!(evaluate("/authoring", None, Some(&member)), GuardDecision::Allow);
    assert!(matches!(evaluate("/authoring", None, None), GuardDecision::Login(_)));
}

#[test]
fn admin_prefix_requires_a_segment_boundary() {
    let member = user(Role::Member);
    assert_eq!(
        evaluate("/administrivia", None, Some(&member)),
        GuardDecision::Allow
    );
}
