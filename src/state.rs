//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the launch catalog, the admin pricing tables, and the in-memory
//! user and session maps. Designs go through the `DesignStore` seam so the
//! in-memory store can be swapped for a real backend without touching
//! handlers.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tokio::sync::RwLock;
use uuid::Uuid;

use designer::catalog::Catalog;

use crate::services::design::DesignStore;

// =============================================================================
// USERS AND SESSIONS
// =============================================================================

/// Access role. Administrators see the pricing console; everyone else is a
/// regular maker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Member,
}

/// A registered account. The password digest never leaves this struct.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
}

/// An active login session.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Uuid,
    pub expires_at: OffsetDateTime,
}

// =============================================================================
// PRICING TABLES
// =============================================================================

/// Per-product pricing row on the admin console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPricing {
    pub id: String,
    pub name: String,
    pub base_price: f64,
    /// Fractional discount applied to bulk orders, e.g. `0.10`.
    pub bulk_discount: f64,
}

/// Per-patch pricing row on the admin console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchPricing {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Per-fabric pricing row on the admin console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricPricing {
    pub id: String,
    pub name: String,
    /// Surcharge per unit over the product base price.
    pub price: f64,
    pub description: String,
}

/// The three admin-editable tables, seeded with the launch data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTables {
    pub products: Vec<ProductPricing>,
    pub patches: Vec<PatchPricing>,
    pub fabrics: Vec<FabricPricing>,
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Launch catalog served to design sessions. Read-only.
    pub catalog: Arc<Catalog>,
    pub pricing: Arc<RwLock<PricingTables>>,
    pub users: Arc<RwLock<HashMap<Uuid, User>>>,
    /// Sessions keyed by token.
    pub sessions: Arc<RwLock<HashMap<String, Session>>>,
    pub designs: Arc<dyn DesignStore>,
    pub session_ttl: Duration,
}

impl AppState {
    #[must_use]
    pub fn new(
        catalog: Catalog,
        pricing: PricingTables,
        users: Vec<User>,
        designs: Arc<dyn DesignStore>,
        session_ttl: Duration,
    ) -> Self {
        let users = users.into_iter().map(|u| (u.id, u)).collect();
        Self {
            catalog: Arc::new(catalog),
            pricing: Arc::new(RwLock::new(pricing)),
            users: Arc::new(RwLock::new(users)),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            designs,
            session_ttl,
        }
    }

    /// Look up a user by normalized email.
    pub async fn user_by_email(&self, email: &str) -> Option<User> {
        let users = self.users.read().await;
        users.values().find(|u| u.email == email).cloned()
    }

    /// Look up a user by id.
    pub async fn user_by_id(&self, id: Uuid) -> Option<User> {
        let users = self.users.read().await;
        users.get(&id).cloned()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
