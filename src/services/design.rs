//! Design service — validation, save/publish, and the storage seam.
//!
//! DESIGN
//! ======
//! Designs are saved through the [`DesignStore`] trait so the bundled
//! in-memory store can be swapped for a real backend without touching
//! handlers. Saves are idempotent per (owner, idempotency key) and
//! overwrites are guarded by a version check.
//!
//! ERROR HANDLING
//! ==============
//! Validation rejects a submission before it reaches the store. Store
//! failures are a distinct variant so routes can map them to 502 while the
//! client keeps its local state and retries with the same idempotency key.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use designer::catalog::Catalog;
use designer::doc::ElementKind;
use designer::editor::DesignSubmission;

use crate::state::AppState;

/// Upper bound on canvas elements per design.
pub const MAX_ELEMENTS: usize = 200;
/// Upper bound on text element content length, in characters.
pub const MAX_TEXT_LEN: usize = 500;

// =============================================================================
// TYPES
// =============================================================================

/// Failure inside a store backend.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct StoreError(pub String);

#[derive(Debug, thiserror::Error)]
pub enum DesignError {
    #[error("invalid design: {0}")]
    Validation(String),
    #[error("design not found: {0}")]
    NotFound(Uuid),
    #[error("design belongs to another account")]
    Forbidden,
    #[error("version conflict: design is at v{current}, submitted v{submitted}")]
    VersionConflict { current: i64, submitted: i64 },
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Lifecycle of a saved design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignStatus {
    Draft,
    Published,
}

/// A saved design as stored and served.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub product: String,
    pub fabric: String,
    pub style: String,
    pub patch: String,
    pub elements: Vec<designer::doc::Element>,
    pub status: DesignStatus,
    pub version: i64,
    /// Unix milliseconds.
    pub created_at: i64,
    /// Unix milliseconds.
    pub updated_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

/// Result of a save: the stored record plus whether it was newly created.
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub record: DesignRecord,
    pub created: bool,
}

// =============================================================================
// STORE SEAM
// =============================================================================

/// Storage backend for saved designs.
#[async_trait]
pub trait DesignStore: Send + Sync {
    /// Insert or replace a record by id.
    async fn insert(&self, record: DesignRecord) -> Result<(), StoreError>;

    /// Fetch a record by id.
    async fn get(&self, id: Uuid) -> Result<Option<DesignRecord>, StoreError>;

    /// List an owner's records, most recently updated first.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<DesignRecord>, StoreError>;

    /// Find an owner's record carrying the given idempotency key.
    async fn find_by_idempotency_key(
        &self,
        owner_id: Uuid,
        key: &str,
    ) -> Result<Option<DesignRecord>, StoreError>;
}

/// In-memory store. Never fails.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Uuid, DesignRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DesignStore for MemoryStore {
    async fn insert(&self, record: DesignRecord) -> Result<(), StoreError> {
        self.records.write().await.insert(record.id, record);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<DesignRecord>, StoreError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<DesignRecord>, StoreError> {
        let records = self.records.read().await;
        let mut out = records
            .values()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect::<Vec<_>>();
        out.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
        Ok(out)
    }

    async fn find_by_idempotency_key(
        &self,
        owner_id: Uuid,
        key: &str,
    ) -> Result<Option<DesignRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .find(|r| r.owner_id == owner_id && r.idempotency_key.as_deref() == Some(key))
            .cloned())
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Check a submission against the catalog and the per-element limits.
///
/// # Errors
///
/// Returns `Validation` naming the first problem found.
pub fn validate_submission(
    catalog: &Catalog,
    submission: &DesignSubmission,
) -> Result<(), DesignError> {
    if submission.name.trim().is_empty() {
        return Err(DesignError::Validation("design name is required".to_owned()));
    }
    if catalog.product(&submission.product).is_none() {
        return Err(DesignError::Validation(format!(
            "unknown product type: {}",
            submission.product
        )));
    }
    if catalog.fabric(&submission.fabric).is_none() {
        return Err(DesignError::Validation(format!(
            "unknown fabric type: {}",
            submission.fabric
        )));
    }
    if catalog.style(&submission.style).is_none() {
        return Err(DesignError::Validation(format!(
            "unknown design style: {}",
            submission.style
        )));
    }
    if catalog.patch(&submission.patch).is_none() {
        return Err(DesignError::Validation(format!(
            "unknown patch type: {}",
            submission.patch
        )));
    }
    if submission.elements.len() > MAX_ELEMENTS {
        return Err(DesignError::Validation(format!(
            "too many canvas elements (max {MAX_ELEMENTS})"
        )));
    }

    for element in &submission.elements {
        match &element.kind {
            ElementKind::Text { content, font_size, .. } => {
                if content.chars().count() > MAX_TEXT_LEN {
                    return Err(DesignError::Validation(format!(
                        "text content too long (max {MAX_TEXT_LEN} characters)"
                    )));
                }
                if let Some(size) = font_size {
                    if *size <= 0.0 {
                        return Err(DesignError::Validation(
                            "font size must be positive".to_owned(),
                        ));
                    }
                }
            }
            ElementKind::Image { width, height, .. } => {
                if *width <= 0.0 || *height <= 0.0 {
                    return Err(DesignError::Validation(
                        "image dimensions must be positive".to_owned(),
                    ));
                }
            }
        }
    }
    Ok(())
}

// =============================================================================
// SAVE / FETCH
// =============================================================================

/// Save a submission as a draft or published design.
///
/// A repeated submission with the same idempotency key returns the already
/// stored record. Overwriting an existing design requires the submitted
/// version to match the stored one; each accepted write bumps the version.
/// Publishing never downgrades: a published design stays published when
/// re-saved without the publish flag.
///
/// # Errors
///
/// `Validation` for a bad submission, `NotFound`/`Forbidden` for a bad
/// overwrite target, `VersionConflict` on a stale version, `Store` when the
/// backend fails.
pub async fn save_design(
    state: &AppState,
    owner_id: Uuid,
    submission: DesignSubmission,
    design_id: Option<Uuid>,
    submitted_version: Option<i64>,
    idempotency_key: Option<String>,
) -> Result<SaveOutcome, DesignError> {
    validate_submission(&state.catalog, &submission)?;

    if let Some(key) = idempotency_key.as_deref() {
        if let Some(existing) = state.designs.find_by_idempotency_key(owner_id, key).await? {
            info!(design_id = %existing.id, "idempotent replay, returning stored design");
            return Ok(SaveOutcome { record: existing, created: false });
        }
    }

    let now = now_ms();
    let (record, created) = match design_id {
        Some(id) => {
            let existing = state
                .designs
                .get(id)
                .await?
                .ok_or(DesignError::NotFound(id))?;
            if existing.owner_id != owner_id {
                return Err(DesignError::Forbidden);
            }
            let submitted = submitted_version.ok_or_else(|| {
                DesignError::Validation("version is required when overwriting".to_owned())
            })?;
            if submitted != existing.version {
                return Err(DesignError::VersionConflict {
                    current: existing.version,
                    submitted,
                });
            }

            let status = if submission.publish {
                DesignStatus::Published
            } else {
                existing.status
            };
            let record = DesignRecord {
                id,
                owner_id,
                name: submission.name,
                description: submission.description,
                product: submission.product,
                fabric: submission.fabric,
                style: submission.style,
                patch: submission.patch,
                elements: submission.elements,
                status,
                version: existing.version + 1,
                created_at: existing.created_at,
                updated_at: now,
                idempotency_key,
            };
            (record, false)
        }
        None => {
            let status = if submission.publish {
                DesignStatus::Published
            } else {
                DesignStatus::Draft
            };
            let record = DesignRecord {
                id: Uuid::new_v4(),
                owner_id,
                name: submission.name,
                description: submission.description,
                product: submission.product,
                fabric: submission.fabric,
                style: submission.style,
                patch: submission.patch,
                elements: submission.elements,
                status,
                version: 1,
                created_at: now,
                updated_at: now,
                idempotency_key,
            };
            (record, true)
        }
    };

    state.designs.insert(record.clone()).await?;
    info!(
        design_id = %record.id,
        version = record.version,
        status = ?record.status,
        created,
        "design saved"
    );
    Ok(SaveOutcome { record, created })
}

/// Fetch one design, owner only.
///
/// # Errors
///
/// `NotFound` for a missing id, `Forbidden` for another account's design,
/// `Store` when the backend fails.
pub async fn get_design(
    state: &AppState,
    owner_id: Uuid,
    id: Uuid,
) -> Result<DesignRecord, DesignError> {
    let record = state
        .designs
        .get(id)
        .await?
        .ok_or(DesignError::NotFound(id))?;
    if record.owner_id != owner_id {
        return Err(DesignError::Forbidden);
    }
    Ok(record)
}

/// List the caller's designs, most recently updated first.
///
/// # Errors
///
/// `Store` when the backend fails.
pub async fn list_designs(state: &AppState, owner_id: Uuid) -> Result<Vec<DesignRecord>, DesignError> {
    Ok(state.designs.list_by_owner(owner_id).await?)
}

fn now_ms() -> i64 {
    let now = OffsetDateTime::now_utc();
    now.unix_timestamp() * 1000 + i64::from(now.millisecond())
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "design_test.rs"]
mod tests;
