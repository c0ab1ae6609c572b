//! Lofty view data model.
//!
//! A lofty view is a scenic vantage point with an optional description and
//! location, plus a hearts counter tracking appreciation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::RecordId;

/// Scenic view record.
///
/// ## Invariants
/// - `name` is non-empty (enforced by the inbound validation gate and by
///   repository seed data).
/// - `created_at == updated_at` at creation; both are assigned by the
///   repository from a single clock reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoftyView {
    /// Repository-assigned identifier.
    #[schema(value_type = u64, example = 1)]
    pub id: RecordId,
    /// Display name of the view.
    #[schema(example = "Golden Gate Bridge")]
    pub name: String,
    /// Optional free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional human-readable location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Appreciation counter, zero for newly created views.
    pub hearts: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for creating a [`LoftyView`].
///
/// Carries only caller-supplied fields; the repository assigns the
/// identifier, the hearts counter, and both timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoftyView {
    /// Display name, non-empty.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Optional human-readable location.
    pub location: Option<String>,
}
