//! Activity log model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Action tags written by the store's own mutations. The `action` field
/// is a free tag string; callers may log tags of their own.
pub mod actions {
    pub const PROFILE_CREATED: &str = "profile_created";
    pub const PROFILE_UPDATED: &str = "profile_updated";
    pub const PROFILE_DELETED: &str = "profile_deleted";
    pub const REVIEW_CREATED: &str = "review_created";
    pub const REVIEW_UPDATED: &str = "review_updated";
}

/// Activity record entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: String,
    pub user_id: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    /// Opaque serialized payload, capped in length by the store at write
    /// time. Schema is caller-defined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}
