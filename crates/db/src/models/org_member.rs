//! Organization membership model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uninbox_core::types::{DbId, Timestamp};

/// A row from the `org_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrgMember {
    pub id: DbId,
    pub org_id: DbId,
    pub user_id: DbId,
    /// See `uninbox_core::roles` for the allowed values.
    pub role: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding (or re-activating) a member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrgMember {
    pub org_id: DbId,
    pub user_id: DbId,
    pub role: String,
}
