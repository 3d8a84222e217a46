//! Organization entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uninbox_core::org_profile::OrgProfile;
use uninbox_core::types::{DbId, Timestamp};

/// A row from the `orgs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Org {
    pub id: DbId,
    pub public_id: String,
    pub name: String,
    pub avatar_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The display-profile columns of an `orgs` row.
#[derive(Debug, Clone, FromRow)]
pub struct OrgProfileRow {
    pub public_id: String,
    pub name: String,
    pub avatar_id: Option<String>,
}

impl From<OrgProfileRow> for OrgProfile {
    fn from(row: OrgProfileRow) -> Self {
        OrgProfile {
            public_id: row.public_id,
            name: row.name,
            avatar_id: row.avatar_id,
        }
    }
}

/// DTO for creating a new organization. The public id is generated on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrg {
    pub name: String,
    pub avatar_id: Option<String>,
}
