//! Repository for the `org_members` table.

use sqlx::{PgExecutor, PgPool};
use uninbox_core::roles::{MEMBER_STATUS_ACTIVE, ORG_ROLE_ADMIN};
use uninbox_core::types::DbId;

use crate::models::org_member::{CreateOrgMember, OrgMember};

const COLUMNS: &str = "id, org_id, user_id, role, status, created_at, updated_at";

/// Provides data access for organization memberships.
pub struct OrgMemberRepo;

impl OrgMemberRepo {
    /// Add a user to an organization.
    ///
    /// If a membership already exists it is re-activated with the given role.
    pub async fn add<'c>(
        conn: impl PgExecutor<'c>,
        input: &CreateOrgMember,
    ) -> Result<OrgMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO org_members (org_id, user_id, role, status)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (org_id, user_id) DO UPDATE SET
                 role = EXCLUDED.role,
                 status = EXCLUDED.status
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OrgMember>(&query)
            .bind(input.org_id)
            .bind(input.user_id)
            .bind(&input.role)
            .bind(MEMBER_STATUS_ACTIVE)
            .fetch_one(conn)
            .await
    }

    /// List a user's active memberships, oldest first.
    pub async fn list_active_for_user<'c>(
        conn: impl PgExecutor<'c>,
        user_id: DbId,
    ) -> Result<Vec<OrgMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM org_members
             WHERE user_id = $1 AND status = $2
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, OrgMember>(&query)
            .bind(user_id)
            .bind(MEMBER_STATUS_ACTIVE)
            .fetch_all(conn)
            .await
    }

    /// Whether the user holds an active admin membership in the organization.
    pub async fn is_active_admin(
        pool: &PgPool,
        org_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM org_members
                 WHERE org_id = $1 AND user_id = $2 AND role = $3 AND status = $4
             )",
        )
        .bind(org_id)
        .bind(user_id)
        .bind(ORG_ROLE_ADMIN)
        .bind(MEMBER_STATUS_ACTIVE)
        .fetch_one(pool)
        .await
    }
}
