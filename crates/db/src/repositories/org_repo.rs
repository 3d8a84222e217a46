//! Repository for the `orgs` table.

use sqlx::{PgExecutor, PgPool};
use uninbox_core::org_profile::OrgProfilePatch;
use uninbox_core::public_id::generate_public_id;
use uninbox_core::types::DbId;

use crate::models::org::{CreateOrg, Org, OrgProfileRow};

/// Column list shared across full-row queries.
const COLUMNS: &str = "id, public_id, name, avatar_id, created_at, updated_at";

/// Column list for the display-profile projection.
const PROFILE_COLUMNS: &str = "public_id, name, avatar_id";

/// Provides data access for organizations.
pub struct OrgRepo;

impl OrgRepo {
    /// Insert a new organization with a freshly generated public id.
    pub async fn create<'c>(
        conn: impl PgExecutor<'c>,
        input: &CreateOrg,
    ) -> Result<Org, sqlx::Error> {
        let query = format!(
            "INSERT INTO orgs (public_id, name, avatar_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Org>(&query)
            .bind(generate_public_id())
            .bind(&input.name)
            .bind(&input.avatar_id)
            .fetch_one(conn)
            .await
    }

    /// Find an organization by internal ID.
    pub async fn find_by_id<'c>(
        conn: impl PgExecutor<'c>,
        id: DbId,
    ) -> Result<Option<Org>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orgs WHERE id = $1");
        sqlx::query_as::<_, Org>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Fetch the profile projection of the organization with `public_id`.
    pub async fn find_profile_by_public_id(
        pool: &PgPool,
        public_id: &str,
    ) -> Result<Option<OrgProfileRow>, sqlx::Error> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM orgs WHERE public_id = $1");
        sqlx::query_as::<_, OrgProfileRow>(&query)
            .bind(public_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the profile projection of the organization with internal `id`.
    pub async fn find_profile_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<OrgProfileRow>, sqlx::Error> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM orgs WHERE id = $1");
        sqlx::query_as::<_, OrgProfileRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a profile patch. Only non-`None` fields are changed.
    ///
    /// Returns `true` if a row with the given `id` exists.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        patch: &OrgProfilePatch,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE orgs SET
                name = COALESCE($2, name),
                avatar_id = COALESCE($3, avatar_id)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.avatar_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
