//! Postgres-backed implementations of the org-profile capabilities.

use async_trait::async_trait;
use sqlx::PgPool;
use uninbox_core::error::CoreError;
use uninbox_core::org_profile::{
    OrgAdminCheck, OrgContext, OrgLookup, OrgProfile, OrgProfilePatch, OrgProfileStore,
};
use uninbox_core::types::DbId;

use crate::repositories::{OrgMemberRepo, OrgRepo};

/// Serves profile reads, profile patches and admin checks from the pool.
#[derive(Clone)]
pub struct PgOrgStore {
    pool: PgPool,
}

impl PgOrgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// The detail is logged once, where the error is rendered for the caller.
fn store_error(err: sqlx::Error) -> CoreError {
    CoreError::Internal(err.to_string())
}

#[async_trait]
impl OrgProfileStore for PgOrgStore {
    async fn find_profile(&self, lookup: &OrgLookup) -> Result<Option<OrgProfile>, CoreError> {
        let row = match lookup {
            OrgLookup::PublicId(public_id) => {
                OrgRepo::find_profile_by_public_id(&self.pool, public_id).await
            }
            OrgLookup::Id(id) => OrgRepo::find_profile_by_id(&self.pool, *id).await,
        }
        .map_err(store_error)?;

        Ok(row.map(OrgProfile::from))
    }

    async fn apply_profile_patch(
        &self,
        org_id: DbId,
        patch: &OrgProfilePatch,
    ) -> Result<(), CoreError> {
        let found = OrgRepo::update_profile(&self.pool, org_id, patch)
            .await
            .map_err(store_error)?;
        if !found {
            tracing::warn!(org_id, "Profile patch matched no organization");
        }
        Ok(())
    }
}

#[async_trait]
impl OrgAdminCheck for PgOrgStore {
    async fn is_org_admin(&self, org: &OrgContext, user_id: DbId) -> Result<bool, CoreError> {
        OrgMemberRepo::is_active_admin(&self.pool, org.id, user_id)
            .await
            .map_err(store_error)
    }
}
