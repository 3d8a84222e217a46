//! Organization display profile: read and admin-only update.
//!
//! The operations here are storage-agnostic. Persistence and the admin
//! membership lookup are injected through [`OrgProfileStore`] and
//! [`OrgAdminCheck`] so the HTTP layer can wire the Postgres implementations
//! and tests can substitute in-memory ones.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::public_id::PUBLIC_ID_LENGTH;
use crate::types::DbId;

/// Minimum organization name length, in characters.
pub const ORG_NAME_MIN_LEN: u64 = 3;
/// Maximum organization name length, in characters.
pub const ORG_NAME_MAX_LEN: u64 = 32;
/// Minimum length accepted for an `org_public_id` lookup.
pub const ORG_PUBLIC_ID_MIN_LEN: u64 = 3;
/// Lookups never need more than a generated public id.
pub const ORG_PUBLIC_ID_MAX_LEN: u64 = PUBLIC_ID_LENGTH as u64;

const NOT_ADMIN_MESSAGE: &str = "You are not an admin";

// ---------------------------------------------------------------------------
// Request context
// ---------------------------------------------------------------------------

/// The organization a session is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrgContext {
    pub id: DbId,
}

/// Per-request caller context, built once by the serving layer.
///
/// A missing user or organization is `None`; there is no sentinel id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub user_id: Option<DbId>,
    pub org: Option<OrgContext>,
}

impl RequestContext {
    pub fn new(user_id: Option<DbId>, org_id: Option<DbId>) -> Self {
        Self {
            user_id,
            org: org_id.map(|id| OrgContext { id }),
        }
    }
}

// ---------------------------------------------------------------------------
// Profile types
// ---------------------------------------------------------------------------

/// Projection of an organization row: only the display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgProfile {
    pub public_id: String,
    pub name: String,
    pub avatar_id: Option<String>,
}

/// How to locate the organization whose profile is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgLookup {
    PublicId(String),
    Id(DbId),
}

/// Partial update of the profile fields.
///
/// `None` leaves the stored value unchanged; `Some` overwrites it. There is
/// no way to clear a field through a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgProfilePatch {
    pub name: Option<String>,
    pub avatar_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Operation inputs / outputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GetOrgProfileInput {
    #[validate(length(min = ORG_PUBLIC_ID_MIN_LEN, max = ORG_PUBLIC_ID_MAX_LEN))]
    pub org_public_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetOrgProfileOutput {
    pub org_profile: Option<OrgProfile>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetOrgProfileInput {
    #[validate(length(min = ORG_NAME_MIN_LEN, max = ORG_NAME_MAX_LEN))]
    pub org_name: String,
    pub org_avatar_id: Option<String>,
}

impl SetOrgProfileInput {
    /// The name is always written; an empty or missing avatar id keeps the
    /// stored avatar.
    fn into_patch(self) -> OrgProfilePatch {
        OrgProfilePatch {
            name: Some(self.org_name),
            avatar_id: self.org_avatar_id.filter(|id| !id.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetOrgProfileOutput {
    pub success: bool,
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// Persistent storage for organization profiles.
#[async_trait]
pub trait OrgProfileStore: Send + Sync {
    /// Fetch the profile projection of at most one organization.
    async fn find_profile(&self, lookup: &OrgLookup) -> Result<Option<OrgProfile>, CoreError>;

    /// Apply `patch` to the organization with internal id `org_id` in a
    /// single statement.
    async fn apply_profile_patch(
        &self,
        org_id: DbId,
        patch: &OrgProfilePatch,
    ) -> Result<(), CoreError>;
}

/// Decides whether a user administers an organization.
#[async_trait]
pub trait OrgAdminCheck: Send + Sync {
    async fn is_org_admin(&self, org: &OrgContext, user_id: DbId) -> Result<bool, CoreError>;
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Read the display profile of an organization.
///
/// Looks up by `org_public_id` when given, otherwise by the session's bound
/// organization. Returns an empty profile when nothing matches or when
/// there is nothing to look up.
pub async fn get_org_profile(
    store: &dyn OrgProfileStore,
    ctx: &RequestContext,
    input: GetOrgProfileInput,
) -> Result<GetOrgProfileOutput, CoreError> {
    input.validate()?;

    let lookup = match (input.org_public_id, ctx.org) {
        (Some(public_id), _) => OrgLookup::PublicId(public_id),
        (None, Some(org)) => OrgLookup::Id(org.id),
        (None, None) => return Ok(GetOrgProfileOutput { org_profile: None }),
    };

    let org_profile = store.find_profile(&lookup).await?;
    Ok(GetOrgProfileOutput { org_profile })
}

/// Update the name (and optionally the avatar) of the session's organization.
///
/// Only admins of that organization may do this. Authorization is decided
/// before any write; a rejected call leaves the row untouched.
pub async fn set_org_profile(
    store: &dyn OrgProfileStore,
    admins: &dyn OrgAdminCheck,
    ctx: &RequestContext,
    input: SetOrgProfileInput,
) -> Result<SetOrgProfileOutput, CoreError> {
    input.validate()?;

    let (Some(user_id), Some(org)) = (ctx.user_id, ctx.org) else {
        return Err(CoreError::Unauthorized(NOT_ADMIN_MESSAGE.into()));
    };

    if !admins.is_org_admin(&org, user_id).await? {
        return Err(CoreError::Unauthorized(NOT_ADMIN_MESSAGE.into()));
    }

    store.apply_profile_patch(org.id, &input.into_patch()).await?;

    Ok(SetOrgProfileOutput { success: true })
}
