//! Development data seeding.
//!
//! Populates the minimum an org-profile session needs locally: one user,
//! one organization, and an admin membership linking them. Safe to run
//! repeatedly; existing rows are reused. All three writes commit together.

use sqlx::{PgPool, Postgres, Transaction};
use uninbox_core::roles::ORG_ROLE_ADMIN;
use uninbox_core::types::DbId;

use crate::models::org::CreateOrg;
use crate::models::org_member::CreateOrgMember;
use crate::models::user::CreateUser;
use crate::repositories::{OrgMemberRepo, OrgRepo, UserRepo};

/// Username of the seeded admin.
pub const DEV_USERNAME: &str = "dev-admin";
/// Name given to the seeded organization when it is first created.
pub const DEV_ORG_NAME: &str = "Dev Org";

/// Ids of the seeded rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub user_id: DbId,
    pub user_public_id: String,
    pub org_id: DbId,
    pub org_public_id: String,
    /// `true` if this run created the organization.
    pub created_org: bool,
}

/// Ensure the development user, organization and admin membership exist.
pub async fn seed_dev_data(pool: &PgPool) -> Result<SeedSummary, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let summary = seed_in_transaction(&mut tx).await?;
    tx.commit().await?;

    tracing::info!(
        user_id = summary.user_id,
        org_id = summary.org_id,
        org_public_id = %summary.org_public_id,
        created_org = summary.created_org,
        "Development data seeded",
    );
    Ok(summary)
}

/// Seed within a caller-owned transaction; nothing is visible until it commits.
pub async fn seed_in_transaction(
    tx: &mut Transaction<'_, Postgres>,
) -> Result<SeedSummary, sqlx::Error> {
    let user = match UserRepo::find_by_username(&mut **tx, DEV_USERNAME).await? {
        Some(user) => user,
        None => {
            UserRepo::create(
                &mut **tx,
                &CreateUser {
                    username: DEV_USERNAME.to_string(),
                },
            )
            .await?
        }
    };

    let existing_org = match OrgMemberRepo::list_active_for_user(&mut **tx, user.id)
        .await?
        .first()
    {
        Some(member) => OrgRepo::find_by_id(&mut **tx, member.org_id).await?,
        None => None,
    };

    let (org, created_org) = match existing_org {
        Some(org) => (org, false),
        None => {
            let org = OrgRepo::create(
                &mut **tx,
                &CreateOrg {
                    name: DEV_ORG_NAME.to_string(),
                    avatar_id: None,
                },
            )
            .await?;
            (org, true)
        }
    };

    OrgMemberRepo::add(
        &mut **tx,
        &CreateOrgMember {
            org_id: org.id,
            user_id: user.id,
            role: ORG_ROLE_ADMIN.to_string(),
        },
    )
    .await?;

    Ok(SeedSummary {
        user_id: user.id,
        user_public_id: user.public_id,
        org_id: org.id,
        org_public_id: org.public_id,
        created_org,
    })
}
