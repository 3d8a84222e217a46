//! Postgres-backed tests for the org repositories, `PgOrgStore`, and the
//! development seed.
//!
//! These need a live database (`DATABASE_URL`); run with
//! `cargo test -p uninbox-db -- --ignored`.

use assert_matches::assert_matches;
use sqlx::PgPool;
use uninbox_core::error::CoreError;
use uninbox_core::org_profile::{
    get_org_profile, set_org_profile, GetOrgProfileInput, OrgAdminCheck, OrgContext, OrgLookup,
    OrgProfilePatch, OrgProfileStore, RequestContext, SetOrgProfileInput,
};
use uninbox_core::public_id::is_public_id;
use uninbox_core::roles::{ORG_ROLE_ADMIN, ORG_ROLE_MEMBER};
use uninbox_db::models::org::{CreateOrg, Org};
use uninbox_db::models::org_member::CreateOrgMember;
use uninbox_db::models::user::{CreateUser, User};
use uninbox_db::repositories::{OrgMemberRepo, OrgRepo, UserRepo};
use uninbox_db::seed::{seed_dev_data, seed_in_transaction, DEV_ORG_NAME, DEV_USERNAME};
use uninbox_db::store::PgOrgStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_org(pool: &PgPool, name: &str, avatar_id: Option<&str>) -> Org {
    OrgRepo::create(
        pool,
        &CreateOrg {
            name: name.to_string(),
            avatar_id: avatar_id.map(str::to_string),
        },
    )
    .await
    .expect("org creation should succeed")
}

async fn create_member(pool: &PgPool, org: &Org, username: &str, role: &str) -> User {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
        },
    )
    .await
    .expect("user creation should succeed");
    OrgMemberRepo::add(
        pool,
        &CreateOrgMember {
            org_id: org.id,
            user_id: user.id,
            role: role.to_string(),
        },
    )
    .await
    .expect("membership creation should succeed");
    user
}

// ---------------------------------------------------------------------------
// Repository / store
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn created_org_gets_a_public_id(pool: PgPool) {
    let org = create_org(&pool, "Acme", None).await;
    assert!(is_public_id(&org.public_id));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn find_profile_by_public_id_and_id(pool: PgPool) {
    let org = create_org(&pool, "Acme", Some("av_1")).await;
    let store = PgOrgStore::new(pool);

    let by_public = store
        .find_profile(&OrgLookup::PublicId(org.public_id.clone()))
        .await
        .unwrap()
        .expect("profile by public id");
    let by_id = store
        .find_profile(&OrgLookup::Id(org.id))
        .await
        .unwrap()
        .expect("profile by id");

    assert_eq!(by_public, by_id);
    assert_eq!(by_public.public_id, org.public_id);
    assert_eq!(by_public.name, "Acme");
    assert_eq!(by_public.avatar_id.as_deref(), Some("av_1"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn missing_org_profile_is_none(pool: PgPool) {
    let store = PgOrgStore::new(pool);
    let found = store
        .find_profile(&OrgLookup::PublicId("nosuchorg0000000".into()))
        .await
        .unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn patch_without_avatar_keeps_avatar(pool: PgPool) {
    let org = create_org(&pool, "Acme", Some("av_1")).await;
    let store = PgOrgStore::new(pool.clone());

    store
        .apply_profile_patch(
            org.id,
            &OrgProfilePatch {
                name: Some("Acme Corp".into()),
                avatar_id: None,
            },
        )
        .await
        .unwrap();

    let updated = OrgRepo::find_by_id(&pool, org.id).await.unwrap().unwrap();
    assert_eq!(updated.name, "Acme Corp");
    assert_eq!(updated.avatar_id.as_deref(), Some("av_1"));
    assert_eq!(updated.public_id, org.public_id);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn name_check_constraint_surfaces_as_internal_error(pool: PgPool) {
    let org = create_org(&pool, "Acme", None).await;
    let store = PgOrgStore::new(pool);

    let result = store
        .apply_profile_patch(
            org.id,
            &OrgProfilePatch {
                name: Some("x".into()),
                avatar_id: None,
            },
        )
        .await;

    assert_matches!(result, Err(CoreError::Internal(_)));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn admin_check_follows_membership_role(pool: PgPool) {
    let org = create_org(&pool, "Acme", None).await;
    let admin = create_member(&pool, &org, "alice", ORG_ROLE_ADMIN).await;
    let member = create_member(&pool, &org, "bob", ORG_ROLE_MEMBER).await;
    let store = PgOrgStore::new(pool);
    let ctx = OrgContext { id: org.id };

    assert!(store.is_org_admin(&ctx, admin.id).await.unwrap());
    assert!(!store.is_org_admin(&ctx, member.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Operations end to end
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn set_then_get_profile(pool: PgPool) {
    let org = create_org(&pool, "Acme", None).await;
    let admin = create_member(&pool, &org, "alice", ORG_ROLE_ADMIN).await;
    let store = PgOrgStore::new(pool);
    let ctx = RequestContext::new(Some(admin.id), Some(org.id));

    let input = SetOrgProfileInput {
        org_name: "Acme".into(),
        org_avatar_id: Some("av_123".into()),
    };
    let out = set_org_profile(&store, &store, &ctx, input).await.unwrap();
    assert!(out.success);

    let read = get_org_profile(&store, &ctx, GetOrgProfileInput::default())
        .await
        .unwrap()
        .org_profile
        .expect("profile");
    assert_eq!(read.name, "Acme");
    assert_eq!(read.avatar_id.as_deref(), Some("av_123"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn member_cannot_set_profile(pool: PgPool) {
    let org = create_org(&pool, "Acme", None).await;
    let member = create_member(&pool, &org, "bob", ORG_ROLE_MEMBER).await;
    let store = PgOrgStore::new(pool.clone());
    let ctx = RequestContext::new(Some(member.id), Some(org.id));

    let input = SetOrgProfileInput {
        org_name: "Hijacked".into(),
        org_avatar_id: None,
    };
    let result = set_org_profile(&store, &store, &ctx, input).await;

    assert_matches!(result, Err(CoreError::Unauthorized(_)));
    let unchanged = OrgRepo::find_by_id(&pool, org.id).await.unwrap().unwrap();
    assert_eq!(unchanged.name, "Acme");
}

// ---------------------------------------------------------------------------
// Seed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn seed_is_rerunnable(pool: PgPool) {
    let first = seed_dev_data(&pool).await.unwrap();
    assert!(first.created_org);

    let second = seed_dev_data(&pool).await.unwrap();
    assert!(!second.created_org);
    assert_eq!(first.user_id, second.user_id);
    assert_eq!(first.org_id, second.org_id);

    let org = OrgRepo::find_by_id(&pool, first.org_id).await.unwrap().unwrap();
    assert_eq!(org.name, DEV_ORG_NAME);
    assert!(OrgMemberRepo::is_active_admin(&pool, first.org_id, first.user_id)
        .await
        .unwrap());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn seed_writes_nothing_unless_committed(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let summary = seed_in_transaction(&mut tx).await.unwrap();
    tx.rollback().await.unwrap();

    assert!(UserRepo::find_by_username(&pool, DEV_USERNAME)
        .await
        .unwrap()
        .is_none());
    assert!(OrgRepo::find_by_id(&pool, summary.org_id)
        .await
        .unwrap()
        .is_none());

    let seeded = seed_dev_data(&pool).await.unwrap();
    assert!(seeded.created_org);
}
