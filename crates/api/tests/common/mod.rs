#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use uninbox_api::auth::jwt::{generate_access_token, JwtConfig};
use uninbox_api::config::ServerConfig;
use uninbox_api::router::build_app_router;
use uninbox_api::state::AppState;
use uninbox_core::error::CoreError;
use uninbox_core::org_profile::{
    OrgAdminCheck, OrgContext, OrgLookup, OrgProfile, OrgProfilePatch, OrgProfileStore,
};
use uninbox_core::types::DbId;

// ---------------------------------------------------------------------------
// In-memory org store
// ---------------------------------------------------------------------------

pub struct StoredOrg {
    pub id: DbId,
    pub profile: OrgProfile,
}

/// Org profiles and admin memberships held in memory.
#[derive(Default)]
pub struct InMemoryOrgs {
    orgs: Mutex<Vec<StoredOrg>>,
    admins: Mutex<HashSet<(DbId, DbId)>>,
    pub writes: AtomicUsize,
}

impl InMemoryOrgs {
    pub fn add_org(&self, id: DbId, public_id: &str, name: &str, avatar_id: Option<&str>) {
        self.orgs.lock().unwrap().push(StoredOrg {
            id,
            profile: OrgProfile {
                public_id: public_id.to_string(),
                name: name.to_string(),
                avatar_id: avatar_id.map(str::to_string),
            },
        });
    }

    pub fn add_admin(&self, org_id: DbId, user_id: DbId) {
        self.admins.lock().unwrap().insert((org_id, user_id));
    }

    pub fn profile(&self, id: DbId) -> OrgProfile {
        self.orgs
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.profile.clone())
            .expect("org should exist")
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrgProfileStore for InMemoryOrgs {
    async fn find_profile(&self, lookup: &OrgLookup) -> Result<Option<OrgProfile>, CoreError> {
        let orgs = self.orgs.lock().unwrap();
        Ok(orgs
            .iter()
            .find(|o| match lookup {
                OrgLookup::PublicId(public_id) => &o.profile.public_id == public_id,
                OrgLookup::Id(id) => o.id == *id,
            })
            .map(|o| o.profile.clone()))
    }

    async fn apply_profile_patch(
        &self,
        org_id: DbId,
        patch: &OrgProfilePatch,
    ) -> Result<(), CoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut orgs = self.orgs.lock().unwrap();
        if let Some(org) = orgs.iter_mut().find(|o| o.id == org_id) {
            if let Some(name) = &patch.name {
                org.profile.name = name.clone();
            }
            if let Some(avatar_id) = &patch.avatar_id {
                org.profile.avatar_id = Some(avatar_id.clone());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl OrgAdminCheck for InMemoryOrgs {
    async fn is_org_admin(&self, org: &OrgContext, user_id: DbId) -> Result<bool, CoreError> {
        Ok(self.admins.lock().unwrap().contains(&(org.id, user_id)))
    }
}

/// Store whose every call fails, as an unreachable database would.
pub struct FailingOrgs;

#[async_trait]
impl OrgProfileStore for FailingOrgs {
    async fn find_profile(&self, _lookup: &OrgLookup) -> Result<Option<OrgProfile>, CoreError> {
        Err(CoreError::Internal("pool timed out: secret-host:5432".into()))
    }

    async fn apply_profile_patch(
        &self,
        _org_id: DbId,
        _patch: &OrgProfilePatch,
    ) -> Result<(), CoreError> {
        Err(CoreError::Internal("pool timed out: secret-host:5432".into()))
    }
}

#[async_trait]
impl OrgAdminCheck for FailingOrgs {
    async fn is_org_admin(&self, _org: &OrgContext, _user_id: DbId) -> Result<bool, CoreError> {
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router backed by the given in-memory store.
pub fn build_test_app(orgs: Arc<InMemoryOrgs>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        org_profiles: orgs.clone(),
        org_admins: orgs,
    };
    build_app_router(state, &config)
}

/// Build the application router backed by a store that always fails.
pub fn build_failing_app() -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        org_profiles: Arc::new(FailingOrgs),
        org_admins: Arc::new(FailingOrgs),
    };
    build_app_router(state, &config)
}

/// Issue a session token signed with the test secret.
pub fn token_for(user_id: DbId, org_id: Option<DbId>) -> String {
    generate_access_token(user_id, org_id, &test_config().jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
