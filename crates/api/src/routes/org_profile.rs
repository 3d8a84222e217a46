//! Route definitions for the organization profile, mounted at `/org/profile`.

use axum::http::Method;
use axum::routing::get;
use axum::Router;

use crate::handlers::org_profile;
use crate::state::AppState;

/// Methods served by [`router`].
pub fn methods() -> [Method; 2] {
    [Method::GET, Method::PUT]
}

/// ```text
/// GET /  -> get_org_profile
/// PUT /  -> set_org_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(org_profile::get_org_profile).put(org_profile::set_org_profile),
    )
}
