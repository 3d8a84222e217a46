pub mod health;
pub mod org_profile;

use axum::http::Method;
use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /org/profile                                     get, update (auth required;
///                                                  update requires org admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/org/profile", org_profile::router())
}

/// Every method mounted by [`api_routes`], for CORS preflight answers.
pub fn api_methods() -> Vec<Method> {
    let mut methods = org_profile::methods().to_vec();
    methods.dedup();
    methods
}
