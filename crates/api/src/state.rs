use std::sync::Arc;

use uninbox_core::org_profile::{OrgAdminCheck, OrgProfileStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (JWT settings are read by the session extractor).
    pub config: Arc<ServerConfig>,
    /// Organization profile reads and writes.
    pub org_profiles: Arc<dyn OrgProfileStore>,
    /// Admin membership lookup used to authorize profile writes.
    pub org_admins: Arc<dyn OrgAdminCheck>,
}
