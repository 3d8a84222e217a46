//! Request extractors and HTTP middleware.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`auth::Session`] -- The per-request caller context handed to operations.
//! - [`cors::cors_layer`] -- Cross-origin policy built from config and mounted routes.

pub mod auth;
pub mod cors;
