//! Domain layer for the uninbox backend.
//!
//! Pure types and operations; storage and HTTP live in `uninbox-db` and
//! `uninbox-api`.

pub mod error;
pub mod org_profile;
pub mod public_id;
pub mod roles;
pub mod types;
