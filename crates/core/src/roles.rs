//! Organization membership role and status names.
//!
//! These must match the CHECK constraints in `20260301000003_create_org_members.sql`.

pub const ORG_ROLE_ADMIN: &str = "admin";
pub const ORG_ROLE_MEMBER: &str = "member";

pub const MEMBER_STATUS_ACTIVE: &str = "active";
