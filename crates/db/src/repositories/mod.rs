//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that take the executor as the first argument: `&PgPool`, or any
//! `PgExecutor` for the methods the seed runs inside a transaction.

pub mod org_member_repo;
pub mod org_repo;
pub mod user_repo;

pub use org_member_repo::OrgMemberRepo;
pub use org_repo::OrgRepo;
pub use user_repo::UserRepo;
