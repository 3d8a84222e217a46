//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uninbox_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub public_id: String,
    pub username: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user. The public id is generated on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
}
