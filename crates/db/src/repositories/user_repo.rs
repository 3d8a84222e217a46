//! Repository for the `users` table.

use sqlx::PgExecutor;
use uninbox_core::public_id::generate_public_id;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, public_id, username, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create<'c>(
        conn: impl PgExecutor<'c>,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (public_id, username)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(generate_public_id())
            .bind(&input.username)
            .fetch_one(conn)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username<'c>(
        conn: impl PgExecutor<'c>,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(conn)
            .await
    }
}
