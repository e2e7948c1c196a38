//! User repository (read-only)

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;

/// User record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every user, unfiltered.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT username, name, avatar_url FROM users")
            .fetch_all(self.pool)
            .await?;

        Ok(users)
    }
}
