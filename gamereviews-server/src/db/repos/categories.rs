//! Category repository (read-only)

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;

/// Category record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub slug: String,
    pub description: String,
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every category, unfiltered.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as::<_, Category>("SELECT slug, description FROM categories")
            .fetch_all(self.pool)
            .await?;

        Ok(categories)
    }
}
