//! Review repository
//!
//! - get/list: LEFT JOIN with comment count (no N+1)
//! - add_votes: single `UPDATE ... RETURNING`; concurrent patches to one
//!   review serialize on its row lock

use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

use super::DbError;

/// Review record from database
#[derive(Debug, Clone, FromRow)]
pub struct Review {
    pub review_id: i32,
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub created_at: NaiveDateTime,
    pub votes: i32,
}

/// Review with its comment count for read endpoints
#[derive(Debug, Clone, FromRow)]
pub struct ReviewWithCount {
    #[sqlx(flatten)]
    pub review: Review,
    pub comment_count: i64,
}

const REVIEW_WITH_COUNT: &str = r#"
    SELECT
        r.review_id,
        r.title,
        r.category,
        r.designer,
        r.owner,
        r.review_body,
        r.review_img_url,
        r.created_at,
        r.votes,
        COUNT(c.comment_id) AS comment_count
    FROM reviews r
    LEFT JOIN comments c ON c.review_id = r.review_id
"#;

/// Review repository
pub struct ReviewRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a single review with its comment count.
    ///
    /// `id` is cast by the store; a non-numeric id fails with `22P02`.
    pub async fn get(&self, id: &str) -> Result<ReviewWithCount, DbError> {
        let sql = format!(
            "{REVIEW_WITH_COUNT} WHERE r.review_id = $1::int GROUP BY r.review_id"
        );

        sqlx::query_as::<_, ReviewWithCount>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("review", id))
    }

    /// List every review with comment counts, newest first.
    pub async fn list(&self) -> Result<Vec<ReviewWithCount>, DbError> {
        let sql = format!(
            "{REVIEW_WITH_COUNT} GROUP BY r.review_id ORDER BY r.created_at DESC"
        );

        let reviews = sqlx::query_as::<_, ReviewWithCount>(&sql)
            .fetch_all(self.pool)
            .await?;

        Ok(reviews)
    }

    /// Add a signed delta to a review's votes and return the updated row.
    pub async fn add_votes(&self, id: &str, delta: i32) -> Result<Review, DbError> {
        sqlx::query_as::<_, Review>(
            r#"
            UPDATE reviews
            SET votes = votes + $2
            WHERE review_id = $1::int
            RETURNING review_id, title, category, designer, owner,
                      review_body, review_img_url, created_at, votes
            "#,
        )
        .bind(id)
        .bind(delta)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("review", id))
    }
}
