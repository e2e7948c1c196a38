//! Comment repository
//!
//! - create: existence check + insert inside one transaction
//! - list_for_review: an empty result is reported as a missing review

use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

use crate::models::NewComment;
use super::DbError;

/// Comment record from database
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub body: String,
    pub author: String,
    pub votes: i32,
    pub review_id: i32,
    pub created_at: NaiveDateTime,
}

/// Comment repository
pub struct CommentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the comments on a review, newest first.
    ///
    /// A review with no comments and a review that does not exist both yield
    /// `NotFound`; no separate existence check is made.
    pub async fn list_for_review(&self, review_id: &str) -> Result<Vec<Comment>, DbError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT comment_id, body, author, votes, review_id, created_at
            FROM comments
            WHERE review_id = $1::int
            ORDER BY created_at DESC
            "#,
        )
        .bind(review_id)
        .fetch_all(self.pool)
        .await?;

        if comments.is_empty() {
            return Err(DbError::not_found("review", review_id));
        }

        Ok(comments)
    }

    /// Insert a comment on an existing review with zero votes, stamped now.
    pub async fn create(&self, review_id: &str, comment: &NewComment) -> Result<Comment, DbError> {
        let mut tx = self.pool.begin().await?;

        let review_exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM reviews WHERE review_id = $1::int)",
        )
        .bind(review_id)
        .fetch_one(&mut *tx)
        .await?;

        if !review_exists.0 {
            return Err(DbError::not_found("review", review_id));
        }

        let created: Comment = sqlx::query_as(
            r#"
            INSERT INTO comments (body, author, votes, review_id, created_at)
            VALUES ($1, $2, 0, $3::int, NOW())
            RETURNING comment_id, body, author, votes, review_id, created_at
            "#,
        )
        .bind(comment.body())
        .bind(comment.author())
        .bind(review_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Delete a comment by id.
    pub async fn delete(&self, comment_id: &str) -> Result<(), DbError> {
        sqlx::query_scalar::<_, i32>(
            "DELETE FROM comments WHERE comment_id = $1::int RETURNING comment_id",
        )
        .bind(comment_id)
        .fetch_optional(self.pool)
        .await?
        .map(|_| ())
        .ok_or_else(|| DbError::not_found("comment", comment_id))
    }
}
