//! Comment endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use super::{raw_body, render_timestamp};
use crate::db::repos::{Comment, CommentRepo};
use crate::http::error::ApiError;
use crate::http::extractors::IdParam;
use crate::http::server::AppState;
use crate::models::NewComment;

/// Comment response
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment_id: i32,
    pub body: String,
    pub author: String,
    pub votes: i32,
    pub review_id: i32,
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            comment_id: c.comment_id,
            body: c.body,
            author: c.author,
            votes: c.votes,
            review_id: c.review_id,
            created_at: render_timestamp(c.created_at),
        }
    }
}

#[derive(Serialize)]
pub struct CommentBody {
    pub comment: CommentResponse,
}

#[derive(Serialize)]
pub struct CommentsBody {
    pub comments: Vec<CommentResponse>,
}

/// GET /api/reviews/{review_id}/comments
async fn list_comments(
    State(state): State<Arc<AppState>>,
    IdParam(review_id): IdParam,
) -> Result<Json<CommentsBody>, ApiError> {
    let comments = CommentRepo::new(&state.pool)
        .list_for_review(&review_id)
        .await?;

    Ok(Json(CommentsBody {
        comments: comments.into_iter().map(CommentResponse::from).collect(),
    }))
}

/// POST /api/reviews/{review_id}/comments
async fn create_comment(
    State(state): State<Arc<AppState>>,
    IdParam(review_id): IdParam,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CommentBody>), ApiError> {
    let new_comment = NewComment::from_body(&raw_body(body))?;

    let comment = CommentRepo::new(&state.pool)
        .create(&review_id, &new_comment)
        .await?;

    tracing::info!(
        comment_id = comment.comment_id,
        review_id = comment.review_id,
        "comment created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CommentBody {
            comment: comment.into(),
        }),
    ))
}

/// DELETE /api/comments/{comment_id}
async fn delete_comment(
    State(state): State<Arc<AppState>>,
    IdParam(comment_id): IdParam,
) -> Result<StatusCode, ApiError> {
    CommentRepo::new(&state.pool).delete(&comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Comment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/reviews/{review_id}/comments",
            get(list_comments).post(create_comment),
        )
        .route("/api/comments/{comment_id}", delete(delete_comment))
}
