//! Review endpoints

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{raw_body, render_timestamp};
use crate::db::repos::{Review, ReviewRepo, ReviewWithCount};
use crate::http::error::ApiError;
use crate::http::extractors::IdParam;
use crate::http::server::AppState;
use crate::models::VoteIncrement;

/// Query parameters accepted by `GET /api/reviews`.
///
/// Parsed and logged, but the listing is always unfiltered and newest first.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewListParams {
    pub sort_by: Option<String>,
    #[serde(alias = "order")]
    pub sort_order: Option<String>,
    pub category: Option<String>,
}

/// Review response
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review_id: i32,
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub created_at: String,
    pub votes: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<i64>,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self {
            review_id: r.review_id,
            title: r.title,
            category: r.category,
            designer: r.designer,
            owner: r.owner,
            review_body: r.review_body,
            review_img_url: r.review_img_url,
            created_at: render_timestamp(r.created_at),
            votes: r.votes,
            comment_count: None,
        }
    }
}

impl From<ReviewWithCount> for ReviewResponse {
    fn from(r: ReviewWithCount) -> Self {
        Self {
            comment_count: Some(r.comment_count),
            ..Self::from(r.review)
        }
    }
}

#[derive(Serialize)]
pub struct ReviewBody {
    pub review: ReviewResponse,
}

#[derive(Serialize)]
pub struct ReviewsBody {
    pub reviews: Vec<ReviewResponse>,
}

/// GET /api/reviews - every review with comment counts, newest first
///
/// Query parameters never change the result, so an unparseable query string
/// (e.g. a repeated key) is logged and dropped rather than rejected.
async fn list_reviews(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ReviewListParams>, QueryRejection>,
) -> Result<Json<ReviewsBody>, ApiError> {
    match params {
        Ok(Query(params)) => {
            if params.sort_by.is_some() || params.sort_order.is_some() || params.category.is_some() {
                tracing::debug!(?params, "review list parameters ignored");
            }
        }
        Err(rejection) => {
            tracing::debug!("unreadable review list query ignored: {}", rejection);
        }
    }

    let reviews = ReviewRepo::new(&state.pool).list().await?;
    Ok(Json(ReviewsBody {
        reviews: reviews.into_iter().map(ReviewResponse::from).collect(),
    }))
}

/// GET /api/reviews/{review_id}
async fn get_review(
    State(state): State<Arc<AppState>>,
    IdParam(review_id): IdParam,
) -> Result<Json<ReviewBody>, ApiError> {
    let review = ReviewRepo::new(&state.pool).get(&review_id).await?;
    Ok(Json(ReviewBody {
        review: review.into(),
    }))
}

/// PATCH /api/reviews/{review_id} - adjust votes by `inc_votes`
async fn update_review_votes(
    State(state): State<Arc<AppState>>,
    IdParam(review_id): IdParam,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ReviewBody>, ApiError> {
    let inc = VoteIncrement::from_body(&raw_body(body))?;

    let review = ReviewRepo::new(&state.pool)
        .add_votes(&review_id, inc.get())
        .await?;

    Ok(Json(ReviewBody {
        review: review.into(),
    }))
}

/// Review routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/reviews", get(list_reviews))
        .route(
            "/api/reviews/{review_id}",
            get(get_review).patch(update_review_votes),
        )
}
