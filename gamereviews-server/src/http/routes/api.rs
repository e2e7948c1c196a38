//! `GET /api` - machine-readable description of every endpoint

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::http::server::AppState;

/// Endpoint descriptions keyed by `"<METHOD> <path>"`.
pub fn endpoints() -> Value {
    json!({
        "GET /api": {
            "description": "serves a description of every available endpoint"
        },
        "GET /api/categories": {
            "description": "serves an array of all categories",
            "exampleResponse": {
                "categories": [
                    { "slug": "euro game", "description": "Abstract games that involve little luck" }
                ]
            }
        },
        "GET /api/reviews": {
            "description": "serves an array of all reviews with comment counts, newest first",
            "queries": ["sort_by", "order", "category"],
            "exampleResponse": {
                "reviews": [
                    {
                        "review_id": 1,
                        "title": "Agricola",
                        "category": "euro game",
                        "designer": "Uwe Rosenberg",
                        "owner": "mallionaire",
                        "review_body": "Farmyard fun!",
                        "review_img_url": "https://example.com/agricola.png",
                        "created_at": "2021-01-18T10:00:20+00:00",
                        "votes": 1,
                        "comment_count": 0
                    }
                ]
            }
        },
        "GET /api/reviews/:review_id": {
            "description": "serves a single review with its comment count"
        },
        "PATCH /api/reviews/:review_id": {
            "description": "adds inc_votes to the review's votes and serves the updated review",
            "exampleRequest": { "inc_votes": 1 }
        },
        "GET /api/users": {
            "description": "serves an array of all users",
            "exampleResponse": {
                "users": [
                    { "username": "mallionaire", "name": "haz", "avatar_url": "https://example.com/haz.png" }
                ]
            }
        },
        "GET /api/reviews/:review_id/comments": {
            "description": "serves an array of the comments on a review"
        },
        "POST /api/reviews/:review_id/comments": {
            "description": "adds a comment to a review and serves the created comment",
            "exampleRequest": { "body": "Great game", "author": "mallionaire" }
        },
        "DELETE /api/comments/:comment_id": {
            "description": "deletes a comment, responding 204 with no content"
        }
    })
}

/// GET /api
async fn describe() -> Json<Value> {
    Json(json!({ "endpoints": endpoints() }))
}

/// API description route
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api", get(describe))
}
