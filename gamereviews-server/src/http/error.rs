//! API error type with IntoResponse
//!
//! Every handler failure funnels through here. Domain failures keep their
//! status and message; store rejections of client input become
//! `400 bad request`; anything else is logged and reported as a bare 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body failed validation (400)
    Validation(ValidationError),

    /// Store rejected a path or body value, e.g. a non-numeric id (400)
    BadRequest,

    /// Resource not found (404), carrying the store's message
    NotFound(DbError),

    /// No route matched method and path (404)
    RouteNotFound,

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::BadRequest => "bad request".to_owned(),
            Self::NotFound(e) => e.to_string(),
            Self::RouteNotFound => "404 route not found.".to_owned(),
            Self::Database(_) => "Internal server error".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Database(e) = &self {
            // Log the actual error, return generic message
            tracing::error!("Database error: {}", e);
        }

        let status = self.status();
        (status, Json(json!({ "msg": self.message() }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        match e {
            // Well-formed number the store could not take as a delta
            ValidationError::NonIntegerVotes => Self::BadRequest,
            e => Self::Validation(e),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            e @ DbError::NotFound { .. } => Self::NotFound(e),
            e if e.is_rejected_input() => Self::BadRequest,
            e => Self::Database(e),
        }
    }
}
