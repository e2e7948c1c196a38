//! Route handlers organized by resource
//!
//! Each handler binds path/query/body input, makes one repository call
//! (after validation where the request mutates), and wraps the result in a
//! single named field.

pub mod api;
pub mod categories;
pub mod comments;
pub mod health;
pub mod reviews;
pub mod users;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use chrono::NaiveDateTime;
use serde_json::Value;

/// Render a stored timestamp as text.
pub(crate) fn render_timestamp(ts: NaiveDateTime) -> String {
    ts.and_utc().to_rfc3339()
}

/// Unwrap a JSON body, treating an absent or unparseable one as `null` so the
/// validators report it like any other malformed shape.
pub(crate) fn raw_body(body: Result<Json<Value>, JsonRejection>) -> Value {
    match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            tracing::debug!("unreadable JSON body: {}", rejection);
            Value::Null
        }
    }
}
