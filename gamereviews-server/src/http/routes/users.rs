//! User endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Serialize)]
pub struct UsersBody {
    pub users: Vec<User>,
}

/// GET /api/users
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<UsersBody>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Json(UsersBody { users }))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/users", get(list_users))
}
