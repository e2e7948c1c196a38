//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{Category, CategoryRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Serialize)]
pub struct CategoriesBody {
    pub categories: Vec<Category>,
}

/// GET /api/categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesBody>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).list().await?;
    Ok(Json(CategoriesBody { categories }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/categories", get(list_categories))
}
