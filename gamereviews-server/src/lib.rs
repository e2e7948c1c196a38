//! gamereviews-server: HTTP API over the board game reviews database
//!
//! Layers, leaf first:
//! - `models`: request body validation (vote increments, new comments)
//! - `db`: connection pool and per-table repositories
//! - `http`: router, handlers, and error-to-response translation

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
