//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - `{ "msg": ... }` error bodies from one translator

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use extractors::IdParam;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
