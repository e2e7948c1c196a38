//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Pool handle is injected into the router state; nothing global
//! - One statement per operation, aggregates computed by the store
//! - Vote changes are a single `UPDATE ... RETURNING`, never read-then-write
//! - Path identifiers are bound as text and cast by the store, so malformed
//!   ids surface as PostgreSQL input errors

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, ping, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
