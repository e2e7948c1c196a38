//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is opened once
//! by the process owner and closed with [`PgPool::close`] at shutdown.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/nc_games").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with a custom connection limit.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the store is reachable.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    let (one,): (i32,) = sqlx::query_as("SELECT 1").fetch_one(pool).await?;
    debug_assert_eq!(one, 1);
    Ok(())
}
