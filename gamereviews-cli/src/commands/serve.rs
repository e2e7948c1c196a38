//! HTTP server command
//!
//! Owns the database pool for the life of the process: opened before the
//! server starts, closed after it shuts down.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use gamereviews_server::db::{create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
use gamereviews_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "GAMEREVIEWS_BIND", default_value = "127.0.0.1:9090")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    tracing::info!("Starting gamereviews server on {}", args.bind);

    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    let served = run_server(pool.clone(), config).await;

    pool.close().await;
    tracing::info!("Database pool closed");

    served.context("Server error")
}
