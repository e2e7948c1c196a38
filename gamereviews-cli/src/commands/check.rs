//! Database connectivity check

use anyhow::{Context, Result};
use clap::Parser;

use gamereviews_server::db::{create_pool_with_options, ping};

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Open a single connection, run a trivial query, and report.
pub async fn run_check(args: CheckArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let pool = create_pool_with_options(&database_url, 1)
        .await
        .context("Failed to connect to database")?;

    let result = ping(&pool).await.context("Database ping failed");
    pool.close().await;
    result?;

    tracing::info!("Database reachable");
    println!("ok");
    Ok(())
}
