//! gamereviews CLI - run and check the board game reviews API
//!
//! - `serve`: open the database pool and run the HTTP server until shutdown
//! - `check`: confirm the database is reachable

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "gamereviews",
    author,
    version,
    about = "HTTP API for board game reviews, categories, users, and comments"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Verify the database connection and exit
    Check(commands::check::CheckArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env-backed arguments
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Check(args) => commands::run_check(args).await?,
    }

    Ok(())
}
