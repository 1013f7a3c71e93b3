//! Create the expenses table and exit

use anyhow::{Context, Result};
use clap::Parser;

use expenses_server::db::{initialize, PoolConfig};

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Connect, verify the backend and ensure the table exists
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let pool = initialize(&database_url, PoolConfig::default())
        .await
        .context("Failed to initialize database")?;
    pool.close().await;

    tracing::info!("Database initialized");
    Ok(())
}
