//! HTTP server command
//!
//! Wires configuration into the store and runs the expenses API.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use expenses_server::db::{
    initialize, ExpenseRepo, ExpenseStore, MemoryExpenseStore, PoolConfig, DEFAULT_MAX_CONNECTIONS,
};
use expenses_server::http::{run_server, ServerConfig, DEFAULT_PORT};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on (accepts `2565` or `:2565`)
    #[arg(
        long,
        short = 'p',
        env = "PORT",
        default_value_t = DEFAULT_PORT,
        value_parser = parse_port
    )]
    pub port: u16,

    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Value every request's Authorization header must equal
    #[arg(long, env = "AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,

    /// Keep expenses in process memory instead of PostgreSQL
    #[arg(long, conflicts_with = "database_url")]
    pub in_memory: bool,
}

/// Parse a listen port, tolerating the `:PORT` form.
pub fn parse_port(raw: &str) -> Result<u16, String> {
    let digits = raw.strip_prefix(':').unwrap_or(raw);
    digits
        .parse::<u16>()
        .map_err(|e| format!("invalid port '{}': {}", raw, e))
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn ExpenseStore> = if args.in_memory {
        tracing::warn!("Using in-memory store - expenses are lost on shutdown");
        Arc::new(MemoryExpenseStore::new())
    } else {
        let database_url = args
            .database_url
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        let pool_config = PoolConfig {
            max_connections: args.max_connections,
            ..PoolConfig::default()
        };
        let pool = initialize(&database_url, pool_config)
            .await
            .context("Failed to initialize database")?;
        Arc::new(ExpenseRepo::new(pool))
    };

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
        auth_token: args.auth_token.filter(|token| !token.is_empty()),
    };

    tracing::info!("Starting expenses server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
