use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tax_api::config::{Cli, ServerConfig};
use tax_api::{create_router, logging};

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ServerConfig::from_cli(cli)?;

    logging::init_logging(&config.log_level, config.log_file.as_deref())?;

    let app = create_router(&config)?;
    let addr = config.socket_addr()?;

    info!(%addr, origin = %config.allowed_origin, "starting retirement tax API");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
