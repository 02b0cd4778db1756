//! gds-ui - Green Datacenter Selector
//!
//! Estimates the annual CO2 footprint of a compute workload in each grid
//! region from live forecast carbon intensity, and serves a comparative
//! heatmap so the lowest-emission region is easy to pick.

use anyhow::Result;
use clap::Parser;
use gds_common::config::ServiceConfig;
use gds_ui::services::CarbonIntensityClient;
use gds_ui::{build_router, AppState};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "gds-ui", about = "Green Datacenter Selector web service")]
struct Args {
    /// Port to listen on (overrides env and config file)
    #[arg(long)]
    port: Option<u16>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Green Datacenter Selector (gds-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let config = ServiceConfig::resolve(args.port, args.config.as_deref())?;
    info!("Carbon Intensity API: {}", config.api_base_url);

    let carbon_client = CarbonIntensityClient::new(&config.api_base_url)
        .map_err(|e| anyhow::anyhow!("Failed to create Carbon Intensity client: {}", e))?;

    let state = AppState::new(carbon_client);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
    info!("gds-ui listening on http://127.0.0.1:{}", config.port);
    info!("Health check: http://127.0.0.1:{}/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
