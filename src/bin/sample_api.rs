//! OctoFit Sample API Server
//!
//! Run with: cargo run --bin octofit-sample-api
//!
//! # Configuration
//!
//! Reads the `[sample_api]` and `[logging]` sections of the OctoFit config
//! file. Environment variables:
//! - `OCTOFIT_SAMPLE_HOST`: Host to bind to (default: 0.0.0.0)
//! - `OCTOFIT_SAMPLE_PORT`: Port to listen on (default: 8000)
//! - `RUST_LOG`: Log filter (default: octofit=info,tower_http=info)

use std::path::PathBuf;

use clap::Parser;

use octofit::config::Config;
use octofit::sample_api::{serve, Fixtures};

#[derive(Parser)]
#[command(name = "octofit-sample-api")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve OctoFit seed data for local development")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::resolve(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.sample_api.port = port;
    }
    octofit::logging::init(&config.logging);

    tracing::info!("Starting OctoFit sample API v{}", env!("CARGO_PKG_VERSION"));

    serve(Fixtures::seed(), &config.sample_api).await?;

    tracing::info!("OctoFit sample API stopped");
    Ok(())
}
