//! Folio Preview Server
//!
//! Run with: cargo run --bin folio-serve
//!
//! Serves the built frontend (`trunk build` in `folio-ui/`) for a local
//! preview.
//!
//! # Configuration
//!
//! Config file (`--config` or the default locations), then environment:
//! - `FOLIO_SERVE_HOST`: Host to bind to (default: 127.0.0.1)
//! - `FOLIO_SERVE_PORT`: Port to listen on (default: 8084)
//! - `FOLIO_DIST_DIR`: Directory to serve (default: folio-ui/dist)
//! - `RUST_LOG`: Log filter (default: folio=info,tower_http=debug)
//!
//! Command-line flags override both.

use std::path::PathBuf;

use clap::Parser;

use folio::config::Config;
use folio::serve::serve;
use folio::telemetry::init_tracing;

#[derive(Parser)]
#[command(name = "folio-serve")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the built portfolio for a local preview")]
struct Args {
    /// Config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to serve
    #[arg(short, long)]
    dist: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dist) = args.dist {
        config.serve.dist_dir = dist;
    }
    if let Some(host) = args.host {
        config.serve.host = host;
    }
    if let Some(port) = args.port {
        config.serve.port = port;
    }

    init_tracing(&config.logging, Some("tower_http=debug"));

    tracing::info!("Starting Folio preview server v{}", env!("CARGO_PKG_VERSION"));

    serve(&config.serve).await?;

    Ok(())
}
