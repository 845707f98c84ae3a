//! Serves the derivative explorer as a local web dashboard.
//!
//! # Usage
//!
//! ```text
//! cargo run -p tangent-dev
//! cargo run -p tangent-dev -- --function cube --port 9000
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tangent_core::{Preset, Scene};
use tangent_dev::{Canvas, serve};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Serve the derivative explorer over HTTP")]
struct Args {
    /// Function to explore (square or cube).
    #[arg(short, long, default_value_t = Preset::Square)]
    function: Preset,

    /// Port to listen on, bound to localhost.
    #[arg(short, long, default_value_t = 8050)]
    port: u16,

    /// Log filter, such as `info` or `warp=debug`. Defaults to `RUST_LOG`.
    #[arg(long)]
    log: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log.as_deref())?;

    let scene = Arc::new(Scene::from_preset(args.function));
    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    serve(scene, Canvas::for_preset(args.function), addr)
        .await
        .with_context(|| format!("failed to bind the dashboard to {addr}"))
}

fn init_tracing(filter: Option<&str>) -> anyhow::Result<()> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}
