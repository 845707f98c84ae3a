//! Opens the derivative explorer in a desktop window.
//!
//! # Usage
//!
//! ```text
//! cargo run -p tangent-plot
//! cargo run -p tangent-plot -- --function cube
//! cargo run -p tangent-plot -- --log debug
//! ```

use anyhow::Context;
use clap::Parser;
use tangent_core::{Explorer, FunctionPair, Preset, Scene};
use tangent_plot::{ExplorerApp, Viewport};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Explore the derivative as the limit of secant slopes")]
struct Args {
    /// Function to explore (square or cube).
    #[arg(short, long, default_value_t = Preset::Square)]
    function: Preset,

    /// Log filter, such as `info` or `tangent_core=debug`. Defaults to `RUST_LOG`.
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log.as_deref())?;

    let preset = args.function;
    let title = format!(
        "The Derivative: Instantaneous Rate of Change   {}  →  {}",
        preset.label(),
        preset.derivative_label()
    );
    info!(function = %preset, "opening explorer window");

    let explorer = Explorer::new(Scene::from_preset(preset));
    ExplorerApp::new(explorer, Viewport::for_preset(preset))
        .run(&title)
        .map_err(|error| anyhow::anyhow!("{error}"))
        .context("failed to open the explorer window")
}

fn init_tracing(filter: Option<&str>) -> anyhow::Result<()> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}
