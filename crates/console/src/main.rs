use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use corona_core::{Color, ProgressEngine};

mod app;
mod config;
mod dial;
mod render;

/// Animated gauges driven by the corona color engine.
#[derive(Parser, Debug)]
#[command(name = "corona")]
#[command(about = "Animated gauge demo for the corona color engine")]
struct Args {
    /// Path to a JSON gauge configuration (built-in gauges when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Milliseconds between randomized updates (overrides the config file)
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Start with randomized updates disabled
    #[arg(long)]
    paused: bool,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let args = Args::parse();

    let config = config::load(args.config.as_deref())?;

    let mut gauges = Vec::with_capacity(config.gauges.len());
    for gauge in &config.gauges {
        let mut engine =
            ProgressEngine::new(Color::default(), gauge.stops.clone(), Some(gauge.range))
                .with_context(|| format!("invalid gauge '{}'", gauge.label))?;
        engine.init();
        // Clamp before pushing, so a sloppy config can't trip the range check.
        let initial = gauge.initial.clamp(gauge.range.0, gauge.range.1);
        engine
            .set_progress(initial)
            .with_context(|| format!("invalid initial value for gauge '{}'", gauge.label))?;
        gauges.push(app::Gauge::new(gauge.label.clone(), engine));
    }

    let tick = Duration::from_millis(args.tick_ms.unwrap_or(config.tick_ms));
    log::info!(
        "starting with {} gauge(s), tick {}ms, auto-updates {}",
        gauges.len(),
        tick.as_millis(),
        if args.paused { "off" } else { "on" }
    );
    app::run(gauges, tick, !args.paused)
}
