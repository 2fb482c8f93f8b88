//! velocurve - tanh velocity ramp tool
//!
//! Generates an ease-out velocity ramp from a TOML config and command line
//! overrides, then writes it as two-column plot data. Logs go to stderr so
//! stdout can be piped straight into a plotter.

mod cli;
mod config;
mod export;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::config::FileConfig;
use crate::export::write_plot_data;

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();

    let mut config =
        FileConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    config.apply_overrides(&args);

    let spec = config.spec().context("invalid ramp parameters")?;
    let curve = spec.generate();

    info!(
        "Generated {} samples from {} toward {}",
        curve.len(),
        spec.start(),
        spec.end()
    );
    debug!(
        "Ramp settles at {} ({} short of end)",
        curve.final_value(),
        (spec.end() - curve.final_value()).abs()
    );
    if config.sequencer.tick_us == 0 {
        warn!("tick_us is 0, timeline rows will all share one timestamp");
    }

    let title = &config.output.title;
    let format = config.output.format;
    let tick_us = config.sequencer.tick_us;

    match &config.output.path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            let rows = write_plot_data(&mut out, &curve, title, format, tick_us)?;
            out.flush()?;
            info!("Wrote {} rows to {}", rows, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_plot_data(&mut out, &curve, title, format, tick_us)?;
            out.flush()?;
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
