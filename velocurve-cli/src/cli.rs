use std::path::PathBuf;

use clap::Parser;

use crate::config::OutputFormat;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML (defaults to ./velocurve.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ramp start value (overrides config)
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<f64>,

    /// Ramp end value (overrides config)
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<f64>,

    /// Number of ramp steps; the curve has one more sample than this
    #[arg(long)]
    pub points: Option<u32>,

    /// Control loop period in microseconds (overrides config)
    #[arg(long)]
    pub tick_us: Option<u32>,

    /// Write plot data to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Title written as the plot data header
    #[arg(long)]
    pub title: Option<String>,

    /// Row layout: sample index or elapsed microseconds (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}
