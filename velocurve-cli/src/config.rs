//! Configuration loading
//!
//! Reads the TOML config named on the command line, or `velocurve.toml`
//! in the working directory. Falls back to built-in defaults when no file
//! was named and none exists.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use velocurve_core::config::{RampConfig, SequencerConfig};
use velocurve_core::{RampError, RampSpec};

use crate::cli::Args;

/// Config file looked up when none is named
pub const DEFAULT_CONFIG_PATH: &str = "velocurve.toml";

/// Default plot data header
pub const DEFAULT_TITLE: &str = "Tanh Curve for Velocity Transition";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid ramp: {0}")]
    Ramp(#[from] RampError),
}

/// Layout of the plot data rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `<index> <value>`
    #[default]
    Index,
    /// `<elapsed_us> <value>`
    Timeline,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
    pub title: String,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            title: DEFAULT_TITLE.to_string(),
            format: OutputFormat::Index,
        }
    }
}

/// Complete tool configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub ramp: RampConfig,
    pub sequencer: SequencerConfig,
    pub output: OutputConfig,
}

impl FileConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Load configuration
    ///
    /// A named `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// used if present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    info!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
                    return Ok(Self::default());
                }
                default
            }
        };

        info!("Loading configuration from {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes of TOML", text.len());

        let config = Self::from_toml_str(&text)?;
        config.log_summary();
        Ok(config)
    }

    /// Apply command line overrides
    pub fn apply_overrides(&mut self, args: &Args) {
        if let Some(start) = args.start {
            self.ramp.start = start;
        }
        if let Some(end) = args.end {
            self.ramp.end = end;
        }
        if let Some(points) = args.points {
            self.ramp.points = points;
        }
        if let Some(tick_us) = args.tick_us {
            self.sequencer.tick_us = tick_us;
        }
        if let Some(output) = &args.output {
            self.output.path = Some(output.clone());
        }
        if let Some(title) = &args.title {
            self.output.title = title.clone();
        }
        if let Some(format) = args.format {
            self.output.format = format;
        }
    }

    /// Validated ramp spec
    pub fn spec(&self) -> Result<RampSpec, ConfigError> {
        Ok(self.ramp.spec()?)
    }

    fn log_summary(&self) {
        debug!(
            "  ramp {} -> {} over {} steps",
            self.ramp.start, self.ramp.end, self.ramp.points
        );
        debug!("  tick {}us", self.sequencer.tick_us);
        debug!("  output format {:?}", self.output.format);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_full_config() {
        let config = FileConfig::from_toml_str(
            r#"
            [ramp]
            start = 5.0
            end = -10.0
            points = 40

            [sequencer]
            tick_us = 1250

            [output]
            path = "velocities.dat"
            title = "Descent"
            format = "timeline"
            "#,
        )
        .unwrap();

        assert_eq!(config.ramp.start, 5.0);
        assert_eq!(config.ramp.end, -10.0);
        assert_eq!(config.ramp.points, 40);
        assert_eq!(config.sequencer.tick_us, 1250);
        assert_eq!(config.output.path, Some(PathBuf::from("velocities.dat")));
        assert_eq!(config.output.title, "Descent");
        assert_eq!(config.output.format, OutputFormat::Timeline);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = FileConfig::from_toml_str("[ramp]\npoints = 25\n").unwrap();
        assert_eq!(config.ramp.start, 0.0);
        assert_eq!(config.ramp.end, -30.0);
        assert_eq!(config.ramp.points, 25);
        assert_eq!(config.sequencer, SequencerConfig::default());
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(FileConfig::from_toml_str("").unwrap(), FileConfig::default());
    }

    #[test]
    fn rejects_bad_toml() {
        let err = FileConfig::from_toml_str("[ramp]\npoints = \"many\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(FileConfig::from_toml_str("[output]\nformat = \"svg\"\n").is_err());
    }

    #[test]
    fn zero_points_is_invalid_ramp() {
        let config = FileConfig::from_toml_str("[ramp]\npoints = 0\n").unwrap();
        assert!(matches!(
            config.spec(),
            Err(ConfigError::Ramp(RampError::InvalidArgument { point_count: 0 }))
        ));
    }

    #[test]
    fn named_missing_file_is_error() {
        let err = FileConfig::load(Some(Path::new("does/not/exist.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = FileConfig::default();
        let args = Args::try_parse_from([
            "velocurve",
            "--end",
            "-12",
            "--points",
            "4",
            "--tick-us",
            "500",
            "--output",
            "out.dat",
            "--format",
            "timeline",
        ])
        .unwrap();

        config.apply_overrides(&args);

        assert_eq!(config.ramp.start, 0.0);
        assert_eq!(config.ramp.end, -12.0);
        assert_eq!(config.ramp.points, 4);
        assert_eq!(config.sequencer.tick_us, 500);
        assert_eq!(config.output.path, Some(PathBuf::from("out.dat")));
        assert_eq!(config.output.title, DEFAULT_TITLE);
        assert_eq!(config.output.format, OutputFormat::Timeline);
    }

    #[test]
    fn format_override_restores_index() {
        let mut config = FileConfig::from_toml_str("[output]\nformat = \"timeline\"\n").unwrap();
        let args = Args::try_parse_from(["velocurve", "--format", "index"]).unwrap();

        config.apply_overrides(&args);

        assert_eq!(config.output.format, OutputFormat::Index);
    }

    #[test]
    fn no_format_flag_keeps_file_format() {
        let mut config = FileConfig::from_toml_str("[output]\nformat = \"timeline\"\n").unwrap();
        let args = Args::try_parse_from(["velocurve"]).unwrap();

        config.apply_overrides(&args);

        assert_eq!(config.output.format, OutputFormat::Timeline);
    }
}
