//! Configuration type definitions
//!
//! With the `serde` feature, every table accepts missing keys and fills
//! them from the defaults below.

use crate::curve::{RampError, RampSpec};
use crate::motion::DEFAULT_TICK_US;

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Default ramp start velocity
pub const DEFAULT_START: f64 = 0.0;

/// Default ramp end velocity
pub const DEFAULT_END: f64 = -30.0;

/// Default number of ramp steps
pub const DEFAULT_POINTS: u32 = 10;

/// Ramp parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RampConfig {
    /// Starting velocity
    pub start: f64,
    /// Velocity the ramp heads toward
    pub end: f64,
    /// Steps between first and last sample
    pub points: u32,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
            points: DEFAULT_POINTS,
        }
    }
}

impl RampConfig {
    /// Validate into a ramp spec
    pub fn spec(&self) -> Result<RampSpec, RampError> {
        RampSpec::new(self.start, self.end, self.points)
    }
}

/// Sequencer timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SequencerConfig {
    /// Control loop period in microseconds
    pub tick_us: u32,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            tick_us: DEFAULT_TICK_US,
        }
    }
}
