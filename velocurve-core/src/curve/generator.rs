//! Tanh ramp curve generator
//!
//! Produces an ease-out transition between two values. Sample `i` of `n`
//! sits at `start + tanh(2 * i / n) * (end - start)`, so the curve starts
//! exactly at `start` and settles at `start + tanh(2) * (end - start)`,
//! roughly 96.4% of the way to `end`.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

use libm::tanh;

/// Span of the tanh argument over the whole curve
///
/// Normalized time runs over `[0, SHAPING_SPAN]`, not `[-1, 1]`.
pub const SHAPING_SPAN: f64 = 2.0;

/// Ramp generation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampError {
    /// Point count below 1
    InvalidArgument {
        /// Rejected point count
        point_count: u32,
    },
    /// Fixed-capacity buffer cannot hold every sample
    CapacityExceeded {
        /// Samples the curve needs (`point_count + 1`)
        required: usize,
        /// Samples the buffer can hold
        capacity: usize,
    },
}

impl fmt::Display for RampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RampError::InvalidArgument { point_count } => {
                write!(f, "point count must be at least 1, got {}", point_count)
            }
            RampError::CapacityExceeded { required, capacity } => write!(
                f,
                "ramp needs {} samples but buffer holds {}",
                required, capacity
            ),
        }
    }
}

impl core::error::Error for RampError {}

/// Parameters of a single ramp
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RampSpec {
    start: f64,
    end: f64,
    point_count: u32,
}

impl RampSpec {
    /// Create a ramp spec
    ///
    /// `start` and `end` are taken as-is; descending ramps are fine.
    /// Returns [`RampError::InvalidArgument`] if `point_count` is zero.
    pub fn new(start: f64, end: f64, point_count: u32) -> Result<Self, RampError> {
        if point_count == 0 {
            return Err(RampError::InvalidArgument { point_count });
        }
        Ok(Self {
            start,
            end,
            point_count,
        })
    }

    /// Value the ramp starts at
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Value the ramp heads toward (never reached exactly)
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Number of steps between first and last sample
    pub fn point_count(&self) -> u32 {
        self.point_count
    }

    /// Number of samples in the generated curve
    ///
    /// `None` if the count does not fit in `usize` (possible on 32-bit
    /// targets with `point_count == u32::MAX`).
    pub fn sample_count(&self) -> Option<usize> {
        usize::try_from(self.point_count)
            .ok()
            .and_then(|n| n.checked_add(1))
    }

    /// Final value of the generated curve
    pub fn asymptote(&self) -> f64 {
        self.value_at(1.0)
    }

    /// Generate the curve
    pub fn generate(&self) -> RampCurve {
        let step = 1.0 / self.point_count as f64;
        let values = (0..=self.point_count)
            .map(|i| self.value_at(i as f64 * step))
            .collect();
        RampCurve { values }
    }

    /// Generate the curve into a fixed-capacity buffer
    ///
    /// For callers without a heap. Fails rather than truncating when `N`
    /// is smaller than [`sample_count`](Self::sample_count). A count that
    /// overflows `usize` is reported as `required: usize::MAX`.
    pub fn generate_fixed<const N: usize>(&self) -> Result<heapless::Vec<f64, N>, RampError> {
        let required = self.sample_count().unwrap_or(usize::MAX);
        if required > N {
            return Err(RampError::CapacityExceeded {
                required,
                capacity: N,
            });
        }

        let step = 1.0 / self.point_count as f64;
        let mut values = heapless::Vec::new();
        for i in 0..=self.point_count {
            values
                .push(self.value_at(i as f64 * step))
                .map_err(|_| RampError::CapacityExceeded {
                    required,
                    capacity: N,
                })?;
        }
        Ok(values)
    }

    /// Curve value at fraction `t` in `[0, 1]`
    fn value_at(&self, t: f64) -> f64 {
        let range = self.end - self.start;
        let normalized_time = t * SHAPING_SPAN;
        self.start + tanh(normalized_time) * range
    }
}

/// Generate a tanh ramp from `start` toward `end`
///
/// Returns `point_count + 1` samples, or [`RampError::InvalidArgument`]
/// when `point_count` is zero.
pub fn generate(start: f64, end: f64, point_count: u32) -> Result<RampCurve, RampError> {
    RampSpec::new(start, end, point_count).map(|spec| spec.generate())
}

/// Generated ramp samples, in order
///
/// Always holds at least two samples.
#[derive(Debug, Clone, PartialEq)]
pub struct RampCurve {
    values: Vec<f64>,
}

impl RampCurve {
    /// Samples as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// First sample (always the ramp's start value)
    pub fn start_value(&self) -> f64 {
        self.values[0]
    }

    /// Last sample
    pub fn final_value(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Take ownership of the samples
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl Deref for RampCurve {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl IntoIterator for RampCurve {
    type Item = f64;
    type IntoIter = alloc::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a RampCurve {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
