//! Tick-driven ramp sequencer
//!
//! Feeds a generated curve to a velocity loop, one setpoint per tick.

use crate::curve::RampCurve;

/// Default control loop period in microseconds
pub const DEFAULT_TICK_US: u32 = 1100;

/// Current sequencing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampState {
    /// Loaded but not started
    Idle,
    /// Emitting setpoints
    Ramping,
    /// Every setpoint has been emitted
    Complete,
    /// Stopped before the end of the curve
    Aborted,
}

/// Sequencer for a single ramp
///
/// Owns its curve and hands out setpoints in order. Once the curve is
/// exhausted or aborted, no further setpoints are produced until
/// [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct RampSequencer {
    curve: RampCurve,
    /// Index of the next setpoint to emit
    cursor: usize,
    state: RampState,
}

impl RampSequencer {
    /// Create an idle sequencer for `curve`
    pub fn new(curve: RampCurve) -> Self {
        Self {
            curve,
            cursor: 0,
            state: RampState::Idle,
        }
    }

    /// Begin emitting setpoints
    ///
    /// Has no effect unless idle.
    pub fn start(&mut self) {
        if self.state == RampState::Idle {
            self.state = RampState::Ramping;
        }
    }

    /// Emit the setpoint for this tick
    ///
    /// Returns `None` unless ramping. The last setpoint moves the
    /// sequencer to [`RampState::Complete`].
    pub fn next_setpoint(&mut self) -> Option<f64> {
        if self.state != RampState::Ramping {
            return None;
        }

        let value = *self.curve.get(self.cursor)?;
        self.cursor += 1;

        if self.cursor >= self.curve.len() {
            self.state = RampState::Complete;
        }

        Some(value)
    }

    /// Stop immediately
    pub fn abort(&mut self) {
        if self.state != RampState::Complete {
            self.state = RampState::Aborted;
        }
    }

    /// Rewind to the first setpoint and go idle
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.state = RampState::Idle;
    }

    /// Get the current state
    pub fn state(&self) -> RampState {
        self.state
    }

    /// Check if every setpoint has been emitted
    pub fn is_complete(&self) -> bool {
        self.state == RampState::Complete
    }

    /// Number of setpoints already emitted
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of setpoints left to emit
    pub fn remaining(&self) -> usize {
        match self.state {
            RampState::Aborted => 0,
            _ => self.curve.len() - self.cursor,
        }
    }

    /// Velocity the ramp ends on
    pub fn final_value(&self) -> f64 {
        self.curve.final_value()
    }

    /// The curve being sequenced
    pub fn curve(&self) -> &RampCurve {
        &self.curve
    }

    /// Time to emit the remaining setpoints
    ///
    /// Returns time in microseconds
    pub fn time_to_complete_us(&self, tick_us: u32) -> u64 {
        self.remaining() as u64 * tick_us as u64
    }
}
