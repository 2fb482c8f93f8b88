//! Ramp sequencing
//!
//! Steps through a generated curve one setpoint per control tick.

pub mod sequencer;

pub use sequencer::{RampSequencer, RampState, DEFAULT_TICK_US};
