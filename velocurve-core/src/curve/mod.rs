//! Ramp curve generation
//!
//! Tanh-shaped transitions between two scalar values.

pub mod generator;

pub use generator::{generate, RampCurve, RampError, RampSpec, SHAPING_SPAN};
