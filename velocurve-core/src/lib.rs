//! Board-agnostic core logic for velocity ramps
//!
//! This crate contains everything that does not depend on a host or a
//! specific motor controller:
//!
//! - Tanh-shaped ramp curve generation
//! - Tick-driven sequencing of a generated curve
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod curve;
pub mod motion;

pub use curve::{generate, RampCurve, RampError, RampSpec};
