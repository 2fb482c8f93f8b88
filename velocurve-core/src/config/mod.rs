//! Configuration types
//!
//! Board-agnostic ramp and sequencing parameters.

pub mod types;

pub use types::*;
