//! # Utilities Module
//!
//! Interpolation, angle conversion and random helpers.

pub mod math;
pub mod random;

pub use math::*;
pub use random::*;
