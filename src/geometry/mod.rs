//! # Geometry Module
//!
//! Plain value types for positions and directions in 2D space.

pub mod vector2;

pub use vector2::*;
