//! # Nolat Toolkit
//!
//! A small collection of math and random helpers for games and simulations.
//!
//! ## Overview
//!
//! - **Geometry**: [`Vector2`], an immutable 2D float pair with arithmetic
//! - **Color**: [`Color`], an RGBA record of 8-bit channels
//! - **Math**: interpolation, angle conversion and the common `PI` fractions
//! - **Random**: [`Toolkit`], random ranges, colors and angles drawn from a
//!   generator the caller owns
//!
//! Every helper is total: no operation panics for finite float input. The only
//! fallible entry points are parsers such as [`Color::from_hex`].
//!
//! ```
//! use nolat_toolkit::{lerp, Toolkit, Vector2};
//!
//! let mut toolkit = Toolkit::seeded(7);
//! let speed = toolkit.random_range(1.0, 5.0);
//! let heading = toolkit.random_angle_as_vector2();
//! let velocity = heading.scale(speed);
//!
//! assert!(velocity.length() <= 5.0 + 1e-4);
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(Vector2::UP.normalize(), Vector2::UP);
//! ```

pub mod color;
pub mod geometry;
pub mod utils;

pub use color::*;
pub use geometry::*;
pub use utils::*;

/// Core error type for the toolkit.
#[derive(thiserror::Error, Debug)]
pub enum ToolkitError {
    /// A color string could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type used throughout the toolkit.
pub type ToolkitResult<T> = Result<T, ToolkitError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Toolkit configuration constants.
pub mod config {
    /// Largest value a color channel can hold
    pub const CHANNEL_MAX: u8 = u8::MAX;

    /// Tolerance used by approximate float comparisons
    pub const DEFAULT_EPSILON: f32 = 5e-5;
}
