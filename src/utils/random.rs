//! # Random Helpers
//!
//! Random ranges, colors and angles drawn from a generator owned by a
//! [`Toolkit`].
//!
//! There is no hidden global generator. Each toolkit owns its source, so
//! seeding one makes every draw reproducible, and threads that need randomness
//! simply hold their own toolkit (see [`Toolkit::thread_local`]).

use crate::config::CHANNEL_MAX;
use crate::utils::math::{angle_to_vector2, TWO_PI};
use crate::{Color, Vector2};
use log::{debug, trace};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Random helper functions bound to a single generator.
///
/// # Examples
///
/// ```
/// use nolat_toolkit::Toolkit;
///
/// let mut a = Toolkit::seeded(99);
/// let mut b = Toolkit::seeded(99);
/// assert_eq!(a.random_range_int(0, 9), b.random_range_int(0, 9));
///
/// let color = a.random_color(true);
/// let angle = a.random_angle();
/// assert!((0.0..std::f32::consts::TAU).contains(&angle));
/// # let _ = color;
/// ```
#[derive(Debug, Clone)]
pub struct Toolkit<R = StdRng> {
    rng: R,
}

impl Toolkit<StdRng> {
    /// Creates a toolkit seeded from operating system entropy.
    pub fn new() -> Self {
        debug!("Creating toolkit from entropy");
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates a toolkit whose draws are fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        debug!("Creating toolkit with seed: {}", seed);
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Toolkit<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolkit<ThreadRng> {
    /// Creates a toolkit backed by this thread's generator.
    ///
    /// `ThreadRng` is not `Send`, so the toolkit stays on the thread that
    /// created it.
    pub fn thread_local() -> Self {
        Self::from_rng(rand::thread_rng())
    }
}

impl<R: Rng> Toolkit<R> {
    /// Wraps an existing generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// The generator this toolkit draws from.
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Consumes the toolkit and returns its generator.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Draws a float between `min` and `max`.
    ///
    /// The result includes `min` and approaches `max`; it is kept inside
    /// `[min, max]` even when rounding to `f32` would step past `max`. When
    /// `min > max` the value falls between the two bounds in reverse.
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        let draw: f64 = self.rng.gen();
        let value = (draw * (f64::from(max) - f64::from(min)) + f64::from(min)) as f32;

        if min <= max && value > max {
            trace!("Draw {} rounded past {}, clamping", value, max);
            max
        } else if min <= max && value < min {
            min
        } else {
            value
        }
    }

    /// Draws an integer uniformly from `min..=max`.
    ///
    /// Bounds given in the wrong order are swapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use nolat_toolkit::Toolkit;
    ///
    /// let mut toolkit = Toolkit::seeded(1);
    /// let roll = toolkit.random_range_int(1, 6);
    /// assert!((1..=6).contains(&roll));
    /// assert_eq!(toolkit.random_range_int(4, 4), 4);
    /// ```
    pub fn random_range_int(&mut self, min: i32, max: i32) -> i32 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        let span = i64::from(high) - i64::from(low) + 1;

        let draw: f64 = self.rng.gen();
        let offset = (draw * span as f64) as i64;

        // The scaled draw can round up to `span` itself
        (i64::from(low) + offset).min(i64::from(high)) as i32
    }

    /// Draws a color with independent, uniform channels.
    ///
    /// Four channels are always drawn so the sequence of draws does not depend
    /// on `include_alpha`; without it the alpha draw is discarded and the color
    /// is opaque.
    pub fn random_color(&mut self, include_alpha: bool) -> Color {
        let r = self.random_channel();
        let g = self.random_channel();
        let b = self.random_channel();
        let a = self.random_channel();

        if include_alpha {
            Color::rgba(r, g, b, a)
        } else {
            Color::rgb(r, g, b)
        }
    }

    /// Draws an opaque color.
    pub fn random_opaque_color(&mut self) -> Color {
        self.random_color(false)
    }

    /// Draws an angle in radians from `[0, TWO_PI)`.
    pub fn random_angle(&mut self) -> f32 {
        let angle = self.random_range(0.0, TWO_PI);
        if angle >= TWO_PI {
            0.0
        } else {
            angle
        }
    }

    /// Draws a random angle and returns it as a unit direction.
    pub fn random_angle_as_vector2(&mut self) -> Vector2 {
        angle_to_vector2(self.random_angle())
    }

    fn random_channel(&mut self) -> u8 {
        self.random_range_int(0, i32::from(CHANNEL_MAX)) as u8
    }
}
