//! # Vector2
//!
//! A 2D float vector with value semantics.
//!
//! Every operation takes the receiver by value and returns a fresh vector, so
//! the named directions ([`Vector2::UP`] and friends) can be used freely without
//! any risk of being modified in place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A pair of `f32` components.
///
/// Equality is exact component-wise float equality; use
/// [`approx_eq`](crate::approx_eq) on the components when tolerance is needed.
///
/// # Examples
///
/// ```
/// use nolat_toolkit::Vector2;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v.add(Vector2::UP), Vector2::new(3.0, 5.0));
/// assert_eq!(v.to_string(), "[3,4]");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    /// (0, 0)
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);
    /// (0, 1)
    pub const UP: Vector2 = Vector2::new(0.0, 1.0);
    /// (0, -1)
    pub const DOWN: Vector2 = Vector2::new(0.0, -1.0);
    /// (-1, 0)
    pub const LEFT: Vector2 = Vector2::new(-1.0, 0.0);
    /// (1, 0)
    pub const RIGHT: Vector2 = Vector2::new(1.0, 0.0);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length of the vector.
    ///
    /// Skips the square root, which makes it the right choice when only
    /// comparing lengths against each other.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Returns a unit-length vector pointing the same way.
    ///
    /// A zero-length vector normalizes to [`Vector2::ZERO`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nolat_toolkit::Vector2;
    ///
    /// assert_eq!(Vector2::new(0.0, 5.0).normalize(), Vector2::UP);
    /// assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
    /// ```
    pub fn normalize(self) -> Vector2 {
        let length = self.length();
        if length == 0.0 {
            return Vector2::ZERO;
        }
        Vector2::new(self.x / length, self.y / length)
    }

    /// Component-wise sum with another vector.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn add(self, other: Vector2) -> Vector2 {
        self.add_xy(other.x, other.y)
    }

    /// Adds `x` and `y` to the respective components.
    #[inline]
    pub fn add_xy(self, x: f32, y: f32) -> Vector2 {
        Vector2::new(self.x + x, self.y + y)
    }

    /// Component-wise difference with another vector.
    #[inline]
    pub fn subtract(self, other: Vector2) -> Vector2 {
        self.subtract_xy(other.x, other.y)
    }

    /// Subtracts `x` and `y` from the respective components.
    #[inline]
    pub fn subtract_xy(self, x: f32, y: f32) -> Vector2 {
        Vector2::new(self.x - x, self.y - y)
    }

    /// Component-wise product with another vector.
    #[inline]
    pub fn multiply(self, other: Vector2) -> Vector2 {
        self.multiply_xy(other.x, other.y)
    }

    /// Multiplies the components by `x` and `y` respectively.
    #[inline]
    pub fn multiply_xy(self, x: f32, y: f32) -> Vector2 {
        Vector2::new(self.x * x, self.y * y)
    }

    /// Scales both components by `scalar`.
    #[inline]
    pub fn scale(self, scalar: f32) -> Vector2 {
        self.multiply_xy(scalar, scalar)
    }

    /// True when neither component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for (f32, f32) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    #[inline]
    fn add(self, rhs: Vector2) -> Vector2 {
        self.add_xy(rhs.x, rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    #[inline]
    fn sub(self, rhs: Vector2) -> Vector2 {
        self.subtract(rhs)
    }
}

impl Mul for Vector2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        self.multiply(rhs)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: f32) -> Vector2 {
        self.scale(rhs)
    }
}

impl Div<f32> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn div(self, rhs: f32) -> Vector2 {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    #[inline]
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}
