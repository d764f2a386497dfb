//! # Toolkit Mathematics
//!
//! Interpolation and angle helpers shared by the random toolkit and callers.
//!
//! Angles follow a compass convention: `0` points up along +y and increasing
//! angles turn clockwise toward +x.

use crate::{Color, Vector2};

pub const PI: f32 = std::f32::consts::PI;
pub const PI_OVER_2: f32 = std::f32::consts::FRAC_PI_2;
pub const PI_OVER_4: f32 = std::f32::consts::FRAC_PI_4;
pub const TWO_PI: f32 = std::f32::consts::TAU;

/// Linearly interpolates between `value1` and `value2`.
///
/// `amount` is not clamped, so values outside `[0, 1]` extrapolate.
///
/// # Examples
///
/// ```
/// use nolat_toolkit::lerp;
///
/// assert_eq!(lerp(-100.0, 100.0, 0.5), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
/// ```
#[inline]
pub fn lerp(value1: f32, value2: f32, amount: f32) -> f32 {
    value1 + (value2 - value1) * amount
}

/// Interpolates each channel of two colors, alpha included.
///
/// Channels are rounded to the nearest byte and saturate at `0` and `255`
/// when `amount` extrapolates past either color.
///
/// # Examples
///
/// ```
/// use nolat_toolkit::{color_lerp, Color};
///
/// let mixed = color_lerp(Color::rgb(255, 0, 0), Color::rgb(0, 255, 0), 0.5);
/// assert_eq!(mixed, Color::rgb(128, 128, 0));
/// ```
pub fn color_lerp(color1: Color, color2: Color, amount: f32) -> Color {
    let channel = |from: u8, to: u8| -> u8 {
        let value = lerp(f32::from(from), f32::from(to), amount).round();
        // NaN casts to 0
        value.clamp(0.0, 255.0) as u8
    };

    Color::rgba(
        channel(color1.red(), color2.red()),
        channel(color1.green(), color2.green()),
        channel(color1.blue(), color2.blue()),
        channel(color1.alpha(), color2.alpha()),
    )
}

/// Converts degrees to radians.
///
/// The product is taken in `f64` so that a round trip through
/// [`to_degrees`] only loses the final `f32` rounding.
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    f64::from(degrees).to_radians() as f32
}

/// Converts radians to degrees.
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    f64::from(radians).to_degrees() as f32
}

/// Turns an angle in radians into a unit direction vector.
///
/// `0` maps to [`Vector2::UP`] and `PI / 2` to [`Vector2::RIGHT`].
#[inline]
pub fn angle_to_vector2(angle: f32) -> Vector2 {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(sin, cos)
}

/// Compares two floats within an absolute tolerance.
#[inline]
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}
