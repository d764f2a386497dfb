//! End-to-end usage of the toolkit through its public API.

use nolat_toolkit::{
    angle_to_vector2, approx_eq, color_lerp, config, lerp, to_radians, Color, Toolkit,
    ToolkitError, ToolkitResult, Vector2, PI, PI_OVER_2, PI_OVER_4, TWO_PI,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_compass_directions() {
    let cases = [
        (0.0, Vector2::UP),
        (90.0, Vector2::RIGHT),
        (180.0, Vector2::DOWN),
        (270.0, Vector2::LEFT),
    ];

    for (degrees, expected) in cases {
        let actual = angle_to_vector2(to_radians(degrees));
        assert!(
            approx_eq(actual.x, expected.x, 1e-6) && approx_eq(actual.y, expected.y, 1e-6),
            "{} degrees gave {}, expected {}",
            degrees,
            actual,
            expected
        );
    }
}

#[test]
fn test_lerp_table() {
    let table = [(0.0, -100.0), (0.1, -80.0), (0.5, 0.0), (0.9, 80.0), (1.0, 100.0)];
    for (amount, expected) in table {
        assert!(approx_eq(lerp(-100.0, 100.0, amount), expected, config::DEFAULT_EPSILON));
    }
}

#[test]
fn test_color_blend() {
    let blended = color_lerp(Color::rgb(255, 0, 0), Color::rgb(0, 255, 0), 0.5);
    assert_eq!(blended, Color::rgb(128, 128, 0));
}

#[test]
fn test_pi_constants() {
    assert!(approx_eq(PI, std::f32::consts::PI, 0.0));
    assert!(approx_eq(PI_OVER_2, PI / 2.0, 1e-7));
    assert!(approx_eq(PI_OVER_4, PI / 4.0, 1e-7));
    assert!(approx_eq(TWO_PI, PI * 2.0, 1e-7));
}

#[test]
fn test_simulated_particle_burst() {
    let mut toolkit = Toolkit::seeded(2024);
    let origin = Vector2::new(10.0, -5.0);

    for _ in 0..500 {
        let speed = toolkit.random_range(0.5, 2.0);
        let velocity = toolkit.random_angle_as_vector2().scale(speed);
        let position = origin.add(velocity);

        let distance = position.subtract(origin).length();
        assert!(distance <= 2.0 + 1e-4);
        assert!(distance >= 0.5 - 1e-4);
    }

    // The origin was never mutated by the arithmetic above
    assert_eq!(origin, Vector2::new(10.0, -5.0));
}

#[test]
fn test_random_colors_are_total() {
    let mut toolkit = Toolkit::seeded(77);
    for i in 0..10_000 {
        let color = toolkit.random_color(i % 2 == 0);
        assert_eq!(color.to_array().len(), 4);
    }
}

#[test]
fn test_custom_generator() {
    let mut a = Toolkit::from_rng(StdRng::seed_from_u64(5));
    let mut b = Toolkit::seeded(5);
    assert_eq!(a.random_range_int(0, 1_000_000), b.random_range_int(0, 1_000_000));
}

#[test]
fn test_parse_colors() -> ToolkitResult<()> {
    let from: Color = "#ff0000".parse()?;
    let to = Color::from_hex("0000ff")?;
    assert_eq!(color_lerp(from, to, 0.0), Color::RED);
    assert_eq!(color_lerp(from, to, 1.0), Color::BLUE);

    let err = Color::from_hex("blue").unwrap_err();
    assert!(matches!(err, ToolkitError::InvalidColor(_)));
    assert!(err.to_string().starts_with("Invalid color"));
    Ok(())
}

#[test]
fn test_version_is_set() {
    assert!(!nolat_toolkit::VERSION.is_empty());
}
