pub mod distance_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for exact-coordinate comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Slack allowed when comparing a point's wall clearance against the
/// requested offset.
pub const BOUNDARY_TOLERANCE: f64 = 1e-8;

/// Rounds `value` to `decimals` decimal places, half away from zero.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let scaled = value * scale;
    // Past ~15 significant digits there is nothing left to round.
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / scale;
    // Avoid emitting `-0.0` for tiny negative values.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_two_places() {
        assert!((round_to(1.234_56, 2) - 1.23).abs() < TOLERANCE);
        assert!((round_to(1.235_1, 2) - 1.24).abs() < TOLERANCE);
        assert!((round_to(-2.071, 1) + 2.1).abs() < TOLERANCE);
    }

    #[test]
    fn round_to_zero_places() {
        assert!((round_to(2.5, 0) - 3.0).abs() < TOLERANCE);
        assert!((round_to(7.0, 0) - 7.0).abs() < TOLERANCE);
    }

    #[test]
    fn round_to_huge_precision_keeps_value() {
        assert!((round_to(30.0, 308) - 30.0).abs() < TOLERANCE);
        assert!((round_to(0.6, 400) - 0.6).abs() < TOLERANCE);
        assert!(round_to(29.4, 307).is_finite());
    }

    #[test]
    fn round_to_drops_negative_zero() {
        let r = round_to(-0.000_1, 2);
        assert!(r.is_sign_positive(), "r={r}");
    }
}
