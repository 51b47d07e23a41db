pub mod distance_2d;
pub mod quadratic;
pub mod slope_2d;

use crate::error::{GeometryError, Result};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-6;

/// Returns `true` if `a` and `b` differ by less than [`TOLERANCE`].
///
/// Infinite or NaN operands never compare equal.
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// Truncates `value` to at most two decimal places (toward zero).
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).trunc() / 100.0
}

/// Checks that both coordinates of `point` are finite.
///
/// # Errors
///
/// Returns `GeometryError::NonFinite` naming the offending coordinate.
pub fn ensure_finite(point: &Point2, name: &'static str) -> Result<()> {
    for value in [point.x, point.y] {
        if !value.is_finite() {
            return Err(GeometryError::NonFinite {
                parameter: name,
                value,
            }
            .into());
        }
    }
    Ok(())
}
