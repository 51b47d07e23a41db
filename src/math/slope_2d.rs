//! Slope-intercept form helpers.
//!
//! A line through `p1` and `p2` is described by `y = slope * x + intercept`.
//! Vertical lines have a signed infinite slope; their intercept is meaningless
//! and is never read by the intersection code.

use super::{approx_eq, Point2};

/// Slope of the line through `p1` and `p2`.
///
/// Equal x-coordinates yield `±inf` (or NaN for identical points).
#[must_use]
pub fn slope(p1: &Point2, p2: &Point2) -> f64 {
    (p2.y - p1.y) / (p2.x - p1.x)
}

/// Y-axis intercept of the line through `p1` and `p2`.
#[must_use]
pub fn intercept(p1: &Point2, p2: &Point2) -> f64 {
    p1.y - slope(p1, p2) * p1.x
}

/// Returns `true` if two slopes describe parallel lines.
///
/// Any two vertical slopes are parallel, whatever their sign.
#[must_use]
pub fn is_parallel(slope1: f64, slope2: f64) -> bool {
    if slope1.is_infinite() && slope2.is_infinite() {
        return true;
    }
    approx_eq(slope1, slope2)
}

/// Returns `true` if two slopes describe orthogonal lines.
///
/// A vertical and a horizontal line are orthogonal even though the
/// product of their slopes is NaN. The horizontal test is absolute, so a
/// vertical slope is orthogonal to any slope within [`TOLERANCE`](super::TOLERANCE) of zero
/// (e.g. `1e-7`).
#[must_use]
pub fn is_orthogonal(slope1: f64, slope2: f64) -> bool {
    if slope1.is_infinite() {
        return approx_eq(slope2, 0.0);
    }
    if slope2.is_infinite() {
        return approx_eq(slope1, 0.0);
    }
    approx_eq(slope1 * slope2, -1.0)
}
