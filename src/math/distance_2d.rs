use super::{approx_eq, Point2};

/// Euclidean distance between two points.
#[must_use]
pub fn distance(p1: &Point2, p2: &Point2) -> f64 {
    nalgebra::distance(p1, p2)
}

/// Returns `true` if both coordinates of `p` and `q` are within tolerance.
#[must_use]
pub fn points_coincide(p: &Point2, q: &Point2) -> bool {
    approx_eq(p.x, q.x) && approx_eq(p.y, q.y)
}
