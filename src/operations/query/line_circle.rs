use tracing::trace;

use crate::geometry::{Circle, Line};
use crate::math::distance_2d::points_coincide;
use crate::math::quadratic::{discriminant_sign, quadratic_roots, RootCount};
use crate::math::Point2;

use super::Intersection;

/// Computes the intersection of an infinite line with a circle.
///
/// The result holds zero, one (tangent) or two points and is never
/// [`Intersection::Identical`].
pub struct LineCircleIntersect<'a> {
    line: &'a Line,
    circle: &'a Circle,
}

impl<'a> LineCircleIntersect<'a> {
    /// Creates a new `LineCircleIntersect` query.
    #[must_use]
    pub fn new(line: &'a Line, circle: &'a Circle) -> Self {
        Self { line, circle }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Intersection {
        let center = self.circle.center();
        let (cx, cy) = (center.x, center.y);
        let r = self.circle.radius();

        if self.line.is_vertical() {
            // x is fixed: (x - cx)² + (y - cy)² = r² is a quadratic in y.
            let x = self.line.start().x;
            let a = 1.0;
            let b = -2.0 * cy;
            let c = x * x - 2.0 * x * cx + cx * cx + cy * cy - r * r;
            return solve(a, b, c, |y| Point2::new(x, y));
        }

        // Substitute y = mx + k into the circle equation.
        let m = self.line.slope();
        let k = self.line.intercept();
        let a = 1.0 + m * m;
        let b = -2.0 * cx + 2.0 * k * m - 2.0 * cy * m;
        let c = cx * cx + cy * cy - 2.0 * cy * k + k * k - r * r;
        solve(a, b, c, |x| Point2::new(x, self.line.y_at_x(x)))
    }
}

/// Solves `a t² + b t + c = 0` and maps each root to a point.
fn solve(a: f64, b: f64, c: f64, point_at: impl Fn(f64) -> Point2) -> Intersection {
    if a.is_nan() || b.is_nan() || c.is_nan() {
        trace!(a, b, c, "NaN coefficient in line-circle quadratic");
        return Intersection::None;
    }
    if discriminant_sign(a, b, c) == RootCount::Zero {
        return Intersection::None;
    }
    let Some((root1, root2)) = quadratic_roots(a, b, c) else {
        return Intersection::None;
    };

    let first = point_at(root1);
    let second = point_at(root2);
    if points_coincide(&first, &second) {
        Intersection::from_points([first])
    } else {
        Intersection::from_points([first, second])
    }
}
