use tracing::{debug, trace};

use crate::geometry::{Circle, Line};
use crate::math::distance_2d::points_coincide;
use crate::math::approx_eq;

use super::{Intersection, LineCircleIntersect};

/// Computes the intersection of two circles.
///
/// The points are found by intersecting the radical line (the difference of
/// the two circle equations) with the first circle.
pub struct CircleCircleIntersect<'a> {
    first: &'a Circle,
    second: &'a Circle,
}

impl<'a> CircleCircleIntersect<'a> {
    /// Creates a new `CircleCircleIntersect` query.
    #[must_use]
    pub fn new(first: &'a Circle, second: &'a Circle) -> Self {
        Self { first, second }
    }

    /// Executes the query.
    ///
    /// Returns `Identical` for equal circles, `None` for disjoint or
    /// concentric circles and one (tangent) or two points otherwise.
    #[must_use]
    pub fn execute(&self) -> Intersection {
        let (c1, c2) = (self.first.center(), self.second.center());
        let (r1, r2) = (self.first.radius(), self.second.radius());

        if points_coincide(c1, c2) {
            if approx_eq(r1, r2) {
                trace!(x = c1.x, y = c1.y, r = r1, "identical circles");
                return Intersection::Identical;
            }
            return Intersection::None;
        }

        let Some(radical) = self.radical_line() else {
            return Intersection::None;
        };
        LineCircleIntersect::new(&radical, self.first).execute()
    }

    /// Builds the line through the common points of both circles.
    ///
    /// Subtracting the circle equations gives
    /// `2(x2 - x1) x + 2(y2 - y1) y = x2² + y2² - r2² - x1² - y1² + r1²`.
    fn radical_line(&self) -> Option<Line> {
        let (c1, c2) = (self.first.center(), self.second.center());
        let (x1, y1, r1) = (c1.x, c1.y, self.first.radius());
        let (x2, y2, r2) = (c2.x, c2.y, self.second.radius());
        let power1 = x1 * x1 + y1 * y1 - r1 * r1;
        let power2 = x2 * x2 + y2 * y2 - r2 * r2;

        let dy = 2.0 * y1 - 2.0 * y2;
        let line = if approx_eq(dy, 0.0) {
            // Centers share a y-coordinate: the radical line is vertical.
            let x = (power2 - power1) / (2.0 * x2 - 2.0 * x1);
            Line::vertical(x)
        } else {
            let m = (2.0 * x2 - 2.0 * x1) / dy;
            let b = (power1 - power2) / dy;
            Line::from_slope_intercept(m, b)
        };

        match line {
            Ok(line) => Some(line),
            Err(err) => {
                debug!(%err, "radical line is not constructible");
                None
            }
        }
    }
}
