use tracing::trace;

use crate::geometry::Line;
use crate::math::slope_2d::is_parallel;
use crate::math::{approx_eq, Point2};

use super::Intersection;

/// Computes the intersection of two infinite lines.
pub struct LineLineIntersect<'a> {
    first: &'a Line,
    second: &'a Line,
}

impl<'a> LineLineIntersect<'a> {
    /// Creates a new `LineLineIntersect` query.
    #[must_use]
    pub fn new(first: &'a Line, second: &'a Line) -> Self {
        Self { first, second }
    }

    /// Executes the query.
    ///
    /// Returns `Identical` for coincident lines, `None` for distinct parallel
    /// lines and a single point otherwise.
    #[must_use]
    pub fn execute(&self) -> Intersection {
        let (a, b) = (self.first, self.second);
        let (slope_a, slope_b) = (a.slope(), b.slope());

        match (slope_a.is_infinite(), slope_b.is_infinite()) {
            (true, true) => {
                if approx_eq(a.start().x, b.start().x) {
                    trace!(x = a.start().x, "coincident vertical lines");
                    Intersection::Identical
                } else {
                    Intersection::None
                }
            }
            (true, false) => point_on(b, a.start().x),
            (false, true) => point_on(a, b.start().x),
            (false, false) => {
                if is_parallel(slope_a, slope_b) {
                    // Checked both ways so the answer does not depend on argument order.
                    if approx_eq(a.start().y, b.y_at_x(a.start().x))
                        && approx_eq(b.start().y, a.y_at_x(b.start().x))
                    {
                        trace!(slope = slope_a, "coincident lines");
                        Intersection::Identical
                    } else {
                        Intersection::None
                    }
                } else {
                    let x = (b.intercept() - a.intercept()) / (slope_a - slope_b);
                    point_on(a, x)
                }
            }
        }
    }
}

/// The point of the non-vertical `line` at `x`.
fn point_on(line: &Line, x: f64) -> Intersection {
    Intersection::from_points([Point2::new(x, line.y_at_x(x))])
}
