use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::distance_2d::points_coincide;
use crate::math::slope_2d::{intercept, is_orthogonal, is_parallel, slope};
use crate::math::{approx_eq, ensure_finite, round2, Point2};

use super::Curve;

/// An infinite line through two distinct points.
///
/// The slope-intercept form `y = slope * x + intercept` is computed once at
/// construction. Vertical lines carry a signed infinite slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Point2,
    end: Point2,
    slope: f64,
    intercept: f64,
}

impl Line {
    /// Creates a line through `start` and `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite or the two points
    /// coincide within tolerance.
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        ensure_finite(&start, "line start")?;
        ensure_finite(&end, "line end")?;
        if points_coincide(&start, &end) {
            return Err(GeometryError::InvalidInput(format!(
                "zero-length line between ({}, {}) and ({}, {})",
                start.x, start.y, end.x, end.y
            ))
            .into());
        }
        Ok(Self {
            start,
            end,
            slope: slope(&start, &end),
            intercept: intercept(&start, &end),
        })
    }

    /// Creates the vertical line through `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is not finite.
    pub fn vertical(x: f64) -> Result<Self> {
        Self::new(Point2::new(x, 1.0), Point2::new(x, 2.0))
    }

    /// Creates the line `y = m * x + b`.
    ///
    /// # Errors
    ///
    /// Returns an error if `m` or `b` is not finite.
    pub fn from_slope_intercept(m: f64, b: f64) -> Result<Self> {
        Self::new(Point2::new(1.0, m + b), Point2::new(4.0, 4.0 * m + b))
    }

    /// Returns the first defining point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the second defining point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the cached slope (`±inf` for vertical lines).
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns the cached y-axis intercept. Meaningless for vertical lines.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Evaluates `slope * x + intercept`.
    #[must_use]
    pub fn y_at_x(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Returns `true` if the defining points share an x-coordinate within tolerance.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        approx_eq(self.start.x, self.end.x)
    }

    /// Returns `true` if both lines have the same slope within tolerance.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Line) -> bool {
        is_parallel(self.slope, other.slope)
    }

    /// Returns `true` if the lines meet at a right angle.
    #[must_use]
    pub fn is_orthogonal_to(&self, other: &Line) -> bool {
        is_orthogonal(self.slope, other.slope)
    }
}

impl Curve for Line {
    fn contains(&self, point: &Point2) -> bool {
        if self.slope.is_infinite() {
            approx_eq(point.x, self.start.x)
        } else {
            approx_eq(point.y, self.y_at_x(point.x))
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.slope.is_infinite() {
            write!(f, "slope: inf, intercept: none")
        } else {
            write!(
                f,
                "slope: {}, intercept: {}",
                round2(self.slope),
                round2(self.intercept)
            )
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn caches_slope_and_intercept() {
        let line = Line::new(Point2::new(0.0, 1.0), Point2::new(2.0, 5.0)).unwrap();
        assert_abs_diff_eq!(line.slope(), 2.0);
        assert_abs_diff_eq!(line.intercept(), 1.0);
        assert_abs_diff_eq!(line.y_at_x(3.0), 7.0);
    }

    #[test]
    fn vertical_line_is_valid() {
        let line = Line::new(Point2::new(2.0, 0.0), Point2::new(2.0, 5.0)).unwrap();
        assert!(line.slope().is_infinite());
        assert!(line.is_vertical());
        assert!(line.contains(&Point2::new(2.0, -100.0)));
        assert!(!line.contains(&Point2::new(2.1, 0.0)));
    }

    #[test]
    fn coincident_points_rejected() {
        let p = Point2::new(1.0, 1.0);
        assert!(Line::new(p, p).is_err());
        assert!(Line::new(p, Point2::new(1.0 + 1e-9, 1.0)).is_err());
    }

    #[test]
    fn non_finite_rejected() {
        let r = Line::new(Point2::new(f64::NAN, 0.0), Point2::new(1.0, 1.0));
        assert!(r.is_err());
        assert!(Line::vertical(f64::INFINITY).is_err());
    }

    #[test]
    fn slope_intercept_constructor() {
        let line = Line::from_slope_intercept(-1.0, 7.0).unwrap();
        assert_abs_diff_eq!(line.slope(), -1.0);
        assert_abs_diff_eq!(line.intercept(), 7.0);
        assert!(line.contains(&Point2::new(3.0, 4.0)));
    }

    #[test]
    fn vertical_constructor() {
        let line = Line::vertical(5.0).unwrap();
        assert!(line.is_vertical());
        assert_abs_diff_eq!(line.start().x, 5.0);
    }

    #[test]
    fn parallel_and_orthogonal() {
        let a = Line::new(Point2::new(0.0, 0.0), Point2::new(1.0, 2.0)).unwrap();
        let b = Line::new(Point2::new(0.0, 3.0), Point2::new(2.0, 7.0)).unwrap();
        let c = Line::new(Point2::new(0.0, 0.0), Point2::new(2.0, -1.0)).unwrap();
        assert!(a.is_parallel_to(&b));
        assert!(!a.is_parallel_to(&c));
        assert!(a.is_orthogonal_to(&c));
        let horizontal = Line::new(Point2::new(0.0, 1.0), Point2::new(1.0, 1.0)).unwrap();
        assert!(Line::vertical(3.0).unwrap().is_orthogonal_to(&horizontal));
        assert!(Line::vertical(3.0).unwrap().is_parallel_to(&Line::vertical(-2.0).unwrap()));
    }

    #[test]
    fn display_truncates() {
        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(3.0, 1.0)).unwrap();
        assert_eq!(line.to_string(), "slope: 0.33, intercept: 0");
        let vertical = Line::vertical(1.0).unwrap();
        assert_eq!(vertical.to_string(), "slope: inf, intercept: none");
    }

    proptest! {
        #[test]
        fn y_at_x_round_trip(
            a in -1e3..1e3f64, b in -1e3..1e3f64,
            dx in 0.5..1e3f64, d in -1e3..1e3f64,
        ) {
            let c = a + dx;
            let line = Line::new(Point2::new(a, b), Point2::new(c, d)).unwrap();
            prop_assert!((line.y_at_x(a) - b).abs() < 1e-6);
            prop_assert!((line.y_at_x(c) - d).abs() < 1e-6);
        }
    }
}
