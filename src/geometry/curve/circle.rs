use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::distance_2d::distance;
use crate::math::{approx_eq, ensure_finite, round2, Point2};

use super::Curve;

/// A circle in the XY plane, defined by its center and a positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the center or radius is not finite, or the radius
    /// is not positive.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        ensure_finite(&center, "circle center")?;
        if !radius.is_finite() {
            return Err(GeometryError::NonFinite {
                parameter: "circle radius",
                value: radius,
            }
            .into());
        }
        if radius <= 0.0 || approx_eq(radius, 0.0) {
            return Err(GeometryError::InvalidInput(format!(
                "circle radius must be positive, got {radius}"
            ))
            .into());
        }
        Ok(Self { center, radius })
    }

    /// Creates a circle around `center` passing through `radius_point`.
    ///
    /// # Errors
    ///
    /// Returns an error if either point is not finite or the two points coincide.
    pub fn through(center: Point2, radius_point: Point2) -> Result<Self> {
        ensure_finite(&radius_point, "circle radius point")?;
        Self::new(center, distance(&center, &radius_point))
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Curve for Circle {
    fn contains(&self, point: &Point2) -> bool {
        approx_eq(distance(&self.center, point), self.radius)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x: {}, y: {}, radius: {}",
            round2(self.center.x),
            round2(self.center.y),
            round2(self.radius)
        )
    }
}
