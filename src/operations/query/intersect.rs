use crate::math::Point2;

/// Outcome of intersecting two shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection {
    /// The shapes do not meet.
    None,
    /// The shapes coincide, so every point of one lies on the other.
    Identical,
    /// One or two finite intersection points.
    Points(Vec<Point2>),
}

impl Intersection {
    /// Builds a result from candidate points, dropping non-finite ones.
    ///
    /// An empty candidate list becomes [`Intersection::None`].
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point2>) -> Self {
        let points: Vec<Point2> = points
            .into_iter()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .collect();
        if points.is_empty() {
            Self::None
        } else {
            Self::Points(points)
        }
    }

    /// Returns the intersection points (empty for `None` and `Identical`).
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        match self {
            Self::Points(points) => points.as_slice(),
            Self::None | Self::Identical => &[],
        }
    }

    /// Number of discrete intersection points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points().len()
    }

    /// Returns `true` if there are no discrete intersection points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// Returns `true` if the shapes do not meet.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if the shapes coincide.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        matches!(self, Self::Identical)
    }
}
