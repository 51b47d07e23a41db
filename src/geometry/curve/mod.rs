mod circle;
mod line;

pub use circle::Circle;
pub use line::Line;

use crate::math::Point2;

/// Trait for unbounded planar curves.
pub trait Curve {
    /// Returns `true` if `point` lies on the curve within tolerance.
    fn contains(&self, point: &Point2) -> bool;
}
