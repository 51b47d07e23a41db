mod all_intersections;
mod circle_circle;
mod intersect;
mod line_circle;
mod line_line;

pub use all_intersections::{intersection_points, AllIntersections, SceneIntersection, ShapePair};
pub use circle_circle::CircleCircleIntersect;
pub use intersect::Intersection;
pub use line_circle::LineCircleIntersect;
pub use line_line::LineLineIntersect;
