use tracing::debug;

use crate::math::Point2;
use crate::scene::{CircleId, LineId, Scene};

use super::{CircleCircleIntersect, Intersection, LineCircleIntersect, LineLineIntersect};

/// The pair of shapes an intersection was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapePair {
    LineLine(LineId, LineId),
    LineCircle(LineId, CircleId),
    CircleCircle(CircleId, CircleId),
}

/// A non-empty intersection result between two scene shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneIntersection {
    /// The shapes involved.
    pub pair: ShapePair,
    /// Either `Identical` or one or two points.
    pub result: Intersection,
}

/// Intersects every pair of shapes in a scene.
///
/// Visits each unordered pair of lines, each (line, circle) pair and each
/// unordered pair of circles once, keeping only pairs that meet.
#[derive(Debug, Default)]
pub struct AllIntersections;

impl AllIntersections {
    /// Creates a new `AllIntersections` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self, scene: &Scene) -> Vec<SceneIntersection> {
        let lines: Vec<_> = scene.lines().collect();
        let circles: Vec<_> = scene.circles().collect();
        let mut found = Vec::new();

        for (i, &(id_a, line_a)) in lines.iter().enumerate() {
            for &(id_b, line_b) in &lines[i + 1..] {
                push(
                    &mut found,
                    ShapePair::LineLine(id_a, id_b),
                    LineLineIntersect::new(line_a, line_b).execute(),
                );
            }
            for &(id_c, circle) in &circles {
                push(
                    &mut found,
                    ShapePair::LineCircle(id_a, id_c),
                    LineCircleIntersect::new(line_a, circle).execute(),
                );
            }
        }

        for (i, &(id_a, circle_a)) in circles.iter().enumerate() {
            for &(id_b, circle_b) in &circles[i + 1..] {
                push(
                    &mut found,
                    ShapePair::CircleCircle(id_a, id_b),
                    CircleCircleIntersect::new(circle_a, circle_b).execute(),
                );
            }
        }

        debug!(
            lines = lines.len(),
            circles = circles.len(),
            hits = found.len(),
            "scene intersection sweep"
        );
        found
    }
}

fn push(found: &mut Vec<SceneIntersection>, pair: ShapePair, result: Intersection) {
    if !result.is_none() {
        found.push(SceneIntersection { pair, result });
    }
}

/// Flattens scene intersections into their discrete points.
///
/// Identical pairs have no discrete points and contribute nothing.
#[must_use]
pub fn intersection_points(found: &[SceneIntersection]) -> Vec<Point2> {
    found
        .iter()
        .flat_map(|hit| hit.result.points().iter().copied())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Line};

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line::new(Point2::new(x1, y1), Point2::new(x2, y2)).unwrap()
    }

    #[test]
    fn empty_scene_has_no_hits() {
        assert!(AllIntersections::new().execute(&Scene::new()).is_empty());
    }

    #[test]
    fn single_shape_has_no_hits() {
        let mut scene = Scene::new();
        scene.add_circle(Circle::new(Point2::origin(), 1.0).unwrap());
        assert!(AllIntersections::new().execute(&scene).is_empty());
    }

    #[test]
    fn mixed_scene() {
        let mut scene = Scene::new();
        let x_axis = scene.add_line(line(-1.0, 0.0, 1.0, 0.0));
        let y_axis = scene.add_line(line(0.0, -1.0, 0.0, 1.0));
        let far = scene.add_line(line(0.0, 100.0, 1.0, 100.0));
        let c1 = scene.add_circle(Circle::new(Point2::origin(), 5.0).unwrap());
        let c2 = scene.add_circle(Circle::new(Point2::new(10.0, 0.0), 5.0).unwrap());

        let found = AllIntersections::new().execute(&scene);
        let pairs: Vec<ShapePair> = found.iter().map(|hit| hit.pair).collect();

        assert!(pairs.contains(&ShapePair::LineLine(x_axis, y_axis)));
        assert!(pairs.contains(&ShapePair::LineLine(y_axis, far)));
        assert!(!pairs.contains(&ShapePair::LineLine(x_axis, far)));
        assert!(pairs.contains(&ShapePair::LineCircle(x_axis, c1)));
        assert!(pairs.contains(&ShapePair::LineCircle(x_axis, c2)));
        assert!(pairs.contains(&ShapePair::LineCircle(y_axis, c1)));
        assert!(!pairs.contains(&ShapePair::LineCircle(y_axis, c2)));
        assert!(!pairs.iter().any(|p| matches!(p, ShapePair::LineCircle(l, _) if *l == far)));
        assert!(pairs.contains(&ShapePair::CircleCircle(c1, c2)));

        // 1 + 1 line-line, 2 + 2 + 2 line-circle, 1 tangent circle-circle.
        assert_eq!(intersection_points(&found).len(), 9);
    }

    #[test]
    fn identical_pairs_are_reported_without_points() {
        let mut scene = Scene::new();
        scene.add_line(line(0.0, 0.0, 1.0, 1.0));
        scene.add_line(line(2.0, 2.0, 3.0, 3.0));
        let found = AllIntersections::new().execute(&scene);
        assert_eq!(found.len(), 1);
        assert!(found[0].result.is_identical());
        assert!(intersection_points(&found).is_empty());
    }
}
