use slotmap::SlotMap;

use crate::error::SceneError;
use crate::geometry::{Circle, Line};

slotmap::new_key_type! {
    /// Unique identifier for a line in a [`Scene`].
    pub struct LineId;
}

slotmap::new_key_type! {
    /// Unique identifier for a circle in a [`Scene`].
    pub struct CircleId;
}

/// Owns the lines and circles currently placed by the caller.
///
/// A scene is an explicit context value. Shapes are addressed by typed
/// generational ids so removals never invalidate other handles.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    lines: SlotMap<LineId, Line>,
    circles: SlotMap<CircleId, Circle>,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Line operations ---

    /// Inserts a line and returns its ID.
    pub fn add_line(&mut self, line: Line) -> LineId {
        self.lines.insert(line)
    }

    /// Returns the line with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not in the scene.
    pub fn line(&self, id: LineId) -> Result<&Line, SceneError> {
        self.lines
            .get(id)
            .ok_or(SceneError::ShapeNotFound("line"))
    }

    /// Removes a line and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not in the scene.
    pub fn remove_line(&mut self, id: LineId) -> Result<Line, SceneError> {
        self.lines
            .remove(id)
            .ok_or(SceneError::ShapeNotFound("line"))
    }

    /// Iterates over all lines in slot order.
    pub fn lines(&self) -> impl Iterator<Item = (LineId, &Line)> {
        self.lines.iter()
    }

    /// Number of lines in the scene.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    // --- Circle operations ---

    /// Inserts a circle and returns its ID.
    pub fn add_circle(&mut self, circle: Circle) -> CircleId {
        self.circles.insert(circle)
    }

    /// Returns the circle with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the circle is not in the scene.
    pub fn circle(&self, id: CircleId) -> Result<&Circle, SceneError> {
        self.circles
            .get(id)
            .ok_or(SceneError::ShapeNotFound("circle"))
    }

    /// Removes a circle and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the circle is not in the scene.
    pub fn remove_circle(&mut self, id: CircleId) -> Result<Circle, SceneError> {
        self.circles
            .remove(id)
            .ok_or(SceneError::ShapeNotFound("circle"))
    }

    /// Iterates over all circles in slot order.
    pub fn circles(&self) -> impl Iterator<Item = (CircleId, &Circle)> {
        self.circles.iter()
    }

    /// Number of circles in the scene.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.circles.len()
    }

    // --- Whole scene ---

    /// Returns `true` if the scene holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.circles.is_empty()
    }

    /// Removes every shape.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.circles.clear();
    }
}
