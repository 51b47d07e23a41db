use thiserror::Error;

/// Top-level error type for the Geoviz intersection engine.
#[derive(Debug, Error)]
pub enum GeovizError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors raised while constructing geometric values.
///
/// Degenerate configurations between valid shapes (parallel lines, tangency,
/// identical shapes) are results, not errors.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("non-finite value: {parameter} = {value}")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Errors related to the shape collection.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("shape not found: {0}")]
    ShapeNotFound(&'static str),
}

/// Convenience type alias for results using [`GeovizError`].
pub type Result<T> = std::result::Result<T, GeovizError>;
