use thiserror::Error;

/// Failures reported by a [`crate::screen::Canvas`] implementation. These
/// travel through the turtle untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CanvasError {
    #[error("canvas is already borrowed for drawing")]
    Busy,
    #[error("canvas backend failure: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum TurtleError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error("screen config: {0}")]
    Config(#[from] ron::error::SpannedError),
    #[error("screen config io: {0}")]
    Io(#[from] std::io::Error),
}

impl TurtleError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!(%msg, "rejected argument");
        TurtleError::InvalidArgument(msg)
    }
}

/// Reject NaN and infinities for anything that ends up in a coordinate.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<f64, TurtleError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TurtleError::invalid(format!("{name} must be finite, got {value}")))
    }
}
