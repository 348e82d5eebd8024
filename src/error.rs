use thiserror::Error;

/// Top-level error type for route generation and motion control.
#[derive(Debug, Error)]
pub enum TrackrunError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Motion(#[from] MotionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to route geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The projected reference points are collinear or coincident, so no
    /// unique circle passes through them.
    #[error("degenerate triangle: reference points are collinear (determinant = {determinant})")]
    DegenerateTriangle { determinant: f64 },

    #[error("route point count must be at least 1, got {0}")]
    InvalidPointCount(usize),

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// Errors related to the motion controller.
#[derive(Debug, Error)]
pub enum MotionError {
    #[error("goal point is missing or not finite")]
    InvalidGoal,

    #[error("speed must be finite and positive, got {0}")]
    InvalidSpeed(f64),

    #[error("overshoot duration must be finite and non-negative, got {0}")]
    InvalidDuration(f64),

    #[error("invalid motion parameter {parameter} = {value}")]
    InvalidParameter { parameter: &'static str, value: f64 },

    /// The overshoot direction has near-zero length. Degrades to
    /// translation-only motion rather than aborting the run.
    #[error("zero-length direction")]
    ZeroDirection,
}

/// Errors related to loading a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Convenience type alias for results using [`TrackrunError`].
pub type Result<T> = std::result::Result<T, TrackrunError>;
