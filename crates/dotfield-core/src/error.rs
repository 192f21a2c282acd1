use thiserror::Error;

/// Configuration precondition violations caught during normalization.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("fps must be a finite value greater than zero, got {0}")]
    InvalidFps(f64),
    #[error("density must be a finite value greater than zero, got {0}")]
    InvalidDensity(f32),
    #[error("wander must be finite and non-zero, got {0}")]
    InvalidWander(f32),
}

/// The host frame scheduler refused to queue another frame.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("frame request rejected: {0}")]
    Rejected(String),
    #[error("no frame scheduler available")]
    Unavailable,
}
