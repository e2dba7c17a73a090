use thiserror::Error;

/// Errors raised while reading motion options from markup attributes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("unknown reveal direction `{0}` (expected up, left, right or none)")]
    UnknownDirection(String),
    #[error("unknown reveal width `{0}` (expected fit-content or 100%)")]
    UnknownWidth(String),
    #[error("invalid reveal delay `{0}`: must be a non-negative number of seconds")]
    InvalidDelay(String),
    #[error("unknown parallax layer `{0}`")]
    UnknownParallaxLayer(String),
}
