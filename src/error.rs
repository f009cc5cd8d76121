// Typed errors with thiserror. Construction fails fast; a boundary-rejected
// move is deliberately not an error (observable only as absence of change).

use thiserror::Error;

/// Slider error types. All surface at construction time.
#[derive(Error, Debug)]
pub enum SliderError {
    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    #[error("Container has no child track element")]
    MissingTrack,

    #[error("Track has no items")]
    EmptyTrack,

    #[error("Control not found: {0}")]
    ControlNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for SliderError {
    fn from(err: serde_json::Error) -> Self {
        SliderError::InvalidConfig(err.to_string())
    }
}
