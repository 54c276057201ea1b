/// Convenience result type used across the crate.
pub type ScrollsyncResult<T> = Result<T, ScrollsyncError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Errors only occur at model-construction and lifecycle boundaries; the
/// per-event and per-frame paths degrade to inert no-ops instead of failing.
#[derive(thiserror::Error, Debug)]
pub enum ScrollsyncError {
    /// Invalid user-provided page or counter configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating tween or interpolation curves.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors in session lifecycle or derived-state evaluation.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing page definitions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollsyncError {
    /// Build a [`ScrollsyncError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollsyncError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ScrollsyncError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ScrollsyncError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
