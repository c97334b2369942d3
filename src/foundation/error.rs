/// Convenience result type used across the crate.
pub type MotionResult<T> = Result<T, MotionError>;

/// Top-level error taxonomy used by the motion core APIs.
///
/// The pure generator and remap functions intentionally return values for any
/// input (caller-contract violations degrade to NaN or empty tracks); errors
/// exist for the validated surfaces — descriptor checks, JSON boundaries, and
/// pixel-buffer shape mismatches.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Invalid descriptor or track data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while resolving animated values.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors in the CPU shader pipeline (buffer shape mismatches).
    #[error("shader error: {0}")]
    Shader(String),

    /// Errors when crossing the JSON boundary to the host engine.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`MotionError::Shader`] value.
    pub fn shader(msg: impl Into<String>) -> Self {
        Self::Shader(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
