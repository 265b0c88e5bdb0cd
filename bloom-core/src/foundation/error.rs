/// Crate-wide result alias.
pub type BloomResult<T> = Result<T, BloomError>;

/// Errors produced at the validated-construction and transport seams.
///
/// The animation math itself is total and never returns these; see the
/// crate-level docs.
#[derive(thiserror::Error, Debug)]
pub enum BloomError {
    /// A validated constructor rejected its inputs.
    #[error("validation error: {0}")]
    Validation(String),

    /// A tuning file or tuning value is unusable.
    #[error("tuning error: {0}")]
    Tuning(String),

    /// An IO failure on the OPC stream or a tuning file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BloomError {
    /// Build a [`BloomError::Validation`] from any message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BloomError::Tuning`] from any message.
    pub fn tuning(msg: impl Into<String>) -> Self {
        Self::Tuning(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
