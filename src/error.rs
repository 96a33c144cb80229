//! Error types for the beam solver

use thiserror::Error;

/// Main error type for beam analysis operations
#[derive(Error, Debug)]
pub enum BeamError {
    /// An argument outside the domain a solver primitive accepts,
    /// e.g. a singularity exponent below -1.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Model or load data rejected at construction time.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BeamError {
    /// Create an InvalidArgument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    /// Create an InvalidInput error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}

/// Result type for beam analysis operations
pub type BeamResult<T> = Result<T, BeamError>;
