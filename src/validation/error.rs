//! Error types for footprint computation

use thiserror::Error;

/// Failures surfaced by the projection, configuration and formatting layers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FootprintError {
    /// Matrix has no inverse
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix { determinant: f64 },
    /// Camera ray through an image point could not be resolved
    #[error("degenerate camera ray: {reason}")]
    DegenerateRay { reason: String },
    /// Configuration value out of range
    #[error("invalid configuration: {parameter} = {value} ({reason})")]
    InvalidConfig {
        parameter: String,
        value: String,
        reason: String,
    },
    /// Reading or writing a file failed
    #[error("i/o error: {message}")]
    Io { message: String },
    /// JSON encoding or decoding failed
    #[error("serialization error: {message}")]
    Serialization { message: String },
}

impl FootprintError {
    pub fn degenerate_ray(reason: impl Into<String>) -> Self {
        FootprintError::DegenerateRay { reason: reason.into() }
    }

    pub fn invalid_config(parameter: &str, value: impl ToString, reason: &str) -> Self {
        FootprintError::InvalidConfig {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<serde_json::Error> for FootprintError {
    fn from(e: serde_json::Error) -> Self {
        FootprintError::Serialization { message: e.to_string() }
    }
}

/// Result type for footprint operations
pub type FootprintResult<T> = Result<T, FootprintError>;
