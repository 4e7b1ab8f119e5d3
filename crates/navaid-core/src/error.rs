//! Error types shared by all navaid crates.

use thiserror::Error;

/// Errors raised by model construction, decoding and config loading.
#[derive(Debug, Error)]
pub enum NavError {
    /// A configuration value is outside its valid domain.
    #[error("invalid configuration for {parameter}: {reason}")]
    InvalidConfig { parameter: String, reason: String },

    /// A decode was requested on an empty sample sequence.
    #[error("sample trace is empty")]
    EmptyTrace,

    /// Reference and variable traces differ in length.
    #[error("trace length mismatch: reference has {reference} samples, variable has {variable}")]
    LengthMismatch { reference: usize, variable: usize },

    /// Reading a config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing a config file failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type NavResult<T> = Result<T, NavError>;

impl NavError {
    /// Creates an invalid-configuration error.
    pub fn invalid(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

/// Reject values that are not finite and strictly positive.
pub fn require_positive(parameter: &str, value: f64) -> NavResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(NavError::invalid(
            parameter,
            format!("must be finite and > 0, got {value}"),
        ));
    }
    Ok(())
}

/// Reject values that are not finite or are negative.
pub fn require_non_negative(parameter: &str, value: f64) -> NavResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(NavError::invalid(
            parameter,
            format!("must be finite and >= 0, got {value}"),
        ));
    }
    Ok(())
}
