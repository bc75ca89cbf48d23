// src/error.rs
use thiserror::Error;

/// Custom error types for the fast-sle library
#[derive(Debug, Clone, Error)]
pub enum SleError {
    /// Invalid parameter values
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration (relationships between parameters)
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },
}

/// Result type alias for fast-sle operations
pub type SleResult<T> = Result<T, SleError>;

/// Validation utilities
pub mod validation {
    use super::{SleError, SleResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SleResult<()> {
        if value <= 0.0 {
            Err(SleError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SleResult<()> {
        if !value.is_finite() {
            Err(SleError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that `name` does not exceed `bound_name`
    pub fn validate_not_greater(
        name: &str,
        value: f64,
        bound_name: &str,
        bound: f64,
    ) -> SleResult<()> {
        if value > bound {
            Err(SleError::InvalidConfiguration {
                field: name.to_string(),
                reason: format!(
                    "{} = {} must not exceed {} = {}",
                    name, value, bound_name, bound
                ),
            })
        } else {
            Ok(())
        }
    }
}
