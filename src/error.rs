//! Error types for the employee model.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Construction and assignment faults and pay totals that exceed the
//! decimal range live here: business-rule results such as an insufficient
//! leave balance are reported through the outcome types in
//! [`crate::models`] instead.

use thiserror::Error;

/// The main error type for the employee model.
///
/// # Example
///
/// ```
/// use employee_model::error::ModelError;
///
/// let error = ModelError::InvalidArgument {
///     field: "name".to_string(),
///     message: "Name cannot be empty".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid argument 'name': Name cannot be empty");
/// ```
#[derive(Debug, Error)]
pub enum ModelError {
    /// A constructor or setter was given a value that breaks a field invariant.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The field that was rejected.
        field: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A pay total could not be represented.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// Demonstration output could not be written.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ModelError {
    /// Builds an [`ModelError::InvalidArgument`] for the given field.
    pub fn invalid_argument(field: &str, message: &str) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Builds a [`ModelError::CalculationError`] for an overflowing pay total.
    pub fn pay_overflow(employee_name: &str) -> Self {
        Self::CalculationError {
            message: format!("pay total for {} exceeds the decimal range", employee_name),
        }
    }

    /// Returns true if this is a field validation failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// A type alias for Results that return ModelError.
pub type ModelResult<T> = Result<T, ModelError>;
