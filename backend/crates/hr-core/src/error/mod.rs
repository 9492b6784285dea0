use crate::FieldViolation;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        violations: Vec<FieldViolation>,
        location: ErrorLocation,
    },

    #[error("Circular reporting relationship detected: {path} {location}")]
    CycleDetected {
        employee_id: String,
        path: String,
        location: ErrorLocation,
    },

    #[error("Invalid argument: {message} {location}")]
    InvalidArgument {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort field: {value} {location}")]
    InvalidSortField {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Aggregate field violations into a single validation error.
    /// Messages are joined in the order they were found.
    #[track_caller]
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        let message = violations
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");

        CoreError::Validation {
            message,
            violations,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        CoreError::InvalidArgument {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
