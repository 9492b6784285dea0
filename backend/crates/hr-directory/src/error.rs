use hr_core::{CoreError, ErrorLocation, FieldViolation};
use hr_db::DbError;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Invalid data: {message} {location}")]
    InvalidData {
        message: String,
        violations: Vec<FieldViolation>,
        location: ErrorLocation,
    },

    #[error("Employee not found with ID: {employee_id} {location}")]
    NotFound {
        employee_id: String,
        location: ErrorLocation,
    },

    #[error("No manager found at level {level} for employee {employee_id} {location}")]
    ManagerNotFound {
        employee_id: String,
        level: i64,
        location: ErrorLocation,
    },

    #[error("Database operation failed: {message} {location}")]
    DatabaseOperation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to send email to {recipient}: {message} {location}")]
    EmailSending {
        recipient: String,
        message: String,
        location: ErrorLocation,
    },
}

impl DirectoryError {
    #[track_caller]
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData {
            message: message.into(),
            violations: Vec::new(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(employee_id: S) -> Self {
        Self::NotFound {
            employee_id: employee_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message without the source location, for API responses.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidData { message, .. } => message.clone(),
            Self::NotFound { employee_id, .. } => {
                format!("Employee not found with ID: {}", employee_id)
            }
            Self::ManagerNotFound {
                employee_id, level, ..
            } => format!(
                "No manager found at level {} for employee {}",
                level, employee_id
            ),
            Self::DatabaseOperation { .. } => "Database operation failed".to_string(),
            Self::EmailSending { recipient, .. } => {
                format!("Failed to send email to {}", recipient)
            }
        }
    }
}

impl From<DbError> for DirectoryError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            // The only unique index besides the primary key is on the normalized email
            DbError::UniqueViolation { message, .. } if message.contains("email_normalized") => {
                Self::InvalidData {
                    message: "Email already exists".to_string(),
                    violations: vec![FieldViolation::new("email", "Email already exists")],
                    location,
                }
            }
            DbError::UniqueViolation { .. } => Self::InvalidData {
                message: "Employee with this ID already exists".to_string(),
                violations: vec![FieldViolation::new(
                    "id",
                    "Employee with this ID already exists",
                )],
                location,
            },
            other => Self::DatabaseOperation {
                message: other.to_string(),
                location,
            },
        }
    }
}

impl From<sqlx::Error> for DirectoryError {
    #[track_caller]
    fn from(err: sqlx::Error) -> Self {
        DbError::from(err).into()
    }
}

impl From<CoreError> for DirectoryError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            CoreError::Validation {
                message,
                violations,
                ..
            } => Self::InvalidData {
                message,
                violations,
                location,
            },
            CoreError::CycleDetected { path, .. } => {
                let message = format!("Circular reporting relationship detected: {}", path);
                Self::InvalidData {
                    violations: vec![FieldViolation::new("reportsTo", message.clone())],
                    message,
                    location,
                }
            }
            CoreError::InvalidArgument { message, .. } => Self::InvalidData {
                message,
                violations: Vec::new(),
                location,
            },
            CoreError::InvalidSortField { value, .. } => {
                let message = format!("Invalid sort field: {}", value);
                Self::InvalidData {
                    violations: vec![FieldViolation::new("sortBy", message.clone())],
                    message,
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
