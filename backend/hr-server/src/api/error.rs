//! REST API error types
//!
//! Every failure leaving a handler is rendered as
//! `{ "error": { "code", "message", "field"?, "fieldErrors"? } }`.

use hr_core::FieldViolation;
use hr_directory::DirectoryError;

use std::collections::BTreeMap;
use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Machine-readable code (e.g. "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    /// Set when exactly one field is at fault
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// field -> message, for aggregated validation failures
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub field_errors: BTreeMap<String, String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 404, the reporting chain ends before the requested level
    #[error("Manager not found: {message} {location}")]
    ManagerNotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        violations: Vec<FieldViolation>,
        location: ErrorLocation,
    },

    /// 500. `detail` is logged, never rendered.
    #[error("Internal error: {message}: {detail} {location}")]
    Internal {
        message: String,
        detail: String,
        location: ErrorLocation,
    },

    /// 400, the request itself could not be read
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        let message = violations
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::Validation {
            message,
            violations,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } | Self::ManagerNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_body(self) -> ApiErrorBody {
        let (code, message, violations) = match self {
            Self::NotFound { message, .. } => ("NOT_FOUND", message, Vec::new()),
            Self::ManagerNotFound { message, .. } => ("MANAGER_NOT_FOUND", message, Vec::new()),
            Self::Validation {
                message,
                violations,
                ..
            } => ("VALIDATION_ERROR", message, violations),
            Self::Internal { message, .. } => ("INTERNAL_ERROR", message, Vec::new()),
            Self::BadRequest { message, .. } => ("BAD_REQUEST", message, Vec::new()),
        };

        let field = match violations.as_slice() {
            [only] => Some(only.field.clone()),
            _ => None,
        };

        // First message wins when a field is reported twice
        let mut field_errors = BTreeMap::new();
        for violation in violations {
            field_errors
                .entry(violation.field)
                .or_insert(violation.message);
        }

        ApiErrorBody {
            code: code.to_string(),
            message,
            field,
            field_errors,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.status() {
            StatusCode::INTERNAL_SERVER_ERROR => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let status = self.status();
        let body = self.into_body();

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<DirectoryError> for ApiError {
    #[track_caller]
    fn from(err: DirectoryError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = err.client_message();

        match err {
            DirectoryError::InvalidData { violations, .. } => ApiError::Validation {
                message,
                violations,
                location,
            },
            DirectoryError::NotFound { .. } => ApiError::NotFound { message, location },
            DirectoryError::ManagerNotFound { .. } => {
                ApiError::ManagerNotFound { message, location }
            }
            DirectoryError::DatabaseOperation { .. } | DirectoryError::EmailSending { .. } => {
                ApiError::Internal {
                    message,
                    detail: err.to_string(),
                    location,
                }
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(format!(
            "Invalid query parameters: {}",
            rejection.body_text()
        ))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
