use crate::ApiError;

use hr_core::{CoreError, FieldViolation};
use hr_directory::DirectoryError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Employee not found with ID: e1".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Employee not found with ID: e1");
    assert!(json["error"].get("field").is_none());
    assert!(json["error"].get("fieldErrors").is_none());
}

#[tokio::test]
async fn test_manager_not_found_returns_404_with_own_code() {
    let error = ApiError::ManagerNotFound {
        message: "No manager found at level 3 for employee a".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "MANAGER_NOT_FOUND");
}

#[tokio::test]
async fn test_single_violation_sets_field() {
    let error = ApiError::validation(vec![FieldViolation::new("email", "Invalid email format")]);

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
    assert_eq!(json["error"]["fieldErrors"]["email"], "Invalid email format");
}

#[tokio::test]
async fn test_multiple_violations_aggregate_into_field_errors() {
    let error = ApiError::validation(vec![
        FieldViolation::new("employeeName", "Employee name cannot be empty"),
        FieldViolation::new("phoneNumber", "Phone number cannot be empty"),
        FieldViolation::new("phoneNumber", "Invalid phone number format"),
    ]);

    let (_, json) = render(error).await;

    assert!(json["error"].get("field").is_none());
    let field_errors = json["error"]["fieldErrors"].as_object().unwrap();
    assert_eq!(field_errors.len(), 2);
    assert_eq!(field_errors["phoneNumber"], "Phone number cannot be empty");
    assert_eq!(
        json["error"]["message"],
        "Employee name cannot be empty; Phone number cannot be empty; Invalid phone number format"
    );
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        detail: "disk I/O error".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Database operation failed");
    assert!(!json.to_string().contains("disk I/O error"));
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let (status, json) = render(ApiError::bad_request("Invalid request body")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[test]
fn test_directory_not_found_maps_to_not_found() {
    let error: ApiError = DirectoryError::not_found("e1").into();

    assert!(matches!(error, ApiError::NotFound { .. }));
    assert_that!(error.status(), eq(StatusCode::NOT_FOUND));
}

#[test]
fn test_directory_manager_not_found_maps_to_manager_not_found() {
    let error: ApiError = DirectoryError::ManagerNotFound {
        employee_id: "a".into(),
        level: 3,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    match error {
        ApiError::ManagerNotFound { message, .. } => {
            assert_that!(message, eq("No manager found at level 3 for employee a"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_directory_cycle_maps_to_validation_on_reports_to() {
    let core = CoreError::CycleDetected {
        employee_id: "a".into(),
        path: "a -> b -> a".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let error: ApiError = DirectoryError::from(core).into();

    match error {
        ApiError::Validation {
            message,
            violations,
            ..
        } => {
            assert_that!(
                message,
                eq("Circular reporting relationship detected: a -> b -> a")
            );
            assert_that!(violations.len(), eq(1));
            assert_that!(violations[0].field, eq("reportsTo"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_database_failure_hides_cause() {
    let error: ApiError = DirectoryError::DatabaseOperation {
        message: "disk I/O error".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    match error {
        ApiError::Internal {
            ref message,
            ref detail,
            ..
        } => {
            assert_that!(message, eq("Database operation failed"));
            assert_that!(detail, contains_substring("disk I/O error"));
            assert_that!(error.to_string(), contains_substring("disk I/O error"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
