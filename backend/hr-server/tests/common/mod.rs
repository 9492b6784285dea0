#![allow(dead_code)]

//! Test infrastructure for hr-server API tests

use hr_config::ServerConfig;
use hr_directory::{EmployeeDirectory, Notifier};
use hr_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_DEFAULT_PAGE_SIZE: i64 = 10;
pub const TEST_MAX_PAGE_SIZE: i64 = 100;

/// AppState over a fresh in-memory database with notifications off
pub async fn create_test_app_state() -> AppState {
    let pool = hr_db::connect_in_memory()
        .await
        .expect("Failed to create test database");
    let directory = EmployeeDirectory::new(pool, Notifier::disabled(), TEST_MAX_PAGE_SIZE);
    AppState::new(directory, TEST_DEFAULT_PAGE_SIZE)
}

pub fn test_router(state: AppState) -> Router {
    build_router(state, &ServerConfig::default())
}

/// Send one request and decode the JSON response body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

pub fn employee_body(id: &str, reports_to: Option<&str>) -> Value {
    json!({
        "id": id,
        "employeeName": format!("Employee {}", id),
        "phoneNumber": "+15551234567",
        "email": format!("{}@example.com", id),
        "reportsTo": reports_to,
    })
}

/// Create x -> a -> b -> c through the API
pub async fn create_chain(app: &Router) {
    for (id, manager) in [("c", None), ("b", Some("c")), ("a", Some("b")), ("x", Some("a"))] {
        let (status, _) = send(app, "POST", "/api/employees", Some(employee_body(id, manager))).await;
        assert_eq!(status, StatusCode::OK, "failed to create {id}");
    }
}
