use crate::{
    AppState, ApiErrorBody, ApiErrorResponse, create_employee, delete_employee, get_employee,
    get_nth_manager, health, list_employees, list_employees_paginated, update_employee,
};

use hr_config::ServerConfig;

use std::collections::BTreeMap;

use axum::{
    BoxError, Json, Router,
    error_handling::HandleErrorLayer,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower::{ServiceBuilder, timeout::error::Elapsed};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/paginated", get(list_employees_paginated))
        .route(
            "/employees/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .route("/employees/{employee_id}/manager", get(get_nth_manager));

    Router::new()
        .nest("/api", api)
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(server.request_timeout())
                .concurrency_limit(server.max_concurrent_requests),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Render failures raised by the tower middleware stack
async fn handle_middleware_error(err: BoxError) -> Response {
    let (status, code, message) = if err.is::<Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            "REQUEST_TIMEOUT",
            "Request timed out".to_string(),
        )
    } else {
        log::error!("Unhandled middleware error: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "Internal server error".to_string(),
        )
    };

    log::warn!("{} {}", status, message);

    let body = ApiErrorBody {
        code: code.to_string(),
        message,
        field: None,
        field_errors: BTreeMap::new(),
    };

    (status, Json(ApiErrorResponse { error: body })).into_response()
}
