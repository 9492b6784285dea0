use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - status of each component
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = match ping(&state).await {
        Ok(()) => "operational",
        Err(_) => "unavailable",
    };

    let notifications = if state.directory.notifier().is_enabled() {
        "enabled"
    } else {
        "disabled"
    };

    let health = json!({
        "status": if database == "operational" { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "notifications": notifications,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - the process can answer
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - the database accepts queries
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match ping(&state).await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response()
        }
    }
}

async fn ping(state: &AppState) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(&state.pool).await.map(|_| ())
}
