use serde::Serialize;

/// Confirmation returned by DELETE endpoints
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
