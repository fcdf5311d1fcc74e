use serde::Serialize;

/// Delete confirmation
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
