use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Failure body. `error` repeats `message` for clients that read the
/// older `{ "error": "..." }` shape.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: "error".to_string(),
            error: message.clone(),
            message,
        }
    }
}
