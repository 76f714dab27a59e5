use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure for API errors
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error label (e.g., "Validation error", "Bad request")
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    pub code: String,
    /// Field path to messages, present on validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, Vec<String>>>,
}
