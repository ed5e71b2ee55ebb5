//! API Response envelope
//!
//! Every backend endpoint answers with the same JSON shape:
//!
//! ```json
//! {
//!     "success": true,
//!     "data": { ... },
//!     "error": null
//! }
//! ```
//!
//! `success == false` carries a human-readable message in `error`.

use serde::{Deserialize, Serialize};

/// Unified backend response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
