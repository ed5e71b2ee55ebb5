//! Restaurant code codec
//!
//! Public ordering links embed the restaurant identifier as URL-safe base64
//! without padding: `/{code}/{table}`. The identifier is the signed-in
//! user id from the identity provider, used verbatim as the restaurant id.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use thiserror::Error;

/// Errors decoding a restaurant code from a scanned link
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("Invalid restaurant code: {0}")]
    InvalidBase64(String),

    #[error("Restaurant code is not valid UTF-8")]
    InvalidUtf8,
}

/// Encode a restaurant identifier into a URL-safe code
pub fn to_code(restaurant_id: &str) -> String {
    URL_SAFE_NO_PAD.encode(restaurant_id.as_bytes())
}

/// Decode a URL-safe code back into the restaurant identifier
pub fn from_code(code: &str) -> Result<String, CodeError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(code.as_bytes())
        .map_err(|e| CodeError::InvalidBase64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| CodeError::InvalidUtf8)
}
