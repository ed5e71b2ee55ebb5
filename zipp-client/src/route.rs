//! Customer ordering route
//!
//! A scanned QR link has the shape `/{code}/{table}`, where `code` is the
//! URL-safe base64 restaurant identifier and `table` names the physical
//! table. Both values travel unchanged into every order submitted from
//! that page.

use crate::{ClientError, ClientResult};
use shared::{from_code, to_code};

/// Decoded `/{code}/{table}` route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRoute {
    pub restaurant_id: String,
    pub table: String,
}

impl TableRoute {
    pub fn new(restaurant_id: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            restaurant_id: restaurant_id.into(),
            table: table.into(),
        }
    }

    /// Parse a scanned path like `/cmVzdF8xMjM/T7`
    pub fn parse(path: &str) -> ClientResult<Self> {
        let mut segments = path.trim_matches('/').splitn(2, '/');
        let code = segments.next().unwrap_or_default();
        let table = segments.next().unwrap_or_default();
        if code.is_empty() || table.is_empty() {
            return Err(ClientError::Validation(format!(
                "Malformed ordering link: {path}"
            )));
        }
        let restaurant_id =
            from_code(code).map_err(|e| ClientError::Validation(e.to_string()))?;
        Ok(Self {
            restaurant_id,
            table: table.to_string(),
        })
    }

    /// Re-encode the shareable path for this route
    pub fn to_path(&self) -> String {
        format!("/{}/{}", to_code(&self.restaurant_id), self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scanned_link() {
        let code = to_code("rest_123");
        let route = TableRoute::parse(&format!("/{code}/T7")).unwrap();
        assert_eq!(route.restaurant_id, "rest_123");
        assert_eq!(route.table, "T7");
    }

    #[test]
    fn path_round_trip() {
        let route = TableRoute::new("user_2fGh9KlMnOpQ", "12");
        assert_eq!(TableRoute::parse(&route.to_path()).unwrap(), route);
    }

    #[test]
    fn rejects_missing_table_segment() {
        let err = TableRoute::parse("/cmVzdF8xMjM").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn rejects_invalid_code() {
        let err = TableRoute::parse("/!!!/T7").unwrap_err();
        assert!(err.is_validation());
    }
}
