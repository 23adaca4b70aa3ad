//! Common error types shared across crates.

use thiserror::Error;

/// Top-level API error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ApiError::InvalidId`] → 400
/// - [`ApiError::MissingField`] → 400
/// - [`ApiError::NotFound`] → 404
///
/// The `Display` output of each variant is the exact `error` string placed in
/// the JSON response body, so the wire format lives in one place.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The `:id` path segment does not contain an integer prefix.
    #[error("invalid id")]
    InvalidId,

    /// A required body field (`suit` or `value`) is absent or empty.
    #[error("suit and value are required")]
    MissingField,

    /// No live card exists with the requested id.
    #[error("card not found")]
    NotFound,
}

impl ApiError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ApiError::InvalidId => 400,
            ApiError::MissingField => 400,
            ApiError::NotFound => 404,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_codes() {
        assert_eq!(ApiError::InvalidId.http_status(), 400);
        assert_eq!(ApiError::MissingField.http_status(), 400);
        assert_eq!(ApiError::NotFound.http_status(), 404);
    }

    #[test]
    fn display_is_the_wire_message() {
        assert_eq!(ApiError::InvalidId.to_string(), "invalid id");
        assert_eq!(
            ApiError::MissingField.to_string(),
            "suit and value are required"
        );
        assert_eq!(ApiError::NotFound.to_string(), "card not found");
    }
}
