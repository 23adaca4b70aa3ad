//! Request and response types exchanged over the card API.
//!
//! All bodies are JSON. Request types model each endpoint's expected body as
//! an explicit struct with optional fields; presence checks are performed by
//! the validation methods here rather than by serde rejection, so that the
//! service answers with its own `{"error": ...}` shape.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ---------------------------------------------------------------------------
// Card record
// ---------------------------------------------------------------------------

/// A single playing-card record.
///
/// Wire shape: `{"id": integer, "suit": string, "value": string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique id, assigned once and never reused for the process lifetime.
    pub id: i64,
    pub suit: String,
    pub value: String,
}

// ---------------------------------------------------------------------------
// Create / replace bodies
// ---------------------------------------------------------------------------

/// Request body for `POST /cards`.
///
/// Both fields are required; `validate` enforces presence so the handler can
/// return the canonical 400 message instead of a serde rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCardRequest {
    pub suit: Option<String>,
    pub value: Option<String>,
}

impl CreateCardRequest {
    /// Extract `(suit, value)`, failing if either is absent or empty.
    pub fn validate(self) -> Result<(String, String), ApiError> {
        require_fields(self.suit, self.value)
    }
}

/// Request body for `PUT /cards/:id`. Same field requirements as
/// [`CreateCardRequest`]; the replacement is wholesale, not a merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceCardRequest {
    pub suit: Option<String>,
    pub value: Option<String>,
}

impl ReplaceCardRequest {
    /// Extract `(suit, value)`, failing if either is absent or empty.
    pub fn validate(self) -> Result<(String, String), ApiError> {
        require_fields(self.suit, self.value)
    }
}

/// Empty strings count as missing, matching the presence check on the wire.
fn require_fields(
    suit: Option<String>,
    value: Option<String>,
) -> Result<(String, String), ApiError> {
    match (
        suit.filter(|s| !s.is_empty()),
        value.filter(|v| !v.is_empty()),
    ) {
        (Some(suit), Some(value)) => Ok((suit, value)),
        _ => Err(ApiError::MissingField),
    }
}

// ---------------------------------------------------------------------------
// Patch body
// ---------------------------------------------------------------------------

/// Request body for `PATCH /cards/:id`.
///
/// Either, both, or neither field may be present; absent fields are left
/// unchanged on the stored card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchCardRequest {
    pub suit: Option<String>,
    pub value: Option<String>,
}

// ---------------------------------------------------------------------------
// Delete response
// ---------------------------------------------------------------------------

/// Response body for a successful `DELETE /cards/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCardResponse {
    /// Always `"card deleted"`.
    pub message: String,
    /// The removed card.
    pub card: Card,
}

impl DeleteCardResponse {
    /// Construct the canonical delete acknowledgement for `card`.
    pub fn new(card: Card) -> Self {
        Self {
            message: "card deleted".into(),
            card,
        }
    }
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub error: String,
}

impl ErrorBody {
    /// Construct an [`ErrorBody`] from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn card_wire_shape() {
        let card = Card {
            id: 1,
            suit: "Hearts".into(),
            value: "Ace".into(),
        };
        let encoded = serde_json::to_value(&card).unwrap();
        assert_eq!(encoded, json!({"id": 1, "suit": "Hearts", "value": "Ace"}));
    }

    #[test]
    fn create_request_with_both_fields_validates() {
        let req: CreateCardRequest =
            serde_json::from_value(json!({"suit": "Clubs", "value": "Queen"})).unwrap();
        let (suit, value) = req.validate().unwrap();
        assert_eq!(suit, "Clubs");
        assert_eq!(value, "Queen");
    }

    #[test]
    fn create_request_missing_value_is_rejected() {
        let req: CreateCardRequest = serde_json::from_value(json!({"suit": "Hearts"})).unwrap();
        assert_eq!(req.validate(), Err(ApiError::MissingField));
    }

    #[test]
    fn create_request_empty_string_counts_as_missing() {
        let req: CreateCardRequest =
            serde_json::from_value(json!({"suit": "", "value": "Queen"})).unwrap();
        assert_eq!(req.validate(), Err(ApiError::MissingField));
    }

    #[test]
    fn replace_request_null_field_is_rejected() {
        let req: ReplaceCardRequest =
            serde_json::from_value(json!({"suit": "Hearts", "value": null})).unwrap();
        assert_eq!(req.validate(), Err(ApiError::MissingField));
    }

    #[test]
    fn patch_request_fields_are_independent() {
        let req: PatchCardRequest = serde_json::from_value(json!({"value": "Jack"})).unwrap();
        assert_eq!(req.suit, None);
        assert_eq!(req.value.as_deref(), Some("Jack"));

        let empty: PatchCardRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.suit, None);
        assert_eq!(empty.value, None);
    }

    #[test]
    fn delete_response_message() {
        let resp = DeleteCardResponse::new(Card {
            id: 2,
            suit: "Spades".into(),
            value: "King".into(),
        });
        let encoded = serde_json::to_value(&resp).unwrap();
        assert_eq!(encoded["message"], "card deleted");
        assert_eq!(encoded["card"]["id"], 2);
    }

    #[test]
    fn error_body_from_api_error() {
        let body = ErrorBody::from(&ApiError::NotFound);
        assert_eq!(body.error, "card not found");
    }
}
