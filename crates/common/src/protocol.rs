//! Request and response types exchanged over the public HTTP API.
//!
//! The Secure Record itself is defined in the `envelope` crate and is
//! returned as-is by the create and lookup endpoints.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Create endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /transactions/encrypt`.
///
/// Both fields are optional at the wire level so that their absence is
/// reported as a field-named error rather than a generic parse failure.
/// A `payload` of JSON `null` is present, not absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    /// Owning party. Must be a non-empty string.
    #[serde(rename = "partyId", default)]
    pub party_id: Option<String>,
    /// Arbitrary JSON value to encrypt. `None` only when the field is missing.
    #[serde(default, deserialize_with = "present")]
    pub payload: Option<serde_json::Value>,
}

/// Deserialize any value, `null` included, as `Some`. Missing fields fall back
/// to `#[serde(default)]`.
fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// Decrypt endpoint
// ---------------------------------------------------------------------------

/// Successful response body for `POST /transactions/:id/decrypt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecryptedTransaction {
    /// Record id.
    pub id: String,
    /// Owning party.
    #[serde(rename = "partyId")]
    pub party_id: String,
    /// The decrypted payload, exactly as submitted.
    pub payload: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"bad_request"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: String,
    /// Number of records currently held by the store.
    pub records_stored: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_reads_camel_case_party_id() {
        let req: CreateTransactionRequest =
            serde_json::from_value(json!({"partyId": "party_123", "payload": {"amount": 100}}))
                .unwrap();
        assert_eq!(req.party_id.as_deref(), Some("party_123"));
        assert_eq!(req.payload.unwrap()["amount"], 100);
    }

    #[test]
    fn create_request_tolerates_missing_fields() {
        let req: CreateTransactionRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.party_id.is_none());
        assert!(req.payload.is_none());
    }

    #[test]
    fn null_payload_is_present() {
        let req: CreateTransactionRequest =
            serde_json::from_value(json!({"partyId": "p", "payload": null})).unwrap();
        assert_eq!(req.payload, Some(serde_json::Value::Null));
    }

    #[test]
    fn decrypted_transaction_wire_shape() {
        let body = DecryptedTransaction {
            id: "abc".into(),
            party_id: "party_123".into(),
            payload: json!({"currency": "AED"}),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["partyId"], "party_123");
        assert_eq!(value["payload"]["currency"], "AED");
    }

    #[test]
    fn error_response_new() {
        let e = ErrorResponse::new("not_found", "no record with id abc");
        assert_eq!(e.code, "not_found");
        assert!(e.message.contains("abc"));
    }
}
