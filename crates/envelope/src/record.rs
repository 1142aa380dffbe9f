//! The persisted Secure Record and the associated data derived from it.

use serde::{Deserialize, Serialize};

use crate::error::{EnvelopeError, Result};

/// Algorithm tag written into every record. Both layers use it.
pub const ALGORITHM: &str = "AES-256-GCM-SIV";

/// The only master key generation currently supported.
pub const MK_VERSION: u32 = 1;

/// A self-describing, tamper-evident encrypted record.
///
/// All binary fields are lowercase hex. The metadata fields are stored in the
/// clear but bound into both AEAD layers through [`RecordMetadata::associated_data`],
/// so editing any of them makes the record unopenable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecureRecord {
    /// UUID v4 assigned at construction.
    pub id: String,
    /// Owning party.
    #[serde(rename = "partyId")]
    pub party_id: String,
    /// RFC 3339 construction time.
    #[serde(rename = "createdAt")]
    pub created_at: String,

    /// Payload layer nonce (12 bytes).
    pub payload_nonce: String,
    /// Payload layer ciphertext.
    pub payload_ct: String,
    /// Payload layer tag (16 bytes).
    pub payload_tag: String,

    /// DEK wrap layer nonce (12 bytes).
    pub dek_wrap_nonce: String,
    /// Wrapped DEK.
    pub dek_wrapped: String,
    /// DEK wrap layer tag (16 bytes).
    pub dek_wrap_tag: String,

    /// Algorithm tag, see [`ALGORITHM`].
    pub alg: String,
    /// Master key generation, see [`MK_VERSION`].
    pub mk_version: u32,
}

impl SecureRecord {
    /// Borrow the metadata fields that feed the associated data.
    pub fn metadata(&self) -> RecordMetadata<'_> {
        RecordMetadata {
            id: &self.id,
            party_id: &self.party_id,
            created_at: &self.created_at,
            alg: &self.alg,
            mk_version: self.mk_version,
        }
    }
}

/// The cleartext fields authenticated by both AEAD layers.
///
/// Field order here is the canonical AAD order and must not change.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RecordMetadata<'a> {
    pub id: &'a str,
    #[serde(rename = "partyId")]
    pub party_id: &'a str,
    #[serde(rename = "createdAt")]
    pub created_at: &'a str,
    pub alg: &'a str,
    pub mk_version: u32,
}

impl RecordMetadata<'_> {
    /// Canonical AAD bytes: compact JSON in declaration order.
    pub fn associated_data(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| EnvelopeError::Internal(format!("aad serialisation: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> RecordMetadata<'static> {
        RecordMetadata {
            id: "0b3e",
            party_id: "party_123",
            created_at: "2026-10-19T12:00:00.000Z",
            alg: ALGORITHM,
            mk_version: MK_VERSION,
        }
    }

    #[test]
    fn aad_is_canonical_json() {
        let aad = meta().associated_data().unwrap();
        assert_eq!(
            String::from_utf8(aad).unwrap(),
            r#"{"id":"0b3e","partyId":"party_123","createdAt":"2026-10-19T12:00:00.000Z","alg":"AES-256-GCM-SIV","mk_version":1}"#
        );
    }

    #[test]
    fn aad_changes_with_any_field() {
        let base = meta().associated_data().unwrap();
        let mut m = meta();
        m.party_id = "party_124";
        assert_ne!(m.associated_data().unwrap(), base);
        let mut m = meta();
        m.mk_version = 2;
        assert_ne!(m.associated_data().unwrap(), base);
    }

    #[test]
    fn record_wire_field_names() {
        let record = SecureRecord {
            id: "id".into(),
            party_id: "p".into(),
            created_at: "t".into(),
            payload_nonce: "00".into(),
            payload_ct: "".into(),
            payload_tag: "00".into(),
            dek_wrap_nonce: "00".into(),
            dek_wrapped: "".into(),
            dek_wrap_tag: "00".into(),
            alg: ALGORITHM.into(),
            mk_version: MK_VERSION,
        };
        let value = serde_json::to_value(&record).unwrap();
        for key in [
            "id",
            "partyId",
            "createdAt",
            "payload_nonce",
            "payload_ct",
            "payload_tag",
            "dek_wrap_nonce",
            "dek_wrapped",
            "dek_wrap_tag",
            "alg",
            "mk_version",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(record.metadata().party_id, "p");
    }
}
