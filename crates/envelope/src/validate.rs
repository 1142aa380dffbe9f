//! Structural gate run on every record before any key material is touched.

use chrono::DateTime;

use crate::codec::{assert_exact_length, decode_hex};
use crate::crypto::{NONCE_LEN, TAG_LEN};
use crate::error::{EnvelopeError, Result};
use crate::record::{SecureRecord, ALGORITHM, MK_VERSION};

/// Check that `record` is well formed.
///
/// Errors here are precise and name the offending field; none of them depend
/// on key material, so they are safe to return to a caller.
///
/// # Errors
///
/// The first of [`EnvelopeError::MissingField`], [`EnvelopeError::InvalidTimestamp`],
/// [`EnvelopeError::UnsupportedAlgorithm`], [`EnvelopeError::UnsupportedKeyVersion`],
/// [`EnvelopeError::InvalidEncoding`] or [`EnvelopeError::InvalidLength`] encountered.
pub fn validate_record_shape(record: &SecureRecord) -> Result<()> {
    require("id", &record.id)?;
    require("partyId", &record.party_id)?;
    require("createdAt", &record.created_at)?;
    DateTime::parse_from_rfc3339(&record.created_at).map_err(|_| EnvelopeError::InvalidTimestamp)?;

    if record.alg != ALGORITHM {
        return Err(EnvelopeError::UnsupportedAlgorithm(record.alg.clone()));
    }
    if record.mk_version != MK_VERSION {
        return Err(EnvelopeError::UnsupportedKeyVersion(record.mk_version));
    }

    assert_exact_length("payload_nonce", &record.payload_nonce, NONCE_LEN)?;
    assert_exact_length("payload_tag", &record.payload_tag, TAG_LEN)?;
    assert_exact_length("dek_wrap_nonce", &record.dek_wrap_nonce, NONCE_LEN)?;
    assert_exact_length("dek_wrap_tag", &record.dek_wrap_tag, TAG_LEN)?;

    // Ciphertext lengths follow the plaintext; only the encoding is checked.
    decode_hex("payload_ct", &record.payload_ct)?;
    decode_hex("dek_wrapped", &record.dek_wrapped)?;
    Ok(())
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(EnvelopeError::MissingField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seal::encrypt_transaction;
    use serde_json::json;

    fn record() -> SecureRecord {
        encrypt_transaction("party_123", &json!({"amount": 100}), &"22".repeat(32)).unwrap()
    }

    #[test]
    fn fresh_record_passes() {
        assert!(validate_record_shape(&record()).is_ok());
    }

    #[test]
    fn empty_metadata_fields_rejected() {
        let mut r = record();
        r.id.clear();
        assert_eq!(validate_record_shape(&r).unwrap_err(), EnvelopeError::MissingField("id"));

        let mut r = record();
        r.party_id.clear();
        assert_eq!(
            validate_record_shape(&r).unwrap_err(),
            EnvelopeError::MissingField("partyId")
        );

        let mut r = record();
        r.created_at.clear();
        assert_eq!(
            validate_record_shape(&r).unwrap_err(),
            EnvelopeError::MissingField("createdAt")
        );
    }

    #[test]
    fn unparseable_timestamp_rejected() {
        let mut r = record();
        r.created_at = "yesterday".into();
        assert_eq!(validate_record_shape(&r).unwrap_err(), EnvelopeError::InvalidTimestamp);
    }

    #[test]
    fn unknown_algorithm_rejected() {
        let mut r = record();
        r.alg = "ROT13".into();
        assert_eq!(
            validate_record_shape(&r).unwrap_err(),
            EnvelopeError::UnsupportedAlgorithm("ROT13".into())
        );
    }

    #[test]
    fn unknown_key_version_rejected() {
        let mut r = record();
        r.mk_version = 2;
        assert_eq!(
            validate_record_shape(&r).unwrap_err(),
            EnvelopeError::UnsupportedKeyVersion(2)
        );
    }

    #[test]
    fn short_nonce_rejected_by_name() {
        let mut r = record();
        r.payload_nonce = "ab".into();
        assert_eq!(
            validate_record_shape(&r).unwrap_err(),
            EnvelopeError::InvalidLength {
                field: "payload_nonce",
                expected: NONCE_LEN,
                actual: 1,
            }
        );
    }

    #[test]
    fn long_wrap_tag_rejected_by_name() {
        let mut r = record();
        r.dek_wrap_tag.push_str("00");
        assert!(matches!(
            validate_record_shape(&r).unwrap_err(),
            EnvelopeError::InvalidLength { field: "dek_wrap_tag", .. }
        ));
    }

    #[test]
    fn every_nonce_and_tag_field_is_checked_by_name() {
        type Field = fn(&mut SecureRecord) -> &mut String;
        let fields: [(&str, usize, Field); 4] = [
            ("payload_nonce", NONCE_LEN, |r| &mut r.payload_nonce),
            ("payload_tag", TAG_LEN, |r| &mut r.payload_tag),
            ("dek_wrap_nonce", NONCE_LEN, |r| &mut r.dek_wrap_nonce),
            ("dek_wrap_tag", TAG_LEN, |r| &mut r.dek_wrap_tag),
        ];

        for (name, expected, field) in fields {
            let mut r = record();
            *field(&mut r) = "00".repeat(expected + 1);
            assert_eq!(
                validate_record_shape(&r).unwrap_err(),
                EnvelopeError::InvalidLength {
                    field: name,
                    expected,
                    actual: expected + 1,
                },
                "{name}: length"
            );

            let mut r = record();
            *field(&mut r) = "zz".repeat(expected);
            assert_eq!(
                validate_record_shape(&r).unwrap_err(),
                EnvelopeError::InvalidEncoding { field: name },
                "{name}: encoding"
            );
        }
    }

    #[test]
    fn non_hex_ciphertext_rejected_by_name() {
        let mut r = record();
        r.payload_ct = "zz".into();
        assert_eq!(
            validate_record_shape(&r).unwrap_err(),
            EnvelopeError::InvalidEncoding { field: "payload_ct" }
        );

        let mut r = record();
        r.dek_wrapped = "abc".into();
        assert_eq!(
            validate_record_shape(&r).unwrap_err(),
            EnvelopeError::InvalidEncoding { field: "dek_wrapped" }
        );
    }
}
