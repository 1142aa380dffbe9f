//! Envelope opener: [`SecureRecord`] in, payload out.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::codec::decode_hex;
use crate::crypto::cipher;
use crate::error::{EnvelopeError, Result};
use crate::keys::{KeyBytes, MasterKey};
use crate::record::SecureRecord;
use crate::validate::validate_record_shape;

/// Unwrap the DEK with the master key given as hex, then decrypt and
/// deserialize the payload.
///
/// Fails closed: every cryptographic defect, and a payload that does not
/// deserialize into `T`, is reported as [`EnvelopeError::AuthenticationFailed`].
///
/// # Errors
///
/// - Any structural error from [`validate_record_shape`], unchanged.
/// - [`EnvelopeError::InvalidKeyMaterial`] if `master_key_hex` is malformed.
/// - [`EnvelopeError::AuthenticationFailed`] otherwise.
pub fn decrypt_transaction<T>(record: &SecureRecord, master_key_hex: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    validate_record_shape(record)?;
    let master_key = MasterKey::from_hex(master_key_hex)?;
    let aad = record.metadata().associated_data()?;

    let dek_bytes = cipher::open(
        master_key.as_bytes(),
        &decode_hex("dek_wrap_nonce", &record.dek_wrap_nonce)?,
        &decode_hex("dek_wrapped", &record.dek_wrapped)?,
        &decode_hex("dek_wrap_tag", &record.dek_wrap_tag)?,
        &aad,
    )
    .map_err(|e| fail_closed(record, e))?;
    let dek = KeyBytes::from_slice(&dek_bytes).ok_or(EnvelopeError::AuthenticationFailed)?;

    let plaintext = cipher::open(
        dek.as_bytes(),
        &decode_hex("payload_nonce", &record.payload_nonce)?,
        &decode_hex("payload_ct", &record.payload_ct)?,
        &decode_hex("payload_tag", &record.payload_tag)?,
        &aad,
    )
    .map_err(|e| fail_closed(record, e))?;

    let payload = serde_json::from_slice(&plaintext).map_err(|_| EnvelopeError::AuthenticationFailed)?;
    debug!(record_id = %record.id, "opened transaction record");
    Ok(payload)
}

fn fail_closed(record: &SecureRecord, e: cipher::CipherError) -> EnvelopeError {
    debug!(record_id = %record.id, "record failed authentication");
    e.into()
}
