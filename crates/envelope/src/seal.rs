//! Envelope constructor: payload in, [`SecureRecord`] out.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::codec::encode_hex;
use crate::crypto::cipher;
use crate::error::{EnvelopeError, Result};
use crate::keys::{KeyBytes, MasterKey};
use crate::record::{RecordMetadata, SecureRecord, ALGORITHM, MK_VERSION};

/// Encrypt `payload` for `party_id` under a fresh DEK, and wrap that DEK under
/// the master key given as hex.
///
/// The DEK and the serialized plaintext are zeroed before this returns.
///
/// # Errors
///
/// - [`EnvelopeError::MissingField`] if `party_id` is empty.
/// - [`EnvelopeError::InvalidKeyMaterial`] if `master_key_hex` is not a 32-byte hex key.
/// - [`EnvelopeError::NotSerializable`] if `payload` cannot be serialized.
/// - [`EnvelopeError::Internal`] if the AEAD refuses to seal.
pub fn encrypt_transaction<T>(party_id: &str, payload: &T, master_key_hex: &str) -> Result<SecureRecord>
where
    T: Serialize + ?Sized,
{
    if party_id.is_empty() {
        return Err(EnvelopeError::MissingField("partyId"));
    }
    let master_key = MasterKey::from_hex(master_key_hex)?;
    let plaintext = Zeroizing::new(
        serde_json::to_vec(payload).map_err(|e| EnvelopeError::NotSerializable(e.to_string()))?,
    );

    let dek = KeyBytes::generate();
    let id = Uuid::new_v4().to_string();
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    let aad = RecordMetadata {
        id: &id,
        party_id,
        created_at: &created_at,
        alg: ALGORITHM,
        mk_version: MK_VERSION,
    }
    .associated_data()?;

    let payload_box = cipher::seal(dek.as_bytes(), &plaintext, &aad)?;
    let wrap_box = cipher::seal(master_key.as_bytes(), dek.as_bytes(), &aad)?;

    debug!(record_id = %id, party_id, "sealed transaction record");

    Ok(SecureRecord {
        id,
        party_id: party_id.to_owned(),
        created_at,
        payload_nonce: encode_hex(payload_box.nonce),
        payload_ct: encode_hex(&payload_box.ciphertext),
        payload_tag: encode_hex(payload_box.tag),
        dek_wrap_nonce: encode_hex(wrap_box.nonce),
        dek_wrapped: encode_hex(&wrap_box.ciphertext),
        dek_wrap_tag: encode_hex(wrap_box.tag),
        alg: ALGORITHM.to_owned(),
        mk_version: MK_VERSION,
    })
}
