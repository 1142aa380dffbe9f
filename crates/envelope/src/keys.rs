//! Key material: the caller's master key and the per-record DEK.

use aes_gcm_siv::aead::{rand_core::RngCore, OsRng};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::codec;
use crate::crypto::KEY_LEN;
use crate::error::{EnvelopeError, Result};

/// Fixed-size key buffer that holds exactly [`KEY_LEN`] bytes.
///
/// Zeroed on drop. Never printed, not even in debug builds.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyBytes([u8; KEY_LEN]);

impl KeyBytes {
    /// Draw a fresh key from the OS CSPRNG.
    pub fn generate() -> Self {
        let mut buf = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut buf);
        Self(buf)
    }

    /// Copy `bytes` into a new key buffer.
    ///
    /// Returns `None` unless `bytes` is exactly [`KEY_LEN`] long.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != KEY_LEN {
            return None;
        }
        let mut buf = [0u8; KEY_LEN];
        buf.copy_from_slice(bytes);
        Some(Self(buf))
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for KeyBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("KeyBytes([REDACTED])")
    }
}

/// The long-lived key that wraps DEKs. Lives only for the duration of one call.
#[derive(Debug)]
pub struct MasterKey(KeyBytes);

impl MasterKey {
    /// Parse a master key from its hex form.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::InvalidKeyMaterial`] if `text` is not valid hex
    /// or does not decode to [`KEY_LEN`] bytes. The message never echoes input.
    pub fn from_hex(text: &str) -> Result<Self> {
        let decoded = zeroize::Zeroizing::new(
            codec::decode_hex("masterKey", text)
                .map_err(|_| EnvelopeError::InvalidKeyMaterial("master key is not valid hex"))?,
        );
        KeyBytes::from_slice(&decoded)
            .map(Self)
            .ok_or(EnvelopeError::InvalidKeyMaterial(
                "master key must be 32 bytes (64 hex characters)",
            ))
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}
