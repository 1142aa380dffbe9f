//! Single-shot AES-256-GCM-SIV seal/open with detached tags and associated data.
//!
//! **Algorithm choice:** AES-256-GCM-SIV (RFC 8452) has the same shape as
//! AES-256-GCM (256-bit key, 96-bit nonce, 128-bit tag) and stays
//! nonce-misuse-resistant if the random nonce source ever repeats.
//!
//! **Do NOT reuse a nonce across calls.** [`seal`] draws a fresh one from the
//! OS CSPRNG every time; callers never supply their own.

use aes_gcm_siv::{
    aead::{rand_core::RngCore, AeadInPlace, KeyInit, OsRng},
    Aes256GcmSiv, Nonce, Tag,
};
use thiserror::Error;
use zeroize::Zeroizing;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of an AES-GCM-SIV nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of an AES-GCM-SIV authentication tag (16 bytes = 128 bits).
pub const TAG_LEN: usize = 16;

/// Output of one [`seal`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedBox {
    /// Random nonce drawn for this call.
    pub nonce: [u8; NONCE_LEN],
    /// Ciphertext, same length as the plaintext.
    pub ciphertext: Vec<u8>,
    /// Detached authentication tag.
    pub tag: [u8; TAG_LEN],
}

/// Errors produced by the cipher layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The key is the wrong length (must be [`KEY_LEN`] bytes).
    #[error("invalid key length: expected {KEY_LEN} bytes")]
    InvalidKeyLength,

    /// The nonce is the wrong length (must be [`NONCE_LEN`] bytes).
    #[error("invalid nonce length: expected {NONCE_LEN} bytes")]
    InvalidNonceLength,

    /// The tag is the wrong length (must be [`TAG_LEN`] bytes).
    #[error("invalid tag length: expected {TAG_LEN} bytes")]
    InvalidTagLength,

    /// Opening failed. Wrong key, tampered data, tampered AAD and wrong nonce
    /// all collapse into this one variant.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Encryption itself failed (plaintext beyond the AEAD's size limit).
    #[error("aead seal failed")]
    SealFailure,
}

/// Encrypt `plaintext` under `key`, binding `aad`.
///
/// A random 96-bit nonce is generated per call via the OS CSPRNG.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyLength`] if `key` is not [`KEY_LEN`] bytes.
/// Returns [`CipherError::SealFailure`] on an internal AEAD error.
pub fn seal(key: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<SealedBox, CipherError> {
    let cipher = build_cipher(key)?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(nonce, aad, &mut buffer)
        .map_err(|_| CipherError::SealFailure)?;

    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(tag.as_slice());

    Ok(SealedBox {
        nonce: nonce_bytes,
        ciphertext: buffer,
        tag: tag_bytes,
    })
}

/// Decrypt and authenticate `ciphertext` under `key`, checking `tag` over
/// `ciphertext` and `aad`.
///
/// All three lengths are checked before any cryptographic work.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyLength`], [`CipherError::InvalidNonceLength`]
/// or [`CipherError::InvalidTagLength`] for malformed inputs, otherwise
/// [`CipherError::AuthenticationFailed`] if the tag does not verify.
pub fn open(
    key: &[u8],
    nonce: &[u8],
    ciphertext: &[u8],
    tag: &[u8],
    aad: &[u8],
) -> Result<Zeroizing<Vec<u8>>, CipherError> {
    if key.len() != KEY_LEN {
        return Err(CipherError::InvalidKeyLength);
    }
    if nonce.len() != NONCE_LEN {
        return Err(CipherError::InvalidNonceLength);
    }
    if tag.len() != TAG_LEN {
        return Err(CipherError::InvalidTagLength);
    }

    let cipher = build_cipher(key)?;
    let mut buffer = Zeroizing::new(ciphertext.to_vec());
    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(nonce),
            aad,
            buffer.as_mut_slice(),
            Tag::from_slice(tag),
        )
        .map_err(|_| CipherError::AuthenticationFailed)?;
    Ok(buffer)
}

fn build_cipher(key: &[u8]) -> Result<Aes256GcmSiv, CipherError> {
    if key.len() != KEY_LEN {
        return Err(CipherError::InvalidKeyLength);
    }
    Aes256GcmSiv::new_from_slice(key).map_err(|_| CipherError::InvalidKeyLength)
}
