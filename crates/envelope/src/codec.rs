//! Hex encoding of binary record fields and exact-length checks.
//!
//! Purely syntactic: nothing here knows what the bytes mean.

use crate::error::{EnvelopeError, Result};

/// Encode bytes as lowercase hex.
pub fn encode_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode hex text belonging to record field `field`.
///
/// # Errors
///
/// Returns [`EnvelopeError::InvalidEncoding`] naming `field` if `text` has odd
/// length or contains characters outside `[0-9a-fA-F]`.
pub fn decode_hex(field: &'static str, text: &str) -> Result<Vec<u8>> {
    hex::decode(text).map_err(|_| EnvelopeError::InvalidEncoding { field })
}

/// Decode `text` and require exactly `expected` bytes.
///
/// # Errors
///
/// [`EnvelopeError::InvalidEncoding`] for bad hex, [`EnvelopeError::InvalidLength`]
/// for a length mismatch. Both name `field`.
pub fn assert_exact_length(field: &'static str, text: &str, expected: usize) -> Result<Vec<u8>> {
    let bytes = decode_hex(field, text)?;
    if bytes.len() != expected {
        return Err(EnvelopeError::InvalidLength {
            field,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}

/// Decode `text` into a fixed-size array.
///
/// Same errors as [`assert_exact_length`].
pub fn decode_exact<const N: usize>(field: &'static str, text: &str) -> Result<[u8; N]> {
    let bytes = assert_exact_length(field, text, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}
