//! Error taxonomy for the envelope layer.

use thiserror::Error;

use crate::crypto::cipher::CipherError;

/// Broad classification of an [`EnvelopeError`].
///
/// Callers route on this rather than on individual variants: structural
/// errors are safe to echo back verbatim, cryptographic failures must stay
/// opaque, and internal faults are never the caller's doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Malformed input detected before any key material was used.
    Structural,
    /// The record cannot be opened with the supplied key.
    Cryptographic,
    /// A fault inside this crate.
    Internal,
}

/// Errors produced by the envelope constructor, validator and opener.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// A required field is absent or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The payload has no serialized representation.
    #[error("payload is not serializable: {0}")]
    NotSerializable(String),

    /// A field is not valid hex.
    #[error("{field} is not valid hex")]
    InvalidEncoding {
        /// Name of the offending record field.
        field: &'static str,
    },

    /// A field decoded to the wrong number of bytes.
    #[error("{field} must be {expected} bytes, got {actual}")]
    InvalidLength {
        /// Name of the offending record field.
        field: &'static str,
        /// Required byte length.
        expected: usize,
        /// Decoded byte length.
        actual: usize,
    },

    /// `createdAt` is not an RFC 3339 timestamp.
    #[error("createdAt is not a valid timestamp")]
    InvalidTimestamp,

    /// `alg` names an algorithm this crate does not implement.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// `mk_version` names a master key generation this crate does not hold.
    #[error("unsupported master key version: {0}")]
    UnsupportedKeyVersion(u32),

    /// The master key hex is malformed or the wrong length.
    #[error("invalid master key material: {0}")]
    InvalidKeyMaterial(&'static str),

    /// Any tamper, wrong key, or corrupted ciphertext. Deliberately undifferentiated.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// An unexpected fault in this crate.
    #[error("internal envelope error: {0}")]
    Internal(String),
}

impl EnvelopeError {
    /// Returns the [`ErrorClass`] of this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            EnvelopeError::AuthenticationFailed => ErrorClass::Cryptographic,
            EnvelopeError::Internal(_) => ErrorClass::Internal,
            _ => ErrorClass::Structural,
        }
    }
}

impl From<CipherError> for EnvelopeError {
    fn from(e: CipherError) -> Self {
        match e {
            CipherError::AuthenticationFailed => EnvelopeError::AuthenticationFailed,
            // Lengths are checked before the cipher is reached, so anything
            // else arriving here is a bug in this crate.
            other => EnvelopeError::Internal(other.to_string()),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EnvelopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes() {
        assert_eq!(
            EnvelopeError::MissingField("partyId").class(),
            ErrorClass::Structural
        );
        assert_eq!(
            EnvelopeError::UnsupportedKeyVersion(2).class(),
            ErrorClass::Structural
        );
        assert_eq!(
            EnvelopeError::AuthenticationFailed.class(),
            ErrorClass::Cryptographic
        );
        assert_eq!(
            EnvelopeError::Internal("x".into()).class(),
            ErrorClass::Internal
        );
    }

    #[test]
    fn structural_messages_name_the_field() {
        let e = EnvelopeError::InvalidLength {
            field: "payload_nonce",
            expected: 12,
            actual: 1,
        };
        assert_eq!(e.to_string(), "payload_nonce must be 12 bytes, got 1");
        let e = EnvelopeError::InvalidEncoding { field: "payload_ct" };
        assert!(e.to_string().contains("payload_ct"));
    }

    #[test]
    fn cipher_auth_failure_stays_opaque() {
        let e: EnvelopeError = CipherError::AuthenticationFailed.into();
        assert_eq!(e, EnvelopeError::AuthenticationFailed);
        assert_eq!(e.to_string(), "authentication failed");
    }

    #[test]
    fn cipher_length_errors_are_internal() {
        let e: EnvelopeError = CipherError::InvalidNonceLength.into();
        assert_eq!(e.class(), ErrorClass::Internal);
    }
}
