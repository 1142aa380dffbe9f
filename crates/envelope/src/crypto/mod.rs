//! AES-256-GCM-SIV AEAD primitives.
//!
//! This module is intentionally free of record and serialisation concerns.
//! It provides the low-level seal/open operations used by both envelope
//! layers: the payload under the DEK, and the DEK under the master key.
//!
//! # Output shape
//!
//! ```text
//! nonce (12 bytes) | ciphertext (len(plaintext) bytes) | tag (16 bytes)
//! ```
//!
//! The three parts are kept separate so the record can store them as
//! individually length-checked fields.

pub mod cipher;

pub use cipher::{open, seal, CipherError, SealedBox, KEY_LEN, NONCE_LEN, TAG_LEN};
