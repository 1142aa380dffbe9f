//! Envelope encryption of transaction payloads.
//!
//! Each payload is encrypted under a fresh per-record Data Encryption Key
//! (DEK); the DEK is then encrypted under the caller's master key. Both layers
//! use AES-256-GCM-SIV and bind the record's cleartext metadata as associated
//! data, so a [`SecureRecord`] is self-describing and tamper-evident.
//!
//! ```text
//! payload ──serde_json──► seal(DEK, aad) ──► payload_nonce / payload_ct / payload_tag
//! DEK ──────────────────► seal(MK,  aad) ──► dek_wrap_nonce / dek_wrapped / dek_wrap_tag
//! aad = {id, partyId, createdAt, alg, mk_version}
//! ```
//!
//! # Entry points
//!
//! - [`encrypt_transaction`] builds a record.
//! - [`decrypt_transaction`] validates a record, then opens it.
//!
//! Both are stateless and safe to call concurrently. The master key is passed
//! as hex on every call; nothing here reads ambient configuration.
//!
//! # Errors
//!
//! Structural problems come back as field-named [`EnvelopeError`] variants.
//! Every cryptographic failure is the single opaque
//! [`EnvelopeError::AuthenticationFailed`].

pub mod codec;
pub mod crypto;
pub mod error;
pub mod keys;
pub mod open;
pub mod record;
pub mod seal;
pub mod validate;

pub use error::{EnvelopeError, ErrorClass, Result};
pub use keys::MasterKey;
pub use open::decrypt_transaction;
pub use record::{RecordMetadata, SecureRecord, ALGORITHM, MK_VERSION};
pub use seal::encrypt_transaction;
pub use validate::validate_record_shape;
