//! Error types for the signing facade.

use stellar_base_strkey::StrKeyError;
use stellar_base_xdr::XdrError;
use thiserror::Error;

/// Errors that can occur in facade operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// StrKey encode/decode error.
    #[error("strkey error: {0}")]
    StrKey(#[from] StrKeyError),

    /// XDR encode/decode error.
    #[error("xdr error: {0}")]
    Xdr(#[from] XdrError),

    /// Signature bytes are malformed or do not verify.
    #[error("invalid signature")]
    InvalidSignature,

    /// The 32 bytes are not a valid ed25519 point.
    #[error("invalid public key")]
    InvalidPublicKey,

    /// Signing requested on a keypair that only holds a public key.
    #[error("keypair has no secret key")]
    MissingSecretKey,
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, Error>;
