//! Error types for XDR encoding and decoding.

use stellar_base_strkey::StrKeyError;
use thiserror::Error;

/// Errors that can occur while reading or writing XDR.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XdrError {
    #[error("buffer underrun: needed {needed} bytes, {remaining} remaining")]
    BufferUnderrun { needed: usize, remaining: usize },

    #[error("unknown {type_name} union arm: {discriminant}")]
    UnknownUnionArm {
        type_name: &'static str,
        discriminant: i32,
    },

    #[error("length {length} exceeds maximum of {max}")]
    LengthExceedsMax { length: usize, max: usize },

    #[error("invalid boolean: {0}")]
    InvalidBool(u32),

    #[error("non-zero padding")]
    NonZeroPadding,

    #[error("string is not valid UTF-8")]
    InvalidUtf8,

    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),

    #[error("input of {length} bytes exceeds limit of {max}")]
    InputTooLarge { length: usize, max: usize },

    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    #[error("invalid asset code: {0}")]
    InvalidAssetCode(String),

    #[error("strkey error: {0}")]
    StrKey(#[from] StrKeyError),
}

impl From<base64::DecodeError> for XdrError {
    fn from(e: base64::DecodeError) -> Self {
        XdrError::InvalidBase64(e.to_string())
    }
}

/// Result type for XDR operations.
pub type Result<T> = std::result::Result<T, XdrError>;
