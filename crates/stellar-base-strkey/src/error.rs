//! Error types for StrKey decoding.

use thiserror::Error;

use crate::base32::Base32Error;

/// Errors that can occur while encoding or decoding a StrKey.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrKeyError {
    #[error("invalid character {character:?} at index {index}")]
    InvalidCharacterSet { character: char, index: usize },

    #[error("final base32 symbol has non-zero trailing bits")]
    NonZeroTrailingBits,

    #[error("invalid length: {length}")]
    InvalidLength { length: usize },

    #[error("version byte mismatch: expected {expected:#04x}, got {actual:#04x}")]
    VersionByteMismatch { expected: u8, actual: u8 },

    #[error("unknown version byte: {0:#04x}")]
    UnknownVersionByte(u8),

    #[error("checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    #[error("payload of {length} bytes exceeds maximum of {max}")]
    PayloadTooLarge { length: usize, max: usize },

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl From<Base32Error> for StrKeyError {
    fn from(e: Base32Error) -> Self {
        match e {
            Base32Error::InvalidCharacter { character, index } => {
                StrKeyError::InvalidCharacterSet { character, index }
            }
            Base32Error::NonZeroTrailingBits => StrKeyError::NonZeroTrailingBits,
            Base32Error::InvalidLength(length) => StrKeyError::InvalidLength { length },
        }
    }
}

impl From<hex::FromHexError> for StrKeyError {
    fn from(e: hex::FromHexError) -> Self {
        StrKeyError::InvalidHex(e.to_string())
    }
}

/// Result type for StrKey operations.
pub type Result<T> = std::result::Result<T, StrKeyError>;
