//! # Stellar Base StrKey
//!
//! Versioned, checksummed, base-32 text encoding of Stellar key material and
//! identifiers.
//!
//! This crate contains no I/O and no global mutable state. Every function is a
//! pure transformation between raw bytes and StrKey text.
//!
//! ## Layout of an encoded key
//!
//! ```text
//! base32( version_byte || payload || crc16_xmodem(version_byte || payload) as LE u16 )
//! ```
//!
//! The version byte determines the first character of the string:
//!
//! | Variant | Prefix | Payload |
//! |---|---|---|
//! | Account ID | `G` | 32-byte ed25519 public key |
//! | Secret seed | `S` | 32-byte ed25519 seed |
//! | Muxed account | `M` | 32-byte key + 8-byte big-endian id |
//! | Pre-auth tx | `T` | 32-byte transaction hash |
//! | SHA-256 hash | `X` | 32-byte hash preimage digest |
//! | Signed payload | `P` | 32-byte key + XDR `opaque<64>` |
//! | Contract | `C` | 32-byte contract id |
//! | Liquidity pool | `L` | 32-byte pool id |
//! | Claimable balance | `B` | 1-byte discriminant + 32-byte hash |
//!
//! ## Example
//!
//! ```rust
//! use stellar_base_strkey::{decode_account_id, encode_account_id, is_valid_account_id};
//!
//! let key = [0u8; 32];
//! let encoded = encode_account_id(&key);
//! assert!(encoded.starts_with('G'));
//! assert!(is_valid_account_id(&encoded));
//! assert_eq!(decode_account_id(&encoded).unwrap(), key);
//! ```

pub mod base32;
pub mod crc16;
pub mod error;
pub mod payload;
pub mod strkey;
pub mod version;

pub use error::{Result, StrKeyError};
pub use payload::{ClaimableBalance, MuxedAccountPayload, SignedPayload, MAX_SIGNED_PAYLOAD_LEN};
pub use strkey::*;
pub use version::VersionByte;
