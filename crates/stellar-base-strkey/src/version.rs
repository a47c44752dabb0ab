//! StrKey version bytes.
//!
//! Each version byte is a 5-bit base-32 symbol index shifted left by three, so
//! the first encoded character is fixed per variant and the low three bits are
//! always zero.

use serde::{Deserialize, Serialize};

use crate::payload::MAX_SIGNED_PAYLOAD_LEN;

/// Bytes added around every payload: one version byte and a 2-byte checksum.
pub const ENVELOPE_LEN: usize = 1 + 2;

/// The StrKey variant, identified by its leading version byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum VersionByte {
    /// `G...`
    AccountId = 6 << 3,
    /// `S...`
    SecretSeed = 18 << 3,
    /// `M...`
    MuxedAccount = 12 << 3,
    /// `T...`
    PreAuthTx = 19 << 3,
    /// `X...`
    Sha256Hash = 23 << 3,
    /// `P...`
    SignedPayload = 15 << 3,
    /// `C...`
    Contract = 2 << 3,
    /// `L...`
    LiquidityPool = 11 << 3,
    /// `B...`
    ClaimableBalance = 1 << 3,
}

impl VersionByte {
    /// All variants, in prefix order.
    pub const ALL: [VersionByte; 9] = [
        Self::ClaimableBalance,
        Self::Contract,
        Self::AccountId,
        Self::LiquidityPool,
        Self::MuxedAccount,
        Self::SignedPayload,
        Self::SecretSeed,
        Self::PreAuthTx,
        Self::Sha256Hash,
    ];

    /// Convert to the raw byte.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Try to parse from a raw byte.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.to_u8() == value)
    }

    /// The first character of every string encoded with this version.
    pub fn prefix(self) -> char {
        crate::base32::encode(&[self.to_u8()])
            .chars()
            .next()
            .unwrap_or('?')
    }

    /// Whether a fully decoded StrKey of `len` bytes (version, payload and
    /// checksum) has an acceptable size for this variant.
    pub fn accepts_decoded_len(self, len: usize) -> bool {
        match self {
            Self::AccountId
            | Self::SecretSeed
            | Self::PreAuthTx
            | Self::Sha256Hash
            | Self::Contract
            | Self::LiquidityPool => len == ENVELOPE_LEN + 32,
            Self::MuxedAccount => len == ENVELOPE_LEN + 32 + 8,
            Self::ClaimableBalance => len == ENVELOPE_LEN + 1 + 32,
            // Signer key, 4-byte length, then 4..=64 padded payload bytes.
            Self::SignedPayload => {
                (ENVELOPE_LEN + 32 + 4 + 4..=ENVELOPE_LEN + 32 + 4 + MAX_SIGNED_PAYLOAD_LEN)
                    .contains(&len)
            }
        }
    }
}
