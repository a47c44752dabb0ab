//! Structured StrKey payloads: muxed accounts, signed payloads, and
//! claimable balance ids.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, StrKeyError};

/// Maximum number of bytes carried by a signed payload signer.
pub const MAX_SIGNED_PAYLOAD_LEN: usize = 64;

/// An ed25519 account with a 64-bit sub-account id (`M...`).
///
/// On the StrKey wire the key comes first and the id follows, big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MuxedAccountPayload {
    pub ed25519: [u8; 32],
    pub id: u64,
}

impl MuxedAccountPayload {
    pub(crate) fn to_raw(self) -> [u8; 40] {
        let mut raw = [0u8; 40];
        raw[..32].copy_from_slice(&self.ed25519);
        raw[32..].copy_from_slice(&self.id.to_be_bytes());
        raw
    }

    pub(crate) fn from_raw(raw: &[u8]) -> Result<Self> {
        if raw.len() != 40 {
            return Err(StrKeyError::InvalidLength { length: raw.len() });
        }
        let mut ed25519 = [0u8; 32];
        ed25519.copy_from_slice(&raw[..32]);
        let mut id = [0u8; 8];
        id.copy_from_slice(&raw[32..]);
        Ok(Self {
            ed25519,
            id: u64::from_be_bytes(id),
        })
    }
}

/// An ed25519 signer bound to a short payload (`P...`).
///
/// The payload is always `1..=64` bytes; every constructor, including
/// deserialization, enforces it.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SignedPayloadParts")]
pub struct SignedPayload {
    ed25519: [u8; 32],
    payload: Vec<u8>,
}

#[derive(Deserialize)]
struct SignedPayloadParts {
    ed25519: [u8; 32],
    payload: Vec<u8>,
}

impl TryFrom<SignedPayloadParts> for SignedPayload {
    type Error = StrKeyError;

    fn try_from(parts: SignedPayloadParts) -> Result<Self> {
        Self::new(parts.ed25519, parts.payload)
    }
}

impl SignedPayload {
    /// Create a signed payload, rejecting payloads outside `1..=64` bytes.
    pub fn new(ed25519: [u8; 32], payload: Vec<u8>) -> Result<Self> {
        if payload.len() > MAX_SIGNED_PAYLOAD_LEN {
            return Err(StrKeyError::PayloadTooLarge {
                length: payload.len(),
                max: MAX_SIGNED_PAYLOAD_LEN,
            });
        }
        if payload.is_empty() {
            return Err(StrKeyError::InvalidPayload("signed payload is empty".into()));
        }
        Ok(Self { ed25519, payload })
    }

    /// The signer's ed25519 public key.
    pub fn ed25519(&self) -> &[u8; 32] {
        &self.ed25519
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Raw layout: key || u32 BE length || payload || zero padding to 4 bytes.
    pub(crate) fn to_raw(&self) -> Vec<u8> {
        let padded = padded_len(self.payload.len());
        let mut raw = Vec::with_capacity(32 + 4 + padded);
        raw.extend_from_slice(&self.ed25519);
        raw.extend_from_slice(&(self.payload.len() as u32).to_be_bytes());
        raw.extend_from_slice(&self.payload);
        raw.resize(32 + 4 + padded, 0);
        raw
    }

    pub(crate) fn from_raw(raw: &[u8]) -> Result<Self> {
        if raw.len() < 32 + 4 {
            return Err(StrKeyError::InvalidLength { length: raw.len() });
        }
        let mut ed25519 = [0u8; 32];
        ed25519.copy_from_slice(&raw[..32]);

        let mut declared = [0u8; 4];
        declared.copy_from_slice(&raw[32..36]);
        let declared = u32::from_be_bytes(declared) as usize;
        if declared > MAX_SIGNED_PAYLOAD_LEN {
            return Err(StrKeyError::PayloadTooLarge {
                length: declared,
                max: MAX_SIGNED_PAYLOAD_LEN,
            });
        }

        let body = &raw[36..];
        if body.len() != padded_len(declared) {
            return Err(StrKeyError::InvalidPayload(format!(
                "declared length {} does not match {} encoded bytes",
                declared,
                body.len()
            )));
        }
        if body[declared..].iter().any(|&b| b != 0) {
            return Err(StrKeyError::InvalidPayload("non-zero padding".into()));
        }

        Self::new(ed25519, body[..declared].to_vec())
    }
}

impl fmt::Debug for SignedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SignedPayload({}..., {})",
            &hex::encode(self.ed25519)[..8],
            hex::encode(&self.payload)
        )
    }
}

/// A claimable balance id (`B...`): a type discriminant and a 32-byte hash.
///
/// Only the V0 discriminant exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimableBalance {
    V0([u8; 32]),
}

impl ClaimableBalance {
    /// The discriminant byte as it appears in the StrKey payload.
    pub fn discriminant(&self) -> u8 {
        match self {
            Self::V0(_) => 0,
        }
    }

    /// The balance hash.
    pub fn hash(&self) -> &[u8; 32] {
        match self {
            Self::V0(hash) => hash,
        }
    }

    /// Raw StrKey payload: discriminant byte || hash.
    pub fn to_raw(&self) -> [u8; 33] {
        let mut raw = [0u8; 33];
        raw[0] = self.discriminant();
        raw[1..].copy_from_slice(self.hash());
        raw
    }

    /// Parse the raw StrKey payload.
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        if raw.len() != 33 {
            return Err(StrKeyError::InvalidLength { length: raw.len() });
        }
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&raw[1..]);
        Self::from_parts(raw[0] as u32, hash)
    }

    /// Build from a discriminant value and hash.
    pub fn from_parts(discriminant: u32, hash: [u8; 32]) -> Result<Self> {
        match discriminant {
            0 => Ok(Self::V0(hash)),
            other => Err(StrKeyError::InvalidPayload(format!(
                "unknown claimable balance type {}",
                other
            ))),
        }
    }

    /// XDR form as hex: 4-byte big-endian discriminant || hash.
    ///
    /// This is the form ledger APIs return balance ids in.
    pub fn to_xdr_hex(&self) -> String {
        let mut bytes = Vec::with_capacity(36);
        bytes.extend_from_slice(&(self.discriminant() as u32).to_be_bytes());
        bytes.extend_from_slice(self.hash());
        hex::encode(bytes)
    }

    /// Parse hex in either the 33-byte raw form or the 36-byte XDR form.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        match bytes.len() {
            33 => Self::from_raw(&bytes),
            36 => {
                let mut discriminant = [0u8; 4];
                discriminant.copy_from_slice(&bytes[..4]);
                let mut hash = [0u8; 32];
                hash.copy_from_slice(&bytes[4..]);
                Self::from_parts(u32::from_be_bytes(discriminant), hash)
            }
            length => Err(StrKeyError::InvalidLength { length }),
        }
    }
}

fn padded_len(len: usize) -> usize {
    (len + 3) & !3
}
