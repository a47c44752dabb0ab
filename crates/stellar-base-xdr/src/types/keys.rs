//! Account and signer keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use stellar_base_strkey::{
    decode_account_id, encode_account_id, encode_muxed_account, encode_pre_auth_tx,
    encode_sha256_hash, encode_signed_payload, MuxedAccountPayload, SignedPayload, StrKeyError,
    Strkey, VersionByte, MAX_SIGNED_PAYLOAD_LEN,
};

use crate::error::{Result, XdrError};
use crate::reader::XdrReader;
use crate::traits::{ReadXdr, WriteXdr};
use crate::writer::XdrWriter;

use super::Uint256;

/// XDR `CryptoKeyType` / `SignerKeyType` discriminants.
mod key_type {
    pub const ED25519: i32 = 0;
    pub const PRE_AUTH_TX: i32 = 1;
    pub const HASH_X: i32 = 2;
    pub const ED25519_SIGNED_PAYLOAD: i32 = 3;
    pub const MUXED_ED25519: i32 = 0x100;
}

/// XDR `PublicKeyType` discriminants.
mod public_key_type {
    pub const ED25519: i32 = 0;
}

fn unexpected_version(expected: VersionByte, key: &Strkey) -> XdrError {
    XdrError::StrKey(StrKeyError::VersionByteMismatch {
        expected: expected.to_u8(),
        actual: key.version().to_u8(),
    })
}

/// A public key. Only ed25519 is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublicKey {
    Ed25519(Uint256),
}

impl WriteXdr for PublicKey {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        match self {
            Self::Ed25519(key) => {
                w.write_discriminant(public_key_type::ED25519);
                key.write_xdr(w)
            }
        }
    }
}

impl ReadXdr for PublicKey {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| match r.read_discriminant()? {
            public_key_type::ED25519 => Ok(Self::Ed25519(r.read_fixed_opaque()?)),
            discriminant => Err(XdrError::UnknownUnionArm {
                type_name: "PublicKey",
                discriminant,
            }),
        })
    }
}

/// An account identifier (`G...`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub PublicKey);

impl AccountId {
    /// Create from a raw ed25519 public key.
    pub const fn from_ed25519(key: Uint256) -> Self {
        Self(PublicKey::Ed25519(key))
    }

    /// The raw ed25519 public key.
    pub fn ed25519(&self) -> &Uint256 {
        match &self.0 {
            PublicKey::Ed25519(key) => key,
        }
    }

    /// Encode as a `G...` StrKey.
    pub fn to_strkey(&self) -> String {
        encode_account_id(self.ed25519())
    }

    /// Parse a `G...` StrKey.
    pub fn from_strkey(encoded: &str) -> Result<Self> {
        Ok(Self::from_ed25519(decode_account_id(encoded)?))
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.to_strkey())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_strkey())
    }
}

impl FromStr for AccountId {
    type Err = XdrError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_strkey(s)
    }
}

impl WriteXdr for AccountId {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        self.0.write_xdr(w)
    }
}

impl ReadXdr for AccountId {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| Ok(Self(PublicKey::read_xdr(r)?)))
    }
}

/// A transaction or operation source: a plain account (`G...`) or a muxed
/// account (`M...`).
///
/// The XDR muxed arm stores the id before the key; the StrKey form stores the
/// key first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuxedAccount {
    Ed25519(Uint256),
    MuxedEd25519 { id: u64, ed25519: Uint256 },
}

impl MuxedAccount {
    /// The underlying ed25519 key.
    pub fn ed25519(&self) -> &Uint256 {
        match self {
            Self::Ed25519(key) | Self::MuxedEd25519 { ed25519: key, .. } => key,
        }
    }

    /// The base account, dropping any sub-account id.
    pub fn account_id(&self) -> AccountId {
        AccountId::from_ed25519(*self.ed25519())
    }

    /// The sub-account id, if muxed.
    pub fn id(&self) -> Option<u64> {
        match self {
            Self::Ed25519(_) => None,
            Self::MuxedEd25519 { id, .. } => Some(*id),
        }
    }

    /// Encode as `G...` or `M...`.
    pub fn to_strkey(&self) -> String {
        match self {
            Self::Ed25519(key) => encode_account_id(key),
            Self::MuxedEd25519 { id, ed25519 } => encode_muxed_account(&MuxedAccountPayload {
                ed25519: *ed25519,
                id: *id,
            }),
        }
    }

    /// Parse a `G...` or `M...` StrKey.
    pub fn from_strkey(encoded: &str) -> Result<Self> {
        match Strkey::from_string(encoded)? {
            Strkey::AccountId(key) => Ok(Self::Ed25519(key)),
            Strkey::MuxedAccount(muxed) => Ok(Self::MuxedEd25519 {
                id: muxed.id,
                ed25519: muxed.ed25519,
            }),
            other => Err(unexpected_version(VersionByte::MuxedAccount, &other)),
        }
    }
}

impl From<AccountId> for MuxedAccount {
    fn from(account: AccountId) -> Self {
        Self::Ed25519(*account.ed25519())
    }
}

impl fmt::Display for MuxedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_strkey())
    }
}

impl FromStr for MuxedAccount {
    type Err = XdrError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_strkey(s)
    }
}

impl WriteXdr for MuxedAccount {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        match self {
            Self::Ed25519(key) => {
                w.write_discriminant(key_type::ED25519);
                key.write_xdr(w)
            }
            Self::MuxedEd25519 { id, ed25519 } => {
                w.write_discriminant(key_type::MUXED_ED25519);
                w.write_u64(*id);
                ed25519.write_xdr(w)
            }
        }
    }
}

impl ReadXdr for MuxedAccount {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| match r.read_discriminant()? {
            key_type::ED25519 => Ok(Self::Ed25519(r.read_fixed_opaque()?)),
            key_type::MUXED_ED25519 => Ok(Self::MuxedEd25519 {
                id: r.read_u64()?,
                ed25519: r.read_fixed_opaque()?,
            }),
            discriminant => Err(XdrError::UnknownUnionArm {
                type_name: "MuxedAccount",
                discriminant,
            }),
        })
    }
}

/// A key that may be added as an account signer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignerKey {
    Ed25519(Uint256),
    PreAuthTx(Uint256),
    HashX(Uint256),
    Ed25519SignedPayload(SignedPayload),
}

impl SignerKey {
    /// Encode as `G...`, `T...`, `X...` or `P...`.
    pub fn to_strkey(&self) -> String {
        match self {
            Self::Ed25519(key) => encode_account_id(key),
            Self::PreAuthTx(hash) => encode_pre_auth_tx(hash),
            Self::HashX(hash) => encode_sha256_hash(hash),
            Self::Ed25519SignedPayload(signed) => encode_signed_payload(signed),
        }
    }

    /// Parse a `G...`, `T...`, `X...` or `P...` StrKey.
    pub fn from_strkey(encoded: &str) -> Result<Self> {
        match Strkey::from_string(encoded)? {
            Strkey::AccountId(key) => Ok(Self::Ed25519(key)),
            Strkey::PreAuthTx(hash) => Ok(Self::PreAuthTx(hash)),
            Strkey::Sha256Hash(hash) => Ok(Self::HashX(hash)),
            Strkey::SignedPayload(signed) => Ok(Self::Ed25519SignedPayload(signed)),
            other => Err(unexpected_version(VersionByte::AccountId, &other)),
        }
    }
}

impl FromStr for SignerKey {
    type Err = XdrError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_strkey(s)
    }
}

impl WriteXdr for SignedPayload {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        self.ed25519().write_xdr(w)?;
        w.write_var_opaque(self.payload(), MAX_SIGNED_PAYLOAD_LEN as u32)
    }
}

impl ReadXdr for SignedPayload {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| {
            let ed25519 = r.read_fixed_opaque()?;
            let payload = r.read_var_opaque(MAX_SIGNED_PAYLOAD_LEN as u32)?;
            Ok(Self::new(ed25519, payload)?)
        })
    }
}

impl WriteXdr for SignerKey {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        match self {
            Self::Ed25519(key) => {
                w.write_discriminant(key_type::ED25519);
                key.write_xdr(w)
            }
            Self::PreAuthTx(hash) => {
                w.write_discriminant(key_type::PRE_AUTH_TX);
                hash.write_xdr(w)
            }
            Self::HashX(hash) => {
                w.write_discriminant(key_type::HASH_X);
                hash.write_xdr(w)
            }
            Self::Ed25519SignedPayload(signed) => {
                w.write_discriminant(key_type::ED25519_SIGNED_PAYLOAD);
                signed.write_xdr(w)
            }
        }
    }
}

impl ReadXdr for SignerKey {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| match r.read_discriminant()? {
            key_type::ED25519 => Ok(Self::Ed25519(r.read_fixed_opaque()?)),
            key_type::PRE_AUTH_TX => Ok(Self::PreAuthTx(r.read_fixed_opaque()?)),
            key_type::HASH_X => Ok(Self::HashX(r.read_fixed_opaque()?)),
            key_type::ED25519_SIGNED_PAYLOAD => {
                Ok(Self::Ed25519SignedPayload(SignedPayload::read_xdr(r)?))
            }
            discriminant => Err(XdrError::UnknownUnionArm {
                type_name: "SignerKey",
                discriminant,
            }),
        })
    }
}
