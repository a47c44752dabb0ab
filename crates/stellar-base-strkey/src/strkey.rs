//! StrKey encode/decode for every variant.
//!
//! Decoding checks, in order: base-32 alphabet and trailing bits, decoded
//! length for the variant, exact version byte, then the CRC16 checksum. Only
//! after all four pass is the payload returned.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::base32;
use crate::crc16;
use crate::error::{Result, StrKeyError};
use crate::payload::{ClaimableBalance, MuxedAccountPayload, SignedPayload};
use crate::version::VersionByte;

/// Encode `payload` under `version`, appending the checksum.
pub fn encode_check(version: VersionByte, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + 2);
    data.push(version.to_u8());
    data.extend_from_slice(payload);
    let checksum = crc16::checksum_bytes(&data);
    data.extend_from_slice(&checksum);
    base32::encode(&data)
}

/// Decode a string expected to carry `version`, returning the payload.
pub fn decode_check(version: VersionByte, encoded: &str) -> Result<Vec<u8>> {
    let decoded = base32::decode(encoded)?;
    Ok(check_decoded(version, &decoded)?.to_vec())
}

/// Run the length, version and checksum checks over already base-32 decoded
/// bytes, returning the payload between the version byte and the checksum.
fn check_decoded(version: VersionByte, decoded: &[u8]) -> Result<&[u8]> {
    if !version.accepts_decoded_len(decoded.len()) {
        return Err(StrKeyError::InvalidLength {
            length: decoded.len(),
        });
    }

    if decoded[0] != version.to_u8() {
        return Err(StrKeyError::VersionByteMismatch {
            expected: version.to_u8(),
            actual: decoded[0],
        });
    }

    verify_checksum(decoded)?;

    Ok(&decoded[1..decoded.len() - 2])
}

/// Compare the trailing little-endian checksum against the recomputed one.
fn verify_checksum(decoded: &[u8]) -> Result<()> {
    let (data, trailer) = decoded.split_at(decoded.len() - 2);
    let expected = crc16::checksum(data);
    let actual = u16::from_le_bytes([trailer[0], trailer[1]]);
    if expected != actual {
        return Err(StrKeyError::ChecksumMismatch { expected, actual });
    }
    Ok(())
}

fn decode_32(version: VersionByte, encoded: &str) -> Result<[u8; 32]> {
    let payload = decode_check(version, encoded)?;
    to_array(&payload)
}

fn to_array(bytes: &[u8]) -> Result<[u8; 32]> {
    bytes
        .try_into()
        .map_err(|_| StrKeyError::InvalidLength { length: bytes.len() })
}

fn is_valid<T>(result: Result<T>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            tracing::trace!(error = %e, "strkey rejected");
            false
        }
    }
}

// Account ID (G)

/// Encode an ed25519 public key as `G...`.
pub fn encode_account_id(key: &[u8; 32]) -> String {
    encode_check(VersionByte::AccountId, key)
}

/// Decode a `G...` string to the ed25519 public key.
pub fn decode_account_id(encoded: &str) -> Result<[u8; 32]> {
    decode_32(VersionByte::AccountId, encoded)
}

/// Whether `encoded` is a well-formed `G...` string.
pub fn is_valid_account_id(encoded: &str) -> bool {
    is_valid(decode_account_id(encoded))
}

// Secret seed (S)

/// Encode an ed25519 seed as `S...`.
pub fn encode_secret_seed(seed: &[u8; 32]) -> String {
    encode_check(VersionByte::SecretSeed, seed)
}

/// Decode an `S...` string to the ed25519 seed.
pub fn decode_secret_seed(encoded: &str) -> Result<[u8; 32]> {
    decode_32(VersionByte::SecretSeed, encoded)
}

/// Whether `encoded` is a well-formed `S...` string.
pub fn is_valid_secret_seed(encoded: &str) -> bool {
    is_valid(decode_secret_seed(encoded))
}

// Muxed account (M)

/// Encode an ed25519 key and sub-account id as `M...`.
pub fn encode_muxed_account(muxed: &MuxedAccountPayload) -> String {
    encode_check(VersionByte::MuxedAccount, &muxed.to_raw())
}

/// Decode an `M...` string.
pub fn decode_muxed_account(encoded: &str) -> Result<MuxedAccountPayload> {
    let payload = decode_check(VersionByte::MuxedAccount, encoded)?;
    MuxedAccountPayload::from_raw(&payload)
}

/// Whether `encoded` is a well-formed `M...` string.
pub fn is_valid_muxed_account(encoded: &str) -> bool {
    is_valid(decode_muxed_account(encoded))
}

// Pre-auth transaction (T)

/// Encode a transaction hash as `T...`.
pub fn encode_pre_auth_tx(hash: &[u8; 32]) -> String {
    encode_check(VersionByte::PreAuthTx, hash)
}

/// Decode a `T...` string.
pub fn decode_pre_auth_tx(encoded: &str) -> Result<[u8; 32]> {
    decode_32(VersionByte::PreAuthTx, encoded)
}

/// Whether `encoded` is a well-formed `T...` string.
pub fn is_valid_pre_auth_tx(encoded: &str) -> bool {
    is_valid(decode_pre_auth_tx(encoded))
}

// SHA-256 hash signer (X)

/// Encode a hash-x signer digest as `X...`.
pub fn encode_sha256_hash(hash: &[u8; 32]) -> String {
    encode_check(VersionByte::Sha256Hash, hash)
}

/// Decode an `X...` string.
pub fn decode_sha256_hash(encoded: &str) -> Result<[u8; 32]> {
    decode_32(VersionByte::Sha256Hash, encoded)
}

/// Whether `encoded` is a well-formed `X...` string.
pub fn is_valid_sha256_hash(encoded: &str) -> bool {
    is_valid(decode_sha256_hash(encoded))
}

// Signed payload (P)

/// Encode a signed payload signer as `P...`.
pub fn encode_signed_payload(signed: &SignedPayload) -> String {
    encode_check(VersionByte::SignedPayload, &signed.to_raw())
}

/// Decode a `P...` string.
pub fn decode_signed_payload(encoded: &str) -> Result<SignedPayload> {
    let payload = decode_check(VersionByte::SignedPayload, encoded)?;
    SignedPayload::from_raw(&payload)
}

/// Whether `encoded` is a well-formed `P...` string.
pub fn is_valid_signed_payload(encoded: &str) -> bool {
    is_valid(decode_signed_payload(encoded))
}

// Contract (C)

/// Encode a contract id as `C...`.
pub fn encode_contract_id(id: &[u8; 32]) -> String {
    encode_check(VersionByte::Contract, id)
}

/// Decode a `C...` string.
pub fn decode_contract_id(encoded: &str) -> Result<[u8; 32]> {
    decode_32(VersionByte::Contract, encoded)
}

/// Encode a 32-byte hex contract id as `C...`.
pub fn encode_contract_id_hex(hex_id: &str) -> Result<String> {
    Ok(encode_contract_id(&to_array(&hex::decode(hex_id)?)?))
}

/// Decode a `C...` string to lower-case hex.
pub fn decode_contract_id_to_hex(encoded: &str) -> Result<String> {
    Ok(hex::encode(decode_contract_id(encoded)?))
}

/// Whether `encoded` is a well-formed `C...` string.
pub fn is_valid_contract_id(encoded: &str) -> bool {
    is_valid(decode_contract_id(encoded))
}

// Liquidity pool (L)

/// Encode a liquidity pool id as `L...`.
pub fn encode_liquidity_pool_id(id: &[u8; 32]) -> String {
    encode_check(VersionByte::LiquidityPool, id)
}

/// Decode an `L...` string.
pub fn decode_liquidity_pool_id(encoded: &str) -> Result<[u8; 32]> {
    decode_32(VersionByte::LiquidityPool, encoded)
}

/// Encode a 32-byte hex pool id as `L...`.
pub fn encode_liquidity_pool_id_hex(hex_id: &str) -> Result<String> {
    Ok(encode_liquidity_pool_id(&to_array(&hex::decode(hex_id)?)?))
}

/// Decode an `L...` string to lower-case hex.
pub fn decode_liquidity_pool_id_to_hex(encoded: &str) -> Result<String> {
    Ok(hex::encode(decode_liquidity_pool_id(encoded)?))
}

/// Whether `encoded` is a well-formed `L...` string.
pub fn is_valid_liquidity_pool_id(encoded: &str) -> bool {
    is_valid(decode_liquidity_pool_id(encoded))
}

// Claimable balance (B)

/// Encode a claimable balance id as `B...`.
pub fn encode_claimable_balance_id(balance: &ClaimableBalance) -> String {
    encode_check(VersionByte::ClaimableBalance, &balance.to_raw())
}

/// Decode a `B...` string.
pub fn decode_claimable_balance_id(encoded: &str) -> Result<ClaimableBalance> {
    let payload = decode_check(VersionByte::ClaimableBalance, encoded)?;
    ClaimableBalance::from_raw(&payload)
}

/// Encode a hex balance id (raw 33-byte or XDR 36-byte form) as `B...`.
pub fn encode_claimable_balance_id_hex(hex_id: &str) -> Result<String> {
    Ok(encode_claimable_balance_id(&ClaimableBalance::from_hex(
        hex_id,
    )?))
}

/// Decode a `B...` string to the XDR hex form.
pub fn decode_claimable_balance_id_to_hex(encoded: &str) -> Result<String> {
    Ok(decode_claimable_balance_id(encoded)?.to_xdr_hex())
}

/// Whether `encoded` is a well-formed `B...` string.
pub fn is_valid_claimable_balance_id(encoded: &str) -> bool {
    is_valid(decode_claimable_balance_id(encoded))
}

/// Any decoded StrKey, tagged by variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strkey {
    AccountId([u8; 32]),
    SecretSeed([u8; 32]),
    MuxedAccount(MuxedAccountPayload),
    PreAuthTx([u8; 32]),
    Sha256Hash([u8; 32]),
    SignedPayload(SignedPayload),
    Contract([u8; 32]),
    LiquidityPool([u8; 32]),
    ClaimableBalance(ClaimableBalance),
}

impl Strkey {
    /// Decode a string of any variant, dispatching on its version byte.
    pub fn from_string(encoded: &str) -> Result<Self> {
        let decoded = base32::decode(encoded)?;
        let first = *decoded.first().ok_or(StrKeyError::InvalidLength { length: 0 })?;
        let version = VersionByte::from_u8(first).ok_or(StrKeyError::UnknownVersionByte(first))?;
        let payload = check_decoded(version, &decoded)?;

        Ok(match version {
            VersionByte::AccountId => Self::AccountId(to_array(payload)?),
            VersionByte::SecretSeed => Self::SecretSeed(to_array(payload)?),
            VersionByte::MuxedAccount => {
                Self::MuxedAccount(MuxedAccountPayload::from_raw(payload)?)
            }
            VersionByte::PreAuthTx => Self::PreAuthTx(to_array(payload)?),
            VersionByte::Sha256Hash => Self::Sha256Hash(to_array(payload)?),
            VersionByte::SignedPayload => Self::SignedPayload(SignedPayload::from_raw(payload)?),
            VersionByte::Contract => Self::Contract(to_array(payload)?),
            VersionByte::LiquidityPool => Self::LiquidityPool(to_array(payload)?),
            VersionByte::ClaimableBalance => {
                Self::ClaimableBalance(ClaimableBalance::from_raw(payload)?)
            }
        })
    }

    /// The variant's version byte.
    pub fn version(&self) -> VersionByte {
        match self {
            Self::AccountId(_) => VersionByte::AccountId,
            Self::SecretSeed(_) => VersionByte::SecretSeed,
            Self::MuxedAccount(_) => VersionByte::MuxedAccount,
            Self::PreAuthTx(_) => VersionByte::PreAuthTx,
            Self::Sha256Hash(_) => VersionByte::Sha256Hash,
            Self::SignedPayload(_) => VersionByte::SignedPayload,
            Self::Contract(_) => VersionByte::Contract,
            Self::LiquidityPool(_) => VersionByte::LiquidityPool,
            Self::ClaimableBalance(_) => VersionByte::ClaimableBalance,
        }
    }

    /// Encode back to text.
    pub fn to_encoded(&self) -> String {
        match self {
            Self::AccountId(key) => encode_account_id(key),
            Self::SecretSeed(seed) => encode_secret_seed(seed),
            Self::MuxedAccount(muxed) => encode_muxed_account(muxed),
            Self::PreAuthTx(hash) => encode_pre_auth_tx(hash),
            Self::Sha256Hash(hash) => encode_sha256_hash(hash),
            Self::SignedPayload(signed) => encode_signed_payload(signed),
            Self::Contract(id) => encode_contract_id(id),
            Self::LiquidityPool(id) => encode_liquidity_pool_id(id),
            Self::ClaimableBalance(balance) => encode_claimable_balance_id(balance),
        }
    }
}

impl FromStr for Strkey {
    type Err = StrKeyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl fmt::Display for Strkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_encoded())
    }
}
