//! Golden StrKey vectors and rejection cases.
//!
//! Accepted vectors pair a raw payload with its published encoding; every
//! implementation must map one to the other exactly. Rejection cases are built
//! from a valid encoding by corrupting one property at a time, so each fails
//! for exactly one reason.

use serde::{Deserialize, Serialize};
use stellar_base_strkey::{
    base32, crc16, decode_check, encode_check, StrKeyError, VersionByte,
};

/// Ed25519 key shared by most vectors.
pub const KEY_HEX: &str = "3f0c34bf93ad0d9971d04ccc90f705511c838aad9734a4a2fb0d7a03fc7fe89a";

/// [`KEY_HEX`] as bytes.
pub const KEY: [u8; 32] = [
    0x3f, 0x0c, 0x34, 0xbf, 0x93, 0xad, 0x0d, 0x99,
    0x71, 0xd0, 0x4c, 0xcc, 0x90, 0xf7, 0x05, 0x51,
    0x1c, 0x83, 0x8a, 0xad, 0x97, 0x34, 0xa4, 0xa2,
    0xfb, 0x0d, 0x7a, 0x03, 0xfc, 0x7f, 0xe8, 0x9a,
];

/// A known-good StrKey encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldenVector {
    pub name: String,
    pub version: VersionByte,
    /// Payload between version byte and checksum (hex).
    pub raw: String,
    pub encoded: String,
}

/// A string that must fail to decode under `version` with `expected`.
#[derive(Debug, Clone)]
pub struct RejectionVector {
    pub name: &'static str,
    pub version: VersionByte,
    pub encoded: String,
    pub expected: StrKeyError,
}

fn golden(name: &str, version: VersionByte, raw: String, encoded: &str) -> GoldenVector {
    GoldenVector {
        name: name.to_string(),
        version,
        raw,
        encoded: encoded.to_string(),
    }
}

/// All accepted vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    let key = KEY_HEX.to_string();
    let payload_32: String = (1u8..=32).map(|b| format!("{:02x}", b)).collect();
    let payload_29: String = (1u8..=29).map(|b| format!("{:02x}", b)).collect();
    vec![
        golden(
            "account id",
            VersionByte::AccountId,
            key.clone(),
            "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ",
        ),
        golden(
            "zero account id",
            VersionByte::AccountId,
            "00".repeat(32),
            "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF",
        ),
        golden(
            "zero secret seed",
            VersionByte::SecretSeed,
            "00".repeat(32),
            "SAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSU2",
        ),
        golden(
            "secret seed",
            VersionByte::SecretSeed,
            "42".repeat(32),
            "SBBEEQSCIJBEEQSCIJBEEQSCIJBEEQSCIJBEEQSCIJBEEQSCIJBEE5BQ",
        ),
        golden(
            "muxed account",
            VersionByte::MuxedAccount,
            format!("{}{:016x}", key, 97_839_283_928_292u64),
            "MA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUAAALD57XQ344SD6Q",
        ),
        golden(
            "muxed account id zero",
            VersionByte::MuxedAccount,
            format!("{}{:016x}", key, 0u64),
            "MA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUAAAAAAAAAAAACJUQ",
        ),
        golden(
            "pre-auth tx",
            VersionByte::PreAuthTx,
            key.clone(),
            "TA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUPUI",
        ),
        golden(
            "sha256 hash",
            VersionByte::Sha256Hash,
            key.clone(),
            "XA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVLRR",
        ),
        golden(
            "signed payload 32",
            VersionByte::SignedPayload,
            format!("{}{:08x}{}", key, 32, payload_32),
            "PA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUAAAAAQACAQDAQCQMBYIBEFAWDANBYHRAEISCMKBKFQXDAMRUGY4DUPB6IBZGM",
        ),
        golden(
            "signed payload 29",
            VersionByte::SignedPayload,
            format!("{}{:08x}{}000000", key, 29, payload_29),
            "PA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUAAAAAOQCAQDAQCQMBYIBEFAWDANBYHRAEISCMKBKFQXDAMRUGY4DUAAAAFGBU",
        ),
        golden(
            "contract",
            VersionByte::Contract,
            key.clone(),
            "CA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUWDA",
        ),
        golden(
            "liquidity pool",
            VersionByte::LiquidityPool,
            key.clone(),
            "LA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUPJN",
        ),
        golden(
            "claimable balance",
            VersionByte::ClaimableBalance,
            format!("00{}", key),
            "BAAD6DBUX6J22DMZOHIEZTEQ64CVCHEDRKWZONFEUL5Q26QD7R76RGR4TU",
        ),
    ]
}

/// Check every vector in both directions, returning the first failure.
pub fn verify_all_vectors() -> Result<(), String> {
    for vector in all_vectors() {
        let raw = hex::decode(&vector.raw).map_err(|e| format!("{}: {}", vector.name, e))?;
        let encoded = encode_check(vector.version, &raw);
        if encoded != vector.encoded {
            return Err(format!(
                "{}: encoded {} expected {}",
                vector.name, encoded, vector.encoded
            ));
        }
        let decoded = decode_check(vector.version, &vector.encoded)
            .map_err(|e| format!("{}: {}", vector.name, e))?;
        if decoded != raw {
            return Err(format!("{}: decoded payload differs", vector.name));
        }
    }
    Ok(())
}

/// Raw `version || payload || checksum`, with an optional checksum override.
fn frame(version: u8, payload: &[u8], checksum: Option<u16>) -> Vec<u8> {
    let mut data = vec![version];
    data.extend_from_slice(payload);
    let checksum = checksum.unwrap_or_else(|| crc16::checksum(&data));
    data.extend_from_slice(&checksum.to_le_bytes());
    data
}

/// Strings that must be rejected, each for one stated reason.
pub fn rejection_vectors() -> Vec<RejectionVector> {
    let key = KEY;
    let account = encode_check(VersionByte::AccountId, &key);
    let mut signed = vec![VersionByte::AccountId.to_u8()];
    signed.extend_from_slice(&key);
    let good_checksum = crc16::checksum(&signed);
    let wrong_checksum = good_checksum ^ 0x0001;

    vec![
        RejectionVector {
            name: "digit zero outside the alphabet",
            version: VersionByte::AccountId,
            encoded: "GBPXX0A5N4JYPESHAADMQKBPWZWQDQ64ZV6ZL2S3LAGW4SY7NTCMWIVL".to_string(),
            expected: StrKeyError::InvalidCharacterSet {
                character: '0',
                index: 5,
            },
        },
        RejectionVector {
            name: "lowercase",
            version: VersionByte::AccountId,
            encoded: account.to_lowercase(),
            expected: StrKeyError::InvalidCharacterSet {
                character: 'g',
                index: 0,
            },
        },
        RejectionVector {
            name: "padding character",
            version: VersionByte::AccountId,
            encoded: format!("{}=", account),
            expected: StrKeyError::InvalidCharacterSet {
                character: '=',
                index: 56,
            },
        },
        RejectionVector {
            name: "length congruent to 1 mod 8",
            version: VersionByte::AccountId,
            encoded: format!("{}A", account),
            expected: StrKeyError::InvalidLength { length: 57 },
        },
        RejectionVector {
            name: "length congruent to 6 mod 8",
            version: VersionByte::AccountId,
            encoded: account[..54].to_string(),
            expected: StrKeyError::InvalidLength { length: 54 },
        },
        RejectionVector {
            name: "payload one byte short",
            version: VersionByte::AccountId,
            encoded: base32::encode(&frame(VersionByte::AccountId.to_u8(), &key[..31], None)),
            expected: StrKeyError::InvalidLength { length: 34 },
        },
        RejectionVector {
            name: "seed decoded as account id",
            version: VersionByte::AccountId,
            encoded: encode_check(VersionByte::SecretSeed, &key),
            expected: StrKeyError::VersionByteMismatch {
                expected: VersionByte::AccountId.to_u8(),
                actual: VersionByte::SecretSeed.to_u8(),
            },
        },
        RejectionVector {
            name: "version byte with invalid low bits",
            version: VersionByte::AccountId,
            encoded: base32::encode(&frame(VersionByte::AccountId.to_u8() | 0x07, &key, None)),
            expected: StrKeyError::VersionByteMismatch {
                expected: VersionByte::AccountId.to_u8(),
                actual: VersionByte::AccountId.to_u8() | 0x07,
            },
        },
        RejectionVector {
            name: "wrong checksum",
            version: VersionByte::AccountId,
            encoded: base32::encode(&frame(
                VersionByte::AccountId.to_u8(),
                &key,
                Some(wrong_checksum),
            )),
            expected: StrKeyError::ChecksumMismatch {
                expected: good_checksum,
                actual: wrong_checksum,
            },
        },
    ]
}
