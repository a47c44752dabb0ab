//! Assets: the native lumen or an issued credit.

use serde::{Deserialize, Serialize};

use crate::error::{Result, XdrError};
use crate::reader::XdrReader;
use crate::traits::{ReadXdr, WriteXdr};
use crate::writer::XdrWriter;

use super::keys::AccountId;

mod asset_type {
    pub const NATIVE: i32 = 0;
    pub const CREDIT_ALPHANUM4: i32 = 1;
    pub const CREDIT_ALPHANUM12: i32 = 2;
}

/// A credit with a 1-4 character code, zero-padded on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlphaNum4 {
    pub asset_code: [u8; 4],
    pub issuer: AccountId,
}

/// A credit with a 5-12 character code, zero-padded on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlphaNum12 {
    pub asset_code: [u8; 12],
    pub issuer: AccountId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    Native,
    CreditAlphanum4(AlphaNum4),
    CreditAlphanum12(AlphaNum12),
}

impl Asset {
    /// An issued asset; the code length picks the 4- or 12-byte arm.
    pub fn credit(code: &str, issuer: AccountId) -> Result<Self> {
        if code.is_empty() || !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(XdrError::InvalidAssetCode(code.to_string()));
        }
        match code.len() {
            1..=4 => {
                let mut asset_code = [0u8; 4];
                asset_code[..code.len()].copy_from_slice(code.as_bytes());
                Ok(Self::CreditAlphanum4(AlphaNum4 { asset_code, issuer }))
            }
            5..=12 => {
                let mut asset_code = [0u8; 12];
                asset_code[..code.len()].copy_from_slice(code.as_bytes());
                Ok(Self::CreditAlphanum12(AlphaNum12 { asset_code, issuer }))
            }
            _ => Err(XdrError::InvalidAssetCode(code.to_string())),
        }
    }

    /// The asset code without padding; `"XLM"` for native.
    pub fn code(&self) -> String {
        let raw: &[u8] = match self {
            Self::Native => return "XLM".to_string(),
            Self::CreditAlphanum4(a) => &a.asset_code,
            Self::CreditAlphanum12(a) => &a.asset_code,
        };
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        String::from_utf8_lossy(&raw[..end]).into_owned()
    }

    /// The issuer, if not native.
    pub fn issuer(&self) -> Option<&AccountId> {
        match self {
            Self::Native => None,
            Self::CreditAlphanum4(a) => Some(&a.issuer),
            Self::CreditAlphanum12(a) => Some(&a.issuer),
        }
    }
}

impl WriteXdr for Asset {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        match self {
            Self::Native => {
                w.write_discriminant(asset_type::NATIVE);
                Ok(())
            }
            Self::CreditAlphanum4(a) => {
                w.write_discriminant(asset_type::CREDIT_ALPHANUM4);
                w.write_fixed_opaque(&a.asset_code);
                a.issuer.write_xdr(w)
            }
            Self::CreditAlphanum12(a) => {
                w.write_discriminant(asset_type::CREDIT_ALPHANUM12);
                w.write_fixed_opaque(&a.asset_code);
                a.issuer.write_xdr(w)
            }
        }
    }
}

impl ReadXdr for Asset {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| match r.read_discriminant()? {
            asset_type::NATIVE => Ok(Self::Native),
            asset_type::CREDIT_ALPHANUM4 => Ok(Self::CreditAlphanum4(AlphaNum4 {
                asset_code: r.read_fixed_opaque()?,
                issuer: AccountId::read_xdr(r)?,
            })),
            asset_type::CREDIT_ALPHANUM12 => Ok(Self::CreditAlphanum12(AlphaNum12 {
                asset_code: r.read_fixed_opaque()?,
                issuer: AccountId::read_xdr(r)?,
            })),
            discriminant => Err(XdrError::UnknownUnionArm {
                type_name: "Asset",
                discriminant,
            }),
        })
    }
}
