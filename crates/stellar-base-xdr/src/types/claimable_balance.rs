//! Claimable balance ids.

use serde::{Deserialize, Serialize};
use stellar_base_strkey::{self as strkey, ClaimableBalance};

use crate::error::{Result, XdrError};
use crate::reader::XdrReader;
use crate::traits::{ReadXdr, WriteXdr};
use crate::writer::XdrWriter;

use super::Hash;

const CLAIMABLE_BALANCE_ID_TYPE_V0: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimableBalanceId {
    V0(Hash),
}

impl ClaimableBalanceId {
    pub fn to_strkey(&self) -> String {
        strkey::encode_claimable_balance_id(&ClaimableBalance::from(*self))
    }

    pub fn from_strkey(encoded: &str) -> Result<Self> {
        Ok(strkey::decode_claimable_balance_id(encoded)?.into())
    }
}

impl From<ClaimableBalance> for ClaimableBalanceId {
    fn from(balance: ClaimableBalance) -> Self {
        match balance {
            ClaimableBalance::V0(hash) => Self::V0(hash),
        }
    }
}

impl From<ClaimableBalanceId> for ClaimableBalance {
    fn from(id: ClaimableBalanceId) -> Self {
        match id {
            ClaimableBalanceId::V0(hash) => ClaimableBalance::V0(hash),
        }
    }
}

impl WriteXdr for ClaimableBalanceId {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        match self {
            Self::V0(hash) => {
                w.write_discriminant(CLAIMABLE_BALANCE_ID_TYPE_V0);
                w.write_fixed_opaque(hash);
            }
        }
        Ok(())
    }
}

impl ReadXdr for ClaimableBalanceId {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| match r.read_discriminant()? {
            CLAIMABLE_BALANCE_ID_TYPE_V0 => Ok(Self::V0(r.read_fixed_opaque()?)),
            discriminant => Err(XdrError::UnknownUnionArm {
                type_name: "ClaimableBalanceId",
                discriminant,
            }),
        })
    }
}
