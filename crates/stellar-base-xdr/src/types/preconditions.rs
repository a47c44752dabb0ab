//! Transaction validity preconditions.

use serde::{Deserialize, Serialize};

use crate::error::{Result, XdrError};
use crate::reader::XdrReader;
use crate::traits::{ReadXdr, WriteXdr};
use crate::writer::XdrWriter;

use super::keys::SignerKey;

/// Protocol limit on `PreconditionsV2::extra_signers`.
pub const MAX_EXTRA_SIGNERS: u32 = 2;

/// XDR `PreconditionType` discriminants.
mod precondition_type {
    pub const NONE: i32 = 0;
    pub const TIME: i32 = 1;
    pub const V2: i32 = 2;
}

/// Closed interval of close times (Unix seconds). `max_time == 0` means no
/// upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeBounds {
    pub min_time: u64,
    pub max_time: u64,
}

impl WriteXdr for TimeBounds {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        w.write_u64(self.min_time);
        w.write_u64(self.max_time);
        Ok(())
    }
}

impl ReadXdr for TimeBounds {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| {
            Ok(Self {
                min_time: r.read_u64()?,
                max_time: r.read_u64()?,
            })
        })
    }
}

/// Ledger sequence interval. `max_ledger == 0` means no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LedgerBounds {
    pub min_ledger: u32,
    pub max_ledger: u32,
}

impl WriteXdr for LedgerBounds {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        w.write_u32(self.min_ledger);
        w.write_u32(self.max_ledger);
        Ok(())
    }
}

impl ReadXdr for LedgerBounds {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| {
            Ok(Self {
                min_ledger: r.read_u32()?,
                max_ledger: r.read_u32()?,
            })
        })
    }
}

/// The full precondition set (CAP-21).
///
/// Every optional field round-trips its presence flag exactly: `Some(0)` and
/// `None` encode differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PreconditionsV2 {
    pub time_bounds: Option<TimeBounds>,
    pub ledger_bounds: Option<LedgerBounds>,
    /// Minimum source account sequence number.
    pub min_seq_num: Option<i64>,
    /// Minimum seconds since the source account sequence last changed.
    pub min_seq_age: u64,
    /// Minimum ledgers since the source account sequence last changed.
    pub min_seq_ledger_gap: u32,
    pub extra_signers: Vec<SignerKey>,
}

impl WriteXdr for PreconditionsV2 {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        w.write_option(self.time_bounds.as_ref())?;
        w.write_option(self.ledger_bounds.as_ref())?;
        w.write_option(self.min_seq_num.as_ref())?;
        w.write_u64(self.min_seq_age);
        w.write_u32(self.min_seq_ledger_gap);
        w.write_vec(&self.extra_signers, MAX_EXTRA_SIGNERS)
    }
}

impl ReadXdr for PreconditionsV2 {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| {
            Ok(Self {
                time_bounds: r.read_option()?,
                ledger_bounds: r.read_option()?,
                min_seq_num: r.read_option()?,
                min_seq_age: r.read_u64()?,
                min_seq_ledger_gap: r.read_u32()?,
                extra_signers: r.read_vec(MAX_EXTRA_SIGNERS)?,
            })
        })
    }
}

/// Transaction preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Preconditions {
    #[default]
    None,
    Time(TimeBounds),
    V2(PreconditionsV2),
}

impl Preconditions {
    /// Time bounds, whichever arm carries them.
    pub fn time_bounds(&self) -> Option<&TimeBounds> {
        match self {
            Self::None => None,
            Self::Time(bounds) => Some(bounds),
            Self::V2(v2) => v2.time_bounds.as_ref(),
        }
    }
}

impl WriteXdr for Preconditions {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        match self {
            Self::None => {
                w.write_discriminant(precondition_type::NONE);
                Ok(())
            }
            Self::Time(bounds) => {
                w.write_discriminant(precondition_type::TIME);
                bounds.write_xdr(w)
            }
            Self::V2(v2) => {
                w.write_discriminant(precondition_type::V2);
                v2.write_xdr(w)
            }
        }
    }
}

impl ReadXdr for Preconditions {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| match r.read_discriminant()? {
            precondition_type::NONE => Ok(Self::None),
            precondition_type::TIME => Ok(Self::Time(TimeBounds::read_xdr(r)?)),
            precondition_type::V2 => Ok(Self::V2(PreconditionsV2::read_xdr(r)?)),
            discriminant => Err(XdrError::UnknownUnionArm {
                type_name: "Preconditions",
                discriminant,
            }),
        })
    }
}
