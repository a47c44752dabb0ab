//! Transaction memos.

use serde::{Deserialize, Serialize};

use crate::error::{Result, XdrError};
use crate::reader::XdrReader;
use crate::traits::{ReadXdr, WriteXdr};
use crate::writer::XdrWriter;

use super::string::StringM;
use super::Hash;

/// Maximum memo text length in bytes.
pub const MAX_MEMO_TEXT_LEN: u32 = 28;

/// Memo text: up to 28 bytes, not necessarily UTF-8.
pub type MemoText = StringM<MAX_MEMO_TEXT_LEN>;

mod memo_type {
    pub const NONE: i32 = 0;
    pub const TEXT: i32 = 1;
    pub const ID: i32 = 2;
    pub const HASH: i32 = 3;
    pub const RETURN: i32 = 4;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Memo {
    #[default]
    None,
    Text(MemoText),
    Id(u64),
    Hash(Hash),
    Return(Hash),
}

impl Memo {
    /// A text memo, rejecting text over 28 bytes.
    pub fn text(text: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self::Text(MemoText::new(text)?))
    }
}

impl WriteXdr for Memo {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        match self {
            Self::None => w.write_discriminant(memo_type::NONE),
            Self::Text(text) => {
                w.write_discriminant(memo_type::TEXT);
                text.write_xdr(w)?;
            }
            Self::Id(id) => {
                w.write_discriminant(memo_type::ID);
                w.write_u64(*id);
            }
            Self::Hash(hash) => {
                w.write_discriminant(memo_type::HASH);
                w.write_fixed_opaque(hash);
            }
            Self::Return(hash) => {
                w.write_discriminant(memo_type::RETURN);
                w.write_fixed_opaque(hash);
            }
        }
        Ok(())
    }
}

impl ReadXdr for Memo {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| match r.read_discriminant()? {
            memo_type::NONE => Ok(Self::None),
            memo_type::TEXT => Ok(Self::Text(MemoText::read_xdr(r)?)),
            memo_type::ID => Ok(Self::Id(r.read_u64()?)),
            memo_type::HASH => Ok(Self::Hash(r.read_fixed_opaque()?)),
            memo_type::RETURN => Ok(Self::Return(r.read_fixed_opaque()?)),
            discriminant => Err(XdrError::UnknownUnionArm {
                type_name: "Memo",
                discriminant,
            }),
        })
    }
}
