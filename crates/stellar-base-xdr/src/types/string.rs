//! Bounded XDR byte strings.
//!
//! XDR `string<N>` carries arbitrary bytes on the wire. Memo text and data
//! entry names are usually UTF-8, but the network stores whatever bytes were
//! submitted, so decoding keeps them verbatim and leaves interpretation to the
//! caller.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::error::{Result, XdrError};
use crate::reader::XdrReader;
use crate::traits::{ReadXdr, WriteXdr};
use crate::writer::XdrWriter;

/// A byte string of at most `MAX` bytes.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct StringM<const MAX: u32>(Vec<u8>);

impl<const MAX: u32> StringM<MAX> {
    /// Wrap `bytes`, rejecting more than `MAX` of them.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.len() > MAX as usize {
            return Err(XdrError::LengthExceedsMax {
                length: bytes.len(),
                max: MAX as usize,
            });
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The contents as UTF-8, failing on any invalid sequence.
    pub fn to_utf8_string(&self) -> Result<String> {
        String::from_utf8(self.0.clone()).map_err(|_| XdrError::InvalidUtf8)
    }

    /// The contents as UTF-8 with invalid sequences replaced by U+FFFD.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl<const MAX: u32> fmt::Debug for StringM<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(text) => write!(f, "StringM({text:?})"),
            Err(_) => write!(f, "StringM(0x{})", hex::encode(&self.0)),
        }
    }
}

impl<const MAX: u32> fmt::Display for StringM<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl<const MAX: u32> TryFrom<Vec<u8>> for StringM<MAX> {
    type Error = XdrError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::new(bytes)
    }
}

impl<const MAX: u32> TryFrom<&[u8]> for StringM<MAX> {
    type Error = XdrError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::new(bytes)
    }
}

impl<const MAX: u32> TryFrom<&str> for StringM<MAX> {
    type Error = XdrError;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(text)
    }
}

impl<const MAX: u32> TryFrom<String> for StringM<MAX> {
    type Error = XdrError;

    fn try_from(text: String) -> Result<Self> {
        Self::new(text)
    }
}

impl<const MAX: u32> From<StringM<MAX>> for Vec<u8> {
    fn from(s: StringM<MAX>) -> Self {
        s.0
    }
}

impl<const MAX: u32> AsRef<[u8]> for StringM<MAX> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const MAX: u32> WriteXdr for StringM<MAX> {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        w.write_var_opaque(&self.0, MAX)
    }
}

impl<const MAX: u32> ReadXdr for StringM<MAX> {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        Ok(Self(r.read_var_opaque(MAX)?))
    }
}
