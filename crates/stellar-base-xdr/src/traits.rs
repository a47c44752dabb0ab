//! Encode/decode traits and their primitive implementations.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{Result, XdrError};
use crate::limits::Limits;
use crate::reader::XdrReader;
use crate::writer::XdrWriter;

/// A type with a canonical XDR encoding.
pub trait WriteXdr {
    /// Append this value's encoding to `w`.
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()>;

    /// Encode to a fresh byte vector.
    fn to_xdr(&self) -> Result<Vec<u8>> {
        let mut w = XdrWriter::new();
        self.write_xdr(&mut w)?;
        Ok(w.into_vec())
    }

    /// Encode to standard (padded) base64.
    fn to_xdr_base64(&self) -> Result<String> {
        Ok(STANDARD.encode(self.to_xdr()?))
    }
}

/// A type decodable from its canonical XDR encoding.
pub trait ReadXdr: Sized {
    /// Read one value from the cursor.
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self>;

    /// Decode a complete value; trailing bytes are an error.
    fn from_xdr(bytes: &[u8]) -> Result<Self> {
        Self::from_xdr_with_limits(bytes, Limits::default())
    }

    /// Decode a complete value under explicit limits.
    fn from_xdr_with_limits(bytes: &[u8], limits: Limits) -> Result<Self> {
        let mut r = XdrReader::with_limits(bytes, limits)?;
        let value = Self::read_xdr(&mut r)?;
        if !r.is_empty() {
            return Err(XdrError::TrailingBytes(r.remaining()));
        }
        Ok(value)
    }

    /// Decode from standard base64.
    fn from_xdr_base64(encoded: &str) -> Result<Self> {
        Self::from_xdr_base64_with_limits(encoded, Limits::default())
    }

    /// Decode from standard base64 under explicit limits.
    fn from_xdr_base64_with_limits(encoded: &str, limits: Limits) -> Result<Self> {
        // Base64 inflates by 4/3; reject oversized text before decoding it.
        if encoded.len() / 4 * 3 > limits.max_len {
            return Err(XdrError::InputTooLarge {
                length: encoded.len() / 4 * 3,
                max: limits.max_len,
            });
        }
        let bytes = STANDARD.decode(encoded.trim())?;
        Self::from_xdr_with_limits(&bytes, limits)
    }
}

macro_rules! impl_xdr_int {
    ($ty:ty, $write:ident, $read:ident) => {
        impl WriteXdr for $ty {
            fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
                w.$write(*self);
                Ok(())
            }
        }

        impl ReadXdr for $ty {
            fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
                r.$read()
            }
        }
    };
}

impl_xdr_int!(u32, write_u32, read_u32);
impl_xdr_int!(i32, write_i32, read_i32);
impl_xdr_int!(u64, write_u64, read_u64);
impl_xdr_int!(i64, write_i64, read_i64);
impl_xdr_int!(bool, write_bool, read_bool);

/// Fixed-length opaque data.
impl<const N: usize> WriteXdr for [u8; N] {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        w.write_fixed_opaque(self);
        Ok(())
    }
}

impl<const N: usize> ReadXdr for [u8; N] {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.read_fixed_opaque()
    }
}

impl<T: WriteXdr> WriteXdr for Option<T> {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        w.write_option(self.as_ref())
    }
}

impl<T: ReadXdr> ReadXdr for Option<T> {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.read_option()
    }
}
