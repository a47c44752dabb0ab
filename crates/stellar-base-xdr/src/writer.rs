//! Append-only XDR encoder.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{Result, XdrError};
use crate::reader::padding_len;
use crate::traits::WriteXdr;

/// Encodes XDR items into a growable buffer.
#[derive(Debug, Default)]
pub struct XdrWriter {
    buf: BytesMut,
}

impl XdrWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finish and return the encoded bytes.
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }

    /// Finish and return the encoded bytes as a vector.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf.to_vec()
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.put_u32(value);
    }

    pub fn write_i32(&mut self, value: i32) {
        self.buf.put_i32(value);
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.put_u64(value);
    }

    pub fn write_i64(&mut self, value: i64) {
        self.buf.put_i64(value);
    }

    pub fn write_bool(&mut self, value: bool) {
        self.write_u32(value as u32);
    }

    /// Write a union discriminant.
    pub fn write_discriminant(&mut self, value: i32) {
        self.write_i32(value);
    }

    /// Write fixed-length opaque data, zero-padded to four bytes.
    pub fn write_fixed_opaque(&mut self, data: &[u8]) {
        self.buf.put_slice(data);
        self.buf.put_bytes(0, padding_len(data.len()));
    }

    /// Write length-prefixed opaque data of at most `max` bytes.
    pub fn write_var_opaque(&mut self, data: &[u8], max: u32) -> Result<()> {
        self.write_length(data.len(), max)?;
        self.write_fixed_opaque(data);
        Ok(())
    }

    /// Write a length-prefixed string of at most `max` bytes.
    pub fn write_string(&mut self, s: &str, max: u32) -> Result<()> {
        self.write_var_opaque(s.as_bytes(), max)
    }

    /// Write a counted vector of at most `max` elements.
    pub fn write_vec<T: WriteXdr>(&mut self, items: &[T], max: u32) -> Result<()> {
        self.write_length(items.len(), max)?;
        for item in items {
            item.write_xdr(self)?;
        }
        Ok(())
    }

    /// Write an optional value: a presence flag, then the value if present.
    pub fn write_option<T: WriteXdr>(&mut self, value: Option<&T>) -> Result<()> {
        match value {
            Some(v) => {
                self.write_bool(true);
                v.write_xdr(self)
            }
            None => {
                self.write_bool(false);
                Ok(())
            }
        }
    }

    fn write_length(&mut self, len: usize, max: u32) -> Result<()> {
        if len > max as usize {
            return Err(XdrError::LengthExceedsMax {
                length: len,
                max: max as usize,
            });
        }
        self.write_u32(len as u32);
        Ok(())
    }
}
