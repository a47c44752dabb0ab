//! Bounds-checked XDR read cursor.

use crate::error::{Result, XdrError};
use crate::limits::Limits;
use crate::traits::ReadXdr;

/// Smallest encoded size of any XDR item other than void.
const MIN_ITEM_LEN: usize = 4;

/// A read cursor over a borrowed byte slice.
///
/// Every read checks that enough bytes remain before consuming anything. A
/// read that fails leaves the position where it was, including compound reads
/// such as length-prefixed opaque data.
#[derive(Debug)]
pub struct XdrReader<'a> {
    bytes: &'a [u8],
    position: usize,
    max_elements: usize,
}

impl<'a> XdrReader<'a> {
    /// Create a reader without input limits.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            position: 0,
            max_elements: usize::MAX,
        }
    }

    /// Create a reader, rejecting input larger than `limits` allows.
    pub fn with_limits(bytes: &'a [u8], limits: Limits) -> Result<Self> {
        if bytes.len() > limits.max_len {
            return Err(XdrError::InputTooLarge {
                length: bytes.len(),
                max: limits.max_len,
            });
        }
        Ok(Self {
            bytes,
            position: 0,
            max_elements: limits.max_elements,
        })
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Whether the whole input has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Run `f`, rewinding to the current position if it fails.
    pub(crate) fn atomically<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let start = self.position;
        let result = f(self);
        if result.is_err() {
            self.position = start;
        }
        result
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        if self.remaining() < needed {
            return Err(XdrError::BufferUnderrun {
                needed,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        self.ensure(n)?;
        let slice = &self.bytes[self.position..self.position + n];
        self.position += n;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut arr = [0u8; N];
        arr.copy_from_slice(self.take(N)?);
        Ok(arr)
    }

    /// Read `len` bytes followed by their zero padding.
    fn take_padded(&mut self, len: usize) -> Result<&'a [u8]> {
        let pad = padding_len(len);
        self.ensure(len + pad)?;
        let data = &self.bytes[self.position..self.position + len];
        let padding = &self.bytes[self.position + len..self.position + len + pad];
        if padding.iter().any(|&b| b != 0) {
            return Err(XdrError::NonZeroPadding);
        }
        self.position += len + pad;
        Ok(data)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.take_array()?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.take_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_be_bytes(self.take_array()?))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(i64::from_be_bytes(self.take_array()?))
    }

    /// Read a boolean; only 0 and 1 are accepted.
    pub fn read_bool(&mut self) -> Result<bool> {
        self.atomically(|r| match r.read_u32()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(XdrError::InvalidBool(other)),
        })
    }

    /// Read fixed-length opaque data of `N` bytes plus padding.
    pub fn read_fixed_opaque<const N: usize>(&mut self) -> Result<[u8; N]> {
        let data = self.take_padded(N)?;
        let mut arr = [0u8; N];
        arr.copy_from_slice(data);
        Ok(arr)
    }

    /// Read variable-length opaque data of at most `max` bytes.
    pub fn read_var_opaque(&mut self, max: u32) -> Result<Vec<u8>> {
        self.atomically(|r| {
            let len = r.read_length(max)?;
            Ok(r.take_padded(len)?.to_vec())
        })
    }

    /// Read a UTF-8 string of at most `max` bytes.
    pub fn read_string(&mut self, max: u32) -> Result<String> {
        self.atomically(|r| {
            let len = r.read_length(max)?;
            let data = r.take_padded(len)?;
            String::from_utf8(data.to_vec()).map_err(|_| XdrError::InvalidUtf8)
        })
    }

    /// Read a counted vector of at most `max` elements.
    pub fn read_vec<T: ReadXdr>(&mut self, max: u32) -> Result<Vec<T>> {
        self.atomically(|r| {
            let count = r.read_length(max)?;
            if count > r.max_elements {
                return Err(XdrError::LengthExceedsMax {
                    length: count,
                    max: r.max_elements,
                });
            }
            // Reject counts the remaining input cannot possibly hold before
            // allocating for them.
            r.ensure(count.saturating_mul(MIN_ITEM_LEN))?;
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(T::read_xdr(r)?);
            }
            Ok(items)
        })
    }

    /// Read an optional value: a boolean presence flag, then the value.
    pub fn read_option<T: ReadXdr>(&mut self) -> Result<Option<T>> {
        self.atomically(|r| {
            if r.read_bool()? {
                Ok(Some(T::read_xdr(r)?))
            } else {
                Ok(None)
            }
        })
    }

    /// Read a union discriminant.
    pub fn read_discriminant(&mut self) -> Result<i32> {
        self.read_i32()
    }

    fn read_length(&mut self, max: u32) -> Result<usize> {
        let len = self.read_u32()?;
        if len > max {
            return Err(XdrError::LengthExceedsMax {
                length: len as usize,
                max: max as usize,
            });
        }
        Ok(len as usize)
    }
}

/// Zero bytes needed to pad `len` to a multiple of four.
pub(crate) fn padding_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_big_endian() {
        let bytes = [
            0x00, 0x00, 0x00, 0x2a, // 42
            0xff, 0xff, 0xff, 0xfe, // -2
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, // -1
        ];
        let mut r = XdrReader::new(&bytes);
        assert_eq!(r.read_u32().unwrap(), 42);
        assert_eq!(r.read_i32().unwrap(), -2);
        assert_eq!(r.read_u64().unwrap(), 0x0102030405060708);
        assert_eq!(r.read_i64().unwrap(), -1);
        assert!(r.is_empty());
        assert_eq!(r.position(), 24);
    }

    #[test]
    fn test_underrun_does_not_advance() {
        let bytes = [0u8; 6];
        let mut r = XdrReader::new(&bytes);
        assert_eq!(r.read_u32().unwrap(), 0);
        assert_eq!(
            r.read_u32(),
            Err(XdrError::BufferUnderrun {
                needed: 4,
                remaining: 2
            })
        );
        assert_eq!(r.position(), 4);
    }

    #[test]
    fn test_bool_rejects_other_values() {
        let bytes = [0, 0, 0, 2];
        let mut r = XdrReader::new(&bytes);
        assert_eq!(r.read_bool(), Err(XdrError::InvalidBool(2)));
        assert_eq!(r.position(), 0);
    }

    #[test]
    fn test_var_opaque_with_padding() {
        let bytes = [0, 0, 0, 3, 0xaa, 0xbb, 0xcc, 0x00];
        let mut r = XdrReader::new(&bytes);
        assert_eq!(r.read_var_opaque(64).unwrap(), vec![0xaa, 0xbb, 0xcc]);
        assert!(r.is_empty());
    }

    #[test]
    fn test_var_opaque_declared_length_overruns() {
        let bytes = [0, 0, 0, 8, 0xaa, 0xbb, 0xcc, 0xdd];
        let mut r = XdrReader::new(&bytes);
        assert_eq!(
            r.read_var_opaque(64),
            Err(XdrError::BufferUnderrun {
                needed: 8,
                remaining: 4
            })
        );
        // The length prefix is not consumed by a failed read.
        assert_eq!(r.position(), 0);
    }

    #[test]
    fn test_var_opaque_exceeds_max() {
        let bytes = [0, 0, 0, 65];
        let mut r = XdrReader::new(&bytes);
        assert_eq!(
            r.read_var_opaque(64),
            Err(XdrError::LengthExceedsMax {
                length: 65,
                max: 64
            })
        );
    }

    #[test]
    fn test_non_zero_padding_rejected() {
        let bytes = [0, 0, 0, 1, 0xaa, 0x00, 0x01, 0x00];
        let mut r = XdrReader::new(&bytes);
        assert_eq!(r.read_var_opaque(64), Err(XdrError::NonZeroPadding));
    }

    #[test]
    fn test_fixed_opaque_padding() {
        let bytes = [1, 2, 3, 4, 5, 0, 0, 0];
        let mut r = XdrReader::new(&bytes);
        assert_eq!(r.read_fixed_opaque::<5>().unwrap(), [1, 2, 3, 4, 5]);
        assert_eq!(r.position(), 8);
    }

    #[test]
    fn test_string_utf8() {
        let bytes = [0, 0, 0, 2, b'h', b'i', 0, 0];
        let mut r = XdrReader::new(&bytes);
        assert_eq!(r.read_string(28).unwrap(), "hi");

        let bytes = [0, 0, 0, 2, 0xff, 0xfe, 0, 0];
        let mut r = XdrReader::new(&bytes);
        assert_eq!(r.read_string(28), Err(XdrError::InvalidUtf8));
        assert_eq!(r.position(), 0);
    }

    #[test]
    fn test_vec_count_overrun_rejected_before_allocation() {
        // Claims 1000 u32 elements with only one present.
        let bytes = [0, 0, 0x03, 0xe8, 0, 0, 0, 1];
        let mut r = XdrReader::new(&bytes);
        assert_eq!(
            r.read_vec::<u32>(u32::MAX),
            Err(XdrError::BufferUnderrun {
                needed: 4000,
                remaining: 4
            })
        );
        assert_eq!(r.position(), 0);
    }

    #[test]
    fn test_vec_and_option() {
        let bytes = [0, 0, 0, 2, 0, 0, 0, 7, 0, 0, 0, 9, 0, 0, 0, 1, 0, 0, 0, 5, 0, 0, 0, 0];
        let mut r = XdrReader::new(&bytes);
        assert_eq!(r.read_vec::<u32>(10).unwrap(), vec![7, 9]);
        assert_eq!(r.read_option::<u32>().unwrap(), Some(5));
        assert_eq!(r.read_option::<u32>().unwrap(), None);
        assert!(r.is_empty());
    }

    #[test]
    fn test_limits() {
        let bytes = [0u8; 16];
        assert!(matches!(
            XdrReader::with_limits(&bytes, Limits::with_max_len(8)),
            Err(XdrError::InputTooLarge { length: 16, max: 8 })
        ));
        assert!(XdrReader::with_limits(&bytes, Limits::default()).is_ok());
    }

    #[test]
    fn test_element_limit() {
        let bytes = [0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3];
        let limits = Limits::default().max_elements(2);
        let mut r = XdrReader::with_limits(&bytes, limits).unwrap();
        assert!(matches!(
            r.read_vec::<u32>(10),
            Err(XdrError::LengthExceedsMax { length: 3, max: 2 })
        ));
        assert_eq!(r.position(), 0);

        let mut r = XdrReader::with_limits(&bytes, Limits::default()).unwrap();
        assert_eq!(r.read_vec::<u32>(10).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_padding_len() {
        assert_eq!(padding_len(0), 0);
        assert_eq!(padding_len(1), 3);
        assert_eq!(padding_len(2), 2);
        assert_eq!(padding_len(3), 1);
        assert_eq!(padding_len(4), 0);
    }
}
