//! RFC 4648 base-32, upper-case alphabet, no padding.
//!
//! Decoding is strict: only the 32 alphabet symbols are accepted (no `=`
//! padding, no lower case), lengths that no encoder can produce are rejected,
//! and the unused low bits of the final symbol must be zero. Together these
//! make every byte string have exactly one accepted encoding.

use thiserror::Error;

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

const INVALID: u8 = 0xff;

/// ASCII byte to 5-bit symbol value, `INVALID` for anything outside the alphabet.
const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Base-32 decoding failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Base32Error {
    #[error("invalid base32 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("non-zero trailing bits in final base32 symbol")]
    NonZeroTrailingBits,

    #[error("invalid base32 length: {0}")]
    InvalidLength(usize),
}

/// Symbols emitted for a group of 0..=5 input bytes.
///
/// StrKey inputs are rarely a multiple of five bytes, so the last group is
/// usually partial; its unused low bits encode as zero.
const GROUP_SYMBOLS: [usize; 6] = [0, 2, 4, 5, 7, 8];

/// Encode bytes as unpadded upper-case base-32.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() * 8 + 4) / 5);

    for group in data.chunks(5) {
        // The group occupies the low 40 bits, left-aligned; absent bytes are zero.
        let mut block = [0u8; 8];
        block[3..3 + group.len()].copy_from_slice(group);
        let bits = u64::from_be_bytes(block);

        for symbol in 0..GROUP_SYMBOLS[group.len()] {
            let index = (bits >> (35 - 5 * symbol)) & 0x1f;
            out.push(ALPHABET[index as usize] as char);
        }
    }

    out
}

/// Decode unpadded upper-case base-32.
pub fn decode(encoded: &str) -> Result<Vec<u8>, Base32Error> {
    let mut out = Vec::with_capacity(encoded.len() * 5 / 8);
    let mut buffer: u64 = 0;
    let mut bits_in_buffer: u32 = 0;

    for (index, byte) in encoded.bytes().enumerate() {
        let value = DECODE_TABLE[byte as usize];
        if value == INVALID {
            // Every earlier byte was ASCII, so `index` is a char boundary.
            let character = encoded[index..].chars().next().unwrap_or('\u{fffd}');
            return Err(Base32Error::InvalidCharacter { character, index });
        }

        buffer = (buffer << 5) | value as u64;
        bits_in_buffer += 5;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            out.push((buffer >> bits_in_buffer) as u8);
        }
        buffer &= (1u64 << bits_in_buffer) - 1;
    }

    // 1, 3 and 6 symbols past a full 8-symbol group leave a whole unused
    // symbol behind; no encoder emits those lengths.
    if matches!(encoded.len() % 8, 1 | 3 | 6) {
        return Err(Base32Error::InvalidLength(encoded.len()));
    }

    if buffer != 0 {
        return Err(Base32Error::NonZeroTrailingBits);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_rfc4648_vectors() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "MY");
        assert_eq!(encode(b"fo"), "MZXQ");
        assert_eq!(encode(b"foo"), "MZXW6");
        assert_eq!(encode(b"foob"), "MZXW6YQ");
        assert_eq!(encode(b"fooba"), "MZXW6YTB");
        assert_eq!(encode(b"foobar"), "MZXW6YTBOI");
    }

    #[test]
    fn test_decode_rfc4648_vectors() {
        assert_eq!(decode("").unwrap(), b"");
        assert_eq!(decode("MY").unwrap(), b"f");
        assert_eq!(decode("MZXQ").unwrap(), b"fo");
        assert_eq!(decode("MZXW6").unwrap(), b"foo");
        assert_eq!(decode("MZXW6YQ").unwrap(), b"foob");
        assert_eq!(decode("MZXW6YTB").unwrap(), b"fooba");
        assert_eq!(decode("MZXW6YTBOI").unwrap(), b"foobar");
    }

    #[test]
    fn test_decode_rejects_padding() {
        assert_eq!(
            decode("MZXW6YQ="),
            Err(Base32Error::InvalidCharacter {
                character: '=',
                index: 7
            })
        );
    }

    #[test]
    fn test_decode_rejects_lowercase_and_digits() {
        assert!(matches!(
            decode("mzxw6"),
            Err(Base32Error::InvalidCharacter { character: 'm', index: 0 })
        ));
        // 0, 1, 8 and 9 are not in the alphabet.
        for bad in ["MZX0", "MZX1", "MZX8", "MZX9"] {
            assert!(matches!(decode(bad), Err(Base32Error::InvalidCharacter { index: 3, .. })));
        }
    }

    #[test]
    fn test_decode_rejects_non_ascii() {
        assert!(matches!(
            decode("MZ\u{00c9}Q"),
            Err(Base32Error::InvalidCharacter { character: '\u{00c9}', index: 2 })
        ));
    }

    #[test]
    fn test_decode_rejects_impossible_lengths() {
        assert_eq!(decode("M"), Err(Base32Error::InvalidLength(1)));
        assert_eq!(decode("MZX"), Err(Base32Error::InvalidLength(3)));
        assert_eq!(decode("MZXW6Y"), Err(Base32Error::InvalidLength(6)));
        assert_eq!(decode("MZXW6YTBO"), Err(Base32Error::InvalidLength(9)));
    }

    #[test]
    fn test_decode_rejects_non_zero_trailing_bits() {
        // "I" = 0b01000 leaves the two unused bits clear; "J" = 0b01001 does not.
        assert_eq!(decode("MZXW6YTBOJ"), Err(Base32Error::NonZeroTrailingBits));
        assert_eq!(decode("MZ"), Err(Base32Error::NonZeroTrailingBits));
    }

    #[test]
    fn test_roundtrip_all_byte_values() {
        let data: Vec<u8> = (0u8..=255).collect();
        for len in 0..data.len() {
            let encoded = encode(&data[..len]);
            assert_eq!(decode(&encoded).unwrap(), &data[..len]);
        }
    }

    proptest! {
        #[test]
        fn test_decode_inverts_encode(data in prop::collection::vec(any::<u8>(), 0..128)) {
            prop_assert_eq!(decode(&encode(&data)).unwrap(), data);
        }

        #[test]
        fn test_decode_arbitrary_text_never_panics(text in "\\PC{0,64}") {
            if let Ok(bytes) = decode(&text) {
                prop_assert_eq!(encode(&bytes), text);
            }
        }
    }
}
