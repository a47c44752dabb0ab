//! Decode-time limits.

use serde::{Deserialize, Serialize};

/// Default cap on a single decode input: 16 MiB.
pub const DEFAULT_MAX_LEN: usize = 16 * 1024 * 1024;

/// Default cap on the element count of any one vector.
pub const DEFAULT_MAX_ELEMENTS: usize = 65_536;

/// Caps applied when decoding untrusted input.
///
/// Schema maxima (e.g. `opaque<64>`) are always enforced; these limits bound
/// the input as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum input length in bytes.
    pub max_len: usize,
    /// Maximum elements in any single counted vector.
    pub max_elements: usize,
}

impl Limits {
    /// No cap beyond the schema maxima.
    pub const fn none() -> Self {
        Self {
            max_len: usize::MAX,
            max_elements: usize::MAX,
        }
    }

    /// Default limits with input capped at `max_len` bytes.
    pub const fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len,
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }

    /// Replace the per-vector element cap.
    pub const fn max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = max_elements;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }
}
