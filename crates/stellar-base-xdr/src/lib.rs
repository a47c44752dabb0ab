//! # Stellar Base XDR
//!
//! Canonical External Data Representation (RFC 4506) codec and the typed
//! Stellar structures built on it.
//!
//! All integers are big-endian. Every item occupies a multiple of four bytes;
//! variable-length opaque data and strings carry a 4-byte length prefix and are
//! zero-padded to the next boundary.
//!
//! ## Key Types
//!
//! - [`XdrReader`] - Bounds-checked read cursor over a borrowed byte slice
//! - [`XdrWriter`] - Append-only encoder
//! - [`ReadXdr`] / [`WriteXdr`] - Implemented by every schema type
//! - [`Limits`] - Decode-time input caps
//!
//! ## Example
//!
//! ```rust
//! use stellar_base_xdr::{LedgerBounds, Preconditions, PreconditionsV2, ReadXdr, WriteXdr};
//!
//! let cond = Preconditions::V2(PreconditionsV2 {
//!     ledger_bounds: Some(LedgerBounds { min_ledger: 1, max_ledger: 100 }),
//!     ..Default::default()
//! });
//! let bytes = cond.to_xdr().unwrap();
//! assert_eq!(Preconditions::from_xdr(&bytes).unwrap(), cond);
//! ```

pub mod error;
pub mod limits;
pub mod reader;
pub mod traits;
pub mod types;
pub mod writer;

pub use error::{Result, XdrError};
pub use limits::Limits;
pub use reader::XdrReader;
pub use traits::{ReadXdr, WriteXdr};
pub use types::*;
pub use writer::XdrWriter;
