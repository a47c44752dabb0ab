//! # Stellar Base Testkit
//!
//! Testing utilities for the Stellar base crates.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Published StrKey encodings and one-fault rejection cases
//! - **Generators**: Proptest strategies for keys, StrKeys and transactions
//! - **Fixtures**: Helper structs for signing scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use stellar_base_testkit::vectors::{all_vectors, verify_all_vectors};
//!
//! for vector in all_vectors() {
//!     println!("{}: {}", vector.name, vector.encoded);
//! }
//! verify_all_vectors().unwrap();
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use stellar_base::xdr::{ReadXdr, Transaction, WriteXdr};
//! use stellar_base_testkit::generators::{transaction_from_params, TransactionParams};
//!
//! proptest! {
//!     #[test]
//!     fn transaction_roundtrips(params: TransactionParams) {
//!         let tx = transaction_from_params(&params);
//!         let bytes = tx.to_xdr().unwrap();
//!         prop_assert_eq!(Transaction::from_xdr(&bytes).unwrap(), tx);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use stellar_base_testkit::fixtures::TestFixture;
//!
//! let mut fixture = TestFixture::new();
//! let tx = fixture.bump_sequence(10);
//! let envelope = fixture.sign(tx).unwrap();
//! assert_eq!(envelope.signatures().len(), 1);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, TestFixture};
pub use generators::{transaction_from_params, TransactionParams};
pub use vectors::{all_vectors, rejection_vectors, verify_all_vectors, GoldenVector};
