//! # Stellar Base
//!
//! Keypairs, networks and transaction signing on top of the StrKey and XDR
//! codecs.
//!
//! ## Overview
//!
//! - **StrKey**: checksummed base-32 text for keys and ids (`G...`, `S...`, `M...`)
//! - **XDR**: the canonical binary form of ledger structures
//! - **Signing**: transaction hashes bound to a [`Network`], ed25519 signatures
//!   decorated with key hints
//!
//! ## Usage
//!
//! ```rust
//! use stellar_base::{sign_transaction, Keypair, Network, TransactionHash};
//! use stellar_base::xdr::{
//!     BumpSequenceOp, Memo, Operation, OperationBody, Preconditions, Transaction,
//!     TransactionEnvelope, TransactionExt,
//! };
//!
//! let keypair = Keypair::random();
//! let tx = Transaction {
//!     source_account: keypair.xdr_account_id().into(),
//!     fee: 100,
//!     seq_num: 1,
//!     cond: Preconditions::None,
//!     memo: Memo::None,
//!     operations: vec![Operation::new(OperationBody::BumpSequence(BumpSequenceOp {
//!         bump_to: 2,
//!     }))],
//!     ext: TransactionExt::V0,
//! };
//!
//! let mut envelope = TransactionEnvelope::from(tx);
//! sign_transaction(&mut envelope, &keypair, &Network::TESTNET).unwrap();
//!
//! let hash = envelope.hash(&Network::TESTNET).unwrap();
//! keypair.verify(&hash, &envelope.signatures()[0].signature).unwrap();
//! ```
//!
//! ## Re-exports
//!
//! - `stellar_base::strkey` - StrKey codec
//! - `stellar_base::xdr` - XDR codec and typed structures

pub mod error;
pub mod keypair;
pub mod network;
pub mod transaction;

pub use stellar_base_strkey as strkey;
pub use stellar_base_xdr as xdr;

pub use error::{Error, Result};
pub use keypair::Keypair;
pub use network::Network;
pub use transaction::{
    envelope_from_base64, envelope_to_base64, is_signed_by, sign_transaction, TransactionHash,
};

pub use stellar_base_strkey::{Strkey, StrKeyError};
pub use stellar_base_xdr::{ReadXdr, WriteXdr, XdrError};
