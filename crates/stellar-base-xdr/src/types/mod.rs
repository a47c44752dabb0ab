//! Typed Stellar XDR structures.
//!
//! Each schema union is a closed Rust enum decoded through an explicit
//! discriminant match; an unrecognised discriminant is
//! [`XdrError::UnknownUnionArm`](crate::XdrError::UnknownUnionArm).

pub mod asset;
pub mod claimable_balance;
pub mod keys;
pub mod memo;
pub mod operation;
pub mod preconditions;
pub mod string;
pub mod transaction;

pub use asset::{AlphaNum12, AlphaNum4, Asset};
pub use claimable_balance::ClaimableBalanceId;
pub use keys::{AccountId, MuxedAccount, PublicKey, SignerKey};
pub use memo::{Memo, MemoText, MAX_MEMO_TEXT_LEN};
pub use operation::{
    BumpSequenceOp, CreateAccountOp, DataName, ManageDataOp, Operation, OperationBody, PaymentOp,
    MAX_DATA_LEN,
};
pub use preconditions::{
    LedgerBounds, Preconditions, PreconditionsV2, TimeBounds, MAX_EXTRA_SIGNERS,
};
pub use string::StringM;
pub use transaction::{
    DecoratedSignature, EnvelopeType, TaggedTransaction, Transaction, TransactionEnvelope,
    TransactionExt, TransactionSignaturePayload, TransactionV1Envelope, MAX_OPS_PER_TX,
    MAX_SIGNATURES,
};

pub use stellar_base_strkey::SignedPayload;

/// A 32-byte hash.
pub type Hash = [u8; 32];

/// A 256-bit unsigned integer, used for raw ed25519 keys.
pub type Uint256 = [u8; 32];
