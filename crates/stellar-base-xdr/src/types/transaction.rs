//! Transactions, signatures and envelopes.
//!
//! Only the v1 envelope (`ENVELOPE_TYPE_TX`) is supported. Legacy v0 and
//! fee-bump envelopes decode as [`XdrError::UnknownUnionArm`].

use serde::{Deserialize, Serialize};

use crate::error::{Result, XdrError};
use crate::reader::XdrReader;
use crate::traits::{ReadXdr, WriteXdr};
use crate::writer::XdrWriter;

use super::keys::MuxedAccount;
use super::memo::Memo;
use super::operation::Operation;
use super::preconditions::Preconditions;
use super::Hash;

/// Maximum operations in one transaction.
pub const MAX_OPS_PER_TX: u32 = 100;

/// Maximum signatures on one envelope.
pub const MAX_SIGNATURES: u32 = 20;

const MAX_SIGNATURE_LEN: u32 = 64;

/// Envelope discriminants that transaction decoding deals with.
///
/// The schema's other values (SCP, auth, operation ids) never appear in a
/// transaction envelope and are left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum EnvelopeType {
    TxV0 = 0,
    Tx = 2,
    TxFeeBump = 5,
}

impl EnvelopeType {
    pub fn to_i32(self) -> i32 {
        self as i32
    }
}

/// Reserved extension point; only the empty arm exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionExt {
    #[default]
    V0,
}

impl WriteXdr for TransactionExt {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        match self {
            Self::V0 => w.write_discriminant(0),
        }
        Ok(())
    }
}

impl ReadXdr for TransactionExt {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| match r.read_discriminant()? {
            0 => Ok(Self::V0),
            discriminant => Err(XdrError::UnknownUnionArm {
                type_name: "TransactionExt",
                discriminant,
            }),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub source_account: MuxedAccount,
    /// Total fee in stroops.
    pub fee: u32,
    pub seq_num: i64,
    pub cond: Preconditions,
    pub memo: Memo,
    pub operations: Vec<Operation>,
    pub ext: TransactionExt,
}

impl WriteXdr for Transaction {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        self.source_account.write_xdr(w)?;
        w.write_u32(self.fee);
        w.write_i64(self.seq_num);
        self.cond.write_xdr(w)?;
        self.memo.write_xdr(w)?;
        w.write_vec(&self.operations, MAX_OPS_PER_TX)?;
        self.ext.write_xdr(w)
    }
}

impl ReadXdr for Transaction {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| {
            Ok(Self {
                source_account: MuxedAccount::read_xdr(r)?,
                fee: r.read_u32()?,
                seq_num: r.read_i64()?,
                cond: Preconditions::read_xdr(r)?,
                memo: Memo::read_xdr(r)?,
                operations: r.read_vec(MAX_OPS_PER_TX)?,
                ext: TransactionExt::read_xdr(r)?,
            })
        })
    }
}

/// A signature with the last four bytes of the signer's public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecoratedSignature {
    pub hint: [u8; 4],
    pub signature: Vec<u8>,
}

impl WriteXdr for DecoratedSignature {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        w.write_fixed_opaque(&self.hint);
        w.write_var_opaque(&self.signature, MAX_SIGNATURE_LEN)
    }
}

impl ReadXdr for DecoratedSignature {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| {
            Ok(Self {
                hint: r.read_fixed_opaque()?,
                signature: r.read_var_opaque(MAX_SIGNATURE_LEN)?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionV1Envelope {
    pub tx: Transaction,
    pub signatures: Vec<DecoratedSignature>,
}

impl WriteXdr for TransactionV1Envelope {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        self.tx.write_xdr(w)?;
        w.write_vec(&self.signatures, MAX_SIGNATURES)
    }
}

impl ReadXdr for TransactionV1Envelope {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| {
            Ok(Self {
                tx: Transaction::read_xdr(r)?,
                signatures: r.read_vec(MAX_SIGNATURES)?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionEnvelope {
    Tx(TransactionV1Envelope),
}

impl TransactionEnvelope {
    pub fn tx(&self) -> &Transaction {
        match self {
            Self::Tx(env) => &env.tx,
        }
    }

    pub fn signatures(&self) -> &[DecoratedSignature] {
        match self {
            Self::Tx(env) => &env.signatures,
        }
    }

    pub fn signatures_mut(&mut self) -> &mut Vec<DecoratedSignature> {
        match self {
            Self::Tx(env) => &mut env.signatures,
        }
    }
}

impl From<Transaction> for TransactionEnvelope {
    fn from(tx: Transaction) -> Self {
        Self::Tx(TransactionV1Envelope {
            tx,
            signatures: Vec::new(),
        })
    }
}

impl WriteXdr for TransactionEnvelope {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        match self {
            Self::Tx(env) => {
                w.write_discriminant(EnvelopeType::Tx.to_i32());
                env.write_xdr(w)
            }
        }
    }
}

impl ReadXdr for TransactionEnvelope {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| match r.read_discriminant()? {
            d if d == EnvelopeType::Tx.to_i32() => {
                Ok(Self::Tx(TransactionV1Envelope::read_xdr(r)?))
            }
            discriminant => Err(XdrError::UnknownUnionArm {
                type_name: "TransactionEnvelope",
                discriminant,
            }),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaggedTransaction {
    Tx(Transaction),
}

impl WriteXdr for TaggedTransaction {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        match self {
            Self::Tx(tx) => {
                w.write_discriminant(EnvelopeType::Tx.to_i32());
                tx.write_xdr(w)
            }
        }
    }
}

impl ReadXdr for TaggedTransaction {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| match r.read_discriminant()? {
            d if d == EnvelopeType::Tx.to_i32() => Ok(Self::Tx(Transaction::read_xdr(r)?)),
            discriminant => Err(XdrError::UnknownUnionArm {
                type_name: "TaggedTransaction",
                discriminant,
            }),
        })
    }
}

/// The bytes whose SHA-256 is the transaction hash that signers sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSignaturePayload {
    pub network_id: Hash,
    pub tagged_transaction: TaggedTransaction,
}

impl WriteXdr for TransactionSignaturePayload {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        w.write_fixed_opaque(&self.network_id);
        self.tagged_transaction.write_xdr(w)
    }
}

impl ReadXdr for TransactionSignaturePayload {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| {
            Ok(Self {
                network_id: r.read_fixed_opaque()?,
                tagged_transaction: TaggedTransaction::read_xdr(r)?,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        BumpSequenceOp, OperationBody, PreconditionsV2, SignerKey, TimeBounds,
    };

    fn sample_tx() -> Transaction {
        Transaction {
            source_account: MuxedAccount::Ed25519([7; 32]),
            fee: 100,
            seq_num: 1,
            cond: Preconditions::Time(TimeBounds {
                min_time: 0,
                max_time: 1_700_000_000,
            }),
            memo: Memo::Id(9),
            operations: vec![Operation::new(OperationBody::BumpSequence(BumpSequenceOp {
                bump_to: 2,
            }))],
            ext: TransactionExt::V0,
        }
    }

    #[test]
    fn test_minimal_transaction_layout() {
        let tx = Transaction {
            source_account: MuxedAccount::Ed25519([0; 32]),
            fee: 100,
            seq_num: 1,
            cond: Preconditions::None,
            memo: Memo::None,
            operations: Vec::new(),
            ext: TransactionExt::V0,
        };
        let bytes = tx.to_xdr().unwrap();
        // key type + key, fee, seq, cond, memo, op count, ext
        assert_eq!(bytes.len(), 4 + 32 + 4 + 8 + 4 + 4 + 4 + 4);
        assert_eq!(&bytes[36..40], &[0, 0, 0, 100]);
        assert_eq!(&bytes[40..48], &[0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(Transaction::from_xdr(&bytes).unwrap(), tx);
    }

    #[test]
    fn test_envelope_roundtrip_with_base64() {
        let mut envelope = TransactionEnvelope::from(sample_tx());
        envelope.signatures_mut().push(DecoratedSignature {
            hint: [1, 2, 3, 4],
            signature: vec![0xab; 64],
        });
        let encoded = envelope.to_xdr_base64().unwrap();
        let decoded = TransactionEnvelope::from_xdr_base64(&encoded).unwrap();
        assert_eq!(decoded, envelope);
        assert_eq!(decoded.signatures().len(), 1);
        assert_eq!(decoded.tx().fee, 100);
    }

    #[test]
    fn test_envelope_with_v2_preconditions() {
        let mut tx = sample_tx();
        tx.cond = Preconditions::V2(PreconditionsV2 {
            min_seq_num: Some(5),
            min_seq_age: 60,
            extra_signers: vec![SignerKey::HashX([3; 32])],
            ..Default::default()
        });
        let envelope = TransactionEnvelope::from(tx);
        let bytes = envelope.to_xdr().unwrap();
        assert_eq!(TransactionEnvelope::from_xdr(&bytes).unwrap(), envelope);
    }

    #[test]
    fn test_legacy_and_fee_bump_envelopes_rejected() {
        for disc in [EnvelopeType::TxV0, EnvelopeType::TxFeeBump] {
            let bytes = (disc.to_i32()).to_xdr().unwrap();
            assert!(matches!(
                TransactionEnvelope::from_xdr(&bytes),
                Err(XdrError::UnknownUnionArm {
                    type_name: "TransactionEnvelope",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_too_many_operations() {
        let mut tx = sample_tx();
        tx.operations = vec![tx.operations[0].clone(); 101];
        assert!(matches!(
            tx.to_xdr(),
            Err(XdrError::LengthExceedsMax { length: 101, max: 100 })
        ));
    }

    #[test]
    fn test_oversized_signature_rejected() {
        let sig = DecoratedSignature {
            hint: [0; 4],
            signature: vec![0; 65],
        };
        assert!(sig.to_xdr().is_err());
    }

    #[test]
    fn test_signature_payload_prefix() {
        let payload = TransactionSignaturePayload {
            network_id: [0xee; 32],
            tagged_transaction: TaggedTransaction::Tx(sample_tx()),
        };
        let bytes = payload.to_xdr().unwrap();
        assert_eq!(&bytes[..32], &[0xee; 32]);
        assert_eq!(&bytes[32..36], &[0, 0, 0, 2]);
        assert_eq!(&bytes[36..], &sample_tx().to_xdr().unwrap()[..]);
        assert_eq!(TransactionSignaturePayload::from_xdr(&bytes).unwrap(), payload);
    }
}
