//! Test fixtures and helpers.
//!
//! Common setup code for integration tests and benches.

use stellar_base::xdr::{
    Asset, BumpSequenceOp, Memo, Operation, OperationBody, PaymentOp, Preconditions,
    TimeBounds, Transaction, TransactionEnvelope, TransactionExt,
};
use stellar_base::{sign_transaction, Keypair, Network, Result};

/// A signing account with a network and a running sequence number.
pub struct TestFixture {
    pub keypair: Keypair,
    pub network: Network,
    pub seq_num: i64,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Create a new test fixture with a random keypair on testnet.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::random(),
            network: Network::TESTNET,
            seq_num: 1,
        }
    }

    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_raw_seed(&seed),
            ..Self::new()
        }
    }

    /// A transaction from this account carrying `operations`.
    pub fn transaction(&self, operations: Vec<Operation>) -> Transaction {
        Transaction {
            source_account: self.keypair.xdr_account_id().into(),
            fee: 100 * operations.len().max(1) as u32,
            seq_num: self.seq_num,
            cond: Preconditions::Time(TimeBounds {
                min_time: 0,
                max_time: 0,
            }),
            memo: Memo::None,
            operations,
            ext: TransactionExt::V0,
        }
    }

    /// A native payment to `destination`.
    pub fn payment(&self, destination: &Keypair, amount: i64) -> Transaction {
        self.transaction(vec![Operation::new(OperationBody::Payment(PaymentOp {
            destination: destination.xdr_account_id().into(),
            asset: Asset::Native,
            amount,
        }))])
    }

    /// A bump-sequence transaction.
    pub fn bump_sequence(&self, bump_to: i64) -> Transaction {
        self.transaction(vec![Operation::new(OperationBody::BumpSequence(
            BumpSequenceOp { bump_to },
        ))])
    }

    /// Sign `tx` with this fixture's key and advance the sequence number.
    pub fn sign(&mut self, tx: Transaction) -> Result<TransactionEnvelope> {
        let mut envelope = TransactionEnvelope::from(tx);
        sign_transaction(&mut envelope, &self.keypair, &self.network)?;
        self.seq_num += 1;
        Ok(envelope)
    }
}

/// Create `n` fixtures with distinct deterministic keys.
pub fn multi_party_fixtures(n: usize) -> Vec<TestFixture> {
    (0..n)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[..8].copy_from_slice(&(i as u64).to_be_bytes());
            TestFixture::with_seed(seed)
        })
        .collect()
}
