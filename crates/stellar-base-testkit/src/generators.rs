//! Proptest generators for property-based testing.

use proptest::prelude::*;

use stellar_base::xdr::{
    AccountId, Asset, BumpSequenceOp, CreateAccountOp, DataName, LedgerBounds, ManageDataOp,
    Memo, MuxedAccount, Operation, OperationBody, PaymentOp, Preconditions, PreconditionsV2,
    SignerKey, TimeBounds, Transaction, TransactionExt,
};
use stellar_base::Keypair;
use stellar_base_strkey::{ClaimableBalance, MuxedAccountPayload, SignedPayload, Strkey};

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_raw_seed(&seed))
}

/// Generate a valid signed-payload body (1-64 bytes).
pub fn signed_payload_body() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=64)
}

/// Generate a signed payload signer.
pub fn signed_payload() -> impl Strategy<Value = SignedPayload> {
    (any::<[u8; 32]>(), signed_payload_body()).prop_filter_map(
        "payload within bounds",
        |(key, payload)| SignedPayload::new(key, payload).ok(),
    )
}

/// Generate a decoded StrKey of any variant.
pub fn strkey() -> impl Strategy<Value = Strkey> {
    let bytes = || any::<[u8; 32]>();
    prop_oneof![
        bytes().prop_map(Strkey::AccountId),
        bytes().prop_map(Strkey::SecretSeed),
        (bytes(), any::<u64>())
            .prop_map(|(ed25519, id)| Strkey::MuxedAccount(MuxedAccountPayload { ed25519, id })),
        bytes().prop_map(Strkey::PreAuthTx),
        bytes().prop_map(Strkey::Sha256Hash),
        signed_payload().prop_map(Strkey::SignedPayload),
        bytes().prop_map(Strkey::Contract),
        bytes().prop_map(Strkey::LiquidityPool),
        bytes().prop_map(|hash| Strkey::ClaimableBalance(ClaimableBalance::V0(hash))),
    ]
}

pub fn account_id() -> impl Strategy<Value = AccountId> {
    any::<[u8; 32]>().prop_map(AccountId::from_ed25519)
}

pub fn muxed_account() -> impl Strategy<Value = MuxedAccount> {
    prop_oneof![
        any::<[u8; 32]>().prop_map(MuxedAccount::Ed25519),
        (any::<u64>(), any::<[u8; 32]>())
            .prop_map(|(id, ed25519)| MuxedAccount::MuxedEd25519 { id, ed25519 }),
    ]
}

pub fn signer_key() -> impl Strategy<Value = SignerKey> {
    prop_oneof![
        any::<[u8; 32]>().prop_map(SignerKey::Ed25519),
        any::<[u8; 32]>().prop_map(SignerKey::PreAuthTx),
        any::<[u8; 32]>().prop_map(SignerKey::HashX),
        signed_payload().prop_map(SignerKey::Ed25519SignedPayload),
    ]
}

pub fn preconditions() -> impl Strategy<Value = Preconditions> {
    let time_bounds = (any::<u64>(), any::<u64>())
        .prop_map(|(min_time, max_time)| TimeBounds { min_time, max_time });
    let ledger_bounds = (any::<u32>(), any::<u32>())
        .prop_map(|(min_ledger, max_ledger)| LedgerBounds { min_ledger, max_ledger });
    let v2 = (
        proptest::option::of(time_bounds.clone()),
        proptest::option::of(ledger_bounds),
        any::<Option<i64>>(),
        any::<u64>(),
        any::<u32>(),
        prop::collection::vec(signer_key(), 0..=2),
    )
        .prop_map(
            |(time_bounds, ledger_bounds, min_seq_num, min_seq_age, min_seq_ledger_gap, extra_signers)| {
                PreconditionsV2 {
                    time_bounds,
                    ledger_bounds,
                    min_seq_num,
                    min_seq_age,
                    min_seq_ledger_gap,
                    extra_signers,
                }
            },
        );
    prop_oneof![
        Just(Preconditions::None),
        time_bounds.prop_map(Preconditions::Time),
        v2.prop_map(Preconditions::V2),
    ]
}

pub fn memo() -> impl Strategy<Value = Memo> {
    prop_oneof![
        Just(Memo::None),
        prop::collection::vec(any::<u8>(), 0..=28)
            .prop_filter_map("memo text fits", |text| Memo::text(text).ok()),
        any::<u64>().prop_map(Memo::Id),
        any::<[u8; 32]>().prop_map(Memo::Hash),
        any::<[u8; 32]>().prop_map(Memo::Return),
    ]
}

pub fn asset() -> impl Strategy<Value = Asset> {
    prop_oneof![
        Just(Asset::Native),
        ("[A-Z0-9]{1,12}", account_id())
            .prop_filter_map("valid asset code", |(code, issuer)| {
                Asset::credit(&code, issuer).ok()
            }),
    ]
}

pub fn operation() -> impl Strategy<Value = Operation> {
    let body = prop_oneof![
        (account_id(), 1i64..=i64::MAX).prop_map(|(destination, starting_balance)| {
            OperationBody::CreateAccount(CreateAccountOp {
                destination,
                starting_balance,
            })
        }),
        (muxed_account(), asset(), 1i64..=i64::MAX).prop_map(|(destination, asset, amount)| {
            OperationBody::Payment(PaymentOp {
                destination,
                asset,
                amount,
            })
        }),
        (
            prop::collection::vec(any::<u8>(), 1..=64),
            proptest::option::of(prop::collection::vec(any::<u8>(), 0..=64)),
        )
            .prop_filter_map("data name fits", |(name, data_value)| {
                Some(OperationBody::ManageData(ManageDataOp {
                    data_name: DataName::new(name).ok()?,
                    data_value,
                }))
            }),
        any::<i64>().prop_map(|bump_to| OperationBody::BumpSequence(BumpSequenceOp { bump_to })),
    ];
    (proptest::option::of(muxed_account()), body).prop_map(|(source_account, body)| Operation {
        source_account,
        body,
    })
}

/// Parameters for generating a transaction.
#[derive(Debug, Clone)]
pub struct TransactionParams {
    pub source: MuxedAccount,
    pub fee: u32,
    pub seq_num: i64,
    pub cond: Preconditions,
    pub memo: Memo,
    pub operations: Vec<Operation>,
}

impl Arbitrary for TransactionParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            muxed_account(),
            100u32..=10_000,
            1i64..=i64::MAX,
            preconditions(),
            memo(),
            prop::collection::vec(operation(), 1..=5),
        )
            .prop_map(|(source, fee, seq_num, cond, memo, operations)| TransactionParams {
                source,
                fee,
                seq_num,
                cond,
                memo,
                operations,
            })
            .boxed()
    }
}

/// Build a transaction from parameters.
pub fn transaction_from_params(params: &TransactionParams) -> Transaction {
    Transaction {
        source_account: params.source,
        fee: params.fee,
        seq_num: params.seq_num,
        cond: params.cond.clone(),
        memo: params.memo.clone(),
        operations: params.operations.clone(),
        ext: TransactionExt::V0,
    }
}
