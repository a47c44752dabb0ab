//! End-to-end signing: build, sign, serialize, parse, verify.

use stellar_base::xdr::{
    Asset, CreateAccountOp, Memo, Operation, OperationBody, PaymentOp, Preconditions,
    PreconditionsV2, SignerKey, TimeBounds, Transaction, TransactionEnvelope, TransactionExt,
};
use stellar_base::{
    envelope_from_base64, envelope_to_base64, is_signed_by, sign_transaction, Error, Keypair,
    Network, TransactionHash, XdrError,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

fn payment_tx(source: &Keypair, destination: &Keypair) -> Transaction {
    Transaction {
        source_account: source.xdr_muxed_account(7),
        fee: 200,
        seq_num: 123_456_789,
        cond: Preconditions::V2(PreconditionsV2 {
            time_bounds: Some(TimeBounds {
                min_time: 0,
                max_time: 1_900_000_000,
            }),
            extra_signers: vec![SignerKey::HashX([9; 32])],
            ..Default::default()
        }),
        memo: Memo::text("invoice 17").unwrap(),
        operations: vec![
            Operation::new(OperationBody::CreateAccount(CreateAccountOp {
                destination: destination.xdr_account_id(),
                starting_balance: 20_000_000,
            })),
            Operation::new(OperationBody::Payment(PaymentOp {
                destination: destination.xdr_account_id().into(),
                asset: Asset::credit("USD", source.xdr_account_id()).unwrap(),
                amount: 1_000,
            })),
        ],
        ext: TransactionExt::V0,
    }
}

#[test]
fn test_sign_serialize_parse_verify() {
    init_tracing();
    let source = Keypair::from_raw_seed(&[0x11; 32]);
    let destination = Keypair::from_raw_seed(&[0x22; 32]);

    let mut envelope = TransactionEnvelope::from(payment_tx(&source, &destination));
    sign_transaction(&mut envelope, &source, &Network::PUBLIC).unwrap();
    let encoded = envelope_to_base64(&envelope).unwrap();

    let parsed = envelope_from_base64(&encoded).unwrap();
    assert_eq!(parsed, envelope);

    // A verifier holding only the account id.
    let verifier = Keypair::from_account_id(&source.account_id()).unwrap();
    assert!(is_signed_by(&parsed, &verifier, &Network::PUBLIC).unwrap());
    assert!(!is_signed_by(&parsed, &verifier, &Network::TESTNET).unwrap());
    assert_eq!(
        parsed.hash(&Network::PUBLIC).unwrap(),
        envelope.hash(&Network::PUBLIC).unwrap()
    );
}

#[test]
fn test_tampered_envelope_fails_verification() {
    init_tracing();
    let source = Keypair::from_raw_seed(&[0x11; 32]);
    let destination = Keypair::from_raw_seed(&[0x22; 32]);

    let mut envelope = TransactionEnvelope::from(payment_tx(&source, &destination));
    sign_transaction(&mut envelope, &source, &Network::TESTNET).unwrap();

    let TransactionEnvelope::Tx(mut inner) = envelope;
    inner.tx.fee += 1;
    let tampered = TransactionEnvelope::Tx(inner);
    assert!(!is_signed_by(&tampered, &source, &Network::TESTNET).unwrap());
}

#[test]
fn test_malformed_envelopes_rejected() {
    init_tracing();
    // Four zero bytes: the legacy v0 envelope discriminant.
    assert!(matches!(
        envelope_from_base64("AAAAAA=="),
        Err(Error::Xdr(XdrError::UnknownUnionArm {
            type_name: "TransactionEnvelope",
            discriminant: 0
        }))
    ));
    // Three bytes cannot hold a discriminant.
    assert!(matches!(
        envelope_from_base64("AAAA"),
        Err(Error::Xdr(XdrError::BufferUnderrun {
            needed: 4,
            remaining: 3
        }))
    ));
    assert!(matches!(
        envelope_from_base64("AAAAAg=="),
        Err(Error::Xdr(XdrError::BufferUnderrun { .. }))
    ));
    assert!(matches!(
        envelope_from_base64("%%%"),
        Err(Error::Xdr(XdrError::InvalidBase64(_)))
    ));
}
