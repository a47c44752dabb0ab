//! Known-answer tests that every Stellar implementation must agree on.
//!
//! Strings here are the published forms; any change to byte layout, padding or
//! checksum placement shows up as a mismatch.

use serde::{Deserialize, Serialize};
use stellar_base::strkey::{
    self, ClaimableBalance, MuxedAccountPayload, SignedPayload, StrKeyError,
};
use stellar_base::xdr::{
    ClaimableBalanceId, MuxedAccount, Preconditions, PreconditionsV2, ReadXdr, SignerKey,
    WriteXdr,
};
use stellar_base::{Keypair, Strkey};

const KEY_HEX: &str = "3f0c34bf93ad0d9971d04ccc90f705511c838aad9734a4a2fb0d7a03fc7fe89a";
const ACCOUNT: &str = "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ";
const MUXED: &str = "MA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUAAALD57XQ344SD6Q";
const MUXED_ID: u64 = 97_839_283_928_292;
const SIGNED_PAYLOAD_32: &str = "PA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUAAAAAQACAQDAQCQMBYIBEFAWDANBYHRAEISCMKBKFQXDAMRUGY4DUPB6IBZGM";
const SIGNED_PAYLOAD_29: &str = "PA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUAAAAAOQCAQDAQCQMBYIBEFAWDANBYHRAEISCMKBKFQXDAMRUGY4DUAAAAFGBU";
const CLAIMABLE_BALANCE: &str = "BAAD6DBUX6J22DMZOHIEZTEQ64CVCHEDRKWZONFEUL5Q26QD7R76RGR4TU";

fn key() -> [u8; 32] {
    let mut key = [0u8; 32];
    hex::decode_to_slice(KEY_HEX, &mut key).unwrap();
    key
}

/// A StrKey known answer.
#[derive(Debug, Serialize, Deserialize)]
struct StrKeyVector {
    name: String,
    encoded: String,
    /// Raw payload between version byte and checksum, hex.
    raw: String,
}

fn strkey_vectors() -> Vec<StrKeyVector> {
    let v = |name: &str, encoded: &str, raw: String| StrKeyVector {
        name: name.to_string(),
        encoded: encoded.to_string(),
        raw,
    };
    vec![
        v("account_id", ACCOUNT, KEY_HEX.to_string()),
        v(
            "muxed_account",
            MUXED,
            format!("{}{:016x}", KEY_HEX, MUXED_ID),
        ),
        v(
            "pre_auth_tx",
            "TA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUPUI",
            KEY_HEX.to_string(),
        ),
        v(
            "sha256_hash",
            "XA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVLRR",
            KEY_HEX.to_string(),
        ),
        v(
            "contract",
            "CA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUWDA",
            KEY_HEX.to_string(),
        ),
        v(
            "liquidity_pool",
            "LA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUPJN",
            KEY_HEX.to_string(),
        ),
        v("claimable_balance", CLAIMABLE_BALANCE, format!("00{}", KEY_HEX)),
        v(
            "secret_seed",
            "SBBEEQSCIJBEEQSCIJBEEQSCIJBEEQSCIJBEEQSCIJBEEQSCIJBEE5BQ",
            "42".repeat(32),
        ),
    ]
}

#[test]
fn test_strkey_vectors() {
    for vector in strkey_vectors() {
        let decoded = Strkey::from_string(&vector.encoded)
            .unwrap_or_else(|e| panic!("{}: {}", vector.name, e));
        let raw = match &decoded {
            Strkey::AccountId(k)
            | Strkey::SecretSeed(k)
            | Strkey::PreAuthTx(k)
            | Strkey::Sha256Hash(k)
            | Strkey::Contract(k)
            | Strkey::LiquidityPool(k) => hex::encode(k),
            Strkey::MuxedAccount(m) => format!("{}{:016x}", hex::encode(m.ed25519), m.id),
            Strkey::ClaimableBalance(b) => hex::encode(b.to_raw()),
            Strkey::SignedPayload(_) => unreachable!(),
        };
        assert_eq!(raw, vector.raw, "{}", vector.name);
        assert_eq!(decoded.to_string(), vector.encoded, "{}", vector.name);
    }
}

#[test]
fn print_strkey_vectors_json() {
    let json = serde_json::to_string_pretty(&strkey_vectors()).unwrap();
    let back: Vec<StrKeyVector> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), strkey_vectors().len());
    println!("{}", json);
}

#[test]
fn test_muxed_account_known_answer() {
    let muxed = MuxedAccountPayload {
        ed25519: key(),
        id: MUXED_ID,
    };
    assert_eq!(strkey::encode_muxed_account(&muxed), MUXED);

    let decoded = strkey::decode_muxed_account(MUXED).unwrap();
    assert_eq!(decoded.ed25519, key());
    assert_eq!(decoded.id, MUXED_ID);

    // The typed form carries the same account and id, with the id first on
    // the XDR wire.
    let typed: MuxedAccount = MUXED.parse().unwrap();
    assert_eq!(typed.account_id().to_strkey(), ACCOUNT);
    assert_eq!(typed.id(), Some(MUXED_ID));
    let bytes = typed.to_xdr().unwrap();
    assert_eq!(&bytes[..4], &[0, 0, 1, 0]);
    assert_eq!(&bytes[4..12], &MUXED_ID.to_be_bytes());
    assert_eq!(&bytes[12..], &key());
}

#[test]
fn test_signed_payload_known_answers() {
    let payload_32: Vec<u8> = (1..=32).collect();
    let signed = SignedPayload::new(key(), payload_32).unwrap();
    assert_eq!(strkey::encode_signed_payload(&signed), SIGNED_PAYLOAD_32);
    assert_eq!(strkey::decode_signed_payload(SIGNED_PAYLOAD_32).unwrap(), signed);

    let payload_29: Vec<u8> = (1..=29).collect();
    let signed = SignedPayload::new(key(), payload_29).unwrap();
    assert_eq!(strkey::encode_signed_payload(&signed), SIGNED_PAYLOAD_29);
    assert_eq!(strkey::decode_signed_payload(SIGNED_PAYLOAD_29).unwrap(), signed);

    // The signer-key arm agrees with the StrKey form.
    let signer: SignerKey = SIGNED_PAYLOAD_29.parse().unwrap();
    assert_eq!(signer.to_strkey(), SIGNED_PAYLOAD_29);
    let bytes = signer.to_xdr().unwrap();
    assert_eq!(bytes.len(), 4 + 32 + 4 + 32);
    assert_eq!(&bytes[69..], &[0, 0, 0]);
    assert_eq!(SignerKey::from_xdr(&bytes).unwrap(), signer);
}

#[test]
fn test_digit_zero_is_not_base32() {
    let err = strkey::decode_account_id("GBPXX0A5N4JYPESHAADMQKBPWZWQDQ64ZV6ZL2S3LAGW4SY7NTCMWIVL")
        .unwrap_err();
    assert!(matches!(err, StrKeyError::InvalidCharacterSet { character: '0', .. }));
    assert!(!strkey::is_valid_account_id(
        "GBPXX0A5N4JYPESHAADMQKBPWZWQDQ64ZV6ZL2S3LAGW4SY7NTCMWIVL"
    ));
}

#[test]
fn test_seed_through_account_decoder() {
    let seed = Keypair::random().secret_seed().unwrap();
    assert!(matches!(
        strkey::decode_account_id(&seed),
        Err(StrKeyError::VersionByteMismatch { expected: 48, actual: 144 })
    ));
}

#[test]
fn test_claimable_balance_hex_strkey_raw() {
    let xdr_hex = format!("00000000{}", KEY_HEX);
    let raw_hex = format!("00{}", KEY_HEX);

    assert_eq!(strkey::encode_claimable_balance_id_hex(&xdr_hex).unwrap(), CLAIMABLE_BALANCE);
    assert_eq!(strkey::encode_claimable_balance_id_hex(&raw_hex).unwrap(), CLAIMABLE_BALANCE);
    assert_eq!(
        strkey::decode_claimable_balance_id_to_hex(CLAIMABLE_BALANCE).unwrap(),
        xdr_hex
    );

    let balance = strkey::decode_claimable_balance_id(CLAIMABLE_BALANCE).unwrap();
    assert_eq!(balance, ClaimableBalance::V0(key()));
    assert_eq!(balance.to_raw()[0], 0);

    let typed = ClaimableBalanceId::from_strkey(CLAIMABLE_BALANCE).unwrap();
    assert_eq!(hex::encode(typed.to_xdr().unwrap()), xdr_hex);
    assert_eq!(typed.to_strkey(), CLAIMABLE_BALANCE);
}

#[test]
fn test_preconditions_only_seq_age_and_gap() {
    let cond = Preconditions::V2(PreconditionsV2 {
        min_seq_age: 3600,
        min_seq_ledger_gap: 12,
        ..Default::default()
    });
    let bytes = cond.to_xdr().unwrap();
    let decoded = Preconditions::from_xdr(&bytes).unwrap();
    assert_eq!(decoded, cond);

    let Preconditions::V2(v2) = decoded else {
        panic!("expected v2 preconditions");
    };
    assert!(v2.time_bounds.is_none());
    assert!(v2.ledger_bounds.is_none());
    assert!(v2.min_seq_num.is_none());
    assert!(v2.extra_signers.is_empty());
    assert_eq!(v2.min_seq_age, 3600);
    assert_eq!(v2.min_seq_ledger_gap, 12);
}

#[test]
fn test_seed_to_account_vectors() {
    let cases = [
        (
            "SDJHRQF4GCMIIKAAAQ6IHY42X73FQFLHUULAPSKKD4DFDM7UXWWCRHBE",
            "GCZHXL5HXQX5ABDM26LHYRCQZ5OJFHLOPLZX47WEBP3V2PF5AVFK2A5D",
        ),
        (
            "SBBEEQSCIJBEEQSCIJBEEQSCIJBEEQSCIJBEEQSCIJBEEQSCIJBEE5BQ",
            "GAQVF6GRTN4R2JCFGJBOCXZOVNWLPT72PNVF5UYAS6LA4BUYQHNRET46",
        ),
    ];
    for (seed, account) in cases {
        let kp = Keypair::from_secret_seed(seed).unwrap();
        assert_eq!(kp.account_id(), account);
        assert_eq!(kp.xdr_account_id().to_strkey(), account);
    }
}
