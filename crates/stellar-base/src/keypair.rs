//! Ed25519 keypairs with StrKey import and export.

use std::fmt;

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use stellar_base_strkey as strkey;
use stellar_base_xdr::{AccountId, DecoratedSignature, MuxedAccount, SignerKey};

use crate::error::{Error, Result};

/// A public key, optionally with its secret half.
///
/// Keypairs built from an account id can verify but not sign.
#[derive(Clone)]
pub struct Keypair {
    public: VerifyingKey,
    secret: Option<SigningKey>,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self::from_signing_key(SigningKey::generate(&mut rng))
    }

    /// Create from a 32-byte seed.
    pub fn from_raw_seed(seed: &[u8; 32]) -> Self {
        Self::from_signing_key(SigningKey::from_bytes(seed))
    }

    /// Create from an `S...` secret seed.
    pub fn from_secret_seed(seed: &str) -> Result<Self> {
        Ok(Self::from_raw_seed(&strkey::decode_secret_seed(seed)?))
    }

    /// Create a verify-only keypair from a raw public key.
    pub fn from_public_key(public_key: &[u8; 32]) -> Result<Self> {
        let public = VerifyingKey::from_bytes(public_key).map_err(|_| Error::InvalidPublicKey)?;
        Ok(Self {
            public,
            secret: None,
        })
    }

    /// Create a verify-only keypair from a `G...` account id.
    pub fn from_account_id(account_id: &str) -> Result<Self> {
        Self::from_public_key(&strkey::decode_account_id(account_id)?)
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        Self {
            public: signing_key.verifying_key(),
            secret: Some(signing_key),
        }
    }

    /// Whether this keypair holds a secret key.
    pub fn can_sign(&self) -> bool {
        self.secret.is_some()
    }

    /// The raw public key.
    pub fn public_key(&self) -> [u8; 32] {
        self.public.to_bytes()
    }

    /// The `G...` account id.
    pub fn account_id(&self) -> String {
        strkey::encode_account_id(&self.public_key())
    }

    /// The `S...` secret seed.
    pub fn secret_seed(&self) -> Result<String> {
        let secret = self.secret.as_ref().ok_or(Error::MissingSecretKey)?;
        Ok(strkey::encode_secret_seed(&secret.to_bytes()))
    }

    /// The raw 32-byte seed.
    pub fn raw_seed(&self) -> Result<[u8; 32]> {
        let secret = self.secret.as_ref().ok_or(Error::MissingSecretKey)?;
        Ok(secret.to_bytes())
    }

    pub fn xdr_account_id(&self) -> AccountId {
        AccountId::from_ed25519(self.public_key())
    }

    /// The muxed form of this account with sub-account `id`.
    pub fn xdr_muxed_account(&self, id: u64) -> MuxedAccount {
        MuxedAccount::MuxedEd25519 {
            id,
            ed25519: self.public_key(),
        }
    }

    pub fn signer_key(&self) -> SignerKey {
        SignerKey::Ed25519(self.public_key())
    }

    /// Last four bytes of the public key.
    pub fn signature_hint(&self) -> [u8; 4] {
        let key = self.public_key();
        let mut hint = [0u8; 4];
        hint.copy_from_slice(&key[28..]);
        hint
    }

    /// Sign `data`.
    pub fn sign(&self, data: &[u8]) -> Result<[u8; 64]> {
        let secret = self.secret.as_ref().ok_or(Error::MissingSecretKey)?;
        Ok(secret.sign(data).to_bytes())
    }

    /// Verify `signature` over `data`.
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> Result<()> {
        let signature = Signature::from_slice(signature).map_err(|_| Error::InvalidSignature)?;
        self.public
            .verify(data, &signature)
            .map_err(|_| Error::InvalidSignature)
    }

    /// Sign `data` and attach this key's hint.
    pub fn sign_decorated(&self, data: &[u8]) -> Result<DecoratedSignature> {
        Ok(DecoratedSignature {
            hint: self.signature_hint(),
            signature: self.sign(data)?.to_vec(),
        })
    }

    /// Sign `payload` for an ed25519 signed-payload signer.
    ///
    /// The hint is the key hint XORed with the payload's last four bytes
    /// (zero-extended on the right when shorter).
    pub fn sign_payload_decorated(&self, payload: &[u8]) -> Result<DecoratedSignature> {
        let mut payload_hint = [0u8; 4];
        if payload.len() >= 4 {
            payload_hint.copy_from_slice(&payload[payload.len() - 4..]);
        } else {
            payload_hint[..payload.len()].copy_from_slice(payload);
        }
        let mut hint = self.signature_hint();
        for (h, p) in hint.iter_mut().zip(payload_hint) {
            *h ^= p;
        }
        Ok(DecoratedSignature {
            hint,
            signature: self.sign(payload)?.to_vec(),
        })
    }
}

impl PartialEq for Keypair {
    fn eq(&self, other: &Self) -> bool {
        self.public == other.public && self.can_sign() == other.can_sign()
    }
}

impl Eq for Keypair {}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({})", self.account_id())
    }
}
