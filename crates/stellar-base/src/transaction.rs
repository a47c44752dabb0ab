//! Transaction hashing, signing and envelope helpers.

use sha2::{Digest, Sha256};
use stellar_base_xdr::{
    ReadXdr, TaggedTransaction, Transaction, TransactionEnvelope, TransactionSignaturePayload,
    WriteXdr,
};

use crate::error::{Error, Result};
use crate::keypair::Keypair;
use crate::network::Network;

/// Network-bound hashing for anything that wraps a [`Transaction`].
pub trait TransactionHash {
    /// The XDR `TransactionSignaturePayload` bytes for `network`.
    fn signature_base(&self, network: &Network) -> Result<Vec<u8>>;

    /// SHA-256 of [`signature_base`](Self::signature_base); the bytes signers sign.
    fn hash(&self, network: &Network) -> Result<[u8; 32]> {
        Ok(Sha256::digest(self.signature_base(network)?).into())
    }

    /// Hex form of [`hash`](Self::hash), as ledger APIs display it.
    fn hash_hex(&self, network: &Network) -> Result<String> {
        Ok(hex::encode(self.hash(network)?))
    }
}

impl TransactionHash for Transaction {
    fn signature_base(&self, network: &Network) -> Result<Vec<u8>> {
        let payload = TransactionSignaturePayload {
            network_id: network.network_id(),
            tagged_transaction: TaggedTransaction::Tx(self.clone()),
        };
        Ok(payload.to_xdr()?)
    }
}

impl TransactionHash for TransactionEnvelope {
    fn signature_base(&self, network: &Network) -> Result<Vec<u8>> {
        self.tx().signature_base(network)
    }
}

/// Sign the envelope's transaction for `network` and append the signature.
pub fn sign_transaction(
    envelope: &mut TransactionEnvelope,
    keypair: &Keypair,
    network: &Network,
) -> Result<()> {
    let hash = envelope.hash(network)?;
    let signature = keypair.sign_decorated(&hash)?;
    envelope.signatures_mut().push(signature);
    Ok(())
}

/// Whether the envelope carries a valid signature from `keypair` on `network`.
///
/// Only signatures whose hint matches the key are checked.
pub fn is_signed_by(
    envelope: &TransactionEnvelope,
    keypair: &Keypair,
    network: &Network,
) -> Result<bool> {
    let hash = envelope.hash(network)?;
    let hint = keypair.signature_hint();
    for decorated in envelope.signatures().iter().filter(|s| s.hint == hint) {
        match keypair.verify(&hash, &decorated.signature) {
            Ok(()) => return Ok(true),
            Err(Error::InvalidSignature) => {
                tracing::debug!(
                    signer = %keypair.account_id(),
                    "signature with matching hint failed to verify"
                );
            }
            Err(e) => return Err(e),
        }
    }
    Ok(false)
}

/// Decode a base64 `TransactionEnvelope`, as returned by ledger APIs.
pub fn envelope_from_base64(encoded: &str) -> Result<TransactionEnvelope> {
    TransactionEnvelope::from_xdr_base64(encoded.trim()).map_err(|e| {
        tracing::debug!(error = %e, "rejected transaction envelope");
        Error::Xdr(e)
    })
}

/// Encode a `TransactionEnvelope` as base64 for submission.
pub fn envelope_to_base64(envelope: &TransactionEnvelope) -> Result<String> {
    Ok(envelope.to_xdr_base64()?)
}
