//! Network passphrases and ids.

use std::borrow::Cow;
use std::fmt;

use sha2::{Digest, Sha256};

/// A Stellar network, identified by its passphrase.
///
/// Transaction hashes are domain-separated by the network id, so a signature
/// made for one network never verifies on another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Network {
    passphrase: Cow<'static, str>,
}

impl Network {
    pub const PUBLIC_PASSPHRASE: &'static str = "Public Global Stellar Network ; September 2015";
    pub const TESTNET_PASSPHRASE: &'static str = "Test SDF Network ; September 2015";

    /// The public production network.
    pub const PUBLIC: Network = Network {
        passphrase: Cow::Borrowed(Self::PUBLIC_PASSPHRASE),
    };

    /// The SDF test network.
    pub const TESTNET: Network = Network {
        passphrase: Cow::Borrowed(Self::TESTNET_PASSPHRASE),
    };

    /// A network with a custom passphrase, e.g. a private standalone network.
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: Cow::Owned(passphrase.into()),
        }
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// SHA-256 of the passphrase.
    pub fn network_id(&self) -> [u8; 32] {
        Sha256::digest(self.passphrase.as_bytes()).into()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.passphrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_network_ids() {
        assert_eq!(
            hex::encode(Network::PUBLIC.network_id()),
            "7ac33997544e3175d266bd022439b22cdb16508c01163f26e5cb2a3e1045a979"
        );
        assert_eq!(
            hex::encode(Network::TESTNET.network_id()),
            "cee0302d59844d32bdca915c8203dd44b33fbb7edc19051ea37abedf28ecd472"
        );
    }

    #[test]
    fn test_custom_network() {
        let standalone = Network::new("Standalone Network ; February 2017");
        assert_eq!(standalone.passphrase(), "Standalone Network ; February 2017");
        assert_ne!(standalone.network_id(), Network::TESTNET.network_id());
        assert_eq!(Network::new(Network::TESTNET_PASSPHRASE), Network::TESTNET);
    }
}
