//! The sponsored wallet's key, modeled as an explicit session credential.
//!
//! The key exists only to hand one freshly generated wallet from the
//! deployment flow to the usage flow. It never leaves the process except
//! through [`SessionKey::reveal_hex`], which the demo calls on purpose;
//! `Debug` and `Display` are redacted so the secret cannot leak through
//! ordinary logging.

use std::fmt;
use std::str::FromStr;

use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, H256};

use crate::error::Error;

#[derive(Clone)]
pub struct SessionKey {
    secret: H256,
    address: Address,
}

impl SessionKey {
    /// Generate a fresh key pair for the wallet that will receive tokens
    /// and submit the sponsored transaction.
    pub fn generate() -> Self {
        let wallet = LocalWallet::new(&mut rand::thread_rng());
        Self {
            secret: H256::from_slice(&wallet.signer().to_bytes()),
            address: wallet.address(),
        }
    }

    /// Parse a 32-byte hex key, with or without a `0x` prefix. The scalar
    /// is validated by deriving its address.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let bytes = hex::decode(s.trim().trim_start_matches("0x"))
            .map_err(|e| Error::InvalidKey(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(Error::InvalidKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        let wallet =
            LocalWallet::from_bytes(&bytes).map_err(|e| Error::InvalidKey(e.to_string()))?;
        Ok(Self {
            secret: H256::from_slice(&bytes),
            address: wallet.address(),
        })
    }

    /// Address of the wallet this credential controls.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The raw key as `0x`-prefixed hex. Deliberately explicit: the demo
    /// prints it so the usage flow can be re-run by hand.
    pub fn reveal_hex(&self) -> String {
        format!("0x{}", hex::encode(self.secret.as_bytes()))
    }

    /// Signer over this credential. The chain id is applied by the caller
    /// once the connected network is known.
    pub fn signer(&self) -> LocalWallet {
        LocalWallet::from_bytes(self.secret.as_bytes())
            .expect("session key was validated at construction")
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKey")
            .field("address", &self.address)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionKey({:?})", self.address)
    }
}

impl FromStr for SessionKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str = "0x0000000000000000000000000000000000000000000000000000000000000001";

    #[test]
    fn known_key_derives_known_address() {
        let key = SessionKey::from_hex(ONE).unwrap();
        let expected: Address = "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
            .parse()
            .unwrap();
        assert_eq!(key.address(), expected);
    }

    #[test]
    fn reveal_round_trips() {
        let key = SessionKey::generate();
        let restored = SessionKey::from_hex(&key.reveal_hex()).unwrap();
        assert_eq!(restored.address(), key.address());
    }

    #[test]
    fn signer_controls_the_same_address() {
        let key = SessionKey::generate();
        assert_eq!(key.signer().address(), key.address());
    }

    #[test]
    fn debug_and_display_never_leak_the_secret() {
        let key = SessionKey::from_hex(ONE).unwrap();
        let secret_hex = &key.reveal_hex()[2..];
        for rendered in [format!("{key:?}"), format!("{key}")] {
            assert!(!rendered.contains(secret_hex));
        }
    }

    #[test]
    fn rejects_short_and_invalid_keys() {
        assert!(matches!(
            SessionKey::from_hex("0xabcd"),
            Err(Error::InvalidKey(_))
        ));
        assert!(matches!(
            SessionKey::from_hex("zz"),
            Err(Error::InvalidKey(_))
        ));
        // the zero scalar is not a valid secp256k1 key
        let zero = format!("0x{}", "00".repeat(32));
        assert!(matches!(
            SessionKey::from_hex(&zero),
            Err(Error::InvalidKey(_))
        ));
    }
}
