use std::path::PathBuf;

use ethers::signers::LocalWallet;

use crate::error::Error;

/// Everything a workflow invocation needs from its environment: where the
/// node is, who pays for deployment, and where the compiled contract
/// artifacts live. Built by the binaries from CLI flags / env vars and
/// passed explicitly; there is no ambient client state.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub rpc_url: String,
    pub funding_key: String,
    pub artifacts_dir: PathBuf,
}

impl NetworkConfig {
    /// Parse the funding account's private key into a signer.
    ///
    /// The chain id is applied later, once the connected network is known.
    pub fn funding_wallet(&self) -> Result<LocalWallet, Error> {
        self.funding_key
            .trim()
            .trim_start_matches("0x")
            .parse::<LocalWallet>()
            .map_err(|e| Error::InvalidKey(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::signers::Signer;

    #[test]
    fn funding_wallet_accepts_prefixed_and_bare_keys() {
        let bare = "0000000000000000000000000000000000000000000000000000000000000001";
        let config = NetworkConfig {
            rpc_url: "http://localhost:8011".into(),
            funding_key: format!("0x{bare}"),
            artifacts_dir: "artifacts".into(),
        };
        let prefixed = config.funding_wallet().unwrap();

        let config = NetworkConfig {
            funding_key: bare.into(),
            ..config
        };
        let unprefixed = config.funding_wallet().unwrap();

        assert_eq!(prefixed.address(), unprefixed.address());
    }

    #[test]
    fn funding_wallet_rejects_garbage() {
        let config = NetworkConfig {
            rpc_url: "http://localhost:8011".into(),
            funding_key: "not-a-key".into(),
            artifacts_dir: "artifacts".into(),
        };
        assert!(matches!(
            config.funding_wallet(),
            Err(Error::InvalidKey(_))
        ));
    }
}
