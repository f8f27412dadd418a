//! Error types shared by the demo workflows.

use ethers::providers::ProviderError;
use ethers::signers::WalletError;
use ethers::types::{H256, U256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("connected to chain id {actual}, expected one of {allowed:?}")]
    UnsupportedNetwork {
        actual: u64,
        allowed: &'static [u64],
    },

    #[error("sponsored wallet must hold zero native balance, found {balance} wei")]
    WalletNotEmpty { balance: U256 },

    #[error("transaction {0:#x} was dropped before a receipt was produced")]
    MissingReceipt(H256),

    #[error("artifact {path}: {reason}")]
    BadArtifact { path: String, reason: String },

    #[error("token price feed returned zero, cannot convert the fee")]
    ZeroPriceFeed,

    #[error("fee conversion overflowed 256 bits")]
    FeeOverflow,

    #[error("invalid private key: {0}")]
    InvalidKey(String),

    #[error("invalid rpc url: {0}")]
    InvalidRpcUrl(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("wallet error: {0}")]
    Wallet(#[from] WalletError),

    /// Failures surfaced by the zksync client or a contract call. The SDK
    /// error types are generic over the middleware stack, so they are
    /// carried here as their rendered message.
    #[error("zksync client error: {0}")]
    Client(String),
}

impl Error {
    pub fn client(err: impl ToString) -> Self {
        Error::Client(err.to_string())
    }
}
