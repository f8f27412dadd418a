//! Per-invocation connection and signing context.

use std::sync::Arc;
use std::time::Duration;

use ethers::core::k256::ecdsa::SigningKey;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, PendingTransaction, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{TransactionReceipt, H256};
use tracing::debug;
use zksync_web3_rs::ZKSWallet;

use crate::error::Error;

/// Signer-wrapped provider used for contract calls.
pub type EraSigner = SignerMiddleware<Provider<Http>, LocalWallet>;

/// One workflow invocation's view of the chain: a provider bound to the
/// configured endpoint and a signing wallet over it. Constructed fresh per
/// workflow and dropped at scope exit; nothing here outlives a run.
#[derive(Debug)]
pub struct ScriptContext {
    pub l2_provider: Provider<Http>,
    pub wallet: ZKSWallet<Provider<Http>, SigningKey>,
    pub chain_id: u64,
}

impl ScriptContext {
    /// Provider wrapped with this context's signer, for contract calls that
    /// send transactions.
    pub fn era_signer(&self) -> Result<Arc<EraSigner>, Error> {
        self.wallet.get_era_provider().map_err(Error::client)
    }
}

/// Connect to the node, verify the network identity against `allowed`, and
/// bind `signer` to the connected chain. Fails fast on an unexpected chain
/// id before any transaction is attempted.
pub async fn setup_context(
    rpc_url: &str,
    signer: LocalWallet,
    allowed: &'static [u64],
) -> Result<ScriptContext, Error> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| Error::InvalidRpcUrl(e.to_string()))?
        .interval(Duration::from_millis(200));

    let chain_id = provider.get_chainid().await?.as_u64();
    if !allowed.contains(&chain_id) {
        return Err(Error::UnsupportedNetwork {
            actual: chain_id,
            allowed,
        });
    }
    debug!(chain_id, "network identity verified");

    let signer = signer.with_chain_id(chain_id);
    let wallet = ZKSWallet::new(signer, None, Some(provider.clone()), None)
        .map_err(Error::client)?;

    Ok(ScriptContext {
        l2_provider: provider,
        wallet,
        chain_id,
    })
}

/// Block until `tx_hash` is included. A transaction that disappears from
/// the pool without a receipt is an error, not a retry.
pub async fn await_receipt(
    provider: &Provider<Http>,
    tx_hash: H256,
) -> Result<TransactionReceipt, Error> {
    PendingTransaction::new(tx_hash, provider)
        .await?
        .ok_or(Error::MissingReceipt(tx_hash))
}
