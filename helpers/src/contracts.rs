//! Thin handles over the three deployed contract interfaces.
//!
//! Each handle attaches to an address with the published ABI and exposes
//! exactly the calls the workflows use. State-changing calls block until a
//! receipt is produced.

use std::sync::Arc;

use ethers::abi::Detokenize;
use ethers::contract::builders::ContractCall;
use ethers::contract::Contract;
use ethers::types::{Address, Bytes, TransactionReceipt, U256};

use crate::abi;
use crate::context::EraSigner;
use crate::error::Error;

async fn send_and_confirm<D>(
    call: ContractCall<EraSigner, D>,
) -> Result<TransactionReceipt, Error>
where
    D: Detokenize,
{
    let pending = call.send().await.map_err(Error::client)?;
    let tx_hash = *pending;
    pending.await?.ok_or(Error::MissingReceipt(tx_hash))
}

/// The demo ERC-20 token.
pub struct TokenContract {
    inner: Contract<EraSigner>,
}

impl TokenContract {
    pub fn attach(address: Address, client: Arc<EraSigner>) -> Self {
        Self {
            inner: Contract::new(address, abi::erc20(), client),
        }
    }

    pub fn address(&self) -> Address {
        self.inner.address()
    }

    pub async fn mint(&self, to: Address, amount: U256) -> Result<TransactionReceipt, Error> {
        let call = self
            .inner
            .method::<_, bool>("mint", (to, amount))
            .map_err(Error::client)?;
        send_and_confirm(call).await
    }

    pub async fn balance_of(&self, owner: Address) -> Result<U256, Error> {
        self.inner
            .method::<_, U256>("balanceOf", owner)
            .map_err(Error::client)?
            .call()
            .await
            .map_err(Error::client)
    }

    pub async fn allowance(&self, owner: Address, spender: Address) -> Result<U256, Error> {
        self.inner
            .method::<_, U256>("allowance", (owner, spender))
            .map_err(Error::client)?
            .call()
            .await
            .map_err(Error::client)
    }
}

/// The fee-sponsoring paymaster.
pub struct PaymasterContract {
    inner: Contract<EraSigner>,
}

impl PaymasterContract {
    pub fn attach(address: Address, client: Arc<EraSigner>) -> Self {
        Self {
            inner: Contract::new(address, abi::paymaster(), client),
        }
    }

    pub fn address(&self) -> Address {
        self.inner.address()
    }

    /// Register the two dAPI proxies the paymaster prices fees with.
    /// Argument order matches the contract: token/USD first, then ETH/USD.
    pub async fn set_dapi_proxies(
        &self,
        usdc_usd_proxy: Address,
        eth_usd_proxy: Address,
    ) -> Result<TransactionReceipt, Error> {
        let call = self
            .inner
            .method::<_, ()>("setDapiProxy", (usdc_usd_proxy, eth_usd_proxy))
            .map_err(Error::client)?;
        send_and_confirm(call).await
    }

    /// Current reading of the given dAPI proxy, fetched fresh on every call.
    pub async fn read_dapi(&self, proxy: Address) -> Result<U256, Error> {
        self.inner
            .method::<_, U256>("readDapi", proxy)
            .map_err(Error::client)?
            .call()
            .await
            .map_err(Error::client)
    }
}

/// The greeting-storage contract the sponsored call writes to.
pub struct GreeterContract {
    inner: Contract<EraSigner>,
}

impl GreeterContract {
    pub fn attach(address: Address, client: Arc<EraSigner>) -> Self {
        Self {
            inner: Contract::new(address, abi::greeter(), client),
        }
    }

    pub fn address(&self) -> Address {
        self.inner.address()
    }

    pub async fn greet(&self) -> Result<String, Error> {
        self.inner
            .method::<_, String>("greet", ())
            .map_err(Error::client)?
            .call()
            .await
            .map_err(Error::client)
    }

    /// Calldata for `setGreeting`, for the EIP-712 transaction the wallet
    /// submits through the paymaster.
    pub fn set_greeting_calldata(&self, greeting: &str) -> Result<Bytes, Error> {
        self.inner
            .method::<_, ()>("setGreeting", greeting.to_string())
            .map_err(Error::client)?
            .calldata()
            .ok_or_else(|| Error::Client("setGreeting produced no calldata".into()))
    }
}
