//! Usage flow: submit a `setGreeting` call from a wallet that holds no
//! native currency, with the paymaster covering gas in exchange for tokens
//! priced off the two dAPI readings.

use chrono::Utc;
use ethers::providers::Middleware;
use ethers::signers::Signer;
use ethers::types::U256;
use tracing::info;
use zksync_web3_rs::eip712::{Eip712Meta, Eip712TransactionRequest};
use zksync_web3_rs::zks_provider::ZKSProvider;

use helpers::contracts::{GreeterContract, PaymasterContract, TokenContract};
use helpers::paymaster::{approval_based_params, token_fee_from_native, DEFAULT_GAS_PER_PUBDATA_LIMIT};
use helpers::{setup_context, Error, NetworkConfig};

use crate::deploy::{ETH_USD_PROXY, USDC_USD_PROXY};
use crate::DeploymentOutput;

/// Chain ids this flow accepts. Diverges from the deployment flow's list on
/// the testnet id; see the note on `DEPLOY_CHAIN_IDS`.
pub const USAGE_CHAIN_IDS: &[u64] = &[280, 324];

/// Over-sized allowance used only to make gas estimation pass before the
/// real fee is known.
const ESTIMATE_ALLOWANCE: &str = "100000000000000000000";

/// Run the sponsored-transaction sequence against an existing deployment.
/// The wallet behind `deployment.wallet_key` must hold zero native
/// currency: that is the whole point of the demo, and it is asserted
/// before anything is submitted.
pub async fn run(config: &NetworkConfig, deployment: &DeploymentOutput) -> anyhow::Result<()> {
    let ctx = setup_context(
        &config.rpc_url,
        deployment.wallet_key.signer(),
        USAGE_CHAIN_IDS,
    )
    .await?;
    let wallet_address = deployment.wallet_key.address();
    info!(chain_id = ctx.chain_id, "connected for the sponsored call");

    let native_balance = ctx.l2_provider.get_balance(wallet_address, None).await?;
    if !native_balance.is_zero() {
        return Err(Error::WalletNotEmpty {
            balance: native_balance,
        }
        .into());
    }

    let era = ctx.era_signer()?;
    let token = TokenContract::attach(deployment.token, era.clone());
    let greeter = GreeterContract::attach(deployment.greeter, era.clone());
    let paymaster = PaymasterContract::attach(deployment.paymaster, era);

    let balance_before = token.balance_of(wallet_address).await?;
    info!("token balance before the sponsored call: {balance_before}");

    let gas_price = ctx.l2_provider.get_gas_price().await?;

    let new_greeting = format!("new greeting updated at {}", Utc::now().to_rfc2822());
    let calldata = greeter.set_greeting_calldata(&new_greeting)?;

    // Estimate with a throwaway allowance; the real ceiling depends on this
    // estimate and is computed below.
    let placeholder_params = approval_based_params(
        deployment.paymaster,
        deployment.token,
        U256::from_dec_str(ESTIMATE_ALLOWANCE)?,
    );
    let estimate_request = Eip712TransactionRequest {
        from: wallet_address,
        to: deployment.greeter,
        data: calldata.clone(),
        custom_data: Eip712Meta {
            gas_per_pubdata: DEFAULT_GAS_PER_PUBDATA_LIMIT.into(),
            paymaster_params: Some(placeholder_params),
            ..Default::default()
        },
        ..Default::default()
    };
    let fee_estimate = ctx.l2_provider.estimate_fee(estimate_request).await?;
    let gas_limit = fee_estimate.gas_limit;

    let native_fee = gas_price * gas_limit;
    info!("estimated native fee (gas price x gas limit): {native_fee}");

    let native_quote = paymaster.read_dapi(ETH_USD_PROXY.parse()?).await?;
    let token_quote = paymaster.read_dapi(USDC_USD_PROXY.parse()?).await?;
    info!("ETH/USD dAPI value: {native_quote}");
    info!("USDC/USD dAPI value: {token_quote}");

    let token_fee = token_fee_from_native(native_fee, native_quote, token_quote)?;
    info!("estimated token fee: {token_fee}");

    // Diagnostic only; the approval-based flow sets the allowance itself.
    let current_allowance = token.allowance(wallet_address, deployment.paymaster).await?;
    info!("current token allowance for the paymaster: {current_allowance}");

    info!("current message: {}", greeter.greet().await?);

    let params = approval_based_params(deployment.paymaster, deployment.token, token_fee);
    let nonce = ctx
        .l2_provider
        .get_transaction_count(wallet_address, None)
        .await?;
    let request = Eip712TransactionRequest {
        from: wallet_address,
        to: deployment.greeter,
        data: calldata,
        nonce,
        gas_limit: Some(gas_limit),
        max_fee_per_gas: Some(gas_price),
        max_priority_fee_per_gas: U256::zero(),
        chain_id: ctx.chain_id.into(),
        custom_data: Eip712Meta {
            gas_per_pubdata: DEFAULT_GAS_PER_PUBDATA_LIMIT.into(),
            paymaster_params: Some(params),
            ..Default::default()
        },
        ..Default::default()
    };

    let signer = deployment.wallet_key.signer().with_chain_id(ctx.chain_id);
    let pending = ctx
        .l2_provider
        .send_transaction_eip712(&signer, request)
        .await?;
    let tx_hash = *pending;
    let receipt = pending.await?.ok_or(Error::MissingReceipt(tx_hash))?;
    info!(
        "sponsored transaction confirmed: {:?}",
        receipt.transaction_hash
    );

    let balance_after = token.balance_of(wallet_address).await?;
    info!("token balance after the sponsored call: {balance_after}");
    info!(
        "transaction fee paid in tokens: {}",
        balance_before - balance_after
    );

    info!("message is now: {}", greeter.greet().await?);
    Ok(())
}
