//! Live tests for the full deploy-then-use pipeline.
//!
//! All of these need a running zkSync Era node and a funded account
//! (`FUNDING_PRIVATE_KEY`), so they are ignored by default. Note that the
//! deployment flow accepts chain ids {300, 324} while the usage flow
//! accepts {280, 324}: the combined pipeline only passes on a node
//! advertising chain id 324 (e.g. a dev fork configured with the mainnet
//! id) until that divergence is resolved.

use anyhow::Result;
use ethers::providers::{Http, Middleware, Provider};
use ethers::types::{Address, U256};
use ethers::utils::parse_ether;
use zksync_web3_rs::zks_wallet::TransferRequest;

use helpers::contracts::{GreeterContract, TokenContract};
use helpers::{setup_context, Error, SessionKey};
use scripts::deploy::DEPLOY_CHAIN_IDS;
use scripts::{deploy, usage};
use tests::config_from_env;

const MINTED: &str = "5000000000000000000000";

#[tokio::test]
#[ignore = "requires a funded account on a running zkSync Era node"]
async fn deployment_reports_fixed_state() -> Result<()> {
    let config = config_from_env()?;
    let output = deploy::run(&config).await?;

    // three well-formed, distinct addresses
    for address in [output.token, output.greeter, output.paymaster] {
        assert_ne!(address, Address::zero());
    }
    assert_ne!(output.token, output.greeter);
    assert_ne!(output.token, output.paymaster);
    assert_ne!(output.greeter, output.paymaster);

    // the printed key recovers the generated wallet's address
    let restored = SessionKey::from_hex(&output.wallet_key.reveal_hex())?;
    assert_eq!(restored.address(), output.wallet_key.address());

    let provider = Provider::<Http>::try_from(config.rpc_url.as_str())?;
    let paymaster_balance = provider.get_balance(output.paymaster, None).await?;
    assert_eq!(paymaster_balance, parse_ether("0.05")?);

    let ctx = setup_context(&config.rpc_url, config.funding_wallet()?, DEPLOY_CHAIN_IDS).await?;
    let token = TokenContract::attach(output.token, ctx.era_signer()?);
    assert_eq!(
        token.balance_of(output.wallet_key.address()).await?,
        U256::from_dec_str(MINTED)?
    );

    let greeter = GreeterContract::attach(output.greeter, ctx.era_signer()?);
    assert_eq!(greeter.greet().await?, "old greeting");

    Ok(())
}

#[tokio::test]
#[ignore = "requires a funded account on a running zkSync Era node"]
async fn sponsored_call_pays_fees_in_tokens() -> Result<()> {
    let config = config_from_env()?;
    let output = deploy::run(&config).await?;
    let wallet = output.wallet_key.address();

    let ctx = setup_context(&config.rpc_url, config.funding_wallet()?, DEPLOY_CHAIN_IDS).await?;
    let token = TokenContract::attach(output.token, ctx.era_signer()?);
    let greeter = GreeterContract::attach(output.greeter, ctx.era_signer()?);
    let balance_before = token.balance_of(wallet).await?;

    usage::run(&config, &output).await?;

    // the wallet never paid gas
    let native = ctx.l2_provider.get_balance(wallet, None).await?;
    assert!(native.is_zero());

    // it paid in tokens instead
    let balance_after = token.balance_of(wallet).await?;
    assert!(balance_after < balance_before);

    // and the message actually changed
    let message = greeter.greet().await?;
    assert_ne!(message, "old greeting");
    assert!(message.starts_with("new greeting updated at"));

    Ok(())
}

#[tokio::test]
#[ignore = "requires a funded account on a running zkSync Era node"]
async fn usage_rejects_a_funded_wallet() -> Result<()> {
    let config = config_from_env()?;
    let output = deploy::run(&config).await?;

    // break the precondition: give the sponsored wallet some native currency
    let ctx = setup_context(&config.rpc_url, config.funding_wallet()?, DEPLOY_CHAIN_IDS).await?;
    let transfer = TransferRequest::new(parse_ether("0.001")?)
        .to(output.wallet_key.address())
        .from(ctx.wallet.l2_address());
    let tx_hash = ctx
        .wallet
        .transfer(&transfer, None)
        .await
        .map_err(Error::client)?;
    helpers::context::await_receipt(&ctx.l2_provider, tx_hash).await?;

    let err = usage::run(&config, &output)
        .await
        .expect_err("a funded wallet must be rejected");
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::WalletNotEmpty { .. })
    ));

    Ok(())
}

#[tokio::test]
#[ignore = "requires a funded account on a running zkSync Era node"]
async fn usage_can_run_twice_on_one_deployment() -> Result<()> {
    let config = config_from_env()?;
    let output = deploy::run(&config).await?;

    // no hidden one-shot state: a second sponsored call succeeds as long
    // as the token balance lasts
    usage::run(&config, &output).await?;
    usage::run(&config, &output).await?;

    Ok(())
}
