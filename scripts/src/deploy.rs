//! Deployment flow: token, paymaster and greeter contracts, paymaster
//! funding, price-feed configuration, and the initial token grant to a
//! freshly generated wallet.

use anyhow::Context;
use ethers::types::U256;
use ethers::utils::parse_ether;
use tracing::info;
use zksync_web3_rs::zks_wallet::{DeployRequest, TransferRequest};

use helpers::context::await_receipt;
use helpers::contracts::{PaymasterContract, TokenContract};
use helpers::{abi, setup_context, ArtifactStore, Error, NetworkConfig, SessionKey};

use crate::DeploymentOutput;

/// Chain ids this flow will deploy to: Era Sepolia (300) and mainnet (324).
// TODO: the usage flow accepts {280, 324} instead; confirm which testnet id
// (280 is the retired Era Goerli, 300 is Era Sepolia) is actually intended
// before unifying the two lists.
pub const DEPLOY_CHAIN_IDS: &[u64] = &[300, 324];

const TOKEN_NAME: &str = "USDC";
const TOKEN_SYMBOL: &str = "USDC";
const TOKEN_DECIMALS: u8 = 18;

/// Native currency moved to the paymaster so it can cover gas.
const PAYMASTER_FUNDING_ETH: &str = "0.05";

/// 5000 tokens at 18 decimals, granted to the sponsored wallet.
const MINT_AMOUNT: &str = "5000000000000000000000";

const INITIAL_GREETING: &str = "old greeting";

/// API3 dAPI proxies on Era. Verify the addresses (and their funding) on
/// https://market.api3.org before pointing a paymaster at them.
pub const ETH_USD_PROXY: &str = "0x28ce555ee7a3daCdC305951974FcbA59F5BdF09b";
pub const USDC_USD_PROXY: &str = "0x946E3232Cc18E812895A8e83CaE3d0caA241C2AB";

/// Run the full deployment sequence. Every step waits for its receipt
/// before the next begins; any failure aborts the remainder. There is no
/// rollback of contracts already deployed.
pub async fn run(config: &NetworkConfig) -> anyhow::Result<DeploymentOutput> {
    let ctx = setup_context(&config.rpc_url, config.funding_wallet()?, DEPLOY_CHAIN_IDS).await?;
    info!(chain_id = ctx.chain_id, "connected for deployment");

    // The wallet that will receive tokens and submit the sponsored call.
    // Both values are printed on purpose: the key is this demo's only
    // handoff between the two flows.
    let session = SessionKey::generate();
    info!("sponsored wallet address: {:?}", session.address());
    info!("sponsored wallet private key: {}", session.reveal_hex());

    let artifacts = ArtifactStore::open(&config.artifacts_dir);
    let deployer = ctx.wallet.l2_address();

    info!("deploying the ERC-20 token");
    let token_request = DeployRequest::with(
        abi::erc20(),
        artifacts.bytecode("MyERC20")?,
        vec![
            TOKEN_NAME.to_string(),
            TOKEN_SYMBOL.to_string(),
            TOKEN_DECIMALS.to_string(),
        ],
    )
    .from(deployer);
    let token_address = ctx.wallet.deploy(&token_request).await.map_err(Error::client)?;
    info!("token address: {token_address:?}");

    info!("deploying the paymaster");
    let paymaster_request = DeployRequest::with(
        abi::paymaster(),
        artifacts.bytecode("MyPaymaster")?,
        vec![format!("{token_address:?}")],
    )
    .from(deployer);
    let paymaster_address = ctx
        .wallet
        .deploy(&paymaster_request)
        .await
        .map_err(Error::client)?;
    info!("paymaster address: {paymaster_address:?}");

    let funding = parse_ether(PAYMASTER_FUNDING_ETH)?;
    let transfer = TransferRequest::new(funding)
        .to(paymaster_address)
        .from(deployer);
    let tx_hash = ctx.wallet.transfer(&transfer, None).await.map_err(Error::client)?;
    await_receipt(&ctx.l2_provider, tx_hash).await?;
    info!("paymaster funded with {PAYMASTER_FUNDING_ETH} ETH");

    let paymaster = PaymasterContract::attach(paymaster_address, ctx.era_signer()?);
    paymaster
        .set_dapi_proxies(USDC_USD_PROXY.parse()?, ETH_USD_PROXY.parse()?)
        .await
        .context("registering the dAPI proxies on the paymaster")?;
    info!("dAPI proxies set");

    info!("deploying the greeter");
    let greeter_request = DeployRequest::with(
        abi::greeter(),
        artifacts.bytecode("Greeter")?,
        vec![INITIAL_GREETING.to_string()],
    )
    .from(deployer);
    let greeter_address = ctx
        .wallet
        .deploy(&greeter_request)
        .await
        .map_err(Error::client)?;
    info!("greeter address: {greeter_address:?}");

    let token = TokenContract::attach(token_address, ctx.era_signer()?);
    token
        .mint(session.address(), U256::from_dec_str(MINT_AMOUNT)?)
        .await
        .context("minting tokens to the sponsored wallet")?;
    info!("minted 5000 {TOKEN_SYMBOL} to the sponsored wallet");

    Ok(DeploymentOutput {
        token: token_address,
        greeter: greeter_address,
        paymaster: paymaster_address,
        wallet_key: session,
    })
}
