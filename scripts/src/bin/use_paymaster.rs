//! Submit a sponsored `setGreeting` call against an existing deployment.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ethers::types::Address;
use tracing_subscriber::EnvFilter;

use helpers::{NetworkConfig, SessionKey};
use scripts::{usage, DeploymentOutput};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// JSON-RPC endpoint of the target zkSync Era node.
    #[arg(long, env = "ZKSYNC_RPC_URL", default_value = "https://sepolia.era.zksync.dev")]
    rpc_url: String,

    /// ERC-20 token address from the deployment run.
    #[arg(long, env = "TOKEN_ADDRESS")]
    token: Address,

    /// Greeter address from the deployment run.
    #[arg(long, env = "GREETER_ADDRESS")]
    greeter: Address,

    /// Paymaster address from the deployment run.
    #[arg(long, env = "PAYMASTER_ADDRESS")]
    paymaster: Address,

    /// Private key of the sponsored wallet, as printed by the deployment.
    #[arg(long, env = "SPONSORED_WALLET_KEY", hide_env_values = true)]
    wallet_key: SessionKey,

    /// Directory holding the compiled contract artifacts (`<Name>.json`).
    #[arg(long, env = "ARTIFACTS_DIR", default_value = "artifacts")]
    artifacts_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cli = Cli::parse();

    let config = NetworkConfig {
        rpc_url: cli.rpc_url,
        // The sponsored call is signed by the session key; no funding
        // account is involved in this flow.
        funding_key: String::new(),
        artifacts_dir: cli.artifacts_dir,
    };
    let deployment = DeploymentOutput {
        token: cli.token,
        greeter: cli.greeter,
        paymaster: cli.paymaster,
        wallet_key: cli.wallet_key,
    };

    usage::run(&config, &deployment).await
}
