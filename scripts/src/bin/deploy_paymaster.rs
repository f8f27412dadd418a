//! Deploy the token, paymaster and greeter contracts, fund the paymaster,
//! and mint tokens to a fresh wallet.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use helpers::NetworkConfig;
use scripts::deploy;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// JSON-RPC endpoint of the target zkSync Era node.
    #[arg(long, env = "ZKSYNC_RPC_URL", default_value = "https://sepolia.era.zksync.dev")]
    rpc_url: String,

    /// Private key of the funding account that pays for deployment.
    #[arg(long, env = "FUNDING_PRIVATE_KEY", hide_env_values = true)]
    funding_key: String,

    /// Directory holding the compiled contract artifacts (`<Name>.json`).
    #[arg(long, env = "ARTIFACTS_DIR", default_value = "artifacts")]
    artifacts_dir: PathBuf,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = NetworkConfig {
        rpc_url: cli.rpc_url,
        funding_key: cli.funding_key,
        artifacts_dir: cli.artifacts_dir,
    };

    let output = deploy::run(&config).await?;

    info!("deployment complete");
    info!("  token:     {:?}", output.token);
    info!("  greeter:   {:?}", output.greeter);
    info!("  paymaster: {:?}", output.paymaster);
    info!("  sponsored wallet key: {}", output.wallet_key.reveal_hex());
    Ok(())
}
