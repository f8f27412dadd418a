//! Shared setup for the live integration tests.
//!
//! These tests run the real workflows against a node, so they read the
//! same environment the binaries do.

use anyhow::Context;
use helpers::NetworkConfig;

/// Build a [`NetworkConfig`] from the environment. `FUNDING_PRIVATE_KEY`
/// must be set; the RPC endpoint defaults to a local Era test node.
pub fn config_from_env() -> anyhow::Result<NetworkConfig> {
    Ok(NetworkConfig {
        rpc_url: std::env::var("ZKSYNC_RPC_URL")
            .unwrap_or_else(|_| "http://localhost:8011".into()),
        funding_key: std::env::var("FUNDING_PRIVATE_KEY")
            .context("FUNDING_PRIVATE_KEY must be set for live tests")?,
        artifacts_dir: std::env::var("ARTIFACTS_DIR")
            .unwrap_or_else(|_| "artifacts".into())
            .into(),
    })
}
