//! The two demo workflows: deploy the contracts, then use the paymaster.

use ethers::types::Address;
use helpers::SessionKey;

pub mod deploy;
pub mod usage;

/// Everything the deployment flow hands to the usage flow. Held in memory
/// only; the session key is the sole piece of state that outlives the
/// deployment run.
#[derive(Debug, Clone)]
pub struct DeploymentOutput {
    pub token: Address,
    pub greeter: Address,
    pub paymaster: Address,
    pub wallet_key: SessionKey,
}
