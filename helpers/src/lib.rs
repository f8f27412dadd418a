//! Common building blocks for the paymaster demo scripts and tests.

pub mod abi;
pub mod artifacts;
pub mod config;
pub mod context;
pub mod contracts;
pub mod credential;
pub mod error;
pub mod paymaster;

pub use artifacts::ArtifactStore;
pub use config::NetworkConfig;
pub use context::{setup_context, EraSigner, ScriptContext};
pub use credential::SessionKey;
pub use error::Error;
