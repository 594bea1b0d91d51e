//! canonical-bridge-rs: L1 Deposit Adapter for Canonical Bridges
//!
//! Builds, estimates and sends deposits from Ethereum into the canonical
//! bridges of second-layer networks:
//!
//! - **Gnosis** - xDai bridge (DAI), WETH Omnibridge router (ETH), Omnibridge (ERC20)
//! - **Optimism** - L1StandardBridge and the L1 DAI bridge
//! - **Arbitrum** - Inbox (ETH) and gateway router / DAI gateway (ERC20, retryable tickets)
//! - **Polygon** - Plasma DepositManager (MATIC) and PoS RootChainManager (ETH, ERC20)
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use alloy::primitives::U256;
//! use canonical_bridge_rs::{BridgeParams, CanonicalBridge, StaticCatalog, StaticSignerProvider};
//!
//! # async fn run(signers: StaticSignerProvider) -> canonical_bridge_rs::Result<()> {
//! let bridge = CanonicalBridge::prepare(
//!     "mainnet",
//!     "DAI",
//!     "gnosis",
//!     Arc::new(StaticCatalog::mainnet()),
//!     BridgeParams::default(),
//! )?
//! .connect(&signers)
//! .await?;
//!
//! let amount = U256::from(10u64).pow(U256::from(18u64));
//! if bridge.l1_canonical_allowance().await? < amount {
//!     bridge.approve(amount).await?;
//! }
//! bridge.deposit(amount, None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - `selector` - (network, token) -> bridge protocol variant
//! - `resolver` / `cache` / `catalog` - bridge, token and spender addresses
//! - `approval` - ERC20 spender policy and approve transactions
//! - `builder` - deposit calldata per variant
//! - `gas` - gas estimation through the signer
//! - `bridge` - the `CanonicalBridge` facade
//! - `evm` - ABI bindings and the `L1Signer` seam

pub mod approval;
pub mod bridge;
pub mod builder;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod evm;
pub mod gas;
pub mod resolver;
pub mod selector;
pub mod types;

#[cfg(test)]
mod testing;

// Re-export commonly used items at the crate root
pub use bridge::{BridgeParams, CanonicalBridge, PreparedBridge, RetryableFunding};
pub use cache::{AddressCache, CacheConfig};
pub use catalog::{CanonicalTokenEntry, MetadataCatalog, StaticCatalog};
pub use config::{BridgeConfig, L1Config, RetryableTicketParams};
pub use error::{BridgeError, Result};
pub use evm::{EvmSigner, L1Signer, SignerProvider, StaticSignerProvider};
pub use resolver::{AddressResolver, BridgeAddresses};
pub use selector::{select_variant, BridgeProtocolVariant};
pub use types::{
    ApprovalRequirement, ChainSlug, DepositOutcome, DepositRequest, Network, PopulatedTransaction,
    TokenSymbol,
};
