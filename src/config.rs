use alloy::primitives::U256;
use eyre::{eyre, Result, WrapErr};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::cache::CacheConfig;

/// Default Arbitrum retryable-ticket parameters
const DEFAULT_MAX_SUBMISSION_COST: u64 = 500_000;
const DEFAULT_MAX_GAS: u64 = 400_000;
const DEFAULT_GAS_PRICE_BID: u64 = 300_000_000; // 0.3 gwei

/// Main configuration for the canonical bridge adapter
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub l1: L1Config,
    /// Metadata catalog network key (e.g. "mainnet")
    pub network: String,
    /// Optional JSON catalog replacing the built-in mainnet table
    pub catalog_path: Option<PathBuf>,
    pub cache: CacheConfig,
    pub retryable: RetryableTicketParams,
}

/// L1 RPC and signing configuration
#[derive(Clone)]
pub struct L1Config {
    pub rpc_url: String,
    pub chain_id: u64,
    pub private_key: String,
}

/// Custom Debug that redacts private_key to prevent accidental log leakage.
impl fmt::Debug for L1Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("L1Config")
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.chain_id)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Arbitrum retryable-ticket funding
///
/// Paid from the `value` of the opt-in `outboundTransfer` deposit form:
/// `max_submission_cost + max_gas * gas_price_bid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryableTicketParams {
    pub max_submission_cost: U256,
    pub max_gas: U256,
    pub gas_price_bid: U256,
}

impl Default for RetryableTicketParams {
    fn default() -> Self {
        Self {
            max_submission_cost: U256::from(DEFAULT_MAX_SUBMISSION_COST),
            max_gas: U256::from(DEFAULT_MAX_GAS),
            gas_price_bid: U256::from(DEFAULT_GAS_PRICE_BID),
        }
    }
}

impl RetryableTicketParams {
    /// ETH that must accompany an outbound ERC20 transfer
    pub fn ticket_value(&self) -> U256 {
        self.max_submission_cost
            .saturating_add(self.max_gas.saturating_mul(self.gas_price_bid))
    }
}

impl BridgeConfig {
    /// Load configuration from environment variables
    /// Loads .env file if present, then reads from environment
    pub fn load() -> Result<Self> {
        Self::load_from_file(".env")
    }

    /// Load from a specific .env file path
    pub fn load_from_file(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            dotenvy::from_filename(path)
                .wrap_err_with(|| format!("Failed to load .env file from {}", path))?;
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| eyre!("{} environment variable is required", key))
        };

        let l1 = L1Config {
            rpc_url: required("L1_RPC_URL")?,
            chain_id: required("L1_CHAIN_ID")?
                .parse()
                .wrap_err("L1_CHAIN_ID must be a valid u64")?,
            private_key: required("L1_PRIVATE_KEY")?,
        };

        let network = lookup("BRIDGE_NETWORK").unwrap_or_else(|| "mainnet".to_string());
        if network.trim().is_empty() {
            return Err(eyre!("BRIDGE_NETWORK cannot be empty"));
        }

        let cache = CacheConfig::from_lookup(&lookup)?;

        let defaults = RetryableTicketParams::default();
        let retryable = RetryableTicketParams {
            max_submission_cost: parse_u256(&lookup, "ARBITRUM_MAX_SUBMISSION_COST")?
                .unwrap_or(defaults.max_submission_cost),
            max_gas: parse_u256(&lookup, "ARBITRUM_MAX_GAS")?.unwrap_or(defaults.max_gas),
            gas_price_bid: parse_u256(&lookup, "ARBITRUM_GAS_PRICE_BID")?
                .unwrap_or(defaults.gas_price_bid),
        };

        Ok(Self {
            l1,
            network,
            catalog_path: lookup("BRIDGE_CATALOG_PATH").map(PathBuf::from),
            cache,
            retryable,
        })
    }
}

fn parse_u256<F>(lookup: &F, key: &str) -> Result<Option<U256>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<U256>()
                .map_err(|e| eyre!("{} must be an unsigned integer: {}", key, e))
        })
        .transpose()
}
