//! Network/Token Metadata Catalog
//!
//! The adapter reads token and bridge addresses through [`MetadataCatalog`].
//! [`StaticCatalog`] is the default implementation: a built-in Ethereum
//! mainnet table, or a JSON document with the same shape:
//!
//! ```json
//! {
//!   "mainnet": {
//!     "tokens": { "DAI": { "name": "DAI Stablecoin", "decimals": 18, "image": "dai.svg" } },
//!     "chains": {
//!       "ethereum": { "is_l1": true, "deposits": {} },
//!       "gnosis": {
//!         "is_l1": false,
//!         "deposits": {
//!           "DAI": {
//!             "l1_address": "0x6B175474E89094C44Da98b954EedeAC495271d0F",
//!             "l2_address": null,
//!             "bridge": "0x4aa42145Aa6Ebf72e164C9bBC74fbD3788045016",
//!             "native_bridge": "0x4aa42145Aa6Ebf72e164C9bBC74fbD3788045016"
//!           }
//!         }
//!       }
//!     }
//!   }
//! }
//! ```

use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::error::{BridgeError, Result};
use crate::types::{ChainSlug, Network, TokenSymbol};

/// Read-only lookup of token and bridge metadata
pub trait MetadataCatalog: Send + Sync {
    /// Chain description, including which tokens can be deposited into it
    fn network(&self, network: &str, chain: ChainSlug) -> Option<Network>;

    /// Token addresses and display metadata for a deposit target
    fn token(&self, network: &str, chain: ChainSlug, token: TokenSymbol) -> Option<CanonicalTokenEntry>;

    /// Contract that executes the deposit on L1
    fn bridge_address(&self, network: &str, chain: ChainSlug, token: TokenSymbol) -> Option<Address>;

    /// Contract that pulls the ERC20 on deposit (the approval spender)
    fn native_bridge_address(
        &self,
        network: &str,
        chain: ChainSlug,
        token: TokenSymbol,
    ) -> Option<Address>;
}

/// Canonical token as seen from one deposit target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalTokenEntry {
    pub symbol: TokenSymbol,
    /// `None` for the native coin
    pub l1_address: Option<Address>,
    pub l2_address: Option<Address>,
    pub decimals: u8,
    pub display_name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub decimals: u8,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositTarget {
    #[serde(default)]
    pub l1_address: Option<Address>,
    #[serde(default)]
    pub l2_address: Option<Address>,
    pub bridge: Address,
    #[serde(default)]
    pub native_bridge: Option<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainCatalog {
    #[serde(default)]
    pub is_l1: bool,
    #[serde(default)]
    pub deposits: BTreeMap<TokenSymbol, DepositTarget>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkCatalog {
    #[serde(default)]
    pub tokens: BTreeMap<TokenSymbol, TokenMetadata>,
    #[serde(default)]
    pub chains: BTreeMap<ChainSlug, ChainCatalog>,
}

/// In-memory catalog keyed by network name ("mainnet", "goerli", ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticCatalog {
    networks: HashMap<String, NetworkCatalog>,
}

impl StaticCatalog {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BridgeError::Catalog(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| BridgeError::Catalog(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    /// Add or replace a network
    pub fn with_network(mut self, name: impl Into<String>, network: NetworkCatalog) -> Self {
        self.networks.insert(name.into(), network);
        self
    }

    pub fn network_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.networks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn target(&self, network: &str, chain: ChainSlug, token: TokenSymbol) -> Option<&DepositTarget> {
        self.networks
            .get(network)?
            .chains
            .get(&chain)?
            .deposits
            .get(&token)
    }

    /// Ethereum mainnet canonical bridges
    pub fn mainnet() -> Self {
        Self::default().with_network("mainnet", mainnet_network())
    }
}

impl MetadataCatalog for StaticCatalog {
    fn network(&self, network: &str, chain: ChainSlug) -> Option<Network> {
        let chain_catalog = self.networks.get(network)?.chains.get(&chain)?;
        Some(Network {
            slug: chain,
            is_l1: chain_catalog.is_l1,
            supported_tokens: chain_catalog.deposits.keys().copied().collect(),
        })
    }

    fn token(&self, network: &str, chain: ChainSlug, token: TokenSymbol) -> Option<CanonicalTokenEntry> {
        let meta = self.networks.get(network)?.tokens.get(&token)?;
        let target = self.target(network, chain, token)?;
        Some(CanonicalTokenEntry {
            symbol: token,
            l1_address: target.l1_address,
            l2_address: target.l2_address,
            decimals: meta.decimals,
            display_name: meta.name.clone(),
            image: meta.image.clone(),
        })
    }

    fn bridge_address(&self, network: &str, chain: ChainSlug, token: TokenSymbol) -> Option<Address> {
        self.target(network, chain, token).map(|t| t.bridge)
    }

    fn native_bridge_address(
        &self,
        network: &str,
        chain: ChainSlug,
        token: TokenSymbol,
    ) -> Option<Address> {
        self.target(network, chain, token).and_then(|t| t.native_bridge)
    }
}

// ============================================================================
// Mainnet table
// ============================================================================

/// Ethereum mainnet token and bridge addresses
pub mod mainnet {
    use super::*;

    // L1 tokens
    pub const DAI: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
    pub const USDC: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
    pub const USDT: Address = address!("dAC17F958D2ee523a2206206994597C13D831ec7");
    pub const MATIC: Address = address!("7D1AfA7B718fb893dB30A3aBc0Cfc608AaCfeBB0");

    // Gnosis
    pub const XDAI_BRIDGE: Address = address!("4aa42145Aa6Ebf72e164C9bBC74fbD3788045016");
    pub const OMNIBRIDGE: Address = address!("88ad09518695c6c3712AC10a214bE5109a655671");
    pub const WETH_OMNIBRIDGE_ROUTER: Address = address!("a6439Ca0FCbA1d0F80df0bE6A17220feD9c9038a");
    pub const GNOSIS_USDC: Address = address!("DDAfbb505ad214D7b80b1f830fcCc89B60fb7A83");
    pub const GNOSIS_USDT: Address = address!("4ECaBa5870353805a9F068101A40E0f32ed605C6");
    pub const GNOSIS_WETH: Address = address!("6A023CCd1ff6F2045C3309768eAd9E68F978f6e1");

    // Optimism
    pub const OPTIMISM_STANDARD_BRIDGE: Address = address!("99C9fc46f92E8a1c0deC1b1747d010903E884bE1");
    pub const OPTIMISM_DAI_BRIDGE: Address = address!("10E6593CDda8c58a1d0f14C5164B376352a55f2F");
    pub const OPTIMISM_DAI: Address = address!("DA10009cBd5D07dd0CeCc66161FC93D7c9000da1");
    pub const OPTIMISM_USDC: Address = address!("7F5c764cBc14f9669B88837ca1490cCa17c31607");
    pub const OPTIMISM_USDT: Address = address!("94b008aA00579c1307B0EF2c499aD98a8ce58e58");

    // Arbitrum
    pub const ARBITRUM_INBOX: Address = address!("4Dbd4fc535Ac27206064B68FfCf827b0A60BAB3f");
    pub const ARBITRUM_GATEWAY_ROUTER: Address = address!("72Ce9c846789fdB6fC1f34aC4AD25Dd9ef7031ef");
    pub const ARBITRUM_ERC20_GATEWAY: Address = address!("a3A7B6F88361F48403514059F1F16C8E78d60EeC");
    pub const ARBITRUM_DAI_GATEWAY: Address = address!("D3B5b60020504bc3489D6949d545893982BA3011");
    pub const ARBITRUM_DAI: Address = address!("DA10009cBd5D07dd0CeCc66161FC93D7c9000da1");
    pub const ARBITRUM_USDC: Address = address!("FF970A61A04b1cA14834A43f5dE4533eBDDB5CC8");
    pub const ARBITRUM_USDT: Address = address!("Fd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9");

    // Polygon
    pub const POLYGON_ROOT_CHAIN_MANAGER: Address = address!("A0c68C638235ee32657e8f720a23ceC1bFc77C77");
    pub const POLYGON_ERC20_PREDICATE: Address = address!("40ec5B33f54e0E8A33A975908C5BA1c14e5BbbDf");
    pub const POLYGON_DEPOSIT_MANAGER: Address = address!("401F6c983eA34274ec46f84D70b31C151321188b");
    pub const POLYGON_DAI: Address = address!("8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063");
    pub const POLYGON_USDC: Address = address!("2791Bca1f2de4661ED88A30C99A7a9449Aa84174");
    pub const POLYGON_USDT: Address = address!("c2132D05D31c914a87C6611C10748AEb04B58e8F");
    pub const POLYGON_WETH: Address = address!("7ceB23fD6bC0adD59E62ac25578270cFf1b9f619");
    pub const POLYGON_MATIC: Address = address!("0000000000000000000000000000000000001010");
}

fn erc20(l1: Address, l2: Option<Address>, bridge: Address, spender: Address) -> DepositTarget {
    DepositTarget {
        l1_address: Some(l1),
        l2_address: l2,
        bridge,
        native_bridge: Some(spender),
    }
}

fn native(l2: Option<Address>, bridge: Address) -> DepositTarget {
    DepositTarget {
        l1_address: None,
        l2_address: l2,
        bridge,
        native_bridge: None,
    }
}

fn token_meta(name: &str, decimals: u8, image: &str) -> TokenMetadata {
    TokenMetadata {
        name: name.to_string(),
        decimals,
        image: image.to_string(),
    }
}

fn mainnet_network() -> NetworkCatalog {
    use mainnet::*;

    let tokens = BTreeMap::from([
        (TokenSymbol::Eth, token_meta("Ether", 18, "ethereum.svg")),
        (TokenSymbol::Matic, token_meta("Matic", 18, "matic.svg")),
        (TokenSymbol::Dai, token_meta("DAI Stablecoin", 18, "dai.svg")),
        (TokenSymbol::Usdc, token_meta("USD Coin", 6, "usdc.svg")),
        (TokenSymbol::Usdt, token_meta("Tether USD", 6, "usdt.svg")),
        (TokenSymbol::Wbtc, token_meta("Wrapped BTC", 8, "wbtc.svg")),
        (TokenSymbol::Frax, token_meta("Frax", 18, "frax.svg")),
    ]);

    let gnosis = ChainCatalog {
        is_l1: false,
        deposits: BTreeMap::from([
            (TokenSymbol::Eth, native(Some(GNOSIS_WETH), WETH_OMNIBRIDGE_ROUTER)),
            (TokenSymbol::Dai, erc20(DAI, None, XDAI_BRIDGE, XDAI_BRIDGE)),
            (TokenSymbol::Usdc, erc20(USDC, Some(GNOSIS_USDC), OMNIBRIDGE, OMNIBRIDGE)),
            (TokenSymbol::Usdt, erc20(USDT, Some(GNOSIS_USDT), OMNIBRIDGE, OMNIBRIDGE)),
        ]),
    };

    let optimism = ChainCatalog {
        is_l1: false,
        deposits: BTreeMap::from([
            (TokenSymbol::Eth, native(None, OPTIMISM_STANDARD_BRIDGE)),
            (
                TokenSymbol::Dai,
                erc20(DAI, Some(OPTIMISM_DAI), OPTIMISM_DAI_BRIDGE, OPTIMISM_DAI_BRIDGE),
            ),
            (
                TokenSymbol::Usdc,
                erc20(USDC, Some(OPTIMISM_USDC), OPTIMISM_STANDARD_BRIDGE, OPTIMISM_STANDARD_BRIDGE),
            ),
            (
                TokenSymbol::Usdt,
                erc20(USDT, Some(OPTIMISM_USDT), OPTIMISM_STANDARD_BRIDGE, OPTIMISM_STANDARD_BRIDGE),
            ),
        ]),
    };

    // Deposits go through the router; tokens are pulled by the gateway
    let arbitrum = ChainCatalog {
        is_l1: false,
        deposits: BTreeMap::from([
            (TokenSymbol::Eth, native(None, ARBITRUM_INBOX)),
            (
                TokenSymbol::Dai,
                erc20(DAI, Some(ARBITRUM_DAI), ARBITRUM_DAI_GATEWAY, ARBITRUM_DAI_GATEWAY),
            ),
            (
                TokenSymbol::Usdc,
                erc20(USDC, Some(ARBITRUM_USDC), ARBITRUM_GATEWAY_ROUTER, ARBITRUM_ERC20_GATEWAY),
            ),
            (
                TokenSymbol::Usdt,
                erc20(USDT, Some(ARBITRUM_USDT), ARBITRUM_GATEWAY_ROUTER, ARBITRUM_ERC20_GATEWAY),
            ),
        ]),
    };

    let polygon = ChainCatalog {
        is_l1: false,
        deposits: BTreeMap::from([
            (TokenSymbol::Eth, native(Some(POLYGON_WETH), POLYGON_ROOT_CHAIN_MANAGER)),
            (
                TokenSymbol::Matic,
                erc20(MATIC, Some(POLYGON_MATIC), POLYGON_DEPOSIT_MANAGER, POLYGON_DEPOSIT_MANAGER),
            ),
            (
                TokenSymbol::Dai,
                erc20(DAI, Some(POLYGON_DAI), POLYGON_ROOT_CHAIN_MANAGER, POLYGON_ERC20_PREDICATE),
            ),
            (
                TokenSymbol::Usdc,
                erc20(USDC, Some(POLYGON_USDC), POLYGON_ROOT_CHAIN_MANAGER, POLYGON_ERC20_PREDICATE),
            ),
            (
                TokenSymbol::Usdt,
                erc20(USDT, Some(POLYGON_USDT), POLYGON_ROOT_CHAIN_MANAGER, POLYGON_ERC20_PREDICATE),
            ),
        ]),
    };

    NetworkCatalog {
        tokens,
        chains: BTreeMap::from([
            (
                ChainSlug::Ethereum,
                ChainCatalog {
                    is_l1: true,
                    deposits: BTreeMap::new(),
                },
            ),
            (ChainSlug::Gnosis, gnosis),
            (ChainSlug::Optimism, optimism),
            (ChainSlug::Arbitrum, arbitrum),
            (ChainSlug::Polygon, polygon),
        ]),
    }
}
