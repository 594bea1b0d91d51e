//! Bridge address resolution
//!
//! Reads bridge, token and spender addresses for a deposit route from the
//! [`MetadataCatalog`] and memoizes them in an injected [`AddressCache`].

use alloy::primitives::Address;
use std::sync::Arc;
use tracing::debug;

use crate::cache::AddressCache;
use crate::catalog::MetadataCatalog;
use crate::error::{BridgeError, Result};
use crate::selector::BridgeProtocolVariant;
use crate::types::{ChainSlug, Network, TokenSymbol};

/// Addresses needed to build and approve one deposit route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeAddresses {
    /// Contract the deposit transaction is sent to
    pub bridge: Address,
    /// `None` for the native coin
    pub l1_token: Option<Address>,
    pub l2_token: Option<Address>,
    /// Contract that pulls the ERC20; `None` for the native coin
    pub spender: Option<Address>,
}

pub struct AddressResolver {
    catalog: Arc<dyn MetadataCatalog>,
    network: String,
    cache: Arc<AddressCache>,
}

impl AddressResolver {
    pub fn new(catalog: Arc<dyn MetadataCatalog>, network: impl Into<String>, cache: Arc<AddressCache>) -> Self {
        Self {
            catalog,
            network: network.into(),
            cache,
        }
    }

    /// Look up a destination chain in the catalog
    pub fn network(&self, chain: ChainSlug, token: TokenSymbol) -> Result<Network> {
        self.catalog.network(&self.network, chain).ok_or_else(|| {
            BridgeError::unsupported(
                token,
                chain,
                format!("chain is not listed for network \"{}\"", self.network),
            )
        })
    }

    /// Resolve every address the variant needs, reading through the cache
    pub fn resolve(&self, variant: BridgeProtocolVariant, token: TokenSymbol) -> Result<BridgeAddresses> {
        let chain = variant.chain();
        if let Some(hit) = self.cache.get(&self.network, chain, token) {
            debug!(network = %self.network, %chain, %token, "Bridge addresses served from cache");
            return Ok(hit);
        }

        let addresses = self.lookup(variant, token)?;
        self.cache.insert(&self.network, chain, token, addresses);
        debug!(
            network = %self.network,
            %chain,
            %token,
            %variant,
            bridge = %addresses.bridge,
            "Resolved bridge addresses"
        );
        Ok(addresses)
    }

    /// Drop the cached route so the next resolve reads the catalog again
    pub fn invalidate(&self, chain: ChainSlug, token: TokenSymbol) {
        self.cache.invalidate(&self.network, chain, token);
    }

    fn lookup(&self, variant: BridgeProtocolVariant, token: TokenSymbol) -> Result<BridgeAddresses> {
        let chain = variant.chain();
        let network = self.network.as_str();

        let bridge = self
            .catalog
            .bridge_address(network, chain, token)
            .ok_or_else(|| BridgeError::unsupported(token, chain, "no bridge contract in catalog"))?;
        let entry = self
            .catalog
            .token(network, chain, token)
            .ok_or_else(|| BridgeError::unsupported(token, chain, "no token entry in catalog"))?;

        if variant.is_native() {
            return Ok(BridgeAddresses {
                bridge,
                l1_token: None,
                l2_token: entry.l2_address,
                spender: None,
            });
        }

        let l1_token = entry
            .l1_address
            .ok_or_else(|| BridgeError::unsupported(token, chain, "no L1 token address in catalog"))?;
        if variant.requires_l2_token() && entry.l2_address.is_none() {
            return Err(BridgeError::unsupported(
                token,
                chain,
                "no L2 token address in catalog",
            ));
        }

        Ok(BridgeAddresses {
            bridge,
            l1_token: Some(l1_token),
            l2_token: entry.l2_address,
            // A missing spender surfaces at approval time, not here
            spender: self.catalog.native_bridge_address(network, chain, token),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{mainnet, ChainCatalog, DepositTarget, NetworkCatalog, StaticCatalog, TokenMetadata};
    use std::collections::BTreeMap;

    fn resolver(catalog: StaticCatalog) -> AddressResolver {
        AddressResolver::new(Arc::new(catalog), "mainnet", Arc::new(AddressCache::new(16, 60)))
    }

    /// Optimism USDC without an L2 address and Gnosis USDT without a spender
    fn incomplete_catalog() -> StaticCatalog {
        let tokens = BTreeMap::from([
            (
                TokenSymbol::Usdc,
                TokenMetadata {
                    name: "USD Coin".into(),
                    decimals: 6,
                    image: String::new(),
                },
            ),
            (
                TokenSymbol::Usdt,
                TokenMetadata {
                    name: "Tether USD".into(),
                    decimals: 6,
                    image: String::new(),
                },
            ),
        ]);
        let optimism = ChainCatalog {
            is_l1: false,
            deposits: BTreeMap::from([(
                TokenSymbol::Usdc,
                DepositTarget {
                    l1_address: Some(mainnet::USDC),
                    l2_address: None,
                    bridge: mainnet::OPTIMISM_STANDARD_BRIDGE,
                    native_bridge: Some(mainnet::OPTIMISM_STANDARD_BRIDGE),
                },
            )]),
        };
        let gnosis = ChainCatalog {
            is_l1: false,
            deposits: BTreeMap::from([(
                TokenSymbol::Usdt,
                DepositTarget {
                    l1_address: Some(mainnet::USDT),
                    l2_address: Some(mainnet::GNOSIS_USDT),
                    bridge: mainnet::OMNIBRIDGE,
                    native_bridge: None,
                },
            )]),
        };
        StaticCatalog::default().with_network(
            "mainnet",
            NetworkCatalog {
                tokens,
                chains: BTreeMap::from([(ChainSlug::Optimism, optimism), (ChainSlug::Gnosis, gnosis)]),
            },
        )
    }

    #[test]
    fn test_resolve_erc20_route() {
        let r = resolver(StaticCatalog::mainnet());
        let addrs = r
            .resolve(BridgeProtocolVariant::PolygonErc20, TokenSymbol::Usdc)
            .unwrap();
        assert_eq!(addrs.bridge, mainnet::POLYGON_ROOT_CHAIN_MANAGER);
        assert_eq!(addrs.l1_token, Some(mainnet::USDC));
        assert_eq!(addrs.spender, Some(mainnet::POLYGON_ERC20_PREDICATE));
    }

    #[test]
    fn test_resolve_native_route_has_no_token_or_spender() {
        let r = resolver(StaticCatalog::mainnet());
        let addrs = r
            .resolve(BridgeProtocolVariant::ArbitrumNative, TokenSymbol::Eth)
            .unwrap();
        assert_eq!(addrs.bridge, mainnet::ARBITRUM_INBOX);
        assert!(addrs.l1_token.is_none());
        assert!(addrs.spender.is_none());
    }

    #[test]
    fn test_resolve_reads_through_cache() {
        let cache = Arc::new(AddressCache::new(16, 60));
        let r = AddressResolver::new(Arc::new(StaticCatalog::mainnet()), "mainnet", cache.clone());

        let first = r
            .resolve(BridgeProtocolVariant::GnosisDai, TokenSymbol::Dai)
            .unwrap();
        assert_eq!(cache.len(), 1);
        let second = r
            .resolve(BridgeProtocolVariant::GnosisDai, TokenSymbol::Dai)
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);

        r.invalidate(ChainSlug::Gnosis, TokenSymbol::Dai);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_missing_l2_token_is_unsupported() {
        let r = resolver(incomplete_catalog());
        let err = r
            .resolve(BridgeProtocolVariant::OptimismErc20, TokenSymbol::Usdc)
            .unwrap_err();
        assert!(matches!(err, BridgeError::UnsupportedCombination { .. }));
    }

    #[test]
    fn test_missing_spender_is_deferred() {
        let r = resolver(incomplete_catalog());
        let addrs = r
            .resolve(BridgeProtocolVariant::GnosisErc20, TokenSymbol::Usdt)
            .unwrap();
        assert!(addrs.spender.is_none());
        assert_eq!(addrs.l1_token, Some(mainnet::USDT));
    }

    #[test]
    fn test_unknown_network_is_unsupported() {
        let r = AddressResolver::new(
            Arc::new(StaticCatalog::mainnet()),
            "goerli",
            Arc::new(AddressCache::default()),
        );
        assert!(matches!(
            r.network(ChainSlug::Gnosis, TokenSymbol::Dai),
            Err(BridgeError::UnsupportedCombination { .. })
        ));
    }
}
