//! Bridge protocol selection
//!
//! Maps a (network, token) pair to exactly one [`BridgeProtocolVariant`].
//! The mapping is pure: chain first, then the token special case.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BridgeError, Result};
use crate::types::{ChainSlug, Network, TokenSymbol};

/// Fixed gas limit for Gnosis bridge calls
pub const GNOSIS_GAS_LIMIT: u64 = 500_000;
/// Fixed gas limit for Optimism gateway calls
pub const OPTIMISM_GAS_LIMIT: u64 = 500_000;
/// Fixed gas limit for Polygon MATIC and ERC20 deposits
pub const POLYGON_GAS_LIMIT: u64 = 250_000;

/// One concrete calldata/contract shape for a canonical deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BridgeProtocolVariant {
    ArbitrumNative,
    ArbitrumDai,
    ArbitrumErc20,
    OptimismNative,
    OptimismDai,
    OptimismErc20,
    PolygonNative,
    PolygonMatic,
    PolygonErc20,
    GnosisDai,
    GnosisNative,
    GnosisErc20,
}

impl BridgeProtocolVariant {
    pub const ALL: [BridgeProtocolVariant; 12] = [
        BridgeProtocolVariant::ArbitrumNative,
        BridgeProtocolVariant::ArbitrumDai,
        BridgeProtocolVariant::ArbitrumErc20,
        BridgeProtocolVariant::OptimismNative,
        BridgeProtocolVariant::OptimismDai,
        BridgeProtocolVariant::OptimismErc20,
        BridgeProtocolVariant::PolygonNative,
        BridgeProtocolVariant::PolygonMatic,
        BridgeProtocolVariant::PolygonErc20,
        BridgeProtocolVariant::GnosisDai,
        BridgeProtocolVariant::GnosisNative,
        BridgeProtocolVariant::GnosisErc20,
    ];

    pub fn chain(&self) -> ChainSlug {
        use BridgeProtocolVariant::*;
        match self {
            ArbitrumNative | ArbitrumDai | ArbitrumErc20 => ChainSlug::Arbitrum,
            OptimismNative | OptimismDai | OptimismErc20 => ChainSlug::Optimism,
            PolygonNative | PolygonMatic | PolygonErc20 => ChainSlug::Polygon,
            GnosisDai | GnosisNative | GnosisErc20 => ChainSlug::Gnosis,
        }
    }

    /// Native-coin variants send the amount as transaction value
    pub fn is_native(&self) -> bool {
        use BridgeProtocolVariant::*;
        matches!(
            self,
            ArbitrumNative | OptimismNative | PolygonNative | GnosisNative
        )
    }

    /// Gas-limit override for bridges whose estimation is unreliable
    pub fn gas_limit_override(&self) -> Option<u64> {
        use BridgeProtocolVariant::*;
        match self {
            GnosisDai | GnosisNative | GnosisErc20 => Some(GNOSIS_GAS_LIMIT),
            OptimismNative | OptimismDai | OptimismErc20 => Some(OPTIMISM_GAS_LIMIT),
            PolygonMatic | PolygonErc20 => Some(POLYGON_GAS_LIMIT),
            PolygonNative | ArbitrumNative | ArbitrumDai | ArbitrumErc20 => None,
        }
    }

    /// Needs the L2 token address to build calldata or to validate the route
    pub fn requires_l2_token(&self) -> bool {
        use BridgeProtocolVariant::*;
        matches!(self, OptimismDai | OptimismErc20 | ArbitrumDai | ArbitrumErc20)
    }

    /// Arbitrum ERC20 deposits are returned populated instead of broadcast
    pub fn is_populate_only(&self) -> bool {
        matches!(
            self,
            BridgeProtocolVariant::ArbitrumDai | BridgeProtocolVariant::ArbitrumErc20
        )
    }
}

impl fmt::Display for BridgeProtocolVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Select the bridge protocol for depositing `token` into `network`
pub fn select_variant(network: &Network, token: TokenSymbol) -> Result<BridgeProtocolVariant> {
    use BridgeProtocolVariant::*;

    let chain = network.slug;
    if network.is_l1 || chain.is_l1() {
        return Err(BridgeError::unsupported(
            token,
            chain,
            "deposits must target a second-layer network",
        ));
    }
    if !network.supports(token) {
        return Err(BridgeError::unsupported(
            token,
            chain,
            "token is not deposited through this network's canonical bridge",
        ));
    }

    let variant = match (chain, token) {
        (ChainSlug::Gnosis, TokenSymbol::Dai) => GnosisDai,
        (ChainSlug::Gnosis, TokenSymbol::Eth) => GnosisNative,
        (ChainSlug::Gnosis, _) => GnosisErc20,

        (ChainSlug::Optimism, TokenSymbol::Eth) => OptimismNative,
        (ChainSlug::Optimism, TokenSymbol::Dai) => OptimismDai,
        (ChainSlug::Optimism, _) => OptimismErc20,

        (ChainSlug::Arbitrum, TokenSymbol::Eth) => ArbitrumNative,
        (ChainSlug::Arbitrum, TokenSymbol::Dai) => ArbitrumDai,
        (ChainSlug::Arbitrum, _) => ArbitrumErc20,

        (ChainSlug::Polygon, TokenSymbol::Matic) => PolygonMatic,
        (ChainSlug::Polygon, TokenSymbol::Eth) => PolygonNative,
        (ChainSlug::Polygon, _) => PolygonErc20,

        (ChainSlug::Ethereum, _) => {
            return Err(BridgeError::unsupported(
                token,
                chain,
                "deposits must target a second-layer network",
            ))
        }
    };
    Ok(variant)
}
