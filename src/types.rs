//! Common types for canonical bridge deposits
//!
//! Chains, token symbols, networks, deposit requests and the populated
//! transaction handed to a signer.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash, U256},
    rpc::types::TransactionRequest,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BridgeError;

// ============================================================================
// Chains
// ============================================================================

/// Chain slugs known to the canonical bridge adapter
///
/// `Ethereum` is the base settlement chain; every other slug is a
/// second-layer network with its own canonical bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainSlug {
    Ethereum,
    Gnosis,
    Optimism,
    Arbitrum,
    Polygon,
}

impl ChainSlug {
    pub const ALL: [ChainSlug; 5] = [
        ChainSlug::Ethereum,
        ChainSlug::Gnosis,
        ChainSlug::Optimism,
        ChainSlug::Arbitrum,
        ChainSlug::Polygon,
    ];

    /// Get the slug as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainSlug::Ethereum => "ethereum",
            ChainSlug::Gnosis => "gnosis",
            ChainSlug::Optimism => "optimism",
            ChainSlug::Arbitrum => "arbitrum",
            ChainSlug::Polygon => "polygon",
        }
    }

    pub fn is_l1(&self) -> bool {
        matches!(self, ChainSlug::Ethereum)
    }
}

impl fmt::Display for ChainSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainSlug {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ethereum" | "mainnet" => Ok(ChainSlug::Ethereum),
            "gnosis" | "xdai" => Ok(ChainSlug::Gnosis),
            "optimism" => Ok(ChainSlug::Optimism),
            "arbitrum" => Ok(ChainSlug::Arbitrum),
            "polygon" => Ok(ChainSlug::Polygon),
            other => Err(BridgeError::Construction(format!("unknown chain \"{}\"", other))),
        }
    }
}

// ============================================================================
// Tokens
// ============================================================================

/// Canonical token symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenSymbol {
    Eth,
    Matic,
    Dai,
    Usdc,
    Usdt,
    Wbtc,
    Frax,
}

impl TokenSymbol {
    pub const ALL: [TokenSymbol; 7] = [
        TokenSymbol::Eth,
        TokenSymbol::Matic,
        TokenSymbol::Dai,
        TokenSymbol::Usdc,
        TokenSymbol::Usdt,
        TokenSymbol::Wbtc,
        TokenSymbol::Frax,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenSymbol::Eth => "ETH",
            TokenSymbol::Matic => "MATIC",
            TokenSymbol::Dai => "DAI",
            TokenSymbol::Usdc => "USDC",
            TokenSymbol::Usdt => "USDT",
            TokenSymbol::Wbtc => "WBTC",
            TokenSymbol::Frax => "FRAX",
        }
    }

    /// ETH is the only coin sent as transaction value on L1
    pub fn is_native(&self) -> bool {
        matches!(self, TokenSymbol::Eth)
    }

    /// Resolve a possibly-wrapped symbol to its canonical form
    ///
    /// Strips the bridge prefixes `h`, `W` and `X` (in that order), so
    /// `hETH`, `WETH`, `XDAI` and `WMATIC` map to `ETH`, `ETH`, `DAI` and
    /// `MATIC`.
    pub fn canonical(symbol: &str) -> Option<Self> {
        let mut rest = symbol.trim();
        if let Some(stripped) = exact_symbol(rest) {
            return Some(stripped);
        }
        for prefix in ["h", "W", "X"] {
            if let Some(stripped) = rest.strip_prefix(prefix) {
                rest = stripped;
                if let Some(token) = exact_symbol(rest) {
                    return Some(token);
                }
            }
        }
        None
    }
}

fn exact_symbol(symbol: &str) -> Option<TokenSymbol> {
    TokenSymbol::ALL.into_iter().find(|t| t.as_str() == symbol)
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenSymbol {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenSymbol::canonical(s)
            .ok_or_else(|| BridgeError::Construction(format!("unknown token \"{}\"", s)))
    }
}

// ============================================================================
// Network
// ============================================================================

/// A chain as described by the metadata catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub slug: ChainSlug,
    pub is_l1: bool,
    /// Tokens that can be deposited into this network's canonical bridge
    pub supported_tokens: Vec<TokenSymbol>,
}

impl Network {
    pub fn supports(&self, token: TokenSymbol) -> bool {
        self.supported_tokens.contains(&token)
    }
}

// ============================================================================
// Requests and transactions
// ============================================================================

/// A single deposit into a canonical bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositRequest {
    pub chain: ChainSlug,
    pub token: TokenSymbol,
    pub amount: U256,
    pub recipient: Address,
    pub sender: Address,
}

impl DepositRequest {
    /// Build a request, defaulting the recipient to the sender
    ///
    /// Rejects a zero amount.
    pub fn new(
        chain: ChainSlug,
        token: TokenSymbol,
        amount: U256,
        sender: Address,
        recipient: Option<Address>,
    ) -> Result<Self, BridgeError> {
        if amount.is_zero() {
            return Err(BridgeError::ZeroAmount { token, chain });
        }
        Ok(Self {
            chain,
            token,
            amount,
            recipient: recipient.unwrap_or(sender),
            sender,
        })
    }
}

/// Unsigned transaction descriptor ready for an external signer
///
/// Carries no nonce, fee fields or signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulatedTransaction {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
    pub value: U256,
    /// Explicit gas limit for bridges whose estimation is unreliable
    pub gas_limit: Option<u64>,
}

impl PopulatedTransaction {
    /// First four bytes of the calldata
    pub fn selector(&self) -> Option<[u8; 4]> {
        self.data.get(..4).map(|s| [s[0], s[1], s[2], s[3]])
    }
}

impl From<&PopulatedTransaction> for TransactionRequest {
    fn from(tx: &PopulatedTransaction) -> Self {
        let mut request = TransactionRequest::default()
            .with_from(tx.from)
            .with_to(tx.to)
            .with_input(tx.data.clone())
            .with_value(tx.value);
        if let Some(gas) = tx.gas_limit {
            request = request.with_gas_limit(gas);
        }
        request
    }
}

impl From<PopulatedTransaction> for TransactionRequest {
    fn from(tx: PopulatedTransaction) -> Self {
        (&tx).into()
    }
}

/// ERC20 approval needed before a deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalRequirement {
    /// Native coin deposits send value directly
    None,
    Required { spender: Address, token: Address },
}

impl ApprovalRequirement {
    pub fn spender(&self) -> Option<Address> {
        match self {
            ApprovalRequirement::None => None,
            ApprovalRequirement::Required { spender, .. } => Some(*spender),
        }
    }
}

/// Result of [`crate::bridge::CanonicalBridge::deposit`]
///
/// Arbitrum ERC20 deposits are handed back populated for the caller to
/// sign and send. Every other variant is signed and broadcast by the
/// connected signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepositOutcome {
    Broadcast(TxHash),
    Populated(PopulatedTransaction),
}
