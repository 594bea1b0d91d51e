//! Error types for canonical bridge deposits

use thiserror::Error;

use crate::types::{ChainSlug, TokenSymbol};

/// Boxed transport-level error from a signer or provider
pub type UpstreamError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum BridgeError {
    // ========================================================================
    // Resolution Errors (raised before any RPC)
    // ========================================================================
    #[error("token \"{token}\" on chain \"{chain}\" is unsupported: {reason}")]
    UnsupportedCombination {
        token: TokenSymbol,
        chain: ChainSlug,
        reason: String,
    },

    #[error("no approval spender for token \"{token}\" on chain \"{chain}\"")]
    MissingSpender { token: TokenSymbol, chain: ChainSlug },

    #[error("token \"{token}\" on chain \"{chain}\" is deposited as native value and needs no approval")]
    ApprovalNotRequired { token: TokenSymbol, chain: ChainSlug },

    #[error("deposit amount for token \"{token}\" on chain \"{chain}\" must be greater than zero")]
    ZeroAmount { token: TokenSymbol, chain: ChainSlug },

    // ========================================================================
    // Upstream Errors
    // ========================================================================
    #[error("{operation} failed for token \"{token}\" on chain \"{chain}\": {source}")]
    Upstream {
        operation: &'static str,
        token: TokenSymbol,
        chain: ChainSlug,
        #[source]
        source: UpstreamError,
    },

    // ========================================================================
    // Setup Errors
    // ========================================================================
    #[error("CanonicalBridge construction failed: {0}")]
    Construction(String),

    #[error("invalid metadata catalog: {0}")]
    Catalog(String),
}

impl BridgeError {
    pub(crate) fn unsupported(
        token: TokenSymbol,
        chain: ChainSlug,
        reason: impl Into<String>,
    ) -> Self {
        BridgeError::UnsupportedCombination {
            token,
            chain,
            reason: reason.into(),
        }
    }

    pub(crate) fn upstream(
        operation: &'static str,
        token: TokenSymbol,
        chain: ChainSlug,
        source: eyre::Report,
    ) -> Self {
        BridgeError::Upstream {
            operation,
            token,
            chain,
            source: source.into(),
        }
    }

    /// Whether the error happened before anything was sent to a node
    pub fn is_local(&self) -> bool {
        !matches!(self, BridgeError::Upstream { .. })
    }
}

pub type Result<T, E = BridgeError> = std::result::Result<T, E>;
