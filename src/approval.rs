//! ERC20 approval policy
//!
//! Native-coin deposits never need an allowance. ERC20 deposits need the
//! spender recorded in the catalog; a missing spender is an error only when
//! an approval operation actually needs it.

use alloy::primitives::{Address, U256};

use crate::error::{BridgeError, Result};
use crate::evm::tokens::approve_tx;
use crate::resolver::BridgeAddresses;
use crate::selector::BridgeProtocolVariant;
use crate::types::{ApprovalRequirement, PopulatedTransaction, TokenSymbol};

/// Whether a deposit through `variant` needs an ERC20 allowance first
pub fn approval_requirement(
    variant: BridgeProtocolVariant,
    token: TokenSymbol,
    addresses: &BridgeAddresses,
) -> Result<ApprovalRequirement> {
    if variant.is_native() {
        return Ok(ApprovalRequirement::None);
    }
    let (spender, l1_token) = erc20_route(variant, token, addresses)?;
    Ok(ApprovalRequirement::Required {
        spender,
        token: l1_token,
    })
}

/// Populate `approve(spender, amount)` on the L1 token
pub fn build_approve_tx(
    variant: BridgeProtocolVariant,
    token: TokenSymbol,
    addresses: &BridgeAddresses,
    amount: U256,
    from: Address,
) -> Result<PopulatedTransaction> {
    if variant.is_native() {
        return Err(BridgeError::ApprovalNotRequired {
            token,
            chain: variant.chain(),
        });
    }
    let (spender, l1_token) = erc20_route(variant, token, addresses)?;
    Ok(approve_tx(l1_token, spender, amount, from))
}

/// (spender, L1 token) for an ERC20 route
pub(crate) fn erc20_route(
    variant: BridgeProtocolVariant,
    token: TokenSymbol,
    addresses: &BridgeAddresses,
) -> Result<(Address, Address)> {
    let chain = variant.chain();
    let spender = addresses
        .spender
        .ok_or(BridgeError::MissingSpender { token, chain })?;
    let l1_token = addresses
        .l1_token
        .ok_or_else(|| BridgeError::unsupported(token, chain, "no L1 token address in catalog"))?;
    Ok((spender, l1_token))
}
