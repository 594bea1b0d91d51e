//! ERC20 Token Helpers
//!
//! Approve calldata and allowance reads routed through an [`L1Signer`].

use crate::evm::contracts::ERC20;
use crate::evm::signer::L1Signer;
use crate::types::PopulatedTransaction;
use alloy::{
    primitives::{Address, U256},
    sol_types::SolCall,
};
use eyre::{eyre, Result};

/// Populate an ERC20 `approve(spender, amount)` transaction
pub fn approve_tx(token: Address, spender: Address, amount: U256, from: Address) -> PopulatedTransaction {
    let data = ERC20::approveCall { spender, amount }.abi_encode();
    PopulatedTransaction {
        from,
        to: token,
        data: data.into(),
        value: U256::ZERO,
        gas_limit: None,
    }
}

/// Get the ERC20 token allowance
pub async fn get_token_allowance(
    signer: &dyn L1Signer,
    token_address: Address,
    owner: Address,
    spender: Address,
) -> Result<U256> {
    let call = PopulatedTransaction {
        from: owner,
        to: token_address,
        data: ERC20::allowanceCall { owner, spender }.abi_encode().into(),
        value: U256::ZERO,
        gas_limit: None,
    };
    let out = signer.call(&call).await?;
    let allowance = ERC20::allowanceCall::abi_decode_returns(&out, true)
        .map_err(|e| eyre!("Failed to decode allowance: {}", e))?;
    Ok(allowance._0)
}
