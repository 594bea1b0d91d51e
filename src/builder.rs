//! Deposit transaction builder
//!
//! Turns a [`DepositRequest`] plus resolved addresses into the unsigned
//! transaction for the selected [`BridgeProtocolVariant`]. Building never
//! touches the network.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::{SolCall, SolValue};
use tracing::debug;

use crate::config::RetryableTicketParams;
use crate::error::{BridgeError, Result};
use crate::evm::contracts::{
    ArbitrumInbox, ArbitrumL1ERC20Bridge, ArbitrumL1GatewayRouter, L1OptimismGateway, L1PolygonPlasmaBridgeDepositManager,
    L1PolygonPosRootChainManager, L1XDaiForeignOmniBridge, L1XDaiPoaBridge, L1XDaiWETHOmnibridgeRouter,
};
use crate::resolver::BridgeAddresses;
use crate::selector::BridgeProtocolVariant;
use crate::types::{DepositRequest, PopulatedTransaction};

/// Gas forwarded to the L2 leg of an Optimism deposit
pub const OPTIMISM_L2_GAS: u32 = 1_920_000;

/// Build the deposit transaction for `variant`
pub fn build_deposit_tx(
    request: &DepositRequest,
    variant: BridgeProtocolVariant,
    addresses: &BridgeAddresses,
    retryable: &RetryableTicketParams,
) -> Result<PopulatedTransaction> {
    use BridgeProtocolVariant::*;

    if variant.chain() != request.chain {
        return Err(BridgeError::unsupported(
            request.token,
            request.chain,
            format!("request does not match the {} route", variant),
        ));
    }
    if request.amount.is_zero() {
        return Err(BridgeError::ZeroAmount {
            token: request.token,
            chain: request.chain,
        });
    }

    let amount = request.amount;
    let recipient = request.recipient;

    let (data, value): (Vec<u8>, U256) = match variant {
        GnosisDai => (
            L1XDaiPoaBridge::relayTokensCall {
                _receiver: recipient,
                _amount: amount,
            }
            .abi_encode(),
            U256::ZERO,
        ),
        GnosisNative => (
            L1XDaiWETHOmnibridgeRouter::wrapAndRelayTokensCall {
                _receiver: recipient,
                _data: amount.abi_encode().into(),
            }
            .abi_encode(),
            amount,
        ),
        GnosisErc20 => (
            L1XDaiForeignOmniBridge::relayTokensCall {
                token: l1_token(request, addresses)?,
                _receiver: recipient,
                _value: amount,
            }
            .abi_encode(),
            U256::ZERO,
        ),

        OptimismNative => (
            L1OptimismGateway::depositETHToCall {
                _to: recipient,
                _l2Gas: OPTIMISM_L2_GAS,
                _data: Bytes::new(),
            }
            .abi_encode(),
            amount,
        ),
        OptimismDai | OptimismErc20 => (
            L1OptimismGateway::depositERC20ToCall {
                _l1Token: l1_token(request, addresses)?,
                _l2Token: l2_token(request, addresses)?,
                _to: recipient,
                _amount: amount,
                _l2Gas: OPTIMISM_L2_GAS,
                _data: amount.abi_encode().into(),
            }
            .abi_encode(),
            U256::ZERO,
        ),

        ArbitrumNative => (
            ArbitrumInbox::depositEthCall {
                maxSubmissionCost: retryable.max_submission_cost,
            }
            .abi_encode(),
            amount,
        ),
        ArbitrumDai | ArbitrumErc20 => (
            ArbitrumL1ERC20Bridge::depositCall {
                _l1Token: l1_token(request, addresses)?,
                _l2Token: l2_token(request, addresses)?,
                _to: recipient,
                _amount: amount,
            }
            .abi_encode(),
            U256::ZERO,
        ),

        PolygonMatic => (
            L1PolygonPlasmaBridgeDepositManager::depositERC20ForUserCall {
                _token: l1_token(request, addresses)?,
                _user: recipient,
                _amount: amount,
            }
            .abi_encode(),
            U256::ZERO,
        ),
        PolygonNative => (
            L1PolygonPosRootChainManager::depositEtherForCall { user: recipient }.abi_encode(),
            amount,
        ),
        PolygonErc20 => (
            L1PolygonPosRootChainManager::depositForCall {
                user: recipient,
                rootToken: l1_token(request, addresses)?,
                depositData: amount.abi_encode().into(),
            }
            .abi_encode(),
            U256::ZERO,
        ),
    };

    let tx = PopulatedTransaction {
        from: request.sender,
        to: addresses.bridge,
        data: data.into(),
        value,
        gas_limit: variant.gas_limit_override(),
    };

    debug!(
        %variant,
        token = %request.token,
        chain = %request.chain,
        to = %tx.to,
        value = %tx.value,
        gas_limit = ?tx.gas_limit,
        "Built deposit transaction"
    );

    Ok(tx)
}

/// Build the retryable-ticket form of an Arbitrum token deposit
///
/// `outboundTransfer` on the gateway router (or DAI gateway), paying for the
/// L2 ticket from `value`. Opt-in alternative to the `deposit` call that
/// [`build_deposit_tx`] produces for the same routes.
pub fn build_retryable_deposit_tx(
    request: &DepositRequest,
    variant: BridgeProtocolVariant,
    addresses: &BridgeAddresses,
    retryable: &RetryableTicketParams,
) -> Result<PopulatedTransaction> {
    if !variant.is_populate_only() || variant.chain() != request.chain {
        return Err(BridgeError::unsupported(
            request.token,
            request.chain,
            "retryable tickets only fund Arbitrum token deposits",
        ));
    }
    if request.amount.is_zero() {
        return Err(BridgeError::ZeroAmount {
            token: request.token,
            chain: request.chain,
        });
    }

    let extra = (retryable.max_submission_cost, Bytes::new()).abi_encode_params();
    let data = ArbitrumL1GatewayRouter::outboundTransferCall {
        _token: l1_token(request, addresses)?,
        _to: request.recipient,
        _amount: request.amount,
        _maxGas: retryable.max_gas,
        _gasPriceBid: retryable.gas_price_bid,
        _data: extra.into(),
    }
    .abi_encode();

    let tx = PopulatedTransaction {
        from: request.sender,
        to: addresses.bridge,
        data: data.into(),
        value: retryable.ticket_value(),
        gas_limit: None,
    };

    debug!(
        %variant,
        token = %request.token,
        to = %tx.to,
        value = %tx.value,
        "Built retryable deposit transaction"
    );

    Ok(tx)
}

fn l1_token(request: &DepositRequest, addresses: &BridgeAddresses) -> Result<Address> {
    addresses.l1_token.ok_or_else(|| {
        BridgeError::unsupported(request.token, request.chain, "no L1 token address in catalog")
    })
}

fn l2_token(request: &DepositRequest, addresses: &BridgeAddresses) -> Result<Address> {
    addresses.l2_token.ok_or_else(|| {
        BridgeError::unsupported(request.token, request.chain, "no L2 token address in catalog")
    })
}
