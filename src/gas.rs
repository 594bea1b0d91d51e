//! Gas estimation pass-through

use tracing::debug;

use crate::error::{BridgeError, Result};
use crate::evm::signer::L1Signer;
use crate::types::{ChainSlug, PopulatedTransaction, TokenSymbol};

/// Ask the signer's node for a gas estimate
///
/// Failures are reported as-is under `operation`; nothing is retried.
pub async fn estimate_gas(
    signer: &dyn L1Signer,
    tx: &PopulatedTransaction,
    operation: &'static str,
    token: TokenSymbol,
    chain: ChainSlug,
) -> Result<u64> {
    let gas = signer
        .estimate_gas(tx)
        .await
        .map_err(|e| BridgeError::upstream(operation, token, chain, e))?;
    debug!(operation, %token, %chain, to = %tx.to, gas, "Estimated gas");
    Ok(gas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSigner;
    use alloy::primitives::{Address, U256};

    fn tx() -> PopulatedTransaction {
        PopulatedTransaction {
            from: Address::repeat_byte(0x01),
            to: Address::repeat_byte(0x02),
            data: Default::default(),
            value: U256::ZERO,
            gas_limit: None,
        }
    }

    #[tokio::test]
    async fn test_passes_through_estimate() {
        let signer = MockSigner::new(Address::repeat_byte(0x01)).with_gas(123_456);
        let gas = estimate_gas(&signer, &tx(), "estimate_deposit_tx", TokenSymbol::Eth, ChainSlug::Polygon)
            .await
            .unwrap();
        assert_eq!(gas, 123_456);

        let calls = signer.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tx.as_ref(), Some(&tx()));
    }

    #[tokio::test]
    async fn test_failure_is_upstream() {
        let signer = MockSigner::new(Address::repeat_byte(0x01)).failing();
        let err = estimate_gas(&signer, &tx(), "estimate_approve_tx", TokenSymbol::Dai, ChainSlug::Gnosis)
            .await
            .unwrap_err();
        match err {
            BridgeError::Upstream { operation, token, chain, .. } => {
                assert_eq!(operation, "estimate_approve_tx");
                assert_eq!(token, TokenSymbol::Dai);
                assert_eq!(chain, ChainSlug::Gnosis);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
