//! Canonical bridge contract ABI definitions
//!
//! Uses alloy's sol! macro to generate call types for every L1 bridge
//! contract a deposit can target. Only calldata encoding is needed here;
//! sending goes through [`crate::evm::signer::L1Signer`].
//!
//! One contract block per deployed bridge keeps overloaded names (Gnosis
//! `relayTokens`, Optimism gateways) in separate namespaces.

#![allow(clippy::too_many_arguments)]

use alloy::sol;

sol! {
    // ========================================================================
    // Gnosis
    // ========================================================================

    /// xDai bridge (DAI <-> xDAI)
    contract L1XDaiPoaBridge {
        function relayTokens(address _receiver, uint256 _amount) external;
    }

    /// WETH Omnibridge router: wraps ETH and relays it through the Omnibridge
    contract L1XDaiWETHOmnibridgeRouter {
        function wrapAndRelayTokens(address _receiver, bytes _data) external payable;
    }

    /// Foreign Omnibridge for arbitrary ERC20s
    contract L1XDaiForeignOmniBridge {
        function relayTokens(address token, address _receiver, uint256 _value) external;
    }

    // ========================================================================
    // Optimism
    // ========================================================================

    /// L1StandardBridge (also the shape of the L1 DAI token bridge)
    contract L1OptimismGateway {
        function depositETHTo(address _to, uint32 _l2Gas, bytes _data) external payable;

        function depositERC20To(
            address _l1Token,
            address _l2Token,
            address _to,
            uint256 _amount,
            uint32 _l2Gas,
            bytes _data
        ) external;
    }

    // ========================================================================
    // Arbitrum
    // ========================================================================

    /// Delayed inbox, used for ETH deposits
    contract ArbitrumInbox {
        function depositEth(uint256 maxSubmissionCost) external payable returns (uint256);
    }

    /// L1 ERC20 bridge entry used for token deposits
    contract ArbitrumL1ERC20Bridge {
        function deposit(address _l1Token, address _l2Token, address _to, uint256 _amount) external;
    }

    /// Gateway router / DAI gateway outbound transfer (creates a retryable ticket)
    contract ArbitrumL1GatewayRouter {
        function outboundTransfer(
            address _token,
            address _to,
            uint256 _amount,
            uint256 _maxGas,
            uint256 _gasPriceBid,
            bytes _data
        ) external payable returns (bytes memory);
    }

    // ========================================================================
    // Polygon
    // ========================================================================

    /// Plasma DepositManager (MATIC)
    contract L1PolygonPlasmaBridgeDepositManager {
        function depositERC20ForUser(address _token, address _user, uint256 _amount) external;
    }

    /// PoS RootChainManager (ETH and ERC20s)
    contract L1PolygonPosRootChainManager {
        function depositEtherFor(address user) external payable;

        function depositFor(address user, address rootToken, bytes depositData) external;
    }

    // ========================================================================
    // ERC20 Interface for approvals and allowance reads
    // ========================================================================

    contract ERC20 {
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolCall;

    #[test]
    fn test_signatures() {
        assert_eq!(
            L1XDaiPoaBridge::relayTokensCall::SIGNATURE,
            "relayTokens(address,uint256)"
        );
        assert_eq!(
            L1XDaiForeignOmniBridge::relayTokensCall::SIGNATURE,
            "relayTokens(address,address,uint256)"
        );
        assert_eq!(
            L1XDaiWETHOmnibridgeRouter::wrapAndRelayTokensCall::SIGNATURE,
            "wrapAndRelayTokens(address,bytes)"
        );
        assert_eq!(
            L1OptimismGateway::depositERC20ToCall::SIGNATURE,
            "depositERC20To(address,address,address,uint256,uint32,bytes)"
        );
        assert_eq!(
            L1PolygonPosRootChainManager::depositForCall::SIGNATURE,
            "depositFor(address,address,bytes)"
        );
        assert_eq!(
            ArbitrumL1ERC20Bridge::depositCall::SIGNATURE,
            "deposit(address,address,address,uint256)"
        );
        assert_eq!(ERC20::approveCall::SIGNATURE, "approve(address,uint256)");
    }

    #[test]
    fn test_known_selectors() {
        // ERC20 approve / allowance selectors are fixed by the standard
        assert_eq!(ERC20::approveCall::SELECTOR, [0x09, 0x5e, 0xa7, 0xb3]);
        assert_eq!(ERC20::allowanceCall::SELECTOR, [0xdd, 0x62, 0xed, 0x3e]);
        assert_eq!(
            ArbitrumL1ERC20Bridge::depositCall::SELECTOR,
            [0x02, 0x84, 0xc3, 0xf5]
        );
    }
}
