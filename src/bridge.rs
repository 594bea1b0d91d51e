//! Canonical Bridge Facade
//!
//! Public entry point for one (network, token, destination chain) route.
//!
//! Construction is two-phase:
//!
//! 1. [`CanonicalBridge::prepare`] validates the inputs, selects the
//!    [`BridgeProtocolVariant`] and resolves every address. Unsupported
//!    combinations fail here, before any RPC.
//! 2. [`PreparedBridge::connect`] resolves the L1 signer and its address and
//!    returns an immutable [`CanonicalBridge`].

use alloy::primitives::{Address, TxHash, U256};
use std::sync::Arc;
use tracing::{info, warn};

use crate::approval::{self, erc20_route};
use crate::builder::{build_deposit_tx, build_retryable_deposit_tx};
use crate::cache::AddressCache;
use crate::catalog::{MetadataCatalog, StaticCatalog};
use crate::config::{BridgeConfig, RetryableTicketParams};
use crate::error::{BridgeError, Result};
use crate::evm::signer::{EvmSigner, L1Signer, SignerProvider, StaticSignerProvider};
use crate::evm::tokens::get_token_allowance;
use crate::gas;
use crate::resolver::{AddressResolver, BridgeAddresses};
use crate::selector::{select_variant, BridgeProtocolVariant};
use crate::types::{
    ApprovalRequirement, ChainSlug, DepositOutcome, DepositRequest, PopulatedTransaction, TokenSymbol,
};

/// Tunables shared by every bridge built from one configuration
#[derive(Clone)]
pub struct BridgeParams {
    pub retryable: RetryableTicketParams,
    pub cache: Arc<AddressCache>,
}

impl Default for BridgeParams {
    fn default() -> Self {
        Self {
            retryable: RetryableTicketParams::default(),
            cache: Arc::new(AddressCache::default()),
        }
    }
}

impl BridgeParams {
    pub fn from_config(config: &BridgeConfig) -> Self {
        Self {
            retryable: config.retryable,
            cache: Arc::new(AddressCache::from_config(&config.cache)),
        }
    }
}

/// Advisory funding check for an Arbitrum retryable-ticket deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryableFunding {
    /// `estimate_gas * gas_price` for the L1 transaction
    pub l1_fee: U256,
    /// ETH attached to pay for the ticket
    pub ticket_value: U256,
    pub balance: U256,
}

impl RetryableFunding {
    pub fn required(&self) -> U256 {
        self.l1_fee.saturating_add(self.ticket_value)
    }

    pub fn is_sufficient(&self) -> bool {
        self.balance >= self.required()
    }

    pub fn shortfall(&self) -> U256 {
        self.required().saturating_sub(self.balance)
    }
}

/// A validated route that is not yet bound to a signer
#[derive(Debug, Clone)]
pub struct PreparedBridge {
    network: String,
    chain: ChainSlug,
    token: TokenSymbol,
    variant: BridgeProtocolVariant,
    addresses: BridgeAddresses,
    retryable: RetryableTicketParams,
}

impl PreparedBridge {
    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn chain(&self) -> ChainSlug {
        self.chain
    }

    pub fn token(&self) -> TokenSymbol {
        self.token
    }

    pub fn variant(&self) -> BridgeProtocolVariant {
        self.variant
    }

    pub fn addresses(&self) -> &BridgeAddresses {
        &self.addresses
    }

    /// Whether deposits need an ERC20 allowance, and for which spender
    pub fn approval_requirement(&self) -> Result<ApprovalRequirement> {
        approval::approval_requirement(self.variant, self.token, &self.addresses)
    }

    /// Bind the route to the L1 signer
    pub async fn connect(self, signers: &dyn SignerProvider) -> Result<CanonicalBridge> {
        let signer = signers
            .signer_for(ChainSlug::Ethereum)
            .await
            .map_err(|e| BridgeError::upstream("connect", self.token, self.chain, e))?;
        let sender = signer
            .address()
            .await
            .map_err(|e| BridgeError::upstream("connect", self.token, self.chain, e))?;

        info!(
            network = %self.network,
            token = %self.token,
            chain = %self.chain,
            variant = %self.variant,
            sender = %sender,
            "Canonical bridge connected"
        );

        Ok(CanonicalBridge {
            route: self,
            signer,
            sender,
        })
    }
}

/// Deposit adapter for one (network, token, destination chain) route
pub struct CanonicalBridge {
    route: PreparedBridge,
    signer: Arc<dyn L1Signer>,
    sender: Address,
}

impl CanonicalBridge {
    /// Validate a route and resolve its addresses
    pub fn prepare(
        network: &str,
        token: &str,
        chain: &str,
        catalog: Arc<dyn MetadataCatalog>,
        params: BridgeParams,
    ) -> Result<PreparedBridge> {
        if network.trim().is_empty() {
            return Err(BridgeError::Construction("network is required".to_string()));
        }
        if token.trim().is_empty() {
            return Err(BridgeError::Construction("token is required".to_string()));
        }
        if chain.trim().is_empty() {
            return Err(BridgeError::Construction("chain is required".to_string()));
        }

        let token: TokenSymbol = token.parse()?;
        let chain: ChainSlug = chain.parse()?;
        let network = network.trim();

        let resolver = AddressResolver::new(catalog, network, params.cache);
        let destination = resolver.network(chain, token)?;
        let variant = select_variant(&destination, token)?;
        let addresses = resolver.resolve(variant, token)?;

        Ok(PreparedBridge {
            network: network.to_string(),
            chain,
            token,
            variant,
            addresses,
            retryable: params.retryable,
        })
    }

    /// Build and connect a bridge from environment configuration
    ///
    /// Uses the catalog at `BRIDGE_CATALOG_PATH` when set, otherwise the
    /// built-in mainnet table.
    pub async fn from_config(config: &BridgeConfig, token: &str, chain: &str) -> Result<Self> {
        let catalog: Arc<dyn MetadataCatalog> = match &config.catalog_path {
            Some(path) => Arc::new(StaticCatalog::from_json_file(path)?),
            None => Arc::new(StaticCatalog::mainnet()),
        };
        let signer = EvmSigner::from_config(&config.l1)
            .map_err(|e| BridgeError::Construction(e.to_string()))?;
        let signers = StaticSignerProvider::new().with_signer(ChainSlug::Ethereum, Arc::new(signer));

        Self::prepare(
            &config.network,
            token,
            chain,
            catalog,
            BridgeParams::from_config(config),
        )?
        .connect(&signers)
        .await
    }

    pub fn network(&self) -> &str {
        self.route.network()
    }

    pub fn chain(&self) -> ChainSlug {
        self.route.chain
    }

    pub fn token(&self) -> TokenSymbol {
        self.route.token
    }

    pub fn variant(&self) -> BridgeProtocolVariant {
        self.route.variant
    }

    pub fn addresses(&self) -> &BridgeAddresses {
        &self.route.addresses
    }

    /// Address deposits and approvals are sent from
    pub fn sender(&self) -> Address {
        self.sender
    }

    pub fn approval_requirement(&self) -> Result<ApprovalRequirement> {
        self.route.approval_requirement()
    }

    // ========================================================================
    // Approvals
    // ========================================================================

    /// Current allowance from the sender to the bridge spender
    ///
    /// Native-coin routes need no allowance and report `U256::MAX`.
    pub async fn l1_canonical_allowance(&self) -> Result<U256> {
        if self.route.variant.is_native() {
            return Ok(U256::MAX);
        }
        let (spender, l1_token) = erc20_route(self.route.variant, self.route.token, &self.route.addresses)?;
        get_token_allowance(self.signer.as_ref(), l1_token, self.sender, spender)
            .await
            .map_err(|e| self.upstream("l1_canonical_allowance", e))
    }

    pub async fn estimate_approve_tx(&self, amount: U256) -> Result<u64> {
        let tx = self.approve_tx(amount)?;
        gas::estimate_gas(
            self.signer.as_ref(),
            &tx,
            "estimate_approve_tx",
            self.route.token,
            self.route.chain,
        )
        .await
    }

    /// Broadcast an ERC20 `approve(spender, amount)` on the L1 token
    pub async fn approve(&self, amount: U256) -> Result<TxHash> {
        let tx = self.approve_tx(amount)?;
        let to = tx.to;
        let tx_hash = self
            .signer
            .send_transaction(tx)
            .await
            .map_err(|e| self.upstream("approve", e))?;

        info!(
            token = %self.route.token,
            chain = %self.route.chain,
            to = %to,
            amount = %amount,
            tx_hash = %tx_hash,
            "Approval submitted"
        );
        Ok(tx_hash)
    }

    fn approve_tx(&self, amount: U256) -> Result<PopulatedTransaction> {
        approval::build_approve_tx(
            self.route.variant,
            self.route.token,
            &self.route.addresses,
            amount,
            self.sender,
        )
    }

    // ========================================================================
    // Deposits
    // ========================================================================

    /// Build the unsigned deposit transaction; the recipient defaults to the sender
    pub fn populate_deposit_tx(&self, amount: U256, recipient: Option<Address>) -> Result<PopulatedTransaction> {
        let request = DepositRequest::new(self.route.chain, self.route.token, amount, self.sender, recipient)?;
        build_deposit_tx(
            &request,
            self.route.variant,
            &self.route.addresses,
            &self.route.retryable,
        )
    }

    pub async fn estimate_deposit_tx(&self, amount: U256) -> Result<u64> {
        let tx = self.populate_deposit_tx(amount, None)?;
        gas::estimate_gas(
            self.signer.as_ref(),
            &tx,
            "estimate_deposit_tx",
            self.route.token,
            self.route.chain,
        )
        .await
    }

    /// Deposit `amount` into the destination chain
    ///
    /// Arbitrum ERC20 routes return [`DepositOutcome::Populated`]; the caller
    /// signs and sends the `deposit` transaction itself.
    /// Every other route is broadcast and returns [`DepositOutcome::Broadcast`].
    pub async fn deposit(&self, amount: U256, recipient: Option<Address>) -> Result<DepositOutcome> {
        let tx = self.populate_deposit_tx(amount, recipient)?;

        if self.route.variant.is_populate_only() {
            info!(
                token = %self.route.token,
                chain = %self.route.chain,
                variant = %self.route.variant,
                to = %tx.to,
                "Deposit populated for caller broadcast"
            );
            return Ok(DepositOutcome::Populated(tx));
        }

        let to = tx.to;
        let value = tx.value;
        let tx_hash = self
            .signer
            .send_transaction(tx)
            .await
            .map_err(|e| self.upstream("deposit", e))?;

        info!(
            token = %self.route.token,
            chain = %self.route.chain,
            variant = %self.route.variant,
            to = %to,
            amount = %amount,
            value = %value,
            tx_hash = %tx_hash,
            "Deposit submitted"
        );
        Ok(DepositOutcome::Broadcast(tx_hash))
    }

    /// Build the retryable-ticket `outboundTransfer` form of an Arbitrum token deposit
    ///
    /// Opt-in alternative to [`Self::populate_deposit_tx`]; the ticket is
    /// paid from the transaction value. Never broadcast by this adapter.
    pub fn populate_retryable_deposit_tx(
        &self,
        amount: U256,
        recipient: Option<Address>,
    ) -> Result<PopulatedTransaction> {
        let request = DepositRequest::new(self.route.chain, self.route.token, amount, self.sender, recipient)?;
        build_retryable_deposit_tx(
            &request,
            self.route.variant,
            &self.route.addresses,
            &self.route.retryable,
        )
    }

    /// Check that the sender can pay the L1 fee plus the retryable ticket
    ///
    /// Prices the [`Self::populate_retryable_deposit_tx`] form. Advisory
    /// only: a shortfall is logged and reported, never enforced.
    pub async fn retryable_funding(&self, amount: U256) -> Result<RetryableFunding> {
        let tx = self.populate_retryable_deposit_tx(amount, None)?;
        let gas = gas::estimate_gas(
            self.signer.as_ref(),
            &tx,
            "retryable_funding",
            self.route.token,
            self.route.chain,
        )
        .await?;
        let gas_price = self
            .signer
            .gas_price()
            .await
            .map_err(|e| self.upstream("retryable_funding", e))?;
        let balance = self
            .signer
            .balance(self.sender)
            .await
            .map_err(|e| self.upstream("retryable_funding", e))?;

        let report = RetryableFunding {
            l1_fee: U256::from(gas).saturating_mul(U256::from(gas_price)),
            ticket_value: tx.value,
            balance,
        };

        if !report.is_sufficient() {
            warn!(
                token = %self.route.token,
                chain = %self.route.chain,
                sender = %self.sender,
                required = %report.required(),
                balance = %report.balance,
                "Insufficient ETH for L1 fee and retryable ticket"
            );
        }
        Ok(report)
    }

    fn upstream(&self, operation: &'static str, source: eyre::Report) -> BridgeError {
        BridgeError::upstream(operation, self.route.token, self.route.chain, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mainnet;
    use crate::evm::contracts::{
        ArbitrumL1ERC20Bridge, ArbitrumL1GatewayRouter, L1PolygonPlasmaBridgeDepositManager, L1PolygonPosRootChainManager, L1XDaiPoaBridge,
        L1XDaiWETHOmnibridgeRouter,
    };
    use crate::testing::MockSigner;
    use alloy::sol_types::{SolCall, SolValue};

    const SENDER: Address = Address::new([0x5e; 20]);

    fn one_ether() -> U256 {
        U256::from(10u64).pow(U256::from(18u64))
    }

    fn prepare(token: &str, chain: &str) -> Result<PreparedBridge> {
        CanonicalBridge::prepare(
            "mainnet",
            token,
            chain,
            Arc::new(StaticCatalog::mainnet()),
            BridgeParams::default(),
        )
    }

    async fn connect(token: &str, chain: &str, signer: Arc<MockSigner>) -> CanonicalBridge {
        let signers = StaticSignerProvider::new().with_signer(ChainSlug::Ethereum, signer);
        prepare(token, chain).unwrap().connect(&signers).await.unwrap()
    }

    #[test]
    fn test_prepare_rejects_empty_inputs() {
        for (network, token, chain) in [("", "DAI", "gnosis"), ("mainnet", " ", "gnosis"), ("mainnet", "DAI", "")] {
            let err = CanonicalBridge::prepare(
                network,
                token,
                chain,
                Arc::new(StaticCatalog::mainnet()),
                BridgeParams::default(),
            )
            .unwrap_err();
            assert!(matches!(err, BridgeError::Construction(_)));
        }
    }

    #[test]
    fn test_prepare_canonicalizes_symbols() {
        let prepared = prepare("WETH", "xdai").unwrap();
        assert_eq!(prepared.token(), TokenSymbol::Eth);
        assert_eq!(prepared.chain(), ChainSlug::Gnosis);
        assert_eq!(prepared.variant(), BridgeProtocolVariant::GnosisNative);
    }

    #[test]
    fn test_prepare_rejects_l1_destination() {
        let err = prepare("ETH", "ethereum").unwrap_err();
        assert!(matches!(err, BridgeError::UnsupportedCombination { .. }));
    }

    #[tokio::test]
    async fn test_connect_without_l1_signer_is_upstream() {
        let signers = StaticSignerProvider::new();
        let err = prepare("DAI", "gnosis")
            .unwrap()
            .connect(&signers)
            .await
            .err()
            .unwrap();
        assert!(matches!(err, BridgeError::Upstream { operation: "connect", .. }));
    }

    #[tokio::test]
    async fn test_gnosis_dai_deposit_broadcasts() {
        let signer = Arc::new(MockSigner::new(SENDER));
        let bridge = connect("DAI", "gnosis", signer.clone()).await;

        let tx = bridge.populate_deposit_tx(one_ether(), None).unwrap();
        assert_eq!(tx.to, mainnet::XDAI_BRIDGE);
        assert_eq!(tx.gas_limit, Some(500_000));
        assert_eq!(tx.value, U256::ZERO);
        assert_eq!(tx.selector(), Some(L1XDaiPoaBridge::relayTokensCall::SELECTOR));
        let call = L1XDaiPoaBridge::relayTokensCall::abi_decode(&tx.data, true).unwrap();
        assert_eq!(call._receiver, SENDER);

        let outcome = bridge.deposit(one_ether(), None).await.unwrap();
        assert_eq!(outcome, DepositOutcome::Broadcast(TxHash::repeat_byte(0xab)));

        let sent = signer.rpc_calls();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, "send_transaction");
        assert_eq!(sent[0].tx.as_ref(), Some(&tx));
    }

    #[tokio::test]
    async fn test_gnosis_native_deposit_sends_value() {
        let bridge = connect("ETH", "gnosis", Arc::new(MockSigner::new(SENDER))).await;
        let amount = U256::from(5_000u64);
        let tx = bridge.populate_deposit_tx(amount, None).unwrap();
        assert_eq!(tx.to, mainnet::WETH_OMNIBRIDGE_ROUTER);
        assert_eq!(tx.value, amount);
        assert_eq!(tx.gas_limit, Some(500_000));
        assert_eq!(
            tx.selector(),
            Some(L1XDaiWETHOmnibridgeRouter::wrapAndRelayTokensCall::SELECTOR)
        );
    }

    #[tokio::test]
    async fn test_polygon_routes() {
        let matic = connect("MATIC", "polygon", Arc::new(MockSigner::new(SENDER))).await;
        let tx = matic.populate_deposit_tx(U256::from(7u64), None).unwrap();
        assert_eq!(tx.to, mainnet::POLYGON_DEPOSIT_MANAGER);
        assert_eq!(tx.gas_limit, Some(250_000));
        assert_eq!(tx.value, U256::ZERO);
        assert_eq!(
            tx.selector(),
            Some(L1PolygonPlasmaBridgeDepositManager::depositERC20ForUserCall::SELECTOR)
        );

        let eth = connect("ETH", "polygon", Arc::new(MockSigner::new(SENDER))).await;
        let tx = eth.populate_deposit_tx(U256::from(7u64), None).unwrap();
        assert_eq!(tx.to, mainnet::POLYGON_ROOT_CHAIN_MANAGER);
        assert_eq!(tx.gas_limit, None);
        assert_eq!(tx.value, U256::from(7u64));
        assert_eq!(
            tx.selector(),
            Some(L1PolygonPosRootChainManager::depositEtherForCall::SELECTOR)
        );
    }

    #[tokio::test]
    async fn test_populate_is_deterministic_and_honors_recipient() {
        let bridge = connect("USDC", "optimism", Arc::new(MockSigner::new(SENDER))).await;
        let recipient = Address::repeat_byte(0x77);

        let first = bridge.populate_deposit_tx(U256::from(10u64), Some(recipient)).unwrap();
        let second = bridge.populate_deposit_tx(U256::from(10u64), Some(recipient)).unwrap();
        assert_eq!(first, second);

        let defaulted = bridge.populate_deposit_tx(U256::from(10u64), None).unwrap();
        assert_ne!(first.data, defaulted.data);
        assert_eq!(defaulted.from, SENDER);
    }

    #[tokio::test]
    async fn test_zero_amount_rejected_without_rpc() {
        let signer = Arc::new(MockSigner::new(SENDER));
        let bridge = connect("DAI", "gnosis", signer.clone()).await;
        let err = bridge.deposit(U256::ZERO, None).await.unwrap_err();
        assert!(matches!(err, BridgeError::ZeroAmount { .. }));
        assert!(signer.rpc_calls().is_empty());
    }

    #[tokio::test]
    async fn test_arbitrum_erc20_deposit_is_populated() {
        let signer = Arc::new(MockSigner::new(SENDER));
        let bridge = connect("USDC", "arbitrum", signer.clone()).await;

        let outcome = bridge.deposit(U256::from(1_000u64), None).await.unwrap();
        match outcome {
            DepositOutcome::Populated(tx) => {
                assert_eq!(tx.to, mainnet::ARBITRUM_GATEWAY_ROUTER);
                assert_eq!(tx.value, U256::ZERO);
                let call = ArbitrumL1ERC20Bridge::depositCall::abi_decode(&tx.data, true).unwrap();
                assert_eq!(call._l1Token, mainnet::USDC);
                assert_eq!(call._l2Token, mainnet::ARBITRUM_USDC);
                assert_eq!(call._to, SENDER);
            }
            other => panic!("expected populated deposit, got {other:?}"),
        }
        assert!(signer.rpc_calls().is_empty());
    }

    #[tokio::test]
    async fn test_allowance_reads_spender() {
        let signer = Arc::new(MockSigner::new(SENDER));
        signer.set_call_result(U256::from(99u64).abi_encode().into());
        let bridge = connect("USDC", "arbitrum", signer.clone()).await;

        assert_eq!(bridge.l1_canonical_allowance().await.unwrap(), U256::from(99u64));
        let calls = signer.rpc_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tx.as_ref().map(|t| t.to), Some(mainnet::USDC));
    }

    #[tokio::test]
    async fn test_native_allowance_and_approval() {
        let signer = Arc::new(MockSigner::new(SENDER));
        let bridge = connect("ETH", "optimism", signer.clone()).await;

        assert_eq!(bridge.l1_canonical_allowance().await.unwrap(), U256::MAX);
        assert_eq!(bridge.approval_requirement().unwrap(), ApprovalRequirement::None);
        assert!(matches!(
            bridge.approve(U256::from(1u64)).await,
            Err(BridgeError::ApprovalNotRequired { .. })
        ));
        assert!(matches!(
            bridge.estimate_approve_tx(U256::from(1u64)).await,
            Err(BridgeError::ApprovalNotRequired { .. })
        ));
        assert!(signer.rpc_calls().is_empty());
    }

    #[tokio::test]
    async fn test_approve_targets_predicate() {
        let signer = Arc::new(MockSigner::new(SENDER).with_gas(46_000));
        let bridge = connect("DAI", "polygon", signer.clone()).await;

        assert_eq!(bridge.estimate_approve_tx(U256::from(3u64)).await.unwrap(), 46_000);
        bridge.approve(U256::from(3u64)).await.unwrap();

        let calls = signer.rpc_calls();
        assert_eq!(calls.len(), 2);
        let approve = calls[1].tx.as_ref().unwrap();
        assert_eq!(approve.to, mainnet::DAI);
        let decoded = crate::evm::contracts::ERC20::approveCall::abi_decode(&approve.data, true).unwrap();
        assert_eq!(decoded.spender, mainnet::POLYGON_ERC20_PREDICATE);
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let signer = Arc::new(MockSigner::new(SENDER).failing());
        let bridge = connect("ETH", "polygon", signer.clone()).await;
        let err = bridge.estimate_deposit_tx(U256::from(1u64)).await.unwrap_err();
        assert!(matches!(err, BridgeError::Upstream { operation: "estimate_deposit_tx", .. }));
        assert!(!err.is_local());
    }

    #[tokio::test]
    async fn test_retryable_funding_reports_shortfall() {
        let signer = Arc::new(
            MockSigner::new(SENDER)
                .with_gas(100_000)
                .with_gas_price(10)
                .with_balance(U256::from(1u64)),
        );
        let bridge = connect("DAI", "arbitrum", signer.clone()).await;

        let report = bridge.retryable_funding(U256::from(1_000u64)).await.unwrap();
        assert_eq!(report.l1_fee, U256::from(1_000_000u64));
        assert_eq!(report.ticket_value, RetryableTicketParams::default().ticket_value());
        assert!(!report.is_sufficient());
        assert_eq!(report.shortfall(), report.required() - U256::from(1u64));

        // Advisory only
        let outcome = bridge.deposit(U256::from(1_000u64), None).await.unwrap();
        assert!(matches!(outcome, DepositOutcome::Populated(_)));
    }

    #[tokio::test]
    async fn test_retryable_form_is_opt_in() {
        let signer = Arc::new(MockSigner::new(SENDER));
        let bridge = connect("USDC", "arbitrum", signer.clone()).await;

        let retryable = bridge.populate_retryable_deposit_tx(U256::from(5u64), None).unwrap();
        assert_eq!(retryable.value, RetryableTicketParams::default().ticket_value());
        let call = ArbitrumL1GatewayRouter::outboundTransferCall::abi_decode(&retryable.data, true).unwrap();
        assert_eq!(call._token, mainnet::USDC);

        let direct = bridge.populate_deposit_tx(U256::from(5u64), None).unwrap();
        assert_ne!(direct.selector(), retryable.selector());
        assert!(signer.rpc_calls().is_empty());
    }

    #[tokio::test]
    async fn test_retryable_funding_rejects_other_routes() {
        let bridge = connect("ETH", "arbitrum", Arc::new(MockSigner::new(SENDER))).await;
        assert!(matches!(
            bridge.retryable_funding(U256::from(1u64)).await,
            Err(BridgeError::UnsupportedCombination { .. })
        ));
    }
}
