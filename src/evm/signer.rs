//! L1 Signer Interface
//!
//! The adapter never talks to a node directly. Everything that needs the
//! network (gas estimation, reads, broadcast) goes through [`L1Signer`], and
//! signers are looked up per chain through [`SignerProvider`].
//!
//! [`EvmSigner`] is the alloy-backed implementation: an HTTP provider with a
//! local private-key wallet and the recommended nonce/gas/chain-id fillers.

use alloy::{
    network::EthereumWallet,
    primitives::{Address, Bytes, TxHash, U256},
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::http::{Client, Http},
};
use async_trait::async_trait;
use eyre::{eyre, Result, WrapErr};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::L1Config;
use crate::types::{ChainSlug, PopulatedTransaction};

/// Signing and RPC capabilities bound to one chain
#[async_trait]
pub trait L1Signer: Send + Sync {
    /// Address transactions are sent from
    async fn address(&self) -> Result<Address>;

    /// Estimate gas for a populated transaction
    async fn estimate_gas(&self, tx: &PopulatedTransaction) -> Result<u64>;

    /// Sign and broadcast; returns once the node accepted the transaction
    async fn send_transaction(&self, tx: PopulatedTransaction) -> Result<TxHash>;

    /// `eth_call` against latest state
    async fn call(&self, tx: &PopulatedTransaction) -> Result<Bytes>;

    /// Native balance of an address
    async fn balance(&self, address: Address) -> Result<U256>;

    /// Current gas price in wei
    async fn gas_price(&self) -> Result<u128>;
}

/// Resolves the signer bound to a chain
#[async_trait]
pub trait SignerProvider: Send + Sync {
    async fn signer_for(&self, chain: ChainSlug) -> Result<Arc<dyn L1Signer>>;
}

/// Fixed chain -> signer map
#[derive(Default, Clone)]
pub struct StaticSignerProvider {
    signers: HashMap<ChainSlug, Arc<dyn L1Signer>>,
}

impl StaticSignerProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_signer(mut self, chain: ChainSlug, signer: Arc<dyn L1Signer>) -> Self {
        self.signers.insert(chain, signer);
        self
    }
}

#[async_trait]
impl SignerProvider for StaticSignerProvider {
    async fn signer_for(&self, chain: ChainSlug) -> Result<Arc<dyn L1Signer>> {
        self.signers
            .get(&chain)
            .cloned()
            .ok_or_else(|| eyre!("No signer configured for chain {}", chain))
    }
}

/// EVM transaction signer over an alloy provider
pub struct EvmSigner<P> {
    provider: P,
    address: Address,
    chain_id: u64,
}

impl EvmSigner<()> {
    /// Create an HTTP signer from the L1 configuration
    pub fn from_config(config: &L1Config) -> Result<EvmSigner<impl Provider<Http<Client>>>> {
        let signer: PrivateKeySigner = config
            .private_key
            .parse()
            .map_err(|e| eyre!("Invalid private key: {}", e))?;

        let address = signer.address();
        let wallet = EthereumWallet::from(signer);

        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(wallet)
            .on_http(
                config
                    .rpc_url
                    .parse()
                    .map_err(|e| eyre!("Invalid RPC URL: {}", e))?,
            );

        info!(
            address = %address,
            chain_id = config.chain_id,
            "EVM signer initialized"
        );

        Ok(EvmSigner {
            provider,
            address,
            chain_id: config.chain_id,
        })
    }
}

impl<P> EvmSigner<P> {
    /// Wrap an existing provider that signs for `address`
    pub fn with_provider(provider: P, address: Address, chain_id: u64) -> Self {
        Self {
            provider,
            address,
            chain_id,
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }
}

#[async_trait]
impl<P> L1Signer for EvmSigner<P>
where
    P: Provider<Http<Client>> + 'static,
{
    async fn address(&self) -> Result<Address> {
        Ok(self.address)
    }

    async fn estimate_gas(&self, tx: &PopulatedTransaction) -> Result<u64> {
        let request: TransactionRequest = tx.into();
        let gas = self
            .provider
            .estimate_gas(&request)
            .await
            .wrap_err("Failed to estimate gas")?;
        debug!(to = %tx.to, gas = gas, "Estimated gas");
        Ok(gas)
    }

    async fn send_transaction(&self, tx: PopulatedTransaction) -> Result<TxHash> {
        let request: TransactionRequest = (&tx).into();
        let pending = self
            .provider
            .send_transaction(request)
            .await
            .wrap_err("Failed to send transaction")?;
        let hash = *pending.tx_hash();
        info!(tx_hash = %hash, to = %tx.to, "Transaction broadcast");
        Ok(hash)
    }

    async fn call(&self, tx: &PopulatedTransaction) -> Result<Bytes> {
        let request: TransactionRequest = tx.into();
        let out = self
            .provider
            .call(&request)
            .await
            .wrap_err("eth_call failed")?;
        Ok(out)
    }

    async fn balance(&self, address: Address) -> Result<U256> {
        let balance = self
            .provider
            .get_balance(address)
            .await
            .wrap_err("Failed to get balance")?;
        Ok(balance)
    }

    async fn gas_price(&self) -> Result<u128> {
        let price = self
            .provider
            .get_gas_price()
            .await
            .wrap_err("Failed to get gas price")?;
        Ok(price)
    }
}
