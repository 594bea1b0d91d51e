//! Recording signer for unit tests

use std::sync::Mutex;

use alloy::primitives::{Address, Bytes, TxHash, U256};
use async_trait::async_trait;
use eyre::{eyre, Result};

use crate::evm::signer::L1Signer;
use crate::types::PopulatedTransaction;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub tx: Option<PopulatedTransaction>,
}

/// In-memory [`L1Signer`] that records every invocation
pub struct MockSigner {
    address: Address,
    gas: u64,
    gas_price: u128,
    balance: U256,
    fail: bool,
    call_result: Mutex<Bytes>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockSigner {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            gas: 21_000,
            gas_price: 1_000_000_000,
            balance: U256::from(10u64).pow(U256::from(18u64)),
            fail: false,
            call_result: Mutex::new(Bytes::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_gas(mut self, gas: u64) -> Self {
        self.gas = gas;
        self
    }

    pub fn with_balance(mut self, balance: U256) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_gas_price(mut self, gas_price: u128) -> Self {
        self.gas_price = gas_price;
        self
    }

    /// Every RPC method returns an error
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn set_call_result(&self, out: Bytes) {
        *self.call_result.lock().unwrap() = out;
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls excluding `address`, which is resolved once at connect
    pub fn rpc_calls(&self) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.method != "address")
            .collect()
    }

    fn record(&self, method: &'static str, tx: Option<&PopulatedTransaction>) -> Result<()> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            tx: tx.cloned(),
        });
        if self.fail {
            return Err(eyre!("mock {} failure", method));
        }
        Ok(())
    }
}

#[async_trait]
impl L1Signer for MockSigner {
    async fn address(&self) -> Result<Address> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: "address",
            tx: None,
        });
        Ok(self.address)
    }

    async fn estimate_gas(&self, tx: &PopulatedTransaction) -> Result<u64> {
        self.record("estimate_gas", Some(tx))?;
        Ok(self.gas)
    }

    async fn send_transaction(&self, tx: PopulatedTransaction) -> Result<TxHash> {
        self.record("send_transaction", Some(&tx))?;
        Ok(TxHash::repeat_byte(0xab))
    }

    async fn call(&self, tx: &PopulatedTransaction) -> Result<Bytes> {
        self.record("call", Some(tx))?;
        Ok(self.call_result.lock().unwrap().clone())
    }

    async fn balance(&self, _address: Address) -> Result<U256> {
        self.record("balance", None)?;
        Ok(self.balance)
    }

    async fn gas_price(&self) -> Result<u128> {
        self.record("gas_price", None)?;
        Ok(self.gas_price)
    }
}
