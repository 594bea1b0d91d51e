//! EVM Chain Support Module
//!
//! ## Submodules
//!
//! - `contracts` - Canonical bridge ABI bindings using alloy sol! macro
//! - `signer` - `L1Signer` / `SignerProvider` seams and the alloy-backed `EvmSigner`
//! - `tokens` - ERC20 approve calldata and allowance reads

pub mod contracts;
pub mod signer;
pub mod tokens;

pub use signer::{EvmSigner, L1Signer, SignerProvider, StaticSignerProvider};
