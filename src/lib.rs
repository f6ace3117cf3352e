//! LockRedeem Bindings: typed clients for the LockRedeem bridge contracts
//!
//! This crate binds every deployed generation of the LockRedeem contract family
//! and the tokens they move:
//!
//! - **Contracts** - `sol!` bindings with ABI, creation bytecode and selector tables
//! - **Artifacts** - registry of bound contracts for dynamic lookup by name
//! - **Selectors** - keccak helpers for function selectors and event topics
//! - **EVM Module** - RPC client, generic bound contract, event iterator, log watcher
//! - **Calldata** - transaction-level helpers for lock and redeem flows
//! - **Config** - environment-driven configuration for the `lockredeem` tool
//!
//! ## Usage
//!
//! ```ignore
//! use lockredeem_bindings::contracts::lock_redeem_v2::LockRedeemV2;
//!
//! let bridge = LockRedeemV2::new(address, provider);
//! let validators = bridge.numValidators().call().await?;
//! ```

pub mod artifacts;
pub mod calldata;
pub mod config;
pub mod contracts;
pub mod error;
pub mod evm;
pub mod redact;
pub mod selectors;

pub use artifacts::ContractKind;
pub use error::BindingError;
pub use evm::{
    subscription, BoundContract, CallOpts, DecodedLog, EventIterator, EvmClient,
    EvmClientConfig, LogDecoder, LogFeed, LogWatcher, TransactOpts, Typed, WatcherConfig,
};
pub use selectors::{event_topic, function_selector, keccak256};
