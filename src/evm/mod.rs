//! EVM Chain Support Module
//!
//! Runtime plumbing shared by every binding in [`crate::contracts`].
//!
//! ## Submodules
//!
//! - `client` - RPC client wrapper, call and transact options
//! - `binding` - ABI-driven bound contract (call, transact, deploy, filter)
//! - `iterator` - generic event iterator fed by a log subscription
//! - `watcher` - polling producers for historical and live logs
//! - `events` - decoded log records and the cross-generation bridge event

pub mod binding;
pub mod client;
pub mod events;
pub mod iterator;
pub mod watcher;

// Re-export commonly used items
pub use binding::{coerce_args, deploy, deploy_code, deploy_kind, BoundContract};
pub use client::{CallOpts, EvmClient, EvmClientConfig, TransactOpts};
pub use events::{BridgeEvent, BridgeEvents, DecodedLog};
pub use iterator::{subscription, EventIterator, LogDecoder, LogFeed, Typed};
pub use watcher::{block_ranges, LogWatcher, WatcherConfig};
