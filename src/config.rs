//! Tool configuration
//!
//! Loaded from the environment, with a `.env` file picked up when present.

use std::env;
use std::time::Duration;

use alloy::primitives::Address;
use eyre::{eyre, Result, WrapErr};

use crate::artifacts::ContractKind;
use crate::evm::{EvmClientConfig, WatcherConfig};
use crate::redact::Redacted;

/// `lockredeem` configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// EVM RPC URL
    pub evm_rpc_url: String,
    /// EVM native chain ID (e.g. 31337 for Anvil)
    pub evm_chain_id: u64,
    /// Signer key; read-only when unset
    pub evm_private_key: Option<Redacted<String>>,

    /// Deployed bridge contract
    pub bridge_address: Option<Address>,
    /// Which bridge generation is deployed there
    pub bridge_kind: ContractKind,

    /// Poll interval in milliseconds
    pub poll_interval_ms: u64,
    /// Blocks on top of a transaction before it counts as final
    pub confirmations: u64,
    /// Maximum block range per log query
    pub max_block_range: u64,
    /// How long to wait for finality
    pub tx_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded .env from {:?}", path);
        }

        Self::from_env()
    }

    /// Read configuration from the process environment only.
    pub fn from_env() -> Result<Self> {
        let bridge_address = match env::var("LOCK_REDEEM_ADDRESS") {
            Ok(s) if !s.trim().is_empty() => Some(
                s.trim()
                    .parse::<Address>()
                    .map_err(|e| eyre!("Invalid LOCK_REDEEM_ADDRESS: {}", e))?,
            ),
            _ => None,
        };

        let bridge_kind = match env::var("LOCK_REDEEM_KIND") {
            Ok(s) => s
                .parse::<ContractKind>()
                .wrap_err("Invalid LOCK_REDEEM_KIND")?,
            Err(_) => ContractKind::LockRedeemV2,
        };

        let config = Self {
            evm_rpc_url: env::var("EVM_RPC_URL").map_err(|_| eyre!("EVM_RPC_URL required"))?,
            evm_chain_id: env::var("EVM_CHAIN_ID")
                .map_err(|_| eyre!("EVM_CHAIN_ID required"))?
                .parse()
                .map_err(|_| eyre!("Invalid EVM_CHAIN_ID"))?,
            evm_private_key: env::var("EVM_PRIVATE_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty())
                .map(Redacted),

            bridge_address,
            bridge_kind,

            poll_interval_ms: env::var("POLL_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
            confirmations: env::var("CONFIRMATIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(12),
            max_block_range: env::var("MAX_BLOCK_RANGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            tx_timeout_secs: env::var("TX_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url: url::Url = self
            .evm_rpc_url
            .parse()
            .map_err(|e| eyre!("Invalid EVM_RPC_URL: {}", e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(eyre!(
                "EVM_RPC_URL must be http or https, got {}",
                url.scheme()
            ));
        }
        if self.poll_interval_ms == 0 {
            return Err(eyre!("POLL_INTERVAL_MS must be greater than zero"));
        }
        if self.max_block_range == 0 {
            return Err(eyre!("MAX_BLOCK_RANGE must be greater than zero"));
        }
        Ok(())
    }

    /// Bridge address, required by commands that talk to the bridge.
    pub fn require_bridge(&self) -> Result<Address> {
        self.bridge_address
            .ok_or_else(|| eyre!("LOCK_REDEEM_ADDRESS required"))
    }

    pub fn client_config(&self) -> EvmClientConfig {
        EvmClientConfig {
            rpc_url: self.evm_rpc_url.clone(),
            chain_id: self.evm_chain_id,
            private_key: self.evm_private_key.clone(),
        }
    }

    pub fn watcher_config(&self) -> WatcherConfig {
        WatcherConfig {
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            confirmations: self.confirmations,
            max_block_range: self.max_block_range,
        }
    }

    pub fn tx_timeout(&self) -> Duration {
        Duration::from_secs(self.tx_timeout_secs)
    }
}
