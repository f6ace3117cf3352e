//! EVM RPC Client Wrapper
//!
//! Provides the chain-client backend the bindings run against: reads through
//! `eth_call`, signed submissions through an optional local wallet, receipts
//! and finality checks.

use std::time::{Duration, Instant};

use alloy::{
    json_abi::JsonAbi,
    network::{EthereumWallet, TransactionBuilder},
    primitives::{Address, Bytes, TxHash, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::{BlockId, TransactionReceipt, TransactionRequest},
    signers::local::PrivateKeySigner,
};
use tracing::{debug, info, warn};

use crate::artifacts::ContractKind;
use crate::error::BindingError;
use crate::evm::binding::BoundContract;
use crate::evm::watcher::{LogWatcher, WatcherConfig};
use crate::redact::Redacted;

/// Poll interval while waiting on receipts.
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// EVM client configuration
#[derive(Debug, Clone)]
pub struct EvmClientConfig {
    /// RPC URL (e.g., "http://localhost:8545")
    pub rpc_url: String,
    /// Chain ID
    pub chain_id: u64,
    /// Private key for signing (optional, required for write operations)
    pub private_key: Option<Redacted<String>>,
}

/// Options for read-only calls.
#[derive(Debug, Clone, Default)]
pub struct CallOpts {
    /// Caller address, visible to the contract as `msg.sender`
    pub from: Option<Address>,
    /// Block to read at; latest when unset
    pub block: Option<BlockId>,
    /// Read pending state, overriding `block`
    pub pending: bool,
}

impl CallOpts {
    /// Read against pending state, as the bridge driver does for validator checks.
    pub fn pending() -> Self {
        Self {
            pending: true,
            ..Default::default()
        }
    }

    pub fn at_block(number: u64) -> Self {
        Self {
            block: Some(BlockId::number(number)),
            ..Default::default()
        }
    }

    pub fn from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    /// Block the call executes against.
    pub fn block_id(&self) -> BlockId {
        if self.pending {
            BlockId::pending()
        } else {
            self.block.unwrap_or_else(BlockId::latest)
        }
    }
}

/// Options for state-changing submissions. Unset fields are filled by the provider.
#[derive(Debug, Clone, Default)]
pub struct TransactOpts {
    pub from: Option<Address>,
    /// Ether sent with the transaction, in wei
    pub value: Option<U256>,
    pub gas_limit: Option<u64>,
    /// Legacy gas price, in wei
    pub gas_price: Option<u128>,
    pub nonce: Option<u64>,
}

impl TransactOpts {
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    /// Copy the set options onto a transaction request.
    pub fn apply(&self, mut tx: TransactionRequest) -> TransactionRequest {
        if let Some(from) = self.from {
            tx = tx.with_from(from);
        }
        if let Some(value) = self.value {
            tx = tx.with_value(value);
        }
        if let Some(gas_limit) = self.gas_limit {
            tx = tx.with_gas_limit(gas_limit);
        }
        if let Some(gas_price) = self.gas_price {
            tx = tx.with_gas_price(gas_price);
        }
        if let Some(nonce) = self.nonce {
            tx = tx.with_nonce(nonce);
        }
        tx
    }
}

/// RPC client, read-only or with a local signer.
#[derive(Clone)]
pub struct EvmClient {
    provider: DynProvider,
    chain_id: u64,
    signer_address: Option<Address>,
}

impl std::fmt::Debug for EvmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmClient")
            .field("chain_id", &self.chain_id)
            .field("signer_address", &self.signer_address)
            .finish_non_exhaustive()
    }
}

impl EvmClient {
    /// Build a client without touching the network.
    pub fn new(config: &EvmClientConfig) -> Result<Self, BindingError> {
        let url: url::Url = config
            .rpc_url
            .parse()
            .map_err(|e| BindingError::Config(format!("Invalid RPC URL: {}", e)))?;

        match &config.private_key {
            Some(key) => {
                let signer: PrivateKeySigner = key
                    .expose()
                    .parse()
                    .map_err(|e| BindingError::Config(format!("Invalid private key: {}", e)))?;
                let address = signer.address();
                let wallet = EthereumWallet::from(signer);
                let provider = ProviderBuilder::new()
                    .wallet(wallet)
                    .connect_http(url)
                    .erased();

                info!(
                    rpc_url = %config.rpc_url,
                    chain_id = config.chain_id,
                    address = %address,
                    "Created EVM client with signer"
                );

                Ok(Self {
                    provider,
                    chain_id: config.chain_id,
                    signer_address: Some(address),
                })
            }
            None => {
                let provider = ProviderBuilder::new().connect_http(url).erased();

                info!(
                    rpc_url = %config.rpc_url,
                    chain_id = config.chain_id,
                    "Created read-only EVM client"
                );

                Ok(Self {
                    provider,
                    chain_id: config.chain_id,
                    signer_address: None,
                })
            }
        }
    }

    /// Build a client and check the node serves the configured chain.
    pub async fn connect(config: &EvmClientConfig) -> Result<Self, BindingError> {
        let client = Self::new(config)?;
        let actual = client.provider.get_chain_id().await?;
        if actual != config.chain_id {
            return Err(BindingError::ChainIdMismatch {
                expected: config.chain_id,
                actual,
            });
        }
        Ok(client)
    }

    /// Wrap an existing provider.
    pub fn from_provider(
        provider: DynProvider,
        chain_id: u64,
        signer_address: Option<Address>,
    ) -> Self {
        Self {
            provider,
            chain_id,
            signer_address,
        }
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn has_signer(&self) -> bool {
        self.signer_address.is_some()
    }

    /// Get the signer address (None if read-only)
    pub fn signer_address(&self) -> Option<Address> {
        self.signer_address
    }

    /// Signer address, or an error for read-only clients.
    pub fn require_signer(&self) -> Result<Address, BindingError> {
        self.signer_address.ok_or(BindingError::NoSigner)
    }

    // =========================================================================
    // Bindings
    // =========================================================================

    /// Bind a contract by ABI.
    pub fn bind(&self, address: Address, abi: JsonAbi) -> BoundContract<DynProvider> {
        BoundContract::new(address, abi, self.provider.clone())
    }

    /// Bind one of the known artifacts.
    pub fn bind_kind(&self, address: Address, kind: ContractKind) -> BoundContract<DynProvider> {
        BoundContract::from_kind(address, kind, self.provider.clone())
    }

    pub fn watcher(&self, config: WatcherConfig) -> LogWatcher<DynProvider> {
        LogWatcher::with_config(self.provider.clone(), config)
    }

    // =========================================================================
    // Chain State
    // =========================================================================

    /// Get the current block number
    pub async fn block_number(&self) -> Result<u64, BindingError> {
        Ok(self.provider.get_block_number().await?)
    }

    /// Get the ETH balance of an address
    pub async fn balance(&self, address: Address) -> Result<U256, BindingError> {
        Ok(self.provider.get_balance(address).await?)
    }

    /// Pending nonce of an address
    pub async fn nonce(&self, address: Address) -> Result<u64, BindingError> {
        Ok(self
            .provider
            .get_transaction_count(address)
            .pending()
            .await?)
    }

    pub async fn gas_price(&self) -> Result<u128, BindingError> {
        Ok(self.provider.get_gas_price().await?)
    }

    pub async fn estimate_gas(&self, tx: TransactionRequest) -> Result<u64, BindingError> {
        Ok(self.provider.estimate_gas(tx).await?)
    }

    /// Read raw return data of a call.
    pub async fn call_raw(
        &self,
        to: Address,
        data: Bytes,
        opts: &CallOpts,
    ) -> Result<Bytes, BindingError> {
        self.bind(to, JsonAbi::default()).call_raw(data, opts).await
    }

    /// Broadcast an already signed transaction.
    ///
    /// The node is asked for the transaction first: one it already holds,
    /// pending or mined, is not sent again and its hash is returned as if it
    /// had been accepted. An "already known" rejection is treated the same way.
    pub async fn send_raw(&self, raw: &[u8]) -> Result<TxHash, BindingError> {
        let decoded = crate::calldata::decode_raw_transaction(raw)?;

        match self.provider.get_transaction_by_hash(decoded.hash).await {
            Ok(Some(_)) => {
                debug!(tx_hash = %decoded.hash, "Transaction already on node, not resending");
                return Ok(decoded.hash);
            }
            Ok(None) => {}
            Err(e) => debug!(tx_hash = %decoded.hash, error = %e, "Transaction lookup failed"),
        }

        match self.provider.send_raw_transaction(raw).await {
            Ok(pending) => {
                info!(tx_hash = %pending.tx_hash(), "Transaction broadcast");
                Ok(*pending.tx_hash())
            }
            Err(e) if e.to_string().contains("already known") => {
                debug!(tx_hash = %decoded.hash, "Transaction already known to node");
                Ok(decoded.hash)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn receipt(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, BindingError> {
        Ok(self.provider.get_transaction_receipt(tx_hash).await?)
    }

    /// Wait until a transaction is mined with `confirmations` blocks on top.
    ///
    /// The depth check is inclusive: `head - mined_block >= confirmations`,
    /// so zero confirmations accepts the receipt as soon as it exists.
    /// A reverted receipt is reported as [`BindingError::Reverted`].
    pub async fn wait_for_finality(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
        timeout: Duration,
    ) -> Result<TransactionReceipt, BindingError> {
        let start = Instant::now();

        loop {
            if let Some(receipt) = self.receipt(tx_hash).await? {
                if !receipt.status() {
                    warn!(tx_hash = %tx_hash, "Transaction reverted");
                    return Err(BindingError::Reverted(tx_hash));
                }

                if let Some(mined_at) = receipt.block_number {
                    let head = self.block_number().await?;
                    let depth = head.saturating_sub(mined_at);
                    if depth >= confirmations {
                        debug!(tx_hash = %tx_hash, block = mined_at, depth, "Transaction final");
                        return Ok(receipt);
                    }
                    debug!(tx_hash = %tx_hash, depth, confirmations, "Waiting for confirmations");
                }
            }

            if start.elapsed() > timeout {
                return Err(BindingError::Timeout {
                    what: format!("finality of {}", tx_hash),
                    secs: timeout.as_secs(),
                });
            }

            tokio::time::sleep(RECEIPT_POLL_INTERVAL).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = EvmClientConfig {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: 31337,
            private_key: None,
        };

        let client = EvmClient::new(&config).unwrap();
        assert_eq!(client.chain_id(), 31337);
        assert!(!client.has_signer());
        assert!(matches!(client.require_signer(), Err(BindingError::NoSigner)));
    }

    #[test]
    fn test_signer_address_from_key() {
        // First anvil dev account
        let config = EvmClientConfig {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: 31337,
            private_key: Some(Redacted(
                "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".to_string(),
            )),
        };

        let client = EvmClient::new(&config).unwrap();
        assert_eq!(
            client.signer_address().unwrap().to_string(),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad_url = EvmClientConfig {
            rpc_url: "not a url".to_string(),
            chain_id: 1,
            private_key: None,
        };
        assert!(matches!(EvmClient::new(&bad_url), Err(BindingError::Config(_))));

        let bad_key = EvmClientConfig {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: 1,
            private_key: Some(Redacted("0x1234".to_string())),
        };
        assert!(matches!(EvmClient::new(&bad_key), Err(BindingError::Config(_))));
    }

    #[test]
    fn test_call_opts_block_selection() {
        assert_eq!(CallOpts::default().block_id(), BlockId::latest());
        assert_eq!(CallOpts::pending().block_id(), BlockId::pending());
        assert_eq!(CallOpts::at_block(12).block_id(), BlockId::number(12));

        let opts = CallOpts {
            block: Some(BlockId::number(5)),
            pending: true,
            from: None,
        };
        assert_eq!(opts.block_id(), BlockId::pending());
    }

    #[test]
    fn test_transact_opts_apply() {
        let opts = TransactOpts::default()
            .with_value(U256::from(10u64))
            .with_gas_limit(200_000);
        let tx = opts.apply(TransactionRequest::default());
        assert_eq!(tx.value, Some(U256::from(10u64)));
        assert_eq!(tx.gas, Some(200_000));
        assert!(tx.nonce.is_none());
    }
}
