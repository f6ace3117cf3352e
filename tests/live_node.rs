//! Tests against a running node
//!
//! These tests require a local Anvil on localhost:8545 (or EVM_RPC_URL) with
//! its first dev account funded.
//!
//! Run with: cargo test --test live_node -- --ignored --nocapture

use std::env;
use std::time::Duration;

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::U256;
use lockredeem_bindings::contracts::lock_redeem::LockRedeem;
use lockredeem_bindings::evm::{deploy_kind, BridgeEvent, BridgeEvents};
use lockredeem_bindings::redact::Redacted;
use lockredeem_bindings::{
    CallOpts, ContractKind, EvmClient, EvmClientConfig, TransactOpts, WatcherConfig,
};

/// First Anvil dev account
const ANVIL_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn client_config() -> EvmClientConfig {
    EvmClientConfig {
        rpc_url: env::var("EVM_RPC_URL").unwrap_or_else(|_| "http://localhost:8545".to_string()),
        chain_id: env::var("EVM_CHAIN_ID")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(31337),
        private_key: Some(Redacted(
            env::var("EVM_PRIVATE_KEY").unwrap_or_else(|_| ANVIL_KEY.to_string()),
        )),
    }
}

fn quick_watcher() -> WatcherConfig {
    WatcherConfig {
        poll_interval: Duration::from_millis(200),
        confirmations: 0,
        max_block_range: 1_000,
    }
}

async fn deploy_bridge(client: &EvmClient) -> alloy::primitives::Address {
    let signer = client.require_signer().unwrap();
    let validators = DynSolValue::Array(vec![DynSolValue::Address(signer)]);
    let opts = TransactOpts {
        from: Some(signer),
        ..Default::default()
    };
    let (bridge, _) = deploy_kind(
        client.provider().clone(),
        ContractKind::LockRedeem,
        &[validators],
        &opts,
    )
    .await
    .expect("Failed to deploy LockRedeem");
    bridge.address()
}

#[tokio::test]
#[ignore = "requires Anvil running"]
async fn test_connect_checks_chain_id() {
    let client = EvmClient::connect(&client_config()).await.unwrap();
    assert!(client.block_number().await.is_ok());

    let mut wrong = client_config();
    wrong.chain_id += 1;
    assert!(EvmClient::connect(&wrong).await.is_err());
}

#[tokio::test]
#[ignore = "requires Anvil running"]
async fn test_deploy_and_read_validators() {
    let client = EvmClient::connect(&client_config()).await.unwrap();
    let address = deploy_bridge(&client).await;
    let signer = client.require_signer().unwrap();

    let bridge = client.bind_kind(address, ContractKind::LockRedeem);
    let count = bridge
        .call("numValidators", &[], &CallOpts::default())
        .await
        .unwrap();
    assert_eq!(count, vec![DynSolValue::Uint(U256::from(1u64), 256)]);

    // typed instance over the same provider
    let typed = LockRedeem::new(address, client.provider().clone());
    assert!(typed.isValidator(signer).call().await.unwrap());
}

#[tokio::test]
#[ignore = "requires Anvil running"]
async fn test_lock_is_observed() {
    let client = EvmClient::connect(&client_config()).await.unwrap();
    let address = deploy_bridge(&client).await;
    let signer = client.require_signer().unwrap();
    let start = client.block_number().await.unwrap();

    let bridge = client.bind_kind(address, ContractKind::LockRedeem);
    let amount = U256::from(1_000_000_000u64);
    let pending = bridge
        .transact(
            "lock",
            &[],
            &TransactOpts {
                from: Some(signer),
                ..Default::default()
            }
            .with_value(amount),
        )
        .await
        .unwrap();
    let receipt = client
        .wait_for_finality(*pending.tx_hash(), 0, Duration::from_secs(30))
        .await
        .unwrap();
    assert!(receipt.status());

    let mut locks = client
        .watcher(quick_watcher())
        .filter_events::<LockRedeem::Lock>(address, start, None);
    let lock = locks.next().await.expect("Lock event");
    assert_eq!(lock.event.sender, signer);
    assert_eq!(lock.event.amount_received, amount);

    let mut events = client.watcher(quick_watcher()).filter(
        address,
        BridgeEvents::new(ContractKind::LockRedeem).unwrap(),
        start,
        None,
    );
    let mut saw_lock = false;
    while let Some(log) = events.next().await {
        if let BridgeEvent::Lock { amount: a, .. } = log.event {
            saw_lock = a == amount;
        }
    }
    assert!(saw_lock);
    assert!(events.error().is_none());
}
