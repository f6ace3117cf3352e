//! Event iterator termination and the polling producers that feed it

use std::time::Duration;

use alloy::primitives::{Address, LogData, U256, U64};
use alloy::providers::{mock::Asserter, ProviderBuilder};
use alloy::rpc::types::Log;
use alloy::sol_types::SolEvent;
use futures::StreamExt;
use lockredeem_bindings::contracts::lock_redeem::LockRedeem;
use lockredeem_bindings::evm::{BridgeEvent, BridgeEvents};
use lockredeem_bindings::{subscription, BindingError, ContractKind, LogWatcher, Typed, WatcherConfig};

const BRIDGE: Address = Address::repeat_byte(0x42);

fn lock_log(amount: u64, block: u64) -> Log {
    let event = LockRedeem::Lock {
        sender: Address::repeat_byte(0xaa),
        amount_received: U256::from(amount),
    };
    Log {
        inner: alloy::primitives::Log {
            address: BRIDGE,
            data: event.encode_log_data(),
        },
        block_number: Some(block),
        log_index: Some(0),
        ..Default::default()
    }
}

fn garbage_log() -> Log {
    Log {
        inner: alloy::primitives::Log {
            address: BRIDGE,
            data: LogData::new_unchecked(
                vec![LockRedeem::Lock::SIGNATURE_HASH],
                vec![0x01, 0x02].into(),
            ),
        },
        ..Default::default()
    }
}

fn mocked(asserter: Asserter) -> impl alloy::providers::Provider + Clone + 'static {
    ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_mocked_client(asserter)
}

#[tokio::test]
async fn test_empty_feed_ends_cleanly() {
    let (feed, mut iter) = subscription(Typed::<LockRedeem::Lock>::new(), 8);
    drop(feed);

    assert!(iter.next().await.is_none());
    assert!(iter.error().is_none());
    assert!(iter.is_done());
    // stays ended
    assert!(iter.next().await.is_none());
}

#[tokio::test]
async fn test_decode_failure_halts_delivery() {
    let (feed, mut iter) = subscription(Typed::<LockRedeem::Lock>::new(), 8);
    assert!(feed.send(lock_log(1, 10)).await);
    assert!(feed.send(garbage_log()).await);
    assert!(feed.send(lock_log(2, 11)).await);
    drop(feed);

    let first = iter.next().await.unwrap();
    assert_eq!(first.event.amount_received, U256::from(1u64));
    assert_eq!(first.block_number, Some(10));

    // the queued third log is never delivered
    assert!(iter.next().await.is_none());
    assert!(iter.next().await.is_none());
    match iter.error() {
        Some(BindingError::LogDecode { event, .. }) => assert_eq!(event, "Lock(address,uint256)"),
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_stream_yields_terminal_error_last() {
    let (feed, iter) = subscription(Typed::<LockRedeem::Lock>::new(), 8);
    feed.send(lock_log(7, 1)).await;
    feed.fail(BindingError::Subscription("node went away".to_string()))
        .await;

    let items: Vec<_> = iter.into_stream().collect().await;
    assert_eq!(items.len(), 2);
    assert_eq!(
        items[0].as_ref().unwrap().event.amount_received,
        U256::from(7u64)
    );
    assert!(matches!(items[1], Err(BindingError::Subscription(_))));
}

#[test]
fn test_bridge_events_decode_mixed_logs() {
    tokio_test::block_on(async {
        let decoder = BridgeEvents::new(ContractKind::LockRedeem).unwrap();
        let (feed, mut iter) = subscription(decoder, 4);

        let epoch = LockRedeem::NewEpoch {
            epochHeight: U256::from(500u64),
        };
        feed.send(lock_log(3, 1)).await;
        feed.send(Log {
            inner: alloy::primitives::Log {
                address: BRIDGE,
                data: epoch.encode_log_data(),
            },
            ..Default::default()
        })
        .await;
        drop(feed);

        assert!(matches!(
            iter.next().await.unwrap().event,
            BridgeEvent::Lock { .. }
        ));
        assert!(matches!(
            iter.next().await.unwrap().event,
            BridgeEvent::NewEpoch { .. }
        ));
        assert!(iter.next().await.is_none());
        assert!(iter.error().is_none());
    });
}

#[tokio::test]
async fn test_filter_pages_up_to_safe_block() {
    let asserter = Asserter::new();
    // head 12, two confirmations: safe block 10, queried as 0-4, 5-9, 10-10
    asserter.push_success(&U64::from(12));
    asserter.push_success(&vec![lock_log(1, 3)]);
    asserter.push_success(&Vec::<Log>::new());
    asserter.push_success(&vec![lock_log(2, 10)]);

    let config = WatcherConfig {
        poll_interval: Duration::from_millis(10),
        confirmations: 2,
        max_block_range: 5,
    };
    let watcher = LogWatcher::with_config(mocked(asserter.clone()), config);
    let mut locks = watcher.filter_events::<LockRedeem::Lock>(BRIDGE, 0, None);

    let mut amounts = Vec::new();
    while let Some(lock) = locks.next().await {
        amounts.push(lock.event.amount_received);
    }
    assert_eq!(amounts, vec![U256::from(1u64), U256::from(2u64)]);
    assert!(locks.error().is_none());
    assert!(asserter.read_q().is_empty());
}

#[tokio::test]
async fn test_filter_reports_transport_error() {
    let asserter = Asserter::new();
    asserter.push_failure_msg("query returned more than 10000 results");

    let watcher = LogWatcher::new(mocked(asserter));
    let mut locks = watcher.filter_events::<LockRedeem::Lock>(BRIDGE, 0, Some(50));

    assert!(locks.next().await.is_none());
    assert!(matches!(locks.error(), Some(BindingError::Transport(_))));
}

#[tokio::test]
async fn test_watch_follows_head_until_closed() {
    let asserter = Asserter::new();
    asserter.push_success(&U64::from(3));
    asserter.push_success(&vec![lock_log(5, 2)]);

    let config = WatcherConfig {
        poll_interval: Duration::from_secs(60),
        confirmations: 0,
        max_block_range: 100,
    };
    let watcher = LogWatcher::with_config(mocked(asserter), config);
    let mut locks = watcher.watch_events::<LockRedeem::Lock>(BRIDGE, Some(0));

    let lock = locks.next().await.unwrap();
    assert_eq!(lock.event.amount_received, U256::from(5u64));
    assert_eq!(lock.address, BRIDGE);

    locks.close();
    assert!(locks.next().await.is_none());
    assert!(locks.error().is_none());
}
