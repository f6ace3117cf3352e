//! Polling log watchers
//!
//! Producers for [`EventIterator`]s. Historical queries page through the
//! requested range and then close the feed; watches follow the chain head
//! until the consumer closes the iterator.
//!
//! ## Usage
//!
//! ```ignore
//! let watcher = LogWatcher::new(provider);
//! let mut locks = watcher.watch_events::<LockRedeemV2::Lock>(bridge, None);
//! while let Some(lock) = locks.next().await {
//!     info!(sender = %lock.event.sender, "Lock seen");
//! }
//! if let Some(err) = locks.error() { ... }
//! ```

use alloy::{
    primitives::Address,
    providers::Provider,
    rpc::types::{Filter, Log},
    sol_types::SolEvent,
};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::BindingError;
use crate::evm::iterator::{subscription, EventIterator, LogDecoder, LogFeed, Typed};

/// Undelivered logs buffered per subscription.
const FEED_CAPACITY: usize = 256;

/// Event watcher configuration
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Poll interval between checks
    pub poll_interval: Duration,
    /// Blocks behind head before logs are delivered
    pub confirmations: u64,
    /// Maximum block range per query (to avoid RPC limits)
    pub max_block_range: u64,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
            confirmations: 1,
            max_block_range: 10_000,
        }
    }
}

/// Split `from..=to` into inclusive chunks of at most `max` blocks.
pub fn block_ranges(from: u64, to: u64, max: u64) -> impl Iterator<Item = (u64, u64)> {
    let step = max.max(1);
    let mut next = Some(from).filter(|f| *f <= to);
    std::iter::from_fn(move || {
        let start = next?;
        let end = start.saturating_add(step - 1).min(to);
        next = end.checked_add(1).filter(|n| *n <= to);
        Some((start, end))
    })
}

/// Produces logs from a provider into event iterators.
#[derive(Debug, Clone)]
pub struct LogWatcher<P> {
    provider: P,
    config: WatcherConfig,
}

impl<P: Provider + Clone + 'static> LogWatcher<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, WatcherConfig::default())
    }

    pub fn with_config(provider: P, config: WatcherConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &WatcherConfig {
        &self.config
    }

    /// Get the current block number
    pub async fn get_current_block(&self) -> Result<u64, BindingError> {
        Ok(self.provider.get_block_number().await?)
    }

    /// Get the safe block number (current - confirmations)
    pub async fn get_safe_block(&self) -> Result<u64, BindingError> {
        safe_block(&self.provider, self.config.confirmations).await
    }

    /// All logs matching `filter` in a block range, fetched in chunks.
    pub async fn get_logs(
        &self,
        filter: &Filter,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<Log>, BindingError> {
        let mut all_logs = Vec::new();
        for (start, end) in block_ranges(from_block, to_block, self.config.max_block_range) {
            let chunk = filter.clone().from_block(start).to_block(end);
            all_logs.extend(self.provider.get_logs(&chunk).await?);
        }
        Ok(all_logs)
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Decode historical logs of `address`, up to the safe head when `to_block` is unset.
    pub fn filter<D: LogDecoder>(
        &self,
        address: Address,
        decoder: D,
        from_block: u64,
        to_block: Option<u64>,
    ) -> EventIterator<D> {
        let filter = base_filter(address, &decoder);
        self.filter_with(filter, decoder, from_block, to_block)
    }

    /// Like [`filter`](Self::filter) with a caller-built filter, e.g. one narrowed by indexed topics.
    pub fn filter_with<D: LogDecoder>(
        &self,
        filter: Filter,
        decoder: D,
        from_block: u64,
        to_block: Option<u64>,
    ) -> EventIterator<D> {
        let (feed, iter) = subscription(decoder, FEED_CAPACITY);
        let provider = self.provider.clone();
        let config = self.config.clone();

        tokio::spawn(async move {
            let to_block = match to_block {
                Some(to) => to,
                None => match safe_block(&provider, config.confirmations).await {
                    Ok(b) => b,
                    Err(e) => return feed.fail(e).await,
                },
            };

            match page_logs(&provider, &filter, from_block, to_block, &config, &feed).await {
                Ok(_) => debug!(from_block, to_block, "Historical log query finished"),
                Err(e) => feed.fail(e).await,
            }
        });

        iter
    }

    /// Follow new logs of `address` from `from_block` (next safe block when unset).
    pub fn watch<D: LogDecoder>(
        &self,
        address: Address,
        decoder: D,
        from_block: Option<u64>,
    ) -> EventIterator<D> {
        let filter = base_filter(address, &decoder);
        self.watch_with(filter, decoder, from_block)
    }

    pub fn watch_with<D: LogDecoder>(
        &self,
        filter: Filter,
        decoder: D,
        from_block: Option<u64>,
    ) -> EventIterator<D> {
        let (feed, iter) = subscription(decoder, FEED_CAPACITY);
        let provider = self.provider.clone();
        let config = self.config.clone();

        tokio::spawn(async move {
            if let Err(e) = follow_logs(&provider, &filter, from_block, &config, &feed).await {
                feed.fail(e).await;
            }
        });

        iter
    }

    /// Typed historical query for one `sol!` event.
    pub fn filter_events<E: SolEvent + Send + 'static>(
        &self,
        address: Address,
        from_block: u64,
        to_block: Option<u64>,
    ) -> EventIterator<Typed<E>> {
        self.filter(address, Typed::new(), from_block, to_block)
    }

    /// Typed watch for one `sol!` event.
    pub fn watch_events<E: SolEvent + Send + 'static>(
        &self,
        address: Address,
        from_block: Option<u64>,
    ) -> EventIterator<Typed<E>> {
        self.watch(address, Typed::new(), from_block)
    }
}

fn base_filter<D: LogDecoder>(address: Address, decoder: &D) -> Filter {
    let filter = Filter::new().address(address);
    match decoder.topic0() {
        Some(topic) => filter.event_signature(topic),
        None => filter,
    }
}

async fn safe_block<P: Provider>(provider: &P, confirmations: u64) -> Result<u64, BindingError> {
    let current = provider.get_block_number().await?;
    Ok(current.saturating_sub(confirmations))
}

/// Send logs in `from..=to` to the feed. Returns `false` if the consumer left.
async fn page_logs<P: Provider>(
    provider: &P,
    filter: &Filter,
    from_block: u64,
    to_block: u64,
    config: &WatcherConfig,
    feed: &LogFeed,
) -> Result<bool, BindingError> {
    for (start, end) in block_ranges(from_block, to_block, config.max_block_range) {
        let chunk = filter.clone().from_block(start).to_block(end);
        let logs = provider.get_logs(&chunk).await?;
        debug!(from = start, to = end, count = logs.len(), "Fetched logs");

        for log in logs {
            if !feed.send(log).await {
                debug!("Consumer closed, stopping log delivery");
                return Ok(false);
            }
        }
    }
    Ok(true)
}

async fn follow_logs<P: Provider>(
    provider: &P,
    filter: &Filter,
    from_block: Option<u64>,
    config: &WatcherConfig,
    feed: &LogFeed,
) -> Result<(), BindingError> {
    let mut next_block = match from_block {
        Some(b) => b,
        None => safe_block(provider, config.confirmations).await? + 1,
    };
    info!(from_block = next_block, "Watching logs");

    loop {
        let safe = safe_block(provider, config.confirmations).await?;
        if safe >= next_block {
            if !page_logs(provider, filter, next_block, safe, config, feed).await? {
                return Ok(());
            }
            next_block = safe + 1;
        }

        tokio::select! {
            _ = feed.closed() => {
                debug!("Consumer closed, stopping watch");
                return Ok(());
            }
            _ = tokio::time::sleep(config.poll_interval) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watcher_config_default() {
        let config = WatcherConfig::default();
        assert_eq!(config.poll_interval, Duration::from_secs(2));
        assert_eq!(config.confirmations, 1);
        assert_eq!(config.max_block_range, 10_000);
    }

    #[test]
    fn test_block_ranges_chunking() {
        let ranges: Vec<_> = block_ranges(100, 350, 100).collect();
        assert_eq!(ranges, vec![(100, 199), (200, 299), (300, 350)]);

        let single: Vec<_> = block_ranges(5, 5, 10_000).collect();
        assert_eq!(single, vec![(5, 5)]);

        assert_eq!(block_ranges(10, 9, 100).count(), 0);
        // zero range is treated as one block per query
        assert_eq!(block_ranges(0, 2, 0).count(), 3);
        assert_eq!(block_ranges(u64::MAX - 1, u64::MAX, 10).count(), 1);
    }
}
