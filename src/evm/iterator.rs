//! Generic event iterator
//!
//! A single streaming decoder serves every event of every contract: a
//! producer pushes raw logs into a [`LogFeed`], and the consumer pulls decoded
//! events from the matching [`EventIterator`].
//!
//! ## Termination
//!
//! - The feed is dropped: `next()` returns `None` and `error()` stays empty.
//! - The feed reports an error, or a log fails to decode: the error is kept,
//!   `next()` returns `None` from then on.
//! - The consumer calls `close()`: delivery stops and the producer sees the
//!   feed as closed.

use std::marker::PhantomData;

use alloy::dyn_abi::{DecodedEvent, EventExt};
use alloy::json_abi::Event;
use alloy::primitives::B256;
use alloy::rpc::types::Log;
use alloy::sol_types::SolEvent;
use futures::Stream;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::error::BindingError;
use crate::evm::events::DecodedLog;

type FeedItem = Result<Log, BindingError>;

/// Turns a raw log into an event record.
pub trait LogDecoder: Send + 'static {
    type Event: Send + 'static;

    /// Name used in decode errors.
    fn name(&self) -> String;

    /// Topic 0 to filter on, if the decoder handles a single event.
    fn topic0(&self) -> Option<B256>;

    fn decode(&self, log: &Log) -> Result<Self::Event, BindingError>;
}

/// Decoder for a `sol!` event type.
pub struct Typed<E>(PhantomData<fn() -> E>);

impl<E> Typed<E> {
    /// Decoder for `E`; carries no state.
    pub fn new() -> Self {
        Typed(PhantomData)
    }
}

impl<E> Default for Typed<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Typed<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Typed<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Typed").field(&std::any::type_name::<E>()).finish()
    }
}

impl<E: SolEvent + Send + 'static> LogDecoder for Typed<E> {
    type Event = E;

    fn name(&self) -> String {
        E::SIGNATURE.to_string()
    }

    fn topic0(&self) -> Option<B256> {
        (!E::ANONYMOUS).then_some(E::SIGNATURE_HASH)
    }

    fn decode(&self, log: &Log) -> Result<E, BindingError> {
        E::decode_log_data(log.data()).map_err(|e| BindingError::log_decode(E::SIGNATURE, e))
    }
}

/// Dynamic decoding against an ABI event.
impl LogDecoder for Event {
    type Event = DecodedEvent;

    fn name(&self) -> String {
        self.signature()
    }

    fn topic0(&self) -> Option<B256> {
        (!self.anonymous).then(|| self.selector())
    }

    fn decode(&self, log: &Log) -> Result<DecodedEvent, BindingError> {
        self.decode_log(log.data())
            .map_err(|e| BindingError::log_decode(self.signature(), e))
    }
}

/// Producer half of a subscription.
#[derive(Debug)]
pub struct LogFeed {
    tx: mpsc::Sender<FeedItem>,
}

impl LogFeed {
    /// Push a raw log. Returns `false` once the consumer has gone away.
    pub async fn send(&self, log: Log) -> bool {
        self.tx.send(Ok(log)).await.is_ok()
    }

    /// Terminate the subscription with an error.
    pub async fn fail(self, error: BindingError) {
        if self.tx.send(Err(error)).await.is_err() {
            debug!("Subscription error dropped, consumer already closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Resolves when the consumer closes or drops its iterator.
    pub async fn closed(&self) {
        self.tx.closed().await
    }
}

/// Consumer half of a subscription, yielding decoded events in log order.
#[derive(Debug)]
pub struct EventIterator<D: LogDecoder> {
    decoder: D,
    rx: mpsc::Receiver<FeedItem>,
    error: Option<BindingError>,
    done: bool,
}

/// Open a subscription with room for `capacity` undelivered logs.
pub fn subscription<D: LogDecoder>(decoder: D, capacity: usize) -> (LogFeed, EventIterator<D>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    let iter = EventIterator {
        decoder,
        rx,
        error: None,
        done: false,
    };
    (LogFeed { tx }, iter)
}

impl<D: LogDecoder> EventIterator<D> {
    /// Next decoded event, or `None` once the subscription has ended.
    pub async fn next(&mut self) -> Option<DecodedLog<D::Event>> {
        if self.done {
            return None;
        }

        match self.rx.recv().await {
            Some(Ok(log)) => match self.decoder.decode(&log) {
                Ok(event) => Some(DecodedLog::new(event, &log)),
                Err(e) => {
                    self.terminate(e);
                    None
                }
            },
            Some(Err(e)) => {
                self.terminate(e);
                None
            }
            None => {
                debug!(event = %self.decoder.name(), "Subscription closed");
                self.done = true;
                None
            }
        }
    }

    /// Error that ended the subscription, if any.
    pub fn error(&self) -> Option<&BindingError> {
        self.error.as_ref()
    }

    /// Move the terminal error out, leaving `None` behind.
    pub fn take_error(&mut self) -> Option<BindingError> {
        self.error.take()
    }

    /// Stop delivery and release the producer.
    pub fn close(&mut self) {
        self.done = true;
        self.rx.close();
    }

    /// True once delivery has ended.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Decoder used for every delivered log.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Adapt into a stream that yields the terminal error as its last item.
    pub fn into_stream(self) -> impl Stream<Item = Result<DecodedLog<D::Event>, BindingError>> {
        futures::stream::unfold(Some(self), |state| async move {
            let mut iter = state?;
            match iter.next().await {
                Some(event) => Some((Ok(event), Some(iter))),
                None => iter.take_error().map(|e| (Err(e), None)),
            }
        })
    }

    fn terminate(&mut self, error: BindingError) {
        warn!(event = %self.decoder.name(), error = %error, "Subscription failed");
        self.error = Some(error);
        self.done = true;
        self.rx.close();
    }
}
