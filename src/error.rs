//! Error type shared by the binding layer.
//!
//! Every failure is passed through to the caller as-is: nothing here retries
//! or distinguishes transient from permanent errors.

use alloy::primitives::TxHash;
use thiserror::Error;

/// Errors surfaced by bound contracts, event iterators and log watchers.
#[derive(Error, Debug)]
pub enum BindingError {
    /// Arguments or return data did not match the ABI.
    #[error("ABI encoding error: {0}")]
    Abi(#[from] alloy::dyn_abi::Error),

    /// Typed (`sol!`) encoding or decoding failed.
    #[error("ABI decoding error: {0}")]
    SolTypes(#[from] alloy::sol_types::Error),

    /// A log could not be unpacked into the requested event.
    #[error("Failed to decode {event} log: {reason}")]
    LogDecode { event: String, reason: String },

    #[error("Contract error: {0}")]
    Contract(#[from] alloy::contract::Error),

    #[error("RPC error: {0}")]
    Transport(#[from] alloy::transports::TransportError),

    #[error("Pending transaction error: {0}")]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),

    #[error("Invalid client configuration: {0}")]
    Config(String),

    #[error("Chain ID mismatch: expected {expected}, node reports {actual}")]
    ChainIdMismatch { expected: u64, actual: u64 },

    #[error("Client has no signer configured")]
    NoSigner,

    #[error("Unknown contract kind: {0}")]
    UnknownContract(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    #[error("Unknown function selector: 0x{0}")]
    UnknownSelector(String),

    #[error("Contract ABI has no constructor but {0} constructor arguments were given")]
    MissingConstructor(usize),

    #[error("No creation bytecode available for {0}")]
    MissingBytecode(String),

    #[error("Transaction {0} reverted")]
    Reverted(TxHash),

    #[error("Receipt for {0} has no contract address")]
    NoContractAddress(TxHash),

    #[error("Timed out after {secs}s waiting for {what}")]
    Timeout { what: String, secs: u64 },

    #[error("Log subscription terminated: {0}")]
    Subscription(String),

    #[error("Transaction error: {0}")]
    Transaction(String),
}

impl BindingError {
    /// Build a log decode error for the named event.
    pub fn log_decode(event: impl Into<String>, reason: impl ToString) -> Self {
        BindingError::LogDecode {
            event: event.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BindingError::UnknownFunction("lockTokens".to_string());
        assert_eq!(err.to_string(), "Unknown function: lockTokens");

        let err = BindingError::log_decode("Lock", "topic mismatch");
        assert_eq!(err.to_string(), "Failed to decode Lock log: topic mismatch");

        let err = BindingError::Timeout {
            what: "receipt".to_string(),
            secs: 5,
        };
        assert_eq!(err.to_string(), "Timed out after 5s waiting for receipt");
    }
}
