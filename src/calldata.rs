//! Transaction-level helpers for the lock and redeem flows
//!
//! Validators see user transactions as raw signed bytes. These helpers decode
//! them and check that they are what they claim to be:
//!
//! - an ether lock is a call of `lock()` carrying value
//! - an ERC20 lock is a token `transfer` whose recipient is the bridge
//! - a redeem is a call of `redeem(uint256)` or, on the single-contract ERC20
//!   bridge, `redeem(uint256,address)`
//!
//! Builders for the matching unsigned requests live here too.

use alloy::{
    consensus::{transaction::SignerRecoverable, Transaction, TxEnvelope},
    eips::eip2718::Decodable2718,
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash, U256},
    rpc::types::TransactionRequest,
    sol_types::{SolCall, SolInterface},
};
use serde::Serialize;

use crate::contracts::{lock_redeem::LockRedeem, lock_redeem_erc, lock_redeem_erc_single};
use crate::error::BindingError;

/// Fields of a decoded signed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawTransaction {
    pub hash: TxHash,
    /// Recovered sender; `None` if the signature does not recover
    pub from: Option<Address>,
    /// `None` for contract creation
    pub to: Option<Address>,
    pub value: U256,
    pub input: Bytes,
    pub nonce: u64,
    pub chain_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedeemRequest {
    pub amount: U256,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Erc20RedeemRequest {
    pub amount: U256,
    pub token: Address,
}

/// An ERC20 `transfer` into the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Erc20LockRequest {
    pub token: Address,
    pub receiver: Address,
    pub amount: U256,
}

/// Decode an EIP-2718 (or legacy RLP) signed transaction.
pub fn decode_raw_transaction(raw: &[u8]) -> Result<RawTransaction, BindingError> {
    let envelope = TxEnvelope::decode_2718(&mut &raw[..])
        .map_err(|e| BindingError::Transaction(format!("Unable to decode transaction: {}", e)))?;

    Ok(RawTransaction {
        hash: *envelope.tx_hash(),
        from: envelope.recover_signer().ok(),
        to: envelope.to(),
        value: envelope.value(),
        input: envelope.input().clone(),
        nonce: envelope.nonce(),
        chain_id: envelope.chain_id(),
    })
}

/// Dispatch calldata to one of a contract's typed calls.
pub fn decode_calls<C: SolInterface>(data: &[u8]) -> Result<C, BindingError> {
    Ok(C::abi_decode(data)?)
}

// ============================================================================
// Ether Lock
// ============================================================================

/// Calldata of `lock()`, identical for every ether bridge generation.
pub fn lock_calldata() -> Bytes {
    LockRedeem::lockCall {}.abi_encode().into()
}

/// Whether calldata is exactly a `lock()` call.
pub fn is_lock_call(data: &[u8]) -> bool {
    data == LockRedeem::lockCall::SELECTOR
}

/// Unsigned request locking `amount` wei in `bridge`.
pub fn lock_tx(bridge: Address, amount: U256) -> TransactionRequest {
    TransactionRequest::default()
        .with_to(bridge)
        .with_value(amount)
        .with_input(lock_calldata())
}

/// Amount of an ether lock, read from the transaction value.
pub fn parse_lock(raw: &[u8]) -> Result<U256, BindingError> {
    Ok(decode_raw_transaction(raw)?.value)
}

/// Whether a raw transaction is a `lock()` call.
pub fn verify_lock(raw: &[u8]) -> Result<bool, BindingError> {
    Ok(is_lock_call(&decode_raw_transaction(raw)?.input))
}

// ============================================================================
// Redeem
// ============================================================================

/// Calldata of a validator's `sign(amount, recipient)`.
pub fn sign_redeem_calldata(amount: U256, recipient: Address) -> Bytes {
    LockRedeem::signCall {
        amount_: amount,
        recipient_: recipient,
    }
    .abi_encode()
    .into()
}

/// Unsigned request for a validator signing the redeem of `recipient`.
pub fn sign_redeem_tx(bridge: Address, amount: U256, recipient: Address) -> TransactionRequest {
    TransactionRequest::default()
        .with_to(bridge)
        .with_input(sign_redeem_calldata(amount, recipient))
}

pub fn redeem_calldata(amount: U256) -> Bytes {
    LockRedeem::redeemCall { amount_: amount }.abi_encode().into()
}

/// Amount requested by a `redeem(uint256)` transaction.
pub fn parse_redeem(raw: &[u8]) -> Result<RedeemRequest, BindingError> {
    let tx = decode_raw_transaction(raw)?;
    let call = LockRedeem::redeemCall::abi_decode(&tx.input)?;
    Ok(RedeemRequest {
        amount: call.amount_,
    })
}

/// Amount and token of a per-token `redeem(uint256,address)` transaction.
pub fn parse_erc20_redeem(raw: &[u8]) -> Result<Erc20RedeemRequest, BindingError> {
    let tx = decode_raw_transaction(raw)?;
    let call = lock_redeem_erc_single::LockRedeemERC::redeemCall::abi_decode(&tx.input)?;
    Ok(Erc20RedeemRequest {
        amount: call.amount_,
        token: call.tokenAddress_,
    })
}

// ============================================================================
// ERC20 Lock
// ============================================================================

/// Decode an ERC20 `transfer` to a supported token.
pub fn parse_erc20_lock(
    raw: &[u8],
    supported_tokens: &[Address],
) -> Result<Erc20LockRequest, BindingError> {
    let tx = decode_raw_transaction(raw)?;
    let token = tx
        .to
        .filter(|to| supported_tokens.contains(to))
        .ok_or_else(|| BindingError::Transaction("Token not supported".to_string()))?;

    let call = lock_redeem_erc::IERC20::transferCall::abi_decode(&tx.input)?;
    Ok(Erc20LockRequest {
        token,
        receiver: call.recipient,
        amount: call.amount,
    })
}

/// Whether a raw ERC20 `transfer` sends its tokens to `bridge`.
pub fn verify_erc20_lock(raw: &[u8], bridge: Address) -> Result<bool, BindingError> {
    let tx = decode_raw_transaction(raw)?;
    let call = lock_redeem_erc::IERC20::transferCall::abi_decode(&tx.input)?;
    Ok(call.recipient == bridge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::lock_redeem_v2::LockRedeemV2;

    #[test]
    fn test_lock_calldata_is_selector() {
        assert_eq!(lock_calldata().as_ref(), &[0xf8, 0x3d, 0x08, 0xba]);
        assert!(is_lock_call(&lock_calldata()));
        assert!(is_lock_call(&LockRedeemV2::lockCall {}.abi_encode()));
        assert!(!is_lock_call(&[0xf8, 0x3d, 0x08, 0xba, 0x00]));
        assert!(!is_lock_call(&redeem_calldata(U256::from(1u64))));
    }

    #[test]
    fn test_lock_tx_request() {
        let bridge = Address::repeat_byte(0x11);
        let tx = lock_tx(bridge, U256::from(1_000u64));
        assert_eq!(tx.value, Some(U256::from(1_000u64)));
        assert_eq!(tx.input.input().unwrap().as_ref(), lock_calldata().as_ref());
    }

    #[test]
    fn test_decode_calls_dispatch() {
        let recipient = Address::repeat_byte(0x22);
        let data = sign_redeem_calldata(U256::from(7u64), recipient);
        match decode_calls::<LockRedeem::LockRedeemCalls>(&data).unwrap() {
            LockRedeem::LockRedeemCalls::sign(call) => {
                assert_eq!(call.amount_, U256::from(7u64));
                assert_eq!(call.recipient_, recipient);
            }
            other => panic!("unexpected call {:?}", other),
        }

        // the first bridge has no getSignatureCount
        let data = LockRedeemV2::getSignatureCountCall {
            recipient_: recipient,
        }
        .abi_encode();
        assert!(decode_calls::<LockRedeem::LockRedeemCalls>(&data).is_err());
    }

    #[test]
    fn test_garbage_transaction_rejected() {
        assert!(matches!(
            decode_raw_transaction(&[0x01, 0x02, 0x03]),
            Err(BindingError::Transaction(_))
        ));
    }
}
