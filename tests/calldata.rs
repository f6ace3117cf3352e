//! Decoding of signed lock and redeem transactions

use alloy::consensus::{SignableTransaction, TxEnvelope, TxLegacy};
use alloy::eips::eip2718::Encodable2718;
use alloy::network::TxSignerSync;
use alloy::primitives::{Address, Bytes, TxKind, U256};
use alloy::signers::local::PrivateKeySigner;
use alloy::sol_types::SolCall;
use lockredeem_bindings::calldata::{
    decode_raw_transaction, lock_calldata, parse_erc20_lock, parse_erc20_redeem, parse_lock,
    parse_redeem, redeem_calldata, sign_redeem_calldata, verify_erc20_lock, verify_lock,
};
use lockredeem_bindings::contracts::{lock_redeem_erc, lock_redeem_erc_single};
use lockredeem_bindings::BindingError;

const BRIDGE: Address = Address::repeat_byte(0x42);
const TOKEN: Address = Address::repeat_byte(0x70);

/// Sign a legacy transaction and return its EIP-2718 encoding.
fn signed_raw(signer: &PrivateKeySigner, to: Address, value: U256, input: Bytes) -> Vec<u8> {
    let mut tx = TxLegacy {
        chain_id: Some(31337),
        nonce: 3,
        gas_price: 1_000_000_000,
        gas_limit: 100_000,
        to: TxKind::Call(to),
        value,
        input,
    };
    let signature = signer.sign_transaction_sync(&mut tx).unwrap();
    TxEnvelope::Legacy(tx.into_signed(signature)).encoded_2718()
}

fn erc20_transfer(recipient: Address, amount: u64) -> Bytes {
    lock_redeem_erc::IERC20::transferCall {
        recipient,
        amount: U256::from(amount),
    }
    .abi_encode()
    .into()
}

#[test]
fn test_decode_recovers_sender() {
    let signer = PrivateKeySigner::random();
    let raw = signed_raw(&signer, BRIDGE, U256::from(1u64), lock_calldata());

    let tx = decode_raw_transaction(&raw).unwrap();
    assert_eq!(tx.from, Some(signer.address()));
    assert_eq!(tx.to, Some(BRIDGE));
    assert_eq!(tx.nonce, 3);
    assert_eq!(tx.chain_id, Some(31337));
    assert_eq!(tx.input, lock_calldata());
}

#[test]
fn test_ether_lock() {
    let signer = PrivateKeySigner::random();
    let amount = U256::from(10u64).pow(U256::from(18u64));
    let raw = signed_raw(&signer, BRIDGE, amount, lock_calldata());

    assert!(verify_lock(&raw).unwrap());
    assert_eq!(parse_lock(&raw).unwrap(), amount);

    let not_lock = signed_raw(&signer, BRIDGE, amount, redeem_calldata(amount));
    assert!(!verify_lock(&not_lock).unwrap());
}

#[test]
fn test_redeem_amount() {
    let signer = PrivateKeySigner::random();
    let raw = signed_raw(
        &signer,
        BRIDGE,
        U256::ZERO,
        redeem_calldata(U256::from(250u64)),
    );
    assert_eq!(parse_redeem(&raw).unwrap().amount, U256::from(250u64));

    // a validator signature is not a redeem
    let sign = signed_raw(
        &signer,
        BRIDGE,
        U256::ZERO,
        sign_redeem_calldata(U256::from(250u64), signer.address()),
    );
    assert!(matches!(parse_redeem(&sign), Err(BindingError::SolTypes(_))));
}

#[test]
fn test_erc20_redeem_names_token() {
    let signer = PrivateKeySigner::random();
    let input: Bytes = lock_redeem_erc_single::LockRedeemERC::redeemCall {
        amount_: U256::from(40u64),
        tokenAddress_: TOKEN,
    }
    .abi_encode()
    .into();
    let raw = signed_raw(&signer, BRIDGE, U256::ZERO, input);

    let request = parse_erc20_redeem(&raw).unwrap();
    assert_eq!(request.amount, U256::from(40u64));
    assert_eq!(request.token, TOKEN);
}

#[test]
fn test_erc20_lock() {
    let signer = PrivateKeySigner::random();
    let raw = signed_raw(&signer, TOKEN, U256::ZERO, erc20_transfer(BRIDGE, 77));

    let request = parse_erc20_lock(&raw, &[TOKEN]).unwrap();
    assert_eq!(request.token, TOKEN);
    assert_eq!(request.receiver, BRIDGE);
    assert_eq!(request.amount, U256::from(77u64));

    assert!(verify_erc20_lock(&raw, BRIDGE).unwrap());
    assert!(!verify_erc20_lock(&raw, Address::repeat_byte(0x01)).unwrap());
}

#[test]
fn test_erc20_lock_unsupported_token() {
    let signer = PrivateKeySigner::random();
    let other_token = Address::repeat_byte(0x71);
    let raw = signed_raw(&signer, other_token, U256::ZERO, erc20_transfer(BRIDGE, 1));

    match parse_erc20_lock(&raw, &[TOKEN]) {
        Err(BindingError::Transaction(msg)) => assert_eq!(msg, "Token not supported"),
        other => panic!("expected unsupported token, got {:?}", other),
    }
}

#[test]
fn test_truncated_transaction() {
    let signer = PrivateKeySigner::random();
    let raw = signed_raw(&signer, BRIDGE, U256::from(1u64), lock_calldata());

    assert!(decode_raw_transaction(&raw[..raw.len() / 2]).is_err());
    assert!(parse_lock(&[]).is_err());
}
