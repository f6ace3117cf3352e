//! Typed `sol!` bindings and the ABI-driven client must agree on the wire format

use alloy::dyn_abi::{DynSolType, DynSolValue, FunctionExt, JsonAbiExt, Specifier};
use alloy::primitives::{Address, B256, I256, U256};
use alloy::sol_types::{SolCall, SolConstructor, SolEvent, SolInterface};
use lockredeem_bindings::contracts::{
    lock_redeem::LockRedeem, lock_redeem_erc, lock_redeem_erc_single,
    lock_redeem_future::LockRedeemFuture, lock_redeem_kratos::LockRedeemKratos,
    lock_redeem_v2::LockRedeemV2, test_token::ERC20Basic,
};
use lockredeem_bindings::evm::{deploy_code, LogDecoder};
use lockredeem_bindings::{BoundContract, ContractKind};

fn unbound(kind: ContractKind) -> BoundContract<()> {
    BoundContract::from_kind(Address::repeat_byte(0x42), kind, ())
}

/// A non-default value of type `ty`.
fn sample(ty: &DynSolType) -> DynSolValue {
    match ty {
        DynSolType::Address => DynSolValue::Address(Address::repeat_byte(0x11)),
        DynSolType::Bool => DynSolValue::Bool(true),
        DynSolType::Uint(bits) => DynSolValue::Uint(U256::from(7u64), *bits),
        DynSolType::Int(bits) => DynSolValue::Int(I256::try_from(-5i64).unwrap(), *bits),
        DynSolType::String => DynSolValue::String("lock".to_string()),
        DynSolType::Bytes => DynSolValue::Bytes(vec![0xca, 0xfe]),
        DynSolType::FixedBytes(size) => {
            let mut word = B256::ZERO;
            word[..*size].fill(0xab);
            DynSolValue::FixedBytes(word, *size)
        }
        DynSolType::Array(inner) => DynSolValue::Array(vec![sample(inner), sample(inner)]),
        DynSolType::FixedArray(inner, len) => {
            DynSolValue::FixedArray(vec![sample(inner); *len])
        }
        DynSolType::Tuple(types) => DynSolValue::Tuple(types.iter().map(sample).collect()),
        other => panic!("no sample for {}", other),
    }
}

#[test]
fn test_typed_sign_decodes_dynamically() {
    let recipient = Address::repeat_byte(0x07);
    let call = LockRedeem::signCall {
        amount_: U256::from(1_000_000u64),
        recipient_: recipient,
    };
    let data = call.abi_encode();

    let bridge = unbound(ContractKind::LockRedeem);
    let (function, args) = bridge.decode_input(&data).unwrap();
    assert_eq!(function.name, "sign");
    assert_eq!(
        args,
        vec![
            DynSolValue::Uint(U256::from(1_000_000u64), 256),
            DynSolValue::Address(recipient),
        ]
    );
}

#[test]
fn test_dynamic_redeem_decodes_typed() {
    let bridge = unbound(ContractKind::LockRedeemV2);
    let data = bridge
        .encode_call("redeem", &[DynSolValue::Uint(U256::from(42u64), 256)])
        .unwrap();

    match LockRedeemV2::LockRedeemV2Calls::abi_decode(&data).unwrap() {
        LockRedeemV2::LockRedeemV2Calls::redeem(call) => {
            assert_eq!(call.amount_, U256::from(42u64))
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[test]
fn test_erc_single_redeem_carries_token() {
    let token = Address::repeat_byte(0x33);
    let call = lock_redeem_erc_single::LockRedeemERC::redeemCall {
        amount_: U256::from(5u64),
        tokenAddress_: token,
    };
    let data = call.abi_encode();

    // same name, different selector from the multi-token bridge
    assert_ne!(
        &data[..4],
        &lock_redeem_erc::LockRedeemERC::redeemCall::SELECTOR[..]
    );
    let decoded = lock_redeem_erc_single::LockRedeemERC::redeemCall::abi_decode(&data).unwrap();
    assert_eq!(decoded.tokenAddress_, token);
    assert!(lock_redeem_erc::LockRedeemERC::redeemCall::abi_decode(&data).is_err());
}

#[test]
fn test_token_transfer_matches_interface() {
    let receiver = Address::repeat_byte(0x11);
    let basic = ERC20Basic::transferCall {
        receiver,
        numTokens: U256::from(10u64),
    }
    .abi_encode();
    let interface = lock_redeem_erc::IERC20::transferCall {
        recipient: receiver,
        amount: U256::from(10u64),
    }
    .abi_encode();

    // parameter names differ, the encoding does not
    assert_eq!(basic, interface);
}

#[test]
fn test_return_values() {
    let data = LockRedeemKratos::verifyRedeemCall::abi_encode_returns(&-1i8);
    assert_eq!(
        LockRedeemKratos::verifyRedeemCall::abi_decode_returns(&data).unwrap(),
        -1i8
    );

    let bridge = unbound(ContractKind::LockRedeemKratos);
    let values = bridge.decode_output("verifyRedeem", &data).unwrap();
    assert_eq!(values, vec![DynSolValue::Int(I256::MINUS_ONE, 8)]);

    let data = LockRedeemFuture::getMigrationCountCall::abi_encode_returns(&U256::from(3u64));
    let values = unbound(ContractKind::LockRedeemFuture)
        .decode_output("getMigrationCount", &data)
        .unwrap();
    assert_eq!(values[0].as_uint(), Some((U256::from(3u64), 256)));
}

#[test]
fn test_constructor_encoding_agrees() {
    let validators = vec![Address::repeat_byte(0x01), Address::repeat_byte(0x02)];
    let old_contract = Address::repeat_byte(0x03);

    let typed = LockRedeemKratos::constructorCall {
        initialValidators: validators.clone(),
        _lock_period: U256::from(86_400u64),
        _old_contract: old_contract,
        noofValidatorsinold: U256::from(2u64),
    }
    .abi_encode();

    let args = [
        DynSolValue::Array(validators.into_iter().map(DynSolValue::Address).collect()),
        DynSolValue::Uint(U256::from(86_400u64), 256),
        DynSolValue::Address(old_contract),
        DynSolValue::Uint(U256::from(2u64), 256),
    ];
    let kind = ContractKind::LockRedeemKratos;
    let bytecode = kind.bytecode().unwrap();
    let code = deploy_code(&kind.abi(), &bytecode, &args).unwrap();

    assert_eq!(&code[..bytecode.len()], &bytecode[..]);
    assert_eq!(&code[bytecode.len()..], &typed[..]);
}

#[test]
fn test_fee_event_decodes_both_ways() {
    let recepient = Address::repeat_byte(0x44);
    let event = LockRedeemV2::RedeemRequest {
        recepient,
        amount_requested: U256::from(900u64),
        redeemFeeCharged: U256::from(100u64),
    };
    let data = event.encode_log_data();

    let log = alloy::rpc::types::Log {
        inner: alloy::primitives::Log {
            address: Address::repeat_byte(0x42),
            data: data.clone(),
        },
        ..Default::default()
    };

    let bridge = unbound(ContractKind::LockRedeemV2);
    let (abi_event, decoded) = bridge.decode_log(&log).unwrap();
    assert_eq!(abi_event.name, "RedeemRequest");
    assert_eq!(decoded.indexed, vec![DynSolValue::Address(recepient)]);
    assert_eq!(
        decoded.body,
        vec![
            DynSolValue::Uint(U256::from(900u64), 256),
            DynSolValue::Uint(U256::from(100u64), 256),
        ]
    );

    let typed = LockRedeemV2::RedeemRequest::decode_log_data(&data).unwrap();
    assert_eq!(typed, event);

    // the first generation's RedeemRequest has a different topic
    assert!(LockRedeem::RedeemRequest::decode_log_data(&data).is_err());
    assert!(LogDecoder::decode(abi_event, &log).is_ok());
}

#[test]
fn test_every_function_roundtrips() {
    let mut checked = 0;
    for kind in ContractKind::ALL {
        let bridge = unbound(kind);
        for function in bridge.abi().functions() {
            let inputs: Vec<DynSolValue> = function
                .inputs
                .iter()
                .map(|p| sample(&p.resolve().unwrap()))
                .collect();

            // overloads share a name; only the first is reachable by name
            let by_name = bridge.function(&function.name).unwrap().selector() == function.selector();
            let data = if by_name {
                bridge.encode_call(&function.name, &inputs).unwrap()
            } else {
                function.abi_encode_input(&inputs).unwrap().into()
            };
            assert_eq!(data[..4], function.selector()[..], "{} {}", kind, function.name);

            let (decoded_fn, decoded_args) = bridge.decode_input(&data).unwrap();
            assert_eq!(decoded_fn.signature(), function.signature(), "{}", kind);
            assert_eq!(decoded_args, inputs, "{} {}", kind, function.name);

            let outputs: Vec<DynSolValue> = function
                .outputs
                .iter()
                .map(|p| sample(&p.resolve().unwrap()))
                .collect();
            let returned = DynSolValue::Tuple(outputs.clone()).abi_encode_params();
            let decoded = function.abi_decode_output(&returned).unwrap();
            assert_eq!(decoded, outputs, "{} {}", kind, function.name);
            if by_name {
                assert_eq!(
                    bridge.decode_output(&function.name, &returned).unwrap(),
                    outputs
                );
            }

            checked += 1;
        }
    }
    assert!(checked > 60, "only {} functions checked", checked);
}
