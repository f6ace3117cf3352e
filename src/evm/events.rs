//! Decoded event records
//!
//! [`DecodedLog`] pairs a decoded event with where it was emitted.
//! [`BridgeEvent`] flattens the event sets of every bridge generation into one
//! serializable shape so tooling can log and compare them side by side.

use alloy::primitives::{Address, TxHash, B256, I256, U256};
use alloy::rpc::types::Log;
use alloy::sol_types::SolEventInterface;
use serde::Serialize;

use crate::artifacts::ContractKind;
use crate::contracts::{
    lock_redeem::LockRedeem, lock_redeem_erc, lock_redeem_erc_single,
    lock_redeem_kratos::LockRedeemKratos, lock_redeem_v2::LockRedeemV2,
};
use crate::error::BindingError;
use crate::evm::iterator::LogDecoder;

/// An event together with the position of the log it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLog<E> {
    pub event: E,
    /// Emitting contract
    pub address: Address,
    pub block_number: Option<u64>,
    pub block_hash: Option<B256>,
    pub tx_hash: Option<TxHash>,
    pub log_index: Option<u64>,
    /// Set when the log was dropped by a reorg
    pub removed: bool,
}

impl<E> DecodedLog<E> {
    pub fn new(event: E, log: &Log) -> Self {
        Self {
            event,
            address: log.address(),
            block_number: log.block_number,
            block_hash: log.block_hash,
            tx_hash: log.transaction_hash,
            log_index: log.log_index,
            removed: log.removed,
        }
    }

    /// Transform the event, keeping the log position.
    pub fn map<F, T>(self, f: F) -> DecodedLog<T>
    where
        F: FnOnce(E) -> T,
    {
        DecodedLog {
            event: f(self.event),
            address: self.address,
            block_number: self.block_number,
            block_hash: self.block_hash,
            tx_hash: self.tx_hash,
            log_index: self.log_index,
            removed: self.removed,
        }
    }
}

/// Bridge event from any LockRedeem generation.
///
/// Fields that only later generations emit are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BridgeEvent {
    Lock {
        sender: Address,
        amount: U256,
    },
    RedeemRequest {
        recipient: Address,
        amount: U256,
        fee: Option<U256>,
    },
    ValidatorSignedRedeem {
        recipient: Address,
        validator: Address,
        amount: U256,
        gas_returned: Option<U256>,
    },
    RedeemSuccessful {
        recipient: Address,
        amount: U256,
    },
    AddValidator {
        validator: Address,
        power: Option<I256>,
    },
    DeleteValidator {
        validator: Address,
    },
    NewEpoch {
        height: U256,
    },
    NewThreshold {
        previous: U256,
        threshold: U256,
    },
    ValidatorMigrated {
        validator: Address,
        new_contract: Address,
    },
}

impl From<LockRedeem::LockRedeemEvents> for BridgeEvent {
    fn from(event: LockRedeem::LockRedeemEvents) -> Self {
        use LockRedeem::LockRedeemEvents as E;
        match event {
            E::AddValidator(e) => BridgeEvent::AddValidator {
                validator: e._address,
                power: Some(e._power),
            },
            E::DeleteValidator(e) => BridgeEvent::DeleteValidator {
                validator: e._address,
            },
            E::Lock(e) => BridgeEvent::Lock {
                sender: e.sender,
                amount: e.amount_received,
            },
            E::NewEpoch(e) => BridgeEvent::NewEpoch {
                height: e.epochHeight,
            },
            E::NewThreshold(e) => BridgeEvent::NewThreshold {
                previous: e._prevThreshold,
                threshold: e._newThreshold,
            },
            E::RedeemRequest(e) => BridgeEvent::RedeemRequest {
                recipient: e.recepient,
                amount: e.amount_requested,
                fee: None,
            },
            E::ValidatorSignedRedeem(e) => BridgeEvent::ValidatorSignedRedeem {
                recipient: e.recipient,
                validator: e.validator_addresss,
                amount: e.amount,
                gas_returned: None,
            },
        }
    }
}

// V2 and Kratos emit the same event set from separate bindings.
macro_rules! impl_from_fee_events {
    ($contract:ident, $events:ident) => {
        impl From<$contract::$events> for BridgeEvent {
            fn from(event: $contract::$events) -> Self {
                use $contract::$events as E;
                match event {
                    E::AddValidator(e) => BridgeEvent::AddValidator {
                        validator: e._address,
                        power: None,
                    },
                    E::Lock(e) => BridgeEvent::Lock {
                        sender: e.sender,
                        amount: e.amount_received,
                    },
                    E::RedeemRequest(e) => BridgeEvent::RedeemRequest {
                        recipient: e.recepient,
                        amount: e.amount_requested,
                        fee: Some(e.redeemFeeCharged),
                    },
                    E::ValidatorMigrated(e) => BridgeEvent::ValidatorMigrated {
                        validator: e.validator,
                        new_contract: e.NewSmartContractAddress,
                    },
                    E::ValidatorSignedRedeem(e) => BridgeEvent::ValidatorSignedRedeem {
                        recipient: e.recipient,
                        validator: e.validator_addresss,
                        amount: e.amount,
                        gas_returned: Some(e.gasReturned),
                    },
                }
            }
        }
    };
}

impl_from_fee_events!(LockRedeemV2, LockRedeemV2Events);
impl_from_fee_events!(LockRedeemKratos, LockRedeemKratosEvents);

// Both ERC20 bridge builds emit the same event set from separate bindings.
macro_rules! impl_from_erc_events {
    ($module:ident) => {
        impl From<$module::LockRedeemERC::LockRedeemERCEvents> for BridgeEvent {
            fn from(event: $module::LockRedeemERC::LockRedeemERCEvents) -> Self {
                use $module::LockRedeemERC::LockRedeemERCEvents as E;
                match event {
                    E::AddValidator(e) => BridgeEvent::AddValidator {
                        validator: e._address,
                        power: Some(e._power),
                    },
                    E::DeleteValidator(e) => BridgeEvent::DeleteValidator {
                        validator: e._address,
                    },
                    E::NewEpoch(e) => BridgeEvent::NewEpoch {
                        height: e.epochHeight,
                    },
                    E::NewThreshold(e) => BridgeEvent::NewThreshold {
                        previous: e._prevThreshold,
                        threshold: e._newThreshold,
                    },
                    E::RedeemRequest(e) => BridgeEvent::RedeemRequest {
                        recipient: e.recepient,
                        amount: e.amount_requested,
                        fee: None,
                    },
                    E::RedeemSuccessful(e) => BridgeEvent::RedeemSuccessful {
                        recipient: e.recepient,
                        amount: e.amount_trafered,
                    },
                    E::ValidatorSignedRedeem(e) => BridgeEvent::ValidatorSignedRedeem {
                        recipient: e.recipient,
                        validator: e.validator_addresss,
                        amount: e.amount,
                        gas_returned: None,
                    },
                }
            }
        }
    };
}

impl_from_erc_events!(lock_redeem_erc);
impl_from_erc_events!(lock_redeem_erc_single);

/// Decodes any event of one bridge generation into a [`BridgeEvent`].
#[derive(Debug, Clone, Copy)]
pub struct BridgeEvents {
    kind: ContractKind,
}

impl BridgeEvents {
    /// Fails for token and migration-target kinds, which emit no bridge events.
    pub fn new(kind: ContractKind) -> Result<Self, BindingError> {
        match kind {
            ContractKind::LockRedeem
            | ContractKind::LockRedeemV2
            | ContractKind::LockRedeemKratos
            | ContractKind::LockRedeemErc
            | ContractKind::LockRedeemErcSingle => Ok(Self { kind }),
            other => Err(BindingError::UnknownEvent(format!(
                "{} emits no bridge events",
                other
            ))),
        }
    }

    pub fn kind(&self) -> ContractKind {
        self.kind
    }
}

impl LogDecoder for BridgeEvents {
    type Event = BridgeEvent;

    fn name(&self) -> String {
        format!("{} event", self.kind.contract_name())
    }

    fn topic0(&self) -> Option<B256> {
        None
    }

    fn decode(&self, log: &Log) -> Result<BridgeEvent, BindingError> {
        let inner = &log.inner;
        let decoded = match self.kind {
            ContractKind::LockRedeem => {
                LockRedeem::LockRedeemEvents::decode_log(inner).map(|l| l.data.into())
            }
            ContractKind::LockRedeemV2 => {
                LockRedeemV2::LockRedeemV2Events::decode_log(inner).map(|l| l.data.into())
            }
            ContractKind::LockRedeemKratos => {
                LockRedeemKratos::LockRedeemKratosEvents::decode_log(inner).map(|l| l.data.into())
            }
            ContractKind::LockRedeemErc => {
                lock_redeem_erc::LockRedeemERC::LockRedeemERCEvents::decode_log(inner)
                    .map(|l| l.data.into())
            }
            ContractKind::LockRedeemErcSingle => {
                lock_redeem_erc_single::LockRedeemERC::LockRedeemERCEvents::decode_log(inner)
                    .map(|l| l.data.into())
            }
            other => return Err(BindingError::UnknownEvent(other.to_string())),
        };
        decoded.map_err(|e| BindingError::log_decode(self.name(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, LogData};
    use alloy::sol_types::SolEvent;

    fn rpc_log(data: LogData) -> Log {
        Log {
            inner: alloy::primitives::Log {
                address: address!("1111111111111111111111111111111111111111"),
                data,
            },
            block_number: Some(42),
            log_index: Some(3),
            ..Default::default()
        }
    }

    #[test]
    fn test_decoded_log_keeps_position() {
        let log = rpc_log(LogData::default());
        let decoded = DecodedLog::new(7u8, &log).map(u32::from);
        assert_eq!(decoded.event, 7u32);
        assert_eq!(decoded.block_number, Some(42));
        assert_eq!(decoded.log_index, Some(3));
        assert!(!decoded.removed);
    }

    #[test]
    fn test_v2_redeem_request_carries_fee() {
        let event = LockRedeemV2::RedeemRequest {
            recepient: address!("2222222222222222222222222222222222222222"),
            amount_requested: U256::from(1_000u64),
            redeemFeeCharged: U256::from(25u64),
        };
        let decoder = BridgeEvents::new(ContractKind::LockRedeemV2).unwrap();
        let decoded = decoder.decode(&rpc_log(event.encode_log_data())).unwrap();
        assert_eq!(
            decoded,
            BridgeEvent::RedeemRequest {
                recipient: address!("2222222222222222222222222222222222222222"),
                amount: U256::from(1_000u64),
                fee: Some(U256::from(25u64)),
            }
        );
    }

    #[test]
    fn test_erc_redeem_successful() {
        let event = lock_redeem_erc::LockRedeemERC::RedeemSuccessful {
            recepient: address!("3333333333333333333333333333333333333333"),
            amount_trafered: U256::from(5u64),
        };
        let decoder = BridgeEvents::new(ContractKind::LockRedeemErc).unwrap();
        let decoded = decoder.decode(&rpc_log(event.encode_log_data())).unwrap();
        assert!(matches!(decoded, BridgeEvent::RedeemSuccessful { .. }));
    }

    #[test]
    fn test_lock_event_from_other_generation_rejected() {
        // LockRedeemERC has no Lock event
        let event = LockRedeem::Lock {
            sender: Address::ZERO,
            amount_received: U256::from(1u64),
        };
        let decoder = BridgeEvents::new(ContractKind::LockRedeemErc).unwrap();
        let err = decoder.decode(&rpc_log(event.encode_log_data())).unwrap_err();
        assert!(matches!(err, BindingError::LogDecode { .. }));
    }

    #[test]
    fn test_token_kind_has_no_bridge_events() {
        assert!(BridgeEvents::new(ContractKind::TestToken).is_err());
        assert!(BridgeEvents::new(ContractKind::LockRedeemFuture).is_err());
    }

    #[test]
    fn test_bridge_event_serializes_tagged() {
        let event = BridgeEvent::NewEpoch {
            height: U256::from(100u64),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "new_epoch");
        assert_eq!(json["height"], "0x64");
    }
}
