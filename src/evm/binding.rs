//! Generic bound contract
//!
//! [`BoundContract`] drives any contract through its JSON ABI: calls,
//! transactions, deployment and log filtering. Arguments are type-checked
//! against the ABI while encoding, so a wrong count or type fails before a
//! request is sent.
//!
//! The typed `sol!` instances in [`crate::contracts`] cover the same ground
//! with compile-time types; this client is the runtime-parameterised form.

use alloy::{
    dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt, Specifier},
    json_abi::{Event, Function, JsonAbi, Param},
    network::{Ethereum, TransactionBuilder},
    primitives::{Address, Bytes, TxHash},
    providers::{PendingTransactionBuilder, Provider},
    rpc::types::{Filter, Log, TransactionRequest},
};
use tracing::{debug, info};

use crate::artifacts::ContractKind;
use crate::error::BindingError;
use crate::evm::client::{CallOpts, TransactOpts};
use crate::evm::iterator::{EventIterator, LogDecoder};
use crate::evm::watcher::{LogWatcher, WatcherConfig};

/// A contract address bound to an ABI and a provider.
#[derive(Debug, Clone)]
pub struct BoundContract<P> {
    address: Address,
    abi: JsonAbi,
    provider: P,
}

impl<P> BoundContract<P> {
    pub fn new(address: Address, abi: JsonAbi, provider: P) -> Self {
        Self {
            address,
            abi,
            provider,
        }
    }

    pub fn from_kind(address: Address, kind: ContractKind, provider: P) -> Self {
        Self::new(address, kind.abi(), provider)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Same binding at another address.
    pub fn at(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    // =========================================================================
    // Offline encoding
    // =========================================================================

    /// Look up a function by name. Overloads resolve to the first declaration.
    pub fn function(&self, name: &str) -> Result<&Function, BindingError> {
        self.abi
            .function(name)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| BindingError::UnknownFunction(name.to_string()))
    }

    pub fn event(&self, name: &str) -> Result<&Event, BindingError> {
        self.abi
            .event(name)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| BindingError::UnknownEvent(name.to_string()))
    }

    /// Selector-prefixed calldata for `name(args)`.
    pub fn encode_call(&self, name: &str, args: &[DynSolValue]) -> Result<Bytes, BindingError> {
        let function = self.function(name)?;
        Ok(function.abi_encode_input(args)?.into())
    }

    pub fn decode_output(
        &self,
        name: &str,
        data: &[u8],
    ) -> Result<Vec<DynSolValue>, BindingError> {
        Ok(self.function(name)?.abi_decode_output(data)?)
    }

    /// Find the function a piece of calldata targets and decode its arguments.
    pub fn decode_input(
        &self,
        data: &[u8],
    ) -> Result<(&Function, Vec<DynSolValue>), BindingError> {
        let selector: [u8; 4] = data
            .get(..4)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(|| BindingError::UnknownSelector(hex::encode(data)))?;

        let function = self
            .abi
            .functions()
            .find(|f| f.selector().0 == selector)
            .ok_or_else(|| BindingError::UnknownSelector(hex::encode(selector)))?;

        let args = function.abi_decode_input(&data[4..])?;
        Ok((function, args))
    }

    /// Decode a log against whichever ABI event matches its topic 0.
    pub fn decode_log(
        &self,
        log: &Log,
    ) -> Result<(&Event, alloy::dyn_abi::DecodedEvent), BindingError> {
        let topic0 = log
            .topic0()
            .ok_or_else(|| BindingError::UnknownEvent("log without topics".to_string()))?;
        let event = self
            .abi
            .events()
            .find(|e| !e.anonymous && e.selector() == *topic0)
            .ok_or_else(|| BindingError::UnknownEvent(topic0.to_string()))?;
        let decoded = LogDecoder::decode(event, log)?;
        Ok((event, decoded))
    }

    /// Topic filter for a named event at this address.
    pub fn event_filter(&self, name: &str) -> Result<Filter, BindingError> {
        let event = self.event(name)?;
        Ok(Filter::new()
            .address(self.address)
            .event_signature(event.selector()))
    }
}

impl<P: Provider + Clone + 'static> BoundContract<P> {
    /// Invoke a read-only function and decode its outputs.
    pub async fn call(
        &self,
        name: &str,
        args: &[DynSolValue],
        opts: &CallOpts,
    ) -> Result<Vec<DynSolValue>, BindingError> {
        let data = self.encode_call(name, args)?;
        let raw = self.call_raw(data, opts).await?;
        debug!(
            contract = %self.address,
            function = name,
            bytes = raw.len(),
            "Call returned"
        );
        self.decode_output(name, &raw)
    }

    pub async fn call_raw(&self, data: Bytes, opts: &CallOpts) -> Result<Bytes, BindingError> {
        let mut tx = TransactionRequest::default()
            .with_to(self.address)
            .with_input(data);
        if let Some(from) = opts.from {
            tx = tx.with_from(from);
        }
        Ok(self.provider.call(tx).block(opts.block_id()).await?)
    }

    /// Submit a state-changing invocation.
    pub async fn transact(
        &self,
        name: &str,
        args: &[DynSolValue],
        opts: &TransactOpts,
    ) -> Result<PendingTransactionBuilder<Ethereum>, BindingError> {
        let data = self.encode_call(name, args)?;
        let tx = opts.apply(
            TransactionRequest::default()
                .with_to(self.address)
                .with_input(data),
        );
        let pending = self.provider.send_transaction(tx).await?;
        info!(
            contract = %self.address,
            function = name,
            tx_hash = %pending.tx_hash(),
            "Transaction submitted"
        );
        Ok(pending)
    }

    /// Send plain ether to the contract, hitting its fallback function.
    pub async fn transfer(
        &self,
        opts: &TransactOpts,
    ) -> Result<PendingTransactionBuilder<Ethereum>, BindingError> {
        let tx = opts.apply(TransactionRequest::default().with_to(self.address));
        let pending = self.provider.send_transaction(tx).await?;
        info!(
            contract = %self.address,
            value = ?opts.value,
            tx_hash = %pending.tx_hash(),
            "Transfer submitted"
        );
        Ok(pending)
    }

    /// Historical logs of one event, decoded against the ABI.
    pub fn filter_logs(
        &self,
        event: &str,
        from_block: u64,
        to_block: Option<u64>,
        config: WatcherConfig,
    ) -> Result<EventIterator<Event>, BindingError> {
        let decoder = self.event(event)?.clone();
        let watcher = LogWatcher::with_config(self.provider.clone(), config);
        Ok(watcher.filter(self.address, decoder, from_block, to_block))
    }

    /// Follow new logs of one event until the iterator is closed.
    pub fn watch_logs(
        &self,
        event: &str,
        from_block: Option<u64>,
        config: WatcherConfig,
    ) -> Result<EventIterator<Event>, BindingError> {
        let decoder = self.event(event)?.clone();
        let watcher = LogWatcher::with_config(self.provider.clone(), config);
        Ok(watcher.watch(self.address, decoder, from_block))
    }
}

/// Parse textual arguments (as typed on a command line) into ABI values.
pub fn coerce_args(params: &[Param], args: &[String]) -> Result<Vec<DynSolValue>, BindingError> {
    if params.len() != args.len() {
        return Err(alloy::dyn_abi::Error::EncodeLengthMismatch {
            expected: params.len(),
            actual: args.len(),
        }
        .into());
    }
    params
        .iter()
        .zip(args)
        .map(|(param, arg)| Ok(param.resolve()?.coerce_str(arg)?))
        .collect()
}

/// Creation code with ABI-encoded constructor arguments appended.
pub fn deploy_code(
    abi: &JsonAbi,
    bytecode: &[u8],
    args: &[DynSolValue],
) -> Result<Bytes, BindingError> {
    if bytecode.is_empty() {
        return Err(BindingError::MissingBytecode("empty creation code".to_string()));
    }

    let encoded_args = match abi.constructor() {
        Some(constructor) => constructor.abi_encode_input(args)?,
        None if args.is_empty() => Vec::new(),
        None => return Err(BindingError::MissingConstructor(args.len())),
    };

    let mut code = Vec::with_capacity(bytecode.len() + encoded_args.len());
    code.extend_from_slice(bytecode);
    code.extend_from_slice(&encoded_args);
    Ok(code.into())
}

/// Deploy creation code and bind the resulting contract.
///
/// Constructor arguments are checked before anything is sent.
pub async fn deploy<P: Provider + Clone + 'static>(
    provider: P,
    abi: JsonAbi,
    bytecode: &[u8],
    args: &[DynSolValue],
    opts: &TransactOpts,
) -> Result<(BoundContract<P>, TxHash), BindingError> {
    let code = deploy_code(&abi, bytecode, args)?;
    let tx = opts.apply(TransactionRequest::default().with_deploy_code(code));

    let pending = provider.send_transaction(tx).await?;
    let tx_hash = *pending.tx_hash();
    debug!(tx_hash = %tx_hash, "Deployment submitted");

    let receipt = pending.get_receipt().await?;
    if !receipt.status() {
        return Err(BindingError::Reverted(tx_hash));
    }
    let address = receipt
        .contract_address
        .ok_or(BindingError::NoContractAddress(tx_hash))?;

    info!(address = %address, tx_hash = %tx_hash, "Contract deployed");
    Ok((BoundContract::new(address, abi, provider), tx_hash))
}

/// Deploy one of the known artifacts.
pub async fn deploy_kind<P: Provider + Clone + 'static>(
    provider: P,
    kind: ContractKind,
    args: &[DynSolValue],
    opts: &TransactOpts,
) -> Result<(BoundContract<P>, TxHash), BindingError> {
    let bytecode = kind
        .bytecode()
        .ok_or_else(|| BindingError::MissingBytecode(kind.to_string()))?;
    deploy(provider, kind.abi(), &bytecode, args, opts).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;

    fn unbound(kind: ContractKind) -> BoundContract<()> {
        BoundContract::from_kind(Address::repeat_byte(0x42), kind, ())
    }

    #[test]
    fn test_encode_call_prefixes_selector() {
        let bridge = unbound(ContractKind::LockRedeem);
        let data = bridge.encode_call("lock", &[]).unwrap();
        assert_eq!(data.as_ref(), &[0xf8, 0x3d, 0x08, 0xba]);

        let data = bridge
            .encode_call("redeem", &[DynSolValue::Uint(U256::from(5u64), 256)])
            .unwrap();
        assert_eq!(data.len(), 4 + 32);
        assert_eq!(&data[..4], &[0xdb, 0x00, 0x6a, 0x75]);
    }

    #[test]
    fn test_unknown_function() {
        let bridge = unbound(ContractKind::LockRedeemErc);
        // the ERC20 bridge locks through token transfers
        let err = bridge.encode_call("lock", &[]).unwrap_err();
        assert!(matches!(err, BindingError::UnknownFunction(name) if name == "lock"));
    }

    #[test]
    fn test_decode_input_by_selector() {
        let bridge = unbound(ContractKind::LockRedeemV2);
        let recipient = Address::repeat_byte(0x07);
        let data = bridge
            .encode_call(
                "sign",
                &[
                    DynSolValue::Uint(U256::from(100u64), 256),
                    DynSolValue::Address(recipient),
                ],
            )
            .unwrap();

        let (function, args) = bridge.decode_input(&data).unwrap();
        assert_eq!(function.name, "sign");
        assert_eq!(args[1].as_address(), Some(recipient));

        assert!(bridge.decode_input(&[0xde, 0xad]).is_err());
        assert!(bridge.decode_input(&[0xde, 0xad, 0xbe, 0xef]).is_err());
    }

    #[test]
    fn test_coerce_constructor_args() {
        let abi = ContractKind::LockRedeemKratos.abi();
        let params = &abi.constructor().unwrap().inputs;
        let args: Vec<String> = [
            "[0x1111111111111111111111111111111111111111]",
            "86400",
            "0x2222222222222222222222222222222222222222",
            "3",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let values = coerce_args(params, &args).unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(values[1].as_uint().unwrap().0, U256::from(86_400u64));

        assert!(coerce_args(params, &args[..2]).is_err());
        let mut bad = args.clone();
        bad[1] = "not-a-number".to_string();
        assert!(coerce_args(params, &bad).is_err());
    }

    #[test]
    fn test_event_filter_topic() {
        let bridge = unbound(ContractKind::LockRedeem);
        let filter = bridge.event_filter("Lock").unwrap();
        assert!(filter
            .topics[0]
            .matches(&crate::selectors::event_topic("Lock(address,uint256)")));
        assert!(bridge.event_filter("Transfer").is_err());
    }
}
