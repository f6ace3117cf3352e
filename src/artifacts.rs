//! Registry of bound contract artifacts
//!
//! Lets tooling pick a contract by name at runtime and get at its ABI,
//! creation bytecode and selector table without naming the `sol!` module.

use std::fmt;
use std::str::FromStr;

use alloy::json_abi::JsonAbi;
use alloy::primitives::Bytes;

use crate::contracts::{
    lock_redeem, lock_redeem_erc, lock_redeem_erc_single, lock_redeem_future, lock_redeem_kratos,
    lock_redeem_v2, test_token,
};
use crate::error::BindingError;
use crate::selectors::{function_selector, parse_selector, selector_hex};

/// Every contract artifact bound by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKind {
    LockRedeem,
    LockRedeemV2,
    LockRedeemKratos,
    LockRedeemFuture,
    LockRedeemErc,
    Erc20,
    Ierc20,
    LockRedeemErcSingle,
    Erc20BasicSingle,
    TestToken,
}

impl ContractKind {
    pub const ALL: [ContractKind; 10] = [
        ContractKind::LockRedeem,
        ContractKind::LockRedeemV2,
        ContractKind::LockRedeemKratos,
        ContractKind::LockRedeemFuture,
        ContractKind::LockRedeemErc,
        ContractKind::Erc20,
        ContractKind::Ierc20,
        ContractKind::LockRedeemErcSingle,
        ContractKind::Erc20BasicSingle,
        ContractKind::TestToken,
    ];

    /// Stable identifier, used on the command line and in config.
    pub fn id(&self) -> &'static str {
        match self {
            ContractKind::LockRedeem => "lock_redeem",
            ContractKind::LockRedeemV2 => "lock_redeem_v2",
            ContractKind::LockRedeemKratos => "lock_redeem_kratos",
            ContractKind::LockRedeemFuture => "lock_redeem_future",
            ContractKind::LockRedeemErc => "lock_redeem_erc",
            ContractKind::Erc20 => "erc20",
            ContractKind::Ierc20 => "ierc20",
            ContractKind::LockRedeemErcSingle => "lock_redeem_erc_single",
            ContractKind::Erc20BasicSingle => "erc20_basic_single",
            ContractKind::TestToken => "test_token",
        }
    }

    /// Solidity contract name as compiled.
    pub fn contract_name(&self) -> &'static str {
        match self {
            ContractKind::LockRedeem => "LockRedeem",
            ContractKind::LockRedeemV2 => "LockRedeemV2",
            ContractKind::LockRedeemKratos => "LockRedeemKratos",
            ContractKind::LockRedeemFuture => "LockRedeemFuture",
            ContractKind::LockRedeemErc | ContractKind::LockRedeemErcSingle => "LockRedeemERC",
            ContractKind::Erc20 => "ERC20",
            ContractKind::Ierc20 => "IERC20",
            ContractKind::Erc20BasicSingle | ContractKind::TestToken => "ERC20Basic",
        }
    }

    /// JSON ABI of the artifact.
    pub fn abi(&self) -> JsonAbi {
        match self {
            ContractKind::LockRedeem => lock_redeem::LockRedeem::abi::contract(),
            ContractKind::LockRedeemV2 => lock_redeem_v2::LockRedeemV2::abi::contract(),
            ContractKind::LockRedeemKratos => lock_redeem_kratos::LockRedeemKratos::abi::contract(),
            ContractKind::LockRedeemFuture => lock_redeem_future::LockRedeemFuture::abi::contract(),
            ContractKind::LockRedeemErc => lock_redeem_erc::LockRedeemERC::abi::contract(),
            ContractKind::Erc20 => lock_redeem_erc::ERC20::abi::contract(),
            ContractKind::Ierc20 => lock_redeem_erc::IERC20::abi::contract(),
            ContractKind::LockRedeemErcSingle => {
                lock_redeem_erc_single::LockRedeemERC::abi::contract()
            }
            ContractKind::Erc20BasicSingle => lock_redeem_erc_single::ERC20Basic::abi::contract(),
            ContractKind::TestToken => test_token::ERC20Basic::abi::contract(),
        }
    }

    /// Creation bytecode; `None` for interfaces.
    pub fn bytecode(&self) -> Option<Bytes> {
        let code = match self {
            ContractKind::LockRedeem => &lock_redeem::LockRedeem::BYTECODE,
            ContractKind::LockRedeemV2 => &lock_redeem_v2::LockRedeemV2::BYTECODE,
            ContractKind::LockRedeemKratos => &lock_redeem_kratos::LockRedeemKratos::BYTECODE,
            ContractKind::LockRedeemFuture => &lock_redeem_future::LockRedeemFuture::BYTECODE,
            ContractKind::LockRedeemErc => &lock_redeem_erc::LockRedeemERC::BYTECODE,
            ContractKind::Erc20 => &lock_redeem_erc::ERC20::BYTECODE,
            ContractKind::Ierc20 => return None,
            ContractKind::LockRedeemErcSingle => &lock_redeem_erc_single::LockRedeemERC::BYTECODE,
            ContractKind::Erc20BasicSingle => &lock_redeem_erc_single::ERC20Basic::BYTECODE,
            ContractKind::TestToken => &test_token::ERC20Basic::BYTECODE,
        };
        Some(code.clone())
    }

    /// Static selector table, sorted by selector.
    pub fn func_sigs(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ContractKind::LockRedeem => lock_redeem::LOCK_REDEEM_FUNC_SIGS,
            ContractKind::LockRedeemV2 => lock_redeem_v2::LOCK_REDEEM_V2_FUNC_SIGS,
            ContractKind::LockRedeemKratos => lock_redeem_kratos::LOCK_REDEEM_KRATOS_FUNC_SIGS,
            ContractKind::LockRedeemFuture => lock_redeem_future::LOCK_REDEEM_FUTURE_FUNC_SIGS,
            ContractKind::LockRedeemErc => lock_redeem_erc::LOCK_REDEEM_ERC_FUNC_SIGS,
            ContractKind::Erc20 => lock_redeem_erc::ERC20_FUNC_SIGS,
            ContractKind::Ierc20 => lock_redeem_erc::IERC20_FUNC_SIGS,
            ContractKind::LockRedeemErcSingle => lock_redeem_erc_single::LOCK_REDEEM_ERC_FUNC_SIGS,
            ContractKind::Erc20BasicSingle => lock_redeem_erc_single::ERC20_BASIC_FUNC_SIGS,
            ContractKind::TestToken => test_token::ERC20_BASIC_FUNC_SIGS,
        }
    }

    /// Check the static selector table against the ABI.
    ///
    /// Every entry must hash to its selector and name an ABI function, and
    /// every ABI function must have an entry.
    pub fn verify_func_sigs(&self) -> Result<(), BindingError> {
        let abi = self.abi();
        let table = self.func_sigs();

        for (selector, signature) in table {
            let expected = parse_selector(selector)?;
            if function_selector(signature) != expected {
                return Err(BindingError::UnknownSelector(format!(
                    "{selector} does not hash from {signature}"
                )));
            }
            if !abi.functions().any(|f| f.signature() == *signature) {
                return Err(BindingError::UnknownFunction(format!(
                    "{signature} not in {} ABI",
                    self.contract_name()
                )));
            }
        }

        for function in abi.functions() {
            let key = selector_hex(function.selector().0);
            if !table.iter().any(|(selector, _)| *selector == key) {
                return Err(BindingError::UnknownSelector(format!(
                    "{key} ({}) missing from {} table",
                    function.signature(),
                    self.id()
                )));
            }
        }

        Ok(())
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ContractKind {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ContractKind::ALL
            .into_iter()
            .find(|kind| kind.id() == normalized || kind.id().replace('_', "") == normalized)
            .ok_or_else(|| BindingError::UnknownContract(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip_through_id() {
        for kind in ContractKind::ALL {
            assert_eq!(kind.id().parse::<ContractKind>().unwrap(), kind);
        }
        assert_eq!(
            "Lock-Redeem-V2".parse::<ContractKind>().unwrap(),
            ContractKind::LockRedeemV2
        );
        assert_eq!(
            "LockRedeemErcSingle".parse::<ContractKind>().unwrap(),
            ContractKind::LockRedeemErcSingle
        );
        assert!("lock_redeem_v3".parse::<ContractKind>().is_err());
    }

    #[test]
    fn test_only_interface_lacks_bytecode() {
        for kind in ContractKind::ALL {
            assert_eq!(kind.bytecode().is_none(), kind == ContractKind::Ierc20, "{kind}");
        }
    }

    #[test]
    fn test_abi_constructor_presence() {
        assert!(ContractKind::LockRedeem.abi().constructor().is_some());
        assert!(ContractKind::Ierc20.abi().constructor().is_none());
        assert!(ContractKind::LockRedeemFuture.abi().fallback.is_some());
        assert!(ContractKind::LockRedeem.abi().fallback.is_none());
    }

    #[test]
    fn test_func_sigs_sorted() {
        for kind in ContractKind::ALL {
            let table = kind.func_sigs();
            assert!(
                table.windows(2).all(|w| w[0].0 < w[1].0),
                "{kind} table not sorted"
            );
        }
    }
}
