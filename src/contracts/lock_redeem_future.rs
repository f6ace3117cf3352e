//! Bindings for the migration target contract (`LockRedeemFuture`)
//!
//! A minimal successor that receives funds from an older deployment and
//! becomes active once enough validators have migrated.

use alloy::sol;

/// Function selectors of [`LockRedeemFuture`], keyed by hex selector.
pub static LOCK_REDEEM_FUTURE_FUNC_SIGS: &[(&str, &str)] = &[
    ("22f3e2d4", "isActive()"),
    ("287cc96b", "getTotalEthBalance()"),
    ("587ab37e", "MigrateFromOld()"),
    ("5d593f8d", "numValidators()"),
    ("cdaf4028", "getMigrationCount()"),
    ("fa52c7d8", "validators(address)"),
];

sol! {
    /// Successor contract used to test validator migration.
    #[sol(rpc, abi, all_derives, bytecode = "60806040526000805460ff1916815560326001556004819055600581905560065534801561002c57600080fd5b5060405161027f38038061027f8339818101604052604081101561004f57600080fd5b508051602090910151600380546001600160a01b0319166001600160a01b0384161781556002820204600101600555506101ef9050806100906000396000f3fe6080604052600436106100555760003560e01c806322f3e2d414610074578063287cc96b1461009d578063587ab37e146100c45780635d593f8d146100db578063cdaf4028146100f0578063fa52c7d814610105575b6005546006541461006557600080fd5b6000805460ff19166001179055005b34801561008057600080fd5b50610089610138565b604080519115158252519081900360200190f35b3480156100a957600080fd5b506100b2610141565b60408051918252519081900360200190f35b3480156100d057600080fd5b506100d9610145565b005b3480156100e757600080fd5b506100b2610170565b3480156100fc57600080fd5b506100b2610176565b34801561011157600080fd5b506100b26004803603602081101561012857600080fd5b50356001600160a01b031661017c565b60005460ff1690565b4790565b6003546001600160a01b0316331461015c57600080fd5b60068054600101905561016e3261018e565b565b60045481565b60065490565b60026020526000908152604090205481565b600180546001600160a01b0390921660009081526002602052604090209190915560048054909101905556fea265627a7a7231582039b2d24c897e3c4d7ff269aa6e0bf74e6cec4eaa3c8cc8d3e4bf746a8dd93d3f64736f6c63430005100032")]
    contract LockRedeemFuture {
        constructor(address _old_contract, uint256 noofValidatorsinold);
        fallback() external payable;

        /// Number of validators that voted for the migration.
        function getMigrationCount() external view returns (uint256);
        /// Ether held by the contract.
        function getTotalEthBalance() external view returns (uint256);
        /// Whether the migration completed and the contract accepts traffic.
        function isActive() external view returns (bool);
        /// Pull validators and funds from the previous contract.
        function MigrateFromOld() external;
        /// Number of active validators.
        function numValidators() external view returns (uint256);
        /// Validator weight for `_0`; zero for non-validators.
        function validators(address) external view returns (uint256);
    }
}
