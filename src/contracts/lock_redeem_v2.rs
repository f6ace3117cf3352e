//! Bindings for the second-generation ether bridge contract (`LockRedeemV2`)
//!
//! Adds a lock period to redeems, per-redeem fees paid back to signing
//! validators, and a validator-voted migration path to a successor contract.
//! Validators are imported from the previous deployment via `MigrateFromOld`.

use alloy::sol;

/// Function selectors of [`LockRedeemV2`], keyed by hex selector.
pub static LOCK_REDEEM_V2_FUNC_SIGS: &[(&str, &str)] = &[
    ("2138c6b9", "isredeemAvailable(address)"),
    ("27882c3a", "migrationSignatures()"),
    ("287cc96b", "getTotalEthBalance()"),
    ("31b6a6d1", "hasValidatorSigned(address)"),
    ("45dfa415", "getOLTEthAddress()"),
    ("587ab37e", "MigrateFromOld()"),
    ("5d593f8d", "numValidators()"),
    ("6c7d13df", "getSignatureCount(address)"),
    ("7cacde3f", "sign(uint256,address)"),
    ("7edd7ccd", "collectUserFee()"),
    ("91e39868", "verifyRedeem(address)"),
    ("a04d0498", "migrationSigners(address)"),
    ("bbe4fb7d", "verifyValidator()"),
    ("cdaf4028", "getMigrationCount()"),
    ("ce5494bb", "migrate(address)"),
    ("db006a75", "redeem(uint256)"),
    ("e75f7515", "getRedeemBalance(address)"),
    ("f83d08ba", "lock()"),
    ("fa52c7d8", "validators(address)"),
    ("facd743b", "isValidator(address)"),
];

sol! {
    /// Ether lock/redeem contract with redeem fees and migration voting.
    #[sol(rpc, abi, all_derives, bytecode = "60806040526000805460ff19168155615a9860065561933c600755662386f26fc100006008556001600955612710600a55601281905560135534801561004457600080fd5b506040516114423803806114428339818101604052606081101561006757600080fd5b5080516020820151604090920151600f91909155600160036002830281900482016004819055920401600555601180546001600160a01b039093166001600160a01b03199093169290921790915560125561137b806100c76000396000f3fe60806040526004361061011f5760003560e01c806391e39868116100a0578063db006a7511610064578063db006a75146103ae578063e75f7515146103cb578063f83d08ba146103fe578063fa52c7d814610406578063facd743b1461044f5761011f565b806391e39868146102d2578063a04d04981461031e578063bbe4fb7d14610351578063cdaf402814610366578063ce5494bb1461037b5761011f565b8063587ab37e116100e7578063587ab37e146102255780635d593f8d1461023c5780636c7d13df146102515780637cacde3f146102845780637edd7ccd146102bd5761011f565b80632138c6b91461013e57806327882c3a14610185578063287cc96b146101ac57806331b6a6d1146101c157806345dfa415146101f4575b6012546013541461012f57600080fd5b6000805460ff19166001179055005b34801561014a57600080fd5b506101716004803603602081101561016157600080fd5b50356001600160a01b0316610482565b604080519115158252519081900360200190f35b34801561019157600080fd5b5061019a6104b3565b60408051918252519081900360200190f35b3480156101b857600080fd5b5061019a6104b9565b3480156101cd57600080fd5b50610171600480360360208110156101e457600080fd5b50356001600160a01b03166104bd565b34801561020057600080fd5b50610209610508565b604080516001600160a01b039092168252519081900360200190f35b34801561023157600080fd5b5061023a61050c565b005b34801561024857600080fd5b5061019a610537565b34801561025d57600080fd5b5061019a6004803603602081101561027457600080fd5b50356001600160a01b031661053d565b34801561029057600080fd5b5061023a600480360360408110156102a757600080fd5b50803590602001356001600160a01b031661056c565b3480156102c957600080fd5b5061023a6109dd565b3480156102de57600080fd5b50610305600480360360208110156102f557600080fd5b50356001600160a01b0316610ad8565b60408051600092830b90920b8252519081900360200190f35b34801561032a57600080fd5b506101716004803603602081101561034157600080fd5b50356001600160a01b0316610b91565b34801561035d57600080fd5b50610171610ba6565b34801561037257600080fd5b5061019a610bb6565b34801561038757600080fd5b5061023a6004803603602081101561039e57600080fd5b50356001600160a01b0316610bbc565b61023a600480360360208110156103c457600080fd5b5035610fc5565b3480156103d757600080fd5b5061019a600480360360208110156103ee57600080fd5b50356001600160a01b031661116f565b61023a61119e565b34801561041257600080fd5b506104396004803603602081101561042957600080fd5b50356001600160a01b03166111e9565b6040805160ff9092168252519081900360200190f35b34801561045b57600080fd5b506101716004803603602081101561047257600080fd5b50356001600160a01b03166111fe565b6000805460ff1661049257600080fd5b506001600160a01b0316600090815260106020526040902060040154431190565b600b5481565b4790565b6000805460ff166104cd57600080fd5b336000908152600260208181526040808420546001600160a01b03871685526010909252909220600190810154909260ff161c061492915050565b3090565b6011546001600160a01b0316331461052357600080fd5b6013805460010190556105353261121e565b565b60015481565b6000805460ff1661054d57600080fd5b506001600160a01b031660009081526010602052604090206003015490565b60005460ff1661057b57600080fd5b610584336111fe565b6105d5576040805162461bcd60e51b815260206004820152601d60248201527f76616c696461746f72206e6f742070726573656e7420696e204c697374000000604482015290519081900360640190fd5b60005a90506105e3336111fe565b610634576040805162461bcd60e51b815260206004820152601d60248201527f76616c696461746f72206e6f742070726573656e7420696e206c697374000000604482015290519081900360640190fd5b6001600160a01b03821660009081526010602052604090206004015443106106a3576040805162461bcd60e51b815260206004820152601f60248201527f72656465656d2072657175657374206973206e6f7420617661696c61626c6500604482015290519081900360640190fd5b6001600160a01b0382166000908152601060205260409020600201548314610712576040805162461bcd60e51b815260206004820152601a60248201527f72656465656d20616d6f756e7420697320646966666572656e74000000000000604482015290519081900360640190fd5b336000908152600260208181526040808420546001600160a01b0387168552601090925283206001015460ff9091161c0614610795576040805162461bcd60e51b815260206004820152601b60248201527f76616c696461746f722068617320616c726561647920766f7465640000000000604482015290519081900360640190fd5b336000908152600260209081526040808320546001600160a01b038616845260109092529091206001808201805460ff90941682901b909301909255600301805490910190819055600454116108bc576001600160a01b0380831660009081526010602052604080822080546002909101549151929316918381818185875af1925050503d8060008114610845576040519150601f19603f3d011682016040523d82523d6000602084013e61084a565b606091505b5050905080610893576040805162461bcd60e51b815260206004820152601060248201526f2a3930b739b332b9103330b4b632b21760811b604482015290519081900360640190fd5b506001600160a01b03821660009081526010602052604081206002810191909155436004909101555b60006007546006545a8403010190506000600954600a54023a83020190506000336001600160a01b03168260405180600001905060006040518083038185875af1925050503d806000811461092d576040519150601f19603f3d011682016040523d82523d6000602084013e610932565b606091505b50509050806109725760405162461bcd60e51b81526004018080602001828103825260218152602001806113266021913960400191505060405180910390fd5b6001600160a01b03851660008181526010602090815260409182902060050180548690039055815133815290810189905280820185905290517f975a8b0f36f1204c7939f566cea0503ea32284a2768a7f98ede91960b6d158309181900360600190a2505050505050565b60005460ff166109ec57600080fd5b60006109f733610ad8565b60000b13610a365760405162461bcd60e51b81526004018080602001828103825260248152602001806112d76024913960400191505060405180910390fd5b336000818152601060205260408082206005015490519192918381818185875af1925050503d8060008114610a87576040519150601f19603f3d011682016040523d82523d6000602084013e610a8c565b606091505b5050905080610ad5576040805162461bcd60e51b815260206004820152601060248201526f2a3930b739b332b9103330b4b632b21760811b604482015290519081900360640190fd5b50565b6000805460ff16610ae857600080fd5b6001600160a01b03821660009081526010602052604090206004015415801590610b2c57506001600160a01b03821660009081526010602052604090206004015443115b610b61576001600160a01b03821660009081526010602052604090206002015415610b58576000610b5c565b6000195b610b8b565b6001600160a01b038216600090815260106020526040902060020154610b88576001610b8b565b60025b92915050565b600c6020526000908152604090205460ff1681565b6000610bb1336111fe565b905090565b60135490565b610bc5336111fe565b610c16576040805162461bcd60e51b815260206004820152601d60248201527f76616c696461746f72206e6f742070726573656e7420696e204c697374000000604482015290519081900360640190fd5b336000908152600c602052604090205460ff1615610c7b576040805162461bcd60e51b815260206004820152601860248201527f56616c696461746f72205369676e656420616c72656164790000000000000000604482015290519081900360640190fd5b336000908152600c60209081526040808320805460ff1916600117905580516f4d69677261746546726f6d4f6c64282960801b815281519081900360100181206001600160e01b031916818401528151808203600401815260249091019182905280516001600160a01b038616939192918291908401908083835b60208310610d155780518252601f199092019160209182019101610cf6565b6001836020036101000a0380198251168184511680821785525050505050509050019150506000604051808303816000865af19150503d8060008114610d77576040519150601f19603f3d011682016040523d82523d6000602084013e610d7c565b606091505b5050905080610dbc5760405162461bcd60e51b81526004018080602001828103825260248152602001806112b36024913960400191505060405180910390fd5b600b805460010190556001600160a01b0382166000908152600d6020526040902054610e2e57600e80546001810182556000919091527fbb7b4a454dc3493923482f07822329ed19e8244eff582cc204f8554c3620c3fd0180546001600160a01b0319166001600160a01b0384161790555b6001600160a01b0382166000908152600d6020526040902080546001019055600554600b541415610e64576000805460ff191690555b600454600b541415610fc157600080805b600e54811015610f245782600d6000600e8481548110610e9157fe5b60009182526020808320909101546001600160a01b031683528201929092526040019020541115610f1c57600d6000600e8381548110610ecd57fe5b60009182526020808320909101546001600160a01b03168352820192909252604001902054600e80549194509082908110610f0457fe5b6000918252602090912001546001600160a01b031691505b600101610e75565b506040516000906001600160a01b0383169047908381818185875af1925050503d8060008114610f70576040519150601f19603f3d011682016040523d82523d6000602084013e610f75565b606091505b5050905080610fbd576040805162461bcd60e51b815260206004820152600f60248201526e151c985b9cd9995c8819985a5b1959608a1b604482015290519081900360640190fd5b5050505b5050565b60005460ff16610fd457600080fd5b610fdd33610482565b6110185760405162461bcd60e51b815260040180806020018281038252602b8152602001806112fb602b913960400191505060405180910390fd5b6000811161106d576040805162461bcd60e51b815260206004820152601e60248201527f616d6f756e742073686f756c6420626520626967676572207468616e20300000604482015290519081900360640190fd5b60085433600090815260106020526040902060050154340110156110d8576040805162461bcd60e51b815260206004820152601760248201527f52656465656d20666565206e6f742070726f7669646564000000000000000000604482015290519081900360640190fd5b3360008181526010602090815260408083206003810184905580546001600160a01b03191690941780855560028501869055600f544301600486015560058501805434019081905560019095019390935580518581529182019390935282516001600160a01b03909216927feee07ebdabc7ab1dc20be39b715e23aa8a85c6a8ae3c16f8334dace8d76683dc92918290030190a250565b6000805460ff1661117f57600080fd5b506001600160a01b031660009081526010602052604090206005015490565b60005460ff166111ad57600080fd5b6040805133815234602082015281517f625fed9875dada8643f2418b838ae0bc78d9a148a18eee4ee1979ff0f3f5d427929181900390910190a1565b60026020526000908152604090205460ff1681565b6001600160a01b031660009081526002602052604090205460ff16151590565b600380546001810182557fc2575a0e9e593c00f959f8c92f12db2869c3395a3b0502d05e2516446f71f85b0180546001600160a01b0319166001600160a01b0384169081179091559054600082815260026020526040808220805460ff191660ff9094169390931790925590517f6a7a7b9e5967ba1cf76c3d7d5a9b98e96f11754855b04564fada97b94741ad369190a25056fe556e61626c6520746f204d696772617465206e657720536d61727420636f6e747261637472657175657374207369676e696e67206973207374696c6c20696e2070726f677265737372656465656d20746f20746869732061646472657373206973206e6f7420617661696c61626c65207965745472616e73666572206261636b20746f2076616c696461746f72206661696c6564a265627a7a72315820cb99766138b344bb5320f03c8bfd454dbcd5c056d7315f305f11ccd15dd53a3f64736f6c63430005100032")]
    contract LockRedeemV2 {
        /// A validator joined the set.
        event AddValidator(address indexed _address);
        /// Ether was locked.
        event Lock(address sender, uint256 amount_received);
        /// A redeem was opened.
        event RedeemRequest(address indexed recepient, uint256 amount_requested, uint256 redeemFeeCharged);
        /// A validator voted to migrate.
        event ValidatorMigrated(address validator, address NewSmartContractAddress);
        /// A validator signed a pending redeem.
        event ValidatorSignedRedeem(address indexed recipient, address validator_addresss, uint256 amount, uint256 gasReturned);

        constructor(uint256 _lock_period, address _old_contract, uint256 noofValidatorsinold);
        fallback() external payable;

        /// Withdraw the redeem fees accrued for the calling validator.
        function collectUserFee() external;
        /// Number of validators that voted for the migration.
        function getMigrationCount() external view returns (uint256);
        /// Address of the contract itself.
        function getOLTEthAddress() external view returns (address);
        /// Amount of the pending redeem for `recipient_`.
        function getRedeemBalance(address recipient_) external view returns (uint256);
        /// Validator signatures collected for the redeem of `recipient_`.
        function getSignatureCount(address recipient_) external view returns (uint256);
        /// Ether held by the contract.
        function getTotalEthBalance() external view returns (uint256);
        /// Whether the calling validator has signed the redeem of `recipient_`.
        function hasValidatorSigned(address recipient_) external view returns (bool);
        /// Whether `recepient_` may open a new redeem.
        function isredeemAvailable(address recepient_) external view returns (bool);
        /// Whether `addr` is a current validator.
        function isValidator(address addr) external view returns (bool);
        /// Lock the attached ether on this chain.
        function lock() external payable;
        /// Validator vote to migrate funds to `newSmartContractAddress`.
        function migrate(address newSmartContractAddress) external;
        /// Pull validators and funds from the previous contract.
        function MigrateFromOld() external;
        /// Number of migration votes collected.
        function migrationSignatures() external view returns (uint256);
        /// Whether `_0` already voted for the migration.
        function migrationSigners(address) external view returns (bool);
        /// Number of active validators.
        function numValidators() external view returns (uint256);
        /// Open a redeem request for the caller.
        function redeem(uint256 amount_) external payable;
        /// Validator signature approving a redeem of `amount_` to `recipient_`.
        function sign(uint256 amount_, address recipient_) external;
        /// Validator weight for `_0`; zero for non-validators.
        function validators(address) external view returns (uint8);
        /// Redeem status for `recipient_`.
        function verifyRedeem(address recipient_) external view returns (int8);
        /// Whether the caller is a validator.
        function verifyValidator() external view returns (bool);
    }
}
