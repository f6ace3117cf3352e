//! Bindings for the Kratos release of the ether bridge contract
//!
//! Same surface as [`LockRedeemV2`](super::lock_redeem_v2::LockRedeemV2) except
//! that the initial validator set is passed to the constructor and the
//! contract reports whether it is still active.

use alloy::sol;

/// Function selectors of [`LockRedeemKratos`], keyed by hex selector.
pub static LOCK_REDEEM_KRATOS_FUNC_SIGS: &[(&str, &str)] = &[
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
    ("ce5494bb", "migrate(address)"),
    ("db006a75", "redeem(uint256)"),
    ("e75f7515", "getRedeemBalance(address)"),
    ("f83d08ba", "lock()"),
    ("f95d2f57", "ActiveStatus()"),
    ("fa52c7d8", "validators(address)"),
    ("facd743b", "isValidator(address)"),
];

sol! {
    /// Ether lock/redeem contract deployed for the Kratos network.
    #[sol(rpc, abi, all_derives, bytecode = "60806040526000805460ff19168155615a9860065561933c600755662386f26fc100006008556001600955612710600a5560118190556012553480156200004557600080fd5b506040516200159738038062001597833981810160405260808110156200006b57600080fd5b81019080805160405193929190846401000000008211156200008c57600080fd5b908301906020820185811115620000a257600080fd5b8251866020820283011164010000000082111715620000c057600080fd5b82525081516020918201928201910280838360005b83811015620000ef578181015183820152602001620000d5565b50505050919091016040908152602083015190830151606090930151909450919250620001199050565b60005b8451811015620001bd5760008582815181106200013557fe5b6020908102919091018101516001600160a01b0381166000908152600290925260409091205490915060ff16156200019f5760405162461bcd60e51b815260040180806020018281038252602f81526020018062001568602f913960400191505060405180910390fd5b620001b3816001600160e01b036200021316565b506001016200011c565b50600f839055835160039060020204600101600455835160039004600101600555601080546001600160a01b0319166001600160a01b0384161790556003600282020460010160118190555050505050620002a7565b600380546001810182557fc2575a0e9e593c00f959f8c92f12db2869c3395a3b0502d05e2516446f71f85b0180546001600160a01b0319166001600160a01b0384169081179091559054600082815260026020526040808220805460ff191660ff9094169390931790925590517f6a7a7b9e5967ba1cf76c3d7d5a9b98e96f11754855b04564fada97b94741ad369190a250565b6112b180620002b76000396000f3fe6080604052600436106101145760003560e01c80637edd7ccd116100a0578063e75f751511610064578063e75f751514610396578063f83d08ba146103c9578063f95d2f57146103d1578063fa52c7d8146103e6578063facd743b1461042f57610114565b80637edd7ccd146102b257806391e39868146102c7578063a04d049814610313578063ce5494bb14610346578063db006a751461037957610114565b806345dfa415116100e757806345dfa415146101e9578063587ab37e1461021a5780635d593f8d146102315780636c7d13df146102465780637cacde3f1461027957610114565b80632138c6b91461013357806327882c3a1461017a578063287cc96b146101a157806331b6a6d1146101b6575b6011546012541461012457600080fd5b6000805460ff19166001179055005b34801561013f57600080fd5b506101666004803603602081101561015657600080fd5b50356001600160a01b0316610462565b604080519115158252519081900360200190f35b34801561018657600080fd5b5061018f610493565b60408051918252519081900360200190f35b3480156101ad57600080fd5b5061018f610499565b3480156101c257600080fd5b50610166600480360360208110156101d957600080fd5b50356001600160a01b031661049d565b3480156101f557600080fd5b506101fe6104e8565b604080516001600160a01b039092168252519081900360200190f35b34801561022657600080fd5b5061022f6104ec565b005b34801561023d57600080fd5b5061018f61050e565b34801561025257600080fd5b5061018f6004803603602081101561026957600080fd5b50356001600160a01b0316610514565b34801561028557600080fd5b5061022f6004803603604081101561029c57600080fd5b50803590602001356001600160a01b0316610543565b3480156102be57600080fd5b5061022f6109b4565b3480156102d357600080fd5b506102fa600480360360208110156102ea57600080fd5b50356001600160a01b0316610aaf565b60408051600092830b90920b8252519081900360200190f35b34801561031f57600080fd5b506101666004803603602081101561033657600080fd5b50356001600160a01b0316610b68565b34801561035257600080fd5b5061022f6004803603602081101561036957600080fd5b50356001600160a01b0316610b7d565b61022f6004803603602081101561038f57600080fd5b5035610f86565b3480156103a257600080fd5b5061018f600480360360208110156103b957600080fd5b50356001600160a01b0316611130565b61022f61115f565b3480156103dd57600080fd5b506101666111aa565b3480156103f257600080fd5b506104196004803603602081101561040957600080fd5b50356001600160a01b03166111b3565b6040805160ff9092168252519081900360200190f35b34801561043b57600080fd5b506101666004803603602081101561045257600080fd5b50356001600160a01b03166111c8565b6000805460ff1661047257600080fd5b506001600160a01b0316600090815260136020526040902060040154431190565b600b5481565b4790565b6000805460ff166104ad57600080fd5b336000908152600260208181526040808420546001600160a01b03871685526013909252909220600190810154909260ff161c061492915050565b3090565b6010546001600160a01b0316331461050357600080fd5b601280546001019055565b60015481565b6000805460ff1661052457600080fd5b506001600160a01b031660009081526013602052604090206003015490565b60005460ff1661055257600080fd5b61055b336111c8565b6105ac576040805162461bcd60e51b815260206004820152601d60248201527f76616c696461746f72206e6f742070726573656e7420696e204c697374000000604482015290519081900360640190fd5b60005a90506105ba336111c8565b61060b576040805162461bcd60e51b815260206004820152601d60248201527f76616c696461746f72206e6f742070726573656e7420696e206c697374000000604482015290519081900360640190fd5b6001600160a01b038216600090815260136020526040902060040154431061067a576040805162461bcd60e51b815260206004820152601f60248201527f72656465656d2072657175657374206973206e6f7420617661696c61626c6500604482015290519081900360640190fd5b6001600160a01b03821660009081526013602052604090206002015483146106e9576040805162461bcd60e51b815260206004820152601a60248201527f72656465656d20616d6f756e7420697320646966666572656e74000000000000604482015290519081900360640190fd5b336000908152600260208181526040808420546001600160a01b0387168552601390925283206001015460ff9091161c061461076c576040805162461bcd60e51b815260206004820152601b60248201527f76616c696461746f722068617320616c726561647920766f7465640000000000604482015290519081900360640190fd5b336000908152600260209081526040808320546001600160a01b038616845260139092529091206001808201805460ff90941682901b90930190925560030180549091019081905560045411610893576001600160a01b0380831660009081526013602052604080822080546002909101549151929316918381818185875af1925050503d806000811461081c576040519150601f19603f3d011682016040523d82523d6000602084013e610821565b606091505b505090508061086a576040805162461bcd60e51b815260206004820152601060248201526f2a3930b739b332b9103330b4b632b21760811b604482015290519081900360640190fd5b506001600160a01b03821660009081526013602052604081206002810191909155436004909101555b60006007546006545a8403010190506000600954600a54023a83020190506000336001600160a01b03168260405180600001905060006040518083038185875af1925050503d8060008114610904576040519150601f19603f3d011682016040523d82523d6000602084013e610909565b606091505b50509050806109495760405162461bcd60e51b815260040180806020018281038252602181526020018061125c6021913960400191505060405180910390fd5b6001600160a01b03851660008181526013602090815260409182902060050180548690039055815133815290810189905280820185905290517f975a8b0f36f1204c7939f566cea0503ea32284a2768a7f98ede91960b6d158309181900360600190a2505050505050565b60005460ff166109c357600080fd5b60006109ce33610aaf565b60000b13610a0d5760405162461bcd60e51b815260040180806020018281038252602481526020018061120d6024913960400191505060405180910390fd5b336000818152601360205260408082206005015490519192918381818185875af1925050503d8060008114610a5e576040519150601f19603f3d011682016040523d82523d6000602084013e610a63565b606091505b5050905080610aac576040805162461bcd60e51b815260206004820152601060248201526f2a3930b739b332b9103330b4b632b21760811b604482015290519081900360640190fd5b50565b6000805460ff16610abf57600080fd5b6001600160a01b03821660009081526013602052604090206004015415801590610b0357506001600160a01b03821660009081526013602052604090206004015443115b610b38576001600160a01b03821660009081526013602052604090206002015415610b2f576000610b33565b6000195b610b62565b6001600160a01b038216600090815260136020526040902060020154610b5f576001610b62565b60025b92915050565b600c6020526000908152604090205460ff1681565b610b86336111c8565b610bd7576040805162461bcd60e51b815260206004820152601d60248201527f76616c696461746f72206e6f742070726573656e7420696e204c697374000000604482015290519081900360640190fd5b336000908152600c602052604090205460ff1615610c3c576040805162461bcd60e51b815260206004820152601860248201527f56616c696461746f72205369676e656420616c72656164790000000000000000604482015290519081900360640190fd5b336000908152600c60209081526040808320805460ff1916600117905580516f4d69677261746546726f6d4f6c64282960801b815281519081900360100181206001600160e01b031916818401528151808203600401815260249091019182905280516001600160a01b038616939192918291908401908083835b60208310610cd65780518252601f199092019160209182019101610cb7565b6001836020036101000a0380198251168184511680821785525050505050509050019150506000604051808303816000865af19150503d8060008114610d38576040519150601f19603f3d011682016040523d82523d6000602084013e610d3d565b606091505b5050905080610d7d5760405162461bcd60e51b81526004018080602001828103825260248152602001806111e96024913960400191505060405180910390fd5b600b805460010190556001600160a01b0382166000908152600d6020526040902054610def57600e80546001810182556000919091527fbb7b4a454dc3493923482f07822329ed19e8244eff582cc204f8554c3620c3fd0180546001600160a01b0319166001600160a01b0384161790555b6001600160a01b0382166000908152600d6020526040902080546001019055600554600b541415610e25576000805460ff191690555b600454600b541415610f8257600080805b600e54811015610ee55782600d6000600e8481548110610e5257fe5b60009182526020808320909101546001600160a01b031683528201929092526040019020541115610edd57600d6000600e8381548110610e8e57fe5b60009182526020808320909101546001600160a01b03168352820192909252604001902054600e80549194509082908110610ec557fe5b6000918252602090912001546001600160a01b031691505b600101610e36565b506040516000906001600160a01b0383169047908381818185875af1925050503d8060008114610f31576040519150601f19603f3d011682016040523d82523d6000602084013e610f36565b606091505b5050905080610f7e576040805162461bcd60e51b815260206004820152600f60248201526e151c985b9cd9995c8819985a5b1959608a1b604482015290519081900360640190fd5b5050505b5050565b60005460ff16610f9557600080fd5b610f9e33610462565b610fd95760405162461bcd60e51b815260040180806020018281038252602b815260200180611231602b913960400191505060405180910390fd5b6000811161102e576040805162461bcd60e51b815260206004820152601e60248201527f616d6f756e742073686f756c6420626520626967676572207468616e20300000604482015290519081900360640190fd5b6008543360009081526013602052604090206005015434011015611099576040805162461bcd60e51b815260206004820152601760248201527f52656465656d20666565206e6f742070726f7669646564000000000000000000604482015290519081900360640190fd5b3360008181526013602090815260408083206003810184905580546001600160a01b03191690941780855560028501869055600f544301600486015560058501805434019081905560019095019390935580518581529182019390935282516001600160a01b03909216927feee07ebdabc7ab1dc20be39b715e23aa8a85c6a8ae3c16f8334dace8d76683dc92918290030190a250565b6000805460ff1661114057600080fd5b506001600160a01b031660009081526013602052604090206005015490565b60005460ff1661116e57600080fd5b6040805133815234602082015281517f625fed9875dada8643f2418b838ae0bc78d9a148a18eee4ee1979ff0f3f5d427929181900390910190a1565b60005460ff1690565b60026020526000908152604090205460ff1681565b6001600160a01b031660009081526002602052604090205460ff1615159056fe556e61626c6520746f204d696772617465206e657720536d61727420636f6e747261637472657175657374207369676e696e67206973207374696c6c20696e2070726f677265737372656465656d20746f20746869732061646472657373206973206e6f7420617661696c61626c65207965745472616e73666572206261636b20746f2076616c696461746f72206661696c6564a265627a7a72315820171cabbe7bb0ac68b7266f127375b41188fc3d88b95073335f29a2814827ba0664736f6c63430005100032666f756e64206e6f6e2d756e697175652076616c696461746f7220696e20696e697469616c56616c696461746f7273")]
    contract LockRedeemKratos {
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

        constructor(address[] initialValidators, uint256 _lock_period, address _old_contract, uint256 noofValidatorsinold);
        fallback() external payable;

        /// Whether the contract is active or has been migrated away.
        function ActiveStatus() external view returns (bool);
        /// Withdraw the redeem fees accrued for the calling validator.
        function collectUserFee() external;
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
    }
}
