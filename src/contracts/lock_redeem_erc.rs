//! Bindings for the ERC20 bridge contract and its token dependencies
//!
//! `LockRedeemERC` holds ERC20 tokens transferred to it and releases them
//! once validators sign a redeem. Tokens are locked by a plain ERC20
//! `transfer` to the contract address, so there is no lock function here.
//!
//! ## Contracts
//!
//! - [`LockRedeemERC`] - the bridge
//! - [`ERC20`] - OpenZeppelin-style token used in tests
//! - [`IERC20`] - token interface the bridge calls into

#![allow(clippy::too_many_arguments)]

use alloy::sol;

/// Function selectors of [`LockRedeemERC`], keyed by hex selector.
pub static LOCK_REDEEM_ERC_FUNC_SIGS: &[(&str, &str)] = &[
    ("0d00753a", "removeValidatorProposals(address)"),
    ("0d8f6b5b", "epochBlockHeight()"),
    ("0e7d275d", "newThresholdProposals(uint256)"),
    ("101a8538", "proposeRemoveValidator(address)"),
    ("1bbc4b83", "ERC20Interface()"),
    ("231f97f1", "getOLTErcAddress()"),
    ("311101b6", "executeredeem(address)"),
    ("383ea59a", "proposeAddValidator(address)"),
    ("5d593f8d", "numValidators()"),
    ("62827733", "votingThreshold()"),
    ("7cacde3f", "sign(uint256,address)"),
    ("b0825584", "getTotalErcBalance(address)"),
    ("bfb9e9f5", "addValidatorProposals(address)"),
    ("db006a75", "redeem(uint256)"),
    ("e0e887d0", "proposeNewThreshold(uint256)"),
    ("fa52c7d8", "validators(address)"),
    ("facd743b", "isValidator(address)"),
];
/// Function selectors of [`ERC20`].
pub static ERC20_FUNC_SIGS: &[(&str, &str)] = &[
    ("095ea7b3", "approve(address,uint256)"),
    ("18160ddd", "totalSupply()"),
    ("23b872dd", "transferFrom(address,address,uint256)"),
    ("39509351", "increaseAllowance(address,uint256)"),
    ("70a08231", "balanceOf(address)"),
    ("a457c2d7", "decreaseAllowance(address,uint256)"),
    ("a9059cbb", "transfer(address,uint256)"),
    ("dd62ed3e", "allowance(address,address)"),
];
/// Function selectors of [`IERC20`].
pub static IERC20_FUNC_SIGS: &[(&str, &str)] = &[
    ("095ea7b3", "approve(address,uint256)"),
    ("18160ddd", "totalSupply()"),
    ("23b872dd", "transferFrom(address,address,uint256)"),
    ("70a08231", "balanceOf(address)"),
    ("a9059cbb", "transfer(address,uint256)"),
    ("dd62ed3e", "allowance(address,address)"),
];

sol! {
    /// ERC20 lock/redeem contract with epoch-based validator voting.
    #[sol(rpc, abi, all_derives, bytecode = "608060405261708060025534801561001657600080fd5b50604051610f8f380380610f8f8339818101604052602081101561003957600080fd5b810190808051604051939291908464010000000082111561005957600080fd5b90830190602082018581111561006e57600080fd5b825186602082028301116401000000008211171561008b57600080fd5b82525081516020918201928201910280838360005b838110156100b85781810151838201526020016100a0565b50505050905001604052505050600181511015610120576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252602d815260200180610f33602d913960400191505060405180910390fd5b60005b81518110156101dd57600082828151811061013a57fe5b6020026020010151905060096000826001600160a01b03166001600160a01b03168152602001908152602001600020546000146101c2576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252602f815260200180610f60602f913960400191505060405180910390fd5b6101d4816001600160e01b036101e816565b50600101610123565b505060018055610245565b6001600160a01b03811660008181526009602090815260408083206032815583546001019093559154825190815291517fb2076c69a79e1dfb01d613dcc63b7c42ae1962daf11d4f2151352135133f824b9281900390910190a250565b610cdf806102546000396000f3fe608060405234801561001057600080fd5b506004361061010b5760003560e01c80635d593f8d116100a2578063bfb9e9f511610071578063bfb9e9f51461026f578063db006a7514610295578063e0e887d0146102b2578063fa52c7d8146102cf578063facd743b146102f55761010b565b80635d593f8d1461020d57806362827733146102155780637cacde3f1461021d578063b0825584146102495761010b565b80631bbc4b83116100de5780631bbc4b8314610195578063231f97f1146101b9578063311101b6146101c1578063383ea59a146101e75761010b565b80630d00753a146101105780630d8f6b5b146101485780630e7d275d14610150578063101a85381461016d575b600080fd5b6101366004803603602081101561012657600080fd5b50356001600160a01b031661032f565b60408051918252519081900360200190f35b610136610341565b6101366004803603602081101561016657600080fd5b5035610347565b6101936004803603602081101561018357600080fd5b50356001600160a01b0316610359565b005b61019d6103df565b604080516001600160a01b039092168252519081900360200190f35b61019d6103ee565b610193600480360360208110156101d757600080fd5b50356001600160a01b03166103f2565b610193600480360360208110156101fd57600080fd5b50356001600160a01b0316610549565b6101366105f6565b6101366105fc565b6101936004803603604081101561023357600080fd5b50803590602001356001600160a01b0316610602565b6101366004803603602081101561025f57600080fd5b50356001600160a01b03166107f0565b6101366004803603602081101561028557600080fd5b50356001600160a01b0316610886565b610193600480360360208110156102ab57600080fd5b5035610898565b610193600480360360208110156102c857600080fd5b5035610a53565b610136600480360360208110156102e557600080fd5b50356001600160a01b0316610b30565b61031b6004803603602081101561030b57600080fd5b50356001600160a01b0316610b42565b604080519115158252519081900360200190f35b60056020526000908152604090205481565b60035481565b60066020526000908152604090205481565b336000908152600960205260408120541361037357600080fd5b6001600160a01b0381166000908152600560209081526040808320338452600181019092529091205460ff16156103db5760405162461bcd60e51b8152600401808060200182810382526030815260200180610c276030913960400191505060405180910390fd5b5050565b600b546001600160a01b031681565b3090565b336000818152600a60205260409020546001600160a01b03161461041557600080fd5b600154336000908152600a6020526040902060030154101561043657600080fd5b600b80546001600160a01b0319166001600160a01b038381169190911791829055336000908152600a602090815260408083208054600290910154825163a9059cbb60e01b8152918616600483015260248201529051949093169363a9059cbb93604480820194918390030190829087803b1580156104b457600080fd5b505af11580156104c8573d6000803e3d6000fd5b505050506040513d60208110156104de57600080fd5b5050336000908152600a602090815260408083206002810184905560048101805460ff1916600117905554815193845290516001600160a01b0391909116927f80cfc930fa1029f5fdb639588b474e55c8051b1a9b635f90fe3af3508cfd8ad192908290030190a250565b336000908152600960205260408120541361056357600080fd5b6001600160a01b0381166000908152600460209081526040808320338452600181019092529091205460ff16156105cb5760405162461bcd60e51b815260040180806020018281038252602c815260200180610c7f602c913960400191505060405180910390fd5b33600090815260018281016020526040909120805460ff19168217905581540181556103db82610b5e565b60005481565b60015481565b61060b33610b42565b61065c576040805162461bcd60e51b815260206004820152601d60248201527f76616c696461746f72206e6f742070726573656e7420696e206c697374000000604482015290519081900360640190fd5b6001600160a01b0381166000908152600a602052604090206004015460ff16156106cd576040805162461bcd60e51b815260206004820152601b60248201527f72656465656d207265717565737420697320636f6d706c657465640000000000604482015290519081900360640190fd5b6001600160a01b0381166000908152600a6020526040902060020154821461073c576040805162461bcd60e51b815260206004820152601960248201527f72656465656d20616d6f756e7420436f6d70726f6d6973656400000000000000604482015290519081900360640190fd5b6001600160a01b0381166000908152600a6020908152604080832033845260010190915290205460ff161561077057600080fd5b6001600160a01b0381166000818152600a602081815260408084203380865260018281018552838720805460ff1916821790559587905293835260030180549094019093558251918252810185905281517f3b76df4bf55914fbcbc8b02f6773984cc346db1e6aef40410dcee0f94c6a05db929181900390910190a25050565b600b80546001600160a01b0319166001600160a01b038381169190911791829055604080516370a0823160e01b81523060048201529051600093909216916370a0823191602480820192602092909190829003018186803b15801561085457600080fd5b505afa158015610868573d6000803e3d6000fd5b505050506040513d602081101561087e57600080fd5b505192915050565b60046020526000908152604090205481565b336000908152600a6020526040902060020154156108b557600080fd5b6000811161090a576040805162461bcd60e51b815260206004820152601e60248201527f616d6f756e742073686f756c6420626520626967676572207468616e20300000604482015290519081900360640190fd5b336000908152600a602052604090206004015460ff1615156001146109605760405162461bcd60e51b8152600401808060200182810382526028815260200180610c576028913960400191505060405180910390fd5b336000908152600a602052604090206005015443116109c6576040805162461bcd60e51b815260206004820181905260248201527f72657175657374206973206c6f636b65642c206e6f7420617661696c61626c65604482015290519081900360640190fd5b336000818152600a6020908152604080832060048101805460ff19169055600381019390935582546001600160a01b0319169093178083556002808401869055544301600590930192909255825184815292516001600160a01b03909216927f222dc200773fe9b45015bf792e8fee37d651e3590c215806a5042404b6d741d2929081900390910190a250565b3360009081526009602052604081205413610a6d57600080fd5b6000548110610aad5760405162461bcd60e51b8152600401808060200182810382526041815260200180610bbc6041913960600191505060405180910390fd5b6000818152600660209081526040808320338452600181019092529091205460ff1615610b0b5760405162461bcd60e51b815260040180806020018281038252602a815260200180610bfd602a913960400191505060405180910390fd5b33600090815260018281016020526040909120805460ff191682179055815401905550565b60096020526000908152604090205481565b6001600160a01b03166000908152600960205260408120541390565b6001600160a01b03811660008181526009602090815260408083206032815583546001019093559154825190815291517fb2076c69a79e1dfb01d613dcc63b7c42ae1962daf11d4f2151352135133f824b9281900390910190a25056fe4e6577207468726573686f6c647320286d29206d757374206265206c657373207468616e20746865206e756d626572206f662076616c696461746f727320286e2973656e6465722068617320616c726561647920766f74656420666f7220746869732070726f706f73616c73656e6465722068617320616c726561647920766f74656420746f20616464207468697320746f2070726f706f73616c6561726c6965722072656465656d20686173206e6f74206265656e2065786563757465642079657473656e6465722068617320616c726561647920766f74656420746f2061646420746869732061646472657373a265627a7a723158205b5836c669084f6d59d19f9c3c08dd945993c87d90169167c3b87c4b3c1ba20164736f6c634300050b0032696e73756666696369656e742076616c696461746f72732070617373656420746f20636f6e7374727563746f72666f756e64206e6f6e2d756e697175652076616c696461746f7220696e20696e697469616c56616c696461746f7273")]
    contract LockRedeemERC {
        /// A validator joined the set.
        event AddValidator(address indexed _address, int256 _power);
        /// A validator was removed.
        event DeleteValidator(address indexed _address);
        /// A new validator epoch started.
        event NewEpoch(uint256 epochHeight);
        /// The voting threshold changed.
        event NewThreshold(uint256 _prevThreshold, uint256 _newThreshold);
        /// A redeem was opened.
        event RedeemRequest(address indexed recepient, uint256 amount_requested);
        /// Tokens were released to a recipient.
        event RedeemSuccessful(address indexed recepient, uint256 amount_trafered);
        /// A validator signed a pending redeem.
        event ValidatorSignedRedeem(address indexed recipient, address validator_addresss, uint256 amount);

        constructor(address[] initialValidators);

        /// Votes collected so far for adding `_0` to the validator set.
        function addValidatorProposals(address) external view returns (uint256 voteCount);
        /// Block height at which the current validator epoch started.
        function epochBlockHeight() external view returns (uint256);
        /// Token contract the last redeem was executed against.
        function ERC20Interface() external view returns (address);
        /// Release the caller's signed redeem from `tokenAddress` holdings.
        function executeredeem(address tokenAddress) external;
        /// Address of the contract itself.
        function getOLTErcAddress() external view returns (address);
        /// Token balance held by the contract.
        function getTotalErcBalance(address tokenAddress) external returns (uint256);
        /// Whether `addr` is a current validator.
        function isValidator(address addr) external view returns (bool);
        /// Votes collected so far for moving the voting threshold to `_0`.
        function newThresholdProposals(uint256) external view returns (uint256 voteCount);
        /// Number of active validators.
        function numValidators() external view returns (uint256);
        /// Vote to add `v` to the validator set.
        function proposeAddValidator(address v) external;
        /// Vote to change the number of validator signatures required.
        function proposeNewThreshold(uint256 threshold) external;
        /// Vote to remove `v` from the validator set.
        function proposeRemoveValidator(address v) external view;
        /// Open a redeem request for the caller.
        function redeem(uint256 amount_) external;
        /// Votes collected so far for removing `_0` from the validator set.
        function removeValidatorProposals(address) external view returns (uint256 voteCount);
        /// Validator signature approving a redeem of `amount_` to `recipient_`.
        function sign(uint256 amount_, address recipient_) external;
        /// Validator weight for `_0`; zero for non-validators.
        function validators(address) external view returns (int256);
        /// Number of validator signatures required to release a redeem.
        function votingThreshold() external view returns (uint256);
    }

    /// ERC20 token with allowance increase/decrease helpers.
    #[sol(rpc, abi, all_derives, bytecode = "608060405261083b806100136000396000f3fe608060405234801561001057600080fd5b50600436106100885760003560e01c806370a082311161005b57806370a0823114610149578063a457c2d71461016f578063a9059cbb1461019b578063dd62ed3e146101c757610088565b8063095ea7b31461008d57806318160ddd146100cd57806323b872dd146100e7578063395093511461011d575b600080fd5b6100b9600480360360408110156100a357600080fd5b506001600160a01b0381351690602001356101f5565b604080519115158252519081900360200190f35b6100d5610212565b60408051918252519081900360200190f35b6100b9600480360360608110156100fd57600080fd5b506001600160a01b03813581169160208101359091169060400135610218565b6100b96004803603604081101561013357600080fd5b506001600160a01b0381351690602001356102a5565b6100d56004803603602081101561015f57600080fd5b50356001600160a01b03166102f9565b6100b96004803603604081101561018557600080fd5b506001600160a01b038135169060200135610314565b6100b9600480360360408110156101b157600080fd5b506001600160a01b038135169060200135610382565b6100d5600480360360408110156101dd57600080fd5b506001600160a01b0381358116916020013516610396565b60006102096102026103c1565b84846103c5565b50600192915050565b60025490565b60006102258484846104b1565b61029b846102316103c1565b61029685604051806060016040528060288152602001610771602891396001600160a01b038a1660009081526001602052604081209061026f6103c1565b6001600160a01b03168152602081019190915260400160002054919063ffffffff61060d16565b6103c5565b5060019392505050565b60006102096102b26103c1565b8461029685600160006102c36103c1565b6001600160a01b03908116825260208083019390935260409182016000908120918c16815292529020549063ffffffff6106a416565b6001600160a01b031660009081526020819052604090205490565b60006102096103216103c1565b84610296856040518060600160405280602581526020016107e2602591396001600061034b6103c1565b6001600160a01b03908116825260208083019390935260409182016000908120918d1681529252902054919063ffffffff61060d16565b600061020961038f6103c1565b84846104b1565b6001600160a01b03918216600090815260016020908152604080832093909416825291909152205490565b3390565b6001600160a01b03831661040a5760405162461bcd60e51b81526004018080602001828103825260248152602001806107be6024913960400191505060405180910390fd5b6001600160a01b03821661044f5760405162461bcd60e51b81526004018080602001828103825260228152602001806107296022913960400191505060405180910390fd5b6001600160a01b03808416600081815260016020908152604080832094871680845294825291829020859055815185815291517f8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b9259281900390910190a3505050565b6001600160a01b0383166104f65760405162461bcd60e51b81526004018080602001828103825260258152602001806107996025913960400191505060405180910390fd5b6001600160a01b03821661053b5760405162461bcd60e51b81526004018080602001828103825260238152602001806107066023913960400191505060405180910390fd5b61057e8160405180606001604052806026815260200161074b602691396001600160a01b038616600090815260208190526040902054919063ffffffff61060d16565b6001600160a01b0380851660009081526020819052604080822093909355908416815220546105b3908263ffffffff6106a416565b6001600160a01b038084166000818152602081815260409182902094909455805185815290519193928716927fddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef92918290030190a3505050565b6000818484111561069c5760405162461bcd60e51b81526004018080602001828103825283818151815260200191508051906020019080838360005b83811015610661578181015183820152602001610649565b50505050905090810190601f16801561068e5780820380516001836020036101000a031916815260200191505b509250505060405180910390fd5b505050900390565b6000828201838110156106fe576040805162461bcd60e51b815260206004820152601b60248201527f536166654d6174683a206164646974696f6e206f766572666c6f770000000000604482015290519081900360640190fd5b939250505056fe45524332303a207472616e7366657220746f20746865207a65726f206164647265737345524332303a20617070726f766520746f20746865207a65726f206164647265737345524332303a207472616e7366657220616d6f756e7420657863656564732062616c616e636545524332303a207472616e7366657220616d6f756e74206578636565647320616c6c6f77616e636545524332303a207472616e736665722066726f6d20746865207a65726f206164647265737345524332303a20617070726f76652066726f6d20746865207a65726f206164647265737345524332303a2064656372656173656420616c6c6f77616e63652062656c6f77207a65726fa265627a7a72315820b17b47bed39a7fd0ea55074399062b51ddea6256e7d8b9e224f5436711d43ce364736f6c634300050b0032")]
    contract ERC20 {
        event Approval(address indexed owner, address indexed spender, uint256 value);
        event Transfer(address indexed from, address indexed to, uint256 value);

        /// Remaining allowance of a spender over an owner.
        function allowance(address owner, address spender) external view returns (uint256);
        /// Allow a spender to move tokens on behalf of the caller.
        function approve(address spender, uint256 amount) external returns (bool);
        /// Token balance of an account.
        function balanceOf(address account) external view returns (uint256);
        /// Lower the allowance granted to `spender`.
        function decreaseAllowance(address spender, uint256 subtractedValue) external returns (bool);
        /// Raise the allowance granted to `spender`.
        function increaseAllowance(address spender, uint256 addedValue) external returns (bool);
        /// Total token supply.
        function totalSupply() external view returns (uint256);
        /// Move tokens from the caller.
        function transfer(address recipient, uint256 amount) external returns (bool);
        /// Move tokens out of an approved account.
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);
    }

    /// Standard ERC20 interface.
    #[sol(rpc, abi, all_derives)]
    interface IERC20 {
        event Approval(address indexed owner, address indexed spender, uint256 value);
        event Transfer(address indexed from, address indexed to, uint256 value);

        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function balanceOf(address account) external view returns (uint256);
        function totalSupply() external view returns (uint256);
        function transfer(address recipient, uint256 amount) external returns (bool);
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);
    }
}
