//! Bindings for the single-contract build of the ERC20 bridge
//!
//! Unlike [`lock_redeem_erc`](super::lock_redeem_erc), redeems name the token
//! they apply to, and validators and users can query signing status.
//! The build ships its own basic token.

use alloy::sol;

/// Function selectors of [`LockRedeemERC`], keyed by hex selector.
pub static LOCK_REDEEM_ERC_FUNC_SIGS: &[(&str, &str)] = &[
    ("0d00753a", "removeValidatorProposals(address)"),
    ("0d8f6b5b", "epochBlockHeight()"),
    ("0e7d275d", "newThresholdProposals(uint256)"),
    ("101a8538", "proposeRemoveValidator(address)"),
    ("231f97f1", "getOLTErcAddress()"),
    ("311101b6", "executeredeem(address)"),
    ("31b6a6d1", "hasValidatorSigned(address)"),
    ("383ea59a", "proposeAddValidator(address)"),
    ("5d593f8d", "numValidators()"),
    ("62827733", "votingThreshold()"),
    ("7bde82f2", "redeem(uint256,address)"),
    ("7cacde3f", "sign(uint256,address)"),
    ("91e39868", "verifyRedeem(address)"),
    ("b0825584", "getTotalErcBalance(address)"),
    ("bfb9e9f5", "addValidatorProposals(address)"),
    ("e0e887d0", "proposeNewThreshold(uint256)"),
    ("fa52c7d8", "validators(address)"),
    ("facd743b", "isValidator(address)"),
];
/// Function selectors of [`ERC20Basic`].
pub static ERC20_BASIC_FUNC_SIGS: &[(&str, &str)] = &[
    ("06fdde03", "name()"),
    ("095ea7b3", "approve(address,uint256)"),
    ("18160ddd", "totalSupply()"),
    ("23b872dd", "transferFrom(address,address,uint256)"),
    ("313ce567", "decimals()"),
    ("70a08231", "balanceOf(address)"),
    ("95d89b41", "symbol()"),
    ("a9059cbb", "transfer(address,uint256)"),
    ("dd62ed3e", "allowance(address,address)"),
];

sol! {
    /// ERC20 lock/redeem contract with per-token redeems.
    #[sol(rpc, abi, all_derives, bytecode = "608060405261708060025534801561001657600080fd5b50604051620010fc380380620010fc8339818101604052602081101561003b57600080fd5b810190808051604051939291908464010000000082111561005b57600080fd5b90830190602082018581111561007057600080fd5b825186602082028301116401000000008211171561008d57600080fd5b82525081516020918201928201910280838360005b838110156100ba5781810151838201526020016100a2565b505050509050016040525050506001815110156101095760405162461bcd60e51b815260040180806020018281038252602d815260200180620010a0602d913960400191505060405180910390fd5b60005b81518110156101ad57600082828151811061012357fe5b6020026020010151905060096000826001600160a01b03166001600160a01b03168152602001908152602001600020546000146101925760405162461bcd60e51b815260040180806020018281038252602f815260200180620010cd602f913960400191505060405180910390fd5b6101a4816001600160e01b036101cc16565b5060010161010c565b5060038151600202816101bc57fe5b0460010160018190555050610229565b6001600160a01b03811660008181526009602090815260408083206032815583546001019093559154825190815291517fb2076c69a79e1dfb01d613dcc63b7c42ae1962daf11d4f2151352135133f824b9281900390910190a250565b610e6780620002396000396000f3fe608060405234801561001057600080fd5b50600436106101165760003560e01c806362827733116100a2578063b082558411610071578063b0825584146102d8578063bfb9e9f5146102fe578063e0e887d014610324578063fa52c7d814610341578063facd743b1461036757610116565b806362827733146102525780637bde82f21461025a5780637cacde3f1461028657806391e39868146102b257610116565b8063231f97f1116100e9578063231f97f1146101a0578063311101b6146101c457806331b6a6d1146101ea578063383ea59a146102245780635d593f8d1461024a57610116565b80630d00753a1461011b5780630d8f6b5b146101535780630e7d275d1461015b578063101a853814610178575b600080fd5b6101416004803603602081101561013157600080fd5b50356001600160a01b031661038d565b60408051918252519081900360200190f35b61014161039f565b6101416004803603602081101561017157600080fd5b50356103a5565b61019e6004803603602081101561018e57600080fd5b50356001600160a01b03166103b7565b005b6101a861043d565b604080516001600160a01b039092168252519081900360200190f35b61019e600480360360208110156101da57600080fd5b50356001600160a01b0316610441565b6102106004803603602081101561020057600080fd5b50356001600160a01b03166106de565b604080519115158252519081900360200190f35b61019e6004803603602081101561023a57600080fd5b50356001600160a01b031661070a565b6101416107b7565b6101416107bd565b61019e6004803603604081101561027057600080fd5b50803590602001356001600160a01b03166107c3565b61019e6004803603604081101561029c57600080fd5b50803590602001356001600160a01b0316610939565b610210600480360360208110156102c857600080fd5b50356001600160a01b0316610b2a565b610141600480360360208110156102ee57600080fd5b50356001600160a01b0316610b50565b6101416004803603602081101561031457600080fd5b50356001600160a01b0316610bce565b61019e6004803603602081101561033a57600080fd5b5035610be0565b6101416004803603602081101561035757600080fd5b50356001600160a01b0316610cbd565b6102106004803603602081101561037d57600080fd5b50356001600160a01b0316610ccf565b60056020526000908152604090205481565b60035481565b60066020526000908152604090205481565b33600090815260096020526040812054136103d157600080fd5b6001600160a01b0381166000908152600560209081526040808320338452600181019092529091205460ff16156104395760405162461bcd60e51b8152600401808060200182810382526030815260200180610dd76030913960400191505060405180910390fd5b5050565b3090565b336000818152600a60205260409020600101546001600160a01b0316146104995760405162461bcd60e51b8152600401808060200182810382526023815260200180610d8a6023913960400191505060405180910390fd5b600154336000908152600a60205260409020600401541015610502576040805162461bcd60e51b815260206004820152601a60248201527f4e6f7420656e6f7567682056616c696461746f7220766f746573000000000000604482015290519081900360640190fd5b336000908152600a60205260409020546001600160a01b03828116911614610568576040805162461bcd60e51b815260206004820152601460248201527315dc9bdb99c81d1bdad95b881cd95b1958dd195960621b604482015290519081900360640190fd5b336000908152600a602052604090206005015460ff161515600114156105d5576040805162461bcd60e51b815260206004820181905260248201527f52656465656d2068617320616c7265616479206265656e206578656375746564604482015290519081900360640190fd5b336000908152600a602090815260408083206001810154600390910154825163a9059cbb60e01b81526001600160a01b0392831660048201526024810191909152915185949185169363a9059cbb93604480820194929392918390030190829087803b15801561064457600080fd5b505af1158015610658573d6000803e3d6000fd5b505050506040513d602081101561066e57600080fd5b5050336000908152600a602090815260408083206003810184905560058101805460ff191660019081179091550154815193845290516001600160a01b0391909116927f80cfc930fa1029f5fdb639588b474e55c8051b1a9b635f90fe3af3508cfd8ad192908290030190a25050565b6001600160a01b03166000908152600a6020908152604080832033845260020190915290205460ff1690565b336000908152600960205260408120541361072457600080fd5b6001600160a01b0381166000908152600460209081526040808320338452600181019092529091205460ff161561078c5760405162461bcd60e51b815260040180806020018281038252602c815260200180610e07602c913960400191505060405180910390fd5b33600090815260018281016020526040909120805460ff191682179055815401815561043982610ceb565b60005481565b60015481565b336000908152600a6020526040902060030154156107e057600080fd5b60008211610835576040805162461bcd60e51b815260206004820152601e60248201527f616d6f756e742073686f756c6420626520626967676572207468616e20300000604482015290519081900360640190fd5b336000908152600a6020526040902060060154431161089b576040805162461bcd60e51b815260206004820181905260248201527f72657175657374206973206c6f636b65642c206e6f7420617661696c61626c65604482015290519081900360640190fd5b336000818152600a6020908152604080832060058101805460ff1916905580546001600160a01b038781166001600160a01b03199283161783556004830195909555600182018054909116909517948590556003810187905560025443016006909101558051868152905193909216927f222dc200773fe9b45015bf792e8fee37d651e3590c215806a5042404b6d741d29281900390910190a25050565b61094233610ccf565b610993576040805162461bcd60e51b815260206004820152601d60248201527f76616c696461746f72206e6f742070726573656e7420696e206c697374000000604482015290519081900360640190fd5b6001600160a01b0381166000908152600a602052604090206005015460ff1615610a04576040805162461bcd60e51b815260206004820152601b60248201527f72656465656d207265717565737420697320636f6d706c657465640000000000604482015290519081900360640190fd5b6001600160a01b0381166000908152600a60205260409020600301548214610a73576040805162461bcd60e51b815260206004820152601960248201527f72656465656d20616d6f756e7420436f6d70726f6d6973656400000000000000604482015290519081900360640190fd5b6001600160a01b0381166000908152600a6020908152604080832033845260020190915290205460ff1615610aa757600080fd5b6001600160a01b0381166000818152600a6020818152604080842033808652600282018452828620805460ff191660019081179091559587905293835260040180549094019093558251918252810185905281517f3b76df4bf55914fbcbc8b02f6773984cc346db1e6aef40410dcee0f94c6a05db929181900390910190a25050565b6001546001600160a01b0382166000908152600a60205260409020600401541015919050565b604080516370a0823160e01b8152306004820152905160009183916001600160a01b038316916370a08231916024808301926020929190829003018186803b158015610b9b57600080fd5b505afa158015610baf573d6000803e3d6000fd5b505050506040513d6020811015610bc557600080fd5b50519392505050565b60046020526000908152604090205481565b3360009081526009602052604081205413610bfa57600080fd5b6000548110610c3a5760405162461bcd60e51b8152600401808060200182810382526041815260200180610d496041913960600191505060405180910390fd5b6000818152600660209081526040808320338452600181019092529091205460ff1615610c985760405162461bcd60e51b815260040180806020018281038252602a815260200180610dad602a913960400191505060405180910390fd5b33600090815260018281016020526040909120805460ff191682179055815401905550565b60096020526000908152604090205481565b6001600160a01b03166000908152600960205260408120541390565b6001600160a01b03811660008181526009602090815260408083206032815583546001019093559154825190815291517fb2076c69a79e1dfb01d613dcc63b7c42ae1962daf11d4f2151352135133f824b9281900390910190a25056fe4e6577207468726573686f6c647320286d29206d757374206265206c657373207468616e20746865206e756d626572206f662076616c696461746f727320286e2952657175657374206e6f742063616c6c65642066726f6d20746f6b656e206f776e657273656e6465722068617320616c726561647920766f74656420666f7220746869732070726f706f73616c73656e6465722068617320616c726561647920766f74656420746f20616464207468697320746f2070726f706f73616c73656e6465722068617320616c726561647920766f74656420746f2061646420746869732061646472657373a265627a7a72315820bb50fc07b3175911cd673ee6f68d695014f569e601355cd8b46f33b946b4bb7064736f6c63430005100032696e73756666696369656e742076616c696461746f72732070617373656420746f20636f6e7374727563746f72666f756e64206e6f6e2d756e697175652076616c696461746f7220696e20696e697469616c56616c696461746f7273")]
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
        /// Release the caller's signed redeem from `tokenAddress` holdings.
        function executeredeem(address tokenAddress_) external;
        /// Address of the contract itself.
        function getOLTErcAddress() external view returns (address);
        /// Token balance held by the contract.
        function getTotalErcBalance(address tokenAddress_) external view returns (uint256);
        /// Whether the calling validator has signed the redeem of `recipient_`.
        function hasValidatorSigned(address recipient_) external view returns (bool);
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
        function redeem(uint256 amount_, address tokenAddress_) external;
        /// Votes collected so far for removing `_0` from the validator set.
        function removeValidatorProposals(address) external view returns (uint256 voteCount);
        /// Validator signature approving a redeem of `amount_` to `recipient_`.
        function sign(uint256 amount_, address recipient_) external;
        /// Validator weight for `_0`; zero for non-validators.
        function validators(address) external view returns (int256);
        /// Redeem status for `recipient_`.
        function verifyRedeem(address recipient_) external view returns (bool);
        /// Number of validator signatures required to release a redeem.
        function votingThreshold() external view returns (uint256);
    }

    /// Minimal fixed-supply token.
    #[sol(rpc, abi, all_derives, bytecode = "608060405234801561001057600080fd5b506040516107333803806107338339818101604052602081101561003357600080fd5b50516002819055336000908152602081905260409020556106da806100596000396000f3fe608060405234801561001057600080fd5b50600436106100935760003560e01c8063313ce56711610066578063313ce567146101a557806370a08231146101c357806395d89b41146101e9578063a9059cbb146101f1578063dd62ed3e1461021d57610093565b806306fdde0314610098578063095ea7b31461011557806318160ddd1461015557806323b872dd1461016f575b600080fd5b6100a061024b565b6040805160208082528351818301528351919283929083019185019080838360005b838110156100da5781810151838201526020016100c2565b50505050905090810190601f1680156101075780820380516001836020036101000a031916815260200191505b509250505060405180910390f35b6101416004803603604081101561012b57600080fd5b506001600160a01b038135169060200135610270565b604080519115158252519081900360200190f35b61015d6102d6565b60408051918252519081900360200190f35b6101416004803603606081101561018557600080fd5b506001600160a01b038135811691602081013590911690604001356102dc565b6101ad610437565b6040805160ff9092168252519081900360200190f35b61015d600480360360208110156101d957600080fd5b50356001600160a01b031661043c565b6100a0610457565b6101416004803603604081101561020757600080fd5b506001600160a01b038135169060200135610476565b61015d6004803603604081101561023357600080fd5b506001600160a01b0381358116916020013516610540565b604051806040016040528060098152602001682a32b9ba2a37b5b2b760b91b81525081565b3360008181526001602090815260408083206001600160a01b038716808552908352818420869055815186815291519394909390927f8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925928290030190a350600192915050565b60025490565b6001600160a01b03831660009081526020819052604081205482111561030157600080fd5b6001600160a01b038416600090815260016020908152604080832033845290915290205482111561033157600080fd5b6001600160a01b03841660009081526020819052604090205461035a908363ffffffff61056b16565b6001600160a01b038516600090815260208181526040808320939093556001815282822033835290522054610395908363ffffffff61056b16565b6001600160a01b03808616600090815260016020908152604080832033845282528083209490945591861681529081905220546103d8908363ffffffff6105b416565b6001600160a01b038085166000818152602081815260409182902094909455805186815290519193928816927fddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef92918290030190a35060019392505050565b601281565b6001600160a01b031660009081526020819052604090205490565b6040518060400160405280600381526020016254544360e81b81525081565b3360009081526020819052604081205482111561049257600080fd5b336000908152602081905260409020546104b2908363ffffffff61056b16565b33600090815260208190526040808220929092556001600160a01b038516815220546104e4908363ffffffff6105b416565b6001600160a01b038416600081815260208181526040918290209390935580518581529051919233927fddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef9281900390910190a350600192915050565b6001600160a01b03918216600090815260016020908152604080832093909416825291909152205490565b60006105ad83836040518060400160405280601e81526020017f536166654d6174683a207375627472616374696f6e206f766572666c6f77000081525061060e565b9392505050565b6000828201838110156105ad576040805162461bcd60e51b815260206004820152601b60248201527f536166654d6174683a206164646974696f6e206f766572666c6f770000000000604482015290519081900360640190fd5b6000818484111561069d5760405162461bcd60e51b81526004018080602001828103825283818151815260200191508051906020019080838360005b8381101561066257818101518382015260200161064a565b50505050905090810190601f16801561068f5780820380516001836020036101000a031916815260200191505b509250505060405180910390fd5b50505090039056fea265627a7a723158204d7bae91dc8e8e4a0102ca67656e053f0c94437a4825daeedf0ca258040475b364736f6c63430005100032")]
    contract ERC20Basic {
        event Approval(address indexed tokenOwner, address indexed spender, uint256 tokens);
        event Transfer(address indexed from, address indexed to, uint256 tokens);

        constructor(uint256 total);

        /// Remaining allowance of a spender over an owner.
        function allowance(address owner, address delegate) external view returns (uint256);
        /// Allow a spender to move tokens on behalf of the caller.
        function approve(address delegate, uint256 numTokens) external returns (bool);
        /// Token balance of an account.
        function balanceOf(address tokenOwner) external view returns (uint256);
        /// Token decimals.
        function decimals() external view returns (uint8);
        /// Token name.
        function name() external view returns (string);
        /// Token symbol.
        function symbol() external view returns (string);
        /// Total token supply.
        function totalSupply() external view returns (uint256);
        /// Move tokens from the caller.
        function transfer(address receiver, uint256 numTokens) external returns (bool);
        /// Move tokens out of an approved account.
        function transferFrom(address owner, address buyer, uint256 numTokens) external returns (bool);
    }

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
