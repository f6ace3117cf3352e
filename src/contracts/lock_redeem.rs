//! Bindings for the original ether bridge contract (`LockRedeem`)
//!
//! Users lock ether with `lock()`; validators vote on membership and on the
//! signature threshold, and sign redeem requests opened with `redeem()`.
//! Membership changes are tracked per epoch.

#![allow(clippy::too_many_arguments)]

use alloy::sol;

/// Function selectors of [`LockRedeem`], keyed by hex selector.
pub static LOCK_REDEEM_FUNC_SIGS: &[(&str, &str)] = &[
    ("0d00753a", "removeValidatorProposals(address)"),
    ("0d8f6b5b", "epochBlockHeight()"),
    ("0e7d275d", "newThresholdProposals(uint256)"),
    ("101a8538", "proposeRemoveValidator(address)"),
    ("287cc96b", "getTotalEthBalance()"),
    ("383ea59a", "proposeAddValidator(address)"),
    ("45dfa415", "getOLTEthAddress()"),
    ("5d593f8d", "numValidators()"),
    ("62827733", "votingThreshold()"),
    ("7cacde3f", "sign(uint256,address)"),
    ("bfb9e9f5", "addValidatorProposals(address)"),
    ("db006a75", "redeem(uint256)"),
    ("e0e887d0", "proposeNewThreshold(uint256)"),
    ("f83d08ba", "lock()"),
    ("fa52c7d8", "validators(address)"),
    ("facd743b", "isValidator(address)"),
];

sol! {
    /// Ether lock/redeem contract with epoch-based validator voting.
    #[sol(rpc, abi, all_derives, bytecode = "60806040526170806002553480156200001757600080fd5b5060405162001dda38038062001dda833981810160405260208110156200003d57600080fd5b81019080805160405193929190846401000000008211156200005e57600080fd5b838201915060208201858111156200007557600080fd5b82518660208202830111640100000000821117156200009357600080fd5b8083526020830192505050908051906020019060200280838360005b83811015620000cc578082015181840152602081019050620000af565b5050505090500160405250505060008151101562000136576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252602d81526020018062001d7e602d913960400191505060405180910390fd5b60008090505b8151811015620002195760008282815181106200015557fe5b602002602001015190506000600960008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000205414620001f9576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252602f81526020018062001dab602f913960400191505060405180910390fd5b6200020a816200023260201b60201c565b5080806001019150506200013c565b506200022b436200031760201b60201c565b5062000623565b6032600960008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002081905550600160008082825401925050819055508073ffffffffffffffffffffffffffffffffffffffff167fb2076c69a79e1dfb01d613dcc63b7c42ae1962daf11d4f2151352135133f824b600960008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020546040518082815260200191505060405180910390a250565b6000600960003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002054136200036457600080fd5b806003819055507febad8099c467528a56c98b63c8d476d251cf1ffb4c75db94b4d23fa2b6a1e3356003546040518082815260200191505060405180910390a160008090505b6007805490508110156200045f57600060078281548110620003c857fe5b9060005260206000200160009054906101000a900473ffffffffffffffffffffffffffffffffffffffff16905062000406816200023260201b60201c565b600460008273ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000206000808201600090555050508080600101915050620003aa565b5060076000620004709190620005d8565b60008090505b6008805490508110156200052b576000600882815481106200049457fe5b9060005260206000200160009054906101000a900473ffffffffffffffffffffffffffffffffffffffff169050620004d2816200053f60201b60201c565b600560008273ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600080820160009055505050808060010191505062000476565b50600860006200053c9190620005d8565b50565b600960008273ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060009055600160008082825403925050819055508073ffffffffffffffffffffffffffffffffffffffff167f6d70afad774d81e8c32f930c6412789502b16ccf0a20f21679b249bdfac060e560405160405180910390a250565b5080546000825590600052602060002090810190620005f89190620005fb565b50565b6200062091905b808211156200061c57600081600090555060010162000602565b5090565b90565b61174b80620006336000396000f3fe6080604052600436106100f35760003560e01c8063628277331161008a578063e0e887d011610059578063e0e887d01461044c578063f83d08ba14610487578063fa52c7d814610491578063facd743b146104f6576100f3565b806362827733146103265780637cacde3f14610351578063bfb9e9f5146103ac578063db006a7514610411576100f3565b8063287cc96b116100c6578063287cc96b14610228578063383ea59a1461025357806345dfa415146102a45780635d593f8d146102fb576100f3565b80630d00753a146100f85780630d8f6b5b1461015d5780630e7d275d14610188578063101a8538146101d7575b600080fd5b34801561010457600080fd5b506101476004803603602081101561011b57600080fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff16906020019092919050505061055f565b6040518082815260200191505060405180910390f35b34801561016957600080fd5b5061017261057d565b6040518082815260200191505060405180910390f35b34801561019457600080fd5b506101c1600480360360208110156101ab57600080fd5b8101908080359060200190929190505050610583565b6040518082815260200191505060405180910390f35b3480156101e357600080fd5b50610226600480360360208110156101fa57600080fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff1690602001909291905050506105a1565b005b34801561023457600080fd5b5061023d6106d9565b6040518082815260200191505060405180910390f35b34801561025f57600080fd5b506102a26004803603602081101561027657600080fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff1690602001909291905050506106f8565b005b3480156102b057600080fd5b506102b96108a6565b604051808273ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200191505060405180910390f35b34801561030757600080fd5b506103106108ae565b6040518082815260200191505060405180910390f35b34801561033257600080fd5b5061033b6108b4565b6040518082815260200191505060405180910390f35b34801561035d57600080fd5b506103aa6004803603604081101561037457600080fd5b8101908080359060200190929190803573ffffffffffffffffffffffffffffffffffffffff1690602001909291905050506108ba565b005b3480156103b857600080fd5b506103fb600480360360208110156103cf57600080fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff169060200190929190505050610e13565b6040518082815260200191505060405180910390f35b34801561041d57600080fd5b5061044a6004803603602081101561043457600080fd5b8101908080359060200190929190505050610e31565b005b34801561045857600080fd5b506104856004803603602081101561046f57600080fd5b8101908080359060200190929190505050611250565b005b61048f611423565b005b34801561049d57600080fd5b506104e0600480360360208110156104b457600080fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff169060200190929190505050611507565b6040518082815260200191505060405180910390f35b34801561050257600080fd5b506105456004803603602081101561051957600080fd5b81019080803573ffffffffffffffffffffffffffffffffffffffff16906020019092919050505061151f565b604051808215151515815260200191505060405180910390f35b60056020528060005260406000206000915090508060000154905081565b60035481565b60066020528060005260406000206000915090508060000154905081565b6000600960003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002054136105ed57600080fd5b6000600560008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002090508060010160003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060009054906101000a900460ff16156106d5576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825260308152602001806116bb6030913960400191505060405180910390fd5b5050565b60003073ffffffffffffffffffffffffffffffffffffffff1631905090565b6000600960003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020541361074457600080fd5b6000600460008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002090508060010160003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060009054906101000a900460ff161561082c576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252602c8152602001806116eb602c913960400191505060405180910390fd5b60018160010160003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060006101000a81548160ff021916908315150217905550600181600001600082825401925050819055506108a28261156a565b5050565b600030905090565b60005481565b60015481565b6108c33361151f565b610935576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252601d8152602001807f76616c696461746f72206e6f742070726573656e7420696e206c69737400000081525060200191505060405180910390fd5b81600a60008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060020154146109ec576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825260198152602001807f72656465656d20616d6f756e7420436f6d70726f6d697365640000000000000081525060200191505060405180910390fd5b600a60008273ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060010160003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060009054906101000a900460ff1615610a8357600080fd5b6001600a60008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060010160003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060006101000a81548160ff0219169083151502179055506001600a60008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060030160008282540192505081905550600154600a60008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000206003015410610d8d57600a60008273ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060000160009054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff166108fc600a60008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600201549081150290604051600060405180830381858888f19350505050158015610ca1573d6000803e3d6000fd5b506000600a60008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600201819055506001600a60008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060040160006101000a81548160ff02191690831515021790555043600a60008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600501819055505b8073ffffffffffffffffffffffffffffffffffffffff167f3b76df4bf55914fbcbc8b02f6773984cc346db1e6aef40410dcee0f94c6a05db3384604051808373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020018281526020019250505060405180910390a25050565b60046020528060005260406000206000915090508060000154905081565b6000600a60003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000206002015414610e8057600080fd5b60008111610ef6576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252601e8152602001807f616d6f756e742073686f756c6420626520626967676572207468616e2030000081525060200191505060405180910390fd5b43600a60003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000206005015410610fad576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825260208152602001807f72657175657374206973206c6f636b65642c206e6f7420617661696c61626c6581525060200191505060405180910390fd5b60001515600a60003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060040160009054906101000a905050506000600a60003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000206003018190555033600a60003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060000160006101000a81548173ffffffffffffffffffffffffffffffffffffffff021916908373ffffffffffffffffffffffffffffffffffffffff16021790555080600a60003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600201819055506002544301600a60003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060050181905550600a60003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060000160009054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff167f222dc200773fe9b45015bf792e8fee37d651e3590c215806a5042404b6d741d2600a60003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020600201546040518082815260200191505060405180910390a250565b6000600960003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020541361129c57600080fd5b60005481106112f6576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825260418152602001806116506041913960600191505060405180910390fd5b60006006600083815260200190815260200160002090508060010160003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060009054906101000a900460ff16156113b2576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252602a815260200180611691602a913960400191505060405180910390fd5b60018160010160003373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060006101000a81548160ff021916908315150217905550600181600001600082825401925050819055505050565b600034101561149a576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040180806020018281038252601e8152602001807f4d7573742070617920612062616c616e6365206d6f7265207468616e2030000081525060200191505060405180910390fd5b7f625fed9875dada8643f2418b838ae0bc78d9a148a18eee4ee1979ff0f3f5d4273334604051808373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020018281526020019250505060405180910390a1565b60096020528060005260406000206000915090505481565b600080600960008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002054139050919050565b6032600960008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002081905550600160008082825401925050819055508073ffffffffffffffffffffffffffffffffffffffff167fb2076c69a79e1dfb01d613dcc63b7c42ae1962daf11d4f2151352135133f824b600960008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020546040518082815260200191505060405180910390a25056fe4e6577207468726573686f6c647320286d29206d757374206265206c657373207468616e20746865206e756d626572206f662076616c696461746f727320286e2973656e6465722068617320616c726561647920766f74656420666f7220746869732070726f706f73616c73656e6465722068617320616c726561647920766f74656420746f20616464207468697320746f2070726f706f73616c73656e6465722068617320616c726561647920766f74656420746f2061646420746869732061646472657373a265627a7a72315820c2d6331b1babb91556272aef46eca1897f964ffaac0d437df7709dd558b561ee64736f6c634300050b0032696e73756666696369656e742076616c696461746f72732070617373656420746f20636f6e7374727563746f72666f756e64206e6f6e2d756e697175652076616c696461746f7220696e20696e697469616c56616c696461746f7273")]
    contract LockRedeem {
        /// A validator joined the set.
        event AddValidator(address indexed _address, int256 _power);
        /// A validator was removed.
        event DeleteValidator(address indexed _address);
        /// Ether was locked.
        event Lock(address sender, uint256 amount_received);
        /// A new validator epoch started.
        event NewEpoch(uint256 epochHeight);
        /// The voting threshold changed.
        event NewThreshold(uint256 _prevThreshold, uint256 _newThreshold);
        /// A redeem was opened.
        event RedeemRequest(address indexed recepient, uint256 amount_requested);
        /// A validator signed a pending redeem.
        event ValidatorSignedRedeem(address indexed recipient, address validator_addresss, uint256 amount);

        constructor(address[] initialValidators);

        /// Votes collected so far for adding `_0` to the validator set.
        function addValidatorProposals(address) external view returns (uint256 voteCount);
        /// Block height at which the current validator epoch started.
        function epochBlockHeight() external view returns (uint256);
        /// Address of the contract itself.
        function getOLTEthAddress() external view returns (address);
        /// Ether held by the contract.
        function getTotalEthBalance() external view returns (uint256);
        /// Whether `addr` is a current validator.
        function isValidator(address addr) external view returns (bool);
        /// Lock the attached ether on this chain.
        function lock() external payable;
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
}
