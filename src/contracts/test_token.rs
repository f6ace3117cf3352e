//! Bindings for the token deployed by local test setups

use alloy::sol;

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
    /// Fixed-supply token minted to the deployer.
    #[sol(rpc, abi, all_derives, bytecode = "608060405234801561001057600080fd5b506040516106213803806106218339818101604052602081101561003357600080fd5b50516002819055336000908152602081905260409020556105c8806100596000396000f3fe608060405234801561001057600080fd5b50600436106100935760003560e01c8063313ce56711610066578063313ce567146101a557806370a08231146101c357806395d89b41146101e9578063a9059cbb146101f1578063dd62ed3e1461021d57610093565b806306fdde0314610098578063095ea7b31461011557806318160ddd1461015557806323b872dd1461016f575b600080fd5b6100a061024b565b6040805160208082528351818301528351919283929083019185019080838360005b838110156100da5781810151838201526020016100c2565b50505050905090810190601f1680156101075780820380516001836020036101000a031916815260200191505b509250505060405180910390f35b6101416004803603604081101561012b57600080fd5b506001600160a01b038135169060200135610270565b604080519115158252519081900360200190f35b61015d6102d6565b60408051918252519081900360200190f35b6101416004803603606081101561018557600080fd5b506001600160a01b038135811691602081013590911690604001356102dc565b6101ad610437565b6040805160ff9092168252519081900360200190f35b61015d600480360360208110156101d957600080fd5b50356001600160a01b031661043c565b6100a0610457565b6101416004803603604081101561020757600080fd5b506001600160a01b038135169060200135610476565b61015d6004803603604081101561023357600080fd5b506001600160a01b0381358116916020013516610540565b604051806040016040528060098152602001682a32b9ba2a37b5b2b760b91b81525081565b3360008181526001602090815260408083206001600160a01b038716808552908352818420869055815186815291519394909390927f8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925928290030190a350600192915050565b60025490565b6001600160a01b03831660009081526020819052604081205482111561030157600080fd5b6001600160a01b038416600090815260016020908152604080832033845290915290205482111561033157600080fd5b6001600160a01b03841660009081526020819052604090205461035a908363ffffffff61056b16565b6001600160a01b038516600090815260208181526040808320939093556001815282822033835290522054610395908363ffffffff61056b16565b6001600160a01b03808616600090815260016020908152604080832033845282528083209490945591861681529081905220546103d8908363ffffffff61057d16565b6001600160a01b038085166000818152602081815260409182902094909455805186815290519193928816927fddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef92918290030190a35060019392505050565b601281565b6001600160a01b031660009081526020819052604090205490565b6040518060400160405280600381526020016254544360e81b81525081565b3360009081526020819052604081205482111561049257600080fd5b336000908152602081905260409020546104b2908363ffffffff61056b16565b33600090815260208190526040808220929092556001600160a01b038516815220546104e4908363ffffffff61057d16565b6001600160a01b038416600081815260208181526040918290209390935580518581529051919233927fddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef9281900390910190a350600192915050565b6001600160a01b03918216600090815260016020908152604080832093909416825291909152205490565b60008282111561057757fe5b50900390565b60008282018381101561058c57fe5b939250505056fea265627a7a72315820b21511a7533a6ac792e7601af976207bd0c29cff8f80e960afa55b04a94a062164736f6c634300050b0032")]
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
}
