//! Contract bindings
//!
//! One module per compiled artifact. Generations of the bridge are kept apart
//! because each one is a separate deployment with its own bytecode, even where
//! the ABIs overlap.
//!
//! ## Submodules
//!
//! - `lock_redeem` - first ether bridge (`LockRedeem`)
//! - `lock_redeem_v2` - ether bridge with fees and migration (`LockRedeemV2`)
//! - `lock_redeem_kratos` - Kratos deployment of the V2 bridge (`LockRedeemKratos`)
//! - `lock_redeem_future` - migration target (`LockRedeemFuture`)
//! - `lock_redeem_erc` - ERC20 bridge with `ERC20` and `IERC20`
//! - `lock_redeem_erc_single` - single-contract ERC20 bridge with `ERC20Basic`
//! - `test_token` - `ERC20Basic` used by local test setups

pub mod lock_redeem;
pub mod lock_redeem_erc;
pub mod lock_redeem_erc_single;
pub mod lock_redeem_future;
pub mod lock_redeem_kratos;
pub mod lock_redeem_v2;
pub mod test_token;

pub use lock_redeem::LockRedeem;
pub use lock_redeem_future::LockRedeemFuture;
pub use lock_redeem_kratos::LockRedeemKratos;
pub use lock_redeem_v2::LockRedeemV2;
