pub mod initialize;
pub mod set_presale_contract;
pub mod create_vesting;
pub mod claim_tokens;
pub mod get_claimable_amount;
pub mod get_vestings;
pub mod transfer_ownership;

pub use initialize::*;
pub use set_presale_contract::*;
pub use create_vesting::*;
pub use claim_tokens::*;
pub use get_claimable_amount::*;
pub use get_vestings::*;
pub use transfer_ownership::*;
