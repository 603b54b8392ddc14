pub mod initialize;
pub mod set_vesting_contract;
pub mod create_round;
pub mod buy_tokens;
pub mod withdraw_tokens;
pub mod pause;
pub mod unpause;
pub mod transfer_ownership;
pub mod get_round_quotes;
pub mod get_rounds;
pub mod get_user_purchases;

pub use initialize::*;
pub use set_vesting_contract::*;
pub use create_round::*;
pub use buy_tokens::*;
pub use withdraw_tokens::*;
pub use pause::*;
pub use unpause::*;
pub use transfer_ownership::*;
pub use get_round_quotes::*;
pub use get_rounds::*;
pub use get_user_purchases::*;
