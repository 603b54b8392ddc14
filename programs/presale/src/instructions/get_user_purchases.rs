use anchor_lang::prelude::*;

use crate::constants::PURCHASES_SEED;
use crate::state::{purchases_of, Purchase, UserPurchases};

pub fn get_user_purchases(ctx: Context<ReadPurchases>, _buyer: Pubkey) -> Result<Vec<Purchase>> {
    let log = ctx.accounts.load()?;
    Ok(purchases_of(log.as_ref()).to_vec())
}

pub fn get_user_purchases_count(ctx: Context<ReadPurchases>, _buyer: Pubkey) -> Result<u64> {
    let log = ctx.accounts.load()?;
    Ok(purchases_of(log.as_ref()).len() as u64)
}

#[derive(Accounts)]
#[instruction(buyer: Pubkey)]
pub struct ReadPurchases<'info> {
    /// CHECK: Address pinned by seeds; absent until the buyer's first purchase.
    #[account(seeds = [PURCHASES_SEED, buyer.as_ref()], bump)]
    pub purchases: UncheckedAccount<'info>,
}

impl<'info> ReadPurchases<'info> {
    pub fn load(&self) -> Result<Option<UserPurchases>> {
        let info = self.purchases.to_account_info();
        if info.data_is_empty() {
            return Ok(None);
        }
        require_keys_eq!(
            *info.owner,
            crate::ID,
            anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
        );
        let data = info.try_borrow_data()?;
        let account = UserPurchases::try_deserialize(&mut &data[..])?;
        Ok(Some(account))
    }
}
