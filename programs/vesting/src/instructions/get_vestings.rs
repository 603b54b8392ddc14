use anchor_lang::prelude::*;

use crate::constants::VESTINGS_SEED;
use crate::state::{schedules_of, RecipientVestings, VestingSchedule};

pub fn get_vestings(ctx: Context<ReadVestings>, _recipient: Pubkey) -> Result<Vec<VestingSchedule>> {
    let vestings = ctx.accounts.load()?;
    Ok(schedules_of(vestings.as_ref()).to_vec())
}

pub fn get_vestings_count(ctx: Context<ReadVestings>, _recipient: Pubkey) -> Result<u64> {
    let vestings = ctx.accounts.load()?;
    Ok(schedules_of(vestings.as_ref()).len() as u64)
}

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct ReadVestings<'info> {
    /// CHECK: Address pinned by seeds; the account is absent until the
    /// recipient's first schedule is created.
    #[account(seeds = [VESTINGS_SEED, recipient.as_ref()], bump)]
    pub recipient_vestings: UncheckedAccount<'info>,
}

impl<'info> ReadVestings<'info> {
    /// `None` when the recipient has no schedules yet.
    pub fn load(&self) -> Result<Option<RecipientVestings>> {
        let info = self.recipient_vestings.to_account_info();
        if info.data_is_empty() {
            return Ok(None);
        }
        require_keys_eq!(
            *info.owner,
            crate::ID,
            anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
        );
        let data = info.try_borrow_data()?;
        let account = RecipientVestings::try_deserialize(&mut &data[..])?;
        Ok(Some(account))
    }
}
