use anchor_lang::prelude::*;

use crate::instructions::ReadVestings;
use crate::state::{claimable_of, outstanding_of};

/// Returns the recipient's total claimable amount and emits it as a quote.
/// A recipient without schedules quotes zero.
pub fn get_claimable_amount(ctx: Context<ReadVestings>, recipient: Pubkey) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let vestings = ctx.accounts.load()?;
    let claimable = claimable_of(vestings.as_ref(), now)?;

    emit!(ClaimableQuote {
        recipient,
        at: now,
        claimable,
        outstanding: outstanding_of(vestings.as_ref())?,
    });

    Ok(claimable)
}

#[event]
pub struct ClaimableQuote {
    pub recipient: Pubkey,
    pub at: i64,
    pub claimable: u64,
    pub outstanding: u64,
}
