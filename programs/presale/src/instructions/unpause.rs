use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::PresaleError;
use crate::state::PresaleConfig;

pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.owner.key(), cfg.owner, PresaleError::UnauthorizedOwner);
    require!(cfg.paused, PresaleError::PresaleNotPaused);
    cfg.paused = false;
    emit!(PresaleUnpaused { owner: cfg.owner });
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, PresaleConfig>,
    pub owner: Signer<'info>,
}

#[event]
pub struct PresaleUnpaused {
    pub owner: Pubkey,
}
