use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::PresaleError;
use crate::state::PresaleConfig;

pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.owner.key(), cfg.owner, PresaleError::UnauthorizedOwner);
    require!(!cfg.paused, PresaleError::PresaleIsPaused);
    cfg.paused = true;
    emit!(PresalePaused { owner: cfg.owner });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, PresaleConfig>,
    pub owner: Signer<'info>,
}

#[event]
pub struct PresalePaused {
    pub owner: Pubkey,
}
