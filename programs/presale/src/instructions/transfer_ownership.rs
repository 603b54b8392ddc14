use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::PresaleError;
use crate::state::PresaleConfig;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    require!(new_owner != Pubkey::default(), PresaleError::InvalidOwner);

    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.owner.key(), cfg.owner, PresaleError::UnauthorizedOwner);

    let previous_owner = cfg.owner;
    cfg.owner = new_owner;

    msg!("Ownership transferred to {}", new_owner);
    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, PresaleConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
