use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::PresaleError;
use crate::state::PresaleConfig;

pub fn set_vesting_contract(ctx: Context<SetVestingContract>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.owner.key(), cfg.owner, PresaleError::UnauthorizedOwner);
    require!(!cfg.vesting_configured(), PresaleError::VestingAlreadySet);
    require!(
        ctx.accounts.vesting_program.executable,
        PresaleError::VestingIsNotContract
    );

    cfg.vesting_program = ctx.accounts.vesting_program.key();

    msg!("Vesting contract set to {}", cfg.vesting_program);
    emit!(VestingContractSet {
        vesting_program: cfg.vesting_program,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetVestingContract<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, PresaleConfig>,

    /// CHECK: Only its key and executable flag are read.
    pub vesting_program: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

#[event]
pub struct VestingContractSet {
    pub vesting_program: Pubkey,
}
