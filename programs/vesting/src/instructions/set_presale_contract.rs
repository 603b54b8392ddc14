use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, PRESALE_CONFIG_SEED};
use crate::error::VestingError;
use crate::state::VestingConfig;

/// One-time registration of the sale program allowed to create schedules.
/// The stored authority is the sale program's config PDA, which signs its
/// `create_vesting` CPIs.
pub fn set_presale_contract(ctx: Context<SetPresaleContract>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.owner.key(), cfg.owner, VestingError::UnauthorizedOwner);
    require!(!cfg.presale_configured(), VestingError::PresaleAlreadySet);

    let presale = &ctx.accounts.presale_program;
    require!(presale.executable, VestingError::PresaleIsNotContract);

    let (presale_authority, _) =
        Pubkey::find_program_address(&[PRESALE_CONFIG_SEED], presale.key);
    cfg.presale_program = presale.key();
    cfg.presale_authority = presale_authority;

    msg!("Presale contract set to {}", cfg.presale_program);
    emit!(PresaleContractSet {
        presale_program: cfg.presale_program,
        presale_authority,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetPresaleContract<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, VestingConfig>,

    /// CHECK: Only its key and executable flag are read.
    pub presale_program: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

#[event]
pub struct PresaleContractSet {
    pub presale_program: Pubkey,
    pub presale_authority: Pubkey,
}
