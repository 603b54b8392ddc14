use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CONFIG_SEED, VAULT_SEED};
use crate::state::VestingConfig;

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    cfg.owner = ctx.accounts.owner.key();
    cfg.mint = ctx.accounts.mint.key();
    cfg.presale_program = Pubkey::default();
    cfg.presale_authority = Pubkey::default();
    cfg.total_locked = 0;
    cfg.bump = ctx.bumps.config;

    emit!(VestingInitialized {
        owner: cfg.owner,
        mint: cfg.mint,
        vault: ctx.accounts.vault.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + VestingConfig::SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, VestingConfig>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = config,
        seeds = [VAULT_SEED, config.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
}
