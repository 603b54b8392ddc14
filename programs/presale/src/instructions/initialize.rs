use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CONFIG_SEED, ROUNDS_SEED, SALE_VAULT_SEED};
use crate::state::{PresaleConfig, RoundRegistry};
use crate::utils::price;

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let precision = price::precision_for(ctx.accounts.sale_mint.decimals)?;

    let cfg = &mut ctx.accounts.config;
    cfg.owner = ctx.accounts.owner.key();
    cfg.sale_mint = ctx.accounts.sale_mint.key();
    cfg.precision = precision;
    cfg.vesting_program = Pubkey::default();
    cfg.paused = false;
    cfg.bump = ctx.bumps.config;

    let rounds = &mut ctx.accounts.rounds;
    rounds.bump = ctx.bumps.rounds;
    rounds.rounds = Vec::new();

    emit!(PresaleInitialized {
        owner: cfg.owner,
        sale_mint: cfg.sale_mint,
        precision,
        sale_vault: ctx.accounts.sale_vault.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + PresaleConfig::SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, PresaleConfig>,

    #[account(
        init,
        payer = owner,
        space = RoundRegistry::space(),
        seeds = [ROUNDS_SEED],
        bump
    )]
    pub rounds: Box<Account<'info, RoundRegistry>>,

    #[account(
        init,
        payer = owner,
        token::mint = sale_mint,
        token::authority = config,
        seeds = [SALE_VAULT_SEED],
        bump
    )]
    pub sale_vault: Account<'info, TokenAccount>,

    pub sale_mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct PresaleInitialized {
    pub owner: Pubkey,
    pub sale_mint: Pubkey,
    pub precision: u64,
    pub sale_vault: Pubkey,
}
