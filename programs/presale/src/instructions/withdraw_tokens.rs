use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::CONFIG_SEED;
use crate::error::PresaleError;
use crate::state::PresaleConfig;

pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
    withdraw(ctx, Some(amount))
}

/// Drains the whole balance of `source`.
pub fn withdraw_all_tokens(ctx: Context<WithdrawTokens>) -> Result<()> {
    withdraw(ctx, None)
}

fn withdraw(ctx: Context<WithdrawTokens>, amount: Option<u64>) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(ctx.accounts.owner.key(), cfg.owner, PresaleError::UnauthorizedOwner);

    let balance = ctx.accounts.source.amount;
    let amount = amount.unwrap_or(balance);
    require!(amount > 0, PresaleError::NoTokensToWithdraw);
    require!(balance >= amount, PresaleError::InsufficientBalance);

    let signer_seeds: &[&[&[u8]]] = &[&[CONFIG_SEED, &[cfg.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.source.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    msg!("Withdrew {} of mint {}", amount, ctx.accounts.source.mint);
    emit!(TokensWithdrawn {
        owner: cfg.owner,
        mint: ctx.accounts.source.mint,
        amount,
        remaining: balance - amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawTokens<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, PresaleConfig>,

    /// Any token account held by the config PDA (treasury or sale vault).
    #[account(
        mut,
        constraint = source.owner == config.key() @ PresaleError::InvalidTokenAccount,
    )]
    pub source: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination.mint == source.mint @ PresaleError::InvalidTokenMint,
        constraint = destination.owner == owner.key() @ PresaleError::InvalidTokenAccount,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensWithdrawn {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub remaining: u64,
}
