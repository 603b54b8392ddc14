use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{CONFIG_SEED, VAULT_SEED, VESTINGS_SEED};
use crate::error::VestingError;
use crate::state::{RecipientVestings, VestingConfig};

pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let amount = ctx.accounts.recipient_vestings.claim(now)?;
    ctx.accounts.config.release(amount)?;

    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

    // Push only after the claimed amounts are committed.
    let signer_seeds: &[&[&[u8]]] = &[&[CONFIG_SEED, &[ctx.accounts.config.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.recipient_token_account.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(TokensClaimed {
        recipient: ctx.accounts.recipient.key(),
        amount,
        total_locked: ctx.accounts.config.total_locked,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimTokens<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        mut,
        seeds = [VESTINGS_SEED, recipient.key().as_ref()],
        bump = recipient_vestings.bump,
    )]
    pub recipient_vestings: Box<Account<'info, RecipientVestings>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = recipient_token_account.mint == config.mint @ VestingError::InvalidTokenMint,
        constraint = recipient_token_account.owner == recipient.key() @ VestingError::InvalidTokenAccount,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub recipient: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub recipient: Pubkey,
    pub amount: u64,
    pub total_locked: u64,
}
