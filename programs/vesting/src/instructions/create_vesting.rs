use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{CONFIG_SEED, VAULT_SEED, VESTINGS_SEED};
use crate::error::VestingError;
use crate::state::{RecipientVestings, VestingConfig, VestingParams, VestingType};

pub fn create_vesting(ctx: Context<CreateVesting>, params: VestingParams) -> Result<()> {
    require!(
        ctx.accounts.config.is_authorized(&ctx.accounts.authority.key()),
        VestingError::UnauthorizedCaller
    );

    let now = Clock::get()?.unix_timestamp;
    let schedule = params.into_schedule(now)?;
    require!(
        ctx.accounts.recipient_vestings.has_capacity(),
        VestingError::VestingLimitReached
    );

    // Pull before any accounting changes.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.source.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        schedule.amount,
    )?;

    let vestings = &mut ctx.accounts.recipient_vestings;
    if vestings.recipient == Pubkey::default() {
        vestings.recipient = params.recipient;
        vestings.bump = ctx.bumps.recipient_vestings;
    }
    let index = vestings.push(schedule)?;

    let cfg = &mut ctx.accounts.config;
    cfg.lock(schedule.amount)?;

    emit!(VestingScheduleCreated {
        recipient: params.recipient,
        index,
        start_time: schedule.start_time,
        cliff_time: schedule.cliff_time,
        end_time: schedule.end_time,
        slice_period: schedule.slice_period,
        amount: schedule.amount,
        vesting_type: schedule.vesting_type,
        total_locked: cfg.total_locked,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(params: VestingParams)]
pub struct CreateVesting<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        init_if_needed,
        payer = payer,
        space = RecipientVestings::space(),
        seeds = [VESTINGS_SEED, params.recipient.as_ref()],
        bump
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
        constraint = source.mint == config.mint @ VestingError::InvalidTokenMint,
        constraint = source.owner == authority.key() @ VestingError::InvalidTokenAccount,
    )]
    pub source: Account<'info, TokenAccount>,

    /// Owner, or the presale config PDA signing through CPI.
    pub authority: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingScheduleCreated {
    pub recipient: Pubkey,
    pub index: u32,
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub slice_period: u64,
    pub amount: u64,
    pub vesting_type: VestingType,
    pub total_locked: u64,
}
