use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, ROUNDS_SEED};
use crate::error::PresaleError;
use crate::state::{PresaleConfig, RoundContext, RoundInput, RoundRegistry, RoundType};
use crate::utils::token;

pub fn create_round(ctx: Context<CreateRound>, input: RoundInput) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(ctx.accounts.owner.key(), cfg.owner, PresaleError::UnauthorizedOwner);

    let env = RoundContext {
        now: Clock::get()?.unix_timestamp,
        vesting_configured: cfg.vesting_configured(),
        payment_mint: ctx.accounts.payment_mint.key(),
        payment_mint_valid: token::is_valid_mint(&ctx.accounts.payment_mint),
    };
    let round_id = ctx.accounts.rounds.create_round(input, env)?;

    emit!(RoundCreated {
        round_id,
        round_type: input.round_type,
        payment_mint: env.payment_mint,
        price: input.price,
        token_amount: input.token_amount,
        start_time: input.start_time,
        end_time: input.end_time,
        vesting_start_time: input.vesting_start_time,
        vesting_end_time: input.vesting_end_time,
        vesting_cliff_period: input.vesting_cliff_period,
        vesting_slice_period: input.vesting_slice_period,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateRound<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, PresaleConfig>,

    #[account(mut, seeds = [ROUNDS_SEED], bump = rounds.bump)]
    pub rounds: Box<Account<'info, RoundRegistry>>,

    /// CHECK: Validated in-handler as an initialized SPL Token mint.
    pub payment_mint: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

#[event]
pub struct RoundCreated {
    pub round_id: u64,
    pub round_type: RoundType,
    pub payment_mint: Pubkey,
    pub price: u64,
    pub token_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub vesting_start_time: i64,
    pub vesting_end_time: i64,
    pub vesting_cliff_period: u64,
    pub vesting_slice_period: u64,
}
