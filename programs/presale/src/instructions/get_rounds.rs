use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, ROUNDS_SEED};
use crate::state::{PresaleConfig, Round, RoundRegistry};

pub fn get_rounds_count(ctx: Context<ReadRounds>) -> Result<u64> {
    Ok(ctx.accounts.rounds.rounds_count())
}

pub fn get_round(ctx: Context<ReadRounds>, round_id: u64) -> Result<Round> {
    Ok(*ctx.accounts.rounds.round(round_id)?)
}

/// The full registry does not fit in return data; each round is emitted
/// as its own event instead.
pub fn get_all_rounds(ctx: Context<ReadRounds>) -> Result<u64> {
    let rounds = &ctx.accounts.rounds.rounds;
    for (i, round) in rounds.iter().enumerate() {
        emit!(RoundSnapshot {
            round_id: i as u64 + 1,
            round: *round,
        });
    }
    Ok(rounds.len() as u64)
}

#[derive(Accounts)]
pub struct ReadRounds<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, PresaleConfig>,

    #[account(seeds = [ROUNDS_SEED], bump = rounds.bump)]
    pub rounds: Box<Account<'info, RoundRegistry>>,
}

#[event]
pub struct RoundSnapshot {
    pub round_id: u64,
    pub round: Round,
}
