use anchor_lang::prelude::*;

use crate::instructions::ReadRounds;

pub fn get_payment_amount_for_tokens(
    ctx: Context<ReadRounds>,
    round_id: u64,
    token_amount: u64,
) -> Result<u64> {
    let round = ctx.accounts.rounds.round(round_id)?;
    Ok(round.payment_for(token_amount, ctx.accounts.config.precision)?)
}

pub fn get_token_amount_for_payment(
    ctx: Context<ReadRounds>,
    round_id: u64,
    payment_amount: u64,
) -> Result<u64> {
    let round = ctx.accounts.rounds.round(round_id)?;
    Ok(round.tokens_for(payment_amount, ctx.accounts.config.precision)?)
}

pub fn get_total_earnings_for_round(ctx: Context<ReadRounds>, round_id: u64) -> Result<u64> {
    let round = ctx.accounts.rounds.round(round_id)?;
    Ok(round.total_earnings(ctx.accounts.config.precision)?)
}
