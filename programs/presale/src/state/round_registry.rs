use anchor_lang::prelude::*;
use std::result::Result;
use vesting::VestingType;

use crate::constants::MAX_ROUNDS;
use crate::error::PresaleError;
use crate::utils::price;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundType {
    Public,
    Private,
    Team,
}

impl From<RoundType> for VestingType {
    fn from(t: RoundType) -> Self {
        match t {
            RoundType::Public => VestingType::Public,
            RoundType::Private => VestingType::Private,
            RoundType::Team => VestingType::Team,
        }
    }
}

/// A time-boxed fixed-price offer. Immutable after creation except
/// `sold_amount`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Round {
    pub round_type: RoundType,
    pub payment_mint: Pubkey,
    /// Payment base units per whole sale token.
    pub price: u64,
    /// Supply offered.
    pub token_amount: u64,
    /// Never exceeds `token_amount`.
    pub sold_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub vesting_start_time: i64,
    pub vesting_end_time: i64,
    pub vesting_cliff_period: u64,
    pub vesting_slice_period: u64,
}

impl Round {
    pub const SIZE: usize =
        1 +  // round_type
        32 + // payment_mint
        8 +  // price
        8 +  // token_amount
        8 +  // sold_amount
        8 +  // start_time
        8 +  // end_time
        8 +  // vesting_start_time
        8 +  // vesting_end_time
        8 +  // vesting_cliff_period
        8;   // vesting_slice_period

    /// Inclusive on both ends.
    pub fn is_active(&self, now: i64) -> bool {
        now >= self.start_time && now <= self.end_time
    }

    pub fn remaining(&self) -> u64 {
        self.token_amount.saturating_sub(self.sold_amount)
    }

    pub fn payment_for(&self, token_amount: u64, precision: u64) -> Result<u64, PresaleError> {
        price::to_payment(self.price, token_amount, precision)
    }

    pub fn tokens_for(&self, payment_amount: u64, precision: u64) -> Result<u64, PresaleError> {
        price::to_tokens(self.price, payment_amount, precision)
    }

    pub fn total_earnings(&self, precision: u64) -> Result<u64, PresaleError> {
        price::to_payment(self.price, self.sold_amount, precision)
    }
}

/// Instruction input for `create_round`; the payment mint is passed as an
/// account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundInput {
    pub round_type: RoundType,
    pub price: u64,
    pub token_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub vesting_start_time: i64,
    pub vesting_end_time: i64,
    pub vesting_cliff_period: u64,
    pub vesting_slice_period: u64,
}

/// Facts about the environment `create_round` validates against.
#[derive(Clone, Copy, Debug)]
pub struct RoundContext {
    pub now: i64,
    pub vesting_configured: bool,
    pub payment_mint: Pubkey,
    pub payment_mint_valid: bool,
}

/// Registry PDA holding every round; round id `n` lives at index `n - 1`.
#[account]
pub struct RoundRegistry {
    pub bump: u8,
    pub rounds: Vec<Round>,
}

impl RoundRegistry {
    pub const fn space() -> usize {
        8 + 1 + 4 + MAX_ROUNDS * Round::SIZE
    }

    pub fn rounds_count(&self) -> u64 {
        self.rounds.len() as u64
    }

    pub fn round(&self, round_id: u64) -> Result<&Round, PresaleError> {
        let index = Self::index_of(round_id, self.rounds.len())?;
        Ok(&self.rounds[index])
    }

    /// Validates `input` (first failure wins) and stores a new round.
    /// Returns the 1-based round id.
    pub fn create_round(&mut self, input: RoundInput, env: RoundContext) -> Result<u64, PresaleError> {
        if !env.vesting_configured {
            return Err(PresaleError::VestingNotConfigured);
        }
        if input.start_time <= env.now {
            return Err(PresaleError::StartTimeInPast);
        }
        if input.end_time <= input.start_time {
            return Err(PresaleError::EndTimeBeforeStartTime);
        }
        if input.price == 0 {
            return Err(PresaleError::InvalidPrice);
        }
        if input.token_amount == 0 {
            return Err(PresaleError::NoTokensToRound);
        }
        if !env.payment_mint_valid {
            return Err(PresaleError::InvalidPaymentToken);
        }
        if input.vesting_start_time < input.end_time {
            return Err(PresaleError::EndTimeBeforeVestingStartTime);
        }
        if input.vesting_slice_period == 0 {
            return Err(PresaleError::SlicePeriodIsZero);
        }
        if input.vesting_end_time <= input.vesting_start_time {
            return Err(PresaleError::VestingEndTimeBeforeVestingStartTime);
        }

        let vesting_duration = input
            .vesting_end_time
            .checked_sub(input.vesting_start_time)
            .ok_or(PresaleError::MathOverflow)? as u64;
        let cliff_and_slice = input
            .vesting_cliff_period
            .checked_add(input.vesting_slice_period)
            .ok_or(PresaleError::CliffAndSlicePeriodTooLong)?;
        if cliff_and_slice > vesting_duration {
            return Err(PresaleError::CliffAndSlicePeriodTooLong);
        }

        if self.rounds.len() >= MAX_ROUNDS {
            return Err(PresaleError::RoundLimitReached);
        }

        self.rounds.push(Round {
            round_type: input.round_type,
            payment_mint: env.payment_mint,
            price: input.price,
            token_amount: input.token_amount,
            sold_amount: 0,
            start_time: input.start_time,
            end_time: input.end_time,
            vesting_start_time: input.vesting_start_time,
            vesting_end_time: input.vesting_end_time,
            vesting_cliff_period: input.vesting_cliff_period,
            vesting_slice_period: input.vesting_slice_period,
        });
        Ok(self.rounds_count())
    }

    /// Admission checks for a purchase; returns the payment owed. Mutates
    /// nothing.
    pub fn quote_purchase(
        &self,
        round_id: u64,
        token_amount: u64,
        now: i64,
        precision: u64,
    ) -> Result<u64, PresaleError> {
        let round = self.round(round_id)?;
        if token_amount == 0 {
            return Err(PresaleError::NoTokensToBuy);
        }
        if !round.is_active(now) {
            return Err(PresaleError::RoundNotActive);
        }
        if token_amount > round.remaining() {
            return Err(PresaleError::InsufficientTokensInRound);
        }

        let payment = round.payment_for(token_amount, precision)?;
        if payment == 0 {
            return Err(PresaleError::PaymentAmountIsZero);
        }
        Ok(payment)
    }

    /// Adds `token_amount` to the round's sold amount.
    pub fn record_sale(&mut self, round_id: u64, token_amount: u64) -> Result<(), PresaleError> {
        let index = Self::index_of(round_id, self.rounds.len())?;
        let round = &mut self.rounds[index];
        let sold = round
            .sold_amount
            .checked_add(token_amount)
            .ok_or(PresaleError::MathOverflow)?;
        if sold > round.token_amount {
            return Err(PresaleError::InsufficientTokensInRound);
        }
        round.sold_amount = sold;
        Ok(())
    }

    fn index_of(round_id: u64, count: usize) -> Result<usize, PresaleError> {
        if round_id == 0 || round_id > count as u64 {
            return Err(PresaleError::InvalidRoundId);
        }
        Ok((round_id - 1) as usize)
    }
}
