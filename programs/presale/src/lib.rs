use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::{Purchase, Round, RoundInput, RoundType};

declare_id!("GS2nC7yPbGXSwa3pXBNh3evrtV4n1faGc5qEJzbf6TKK");

#[program]
pub mod presale {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn set_vesting_contract(ctx: Context<SetVestingContract>) -> Result<()> {
        instructions::set_vesting_contract(ctx)
    }

    pub fn create_round(ctx: Context<CreateRound>, input: RoundInput) -> Result<()> {
        instructions::create_round(ctx, input)
    }

    /// Pays for `token_amount` sale tokens in round `round_id` and locks
    /// them in a vesting schedule for the buyer.
    pub fn buy_tokens(
        ctx: Context<BuyTokens>,
        round_id: u64,
        token_amount: u64,
        native_amount: u64,
    ) -> Result<u64> {
        instructions::buy_tokens(ctx, round_id, token_amount, native_amount)
    }

    pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
        instructions::withdraw_tokens(ctx, amount)
    }

    pub fn withdraw_all_tokens(ctx: Context<WithdrawTokens>) -> Result<()> {
        instructions::withdraw_all_tokens(ctx)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause(ctx)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    pub fn get_rounds_count(ctx: Context<ReadRounds>) -> Result<u64> {
        instructions::get_rounds_count(ctx)
    }

    pub fn get_round(ctx: Context<ReadRounds>, round_id: u64) -> Result<Round> {
        instructions::get_round(ctx, round_id)
    }

    pub fn get_all_rounds(ctx: Context<ReadRounds>) -> Result<u64> {
        instructions::get_all_rounds(ctx)
    }

    pub fn get_payment_amount_for_tokens(
        ctx: Context<ReadRounds>,
        round_id: u64,
        token_amount: u64,
    ) -> Result<u64> {
        instructions::get_payment_amount_for_tokens(ctx, round_id, token_amount)
    }

    pub fn get_token_amount_for_payment(
        ctx: Context<ReadRounds>,
        round_id: u64,
        payment_amount: u64,
    ) -> Result<u64> {
        instructions::get_token_amount_for_payment(ctx, round_id, payment_amount)
    }

    pub fn get_total_earnings_for_round(ctx: Context<ReadRounds>, round_id: u64) -> Result<u64> {
        instructions::get_total_earnings_for_round(ctx, round_id)
    }

    pub fn get_user_purchases(ctx: Context<ReadPurchases>, buyer: Pubkey) -> Result<Vec<Purchase>> {
        instructions::get_user_purchases(ctx, buyer)
    }

    pub fn get_user_purchases_count(ctx: Context<ReadPurchases>, buyer: Pubkey) -> Result<u64> {
        instructions::get_user_purchases_count(ctx, buyer)
    }
}
