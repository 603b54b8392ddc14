use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::{VestingParams, VestingSchedule, VestingType};

declare_id!("2c3jnu5GjUBqt2ncYRQPGh55TwzyntW53jvYdQ8sN221");

#[program]
pub mod vesting {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn set_presale_contract(ctx: Context<SetPresaleContract>) -> Result<()> {
        instructions::set_presale_contract(ctx)
    }

    /// Owner or the registered presale program only.
    pub fn create_vesting(ctx: Context<CreateVesting>, params: VestingParams) -> Result<()> {
        instructions::create_vesting(ctx, params)
    }

    pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
        instructions::claim_tokens(ctx)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    pub fn get_claimable_amount(ctx: Context<ReadVestings>, recipient: Pubkey) -> Result<u64> {
        instructions::get_claimable_amount(ctx, recipient)
    }

    pub fn get_vestings(
        ctx: Context<ReadVestings>,
        recipient: Pubkey,
    ) -> Result<Vec<VestingSchedule>> {
        instructions::get_vestings(ctx, recipient)
    }

    pub fn get_vestings_count(ctx: Context<ReadVestings>, recipient: Pubkey) -> Result<u64> {
        instructions::get_vestings_count(ctx, recipient)
    }
}
