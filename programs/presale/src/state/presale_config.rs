use anchor_lang::prelude::*;

/// Singleton presale config PDA.
#[account]
pub struct PresaleConfig {
    /// Owner authority (rounds, pause, withdrawals).
    pub owner: Pubkey,
    /// Mint of the token on sale.
    pub sale_mint: Pubkey,
    /// 10^decimals of the sale mint.
    pub precision: u64,
    /// Vesting program receiving purchases (default key until set).
    pub vesting_program: Pubkey,
    /// Blocks purchases only.
    pub paused: bool,
    pub bump: u8,
}

impl PresaleConfig {
    pub const SIZE: usize =
        32 + // owner
        32 + // sale_mint
        8 +  // precision
        32 + // vesting_program
        1 +  // paused
        1;   // bump

    pub fn vesting_configured(&self) -> bool {
        self.vesting_program != Pubkey::default()
    }
}
