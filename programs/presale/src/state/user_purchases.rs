use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::MAX_PURCHASES_PER_BUYER;
use crate::error::PresaleError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Purchase {
    pub round_id: u64,
    pub token_amount: u64,
}

impl Purchase {
    pub const SIZE: usize = 8 + 8;
}

/// Append-only purchase log of one buyer.
#[account]
pub struct UserPurchases {
    pub buyer: Pubkey,
    pub bump: u8,
    pub purchases: Vec<Purchase>,
}

impl UserPurchases {
    pub const fn space() -> usize {
        8 + 32 + 1 + 4 + MAX_PURCHASES_PER_BUYER * Purchase::SIZE
    }

    pub fn has_capacity(&self) -> bool {
        self.purchases.len() < MAX_PURCHASES_PER_BUYER
    }

    pub fn record(&mut self, purchase: Purchase) -> Result<(), PresaleError> {
        if !self.has_capacity() {
            return Err(PresaleError::PurchaseLimitReached);
        }
        self.purchases.push(purchase);
        Ok(())
    }
}

/// Purchases of a buyer whose log may not exist yet.
pub fn purchases_of(log: Option<&UserPurchases>) -> &[Purchase] {
    match log {
        Some(l) => &l.purchases,
        None => &[],
    }
}
