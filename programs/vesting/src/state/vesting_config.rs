use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::VestingError;

/// Singleton vesting config PDA.
#[account]
pub struct VestingConfig {
    /// Owner authority; may create schedules directly.
    pub owner: Pubkey,
    /// Mint of the vested token.
    pub mint: Pubkey,
    /// Delegate sale program (default key until set).
    pub presale_program: Pubkey,
    /// Config PDA of the delegate program; the identity allowed to create schedules.
    pub presale_authority: Pubkey,
    /// Sum of `amount - claimed` across every schedule.
    pub total_locked: u64,
    /// PDA bump.
    pub bump: u8,
}

impl VestingConfig {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        32 + // presale_program
        32 + // presale_authority
        8 +  // total_locked
        1;   // bump

    pub fn presale_configured(&self) -> bool {
        self.presale_program != Pubkey::default()
    }

    /// Owner, or the delegate once it has been configured.
    pub fn is_authorized(&self, caller: &Pubkey) -> bool {
        *caller == self.owner || (self.presale_configured() && *caller == self.presale_authority)
    }

    pub fn lock(&mut self, amount: u64) -> Result<(), VestingError> {
        self.total_locked = self
            .total_locked
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    pub fn release(&mut self, amount: u64) -> Result<(), VestingError> {
        self.total_locked = self
            .total_locked
            .checked_sub(amount)
            .ok_or(VestingError::LockedTotalUnderflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(owner: Pubkey) -> VestingConfig {
        VestingConfig {
            owner,
            mint: Pubkey::new_unique(),
            presale_program: Pubkey::default(),
            presale_authority: Pubkey::default(),
            total_locked: 0,
            bump: 255,
        }
    }

    #[test]
    fn delegate_authorized_only_once_configured() {
        let owner = Pubkey::new_unique();
        let mut cfg = config(owner);
        let stranger = Pubkey::new_unique();

        assert!(cfg.is_authorized(&owner));
        assert!(!cfg.is_authorized(&stranger));
        // Unset delegate is the default key; it must not authorize anyone.
        assert!(!cfg.is_authorized(&Pubkey::default()));

        cfg.presale_program = Pubkey::new_unique();
        cfg.presale_authority = stranger;
        assert!(cfg.is_authorized(&stranger));
        assert!(cfg.is_authorized(&owner));
    }

    #[test]
    fn locked_total_tracks_lock_and_release() {
        let mut cfg = config(Pubkey::new_unique());
        cfg.lock(700).unwrap();
        cfg.lock(300).unwrap();
        cfg.release(400).unwrap();
        assert_eq!(cfg.total_locked, 600);

        assert!(matches!(cfg.release(601), Err(VestingError::LockedTotalUnderflow)));
        assert_eq!(cfg.total_locked, 600);

        cfg.total_locked = u64::MAX;
        assert!(matches!(cfg.lock(1), Err(VestingError::MathOverflow)));
    }
}
