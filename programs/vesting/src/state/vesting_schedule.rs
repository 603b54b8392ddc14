use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::VestingError;
use crate::utils::accrual;

/// Allocation category a schedule was created for.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VestingType {
    Public,
    Private,
    Team,
}

/// A single cliff-plus-linear-slice schedule.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    /// Unix seconds.
    pub start_time: i64,
    /// `start_time + cliff_period`.
    pub cliff_time: i64,
    pub end_time: i64,
    /// Seconds per release increment; never zero.
    pub slice_period: u64,
    /// Total locked amount.
    pub amount: u64,
    /// Cumulative released amount (<= amount).
    pub claimed: u64,
    pub vesting_type: VestingType,
}

impl VestingSchedule {
    pub const SIZE: usize =
        8 + // start_time
        8 + // cliff_time
        8 + // end_time
        8 + // slice_period
        8 + // amount
        8 + // claimed
        1;  // vesting_type

    pub fn claimable(&self, now: i64) -> Result<u64, VestingError> {
        accrual::claimable_amount(self, now)
    }

    pub fn remaining(&self) -> u64 {
        self.amount.saturating_sub(self.claimed)
    }
}

/// Instruction input for `create_vesting`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingParams {
    pub recipient: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
    pub cliff_period: u64,
    pub slice_period: u64,
    pub amount: u64,
    pub vesting_type: VestingType,
}

impl VestingParams {
    /// Validates in a fixed order (first failure wins) and builds an
    /// unclaimed schedule.
    pub fn into_schedule(self, now: i64) -> Result<VestingSchedule, VestingError> {
        if self.recipient == Pubkey::default() {
            return Err(VestingError::RecipientIsZeroAddress);
        }
        if self.slice_period == 0 {
            return Err(VestingError::SlicePeriodIsZero);
        }
        if self.start_time <= 0 {
            return Err(VestingError::StartTimeIsZero);
        }
        if self.amount == 0 {
            return Err(VestingError::NoTokensToVesting);
        }
        if self.end_time < now {
            return Err(VestingError::EndTimeInPast);
        }
        if self.end_time <= self.start_time {
            return Err(VestingError::EndTimeBeforeStartTime);
        }

        // end > start > 0, so the difference is positive and fits.
        let duration = (self.end_time - self.start_time) as u64;
        let cliff_and_slice = self
            .cliff_period
            .checked_add(self.slice_period)
            .ok_or(VestingError::CliffAndSlicePeriodTooLong)?;
        if cliff_and_slice > duration {
            return Err(VestingError::CliffAndSlicePeriodTooLong);
        }

        // cliff_period < duration <= i64::MAX, and cliff_time < end_time.
        let cliff_time = self
            .start_time
            .checked_add(self.cliff_period as i64)
            .ok_or(VestingError::MathOverflow)?;

        Ok(VestingSchedule {
            start_time: self.start_time,
            cliff_time,
            end_time: self.end_time,
            slice_period: self.slice_period,
            amount: self.amount,
            claimed: 0,
            vesting_type: self.vesting_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i64 = 1_767_225_600;
    const DAY: u64 = 86_400;

    fn params() -> VestingParams {
        VestingParams {
            recipient: Pubkey::new_unique(),
            start_time: T,
            end_time: T + 10 * DAY as i64,
            cliff_period: 5 * DAY,
            slice_period: DAY,
            amount: 10_000,
            vesting_type: VestingType::Public,
        }
    }

    #[test]
    fn builds_unclaimed_schedule_with_cliff_time() {
        let s = params().into_schedule(T - 1).unwrap();
        assert_eq!(s.cliff_time, T + 5 * DAY as i64);
        assert_eq!(s.end_time, T + 10 * DAY as i64);
        assert_eq!(s.claimed, 0);
        assert_eq!(s.remaining(), 10_000);
    }

    #[test]
    fn first_failing_check_wins() {
        // Every field is invalid; the recipient check runs first.
        let bad = VestingParams {
            recipient: Pubkey::default(),
            start_time: 0,
            end_time: -1,
            cliff_period: u64::MAX,
            slice_period: 0,
            amount: 0,
            vesting_type: VestingType::Team,
        };
        assert!(matches!(bad.into_schedule(T), Err(VestingError::RecipientIsZeroAddress)));

        let bad = VestingParams { recipient: Pubkey::new_unique(), ..bad };
        assert!(matches!(bad.into_schedule(T), Err(VestingError::SlicePeriodIsZero)));

        let bad = VestingParams { slice_period: 1, ..bad };
        assert!(matches!(bad.into_schedule(T), Err(VestingError::StartTimeIsZero)));

        let bad = VestingParams { start_time: T, ..bad };
        assert!(matches!(bad.into_schedule(T), Err(VestingError::NoTokensToVesting)));

        let bad = VestingParams { amount: 1, ..bad };
        assert!(matches!(bad.into_schedule(T), Err(VestingError::EndTimeInPast)));

        let bad = VestingParams { end_time: T, ..bad };
        assert!(matches!(bad.into_schedule(T), Err(VestingError::EndTimeBeforeStartTime)));

        let bad = VestingParams { end_time: T + 100, ..bad };
        assert!(matches!(bad.into_schedule(T), Err(VestingError::CliffAndSlicePeriodTooLong)));
    }

    #[test]
    fn end_time_equal_to_now_is_accepted() {
        let p = params();
        assert!(p.into_schedule(p.end_time).is_ok());
        assert!(matches!(p.into_schedule(p.end_time + 1), Err(VestingError::EndTimeInPast)));
    }

    #[test]
    fn cliff_plus_slice_boundary() {
        let exact = VestingParams { cliff_period: 9 * DAY, slice_period: DAY, ..params() };
        let s = exact.into_schedule(T).unwrap();
        // Exactly one slice between cliff and end.
        assert_eq!((s.end_time - s.cliff_time) as u64 / s.slice_period, 1);

        let over = VestingParams { cliff_period: 9 * DAY + 1, ..exact };
        assert!(matches!(over.into_schedule(T), Err(VestingError::CliffAndSlicePeriodTooLong)));
    }

    #[test]
    fn zero_cliff_is_allowed() {
        let s = VestingParams { cliff_period: 0, ..params() }.into_schedule(T).unwrap();
        assert_eq!(s.cliff_time, s.start_time);
    }
}
