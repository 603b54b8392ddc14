use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::MAX_VESTINGS_PER_RECIPIENT;
use crate::error::VestingError;
use crate::state::VestingSchedule;

/// Per-recipient PDA holding that recipient's schedules in creation order.
#[account]
pub struct RecipientVestings {
    pub recipient: Pubkey,
    pub bump: u8,
    /// Append-only; schedules are never removed.
    pub schedules: Vec<VestingSchedule>,
}

impl RecipientVestings {
    /// Space for discriminator + header + a full schedule list.
    pub const fn space() -> usize {
        8 + 32 + 1 + 4 + MAX_VESTINGS_PER_RECIPIENT * VestingSchedule::SIZE
    }

    pub fn has_capacity(&self) -> bool {
        self.schedules.len() < MAX_VESTINGS_PER_RECIPIENT
    }

    /// Appends a schedule and returns its index.
    pub fn push(&mut self, schedule: VestingSchedule) -> Result<u32, VestingError> {
        if !self.has_capacity() {
            return Err(VestingError::VestingLimitReached);
        }
        self.schedules.push(schedule);
        Ok((self.schedules.len() - 1) as u32)
    }

    /// Sum of every schedule's claimable amount at `now`.
    pub fn claimable_amount(&self, now: i64) -> Result<u64, VestingError> {
        self.schedules.iter().try_fold(0u64, |acc, s| {
            acc.checked_add(s.claimable(now)?)
                .ok_or(VestingError::MathOverflow)
        })
    }

    /// Sum of `amount - claimed` across all schedules.
    pub fn outstanding(&self) -> Result<u64, VestingError> {
        self.schedules.iter().try_fold(0u64, |acc, s| {
            acc.checked_add(s.remaining())
                .ok_or(VestingError::MathOverflow)
        })
    }

    /// Releases everything claimable at `now` and returns the total.
    ///
    /// All claimables are computed before any schedule is touched, so a
    /// failure (including `NoTokensToClaim`) leaves every schedule as it was.
    pub fn claim(&mut self, now: i64) -> Result<u64, VestingError> {
        let mut claimables = Vec::with_capacity(self.schedules.len());
        let mut total: u64 = 0;
        for s in self.schedules.iter() {
            let c = s.claimable(now)?;
            total = total.checked_add(c).ok_or(VestingError::MathOverflow)?;
            claimables.push(c);
        }
        if total == 0 {
            return Err(VestingError::NoTokensToClaim);
        }

        for (s, c) in self.schedules.iter_mut().zip(claimables) {
            // c <= amount - claimed by construction of the accrual.
            s.claimed += c;
        }
        Ok(total)
    }
}

/// Schedules of a recipient whose account may not exist yet.
pub fn schedules_of(vestings: Option<&RecipientVestings>) -> &[VestingSchedule] {
    match vestings {
        Some(v) => &v.schedules,
        None => &[],
    }
}

/// Claimable total of a recipient whose account may not exist yet.
pub fn claimable_of(vestings: Option<&RecipientVestings>, now: i64) -> Result<u64, VestingError> {
    vestings.map_or(Ok(0), |v| v.claimable_amount(now))
}

pub fn outstanding_of(vestings: Option<&RecipientVestings>) -> Result<u64, VestingError> {
    vestings.map_or(Ok(0), |v| v.outstanding())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{VestingParams, VestingType};

    const T: i64 = 1_767_225_600;
    const DAY: u64 = 86_400;

    fn empty() -> RecipientVestings {
        RecipientVestings {
            recipient: Pubkey::new_unique(),
            bump: 254,
            schedules: Vec::new(),
        }
    }

    fn add(
        v: &mut RecipientVestings,
        amount: u64,
        start_offset: u64,
        cliff: u64,
        end_offset: u64,
        slice: u64,
    ) {
        let s = VestingParams {
            recipient: v.recipient,
            start_time: T + start_offset as i64,
            end_time: T + end_offset as i64,
            cliff_period: cliff,
            slice_period: slice,
            amount,
            vesting_type: VestingType::Private,
        }
        .into_schedule(T)
        .unwrap();
        v.push(s).unwrap();
    }

    #[test]
    fn claim_then_reclaim_at_same_instant() {
        let mut v = empty();
        add(&mut v, 10_000, 0, 5 * DAY, 10 * DAY, DAY);
        let now = T + 7 * DAY as i64;

        assert_eq!(v.claimable_amount(now).unwrap(), 4_000);
        assert_eq!(v.claim(now).unwrap(), 4_000);
        assert_eq!(v.claimable_amount(now).unwrap(), 0);

        assert!(matches!(v.claim(now), Err(VestingError::NoTokensToClaim)));
        assert_eq!(v.schedules[0].claimed, 4_000);
        assert_eq!(v.outstanding().unwrap(), 6_000);
    }

    #[test]
    fn claim_before_cliff_mutates_nothing() {
        let mut v = empty();
        add(&mut v, 500, 0, 2 * DAY, 4 * DAY, DAY);
        add(&mut v, 800, DAY, 3 * DAY, 6 * DAY, DAY);
        let before = v.schedules.clone();

        assert!(matches!(v.claim(T + DAY as i64), Err(VestingError::NoTokensToClaim)));
        assert_eq!(v.schedules, before);
    }

    #[test]
    fn sum_over_heterogeneous_schedules() {
        let mut v = empty();
        // 5 slices of a day after a 5-day cliff.
        add(&mut v, 10_000, 0, 5 * DAY, 10 * DAY, DAY);
        // No cliff, 3 slices of 3 days.
        add(&mut v, 9_000, 0, 0, 9 * DAY, 3 * DAY);
        // Starts on day 2, cliff on day 3, 3 slices of 2 days.
        add(&mut v, 7_000, 2 * DAY, DAY, 9 * DAY, 2 * DAY);

        let now = T + 7 * DAY as i64;
        let per_schedule: Vec<u64> = v
            .schedules
            .iter()
            .map(|s| s.claimable(now).unwrap())
            .collect();
        assert_eq!(per_schedule, vec![4_000, 6_000, 4_666]);
        assert_eq!(v.claimable_amount(now).unwrap(), 14_666);

        assert_eq!(v.claim(now).unwrap(), 14_666);
        assert_eq!(v.schedules[2].claimed, 4_666);

        // After every end time the remainders, including rounding dust, unlock.
        let end = T + 10 * DAY as i64;
        assert_eq!(v.claimable_amount(end).unwrap(), 26_000 - 14_666);
        assert_eq!(v.claim(end).unwrap(), 11_334);
        assert_eq!(v.outstanding().unwrap(), 0);
    }

    #[test]
    fn partial_claim_only_touches_schedules_with_accrual() {
        let mut v = empty();
        add(&mut v, 1_000, 0, 0, 10 * DAY, DAY);
        add(&mut v, 1_000, 0, 8 * DAY, 10 * DAY, DAY);

        assert_eq!(v.claim(T + 3 * DAY as i64).unwrap(), 300);
        assert_eq!(v.schedules[0].claimed, 300);
        assert_eq!(v.schedules[1].claimed, 0);
    }

    #[test]
    fn schedule_list_is_bounded() {
        let mut v = empty();
        for _ in 0..MAX_VESTINGS_PER_RECIPIENT {
            add(&mut v, 1, 0, 0, DAY, DAY);
        }
        let extra = v.schedules[0];
        assert!(matches!(v.push(extra), Err(VestingError::VestingLimitReached)));
        assert_eq!(v.schedules.len(), MAX_VESTINGS_PER_RECIPIENT);
    }

    #[test]
    fn full_list_fits_in_return_data() {
        let mut v = empty();
        for _ in 0..MAX_VESTINGS_PER_RECIPIENT {
            add(&mut v, u64::MAX, 0, 0, DAY, DAY);
        }
        let mut schedules = Vec::new();
        v.schedules.serialize(&mut schedules).unwrap();
        assert!(schedules.len() <= 1024);

        let mut account = Vec::new();
        v.serialize(&mut account).unwrap();
        assert!(RecipientVestings::space() >= 8 + account.len());
    }

    #[test]
    fn recipient_without_account_reads_as_empty() {
        assert!(schedules_of(None).is_empty());
        assert_eq!(claimable_of(None, T).unwrap(), 0);
        assert_eq!(outstanding_of(None).unwrap(), 0);

        let mut v = empty();
        add(&mut v, 10_000, 0, 5 * DAY, 10 * DAY, DAY);
        let now = T + 7 * DAY as i64;
        assert_eq!(schedules_of(Some(&v)).len(), 1);
        assert_eq!(claimable_of(Some(&v), now).unwrap(), 4_000);
        assert_eq!(outstanding_of(Some(&v)).unwrap(), 10_000);
    }
}
