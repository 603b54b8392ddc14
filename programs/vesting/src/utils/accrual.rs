//! Slice-based accrual for cliff-plus-linear schedules.
//!
//! - before `cliff_time`: nothing is vested
//! - at or after `end_time`: the full amount is vested
//! - in between: `amount * completed_slices / total_slices`, floored, where
//!   slices are counted from `cliff_time`

use crate::error::VestingError;
use crate::state::VestingSchedule;

/// Amount vested at `now`, ignoring what has already been claimed.
pub fn vested_amount(schedule: &VestingSchedule, now: i64) -> Result<u64, VestingError> {
    if now < schedule.cliff_time {
        return Ok(0);
    }
    if now >= schedule.end_time {
        return Ok(schedule.amount);
    }
    if schedule.slice_period == 0 {
        return Err(VestingError::SlicePeriodIsZero);
    }

    let elapsed = elapsed_seconds(schedule.cliff_time, now)?;
    let span = elapsed_seconds(schedule.cliff_time, schedule.end_time)?;
    let completed_slices = elapsed / schedule.slice_period;
    let total_slices = span / schedule.slice_period;
    // Unreachable for schedules built through `VestingParams::into_schedule`.
    if total_slices == 0 {
        return Err(VestingError::ZeroSliceCount);
    }

    let vested = (schedule.amount as u128)
        .checked_mul(completed_slices as u128)
        .ok_or(VestingError::MathOverflow)?
        / (total_slices as u128);
    u64::try_from(vested).map_err(|_| VestingError::MathOverflow)
}

/// Amount releasable at `now`; never negative.
pub fn claimable_amount(schedule: &VestingSchedule, now: i64) -> Result<u64, VestingError> {
    let vested = vested_amount(schedule, now)?;
    Ok(vested.saturating_sub(schedule.claimed))
}

fn elapsed_seconds(from: i64, to: i64) -> Result<u64, VestingError> {
    let diff = to.checked_sub(from).ok_or(VestingError::MathOverflow)?;
    u64::try_from(diff).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::VestingType;

    const T: i64 = 1_767_225_600;
    const DAY: i64 = 86_400;

    fn schedule(amount: u64, cliff: i64, end: i64, slice: i64) -> VestingSchedule {
        VestingSchedule {
            start_time: T,
            cliff_time: T + cliff,
            end_time: T + end,
            slice_period: slice as u64,
            amount,
            claimed: 0,
            vesting_type: VestingType::Public,
        }
    }

    #[test]
    fn nothing_before_cliff() {
        let s = schedule(10_000, 5 * DAY, 10 * DAY, DAY);
        assert_eq!(claimable_amount(&s, T).unwrap(), 0);
        assert_eq!(claimable_amount(&s, T + 5 * DAY - 1).unwrap(), 0);
        // At the cliff no slice has completed yet.
        assert_eq!(claimable_amount(&s, T + 5 * DAY).unwrap(), 0);
    }

    #[test]
    fn two_of_five_slices_after_cliff() {
        let mut s = schedule(10_000, 5 * DAY, 10 * DAY, DAY);
        let now = T + 7 * DAY;
        assert_eq!(claimable_amount(&s, now).unwrap(), 4_000);
        // Partial slices do not count.
        assert_eq!(claimable_amount(&s, now + DAY - 1).unwrap(), 4_000);

        s.claimed = 4_000;
        assert_eq!(claimable_amount(&s, now).unwrap(), 0);
        assert_eq!(claimable_amount(&s, now + DAY).unwrap(), 2_000);
    }

    #[test]
    fn full_remainder_at_and_after_end() {
        let mut s = schedule(10_000, 5 * DAY, 10 * DAY, DAY);
        s.claimed = 3_333;
        assert_eq!(claimable_amount(&s, T + 10 * DAY).unwrap(), 6_667);
        assert_eq!(claimable_amount(&s, T + 400 * DAY).unwrap(), 6_667);
    }

    #[test]
    fn floors_and_never_goes_negative() {
        // 10 over 3 slices: 3, 6, then the full 10 at end.
        let mut s = schedule(10, 0, 3 * DAY, DAY);
        assert_eq!(vested_amount(&s, T + DAY).unwrap(), 3);
        assert_eq!(vested_amount(&s, T + 2 * DAY).unwrap(), 6);
        assert_eq!(vested_amount(&s, T + 3 * DAY).unwrap(), 10);

        // More claimed than the floored vested amount: zero, not an error.
        s.claimed = 5;
        assert_eq!(claimable_amount(&s, T + DAY).unwrap(), 0);
    }

    #[test]
    fn uneven_tail_is_released_at_end() {
        // 10 days after cliff with 3-day slices: 3 whole slices, the
        // remaining day only unlocks at end.
        let s = schedule(9_000, 0, 10 * DAY, 3 * DAY);
        assert_eq!(vested_amount(&s, T + 9 * DAY).unwrap(), 9_000);
        assert_eq!(vested_amount(&s, T + 6 * DAY).unwrap(), 6_000);
        assert_eq!(vested_amount(&s, T + 10 * DAY).unwrap(), 9_000);
    }

    #[test]
    fn non_decreasing_over_time() {
        let s = schedule(1_000_003, 2 * DAY, 30 * DAY, 7 * 3_600);
        let mut last = 0;
        let mut now = T - DAY;
        while now <= T + 31 * DAY {
            let v = claimable_amount(&s, now).unwrap();
            assert!(v >= last, "claimable decreased at {now}");
            last = v;
            now += 1_800;
        }
        assert_eq!(last, 1_000_003);
    }

    #[test]
    fn zero_slice_count_fails_fast() {
        // Hand-built: slice longer than cliff-to-end.
        let s = schedule(100, 0, 10, 100);
        assert!(matches!(
            claimable_amount(&s, T + 5),
            Err(VestingError::ZeroSliceCount)
        ));

        let s = schedule(100, 0, 10, 0);
        assert!(matches!(
            claimable_amount(&s, T + 5),
            Err(VestingError::SlicePeriodIsZero)
        ));
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        let s = schedule(u64::MAX, 0, 4 * DAY, DAY);
        assert_eq!(vested_amount(&s, T + 2 * DAY).unwrap(), u64::MAX / 2);
    }
}
