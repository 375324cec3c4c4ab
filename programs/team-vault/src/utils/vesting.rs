//! Linear release math and escrow time-bucket rounding.
//!
//! The allocation releases at a fixed per-second rate, floored once at
//! initialization scale: `rate = total_allocation / duration`. The terminal
//! unlocked amount is therefore `total_allocation - (total_allocation %
//! duration)`; the remainder never becomes claimable.

use crate::constants::WEEK;
use crate::error::VaultError;

/// Total amount unlocked at `now` for a schedule of `total_allocation`
/// releasing linearly over `duration` seconds from `start_ts`.
pub fn unlocked_amount(
    total_allocation: u64,
    duration: i64,
    start_ts: i64,
    now: i64,
) -> Result<u64, VaultError> {
    if duration <= 0 {
        return Err(VaultError::InvalidConfig);
    }
    if now <= start_ts {
        return Ok(0);
    }
    let elapsed = (now - start_ts).min(duration) as u64;
    let rate = total_allocation / duration as u64;
    rate.checked_mul(elapsed).ok_or(VaultError::MathOverflow)
}

/// Round a timestamp down to the voting escrow's week bucket.
///
/// The escrow stores every lock end floored this way; the manager applies the
/// same rounding before a call so its local mirror matches the escrow state.
pub fn round_down_to_week(ts: i64) -> i64 {
    ts - ts.rem_euclid(WEEK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SECONDS_PER_DAY, VESTING_DURATION};

    const ALLOCATION: u64 = 300_000_000_000;

    #[test]
    fn nothing_unlocked_before_start() {
        assert_eq!(unlocked_amount(ALLOCATION, VESTING_DURATION, 1_000, 999).unwrap(), 0);
        assert_eq!(unlocked_amount(ALLOCATION, VESTING_DURATION, 1_000, 1_000).unwrap(), 0);
    }

    #[test]
    fn one_day_in_unlocks_one_day_of_rate() {
        let rate = ALLOCATION / VESTING_DURATION as u64;
        let got = unlocked_amount(ALLOCATION, VESTING_DURATION, 0, SECONDS_PER_DAY).unwrap();
        assert_eq!(got, rate * SECONDS_PER_DAY as u64);
    }

    #[test]
    fn unlock_curve_is_monotonic_and_capped() {
        let mut prev = 0u64;
        for day in 0..=(208 * 7 + 10) {
            let now = day * SECONDS_PER_DAY;
            let cur = unlocked_amount(ALLOCATION, VESTING_DURATION, 0, now).unwrap();
            assert!(cur >= prev);
            assert!(cur <= ALLOCATION);
            prev = cur;
        }
    }

    #[test]
    fn terminal_amount_drops_the_division_remainder() {
        let at_end = unlocked_amount(ALLOCATION, VESTING_DURATION, 0, VESTING_DURATION).unwrap();
        assert_eq!(at_end, ALLOCATION - ALLOCATION % VESTING_DURATION as u64);
        // Past the end nothing more unlocks.
        let later = unlocked_amount(ALLOCATION, VESTING_DURATION, 0, 10 * VESTING_DURATION).unwrap();
        assert_eq!(later, at_end);
    }

    #[test]
    fn rejects_non_positive_duration() {
        assert!(matches!(
            unlocked_amount(ALLOCATION, 0, 0, 1),
            Err(VaultError::InvalidConfig)
        ));
    }

    #[test]
    fn week_rounding_floors_to_bucket() {
        assert_eq!(round_down_to_week(0), 0);
        assert_eq!(round_down_to_week(WEEK), WEEK);
        assert_eq!(round_down_to_week(WEEK + 1), WEEK);
        assert_eq!(round_down_to_week(3 * WEEK - 1), 2 * WEEK);
        let ts = 1_700_000_000;
        let rounded = round_down_to_week(ts);
        assert!(rounded <= ts && ts - rounded < WEEK);
        assert_eq!(rounded % WEEK, 0);
    }
}
