use anchor_lang::prelude::*;

use crate::constants::MIN_CLAIM_INTERVAL;
use crate::error::VaultError;
use crate::utils::vesting;

/// Daily claim gate enforced (`last_claim_ts + MIN_CLAIM_INTERVAL`).
pub const VAULT_VERSION_DAILY_GATE: u8 = 1;
/// Gate removed; the schedule releases per second and claims any time.
pub const VAULT_VERSION_CONTINUOUS: u8 = 2;

/// Vesting vault state PDA. Holds the release schedule for the principal
/// escrowed in the vault token account; only the bound manager may claim.
#[account]
pub struct VaultState {
    /// Principal (LT) mint.
    pub lt_mint: Pubkey,
    /// Manager state PDA bound as sole claimer; default until bound.
    pub manager: Pubkey,
    /// Total principal placed under the schedule.
    pub total_allocation: u64,
    /// Schedule start (Unix seconds).
    pub start_ts: i64,
    /// Release duration in seconds.
    pub duration: i64,
    /// Cumulative amount claimed out of the vault.
    pub claimed_amount: u64,
    /// Timestamp of the last successful claim (0 before the first).
    pub last_claim_ts: i64,
    /// Behavior version, see `VAULT_VERSION_*`.
    pub version: u8,
    /// PDA bump.
    pub bump: u8,
}

impl VaultState {
    pub const SIZE: usize =
        32 + // lt_mint
        32 + // manager
        8 +  // total_allocation
        8 +  // start_ts
        8 +  // duration
        8 +  // claimed_amount
        8 +  // last_claim_ts
        1 +  // version
        1;   // bump

    /// Total unlocked by the schedule at `now`, claimed or not.
    pub fn total_unlocked_amount(&self, now: i64) -> Result<u64> {
        let unlocked =
            vesting::unlocked_amount(self.total_allocation, self.duration, self.start_ts, now)?;
        Ok(unlocked)
    }

    /// Unlocked but not yet claimed at `now`.
    pub fn claimable_amount(&self, now: i64) -> Result<u64> {
        let unlocked = self.total_unlocked_amount(now)?;
        unlocked
            .checked_sub(self.claimed_amount)
            .ok_or_else(|| error!(VaultError::MathOverflow))
    }

    /// Record a claim of everything claimable at `now` and return the amount.
    ///
    /// State is updated here, before any outbound transfer the caller makes.
    pub fn claim(&mut self, now: i64) -> Result<u64> {
        if self.version == VAULT_VERSION_DAILY_GATE {
            require!(
                now >= self.last_claim_ts + MIN_CLAIM_INTERVAL,
                VaultError::ClaimIntervalTooShort
            );
        }
        let amount = self.claimable_amount(now)?;
        require!(amount > 0, VaultError::ZeroAmount);
        self.claimed_amount = self
            .claimed_amount
            .checked_add(amount)
            .ok_or(VaultError::MathOverflow)?;
        self.last_claim_ts = now;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SECONDS_PER_DAY, VESTING_DURATION};

    const ALLOCATION: u64 = 300_000_000_000;

    fn vault(version: u8) -> VaultState {
        VaultState {
            lt_mint: Pubkey::new_unique(),
            manager: Pubkey::new_unique(),
            total_allocation: ALLOCATION,
            start_ts: 0,
            duration: VESTING_DURATION,
            claimed_amount: 0,
            last_claim_ts: 0,
            version,
            bump: 255,
        }
    }

    #[test]
    fn claim_takes_everything_claimable() {
        let mut v = vault(VAULT_VERSION_DAILY_GATE);
        let now = 2 * SECONDS_PER_DAY;
        let claimable = v.claimable_amount(now).unwrap();
        let got = v.claim(now).unwrap();
        assert_eq!(got, claimable);
        assert_eq!(v.claimed_amount, claimable);
        assert_eq!(v.last_claim_ts, now);
        assert_eq!(v.claimable_amount(now).unwrap(), 0);
    }

    #[test]
    fn daily_gate_rejects_a_second_claim_within_a_day() {
        let mut v = vault(VAULT_VERSION_DAILY_GATE);
        v.claim(SECONDS_PER_DAY).unwrap();
        let err = v.claim(2 * SECONDS_PER_DAY - 4).unwrap_err();
        assert_eq!(err, error!(VaultError::ClaimIntervalTooShort));
        // Exactly one day later is allowed again.
        assert!(v.claim(2 * SECONDS_PER_DAY).is_ok());
    }

    #[test]
    fn continuous_version_claims_every_second() {
        let mut v = vault(VAULT_VERSION_CONTINUOUS);
        let rate = ALLOCATION / VESTING_DURATION as u64;
        v.claim(SECONDS_PER_DAY).unwrap();
        let got = v.claim(SECONDS_PER_DAY + 100).unwrap();
        assert_eq!(got, rate * 100);
    }

    #[test]
    fn claimed_never_exceeds_unlocked() {
        let mut v = vault(VAULT_VERSION_DAILY_GATE);
        let mut now = 0;
        for _ in 0..10 {
            now += 3 * SECONDS_PER_DAY;
            v.claim(now).unwrap();
            assert!(v.claimed_amount <= v.total_unlocked_amount(now).unwrap());
        }
    }

    #[test]
    fn full_schedule_claims_the_floored_total() {
        let mut v = vault(VAULT_VERSION_DAILY_GATE);
        let got = v.claim(VESTING_DURATION + SECONDS_PER_DAY).unwrap();
        assert_eq!(got, ALLOCATION - ALLOCATION % VESTING_DURATION as u64);
        // Nothing further ever unlocks.
        let err = v.claim(2 * VESTING_DURATION).unwrap_err();
        assert_eq!(err, error!(VaultError::ZeroAmount));
    }
}
