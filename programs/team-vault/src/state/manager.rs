use anchor_lang::prelude::*;

use crate::constants::MAX_LOCK_DURATION;
use crate::error::VaultError;
use crate::utils::vesting::round_down_to_week;

/// A claim-and-lock top-up also re-extends the lock end toward the max.
pub const MANAGER_VERSION_EXTEND_ON_TOPUP: u8 = 1;
/// A claim-and-lock top-up raises the amount only.
pub const MANAGER_VERSION_AMOUNT_ONLY: u8 = 2;

/// One reward stream: monotonic claimed/withdrawn counters.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct RewardLedger {
    pub total_claimed: u64,
    pub total_withdrawn: u64,
}

impl RewardLedger {
    pub const SIZE: usize = 8 + 8;

    pub fn record_claimed(&mut self, amount: u64) -> Result<()> {
        self.total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(VaultError::MathOverflow)?;
        Ok(())
    }

    /// Withdrawals never exceed what the stream has earned.
    pub fn record_withdrawn(&mut self, amount: u64) -> Result<()> {
        let withdrawable = self
            .total_claimed
            .checked_sub(self.total_withdrawn)
            .ok_or(VaultError::MathOverflow)?;
        require!(amount <= withdrawable, VaultError::InsufficientRewardsToWithdraw);
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(VaultError::MathOverflow)?;
        Ok(())
    }
}

/// What the escrow adapter should be asked to do for a lock request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockPlan {
    /// No position exists: open one ending at `unlock_time` (week-rounded).
    Create { unlock_time: i64 },
    /// A position exists: raise the amount, and when `extend_to` is set,
    /// also push the end out to it.
    Increase { extend_to: Option<i64> },
}

/// Manager state PDA: lock mirror, reward ledgers, accounting-token
/// counters, access flags and the adapter program ids pinned at init.
#[account]
pub struct ManagerState {
    /// Privileged identity for every gated instruction.
    pub owner: Pubkey,
    /// Vault state PDA this manager claims from.
    pub vault: Pubkey,
    /// Principal (LT) mint.
    pub lt_mint: Pubkey,
    /// Accounting token (XLT) mint; authority is the manager PDA.
    pub xlt_mint: Pubkey,
    /// Staked-reward (stHOPE) mint.
    pub st_hope_mint: Pubkey,
    /// Staking gauge the minter converts rewards for.
    pub staking_hope: Pubkey,
    /// Voting escrow (veLT) program.
    pub voting_escrow_program: Pubkey,
    /// Gauge controller program (weighted votes).
    pub gauge_controller_program: Pubkey,
    /// Minter program (staked position -> LT rewards).
    pub minter_program: Pubkey,
    /// Protocol-wide fee distributor program.
    pub fee_distributor_program: Pubkey,
    /// Per-gauge fee distributor program.
    pub gauge_fee_distributor_program: Pubkey,
    /// Local mirror of the escrowed amount (0 = no position).
    pub locked_amount: u64,
    /// Local mirror of the lock end, always week-rounded (0 = no position).
    pub lock_end: i64,
    /// Stored XLT mint headroom.
    pub mintable_xlt: u64,
    /// Circulating XLT.
    pub xlt_outstanding: u64,
    /// Principal-denominated rewards (minter stream).
    pub lt_rewards: RewardLedger,
    /// Staked-reward stream (gauge and distributor fees).
    pub st_hope: RewardLedger,
    /// Cumulative escrowed principal paid out through `withdraw_lt`.
    pub lt_withdrew: u64,
    /// When set, anyone may withdraw principal to themselves by burning XLT.
    pub can_withdraw_by_anyone: bool,
    /// Behavior version, see `MANAGER_VERSION_*`.
    pub version: u8,
    /// PDA bump.
    pub bump: u8,
}

impl ManagerState {
    pub const SIZE: usize =
        32 * 11 +               // pubkeys
        8 +                     // locked_amount
        8 +                     // lock_end
        8 +                     // mintable_xlt
        8 +                     // xlt_outstanding
        RewardLedger::SIZE * 2 +
        8 +                     // lt_withdrew
        1 +                     // can_withdraw_by_anyone
        1 +                     // version
        1;                      // bump

    pub fn is_locked(&self) -> bool {
        self.locked_amount > 0
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.is_locked() && self.lock_end <= now
    }

    /// Plan for the periodic claim-and-lock sweep: open at the max duration
    /// when unlocked, otherwise top up (re-extending only at version 1, and
    /// only when the rounded target actually moves the end forward).
    pub fn plan_claim_lock(&self, now: i64) -> LockPlan {
        let target = round_down_to_week(now + MAX_LOCK_DURATION);
        if !self.is_locked() {
            LockPlan::Create { unlock_time: target }
        } else {
            let extend = self.version == MANAGER_VERSION_EXTEND_ON_TOPUP && target > self.lock_end;
            LockPlan::Increase {
                extend_to: extend.then_some(target),
            }
        }
    }

    /// Plan for an explicit `lock_lt` request. A fresh lock needs a non-zero
    /// end within bounds; while a position exists the end must be zero.
    pub fn plan_lock(&self, unlock_time: i64, now: i64) -> Result<LockPlan> {
        if !self.is_locked() {
            require!(unlock_time != 0, VaultError::InvalidTimestamp);
            require!(
                unlock_time <= now + MAX_LOCK_DURATION,
                VaultError::UnlockTimeTooFar
            );
            let rounded = round_down_to_week(unlock_time);
            require!(rounded > now, VaultError::InvalidTimestamp);
            Ok(LockPlan::Create {
                unlock_time: rounded,
            })
        } else {
            require!(unlock_time == 0, VaultError::LockExists);
            Ok(LockPlan::Increase { extend_to: None })
        }
    }

    /// Fold an executed plan into the local mirror.
    pub fn record_locked(&mut self, amount: u64, plan: LockPlan) -> Result<()> {
        self.locked_amount = self
            .locked_amount
            .checked_add(amount)
            .ok_or(VaultError::MathOverflow)?;
        match plan {
            LockPlan::Create { unlock_time } => self.lock_end = unlock_time,
            LockPlan::Increase {
                extend_to: Some(end),
            } => self.lock_end = end,
            LockPlan::Increase { extend_to: None } => {}
        }
        Ok(())
    }

    /// The escrow paid the expired position back; mirror returns to UNLOCKED.
    pub fn record_unlock_withdrawn(&mut self) -> u64 {
        let amount = self.locked_amount;
        self.locked_amount = 0;
        self.lock_end = 0;
        amount
    }

    /// Principal claimed out of the vault raises the XLT mint headroom.
    pub fn record_claimed(&mut self, amount: u64) -> Result<()> {
        self.mintable_xlt = self
            .mintable_xlt
            .checked_add(amount)
            .ok_or(VaultError::MathOverflow)?;
        Ok(())
    }

    /// Headroom becomes circulating XLT.
    pub fn record_minted(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.mintable_xlt, VaultError::InsufficientMintable);
        self.mintable_xlt -= amount;
        self.xlt_outstanding = self
            .xlt_outstanding
            .checked_add(amount)
            .ok_or(VaultError::MathOverflow)?;
        Ok(())
    }

    /// A plain burn returns circulating XLT to headroom; the principal it
    /// represented stays under management.
    pub fn record_burned(&mut self, amount: u64) -> Result<()> {
        self.xlt_outstanding = self
            .xlt_outstanding
            .checked_sub(amount)
            .ok_or(VaultError::InsufficientXltToBurn)?;
        self.mintable_xlt = self
            .mintable_xlt
            .checked_add(amount)
            .ok_or(VaultError::MathOverflow)?;
        Ok(())
    }

    /// The burn that backs a principal withdrawal retires XLT for good.
    pub fn record_withdraw_burn(&mut self, amount: u64) -> Result<()> {
        self.xlt_outstanding = self
            .xlt_outstanding
            .checked_sub(amount)
            .ok_or(VaultError::InsufficientXltToBurn)?;
        Ok(())
    }

    /// Authorization for a principal withdrawal. The owner may always pay
    /// out to any destination; with the self-service flag set, anyone may
    /// withdraw to themselves.
    pub fn check_withdraw_auth(&self, caller: Pubkey, to: Pubkey) -> Result<()> {
        if caller == self.owner {
            return Ok(());
        }
        require!(self.can_withdraw_by_anyone, VaultError::NotOwner);
        require_keys_eq!(to, caller, VaultError::InvalidCall);
        Ok(())
    }

    pub fn record_lt_withdrawn(&mut self, amount: u64) -> Result<()> {
        self.lt_withdrew = self
            .lt_withdrew
            .checked_add(amount)
            .ok_or(VaultError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WEEK;

    fn manager(version: u8) -> ManagerState {
        ManagerState {
            owner: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            lt_mint: Pubkey::new_unique(),
            xlt_mint: Pubkey::new_unique(),
            st_hope_mint: Pubkey::new_unique(),
            staking_hope: Pubkey::new_unique(),
            voting_escrow_program: Pubkey::new_unique(),
            gauge_controller_program: Pubkey::new_unique(),
            minter_program: Pubkey::new_unique(),
            fee_distributor_program: Pubkey::new_unique(),
            gauge_fee_distributor_program: Pubkey::new_unique(),
            locked_amount: 0,
            lock_end: 0,
            mintable_xlt: 0,
            xlt_outstanding: 0,
            lt_rewards: RewardLedger::default(),
            st_hope: RewardLedger::default(),
            lt_withdrew: 0,
            can_withdraw_by_anyone: false,
            version,
            bump: 255,
        }
    }

    #[test]
    fn claim_lock_opens_at_max_duration_when_unlocked() {
        let m = manager(MANAGER_VERSION_EXTEND_ON_TOPUP);
        let now = 12 * WEEK + 1234;
        match m.plan_claim_lock(now) {
            LockPlan::Create { unlock_time } => {
                assert_eq!(unlock_time, round_down_to_week(now + MAX_LOCK_DURATION));
                assert_eq!(unlock_time % WEEK, 0);
            }
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn v1_topup_extends_end_v2_does_not() {
        let mut m = manager(MANAGER_VERSION_EXTEND_ON_TOPUP);
        let now = 10 * WEEK;
        m.record_locked(100, m.plan_claim_lock(now)).unwrap();
        let end = m.lock_end;

        let later = now + 2 * WEEK;
        match m.plan_claim_lock(later) {
            LockPlan::Increase { extend_to } => {
                assert_eq!(extend_to, Some(round_down_to_week(later + MAX_LOCK_DURATION)));
            }
            other => panic!("expected increase, got {other:?}"),
        }

        m.version = MANAGER_VERSION_AMOUNT_ONLY;
        assert_eq!(
            m.plan_claim_lock(later),
            LockPlan::Increase { extend_to: None }
        );
        m.record_locked(50, LockPlan::Increase { extend_to: None }).unwrap();
        assert_eq!(m.locked_amount, 150);
        assert_eq!(m.lock_end, end);
    }

    #[test]
    fn v1_topup_skips_extend_inside_the_same_bucket() {
        let mut m = manager(MANAGER_VERSION_EXTEND_ON_TOPUP);
        let now = 10 * WEEK;
        m.record_locked(100, m.plan_claim_lock(now)).unwrap();
        // Still inside the same week bucket: target rounds to the same end.
        assert_eq!(
            m.plan_claim_lock(now + 1),
            LockPlan::Increase { extend_to: None }
        );
    }

    #[test]
    fn explicit_lock_requires_zero_end_while_locked() {
        let mut m = manager(MANAGER_VERSION_EXTEND_ON_TOPUP);
        let now = 5 * WEEK;
        let plan = m.plan_lock(now + 4 * WEEK, now).unwrap();
        assert_eq!(
            plan,
            LockPlan::Create {
                unlock_time: round_down_to_week(now + 4 * WEEK)
            }
        );
        m.record_locked(100, plan).unwrap();

        // Top-up keeps the end and raises the amount.
        let plan = m.plan_lock(0, now).unwrap();
        m.record_locked(40, plan).unwrap();
        assert_eq!(m.locked_amount, 140);
        assert_eq!(m.lock_end, round_down_to_week(now + 4 * WEEK));

        // A non-zero end while locked is rejected.
        let err = m.plan_lock(now + 6 * WEEK, now).unwrap_err();
        assert_eq!(err, error!(VaultError::LockExists));
    }

    #[test]
    fn explicit_lock_bounds_the_new_end() {
        let m = manager(MANAGER_VERSION_EXTEND_ON_TOPUP);
        let now = 5 * WEEK;
        assert_eq!(
            m.plan_lock(0, now).unwrap_err(),
            error!(VaultError::InvalidTimestamp)
        );
        assert_eq!(
            m.plan_lock(now + MAX_LOCK_DURATION + WEEK, now).unwrap_err(),
            error!(VaultError::UnlockTimeTooFar)
        );
        // An end that rounds down to the past is rejected too.
        assert_eq!(
            m.plan_lock(now + WEEK - 1, now).unwrap_err(),
            error!(VaultError::InvalidTimestamp)
        );
    }

    #[test]
    fn expiry_and_withdrawal_reset_the_mirror() {
        let mut m = manager(MANAGER_VERSION_EXTEND_ON_TOPUP);
        let now = 3 * WEEK;
        m.record_locked(500, m.plan_claim_lock(now)).unwrap();
        assert!(!m.is_expired(now));
        assert!(m.is_expired(m.lock_end));

        let back = m.record_unlock_withdrawn();
        assert_eq!(back, 500);
        assert!(!m.is_locked());
        assert_eq!(m.lock_end, 0);
    }

    #[test]
    fn mint_headroom_tracks_claims_mints_and_burns() {
        let mut m = manager(MANAGER_VERSION_EXTEND_ON_TOPUP);
        m.record_claimed(1_000).unwrap();
        assert_eq!(m.mintable_xlt, 1_000);

        m.record_minted(999).unwrap();
        assert_eq!(m.mintable_xlt, 1);
        assert_eq!(m.xlt_outstanding, 999);

        assert_eq!(
            m.record_minted(2).unwrap_err(),
            error!(VaultError::InsufficientMintable)
        );

        // Plain burn restores headroom.
        m.record_burned(500).unwrap();
        assert_eq!(m.mintable_xlt, 501);
        assert_eq!(m.xlt_outstanding, 499);

        // Withdrawal burn retires XLT without restoring headroom.
        m.record_withdraw_burn(499).unwrap();
        assert_eq!(m.xlt_outstanding, 0);
        assert_eq!(m.mintable_xlt, 501);

        assert_eq!(
            m.record_withdraw_burn(1).unwrap_err(),
            error!(VaultError::InsufficientXltToBurn)
        );
    }

    #[test]
    fn owner_withdraws_anywhere_regardless_of_flag() {
        let mut m = manager(MANAGER_VERSION_EXTEND_ON_TOPUP);
        let elsewhere = Pubkey::new_unique();
        assert!(m.check_withdraw_auth(m.owner, elsewhere).is_ok());
        m.can_withdraw_by_anyone = true;
        assert!(m.check_withdraw_auth(m.owner, elsewhere).is_ok());
    }

    #[test]
    fn self_service_flag_gates_non_owner_withdrawals() {
        let mut m = manager(MANAGER_VERSION_EXTEND_ON_TOPUP);
        let stranger = Pubkey::new_unique();

        // Flag off: nobody but the owner.
        assert_eq!(
            m.check_withdraw_auth(stranger, stranger).unwrap_err(),
            error!(VaultError::NotOwner)
        );

        // Flag on: anyone, but only to themselves.
        m.can_withdraw_by_anyone = true;
        assert!(m.check_withdraw_auth(stranger, stranger).is_ok());
        assert_eq!(
            m.check_withdraw_auth(stranger, Pubkey::new_unique()).unwrap_err(),
            error!(VaultError::InvalidCall)
        );
    }

    #[test]
    fn ledger_withdrawals_never_exceed_claims() {
        let mut ledger = RewardLedger::default();
        assert_eq!(
            ledger.record_withdrawn(1).unwrap_err(),
            error!(VaultError::InsufficientRewardsToWithdraw)
        );
        ledger.record_claimed(300).unwrap();
        ledger.record_withdrawn(100).unwrap();
        ledger.record_withdrawn(200).unwrap();
        assert_eq!(
            ledger.record_withdrawn(1).unwrap_err(),
            error!(VaultError::InsufficientRewardsToWithdraw)
        );
        ledger.record_claimed(50).unwrap();
        ledger.record_withdrawn(50).unwrap();
        assert!(ledger.total_withdrawn <= ledger.total_claimed);
    }
}
