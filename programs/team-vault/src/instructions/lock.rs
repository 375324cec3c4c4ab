use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::adapters::escrow;
use crate::constants::{MANAGER_LT_SEED, MANAGER_SEED, MAX_LOCK_DURATION};
use crate::error::VaultError;
use crate::state::{LockPlan, ManagerState};
use crate::utils::vesting::round_down_to_week;

/// Lock liquid principal held by the manager. A fresh lock takes a non-zero
/// target end; while a position exists the end must be zero (top-up only).
pub fn lock_lt<'info>(
    ctx: Context<'_, '_, '_, 'info, LockLt<'info>>,
    amount: u64,
    unlock_time: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );
    require!(amount > 0, VaultError::ZeroAmount);
    require!(
        amount <= ctx.accounts.manager_lt.amount,
        VaultError::InsufficientUnlockedBalance
    );

    let manager_ai = ctx.accounts.manager.to_account_info();
    let escrow_program = ctx.accounts.voting_escrow_program.to_account_info();
    let manager_bump = ctx.accounts.manager.bump;
    let plan = ctx.accounts.manager.plan_lock(unlock_time, now)?;

    match plan {
        LockPlan::Create { unlock_time } => {
            escrow::create_lock(
                &escrow_program,
                &manager_ai,
                ctx.remaining_accounts,
                amount,
                unlock_time,
                manager_bump,
            )?;
        }
        LockPlan::Increase { .. } => {
            escrow::increase_amount(
                &escrow_program,
                &manager_ai,
                ctx.remaining_accounts,
                amount,
                manager_bump,
            )?;
        }
    }

    let manager = &mut ctx.accounts.manager;
    manager.record_locked(amount, plan)?;

    emit!(LtLocked {
        amount,
        locked_amount: manager.locked_amount,
        lock_end: manager.lock_end,
    });

    Ok(())
}

/// Push the lock end out. The escrow enforces the same bounds; checking the
/// mirror first keeps it from drifting on calls the escrow would reject.
pub fn increase_unlock_time<'info>(
    ctx: Context<'_, '_, '_, 'info, IncreaseUnlockTime<'info>>,
    new_end: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );

    let manager = &ctx.accounts.manager;
    require!(manager.is_locked(), VaultError::LockMissing);
    let rounded = round_down_to_week(new_end);
    require!(rounded > manager.lock_end, VaultError::UnlockTimeNotIncreased);
    require!(new_end <= now + MAX_LOCK_DURATION, VaultError::UnlockTimeTooFar);

    let manager_ai = ctx.accounts.manager.to_account_info();
    let escrow_program = ctx.accounts.voting_escrow_program.to_account_info();
    escrow::increase_unlock_time(
        &escrow_program,
        &manager_ai,
        ctx.remaining_accounts,
        rounded,
        ctx.accounts.manager.bump,
    )?;

    let manager = &mut ctx.accounts.manager;
    manager.lock_end = rounded;

    emit!(UnlockTimeIncreased {
        lock_end: rounded,
    });

    Ok(())
}

/// Once the lock end has passed, pull the whole position back into the
/// manager's LT account; the mirror returns to UNLOCKED.
pub fn withdraw_lt_when_expired<'info>(
    ctx: Context<'_, '_, '_, 'info, WithdrawLtWhenExpired<'info>>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );
    require!(
        ctx.accounts.manager.is_expired(now),
        VaultError::LockNotExpired
    );

    let before = ctx.accounts.manager_lt.amount;
    let manager_ai = ctx.accounts.manager.to_account_info();
    let escrow_program = ctx.accounts.voting_escrow_program.to_account_info();
    escrow::withdraw(
        &escrow_program,
        &manager_ai,
        ctx.remaining_accounts,
        ctx.accounts.manager.bump,
    )?;

    // The escrow pays the full position back into the manager's LT account.
    ctx.accounts.manager_lt.reload()?;
    let received = ctx
        .accounts
        .manager_lt
        .amount
        .checked_sub(before)
        .ok_or(VaultError::MathOverflow)?;
    let amount = ctx.accounts.manager.record_unlock_withdrawn();
    require!(
        received >= amount,
        VaultError::InsufficientUnlockedBalance
    );

    emit!(ExpiredLockWithdrawn { amount, received });

    Ok(())
}

#[derive(Accounts)]
pub struct LockLt<'info> {
    #[account(mut, seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    #[account(mut, seeds = [MANAGER_LT_SEED], bump)]
    pub manager_lt: Account<'info, TokenAccount>,

    /// CHECK: verified against the program id pinned at initialization.
    #[account(address = manager.voting_escrow_program @ VaultError::InvalidConfig)]
    pub voting_escrow_program: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct IncreaseUnlockTime<'info> {
    #[account(mut, seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    /// CHECK: verified against the program id pinned at initialization.
    #[account(address = manager.voting_escrow_program @ VaultError::InvalidConfig)]
    pub voting_escrow_program: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct WithdrawLtWhenExpired<'info> {
    #[account(mut, seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    #[account(mut, seeds = [MANAGER_LT_SEED], bump)]
    pub manager_lt: Account<'info, TokenAccount>,

    /// CHECK: verified against the program id pinned at initialization.
    #[account(address = manager.voting_escrow_program @ VaultError::InvalidConfig)]
    pub voting_escrow_program: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

#[event]
pub struct LtLocked {
    pub amount: u64,
    pub locked_amount: u64,
    pub lock_end: i64,
}

#[event]
pub struct UnlockTimeIncreased {
    pub lock_end: i64,
}

#[event]
pub struct ExpiredLockWithdrawn {
    pub amount: u64,
    pub received: u64,
}
