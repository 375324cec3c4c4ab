//! Voting escrow (veLT) adapter.
//!
//! Contract: the escrow custodies locked principal against the manager PDA,
//! rounds every requested end down to the week bucket, rejects end decreases
//! and ends beyond `now + MAX_LOCK_DURATION`, and pays the full position back
//! on `withdraw` once the end has passed. The manager passes pre-rounded ends
//! so its local mirror always equals the escrow's stored end.

use anchor_lang::prelude::*;

use super::{invoke_as_manager, sighash};

/// Open a new position of `amount` ending at `unlock_time`.
pub fn create_lock<'info>(
    program: &AccountInfo<'info>,
    manager: &AccountInfo<'info>,
    forwarded: &[AccountInfo<'info>],
    amount: u64,
    unlock_time: i64,
    manager_bump: u8,
) -> Result<()> {
    let mut data = sighash("create_lock").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());
    data.extend_from_slice(&unlock_time.to_le_bytes());
    invoke_as_manager(program, manager, forwarded, data, manager_bump)
}

/// Add `amount` to the existing position, keeping its end.
pub fn increase_amount<'info>(
    program: &AccountInfo<'info>,
    manager: &AccountInfo<'info>,
    forwarded: &[AccountInfo<'info>],
    amount: u64,
    manager_bump: u8,
) -> Result<()> {
    let mut data = sighash("increase_amount").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());
    invoke_as_manager(program, manager, forwarded, data, manager_bump)
}

/// Push the position's end out to `unlock_time`.
pub fn increase_unlock_time<'info>(
    program: &AccountInfo<'info>,
    manager: &AccountInfo<'info>,
    forwarded: &[AccountInfo<'info>],
    unlock_time: i64,
    manager_bump: u8,
) -> Result<()> {
    let mut data = sighash("increase_unlock_time").to_vec();
    data.extend_from_slice(&unlock_time.to_le_bytes());
    invoke_as_manager(program, manager, forwarded, data, manager_bump)
}

/// Withdraw the full expired position back to the manager.
pub fn withdraw<'info>(
    program: &AccountInfo<'info>,
    manager: &AccountInfo<'info>,
    forwarded: &[AccountInfo<'info>],
    manager_bump: u8,
) -> Result<()> {
    invoke_as_manager(program, manager, forwarded, sighash("withdraw").to_vec(), manager_bump)
}
