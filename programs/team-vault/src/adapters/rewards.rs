//! Reward harvest adapters.
//!
//! Three independent claim entry points, all credited by observed balance
//! delta on the manager's token accounts (the adapters report nothing back):
//! per-gauge fee claims and the protocol-wide distributor claim pay stHOPE;
//! the minter converts the staked position into LT rewards.

use anchor_lang::prelude::*;

use super::{invoke_as_manager, sighash};

/// Claim accumulated fees for one gauge from the gauge fee distributor.
pub fn claim_gauge_fees<'info>(
    program: &AccountInfo<'info>,
    manager: &AccountInfo<'info>,
    forwarded: &[AccountInfo<'info>],
    gauge: Pubkey,
    manager_bump: u8,
) -> Result<()> {
    let mut data = sighash("claim").to_vec();
    data.extend_from_slice(gauge.as_ref());
    invoke_as_manager(program, manager, forwarded, data, manager_bump)
}

/// Claim the manager's share from the protocol-wide fee distributor.
pub fn claim_fees<'info>(
    program: &AccountInfo<'info>,
    manager: &AccountInfo<'info>,
    forwarded: &[AccountInfo<'info>],
    manager_bump: u8,
) -> Result<()> {
    invoke_as_manager(program, manager, forwarded, sighash("claim").to_vec(), manager_bump)
}

/// Have the minter convert rewards accrued by `gauge` into LT.
pub fn mint_from_gauge<'info>(
    program: &AccountInfo<'info>,
    manager: &AccountInfo<'info>,
    forwarded: &[AccountInfo<'info>],
    gauge: Pubkey,
    manager_bump: u8,
) -> Result<()> {
    let mut data = sighash("mint").to_vec();
    data.extend_from_slice(gauge.as_ref());
    invoke_as_manager(program, manager, forwarded, data, manager_bump)
}
