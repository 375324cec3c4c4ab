//! Gauge controller adapter: weighted gauge votes backed by the manager's
//! locked voting power. Weights are basis points of the manager's power; the
//! controller enforces the per-voter total and vote cooldowns itself.

use anchor_lang::prelude::*;

use super::{invoke_as_manager, sighash};

pub fn vote_for_gauge_weights<'info>(
    program: &AccountInfo<'info>,
    manager: &AccountInfo<'info>,
    forwarded: &[AccountInfo<'info>],
    gauge: Pubkey,
    weight: u64,
    manager_bump: u8,
) -> Result<()> {
    let mut data = sighash("vote_for_gauge_weights").to_vec();
    data.extend_from_slice(gauge.as_ref());
    data.extend_from_slice(&weight.to_le_bytes());
    invoke_as_manager(program, manager, forwarded, data, manager_bump)
}
