use anchor_lang::prelude::*;

use crate::adapters::gauge;
use crate::constants::MANAGER_SEED;
use crate::error::VaultError;
use crate::state::ManagerState;

/// Submit weighted gauge votes backed by the manager's locked voting power.
pub fn vote_for_gauges_weights<'info>(
    ctx: Context<'_, '_, '_, 'info, VoteForGaugesWeights<'info>>,
    gauges: Vec<Pubkey>,
    weights: Vec<u64>,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );
    require!(gauges.len() == weights.len(), VaultError::UnmatchedLength);
    require!(!gauges.is_empty(), VaultError::EmptyBatch);

    let manager_ai = ctx.accounts.manager.to_account_info();
    let controller = ctx.accounts.gauge_controller_program.to_account_info();
    let manager_bump = ctx.accounts.manager.bump;

    for (gauge_id, weight) in gauges.iter().zip(weights.iter()) {
        gauge::vote_for_gauge_weights(
            &controller,
            &manager_ai,
            ctx.remaining_accounts,
            *gauge_id,
            *weight,
            manager_bump,
        )?;
    }

    emit!(GaugeVotesCast {
        count: gauges.len() as u64,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct VoteForGaugesWeights<'info> {
    #[account(seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    /// CHECK: verified against the program id pinned at initialization.
    #[account(address = manager.gauge_controller_program @ VaultError::InvalidConfig)]
    pub gauge_controller_program: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

#[event]
pub struct GaugeVotesCast {
    pub count: u64,
}
