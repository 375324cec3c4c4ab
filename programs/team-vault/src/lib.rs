//! Team vesting vault and treasury manager.
//!
//! The vault releases the team's LT allocation linearly over 208 weeks; the
//! manager sweeps released principal into a veLT voting-escrow lock, votes on
//! gauge weights, harvests fee and minter reward streams, and keeps the XLT
//! accounting token and four monotonic ledgers in sync with what it holds.

use anchor_lang::prelude::*;

pub mod adapters;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("2Ut9RKeaqo895gVTEZ6fgG9WJ2sZAPfws5Hp3WGkcAg8");

#[program]
pub mod team_vault {
    use super::*;

    pub fn initialize_vault(
        ctx: Context<InitializeVault>,
        total_allocation: u64,
        start_ts: i64,
    ) -> Result<()> {
        instructions::initialize_vault(ctx, total_allocation, start_ts)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn initialize_manager(
        ctx: Context<InitializeManager>,
        owner: Pubkey,
        staking_hope: Pubkey,
        voting_escrow_program: Pubkey,
        gauge_controller_program: Pubkey,
        minter_program: Pubkey,
        fee_distributor_program: Pubkey,
        gauge_fee_distributor_program: Pubkey,
    ) -> Result<()> {
        instructions::initialize_manager(
            ctx,
            owner,
            staking_hope,
            voting_escrow_program,
            gauge_controller_program,
            minter_program,
            fee_distributor_program,
            gauge_fee_distributor_program,
        )
    }

    pub fn claim_unlocked_lt(ctx: Context<ClaimUnlockedLt>) -> Result<()> {
        instructions::claim_unlocked_lt(ctx)
    }

    pub fn claim_unlocked_lt_and_lock_for_ve_lt<'info>(
        ctx: Context<'_, '_, '_, 'info, ClaimUnlockedLtAndLock<'info>>,
    ) -> Result<()> {
        instructions::claim_unlocked_lt_and_lock_for_ve_lt(ctx)
    }

    pub fn lock_lt<'info>(
        ctx: Context<'_, '_, '_, 'info, LockLt<'info>>,
        amount: u64,
        unlock_time: i64,
    ) -> Result<()> {
        instructions::lock_lt(ctx, amount, unlock_time)
    }

    pub fn increase_unlock_time<'info>(
        ctx: Context<'_, '_, '_, 'info, IncreaseUnlockTime<'info>>,
        new_end: i64,
    ) -> Result<()> {
        instructions::increase_unlock_time(ctx, new_end)
    }

    pub fn withdraw_lt_when_expired<'info>(
        ctx: Context<'_, '_, '_, 'info, WithdrawLtWhenExpired<'info>>,
    ) -> Result<()> {
        instructions::withdraw_lt_when_expired(ctx)
    }

    pub fn mint_xlt(ctx: Context<MintXlt>, to: Pubkey, amount: u64) -> Result<()> {
        instructions::mint_xlt(ctx, to, amount)
    }

    pub fn burn_xlt(ctx: Context<BurnXlt>, holder: Pubkey, amount: u64) -> Result<()> {
        instructions::burn_xlt(ctx, holder, amount)
    }

    pub fn set_can_withdraw_by_anyone(
        ctx: Context<SetCanWithdrawByAnyone>,
        value: bool,
    ) -> Result<()> {
        instructions::set_can_withdraw_by_anyone(ctx, value)
    }

    pub fn vote_for_gauges_weights<'info>(
        ctx: Context<'_, '_, '_, 'info, VoteForGaugesWeights<'info>>,
        gauges: Vec<Pubkey>,
        weights: Vec<u64>,
    ) -> Result<()> {
        instructions::vote_for_gauges_weights(ctx, gauges, weights)
    }

    pub fn claim_from_gauges<'info>(
        ctx: Context<'_, '_, '_, 'info, ClaimFromGauges<'info>>,
        gauges: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::claim_from_gauges(ctx, gauges)
    }

    pub fn claim_from_fee_distributor<'info>(
        ctx: Context<'_, '_, '_, 'info, ClaimFromFeeDistributor<'info>>,
    ) -> Result<()> {
        instructions::claim_from_fee_distributor(ctx)
    }

    pub fn claim_lt<'info>(ctx: Context<'_, '_, '_, 'info, ClaimLt<'info>>) -> Result<()> {
        instructions::claim_lt(ctx)
    }

    pub fn withdraw_lt(ctx: Context<WithdrawLt>, to: Pubkey, amount: u64) -> Result<()> {
        instructions::withdraw_lt(ctx, to, amount)
    }

    pub fn withdraw_lt_rewards(ctx: Context<WithdrawLtRewards>, amount: u64) -> Result<()> {
        instructions::withdraw_lt_rewards(ctx, amount)
    }

    pub fn withdraw_st_hope(ctx: Context<WithdrawStHope>, amount: u64) -> Result<()> {
        instructions::withdraw_st_hope(ctx, amount)
    }

    pub fn perform<'info>(
        ctx: Context<'_, '_, '_, 'info, Perform<'info>>,
        targets: Vec<Pubkey>,
        datas: Vec<Vec<u8>>,
        accounts_per_call: Vec<u8>,
    ) -> Result<()> {
        instructions::perform(ctx, targets, datas, accounts_per_call)
    }

    pub fn migrate_vault_v2(ctx: Context<MigrateVaultV2>) -> Result<()> {
        instructions::migrate_vault_v2(ctx)
    }

    pub fn migrate_manager_v2(ctx: Context<MigrateManagerV2>) -> Result<()> {
        instructions::migrate_manager_v2(ctx)
    }
}
