use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::adapters::rewards;
use crate::constants::{MANAGER_LT_SEED, MANAGER_SEED, MANAGER_ST_HOPE_SEED};
use crate::error::VaultError;
use crate::state::ManagerState;

/// Claim accumulated fees for a batch of gauges. The adapters report nothing
/// back, so the ledger is credited with the observed stHOPE balance delta.
pub fn claim_from_gauges<'info>(
    ctx: Context<'_, '_, '_, 'info, ClaimFromGauges<'info>>,
    gauges: Vec<Pubkey>,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );
    require!(!gauges.is_empty(), VaultError::EmptyBatch);
    for gauge_id in &gauges {
        require!(*gauge_id != Pubkey::default(), VaultError::WrongGaugeAddress);
    }

    let before = ctx.accounts.manager_st_hope.amount;
    let manager_ai = ctx.accounts.manager.to_account_info();
    let distributor = ctx.accounts.gauge_fee_distributor_program.to_account_info();
    let manager_bump = ctx.accounts.manager.bump;

    for gauge_id in &gauges {
        rewards::claim_gauge_fees(
            &distributor,
            &manager_ai,
            ctx.remaining_accounts,
            *gauge_id,
            manager_bump,
        )?;
    }

    ctx.accounts.manager_st_hope.reload()?;
    let claimed = ctx
        .accounts
        .manager_st_hope
        .amount
        .checked_sub(before)
        .ok_or(VaultError::MathOverflow)?;
    ctx.accounts.manager.st_hope.record_claimed(claimed)?;

    emit!(GaugeFeesClaimed {
        gauges: gauges.len() as u64,
        amount: claimed,
        st_hope_total_claimed: ctx.accounts.manager.st_hope.total_claimed,
    });

    Ok(())
}

/// Claim the manager's share from the protocol-wide fee distributor.
pub fn claim_from_fee_distributor<'info>(
    ctx: Context<'_, '_, '_, 'info, ClaimFromFeeDistributor<'info>>,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );

    let before = ctx.accounts.manager_st_hope.amount;
    let manager_ai = ctx.accounts.manager.to_account_info();
    let distributor = ctx.accounts.fee_distributor_program.to_account_info();

    rewards::claim_fees(
        &distributor,
        &manager_ai,
        ctx.remaining_accounts,
        ctx.accounts.manager.bump,
    )?;

    ctx.accounts.manager_st_hope.reload()?;
    let claimed = ctx
        .accounts
        .manager_st_hope
        .amount
        .checked_sub(before)
        .ok_or(VaultError::MathOverflow)?;
    ctx.accounts.manager.st_hope.record_claimed(claimed)?;

    emit!(FeeDistributorClaimed {
        amount: claimed,
        st_hope_total_claimed: ctx.accounts.manager.st_hope.total_claimed,
    });

    Ok(())
}

/// Convert the staked-reward position into LT through the minter. Fails when
/// nothing was minted.
pub fn claim_lt<'info>(ctx: Context<'_, '_, '_, 'info, ClaimLt<'info>>) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );

    let before = ctx.accounts.manager_lt.amount;
    let manager_ai = ctx.accounts.manager.to_account_info();
    let minter = ctx.accounts.minter_program.to_account_info();
    let staking_hope = ctx.accounts.manager.staking_hope;

    rewards::mint_from_gauge(
        &minter,
        &manager_ai,
        ctx.remaining_accounts,
        staking_hope,
        ctx.accounts.manager.bump,
    )?;

    ctx.accounts.manager_lt.reload()?;
    let claimed = ctx
        .accounts
        .manager_lt
        .amount
        .checked_sub(before)
        .ok_or(VaultError::MathOverflow)?;
    require!(claimed > 0, VaultError::InsufficientRewardsToClaim);
    ctx.accounts.manager.lt_rewards.record_claimed(claimed)?;

    emit!(LtRewardsClaimed {
        amount: claimed,
        lt_total_claimed: ctx.accounts.manager.lt_rewards.total_claimed,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimFromGauges<'info> {
    #[account(mut, seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    #[account(mut, seeds = [MANAGER_ST_HOPE_SEED], bump)]
    pub manager_st_hope: Account<'info, TokenAccount>,

    /// CHECK: verified against the program id pinned at initialization.
    #[account(address = manager.gauge_fee_distributor_program @ VaultError::InvalidConfig)]
    pub gauge_fee_distributor_program: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct ClaimFromFeeDistributor<'info> {
    #[account(mut, seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    #[account(mut, seeds = [MANAGER_ST_HOPE_SEED], bump)]
    pub manager_st_hope: Account<'info, TokenAccount>,

    /// CHECK: verified against the program id pinned at initialization.
    #[account(address = manager.fee_distributor_program @ VaultError::InvalidConfig)]
    pub fee_distributor_program: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct ClaimLt<'info> {
    #[account(mut, seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    #[account(mut, seeds = [MANAGER_LT_SEED], bump)]
    pub manager_lt: Account<'info, TokenAccount>,

    /// CHECK: verified against the program id pinned at initialization.
    #[account(address = manager.minter_program @ VaultError::InvalidConfig)]
    pub minter_program: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

#[event]
pub struct GaugeFeesClaimed {
    pub gauges: u64,
    pub amount: u64,
    pub st_hope_total_claimed: u64,
}

#[event]
pub struct FeeDistributorClaimed {
    pub amount: u64,
    pub st_hope_total_claimed: u64,
}

#[event]
pub struct LtRewardsClaimed {
    pub amount: u64,
    pub lt_total_claimed: u64,
}
