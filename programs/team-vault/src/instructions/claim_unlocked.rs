use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::adapters::escrow;
use crate::constants::{MANAGER_LT_SEED, MANAGER_SEED, VAULT_STATE_SEED, VAULT_TOKEN_SEED};
use crate::error::VaultError;
use crate::state::{LockPlan, ManagerState, VaultState};

/// Pull everything claimable out of the vault into the manager's LT account.
/// The claimed principal raises the XLT mint headroom but stays liquid.
pub fn claim_unlocked_lt(ctx: Context<ClaimUnlockedLt>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );

    // Schedule state is updated before the outbound transfer.
    let vault_state_ai = ctx.accounts.vault_state.to_account_info();
    let vault_state_bump = ctx.accounts.vault_state.bump;
    let amount = ctx.accounts.vault_state.claim(now)?;

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_STATE_SEED, &[vault_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.manager_lt.to_account_info(),
                authority: vault_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    ctx.accounts.manager.record_claimed(amount)?;

    emit!(UnlockedClaimed {
        amount,
        vault_claimed_total: ctx.accounts.vault_state.claimed_amount,
    });

    Ok(())
}

/// The periodic sweep: claim from the vault, then push the claimed delta into
/// the voting escrow. Opens a max-duration lock when none exists; otherwise
/// tops the position up (re-extending the end only at manager version 1).
pub fn claim_unlocked_lt_and_lock_for_ve_lt<'info>(
    ctx: Context<'_, '_, '_, 'info, ClaimUnlockedLtAndLock<'info>>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );

    let vault_state_ai = ctx.accounts.vault_state.to_account_info();
    let vault_state_bump = ctx.accounts.vault_state.bump;
    let amount = ctx.accounts.vault_state.claim(now)?;

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_STATE_SEED, &[vault_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.manager_lt.to_account_info(),
                authority: vault_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    let manager_ai = ctx.accounts.manager.to_account_info();
    let escrow_program = ctx.accounts.voting_escrow_program.to_account_info();
    let manager_bump = ctx.accounts.manager.bump;
    let plan = ctx.accounts.manager.plan_claim_lock(now);

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
        LockPlan::Increase { extend_to } => {
            escrow::increase_amount(
                &escrow_program,
                &manager_ai,
                ctx.remaining_accounts,
                amount,
                manager_bump,
            )?;
            if let Some(end) = extend_to {
                escrow::increase_unlock_time(
                    &escrow_program,
                    &manager_ai,
                    ctx.remaining_accounts,
                    end,
                    manager_bump,
                )?;
            }
        }
    }

    let manager = &mut ctx.accounts.manager;
    manager.record_claimed(amount)?;
    manager.record_locked(amount, plan)?;

    emit!(ClaimedAndLocked {
        amount,
        locked_amount: manager.locked_amount,
        lock_end: manager.lock_end,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimUnlockedLt<'info> {
    #[account(mut, seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    #[account(
        mut,
        seeds = [VAULT_STATE_SEED],
        bump = vault_state.bump,
        constraint = vault_state.manager == manager.key() @ VaultError::InvalidConfig,
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        mut,
        seeds = [VAULT_TOKEN_SEED, vault_state.key().as_ref()],
        bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut, seeds = [MANAGER_LT_SEED], bump)]
    pub manager_lt: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct ClaimUnlockedLtAndLock<'info> {
    #[account(mut, seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    #[account(
        mut,
        seeds = [VAULT_STATE_SEED],
        bump = vault_state.bump,
        constraint = vault_state.manager == manager.key() @ VaultError::InvalidConfig,
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        mut,
        seeds = [VAULT_TOKEN_SEED, vault_state.key().as_ref()],
        bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut, seeds = [MANAGER_LT_SEED], bump)]
    pub manager_lt: Account<'info, TokenAccount>,

    /// CHECK: verified against the program id pinned at initialization.
    #[account(address = manager.voting_escrow_program @ VaultError::InvalidConfig)]
    pub voting_escrow_program: UncheckedAccount<'info>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct UnlockedClaimed {
    pub amount: u64,
    pub vault_claimed_total: u64,
}

#[event]
pub struct ClaimedAndLocked {
    pub amount: u64,
    pub locked_amount: u64,
    pub lock_end: i64,
}
