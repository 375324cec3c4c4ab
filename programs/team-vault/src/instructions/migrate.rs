use anchor_lang::prelude::*;

use crate::constants::{MANAGER_SEED, VAULT_STATE_SEED};
use crate::error::VaultError;
use crate::state::{ManagerState, VaultState, MANAGER_VERSION_AMOUNT_ONLY,
    MANAGER_VERSION_EXTEND_ON_TOPUP, VAULT_VERSION_CONTINUOUS, VAULT_VERSION_DAILY_GATE};

/// One-way vault migration: drop the daily claim gate, release per second.
pub fn migrate_vault_v2(ctx: Context<MigrateVaultV2>) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );
    let vault_state = &mut ctx.accounts.vault_state;
    require!(
        vault_state.version == VAULT_VERSION_DAILY_GATE,
        VaultError::AlreadyMigrated
    );
    vault_state.version = VAULT_VERSION_CONTINUOUS;

    emit!(VaultMigrated {
        version: vault_state.version,
    });

    Ok(())
}

/// One-way manager migration: claim-and-lock top-ups stop re-extending the
/// lock end.
pub fn migrate_manager_v2(ctx: Context<MigrateManagerV2>) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );
    let manager = &mut ctx.accounts.manager;
    require!(
        manager.version == MANAGER_VERSION_EXTEND_ON_TOPUP,
        VaultError::AlreadyMigrated
    );
    manager.version = MANAGER_VERSION_AMOUNT_ONLY;

    emit!(ManagerMigrated {
        version: manager.version,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct MigrateVaultV2<'info> {
    #[account(seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    #[account(
        mut,
        seeds = [VAULT_STATE_SEED],
        bump = vault_state.bump,
        constraint = vault_state.manager == manager.key() @ VaultError::InvalidConfig,
    )]
    pub vault_state: Account<'info, VaultState>,

    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct MigrateManagerV2<'info> {
    #[account(mut, seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct VaultMigrated {
    pub version: u8,
}

#[event]
pub struct ManagerMigrated {
    pub version: u8,
}
