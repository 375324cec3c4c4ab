use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{
    MANAGER_LT_SEED, MANAGER_SEED, MANAGER_ST_HOPE_SEED, VAULT_STATE_SEED, VAULT_TOKEN_SEED,
    VESTING_DURATION, XLT_MINT_SEED,
};
use crate::error::VaultError;
use crate::state::{ManagerState, RewardLedger, VaultState, MANAGER_VERSION_EXTEND_ON_TOPUP,
    VAULT_VERSION_DAILY_GATE};

pub fn initialize_vault(
    ctx: Context<InitializeVault>,
    total_allocation: u64,
    start_ts: i64,
) -> Result<()> {
    require!(total_allocation > 0, VaultError::InvalidConfig);
    require!(start_ts > 0, VaultError::InvalidTimestamp);

    let st = &mut ctx.accounts.vault_state;
    st.lt_mint = ctx.accounts.lt_mint.key();
    st.manager = Pubkey::default();
    st.total_allocation = total_allocation;
    st.start_ts = start_ts;
    st.duration = VESTING_DURATION;
    st.claimed_amount = 0;
    st.last_claim_ts = 0;
    st.version = VAULT_VERSION_DAILY_GATE;
    st.bump = ctx.bumps.vault_state;

    emit!(VaultInitialized {
        lt_mint: st.lt_mint,
        total_allocation,
        start_ts,
        duration: st.duration,
    });

    Ok(())
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
    require!(owner != Pubkey::default(), VaultError::InvalidPubkey);
    require!(staking_hope != Pubkey::default(), VaultError::InvalidPubkey);
    for program in [
        voting_escrow_program,
        gauge_controller_program,
        minter_program,
        fee_distributor_program,
        gauge_fee_distributor_program,
    ] {
        require!(program != Pubkey::default(), VaultError::InvalidPubkey);
    }

    // A vault binds to exactly one manager, once.
    let vault_state = &mut ctx.accounts.vault_state;
    require!(
        vault_state.manager == Pubkey::default(),
        VaultError::InvalidConfig
    );
    vault_state.manager = ctx.accounts.manager.key();

    let manager = &mut ctx.accounts.manager;
    manager.owner = owner;
    manager.vault = vault_state.key();
    manager.lt_mint = ctx.accounts.lt_mint.key();
    manager.xlt_mint = ctx.accounts.xlt_mint.key();
    manager.st_hope_mint = ctx.accounts.st_hope_mint.key();
    manager.staking_hope = staking_hope;
    manager.voting_escrow_program = voting_escrow_program;
    manager.gauge_controller_program = gauge_controller_program;
    manager.minter_program = minter_program;
    manager.fee_distributor_program = fee_distributor_program;
    manager.gauge_fee_distributor_program = gauge_fee_distributor_program;
    manager.locked_amount = 0;
    manager.lock_end = 0;
    manager.mintable_xlt = 0;
    manager.xlt_outstanding = 0;
    manager.lt_rewards = RewardLedger::default();
    manager.st_hope = RewardLedger::default();
    manager.lt_withdrew = 0;
    manager.can_withdraw_by_anyone = false;
    manager.version = MANAGER_VERSION_EXTEND_ON_TOPUP;
    manager.bump = ctx.bumps.manager;

    emit!(ManagerInitialized {
        manager: manager.key(),
        owner,
        vault: manager.vault,
        xlt_mint: manager.xlt_mint,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + VaultState::SIZE,
        seeds = [VAULT_STATE_SEED],
        bump
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        init,
        payer = payer,
        token::mint = lt_mint,
        token::authority = vault_state,
        seeds = [VAULT_TOKEN_SEED, vault_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub lt_mint: Account<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct InitializeManager<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + ManagerState::SIZE,
        seeds = [MANAGER_SEED],
        bump
    )]
    pub manager: Account<'info, ManagerState>,

    #[account(mut, seeds = [VAULT_STATE_SEED], bump = vault_state.bump)]
    pub vault_state: Account<'info, VaultState>,

    #[account(address = vault_state.lt_mint @ VaultError::InvalidConfig)]
    pub lt_mint: Account<'info, Mint>,

    pub st_hope_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = payer,
        mint::decimals = lt_mint.decimals,
        mint::authority = manager,
        seeds = [XLT_MINT_SEED],
        bump
    )]
    pub xlt_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = payer,
        token::mint = lt_mint,
        token::authority = manager,
        seeds = [MANAGER_LT_SEED],
        bump
    )]
    pub manager_lt: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = payer,
        token::mint = st_hope_mint,
        token::authority = manager,
        seeds = [MANAGER_ST_HOPE_SEED],
        bump
    )]
    pub manager_st_hope: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VaultInitialized {
    pub lt_mint: Pubkey,
    pub total_allocation: u64,
    pub start_ts: i64,
    pub duration: i64,
}

#[event]
pub struct ManagerInitialized {
    pub manager: Pubkey,
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub xlt_mint: Pubkey,
}
