use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};

use crate::constants::{
    MANAGER_LT_SEED, MANAGER_SEED, MANAGER_ST_HOPE_SEED, XLT_ACCOUNT_SEED, XLT_MINT_SEED,
};
use crate::error::VaultError;
use crate::state::ManagerState;

/// Toggle self-service principal withdrawal. Writing the current value fails.
pub fn set_can_withdraw_by_anyone(ctx: Context<SetCanWithdrawByAnyone>, value: bool) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );
    let manager = &mut ctx.accounts.manager;
    require!(value != manager.can_withdraw_by_anyone, VaultError::SameValue);
    manager.can_withdraw_by_anyone = value;

    emit!(WithdrawFlagSet { value });

    Ok(())
}

/// Withdraw principal held by the manager against an equal XLT burn from
/// `to`. With the self-service flag set, anyone may withdraw to themselves;
/// otherwise only the owner may call, to any destination.
pub fn withdraw_lt(ctx: Context<WithdrawLt>, to: Pubkey, amount: u64) -> Result<()> {
    ctx.accounts
        .manager
        .check_withdraw_auth(ctx.accounts.caller.key(), to)?;
    require!(amount > 0, VaultError::ZeroAmount);
    require!(
        ctx.accounts.to_xlt.amount >= amount,
        VaultError::InsufficientXltToBurn
    );
    // A ceiling distinct from the burn gate: only liquid principal pays out.
    require!(
        ctx.accounts.manager_lt.amount >= amount,
        VaultError::InsufficientUnlockedBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[MANAGER_SEED, &[ctx.accounts.manager.bump]]];
    token::burn(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.xlt_mint.to_account_info(),
                from: ctx.accounts.to_xlt.to_account_info(),
                authority: ctx.accounts.manager.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;
    ctx.accounts.manager.record_withdraw_burn(amount)?;

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.manager_lt.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.manager.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;
    ctx.accounts.manager.record_lt_withdrawn(amount)?;

    emit!(LtWithdrawn {
        to,
        amount,
        lt_withdrew: ctx.accounts.manager.lt_withdrew,
    });

    Ok(())
}

/// Withdraw harvested LT rewards, bounded by the minter stream's ledger.
pub fn withdraw_lt_rewards(ctx: Context<WithdrawLtRewards>, amount: u64) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );
    require!(amount > 0, VaultError::ZeroAmount);

    ctx.accounts.manager.lt_rewards.record_withdrawn(amount)?;

    let signer_seeds: &[&[&[u8]]] = &[&[MANAGER_SEED, &[ctx.accounts.manager.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.manager_lt.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.manager.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(LtRewardsWithdrawn {
        to: ctx.accounts.destination.key(),
        amount,
        total_withdrawn: ctx.accounts.manager.lt_rewards.total_withdrawn,
    });

    Ok(())
}

/// Withdraw harvested stHOPE, bounded by the fee stream's ledger.
pub fn withdraw_st_hope(ctx: Context<WithdrawStHope>, amount: u64) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );
    require!(amount > 0, VaultError::ZeroAmount);

    ctx.accounts.manager.st_hope.record_withdrawn(amount)?;

    let signer_seeds: &[&[&[u8]]] = &[&[MANAGER_SEED, &[ctx.accounts.manager.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.manager_st_hope.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.manager.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(StHopeWithdrawn {
        to: ctx.accounts.destination.key(),
        amount,
        total_withdrawn: ctx.accounts.manager.st_hope.total_withdrawn,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetCanWithdrawByAnyone<'info> {
    #[account(mut, seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    pub owner: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct WithdrawLt<'info> {
    #[account(mut, seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    #[account(mut, seeds = [XLT_MINT_SEED], bump)]
    pub xlt_mint: Account<'info, Mint>,

    #[account(mut, seeds = [XLT_ACCOUNT_SEED, to.as_ref()], bump)]
    pub to_xlt: Account<'info, TokenAccount>,

    #[account(mut, seeds = [MANAGER_LT_SEED], bump)]
    pub manager_lt: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination.mint == manager.lt_mint @ VaultError::InvalidConfig,
        constraint = destination.owner == to @ VaultError::InvalidCall,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct WithdrawLtRewards<'info> {
    #[account(mut, seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    #[account(mut, seeds = [MANAGER_LT_SEED], bump)]
    pub manager_lt: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination.mint == manager.lt_mint @ VaultError::InvalidConfig,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct WithdrawStHope<'info> {
    #[account(mut, seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    #[account(mut, seeds = [MANAGER_ST_HOPE_SEED], bump)]
    pub manager_st_hope: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination.mint == manager.st_hope_mint @ VaultError::InvalidConfig,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct WithdrawFlagSet {
    pub value: bool,
}

#[event]
pub struct LtWithdrawn {
    pub to: Pubkey,
    pub amount: u64,
    pub lt_withdrew: u64,
}

#[event]
pub struct LtRewardsWithdrawn {
    pub to: Pubkey,
    pub amount: u64,
    pub total_withdrawn: u64,
}

#[event]
pub struct StHopeWithdrawn {
    pub to: Pubkey,
    pub amount: u64,
    pub total_withdrawn: u64,
}
