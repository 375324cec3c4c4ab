use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, MintTo, Token, TokenAccount};

use crate::constants::{MANAGER_SEED, XLT_ACCOUNT_SEED, XLT_MINT_SEED};
use crate::error::VaultError;
use crate::state::ManagerState;

/// Mint accounting tokens against claimed principal. Headroom is the amount
/// claimed into management and not yet represented by circulating XLT.
pub fn mint_xlt(ctx: Context<MintXlt>, to: Pubkey, amount: u64) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );
    require!(to != Pubkey::default(), VaultError::InvalidPubkey);
    require!(amount > 0, VaultError::ZeroAmount);

    ctx.accounts.manager.record_minted(amount)?;

    let signer_seeds: &[&[&[u8]]] = &[&[MANAGER_SEED, &[ctx.accounts.manager.bump]]];
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.xlt_mint.to_account_info(),
                to: ctx.accounts.to_xlt.to_account_info(),
                authority: ctx.accounts.manager.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(XltMinted {
        to,
        amount,
        mintable_xlt: ctx.accounts.manager.mintable_xlt,
    });

    Ok(())
}

/// Burn a holder's accounting tokens; the represented principal stays under
/// management, so the burned amount returns to the mint headroom.
pub fn burn_xlt(ctx: Context<BurnXlt>, holder: Pubkey, amount: u64) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );
    require!(holder != Pubkey::default(), VaultError::InvalidPubkey);
    require!(amount > 0, VaultError::ZeroAmount);
    require!(
        ctx.accounts.holder_xlt.amount >= amount,
        VaultError::InsufficientXltToBurn
    );

    let signer_seeds: &[&[&[u8]]] = &[&[MANAGER_SEED, &[ctx.accounts.manager.bump]]];
    token::burn(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.xlt_mint.to_account_info(),
                from: ctx.accounts.holder_xlt.to_account_info(),
                authority: ctx.accounts.manager.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    ctx.accounts.manager.record_burned(amount)?;

    emit!(XltBurned {
        holder,
        amount,
        mintable_xlt: ctx.accounts.manager.mintable_xlt,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct MintXlt<'info> {
    #[account(mut, seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    #[account(mut, seeds = [XLT_MINT_SEED], bump)]
    pub xlt_mint: Account<'info, Mint>,

    // Holder accounts are program-owned: XLT is a claim-right receipt, minted
    // and burned only by the manager PDA.
    #[account(
        init_if_needed,
        payer = owner,
        token::mint = xlt_mint,
        token::authority = manager,
        seeds = [XLT_ACCOUNT_SEED, to.as_ref()],
        bump
    )]
    pub to_xlt: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
#[instruction(holder: Pubkey)]
pub struct BurnXlt<'info> {
    #[account(mut, seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    #[account(mut, seeds = [XLT_MINT_SEED], bump)]
    pub xlt_mint: Account<'info, Mint>,

    #[account(mut, seeds = [XLT_ACCOUNT_SEED, holder.as_ref()], bump)]
    pub holder_xlt: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct XltMinted {
    pub to: Pubkey,
    pub amount: u64,
    pub mintable_xlt: u64,
}

#[event]
pub struct XltBurned {
    pub holder: Pubkey,
    pub amount: u64,
    pub mintable_xlt: u64,
}
