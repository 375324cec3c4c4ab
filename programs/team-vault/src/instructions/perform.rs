use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke_signed;

use crate::constants::MANAGER_SEED;
use crate::error::VaultError;
use crate::state::ManagerState;

/// Generic privileged executor: run a batch of raw outbound calls signed by
/// the manager PDA, for actions outside the pre-built surface. Each call
/// consumes `accounts_per_call[i]` metas from the remaining accounts, in
/// order; every target's program account must also be present among the
/// remaining accounts. The batch aborts on the first failing call.
pub fn perform<'info>(
    ctx: Context<'_, '_, '_, 'info, Perform<'info>>,
    targets: Vec<Pubkey>,
    datas: Vec<Vec<u8>>,
    accounts_per_call: Vec<u8>,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.manager.owner,
        VaultError::NotOwner
    );
    require!(!targets.is_empty(), VaultError::EmptyBatch);
    require!(
        targets.len() == datas.len() && targets.len() == accounts_per_call.len(),
        VaultError::UnmatchedLength
    );

    let manager_key = ctx.accounts.manager.key();
    let manager_bump = ctx.accounts.manager.bump;
    let remaining = ctx.remaining_accounts;

    let mut cursor = 0usize;
    for (i, target) in targets.iter().enumerate() {
        let count = accounts_per_call[i] as usize;
        let slice = remaining
            .get(cursor..cursor + count)
            .ok_or(VaultError::UnmatchedLength)?;
        cursor += count;

        let metas = slice
            .iter()
            .map(|acc| {
                // The manager PDA signs through invoke_signed.
                let is_signer = acc.is_signer || acc.key() == manager_key;
                if acc.is_writable {
                    AccountMeta::new(acc.key(), is_signer)
                } else {
                    AccountMeta::new_readonly(acc.key(), is_signer)
                }
            })
            .collect();

        let program = remaining
            .iter()
            .find(|acc| acc.key() == *target)
            .ok_or(VaultError::InvalidPubkey)?;

        let ix = Instruction {
            program_id: *target,
            accounts: metas,
            data: datas[i].clone(),
        };
        let mut infos: Vec<AccountInfo<'info>> = slice.to_vec();
        infos.push(program.clone());

        invoke_signed(&ix, &infos, &[&[MANAGER_SEED, &[manager_bump]]])?;
    }

    emit!(BatchPerformed {
        calls: targets.len() as u64,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Perform<'info> {
    #[account(seeds = [MANAGER_SEED], bump = manager.bump)]
    pub manager: Account<'info, ManagerState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct BatchPerformed {
    pub calls: u64,
}
