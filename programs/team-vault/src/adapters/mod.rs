//! CPI shims for the external protocol programs.
//!
//! The manager only knows each collaborator's call contract: an
//! Anchor-convention instruction (8-byte `global:<name>` sighash, borsh
//! little-endian args) against a program id pinned in `ManagerState`. Every
//! call is signed by the manager PDA, which the shims place first in the
//! account list as a writable signer; the instruction context forwards the
//! collaborator's remaining documented accounts unchanged.

pub mod escrow;
pub mod gauge;
pub mod rewards;

use anchor_lang::prelude::*;
use solana_sha256_hasher as hash;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke_signed;

use crate::constants::MANAGER_SEED;

/// Anchor global instruction discriminator: first 8 bytes of
/// `sha256("global:<name>")`.
pub(crate) fn sighash(name: &str) -> [u8; 8] {
    let preimage = format!("global:{name}");
    let digest = hash::hash(preimage.as_bytes());
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest.to_bytes()[..8]);
    out
}

/// Invoke `program` with `data`, the manager PDA as first (writable, signer)
/// account and `forwarded` accounts after it, signed with the manager seeds.
pub(crate) fn invoke_as_manager<'info>(
    program: &AccountInfo<'info>,
    manager: &AccountInfo<'info>,
    forwarded: &[AccountInfo<'info>],
    data: Vec<u8>,
    manager_bump: u8,
) -> Result<()> {
    let mut metas = Vec::with_capacity(forwarded.len() + 1);
    metas.push(AccountMeta::new(manager.key(), true));
    for acc in forwarded {
        metas.push(if acc.is_writable {
            AccountMeta::new(acc.key(), acc.is_signer)
        } else {
            AccountMeta::new_readonly(acc.key(), acc.is_signer)
        });
    }

    let ix = Instruction {
        program_id: program.key(),
        accounts: metas,
        data,
    };

    let mut infos: Vec<AccountInfo<'info>> = Vec::with_capacity(forwarded.len() + 2);
    infos.push(manager.clone());
    infos.extend_from_slice(forwarded);
    infos.push(program.clone());

    invoke_signed(&ix, &infos, &[&[MANAGER_SEED, &[manager_bump]]])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sighash_is_stable_and_distinct() {
        assert_eq!(sighash("create_lock"), sighash("create_lock"));
        assert_ne!(sighash("create_lock"), sighash("withdraw"));
        assert_ne!(sighash("claim"), sighash("mint"));
    }
}
