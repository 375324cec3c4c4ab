use anchor_lang::prelude::*;

/// Custom error codes for the team vault and its manager.
#[error_code]
pub enum VaultError {
    #[msg("caller is not the owner")]
    NotOwner,

    #[msg("invalid call")]
    InvalidCall,

    #[msg("claim interval must be greater than one day")]
    ClaimIntervalTooShort,

    #[msg("the lock existed, the unlockTime should be zero")]
    LockExists,

    #[msg("no lock position exists")]
    LockMissing,

    #[msg("the lock has not expired")]
    LockNotExpired,

    #[msg("unlock time must increase")]
    UnlockTimeNotIncreased,

    #[msg("unlock time exceeds the max lock duration")]
    UnlockTimeTooFar,

    #[msg("already migrated")]
    AlreadyMigrated,

    #[msg("insufficient mintable amount")]
    InsufficientMintable,

    #[msg("insufficient XLT to burn")]
    InsufficientXltToBurn,

    #[msg("insufficient unlocked balance")]
    InsufficientUnlockedBalance,

    #[msg("insufficient rewards to claim")]
    InsufficientRewardsToClaim,

    #[msg("insufficient rewards to withdraw")]
    InsufficientRewardsToWithdraw,

    #[msg("invalid public key")]
    InvalidPubkey,

    #[msg("wrong gauge address")]
    WrongGaugeAddress,

    #[msg("unmatched length")]
    UnmatchedLength,

    #[msg("empty batch")]
    EmptyBatch,

    #[msg("wrong value to set")]
    SameValue,

    #[msg("invalid configuration")]
    InvalidConfig,

    #[msg("invalid timestamp")]
    InvalidTimestamp,

    #[msg("amount must be greater than zero")]
    ZeroAmount,

    #[msg("math overflow")]
    MathOverflow,
}
