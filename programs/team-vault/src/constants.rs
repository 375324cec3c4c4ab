//! Program-wide constants.

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Seconds per week; the voting escrow rounds lock ends down to this bucket.
pub const WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Maximum voting-escrow lock duration, 208 weeks (~4 years).
pub const MAX_LOCK_DURATION: i64 = 208 * WEEK;

/// The team allocation vests linearly over the same 208 weeks.
pub const VESTING_DURATION: i64 = MAX_LOCK_DURATION;

/// Minimum interval between vault claims while the vault is at version 1.
pub const MIN_CLAIM_INTERVAL: i64 = SECONDS_PER_DAY;

/// Vault state PDA seed.
pub const VAULT_STATE_SEED: &[u8] = b"vault_state";

/// Vault principal token account PDA seed.
pub const VAULT_TOKEN_SEED: &[u8] = b"vault";

/// Manager state PDA seed; this PDA signs every outbound CPI.
pub const MANAGER_SEED: &[u8] = b"manager";

/// Manager principal (LT) token account PDA seed.
pub const MANAGER_LT_SEED: &[u8] = b"manager_lt";

/// Manager staked-reward (stHOPE) token account PDA seed.
pub const MANAGER_ST_HOPE_SEED: &[u8] = b"manager_st_hope";

/// Accounting token (XLT) mint PDA seed.
pub const XLT_MINT_SEED: &[u8] = b"xlt_mint";

/// Per-holder accounting token account PDA seed.
pub const XLT_ACCOUNT_SEED: &[u8] = b"xlt_account";
