//! Program-wide constants.

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Max allocation records held by the ledger PDA. Deleted records keep their slot.
pub const MAX_BENEFICIARIES: usize = 64;

/// Max byte length of an allocation's display name.
pub const MAX_NAME_LEN: usize = 32;

/// Max keys in the administrator set (owner included).
pub const MAX_ADMINISTRATORS: usize = 5;

pub const SCHEDULE_STATE_SEED: &[u8] = b"schedule_state";
pub const LEDGER_SEED: &[u8] = b"ledger";
pub const VAULT_SEED: &[u8] = b"vault";
