//! Fixed-length release periods.
//! - period length per frequency is a whole number of days (no calendar months)
//! - periods_elapsed = 0 before the release date
//! - periods_elapsed = 1 + floor((now - release_date) / period length) from it on

use crate::constants::SECONDS_PER_DAY;
use crate::error::VestingError;
use crate::state::WithdrawalFrequency;

impl WithdrawalFrequency {
    pub const fn period_days(self) -> i64 {
        match self {
            WithdrawalFrequency::Daily => 1,
            WithdrawalFrequency::Weekly => 7,
            WithdrawalFrequency::BiWeekly => 15,
            WithdrawalFrequency::Monthly => 30,
            WithdrawalFrequency::Quarterly => 91,
            WithdrawalFrequency::HalfYearly => 182,
            WithdrawalFrequency::Yearly => 365,
        }
    }

    pub const fn period_seconds(self) -> i64 {
        self.period_days() * SECONDS_PER_DAY
    }
}

/// Number of release periods unlocked at `now_ts`. Reaching the release date
/// unlocks the first one.
pub fn periods_elapsed(
    now_ts: i64,
    release_ts: i64,
    frequency: WithdrawalFrequency,
) -> Result<u64, VestingError> {
    if now_ts < release_ts {
        return Ok(0);
    }
    let elapsed = now_ts
        .checked_sub(release_ts)
        .ok_or(VestingError::MathOverflow)?;
    let full = elapsed / frequency.period_seconds();
    (full as u64)
        .checked_add(1)
        .ok_or(VestingError::MathOverflow)
}
