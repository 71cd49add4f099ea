use anchor_lang::prelude::Pubkey;

use crate::error::VestingError;
use crate::state::{AllocationLedger, ScheduleState};
use crate::utils::drawing_power::drawing_power;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawalReceipt {
    pub amount: u64,
    pub withdrawn: u64,
    pub closing_balance: u64,
    /// Drawing power left after this withdrawal.
    pub remaining_power: u64,
}

/// Checks `amount` against the beneficiary's drawing power and records it.
/// The caller pays out afterwards; a failed payout fails the instruction and
/// the ledger write is discarded with it.
pub fn process_withdrawal(
    ledger: &mut AllocationLedger,
    schedule: &ScheduleState,
    beneficiary: &Pubkey,
    amount: u64,
    now_ts: i64,
) -> Result<WithdrawalReceipt, VestingError> {
    let cap = schedule.withdrawal_cap;
    let frequency = schedule.withdrawal_frequency;

    let a = ledger.active_mut(beneficiary)?;
    let power = drawing_power(a, now_ts, cap, frequency)?;
    if amount > power {
        return Err(VestingError::ExceedsDrawingPower);
    }
    a.apply_withdrawal(amount, now_ts)?;

    Ok(WithdrawalReceipt {
        amount,
        withdrawn: a.withdrawn,
        closing_balance: a.closing_balance,
        remaining_power: drawing_power(a, now_ts, cap, frequency)?,
    })
}
