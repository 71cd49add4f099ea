use crate::error::VestingError;
use crate::state::{ActiveAllocation, AllocationRecord, WithdrawalFrequency};
use crate::utils::time;

/// Cumulative amount unlocked for `allocation` at `now_ts`: one `cap` per
/// elapsed period, never more than the allocation itself.
pub fn vested_amount(
    allocation: &ActiveAllocation,
    now_ts: i64,
    cap: u64,
    frequency: WithdrawalFrequency,
) -> Result<u64, VestingError> {
    let periods = time::periods_elapsed(now_ts, allocation.release_date, frequency)?;
    let accrued = (periods as u128)
        .checked_mul(cap as u128)
        .ok_or(VestingError::MathOverflow)?;
    let v = accrued.min(allocation.allocation as u128);
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

/// Amount the beneficiary may withdraw right now. Floors at zero when prior
/// withdrawals exceed the current entitlement (e.g. after a decrease).
pub fn drawing_power(
    allocation: &ActiveAllocation,
    now_ts: i64,
    cap: u64,
    frequency: WithdrawalFrequency,
) -> Result<u64, VestingError> {
    let vested = vested_amount(allocation, now_ts, cap, frequency)?;
    Ok(vested.saturating_sub(allocation.withdrawn))
}

/// Drawing power for a ledger lookup; zero for unknown or deleted keys.
pub fn drawing_power_of(
    record: Option<&AllocationRecord>,
    now_ts: i64,
    cap: u64,
    frequency: WithdrawalFrequency,
) -> Result<u64, VestingError> {
    match record {
        Some(AllocationRecord::Active(a)) => drawing_power(a, now_ts, cap, frequency),
        Some(AllocationRecord::Deleted { .. }) | None => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    const RELEASE: i64 = 1_715_000_060;
    const MINUTE: i64 = 60;
    const CAP: u64 = 10_000;

    fn allocation(amount: u64) -> ActiveAllocation {
        ActiveAllocation {
            name: "John Doe 1".into(),
            release_date: RELEASE,
            allocation: amount,
            closing_balance: amount,
            ..ActiveAllocation::default()
        }
    }

    fn power_at(a: &ActiveAllocation, offset: i64, frequency: WithdrawalFrequency) -> u64 {
        drawing_power(a, RELEASE + offset, CAP, frequency).unwrap()
    }

    #[test]
    fn daily_schedule_accrues_one_cap_per_day() {
        let a = allocation(111_111);
        let f = WithdrawalFrequency::Daily;
        assert_eq!(power_at(&a, -MINUTE, f), 0);
        assert_eq!(power_at(&a, MINUTE, f), 10_000);
        assert_eq!(power_at(&a, SECONDS_PER_DAY + MINUTE, f), 20_000);
        assert_eq!(power_at(&a, 8 * SECONDS_PER_DAY + MINUTE, f), 90_000);
        assert_eq!(power_at(&a, 10 * SECONDS_PER_DAY + MINUTE, f), 110_000);
        assert_eq!(power_at(&a, 11 * SECONDS_PER_DAY + MINUTE, f), 111_111);
        assert_eq!(power_at(&a, 15 * SECONDS_PER_DAY + MINUTE, f), 111_111);
    }

    #[test]
    fn weekly_schedule() {
        let a = allocation(111_111);
        let f = WithdrawalFrequency::Weekly;
        let week = f.period_seconds();
        assert_eq!(power_at(&a, MINUTE, f), 10_000);
        assert_eq!(power_at(&a, week + MINUTE, f), 20_000);
        assert_eq!(power_at(&a, 2 * week + MINUTE, f), 30_000);
        assert_eq!(power_at(&a, 6 * week + MINUTE, f), 70_000);
        assert_eq!(power_at(&a, 8 * week + MINUTE, f), 90_000);
        assert_eq!(power_at(&a, 13 * week + MINUTE, f), 111_111);
    }

    #[test]
    fn half_yearly_schedule() {
        let a = allocation(111_111);
        let f = WithdrawalFrequency::HalfYearly;
        let half = f.period_seconds();
        assert_eq!(power_at(&a, MINUTE, f), 10_000);
        assert_eq!(power_at(&a, half + MINUTE, f), 20_000);
        assert_eq!(power_at(&a, 10 * half + MINUTE, f), 110_000);
        assert_eq!(power_at(&a, 11 * half + MINUTE, f), 111_111);
    }

    #[test]
    fn withdrawn_amount_is_netted() {
        let mut a = allocation(111_111);
        a.apply_withdrawal(5_000, RELEASE + MINUTE).unwrap();
        let f = WithdrawalFrequency::Daily;
        assert_eq!(power_at(&a, MINUTE, f), 5_000);
        assert_eq!(power_at(&a, SECONDS_PER_DAY + MINUTE, f), 15_000);
        assert_eq!(power_at(&a, 8 * SECONDS_PER_DAY + MINUTE, f), 85_000);
    }

    #[test]
    fn floors_at_zero_after_decrease() {
        let mut a = allocation(100_000);
        a.apply_withdrawal(30_000, RELEASE + 3 * SECONDS_PER_DAY).unwrap();
        // Allocation cut below what was already withdrawn.
        a.allocation = 20_000;
        a.closing_balance = 0;
        assert_eq!(power_at(&a, 30 * SECONDS_PER_DAY, WithdrawalFrequency::Daily), 0);
    }

    #[test]
    fn monotonic_and_bounded() {
        let mut a = allocation(123_457);
        a.apply_withdrawal(7_000, RELEASE).unwrap();
        let f = WithdrawalFrequency::Daily;
        let mut last = 0;
        for hour in -48..(24 * 20) {
            let p = power_at(&a, hour * 3_600, f);
            assert!(p >= last);
            assert!(p <= a.allocation - a.withdrawn);
            last = p;
        }
        assert_eq!(last, a.allocation - a.withdrawn);
    }

    #[test]
    fn unknown_or_deleted_has_no_power() {
        let f = WithdrawalFrequency::Daily;
        assert_eq!(drawing_power_of(None, RELEASE + MINUTE, CAP, f).unwrap(), 0);
        let deleted = AllocationRecord::Deleted {
            name: "gone".into(),
            release_date: RELEASE,
            last_withdrawn_on: 0,
        };
        assert_eq!(
            drawing_power_of(Some(&deleted), RELEASE + 30 * SECONDS_PER_DAY, CAP, f).unwrap(),
            0
        );
        let active = AllocationRecord::Active(allocation(111_111));
        assert_eq!(
            drawing_power_of(Some(&active), RELEASE + MINUTE, CAP, f).unwrap(),
            10_000
        );
    }

    #[test]
    fn huge_cap_does_not_overflow() {
        let a = allocation(u64::MAX);
        let p = drawing_power(&a, RELEASE + 365 * SECONDS_PER_DAY, u64::MAX, WithdrawalFrequency::Daily)
            .unwrap();
        assert_eq!(p, u64::MAX);
    }
}
