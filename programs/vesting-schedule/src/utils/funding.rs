use crate::error::VestingError;

/// New `total_vested` after promising `extra` more, provided the pool
/// still covers it.
pub fn ensure_within_funds(
    total_vested: u64,
    extra: u64,
    available_funds: u64,
) -> Result<u64, VestingError> {
    let total = total_vested
        .checked_add(extra)
        .ok_or(VestingError::MathOverflow)?;
    if total > available_funds {
        return Err(VestingError::FundingCapExceeded);
    }
    Ok(total)
}

/// Headroom left for new or larger allocations.
pub fn headroom(total_vested: u64, available_funds: u64) -> u64 {
    available_funds.saturating_sub(total_vested)
}

/// Admin removal is bounded by the vault balance only; promised but
/// unwithdrawn allocations are not reserved.
pub fn ensure_removable(amount: u64, vault_balance: u64) -> Result<(), VestingError> {
    if amount > vault_balance {
        return Err(VestingError::InsufficientVaultBalance);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_headroom_is_allowed() {
        assert_eq!(ensure_within_funds(3_111_108, 50_000_000 - 3_111_108, 50_000_000), Ok(50_000_000));
        assert_eq!(
            ensure_within_funds(3_111_108, 50_000_000 - 3_111_108 + 1, 50_000_000),
            Err(VestingError::FundingCapExceeded)
        );
        assert_eq!(headroom(3_111_108, 50_000_000), 46_888_892);
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(
            ensure_within_funds(u64::MAX, 1, u64::MAX),
            Err(VestingError::MathOverflow)
        );
    }

    #[test]
    fn headroom_saturates_after_removal() {
        // Funds pulled below what is already promised.
        assert_eq!(headroom(40_000_000, 30_000_000), 0);
        assert_eq!(
            ensure_within_funds(40_000_000, 1, 30_000_000),
            Err(VestingError::FundingCapExceeded)
        );
    }

    #[test]
    fn removal_bounded_by_vault_balance_only() {
        assert_eq!(ensure_removable(20_000_000, 50_000_000), Ok(()));
        assert_eq!(ensure_removable(50_000_000, 50_000_000), Ok(()));
        assert_eq!(
            ensure_removable(50_000_001, 50_000_000),
            Err(VestingError::InsufficientVaultBalance)
        );
        assert_eq!(ensure_removable(0, 0), Ok(()));
    }
}
