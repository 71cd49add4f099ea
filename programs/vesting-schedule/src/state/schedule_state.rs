use anchor_lang::prelude::*;

use crate::constants::MAX_ADMINISTRATORS;
use crate::error::VestingError;

/// How often another `withdrawal_cap` worth of allocation unlocks.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WithdrawalFrequency {
    Daily,
    Weekly,
    /// 15 days.
    BiWeekly,
    /// 30 days.
    Monthly,
    /// 91 days.
    Quarterly,
    /// 182 days.
    HalfYearly,
    /// 365 days.
    Yearly,
}

/// Single vesting schedule state PDA. Everything but the administrator set is
/// fixed at initialization.
#[account]
pub struct ScheduleState {
    /// Mint of the vested token.
    pub vesting_coin: Pubkey,
    /// Initializer; manages the administrator set.
    pub owner: Pubkey,
    /// Keys allowed to run administrator-only instructions (owner included).
    pub administrators: Vec<Pubkey>,
    /// Seconds from `vesting_started_on` before any allocation may release.
    pub minimum_vesting_period: i64,
    /// Amount unlocked per elapsed period.
    pub withdrawal_cap: u64,
    pub withdrawal_frequency: WithdrawalFrequency,
    /// Unix timestamp of initialization.
    pub vesting_started_on: i64,
    /// `vesting_started_on + minimum_vesting_period`.
    pub earliest_withdrawal_date: i64,
}

impl ScheduleState {
    pub const SIZE: usize =
        32 + // vesting_coin
        32 + // owner
        4 + 32 * MAX_ADMINISTRATORS + // administrators
        8 +  // minimum_vesting_period
        8 +  // withdrawal_cap
        1 +  // withdrawal_frequency
        8 +  // vesting_started_on
        8;   // earliest_withdrawal_date

    pub fn is_administrator(&self, key: &Pubkey) -> bool {
        self.administrators.iter().any(|a| a == key)
    }

    pub fn add_administrator(&mut self, key: Pubkey) -> std::result::Result<(), VestingError> {
        if key == Pubkey::default() {
            return Err(VestingError::InvalidPubkey);
        }
        if self.is_administrator(&key) {
            return Err(VestingError::AdministratorExists);
        }
        if self.administrators.len() >= MAX_ADMINISTRATORS {
            return Err(VestingError::AdministratorSetFull);
        }
        self.administrators.push(key);
        Ok(())
    }

    pub fn remove_administrator(&mut self, key: &Pubkey) -> std::result::Result<(), VestingError> {
        if *key == self.owner {
            return Err(VestingError::CannotRemoveOwner);
        }
        let idx = self
            .administrators
            .iter()
            .position(|a| a == key)
            .ok_or(VestingError::AdministratorNotFound)?;
        self.administrators.remove(idx);
        Ok(())
    }

    pub fn config(&self, total_vested: u64) -> ScheduleConfig {
        ScheduleConfig {
            vesting_coin: self.vesting_coin,
            minimum_vesting_period: self.minimum_vesting_period,
            withdrawal_cap: self.withdrawal_cap,
            withdrawal_frequency: self.withdrawal_frequency,
            withdrawal_frequency_seconds: self.withdrawal_frequency.period_seconds(),
            vesting_started_on: self.vesting_started_on,
            earliest_withdrawal_date: self.earliest_withdrawal_date,
            total_vested,
        }
    }
}

/// Read-only snapshot returned by `get_schedule_config`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub vesting_coin: Pubkey,
    pub minimum_vesting_period: i64,
    pub withdrawal_cap: u64,
    pub withdrawal_frequency: WithdrawalFrequency,
    pub withdrawal_frequency_seconds: i64,
    pub vesting_started_on: i64,
    pub earliest_withdrawal_date: i64,
    pub total_vested: u64,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    /// Schedule started at `started_on` with a 181 day minimum period.
    pub(crate) fn schedule(
        started_on: i64,
        cap: u64,
        frequency: WithdrawalFrequency,
    ) -> ScheduleState {
        let minimum_vesting_period = 181 * crate::constants::SECONDS_PER_DAY;
        ScheduleState {
            vesting_coin: key(200),
            owner: key(100),
            administrators: vec![key(100)],
            minimum_vesting_period,
            withdrawal_cap: cap,
            withdrawal_frequency: frequency,
            vesting_started_on: started_on,
            earliest_withdrawal_date: started_on + minimum_vesting_period,
        }
    }

    #[test]
    fn owner_is_initial_administrator() {
        let st = schedule(1_700_000_000, 10_000, WithdrawalFrequency::Weekly);
        assert!(st.is_administrator(&key(100)));
        assert!(!st.is_administrator(&key(1)));
    }

    #[test]
    fn add_and_remove_administrators() {
        let mut st = schedule(1_700_000_000, 10_000, WithdrawalFrequency::Weekly);
        st.add_administrator(key(1)).unwrap();
        assert!(st.is_administrator(&key(1)));
        assert_eq!(st.add_administrator(key(1)), Err(VestingError::AdministratorExists));
        assert_eq!(
            st.add_administrator(Pubkey::default()),
            Err(VestingError::InvalidPubkey)
        );

        st.remove_administrator(&key(1)).unwrap();
        assert!(!st.is_administrator(&key(1)));
        assert_eq!(
            st.remove_administrator(&key(1)),
            Err(VestingError::AdministratorNotFound)
        );
        assert_eq!(
            st.remove_administrator(&key(100)),
            Err(VestingError::CannotRemoveOwner)
        );
    }

    #[test]
    fn administrator_set_is_bounded() {
        let mut st = schedule(1_700_000_000, 10_000, WithdrawalFrequency::Weekly);
        for n in 1..MAX_ADMINISTRATORS as u8 {
            st.add_administrator(key(n)).unwrap();
        }
        assert_eq!(st.administrators.len(), MAX_ADMINISTRATORS);
        assert_eq!(
            st.add_administrator(key(99)),
            Err(VestingError::AdministratorSetFull)
        );
    }

    #[test]
    fn config_reports_frequency_in_seconds() {
        let st = schedule(1_700_000_000, 10_000, WithdrawalFrequency::Weekly);
        let cfg = st.config(42);
        assert_eq!(cfg.withdrawal_frequency_seconds, 604_800);
        assert_eq!(cfg.earliest_withdrawal_date, 1_700_000_000 + 181 * 86_400);
        assert_eq!(cfg.total_vested, 42);
    }
}
