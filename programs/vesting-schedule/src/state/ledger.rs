use anchor_lang::prelude::*;

use crate::constants::{MAX_BENEFICIARIES, MAX_NAME_LEN};
use crate::error::VestingError;
use crate::utils::funding;

/// Financial state of a live allocation.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveAllocation {
    pub name: String,
    /// Drawing power starts accruing from this timestamp.
    pub release_date: i64,
    /// Total amount granted.
    pub allocation: u64,
    /// Amount not yet withdrawn.
    pub closing_balance: u64,
    /// Cumulative amount withdrawn.
    pub withdrawn: u64,
    /// Timestamp of the most recent withdrawal, 0 if none.
    pub last_withdrawn_on: i64,
}

impl ActiveAllocation {
    pub const SIZE: usize =
        4 + MAX_NAME_LEN + // name
        8 + // release_date
        8 + // allocation
        8 + // closing_balance
        8 + // withdrawn
        8;  // last_withdrawn_on

    pub fn apply_withdrawal(
        &mut self,
        amount: u64,
        now: i64,
    ) -> std::result::Result<(), VestingError> {
        let withdrawn = self
            .withdrawn
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        let closing_balance = self
            .closing_balance
            .checked_sub(amount)
            .ok_or(VestingError::ExceedsDrawingPower)?;
        self.withdrawn = withdrawn;
        self.closing_balance = closing_balance;
        self.last_withdrawn_on = now;
        Ok(())
    }
}

/// A beneficiary's record. Deleted records keep the key reserved forever.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum AllocationRecord {
    Active(ActiveAllocation),
    Deleted {
        name: String,
        release_date: i64,
        last_withdrawn_on: i64,
    },
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AllocationEntry {
    pub beneficiary: Pubkey,
    pub record: AllocationRecord,
}

impl AllocationEntry {
    // Enum tag plus the larger (active) variant.
    pub const SIZE: usize = 32 + 1 + ActiveAllocation::SIZE;
}

/// Flattened allocation returned by `get_allocation`. Non-existent keys read
/// as all zeroes with `deleted == false`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AllocationView {
    pub beneficiary: Pubkey,
    pub name: String,
    pub release_date: i64,
    pub allocation: u64,
    pub closing_balance: u64,
    pub withdrawn: u64,
    pub last_withdrawn_on: i64,
    pub deleted: bool,
}

/// Ledger PDA: every allocation record plus the `total_vested` aggregate.
/// Both are written together by the methods below, so the aggregate always
/// equals the sum of active allocations.
#[account]
pub struct AllocationLedger {
    pub total_vested: u64,
    pub entries: Vec<AllocationEntry>,
}

impl AllocationLedger {
    /// Space for discriminator + aggregate + a full entries vec.
    pub const fn space() -> usize {
        8 + 8 + 4 + MAX_BENEFICIARIES * AllocationEntry::SIZE
    }

    pub fn find(&self, beneficiary: &Pubkey) -> Option<&AllocationRecord> {
        self.entries
            .iter()
            .find(|e| e.beneficiary == *beneficiary)
            .map(|e| &e.record)
    }

    pub fn active(
        &self,
        beneficiary: &Pubkey,
    ) -> std::result::Result<&ActiveAllocation, VestingError> {
        match self.find(beneficiary) {
            Some(AllocationRecord::Active(a)) => Ok(a),
            Some(AllocationRecord::Deleted { .. }) => Err(VestingError::AllocationDeleted),
            None => Err(VestingError::AllocationNotFound),
        }
    }

    pub fn active_mut(
        &mut self,
        beneficiary: &Pubkey,
    ) -> std::result::Result<&mut ActiveAllocation, VestingError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.beneficiary == *beneficiary)
            .ok_or(VestingError::AllocationNotFound)?;
        match &mut entry.record {
            AllocationRecord::Active(a) => Ok(a),
            AllocationRecord::Deleted { .. } => Err(VestingError::AllocationDeleted),
        }
    }

    pub fn create(
        &mut self,
        beneficiary: Pubkey,
        name: String,
        amount: u64,
        release_date: i64,
        earliest_withdrawal_date: i64,
        available_funds: u64,
    ) -> std::result::Result<(), VestingError> {
        if amount == 0 {
            return Err(VestingError::InvalidAmount);
        }
        if name.len() > MAX_NAME_LEN {
            return Err(VestingError::NameTooLong);
        }
        // A deleted key stays taken; an active one only while it holds something.
        let slot = self.entries.iter().position(|e| e.beneficiary == beneficiary);
        if let Some(idx) = slot {
            match &self.entries[idx].record {
                AllocationRecord::Active(a) if a.allocation == 0 => {}
                _ => return Err(VestingError::AllocationExists),
            }
        }
        if release_date <= earliest_withdrawal_date {
            return Err(VestingError::ReleaseBeforeEarliestWithdrawal);
        }
        let total_vested = funding::ensure_within_funds(self.total_vested, amount, available_funds)?;
        if slot.is_none() && self.entries.len() >= MAX_BENEFICIARIES {
            return Err(VestingError::LedgerFull);
        }

        let record = AllocationRecord::Active(ActiveAllocation {
            name,
            release_date,
            allocation: amount,
            closing_balance: amount,
            withdrawn: 0,
            last_withdrawn_on: 0,
        });
        match slot {
            // Zeroed allocation: the old amount is already out of `total_vested`.
            Some(idx) => self.entries[idx].record = record,
            None => self.entries.push(AllocationEntry { beneficiary, record }),
        }
        self.total_vested = total_vested;
        Ok(())
    }

    /// Returns the new allocation.
    pub fn increase(
        &mut self,
        beneficiary: &Pubkey,
        extra: u64,
        available_funds: u64,
    ) -> std::result::Result<u64, VestingError> {
        if extra == 0 {
            return Err(VestingError::InvalidAmount);
        }
        let current = self.active(beneficiary)?;
        let allocation = current
            .allocation
            .checked_add(extra)
            .ok_or(VestingError::MathOverflow)?;
        let closing_balance = current
            .closing_balance
            .checked_add(extra)
            .ok_or(VestingError::MathOverflow)?;
        let total_vested = funding::ensure_within_funds(self.total_vested, extra, available_funds)?;

        let a = self.active_mut(beneficiary)?;
        a.allocation = allocation;
        a.closing_balance = closing_balance;
        self.total_vested = total_vested;
        Ok(allocation)
    }

    /// Reduces by at most the current allocation; asking for more zeroes the
    /// allocation instead of failing. Returns the amount actually removed.
    pub fn decrease(
        &mut self,
        beneficiary: &Pubkey,
        amount: u64,
    ) -> std::result::Result<u64, VestingError> {
        let total_vested = self.total_vested;
        let a = self.active_mut(beneficiary)?;
        let applied = amount.min(a.allocation);
        let total_vested = total_vested
            .checked_sub(applied)
            .ok_or(VestingError::MathOverflow)?;

        a.allocation -= applied;
        a.closing_balance = a.closing_balance.saturating_sub(applied);
        self.total_vested = total_vested;
        Ok(applied)
    }

    pub fn delete(&mut self, beneficiary: &Pubkey) -> std::result::Result<bool, VestingError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.beneficiary == *beneficiary)
            .ok_or(VestingError::AllocationNotFound)?;
        let a = match &mut entry.record {
            AllocationRecord::Active(a) => a,
            AllocationRecord::Deleted { .. } => return Err(VestingError::AllocationDeleted),
        };
        let total_vested = self
            .total_vested
            .checked_sub(a.allocation)
            .ok_or(VestingError::MathOverflow)?;

        let name = core::mem::take(&mut a.name);
        let release_date = a.release_date;
        let last_withdrawn_on = a.last_withdrawn_on;
        entry.record = AllocationRecord::Deleted {
            name,
            release_date,
            last_withdrawn_on,
        };
        self.total_vested = total_vested;
        Ok(true)
    }

    pub fn extend(
        &mut self,
        beneficiary: &Pubkey,
        new_release_date: i64,
    ) -> std::result::Result<(), VestingError> {
        let a = self.active_mut(beneficiary)?;
        if new_release_date <= a.release_date {
            return Err(VestingError::ExtensionNotInFuture);
        }
        a.release_date = new_release_date;
        Ok(())
    }

    pub fn view(&self, beneficiary: &Pubkey) -> AllocationView {
        let mut view = AllocationView {
            beneficiary: *beneficiary,
            ..AllocationView::default()
        };
        match self.find(beneficiary) {
            Some(AllocationRecord::Active(a)) => {
                view.name = a.name.clone();
                view.release_date = a.release_date;
                view.allocation = a.allocation;
                view.closing_balance = a.closing_balance;
                view.withdrawn = a.withdrawn;
                view.last_withdrawn_on = a.last_withdrawn_on;
            }
            Some(AllocationRecord::Deleted {
                name,
                release_date,
                last_withdrawn_on,
            }) => {
                view.name = name.clone();
                view.release_date = *release_date;
                view.last_withdrawn_on = *last_withdrawn_on;
                view.deleted = true;
            }
            None => {}
        }
        view
    }
}
