use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::{AllocationView, ScheduleConfig, WithdrawalFrequency};

declare_id!("5fz78RocaJ6R4NRsn6HSDenbhKhzWCopUc7uof7hFNt");

#[program]
pub mod vesting_schedule {
    use super::*;

    pub fn initialize_schedule(
        ctx: Context<InitializeSchedule>,
        minimum_vesting_period: i64,
        withdrawal_cap: u64,
        withdrawal_frequency: WithdrawalFrequency,
    ) -> Result<()> {
        instructions::initialize_schedule(
            ctx,
            minimum_vesting_period,
            withdrawal_cap,
            withdrawal_frequency,
        )
    }

    pub fn add_administrator(ctx: Context<AddAdministrator>, new_admin: Pubkey) -> Result<()> {
        instructions::add_administrator(ctx, new_admin)
    }

    pub fn remove_administrator(ctx: Context<RemoveAdministrator>, admin: Pubkey) -> Result<()> {
        instructions::remove_administrator(ctx, admin)
    }

    pub fn create_allocation(
        ctx: Context<CreateAllocation>,
        beneficiary: Pubkey,
        name: String,
        amount: u64,
        release_date: i64,
    ) -> Result<()> {
        instructions::create_allocation(ctx, beneficiary, name, amount, release_date)
    }

    pub fn increase_allocation(
        ctx: Context<IncreaseAllocation>,
        beneficiary: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::increase_allocation(ctx, beneficiary, amount)
    }

    /// Requests above the current allocation zero it rather than failing.
    pub fn decrease_allocation(
        ctx: Context<DecreaseAllocation>,
        beneficiary: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::decrease_allocation(ctx, beneficiary, amount)
    }

    pub fn delete_allocation(ctx: Context<DeleteAllocation>, beneficiary: Pubkey) -> Result<bool> {
        instructions::delete_allocation(ctx, beneficiary)
    }

    pub fn extend_allocation(
        ctx: Context<ExtendAllocation>,
        beneficiary: Pubkey,
        new_release_date: i64,
    ) -> Result<()> {
        instructions::extend_allocation(ctx, beneficiary, new_release_date)
    }

    pub fn get_allocation(ctx: Context<ReadLedger>, beneficiary: Pubkey) -> Result<AllocationView> {
        instructions::get_allocation(ctx, beneficiary)
    }

    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        instructions::fund(ctx, amount)
    }

    pub fn remove_funds(ctx: Context<RemoveFunds>, amount: u64) -> Result<()> {
        instructions::remove_funds(ctx, amount)
    }

    pub fn get_available_funds(ctx: Context<ReadVault>) -> Result<u64> {
        instructions::get_available_funds(ctx)
    }

    pub fn get_amount_in_vesting(ctx: Context<ReadLedger>) -> Result<u64> {
        instructions::get_amount_in_vesting(ctx)
    }

    pub fn get_drawing_power(ctx: Context<GetDrawingPower>, beneficiary: Pubkey) -> Result<u64> {
        instructions::get_drawing_power(ctx, beneficiary)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    pub fn get_schedule_config(ctx: Context<ReadLedger>) -> Result<ScheduleConfig> {
        instructions::get_schedule_config(ctx)
    }
}
