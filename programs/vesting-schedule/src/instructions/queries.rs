//! Read-only instructions. Values are returned through Anchor return data.

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{LEDGER_SEED, SCHEDULE_STATE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{AllocationLedger, AllocationView, ScheduleConfig, ScheduleState};

pub fn get_allocation(ctx: Context<ReadLedger>, beneficiary: Pubkey) -> Result<AllocationView> {
    Ok(ctx.accounts.ledger.view(&beneficiary))
}

pub fn get_amount_in_vesting(ctx: Context<ReadLedger>) -> Result<u64> {
    Ok(ctx.accounts.ledger.total_vested)
}

pub fn get_schedule_config(ctx: Context<ReadLedger>) -> Result<ScheduleConfig> {
    Ok(ctx
        .accounts
        .schedule_state
        .config(ctx.accounts.ledger.total_vested))
}

/// Live vault balance, so it reflects funding, removals and withdrawals.
pub fn get_available_funds(ctx: Context<ReadVault>) -> Result<u64> {
    Ok(ctx.accounts.vault.amount)
}

#[derive(Accounts)]
pub struct ReadLedger<'info> {
    #[account(seeds = [SCHEDULE_STATE_SEED], bump)]
    pub schedule_state: Account<'info, ScheduleState>,

    #[account(
        seeds = [LEDGER_SEED, schedule_state.key().as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, AllocationLedger>>,
}

#[derive(Accounts)]
pub struct ReadVault<'info> {
    #[account(seeds = [SCHEDULE_STATE_SEED], bump)]
    pub schedule_state: Account<'info, ScheduleState>,

    #[account(
        seeds = [VAULT_SEED, schedule_state.key().as_ref()],
        bump,
        constraint = vault.mint == schedule_state.vesting_coin @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,
}
