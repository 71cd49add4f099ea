use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{LEDGER_SEED, SCHEDULE_STATE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{AllocationLedger, ScheduleState};

pub fn increase_allocation(
    ctx: Context<IncreaseAllocation>,
    beneficiary: Pubkey,
    amount: u64,
) -> Result<()> {
    require!(
        ctx.accounts
            .schedule_state
            .is_administrator(&ctx.accounts.admin.key()),
        VestingError::UnauthorizedAdmin
    );

    let available_funds = ctx.accounts.vault.amount;
    let ledger = &mut ctx.accounts.ledger;
    let allocation = ledger.increase(&beneficiary, amount, available_funds)?;

    emit!(AllocationIncreased {
        beneficiary,
        amount,
        allocation,
        total_vested: ledger.total_vested,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct IncreaseAllocation<'info> {
    #[account(seeds = [SCHEDULE_STATE_SEED], bump)]
    pub schedule_state: Account<'info, ScheduleState>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, schedule_state.key().as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, AllocationLedger>>,

    #[account(
        seeds = [VAULT_SEED, schedule_state.key().as_ref()],
        bump,
        constraint = vault.mint == schedule_state.vesting_coin @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AllocationIncreased {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub allocation: u64,
    pub total_vested: u64,
}
