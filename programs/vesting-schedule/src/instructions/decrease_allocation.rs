use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, SCHEDULE_STATE_SEED};
use crate::error::VestingError;
use crate::state::{AllocationLedger, ScheduleState};

pub fn decrease_allocation(
    ctx: Context<DecreaseAllocation>,
    beneficiary: Pubkey,
    amount: u64,
) -> Result<()> {
    require!(
        ctx.accounts
            .schedule_state
            .is_administrator(&ctx.accounts.admin.key()),
        VestingError::UnauthorizedAdmin
    );

    let ledger = &mut ctx.accounts.ledger;
    let applied = ledger.decrease(&beneficiary, amount)?;
    if applied < amount {
        msg!("decrease clamped: requested {}, applied {}", amount, applied);
    }

    emit!(AllocationDecreased {
        beneficiary,
        requested: amount,
        applied,
        total_vested: ledger.total_vested,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct DecreaseAllocation<'info> {
    #[account(seeds = [SCHEDULE_STATE_SEED], bump)]
    pub schedule_state: Account<'info, ScheduleState>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, schedule_state.key().as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, AllocationLedger>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AllocationDecreased {
    pub beneficiary: Pubkey,
    pub requested: u64,
    pub applied: u64,
    pub total_vested: u64,
}
