use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, SCHEDULE_STATE_SEED};
use crate::error::VestingError;
use crate::state::{AllocationLedger, ScheduleState};

pub fn delete_allocation(ctx: Context<DeleteAllocation>, beneficiary: Pubkey) -> Result<bool> {
    require!(
        ctx.accounts
            .schedule_state
            .is_administrator(&ctx.accounts.admin.key()),
        VestingError::UnauthorizedAdmin
    );

    let ledger = &mut ctx.accounts.ledger;
    let released = ledger.active(&beneficiary)?.allocation;
    let deleted = ledger.delete(&beneficiary)?;

    emit!(AllocationDeleted {
        beneficiary,
        released,
        total_vested: ledger.total_vested,
    });
    Ok(deleted)
}

#[derive(Accounts)]
pub struct DeleteAllocation<'info> {
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

/// Emitted when an allocation is soft-deleted; `released` is the amount
/// returned to the unallocated pool.
#[event]
pub struct AllocationDeleted {
    pub beneficiary: Pubkey,
    pub released: u64,
    pub total_vested: u64,
}
