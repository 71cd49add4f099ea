use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, SCHEDULE_STATE_SEED};
use crate::error::VestingError;
use crate::state::{AllocationLedger, ScheduleState};

pub fn extend_allocation(
    ctx: Context<ExtendAllocation>,
    beneficiary: Pubkey,
    new_release_date: i64,
) -> Result<()> {
    require!(
        ctx.accounts
            .schedule_state
            .is_administrator(&ctx.accounts.admin.key()),
        VestingError::UnauthorizedAdmin
    );

    let ledger = &mut ctx.accounts.ledger;
    let previous_release_date = ledger.active(&beneficiary)?.release_date;
    ledger.extend(&beneficiary, new_release_date)?;

    emit!(AllocationExtended {
        beneficiary,
        previous_release_date,
        new_release_date,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ExtendAllocation<'info> {
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
pub struct AllocationExtended {
    pub beneficiary: Pubkey,
    pub previous_release_date: i64,
    pub new_release_date: i64,
}
