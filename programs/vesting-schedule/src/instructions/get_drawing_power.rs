use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, SCHEDULE_STATE_SEED};
use crate::state::{AllocationLedger, ScheduleState};
use crate::utils::{drawing_power, time};

/// Public read: anyone may quote any beneficiary. Unknown and deleted keys
/// quote zero.
pub fn get_drawing_power(ctx: Context<GetDrawingPower>, beneficiary: Pubkey) -> Result<u64> {
    let st = &ctx.accounts.schedule_state;
    let now = Clock::get()?.unix_timestamp;

    let record = ctx.accounts.ledger.find(&beneficiary);
    let power = drawing_power::drawing_power_of(
        record,
        now,
        st.withdrawal_cap,
        st.withdrawal_frequency,
    )?;
    let periods = match ctx.accounts.ledger.active(&beneficiary) {
        Ok(a) => time::periods_elapsed(now, a.release_date, st.withdrawal_frequency)?,
        Err(_) => 0,
    };

    emit!(DrawingPowerQuote {
        beneficiary,
        periods_elapsed: periods,
        drawing_power: power,
        quoted_at: now,
    });

    Ok(power)
}

#[derive(Accounts)]
pub struct GetDrawingPower<'info> {
    #[account(seeds = [SCHEDULE_STATE_SEED], bump)]
    pub schedule_state: Account<'info, ScheduleState>,

    #[account(
        seeds = [LEDGER_SEED, schedule_state.key().as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, AllocationLedger>>,
}

#[event]
pub struct DrawingPowerQuote {
    pub beneficiary: Pubkey,
    pub periods_elapsed: u64,
    pub drawing_power: u64,
    pub quoted_at: i64,
}
