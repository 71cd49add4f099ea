use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LEDGER_SEED, MAX_ADMINISTRATORS, SCHEDULE_STATE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{AllocationLedger, ScheduleState, WithdrawalFrequency};

pub fn initialize_schedule(
    ctx: Context<InitializeSchedule>,
    minimum_vesting_period: i64,
    withdrawal_cap: u64,
    withdrawal_frequency: WithdrawalFrequency,
) -> Result<()> {
    require!(minimum_vesting_period >= 0, VestingError::InvalidConfig);
    require!(withdrawal_cap > 0, VestingError::InvalidConfig);

    let now = Clock::get()?.unix_timestamp;
    let earliest_withdrawal_date = now
        .checked_add(minimum_vesting_period)
        .ok_or(VestingError::MathOverflow)?;

    let owner = ctx.accounts.owner.key();
    let st = &mut ctx.accounts.schedule_state;
    st.vesting_coin = ctx.accounts.mint.key();
    st.owner = owner;
    st.administrators = Vec::with_capacity(MAX_ADMINISTRATORS);
    st.administrators.push(owner);
    st.minimum_vesting_period = minimum_vesting_period;
    st.withdrawal_cap = withdrawal_cap;
    st.withdrawal_frequency = withdrawal_frequency;
    st.vesting_started_on = now;
    st.earliest_withdrawal_date = earliest_withdrawal_date;

    let ledger = &mut ctx.accounts.ledger;
    ledger.total_vested = 0;
    ledger.entries = Vec::new();

    emit!(ScheduleInitialized {
        vesting_coin: st.vesting_coin,
        owner,
        minimum_vesting_period,
        withdrawal_cap,
        withdrawal_frequency,
        vesting_started_on: now,
        earliest_withdrawal_date,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeSchedule<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + ScheduleState::SIZE,
        seeds = [SCHEDULE_STATE_SEED],
        bump
    )]
    pub schedule_state: Account<'info, ScheduleState>,

    #[account(
        init,
        payer = owner,
        space = AllocationLedger::space(),
        seeds = [LEDGER_SEED, schedule_state.key().as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, AllocationLedger>>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = schedule_state,
        seeds = [VAULT_SEED, schedule_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct ScheduleInitialized {
    pub vesting_coin: Pubkey,
    pub owner: Pubkey,
    pub minimum_vesting_period: i64,
    pub withdrawal_cap: u64,
    pub withdrawal_frequency: WithdrawalFrequency,
    pub vesting_started_on: i64,
    pub earliest_withdrawal_date: i64,
}
