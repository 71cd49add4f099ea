use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{LEDGER_SEED, SCHEDULE_STATE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{AllocationLedger, ScheduleState};

pub fn create_allocation(
    ctx: Context<CreateAllocation>,
    beneficiary: Pubkey,
    name: String,
    amount: u64,
    release_date: i64,
) -> Result<()> {
    let st = &ctx.accounts.schedule_state;
    require!(
        st.is_administrator(&ctx.accounts.admin.key()),
        VestingError::UnauthorizedAdmin
    );
    require!(beneficiary != Pubkey::default(), VestingError::InvalidPubkey);

    let available_funds = ctx.accounts.vault.amount;
    let ledger = &mut ctx.accounts.ledger;
    ledger.create(
        beneficiary,
        name.clone(),
        amount,
        release_date,
        st.earliest_withdrawal_date,
        available_funds,
    )?;

    emit!(AllocationCreated {
        beneficiary,
        name,
        amount,
        release_date,
        total_vested: ledger.total_vested,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct CreateAllocation<'info> {
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
pub struct AllocationCreated {
    pub beneficiary: Pubkey,
    pub name: String,
    pub amount: u64,
    pub release_date: i64,
    pub total_vested: u64,
}
