use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{LEDGER_SEED, SCHEDULE_STATE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{AllocationLedger, ScheduleState};
use crate::utils::withdrawal;

pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let schedule_state_ai = ctx.accounts.schedule_state.to_account_info();
    let schedule_state_bump = ctx.bumps.schedule_state;
    let beneficiary = ctx.accounts.beneficiary.key();

    let st = &ctx.accounts.schedule_state;
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        st.vesting_coin,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        beneficiary,
        VestingError::UnauthorizedBeneficiary
    );

    let now = Clock::get()?.unix_timestamp;
    let receipt = withdrawal::process_withdrawal(
        &mut ctx.accounts.ledger,
        st,
        &beneficiary,
        amount,
        now,
    )?;

    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

    // CPI transfer from vault to beneficiary, signed by schedule_state PDA.
    // A failure here fails the instruction, discarding the ledger update above.
    let signer_seeds: &[&[&[u8]]] = &[&[SCHEDULE_STATE_SEED, &[schedule_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: schedule_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(Withdrawn {
        beneficiary,
        amount,
        withdrawn: receipt.withdrawn,
        closing_balance: receipt.closing_balance,
        remaining_power: receipt.remaining_power,
        withdrawn_on: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(seeds = [SCHEDULE_STATE_SEED], bump)]
    pub schedule_state: Account<'info, ScheduleState>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, schedule_state.key().as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, AllocationLedger>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, schedule_state.key().as_ref()],
        bump,
        constraint = vault.mint == schedule_state.vesting_coin @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Withdrawn {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub withdrawn: u64,
    pub closing_balance: u64,
    pub remaining_power: u64,
    pub withdrawn_on: i64,
}
