use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{LEDGER_SEED, SCHEDULE_STATE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{AllocationLedger, ScheduleState};
use crate::utils::funding;

pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    let st = &ctx.accounts.schedule_state;
    require!(
        st.is_administrator(&ctx.accounts.admin.key()),
        VestingError::UnauthorizedAdmin
    );

    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        st.vesting_coin,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.admin_token_account.amount >= amount,
        VestingError::InsufficientFunderBalance
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;
    let vault_balance = ctx.accounts.vault.amount;

    emit!(FundsAdded {
        admin: ctx.accounts.admin.key(),
        amount,
        vault_balance,
        headroom: funding::headroom(ctx.accounts.ledger.total_vested, vault_balance),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Fund<'info> {
    #[account(seeds = [SCHEDULE_STATE_SEED], bump)]
    pub schedule_state: Account<'info, ScheduleState>,

    #[account(
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
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct FundsAdded {
    pub admin: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    /// Room left for new or larger allocations.
    pub headroom: u64,
}
