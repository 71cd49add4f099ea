use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{LEDGER_SEED, SCHEDULE_STATE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{AllocationLedger, ScheduleState};
use crate::utils::funding;

pub fn remove_funds(ctx: Context<RemoveFunds>, amount: u64) -> Result<()> {
    let st = &ctx.accounts.schedule_state;
    require!(
        st.is_administrator(&ctx.accounts.admin.key()),
        VestingError::UnauthorizedAdmin
    );

    // NOTE: only the vault balance bounds removal; `total_vested` is not reserved.
    funding::ensure_removable(amount, ctx.accounts.vault.amount)?;

    require_keys_eq!(
        ctx.accounts.admin_destination.mint,
        st.vesting_coin,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_destination.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );

    let signer_seeds: &[&[&[u8]]] = &[&[SCHEDULE_STATE_SEED, &[ctx.bumps.schedule_state]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.admin_destination.to_account_info(),
                authority: ctx.accounts.schedule_state.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;
    let vault_balance = ctx.accounts.vault.amount;
    let total_vested = ctx.accounts.ledger.total_vested;
    if vault_balance < total_vested {
        msg!(
            "vault balance {} is below total vested {}",
            vault_balance,
            total_vested
        );
    }

    emit!(FundsRemoved {
        admin: ctx.accounts.admin.key(),
        amount,
        vault_balance,
        headroom: funding::headroom(total_vested, vault_balance),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RemoveFunds<'info> {
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
    pub admin_destination: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct FundsRemoved {
    pub admin: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub headroom: u64,
}
