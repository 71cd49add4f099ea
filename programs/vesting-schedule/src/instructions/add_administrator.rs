use anchor_lang::prelude::*;

use crate::constants::SCHEDULE_STATE_SEED;
use crate::error::VestingError;
use crate::state::ScheduleState;

pub fn add_administrator(ctx: Context<AddAdministrator>, new_admin: Pubkey) -> Result<()> {
    let schedule_state_key = ctx.accounts.schedule_state.key();
    let st = &mut ctx.accounts.schedule_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, VestingError::UnauthorizedOwner);

    // PDAs cannot sign, so they can never act as administrators.
    require!(new_admin != schedule_state_key, VestingError::InvalidPubkey);
    require!(new_admin != crate::ID, VestingError::InvalidPubkey);

    st.add_administrator(new_admin)?;

    emit!(AdministratorAdded {
        owner: st.owner,
        administrator: new_admin,
        count: st.administrators.len() as u8,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AddAdministrator<'info> {
    #[account(mut, seeds = [SCHEDULE_STATE_SEED], bump)]
    pub schedule_state: Account<'info, ScheduleState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct AdministratorAdded {
    pub owner: Pubkey,
    pub administrator: Pubkey,
    pub count: u8,
}
