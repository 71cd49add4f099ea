use anchor_lang::prelude::*;

use crate::constants::SCHEDULE_STATE_SEED;
use crate::error::VestingError;
use crate::state::ScheduleState;

pub fn remove_administrator(ctx: Context<RemoveAdministrator>, admin: Pubkey) -> Result<()> {
    let st = &mut ctx.accounts.schedule_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, VestingError::UnauthorizedOwner);

    st.remove_administrator(&admin)?;

    emit!(AdministratorRemoved {
        owner: st.owner,
        administrator: admin,
        count: st.administrators.len() as u8,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RemoveAdministrator<'info> {
    #[account(mut, seeds = [SCHEDULE_STATE_SEED], bump)]
    pub schedule_state: Account<'info, ScheduleState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct AdministratorRemoved {
    pub owner: Pubkey,
    pub administrator: Pubkey,
    pub count: u8,
}
