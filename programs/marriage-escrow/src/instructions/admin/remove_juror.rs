use anchor_lang::prelude::*;
use crate::constants::{JURY_PANEL_SEED, JUROR_SEED};
use crate::state::{JuryPanel, JurorSlot};
use crate::events::JurorRemoved;
use crate::errors::EscrowError;

#[derive(Accounts)]
#[instruction(juror: Pubkey)]
pub struct RemoveJuror<'info> {
    #[account(
        mut,
        seeds = [JURY_PANEL_SEED],
        bump = jury_panel.bump,
        constraint = jury_panel.admin == admin.key() @ EscrowError::OwnerOnly
    )]
    pub jury_panel: Account<'info, JuryPanel>,

    #[account(
        mut,
        seeds = [JUROR_SEED, juror.as_ref()],
        bump = juror_slot.bump,
    )]
    pub juror_slot: Account<'info, JurorSlot>,

    /// Slot of the juror currently last in the whitelist. Omit when removing
    /// that juror itself.
    #[account(
        mut,
        constraint = moved_slot.juror != juror @ EscrowError::WhitelistSlotMismatch
    )]
    pub moved_slot: Option<Account<'info, JurorSlot>>,

    pub admin: Signer<'info>,
}

pub fn process_remove_juror(ctx: Context<RemoveJuror>, juror: Pubkey) -> Result<()> {
    let moved = ctx.accounts.moved_slot.as_deref_mut();
    let count = ctx.accounts.jury_panel.dismiss(&mut ctx.accounts.juror_slot, moved)?;

    emit!(JurorRemoved { juror, count });

    Ok(())
}
