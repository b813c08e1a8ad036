use anchor_lang::prelude::*;
use crate::constants::{JURY_PANEL_SEED, JUROR_SEED};
use crate::state::{JuryPanel, JurorSlot};
use crate::events::JurorAdded;
use crate::errors::EscrowError;

#[derive(Accounts)]
#[instruction(juror: Pubkey)]
pub struct AddJuror<'info> {
    #[account(
        mut,
        seeds = [JURY_PANEL_SEED],
        bump = jury_panel.bump,
        constraint = jury_panel.admin == admin.key() @ EscrowError::OwnerOnly
    )]
    pub jury_panel: Account<'info, JuryPanel>,

    // Slots outlive removal so a dismissed juror can be re-added
    #[account(
        init_if_needed,
        seeds = [JUROR_SEED, juror.as_ref()],
        bump,
        payer = admin,
        space = JurorSlot::LEN
    )]
    pub juror_slot: Account<'info, JurorSlot>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_add_juror(ctx: Context<AddJuror>, juror: Pubkey) -> Result<()> {
    let count = ctx.accounts.jury_panel.enroll(&mut ctx.accounts.juror_slot, juror, ctx.bumps.juror_slot)?;

    emit!(JurorAdded { juror, count });

    Ok(())
}
