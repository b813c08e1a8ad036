use anchor_lang::prelude::*;
use crate::constants::{JURY_PANEL_SEED, JUROR_SEED};
use crate::state::{JuryPanel, JurorSlot};

#[derive(Accounts)]
#[instruction(juror: Pubkey)]
pub struct IsJuror<'info> {
    #[account(seeds = [JURY_PANEL_SEED], bump = jury_panel.bump)]
    pub jury_panel: Account<'info, JuryPanel>,

    /// Absent for identities that were never whitelisted
    #[account(seeds = [JUROR_SEED, juror.as_ref()], bump)]
    pub juror_slot: Option<Account<'info, JurorSlot>>,
}

pub fn is_juror(ctx: Context<IsJuror>, juror: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.jury_panel.contains(ctx.accounts.juror_slot.as_deref(), &juror))
}

#[derive(Accounts)]
pub struct JurorCount<'info> {
    #[account(seeds = [JURY_PANEL_SEED], bump = jury_panel.bump)]
    pub jury_panel: Account<'info, JuryPanel>,
}

pub fn juror_count(ctx: Context<JurorCount>) -> Result<u32> {
    Ok(ctx.accounts.jury_panel.count())
}
