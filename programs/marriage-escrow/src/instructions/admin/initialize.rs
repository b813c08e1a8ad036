use anchor_lang::prelude::*;
use crate::constants::{JURY_PANEL_SEED, REGISTRY_SEED};
use crate::state::{JuryPanel, RegistryConfig};
use crate::events::ProtocolInitialized;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        seeds = [REGISTRY_SEED],
        bump,
        payer = admin,
        space = RegistryConfig::LEN
    )]
    pub registry: Account<'info, RegistryConfig>,

    #[account(
        init,
        seeds = [JURY_PANEL_SEED],
        bump,
        payer = admin,
        space = JuryPanel::LEN
    )]
    pub jury_panel: Account<'info, JuryPanel>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_initialize(ctx: Context<Initialize>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.admin = ctx.accounts.admin.key();
    registry.couple_count = 0;
    registry.resolved_count = 0;
    registry.bump = ctx.bumps.registry;

    // The registry PDA is the only key allowed to open vote cases
    let jury_panel = &mut ctx.accounts.jury_panel;
    jury_panel.admin = ctx.accounts.admin.key();
    jury_panel.escalation_authority = registry.key();
    jury_panel.jurors = Vec::new();
    jury_panel.open_cases = 0;
    jury_panel.closed_cases = 0;
    jury_panel.bump = ctx.bumps.jury_panel;

    emit!(ProtocolInitialized {
        admin: registry.admin,
        registry: registry.key(),
        jury_panel: jury_panel.key(),
    });

    Ok(())
}
