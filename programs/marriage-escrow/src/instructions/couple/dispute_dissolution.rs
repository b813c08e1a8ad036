use anchor_lang::prelude::*;
use crate::constants::{COUPLE_SEED, JURY_PANEL_SEED, REGISTRY_SEED, VOTE_CASE_SEED};
use crate::state::{Couple, JuryPanel, RegistryConfig, VoteCase};
use crate::events::{DissolutionDisputed, VoteCaseOpened};

#[derive(Accounts)]
#[instruction(couple_id: u64)]
pub struct DisputeDissolution<'info> {
    #[account(
        mut,
        seeds = [COUPLE_SEED, couple_id.to_le_bytes().as_ref()],
        bump = couple.bump,
    )]
    pub couple: Account<'info, Couple>,

    /// Escalation capability: the jury only opens cases for this key
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, RegistryConfig>,

    #[account(
        mut,
        seeds = [JURY_PANEL_SEED],
        bump = jury_panel.bump,
    )]
    pub jury_panel: Account<'info, JuryPanel>,

    #[account(
        init_if_needed,
        seeds = [VOTE_CASE_SEED, couple_id.to_le_bytes().as_ref()],
        bump,
        payer = user,
        space = VoteCase::LEN
    )]
    pub vote_case: Account<'info, VoteCase>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_dispute_dissolution(ctx: Context<DisputeDissolution>, couple_id: u64) -> Result<()> {
    let couple = &mut ctx.accounts.couple;
    let user = ctx.accounts.user.key();
    let clock = Clock::get()?;

    let disputer = couple.dispute_dissolution(user, clock.unix_timestamp)?;
    if user != disputer {
        msg!("Couple {}: dissolution window expired, escalated by reporter", couple_id);
    }

    ctx.accounts.jury_panel.open_case(
        &ctx.accounts.registry.key(),
        &mut ctx.accounts.vote_case,
        couple_id,
        clock.unix_timestamp,
        ctx.bumps.vote_case,
    )?;

    emit!(DissolutionDisputed {
        couple_id,
        disputer,
        escalated_by: user,
        timestamp: clock.unix_timestamp,
    });

    emit!(VoteCaseOpened {
        couple_id,
        opened_at: clock.unix_timestamp,
    });

    Ok(())
}
