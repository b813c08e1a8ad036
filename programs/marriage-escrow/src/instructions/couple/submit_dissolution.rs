use anchor_lang::prelude::*;
use crate::constants::MEMBER_SEED;
use crate::state::{held_couple, Couple, Member};
use crate::events::DissolutionSubmitted;

#[derive(Accounts)]
pub struct SubmitDissolution<'info> {
    /// Absent for identities that never registered
    #[account(
        seeds = [MEMBER_SEED, user.key().as_ref()],
        bump,
    )]
    pub member: Option<Account<'info, Member>>,

    /// Couple the member index points at; matched by id in the handler
    #[account(mut)]
    pub couple: Option<Account<'info, Couple>>,

    pub user: Signer<'info>,
}

pub fn process_submit_dissolution(ctx: Context<SubmitDissolution>, evidence_hash: String) -> Result<()> {
    let user = ctx.accounts.user.key();
    let clock = Clock::get()?;

    let couple = held_couple(ctx.accounts.member.as_deref(), ctx.accounts.couple.as_deref_mut())?;
    couple.submit_dissolution(user, evidence_hash, clock.unix_timestamp)?;

    emit!(DissolutionSubmitted {
        couple_id: couple.couple_id,
        reporter: user,
        evidence_hash: couple.evidence_hash.clone(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
