use anchor_lang::prelude::*;
use crate::constants::{JURY_PANEL_SEED, JUROR_SEED, VOTE_CASE_SEED};
use crate::state::{JuryPanel, JurorSlot, Verdict, VoteCase};
use crate::events::{QuorumReached, VoteCast};
use crate::errors::EscrowError;

#[derive(Accounts)]
#[instruction(couple_id: u64)]
pub struct CastVote<'info> {
    #[account(
        mut,
        seeds = [JURY_PANEL_SEED],
        bump = jury_panel.bump,
    )]
    pub jury_panel: Account<'info, JuryPanel>,

    /// Absent for identities that were never whitelisted
    #[account(
        seeds = [JUROR_SEED, juror.key().as_ref()],
        bump,
    )]
    pub juror_slot: Option<Account<'info, JurorSlot>>,

    /// Absent until the couple is escalated
    #[account(
        mut,
        seeds = [VOTE_CASE_SEED, couple_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub vote_case: Option<Account<'info, VoteCase>>,

    pub juror: Signer<'info>,
}

pub fn process_cast_vote(ctx: Context<CastVote>, couple_id: u64, choice: Verdict) -> Result<()> {
    let jury_panel = &mut ctx.accounts.jury_panel;
    let juror = ctx.accounts.juror.key();
    let clock = Clock::get()?;

    // Guards
    require!(
        jury_panel.contains(ctx.accounts.juror_slot.as_deref(), &juror),
        EscrowError::NotEligible
    );
    let vote_case = ctx.accounts.vote_case.as_mut().ok_or(EscrowError::NoSuchCase)?;

    let closed = vote_case.record_vote(juror, choice, clock.unix_timestamp)?;

    emit!(VoteCast {
        couple_id,
        juror,
        choice,
        votes_for: vote_case.votes_for,
        votes_against: vote_case.votes_against,
    });

    if let Some(verdict) = closed {
        jury_panel.record_close()?;
        msg!("Couple {}: quorum reached, voting closed", couple_id);

        emit!(QuorumReached {
            couple_id,
            verdict,
            votes_for: vote_case.votes_for,
            votes_against: vote_case.votes_against,
        });
    }

    Ok(())
}
