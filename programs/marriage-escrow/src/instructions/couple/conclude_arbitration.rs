use anchor_lang::prelude::*;
use crate::constants::{COUPLE_SEED, MEMBER_SEED, REGISTRY_SEED, VOTE_CASE_SEED};
use crate::state::{Couple, Member, RegistryConfig, VoteCase};
use crate::events::ArbitrationConcluded;
use crate::errors::EscrowError;
use crate::utils::funds;

#[derive(Accounts)]
#[instruction(couple_id: u64)]
pub struct ConcludeArbitration<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, RegistryConfig>,

    #[account(
        mut,
        seeds = [COUPLE_SEED, couple_id.to_le_bytes().as_ref()],
        bump = couple.bump,
    )]
    pub couple: Account<'info, Couple>,

    /// Missing when the couple was never escalated
    #[account(
        seeds = [VOTE_CASE_SEED, couple_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub vote_case: Option<Account<'info, VoteCase>>,

    #[account(
        mut,
        seeds = [MEMBER_SEED, couple.party_a.as_ref()],
        bump = member_a.bump,
    )]
    pub member_a: Account<'info, Member>,

    #[account(
        mut,
        seeds = [MEMBER_SEED, couple.party_b.as_ref()],
        bump = member_b.bump,
    )]
    pub member_b: Account<'info, Member>,

    /// CHECK: Validated against the couple
    #[account(mut, constraint = reporter.key() == couple.reporter @ EscrowError::NotParty)]
    pub reporter: AccountInfo<'info>,

    /// CHECK: Validated against the couple
    #[account(mut, constraint = disputer.key() == couple.disputer @ EscrowError::NotParty)]
    pub disputer: AccountInfo<'info>,

    /// Anyone may settle a closed case
    pub caller: Signer<'info>,
}

pub fn process_conclude_arbitration(ctx: Context<ConcludeArbitration>, couple_id: u64) -> Result<()> {
    let couple = &mut ctx.accounts.couple;
    let clock = Clock::get()?;

    let verdict = ctx.accounts.vote_case.as_ref().and_then(|case| case.closed_verdict());
    let payout = couple.conclude(verdict, clock.unix_timestamp)?;
    ctx.accounts.member_a.release();
    ctx.accounts.member_b.release();
    ctx.accounts.registry.record_resolution()?;

    funds::disburse_pair(
        &couple.to_account_info(),
        (&ctx.accounts.reporter, payout.reporter),
        (&ctx.accounts.disputer, payout.counterparty),
    )?;

    emit!(ArbitrationConcluded {
        couple_id,
        verdict: couple.verdict.ok_or(EscrowError::NotClosed)?,
        reporter_amount: payout.reporter,
        disputer_amount: payout.counterparty,
    });

    Ok(())
}
