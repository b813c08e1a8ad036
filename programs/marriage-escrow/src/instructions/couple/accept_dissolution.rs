use anchor_lang::prelude::*;
use crate::constants::{COUPLE_SEED, MEMBER_SEED, REGISTRY_SEED};
use crate::state::{Couple, Member, RegistryConfig};
use crate::events::DissolutionAccepted;
use crate::errors::EscrowError;
use crate::utils::funds;

#[derive(Accounts)]
#[instruction(couple_id: u64)]
pub struct AcceptDissolution<'info> {
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

    /// CHECK: Receives the reporter's share; validated against the couple
    #[account(mut, constraint = reporter.key() == couple.reporter @ EscrowError::NotParty)]
    pub reporter: AccountInfo<'info>,

    #[account(mut)]
    pub user: Signer<'info>,
}

pub fn process_accept_dissolution(ctx: Context<AcceptDissolution>, couple_id: u64) -> Result<()> {
    let couple = &mut ctx.accounts.couple;
    let user = ctx.accounts.user.key();
    let clock = Clock::get()?;

    let payout = couple.accept_dissolution(user, clock.unix_timestamp)?;
    ctx.accounts.member_a.release();
    ctx.accounts.member_b.release();
    ctx.accounts.registry.record_resolution()?;

    funds::disburse_pair(
        &couple.to_account_info(),
        (&ctx.accounts.reporter, payout.reporter),
        (&ctx.accounts.user.to_account_info(), payout.counterparty),
    )?;

    emit!(DissolutionAccepted {
        couple_id,
        reporter: couple.reporter,
        accepter: user,
        reporter_amount: payout.reporter,
        accepter_amount: payout.counterparty,
    });

    Ok(())
}
