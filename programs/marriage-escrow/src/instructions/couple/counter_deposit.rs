use anchor_lang::prelude::*;
use crate::constants::{COUPLE_SEED, MEMBER_SEED};
use crate::state::{Couple, Member};
use crate::events::CoupleActivated;
use crate::errors::EscrowError;
use crate::utils::funds;

#[derive(Accounts)]
#[instruction(couple_id: u64)]
pub struct CounterDeposit<'info> {
    /// Missing when no couple was ever registered under `couple_id`
    #[account(
        mut,
        seeds = [COUPLE_SEED, couple_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub couple: Option<Account<'info, Couple>>,

    #[account(
        init_if_needed,
        seeds = [MEMBER_SEED, user.key().as_ref()],
        bump,
        payer = user,
        space = Member::LEN
    )]
    pub member: Account<'info, Member>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_counter_deposit(ctx: Context<CounterDeposit>, couple_id: u64, deposit: u64) -> Result<()> {
    let user = ctx.accounts.user.key();
    let couple = ctx.accounts.couple.as_mut().ok_or(EscrowError::InvalidCase)?;

    let custody = couple.counter_deposit(user, &ctx.accounts.member, deposit)?;
    ctx.accounts.member.claim(user, couple_id, ctx.bumps.member)?;

    funds::collect(
        ctx.accounts.system_program.to_account_info(),
        ctx.accounts.user.to_account_info(),
        couple.to_account_info(),
        custody,
    )?;

    emit!(CoupleActivated {
        couple_id,
        party_b: user,
        deposit: custody,
    });

    Ok(())
}
