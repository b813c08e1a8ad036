use anchor_lang::prelude::*;
use crate::constants::{MEMBER_SEED, REGISTRY_SEED};
use crate::state::{held_couple, Couple, Member, RegistryConfig};
use crate::events::DepositRefunded;
use crate::errors::EscrowError;
use crate::utils::funds;

#[derive(Accounts)]
pub struct RefundDeposit<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, RegistryConfig>,

    /// Absent for identities that never registered
    #[account(
        mut,
        seeds = [MEMBER_SEED, user.key().as_ref()],
        bump,
    )]
    pub member: Option<Account<'info, Member>>,

    /// Couple the member index points at; matched by id in the handler
    #[account(mut)]
    pub couple: Option<Account<'info, Couple>>,

    #[account(mut)]
    pub user: Signer<'info>,
}

pub fn process_refund_deposit(ctx: Context<RefundDeposit>) -> Result<()> {
    let user = ctx.accounts.user.key();
    let clock = Clock::get()?;

    let couple = held_couple(ctx.accounts.member.as_deref(), ctx.accounts.couple.as_deref_mut())?;
    let couple_id = couple.couple_id;
    let amount = couple.refund(user, clock.unix_timestamp)?;

    ctx.accounts.member.as_mut().ok_or(EscrowError::NotFound)?.release();
    ctx.accounts.registry.record_resolution()?;

    let vault = ctx.accounts.couple.as_ref().ok_or(EscrowError::NotFound)?.to_account_info();
    funds::disburse(&vault, &ctx.accounts.user.to_account_info(), amount)?;

    emit!(DepositRefunded {
        couple_id,
        party_a: user,
        amount,
    });

    Ok(())
}
