use anchor_lang::prelude::*;
use crate::constants::{COUPLE_SEED, MEMBER_SEED, REGISTRY_SEED};
use crate::state::{Couple, CoupleTerms, Member, RegistryConfig};
use crate::events::CoupleRegistered;
use crate::errors::EscrowError;
use crate::utils::funds;

#[derive(Accounts)]
#[instruction(couple_id: u64)] // client reads registry.couple_count + 1 to derive the couple PDA
pub struct RegisterCouple<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, RegistryConfig>,

    #[account(
        init,
        seeds = [COUPLE_SEED, couple_id.to_le_bytes().as_ref()],
        bump,
        payer = user,
        space = Couple::LEN
    )]
    pub couple: Account<'info, Couple>,

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

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct RegisterParams {
    pub counterpart: Pubkey,
    pub name_hash: [u8; 32],
    pub counterpart_name_hash: [u8; 32],
    pub deposit: u64,
}

pub fn process_register_couple(
    ctx: Context<RegisterCouple>,
    couple_id: u64,
    params: RegisterParams,
) -> Result<u64> {
    let registry = &mut ctx.accounts.registry;
    let user = ctx.accounts.user.key();
    let clock = Clock::get()?;

    require!(couple_id == registry.next_couple_id()?, EscrowError::InvalidCase);

    let terms = CoupleTerms {
        party_a: user,
        counterpart: params.counterpart,
        name_hash_a: params.name_hash,
        name_hash_b: params.counterpart_name_hash,
    };
    let custody = ctx.accounts.couple.open(
        couple_id,
        terms,
        &ctx.accounts.member,
        params.deposit,
        clock.unix_timestamp,
        ctx.bumps.couple,
    )?;
    ctx.accounts.member.claim(user, couple_id, ctx.bumps.member)?;
    registry.record_registration(couple_id)?;

    funds::collect(
        ctx.accounts.system_program.to_account_info(),
        ctx.accounts.user.to_account_info(),
        ctx.accounts.couple.to_account_info(),
        custody,
    )?;

    emit!(CoupleRegistered {
        couple_id,
        party_a: user,
        counterpart: params.counterpart,
        deposit: custody,
    });

    Ok(couple_id)
}
