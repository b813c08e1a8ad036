use anchor_lang::prelude::*;
use crate::constants::COUPLE_SEED;
use crate::state::Couple;
use crate::events::CoupleClosed;
use crate::errors::EscrowError;

#[derive(Accounts)]
#[instruction(couple_id: u64)]
pub struct CloseCouple<'info> {
    #[account(
        mut,
        seeds = [COUPLE_SEED, couple_id.to_le_bytes().as_ref()],
        bump = couple.bump,
        close = party_a
    )]
    pub couple: Account<'info, Couple>,

    /// CHECK: Paid the couple's rent at registration; validated against the couple
    #[account(mut, constraint = party_a.key() == couple.party_a @ EscrowError::NotParty)]
    pub party_a: AccountInfo<'info>,

    /// Anyone may reclaim rent from a settled couple
    pub caller: Signer<'info>,
}

pub fn process_close_couple(ctx: Context<CloseCouple>, couple_id: u64) -> Result<()> {
    let couple = &ctx.accounts.couple;
    couple.ensure_closable()?;

    let rent_returned = couple.to_account_info().lamports();
    msg!("Couple {} closed, rent reclaimed", couple_id);

    emit!(CoupleClosed {
        couple_id,
        party_a: couple.party_a,
        rent_returned,
    });

    Ok(())
}
