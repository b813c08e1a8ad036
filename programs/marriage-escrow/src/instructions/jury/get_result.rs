use anchor_lang::prelude::*;
use crate::constants::VOTE_CASE_SEED;
use crate::state::{Verdict, VoteCase};
use crate::errors::EscrowError;

#[derive(Accounts)]
#[instruction(couple_id: u64)]
pub struct GetResult<'info> {
    /// Absent until the couple is escalated
    #[account(
        seeds = [VOTE_CASE_SEED, couple_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub vote_case: Option<Account<'info, VoteCase>>,
}

pub fn process_get_result(ctx: Context<GetResult>, _couple_id: u64) -> Result<Verdict> {
    let vote_case = ctx.accounts.vote_case.as_ref().ok_or(EscrowError::NoSuchCase)?;
    vote_case.result()
}
