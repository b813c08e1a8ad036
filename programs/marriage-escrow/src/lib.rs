use anchor_lang::prelude::*;

pub mod constants;
pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;

use instructions::*;
use state::Verdict;

declare_id!("H3scL9aTZvRkP9mWDMtmqPNLJW3KRA6qZvqH3cJvs927");

#[program]
pub mod marriage_escrow {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::admin::initialize::process_initialize(ctx)
    }

    pub fn add_juror(ctx: Context<AddJuror>, juror: Pubkey) -> Result<()> {
        instructions::admin::add_juror::process_add_juror(ctx, juror)
    }

    pub fn remove_juror(ctx: Context<RemoveJuror>, juror: Pubkey) -> Result<()> {
        instructions::admin::remove_juror::process_remove_juror(ctx, juror)
    }

    pub fn is_juror(ctx: Context<IsJuror>, juror: Pubkey) -> Result<bool> {
        instructions::admin::views::is_juror(ctx, juror)
    }

    pub fn juror_count(ctx: Context<JurorCount>) -> Result<u32> {
        instructions::admin::views::juror_count(ctx)
    }

    pub fn register_couple(ctx: Context<RegisterCouple>, couple_id: u64, params: RegisterParams) -> Result<u64> {
        instructions::couple::register_couple::process_register_couple(ctx, couple_id, params)
    }

    pub fn counter_deposit(ctx: Context<CounterDeposit>, couple_id: u64, deposit: u64) -> Result<()> {
        instructions::couple::counter_deposit::process_counter_deposit(ctx, couple_id, deposit)
    }

    pub fn refund_deposit(ctx: Context<RefundDeposit>) -> Result<()> {
        instructions::couple::refund_deposit::process_refund_deposit(ctx)
    }

    pub fn submit_dissolution(ctx: Context<SubmitDissolution>, evidence_hash: String) -> Result<()> {
        instructions::couple::submit_dissolution::process_submit_dissolution(ctx, evidence_hash)
    }

    pub fn accept_dissolution(ctx: Context<AcceptDissolution>, couple_id: u64) -> Result<()> {
        instructions::couple::accept_dissolution::process_accept_dissolution(ctx, couple_id)
    }

    pub fn dispute_dissolution(ctx: Context<DisputeDissolution>, couple_id: u64) -> Result<()> {
        instructions::couple::dispute_dissolution::process_dispute_dissolution(ctx, couple_id)
    }

    pub fn conclude_arbitration(ctx: Context<ConcludeArbitration>, couple_id: u64) -> Result<()> {
        instructions::couple::conclude_arbitration::process_conclude_arbitration(ctx, couple_id)
    }

    pub fn close_couple(ctx: Context<CloseCouple>, couple_id: u64) -> Result<()> {
        instructions::couple::close_couple::process_close_couple(ctx, couple_id)
    }

    pub fn cast_vote(ctx: Context<CastVote>, couple_id: u64, choice: Verdict) -> Result<()> {
        instructions::jury::cast_vote::process_cast_vote(ctx, couple_id, choice)
    }

    pub fn get_result(ctx: Context<GetResult>, couple_id: u64) -> Result<Verdict> {
        instructions::jury::get_result::process_get_result(ctx, couple_id)
    }
}
