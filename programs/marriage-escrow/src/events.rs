use anchor_lang::prelude::*;
use crate::state::Verdict;

#[event]
pub struct ProtocolInitialized {
    pub admin: Pubkey,
    pub registry: Pubkey,
    pub jury_panel: Pubkey,
}

#[event]
pub struct CoupleRegistered {
    pub couple_id: u64,
    pub party_a: Pubkey,
    pub counterpart: Pubkey,
    pub deposit: u64,
}

#[event]
pub struct CoupleActivated {
    pub couple_id: u64,
    pub party_b: Pubkey,
    pub deposit: u64,
}

#[event]
pub struct DepositRefunded {
    pub couple_id: u64,
    pub party_a: Pubkey,
    pub amount: u64,
}

#[event]
pub struct CoupleClosed {
    pub couple_id: u64,
    pub party_a: Pubkey,
    pub rent_returned: u64,
}

#[event]
pub struct DissolutionSubmitted {
    pub couple_id: u64,
    pub reporter: Pubkey,
    pub evidence_hash: String,
    pub timestamp: i64,
}

#[event]
pub struct DissolutionAccepted {
    pub couple_id: u64,
    pub reporter: Pubkey,
    pub accepter: Pubkey,
    pub reporter_amount: u64,
    pub accepter_amount: u64,
}

#[event]
pub struct DissolutionDisputed {
    pub couple_id: u64,
    pub disputer: Pubkey,
    pub escalated_by: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VoteCaseOpened {
    pub couple_id: u64,
    pub opened_at: i64,
}

#[event]
pub struct VoteCast {
    pub couple_id: u64,
    pub juror: Pubkey,
    pub choice: Verdict,
    pub votes_for: u64,
    pub votes_against: u64,
}

#[event]
pub struct QuorumReached {
    pub couple_id: u64,
    pub verdict: Verdict,
    pub votes_for: u64,
    pub votes_against: u64,
}

#[event]
pub struct ArbitrationConcluded {
    pub couple_id: u64,
    pub verdict: Verdict,
    pub reporter_amount: u64,
    pub disputer_amount: u64,
}

#[event]
pub struct JurorAdded {
    pub juror: Pubkey,
    pub count: u32,
}

#[event]
pub struct JurorRemoved {
    pub juror: Pubkey,
    pub count: u32,
}
