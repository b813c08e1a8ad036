use solana_native_token::LAMPORTS_PER_SOL;

/// Deposit each partner locks into the couple account (5 SOL).
pub const MIN_DEPOSIT: u64 = 5 * LAMPORTS_PER_SOL;

/// Seconds the counterpart has to accept a dissolution (7 days).
pub const DISPUTE_WINDOW: i64 = 7 * 24 * 60 * 60;

/// Jurors needed to close a vote case.
pub const QUORUM: usize = 3;

pub const MAX_JURORS: usize = 64;
pub const MAX_EVIDENCE_LEN: usize = 128;

// Payout split between the winning and losing side of a dissolution
pub const MAJOR_SHARES: u64 = 2;
pub const MINOR_SHARES: u64 = 1;

pub const REGISTRY_SEED: &[u8] = b"registry";
pub const JURY_PANEL_SEED: &[u8] = b"jury_panel";
pub const COUPLE_SEED: &[u8] = b"couple";
pub const MEMBER_SEED: &[u8] = b"member";
pub const JUROR_SEED: &[u8] = b"juror";
pub const VOTE_CASE_SEED: &[u8] = b"vote_case";
