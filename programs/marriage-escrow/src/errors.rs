use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Identity already has an open couple")]
    AlreadyRegistered,
    #[msg("Insufficient deposit")]
    InsufficientDeposit,
    #[msg("Counterpart must be a different, non-default address")]
    InvalidCounterpart,
    #[msg("No couple awaiting a counter-deposit under this id")]
    InvalidCase,
    #[msg("No open couple for this identity")]
    NotFound,
    #[msg("Couple is not in the required state")]
    WrongState,
    #[msg("Caller is not a party to this couple")]
    NotParty,
    #[msg("Reporter cannot answer their own dissolution")]
    Forbidden,
    #[msg("Dissolution window has expired")]
    DeadlineExpired,
    #[msg("Evidence hash too long (max 128)")]
    EvidenceTooLong,
    #[msg("Juror is not whitelisted")]
    NotEligible,
    #[msg("No vote case for this couple")]
    NoSuchCase,
    #[msg("Vote case already open")]
    AlreadyOpen,
    #[msg("Juror already voted on this case")]
    AlreadyVoted,
    #[msg("Voting is closed")]
    VotingClosed,
    #[msg("Voting is still open")]
    StillOpen,
    #[msg("Vote case has not reached quorum")]
    NotClosed,
    #[msg("Couple already resolved")]
    AlreadyResolved,
    #[msg("Juror already whitelisted")]
    AlreadyWhitelisted,
    #[msg("Juror not whitelisted")]
    NotWhitelisted,
    #[msg("Whitelist is full")]
    WhitelistFull,
    #[msg("Juror slot does not match whitelist position")]
    WhitelistSlotMismatch,
    #[msg("Only the owner may call this")]
    OwnerOnly,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Lamport transfer failed")]
    TransferFailed,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
