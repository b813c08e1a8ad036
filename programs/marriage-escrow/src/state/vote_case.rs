use anchor_lang::prelude::*;
use crate::constants::QUORUM;
use crate::errors::EscrowError;

/// Jury ballot on a disputed couple.
/// PDA seeds: ["vote_case", couple_id]
#[account]
#[derive(Default)]
pub struct VoteCase {
    pub couple_id: u64,
    pub opened: bool,
    pub votes_for: u64,
    pub votes_against: u64,
    pub voters: [Pubkey; QUORUM],   // de-duplication only
    pub voter_count: u8,
    pub voting_open: bool,
    pub verdict: Option<Verdict>,   // frozen once quorum is reached
    pub opened_at: i64,
    pub closed_at: Option<i64>,
    pub bump: u8,
}

impl VoteCase {
    pub const LEN: usize = 8 + 8 + 1 + 8 + 8 + 32 * QUORUM + 1 + 1 + 2 + 8 + 9 + 1;
}

/// A juror's choice, and the frozen majority of a closed case.
/// `For` sides with the party who reported the dissolution.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum Verdict {
    For,
    Against,
}

/// Majority of a closed tally. `For` wins ties.
pub fn majority(votes_for: u64, votes_against: u64) -> Verdict {
    if votes_for >= votes_against {
        Verdict::For
    } else {
        Verdict::Against
    }
}

impl VoteCase {
    pub fn open(&mut self, couple_id: u64, now: i64, bump: u8) -> Result<()> {
        require!(!self.opened, EscrowError::AlreadyOpen);

        self.couple_id = couple_id;
        self.opened = true;
        self.votes_for = 0;
        self.votes_against = 0;
        self.voters = [Pubkey::default(); QUORUM];
        self.voter_count = 0;
        self.voting_open = true;
        self.verdict = None;
        self.opened_at = now;
        self.closed_at = None;
        self.bump = bump;

        Ok(())
    }

    /// Count one juror's vote. Returns the verdict if this vote reached quorum.
    ///
    /// Eligibility is the panel's concern; the caller checks the whitelist first.
    pub fn record_vote(&mut self, juror: Pubkey, choice: Verdict, now: i64) -> Result<Option<Verdict>> {
        require!(self.opened, EscrowError::NoSuchCase);
        require!(self.voting_open, EscrowError::VotingClosed);
        require!(!self.has_voted(&juror), EscrowError::AlreadyVoted);

        let slot = self.voter_count as usize;
        // voting closes at QUORUM, so a free slot always exists here
        require!(slot < QUORUM, EscrowError::VotingClosed);

        match choice {
            Verdict::For => {
                self.votes_for = self.votes_for.checked_add(1).ok_or(EscrowError::MathOverflow)?;
            }
            Verdict::Against => {
                self.votes_against = self.votes_against.checked_add(1).ok_or(EscrowError::MathOverflow)?;
            }
        }
        self.voters[slot] = juror;
        self.voter_count += 1;

        if self.voter_count as usize == QUORUM {
            let verdict = majority(self.votes_for, self.votes_against);
            self.voting_open = false;
            self.verdict = Some(verdict);
            self.closed_at = Some(now);
            return Ok(Some(verdict));
        }

        Ok(None)
    }

    pub fn has_voted(&self, juror: &Pubkey) -> bool {
        self.voters[..self.voter_count as usize].contains(juror)
    }

    /// Frozen majority. Fails while voting is open.
    pub fn result(&self) -> Result<Verdict> {
        require!(self.opened, EscrowError::NoSuchCase);
        require!(!self.voting_open, EscrowError::StillOpen);
        self.verdict.ok_or_else(|| error!(EscrowError::StillOpen))
    }

    /// Verdict if closed, `None` while jurors are still voting.
    pub fn closed_verdict(&self) -> Option<Verdict> {
        if self.voting_open {
            None
        } else {
            self.verdict
        }
    }
}
