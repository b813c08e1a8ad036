use anchor_lang::prelude::*;
use crate::constants::{DISPUTE_WINDOW, MAX_EVIDENCE_LEN, MIN_DEPOSIT};
use crate::errors::EscrowError;
use crate::state::{Member, Verdict};
use crate::utils::math::split_pool;

/// Escrow between two partners.
/// PDA seeds: ["couple", couple_id]
#[account]
#[derive(Default, Debug)]
pub struct Couple {
    pub couple_id: u64,
    pub party_a: Pubkey,
    pub party_b: Pubkey,            // default until the counter-deposit
    pub counterpart: Pubkey,        // address party_a named at registration
    pub name_hash_a: [u8; 32],
    pub name_hash_b: [u8; 32],
    pub deposit_a: u64,
    pub deposit_b: u64,
    pub status: CoupleStatus,
    pub dispute_start_time: i64,
    pub evidence_hash: String,      // max 128 chars
    pub reporter: Pubkey,
    pub disputer: Pubkey,
    pub verdict: Option<Verdict>,
    pub created_at: i64,
    pub resolved_at: Option<i64>,
    pub bump: u8,
}

impl Couple {
    // 8 (discriminator)
    // 8 (couple_id)
    // 32 * 3 (party_a, party_b, counterpart)
    // 32 * 2 (name hashes)
    // 8 * 2 (deposits) + 1 (status) + 8 (dispute_start_time)
    // 4 + 128 (evidence_hash)
    // 32 * 2 (reporter, disputer)
    // 1 + 1 (verdict option) + 8 (created_at) + 1 + 8 (resolved_at option)
    // 1 (bump)
    pub const LEN: usize = 8 + 8 + 32 * 3 + 32 * 2 + 8 * 2 + 1 + 8 + (4 + MAX_EVIDENCE_LEN) + 32 * 2 + 2 + 8 + 9 + 1;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default, InitSpace)]
pub enum CoupleStatus {
    #[default]
    PendingCounterDeposit,
    Active,
    RefundedA,
    PendingDivorce,
    PendingArbitration,
    Resolved,
}

/// Who registers a couple and who they expect to counter-deposit.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct CoupleTerms {
    pub party_a: Pubkey,
    pub counterpart: Pubkey,
    pub name_hash_a: [u8; 32],
    pub name_hash_b: [u8; 32],
}

/// Lamports owed to the reporter and to the other party when a pool is released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub reporter: u64,
    pub counterparty: u64,
}

impl Payout {
    pub fn total(&self) -> u64 {
        self.reporter.saturating_add(self.counterparty)
    }
}

impl Couple {
    /// Initialise a freshly created couple account. Returns the lamports to collect.
    ///
    /// Only `MIN_DEPOSIT` is ever taken into custody, whatever the caller offers.
    pub fn open(
        &mut self,
        couple_id: u64,
        terms: CoupleTerms,
        creator_index: &Member,
        deposit: u64,
        now: i64,
        bump: u8,
    ) -> Result<u64> {
        creator_index.ensure_free()?;
        require!(deposit >= MIN_DEPOSIT, EscrowError::InsufficientDeposit);
        require!(
            terms.counterpart != terms.party_a && terms.counterpart != Pubkey::default(),
            EscrowError::InvalidCounterpart
        );

        self.couple_id = couple_id;
        self.party_a = terms.party_a;
        self.party_b = Pubkey::default();
        self.counterpart = terms.counterpart;
        self.name_hash_a = terms.name_hash_a;
        self.name_hash_b = terms.name_hash_b;
        self.deposit_a = MIN_DEPOSIT;
        self.deposit_b = 0;
        self.status = CoupleStatus::PendingCounterDeposit;
        self.dispute_start_time = 0;
        self.evidence_hash = String::new();
        self.reporter = Pubkey::default();
        self.disputer = Pubkey::default();
        self.verdict = None;
        self.created_at = now;
        self.resolved_at = None;
        self.bump = bump;

        Ok(MIN_DEPOSIT)
    }

    /// Record the counterpart's deposit and activate the couple.
    pub fn counter_deposit(&mut self, caller: Pubkey, caller_index: &Member, deposit: u64) -> Result<u64> {
        require!(self.status == CoupleStatus::PendingCounterDeposit, EscrowError::InvalidCase);
        require_keys_eq!(caller, self.counterpart, EscrowError::NotParty);
        caller_index.ensure_free()?;
        require!(deposit >= MIN_DEPOSIT, EscrowError::InsufficientDeposit);

        self.party_b = caller;
        self.deposit_b = MIN_DEPOSIT;
        self.status = CoupleStatus::Active;

        Ok(MIN_DEPOSIT)
    }

    /// Hand party A's deposit back before the counterpart has joined.
    pub fn refund(&mut self, caller: Pubkey, now: i64) -> Result<u64> {
        require!(self.is_party(&caller), EscrowError::NotFound);
        require!(self.status == CoupleStatus::PendingCounterDeposit, EscrowError::WrongState);

        let amount = self.deposit_a;
        self.deposit_a = 0;
        self.deposit_b = 0;
        self.status = CoupleStatus::RefundedA;
        self.resolved_at = Some(now);

        Ok(amount)
    }

    pub fn submit_dissolution(&mut self, caller: Pubkey, evidence_hash: String, now: i64) -> Result<()> {
        require!(self.status == CoupleStatus::Active, EscrowError::WrongState);
        require!(self.is_party(&caller), EscrowError::NotParty);
        require!(evidence_hash.len() <= MAX_EVIDENCE_LEN, EscrowError::EvidenceTooLong);

        self.reporter = caller;
        self.evidence_hash = evidence_hash;
        self.dispute_start_time = now;
        self.status = CoupleStatus::PendingDivorce;

        Ok(())
    }

    /// The non-reporting party agrees to the dissolution inside the window.
    /// The reporter takes the major share.
    pub fn accept_dissolution(&mut self, caller: Pubkey, now: i64) -> Result<Payout> {
        self.ensure_answerable(&caller)?;
        require!(caller != self.reporter, EscrowError::Forbidden);
        require!(!self.window_expired(now), EscrowError::DeadlineExpired);

        let payout = self.release_pool(Verdict::For)?;
        self.status = CoupleStatus::Resolved;
        self.resolved_at = Some(now);

        Ok(payout)
    }

    /// Escalate a pending dissolution to the jury. Returns the disputer.
    ///
    /// The non-reporting party may dispute at any time. Once the window has
    /// expired the reporter may escalate too, and the silent counterpart is
    /// recorded as disputer. Reporter escalation after expiry is deliberate
    /// policy: an unanswered dissolution goes to the jury instead of stalling.
    pub fn dispute_dissolution(&mut self, caller: Pubkey, now: i64) -> Result<Pubkey> {
        self.ensure_answerable(&caller)?;
        if caller == self.reporter {
            require!(self.window_expired(now), EscrowError::Forbidden);
        }

        let disputer = self.other_party(&self.reporter).ok_or(EscrowError::NotParty)?;
        self.disputer = disputer;
        self.status = CoupleStatus::PendingArbitration;

        Ok(disputer)
    }

    /// Settle an escalated couple from the jury's verdict (`None` while voting is open).
    pub fn conclude(&mut self, verdict: Option<Verdict>, now: i64) -> Result<Payout> {
        require!(self.status != CoupleStatus::Resolved, EscrowError::AlreadyResolved);
        require!(self.status == CoupleStatus::PendingArbitration, EscrowError::WrongState);
        let verdict = verdict.ok_or(EscrowError::NotClosed)?;

        let payout = self.release_pool(verdict)?;
        self.verdict = Some(verdict);
        self.status = CoupleStatus::Resolved;
        self.resolved_at = Some(now);

        Ok(payout)
    }

    /// A couple account may be closed once its pool has been paid out.
    pub fn ensure_closable(&self) -> Result<()> {
        require!(
            matches!(self.status, CoupleStatus::Resolved | CoupleStatus::RefundedA),
            EscrowError::WrongState
        );
        require!(self.custody() == 0, EscrowError::WrongState);
        Ok(())
    }

    /// Lamports currently held for the partners.
    pub fn custody(&self) -> u64 {
        self.deposit_a.saturating_add(self.deposit_b)
    }

    pub fn is_party(&self, who: &Pubkey) -> bool {
        *who == self.party_a || (self.party_b != Pubkey::default() && *who == self.party_b)
    }

    pub fn other_party(&self, who: &Pubkey) -> Option<Pubkey> {
        if self.party_b == Pubkey::default() {
            None
        } else if *who == self.party_a {
            Some(self.party_b)
        } else if *who == self.party_b {
            Some(self.party_a)
        } else {
            None
        }
    }

    pub fn window_expired(&self, now: i64) -> bool {
        now.saturating_sub(self.dispute_start_time) >= DISPUTE_WINDOW
    }

    fn ensure_answerable(&self, caller: &Pubkey) -> Result<()> {
        require!(self.status == CoupleStatus::PendingDivorce, EscrowError::WrongState);
        require!(self.is_party(caller), EscrowError::NotParty);
        Ok(())
    }

    // Zeroes both deposits; callers must set the terminal status in the same step.
    fn release_pool(&mut self, verdict: Verdict) -> Result<Payout> {
        let pool = self.deposit_a.checked_add(self.deposit_b).ok_or(EscrowError::MathOverflow)?;
        let split = split_pool(pool).ok_or(EscrowError::MathOverflow)?;

        self.deposit_a = 0;
        self.deposit_b = 0;

        Ok(match verdict {
            Verdict::For => Payout { reporter: split.major, counterparty: split.minor },
            Verdict::Against => Payout { reporter: split.minor, counterparty: split.major },
        })
    }
}

/// Couple the caller holds open, given its (possibly missing) member index
/// and couple accounts. Every missing or stale link is `NotFound`.
pub fn held_couple<'a>(member: Option<&Member>, couple: Option<&'a mut Couple>) -> Result<&'a mut Couple> {
    let couple_id = member.ok_or(EscrowError::NotFound)?.open_couple()?;
    let couple = couple.ok_or(EscrowError::NotFound)?;
    require!(couple.couple_id == couple_id, EscrowError::NotFound);
    Ok(couple)
}
