//! Property-based tests for the escrow and tally state machines
//!
//! Tests for:
//! - Payout split: conservation of the pool, 2:1 ordering
//! - Vote case: quorum fires once, late votes rejected, per-case de-duplication
//! - Couple: accept and dispute are mutually exclusive

use super::*;
use crate::constants::{DISPUTE_WINDOW, MIN_DEPOSIT, QUORUM};
use crate::errors::EscrowError;
use crate::utils::math::split_pool;
use anchor_lang::prelude::Pubkey;
use proptest::prelude::*;

fn err(e: EscrowError) -> anchor_lang::error::Error {
    e.into()
}

fn verdict(for_side: bool) -> Verdict {
    if for_side {
        Verdict::For
    } else {
        Verdict::Against
    }
}

fn free_member() -> Member {
    Member::default()
}

fn divorcing(a: Pubkey, b: Pubkey, start: i64) -> Couple {
    let mut couple = Couple::default();
    let terms = CoupleTerms { party_a: a, counterpart: b, name_hash_a: [0; 32], name_hash_b: [0; 32] };
    couple.open(1, terms, &free_member(), MIN_DEPOSIT, start, 255).unwrap();
    couple.counter_deposit(b, &free_member(), MIN_DEPOSIT).unwrap();
    couple.submit_dissolution(a, "QmEvidence".to_string(), start).unwrap();
    couple
}

// ============================================================================
// PAYOUT PROPERTY TESTS
// ============================================================================

proptest! {
    /// Property: Split conserves value
    /// For any pool, the two shares sum to the pool and the major share is
    /// at least twice the minor share.
    #[test]
    fn split_conserves_pool(pool in any::<u64>()) {
        let split = split_pool(pool).unwrap();
        prop_assert_eq!(split.major as u128 + split.minor as u128, pool as u128);
        prop_assert!(split.major as u128 >= 2 * split.minor as u128);
        prop_assert!(split.major - 2 * split.minor <= 2, "Dust is at most the division remainder");
    }

    /// Property: Deposits below the minimum are never taken
    #[test]
    fn short_deposits_rejected(deposit in 0..MIN_DEPOSIT) {
        let mut couple = Couple::default();
        let terms = CoupleTerms {
            party_a: Pubkey::new_unique(),
            counterpart: Pubkey::new_unique(),
            name_hash_a: [0; 32],
            name_hash_b: [0; 32],
        };
        let res = couple.open(1, terms, &free_member(), deposit, 0, 255);
        prop_assert_eq!(res.unwrap_err(), err(EscrowError::InsufficientDeposit));
        prop_assert_eq!(couple.custody(), 0);
    }

    /// Property: Custody is always exactly the minimum, whatever is offered
    #[test]
    fn custody_is_exact(deposit in MIN_DEPOSIT..u64::MAX) {
        let mut couple = Couple::default();
        let terms = CoupleTerms {
            party_a: Pubkey::new_unique(),
            counterpart: Pubkey::new_unique(),
            name_hash_a: [0; 32],
            name_hash_b: [0; 32],
        };
        let taken = couple.open(1, terms, &free_member(), deposit, 0, 255).unwrap();
        prop_assert_eq!(taken, MIN_DEPOSIT);
        prop_assert_eq!(couple.custody(), MIN_DEPOSIT);
    }
}

// ============================================================================
// COUPLE STATE MACHINE PROPERTY TESTS
// ============================================================================

proptest! {
    /// Property: Accept and dispute are mutually exclusive
    /// Whichever answer succeeds first, the other fails with WrongState and no
    /// value moves twice.
    #[test]
    fn accept_dispute_exclusive(
        elapsed in 0..(2 * DISPUTE_WINDOW),
        accept_first in any::<bool>(),
    ) {
        let (a, b) = (Pubkey::new_unique(), Pubkey::new_unique());
        let start = 1_700_000_000;
        let now = start + elapsed;
        let mut couple = divorcing(a, b, start);

        if accept_first {
            match couple.accept_dissolution(b, now) {
                Ok(payout) => {
                    prop_assert!(elapsed < DISPUTE_WINDOW);
                    prop_assert_eq!(payout.total(), 2 * MIN_DEPOSIT);
                    prop_assert_eq!(couple.dispute_dissolution(b, now).unwrap_err(), err(EscrowError::WrongState));
                }
                Err(e) => {
                    prop_assert!(elapsed >= DISPUTE_WINDOW);
                    prop_assert_eq!(e, err(EscrowError::DeadlineExpired));
                    prop_assert_eq!(couple.dispute_dissolution(b, now).unwrap(), b);
                }
            }
        } else {
            prop_assert_eq!(couple.dispute_dissolution(b, now).unwrap(), b);
            prop_assert_eq!(couple.accept_dissolution(b, now).unwrap_err(), err(EscrowError::WrongState));
        }
    }

    /// Property: Conclusion pays out the pool exactly once
    #[test]
    fn conclusion_conserves_and_is_final(for_side in any::<bool>()) {
        let (a, b) = (Pubkey::new_unique(), Pubkey::new_unique());
        let mut couple = divorcing(a, b, 0);
        couple.dispute_dissolution(b, 1).unwrap();

        let pool = couple.custody();
        let payout = couple.conclude(Some(verdict(for_side)), 2).unwrap();
        prop_assert_eq!(payout.total(), pool);
        prop_assert_eq!(payout.reporter > payout.counterparty, for_side);
        prop_assert_eq!(
            couple.conclude(Some(verdict(for_side)), 3).unwrap_err(),
            err(EscrowError::AlreadyResolved)
        );
    }
}

// ============================================================================
// VOTE CASE PROPERTY TESTS
// ============================================================================

proptest! {
    /// Property: Quorum fires exactly once, in any vote order
    #[test]
    fn quorum_fires_once(choices in prop::collection::vec(any::<bool>(), QUORUM + 1..QUORUM + 6)) {
        let mut case = VoteCase::default();
        case.open(1, 0, 255).unwrap();

        let mut closes = 0;
        for (i, choice) in choices.iter().enumerate() {
            let res = case.record_vote(Pubkey::new_unique(), verdict(*choice), i as i64);
            if i < QUORUM {
                if res.unwrap().is_some() {
                    closes += 1;
                    prop_assert_eq!(i + 1, QUORUM);
                }
            } else {
                prop_assert_eq!(res.unwrap_err(), err(EscrowError::VotingClosed));
            }
        }

        prop_assert_eq!(closes, 1);
        let for_votes = choices[..QUORUM].iter().filter(|c| **c).count() as u64;
        prop_assert_eq!(case.votes_for, for_votes);
        prop_assert_eq!(case.votes_for + case.votes_against, QUORUM as u64);
        prop_assert_eq!(case.result().unwrap(), majority(for_votes, QUORUM as u64 - for_votes));
    }

    /// Property: De-duplication is per case
    /// A juror's repeat vote on a case fails; their first vote on another succeeds.
    #[test]
    fn dedup_is_per_case(first in any::<bool>(), second in any::<bool>()) {
        let juror = Pubkey::new_unique();
        let mut one = VoteCase::default();
        let mut two = VoteCase::default();
        one.open(1, 0, 255).unwrap();
        two.open(2, 0, 255).unwrap();

        one.record_vote(juror, verdict(first), 1).unwrap();
        prop_assert_eq!(one.record_vote(juror, verdict(second), 2).unwrap_err(), err(EscrowError::AlreadyVoted));
        prop_assert!(two.record_vote(juror, verdict(second), 3).is_ok());
        prop_assert_eq!(one.voter_count, 1);
    }
}
