use crate::constants::{MAJOR_SHARES, MINOR_SHARES};

/// Amounts owed to each side once a couple's pool is released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolSplit {
    pub major: u64,
    pub minor: u64,
}

/// Split `pool` 2:1 between the winning and losing side.
///
/// The minor share is floored and the major share takes the remainder, so
/// any rounding dust goes to the winner and nothing is created or lost.
pub fn split_pool(pool: u64) -> Option<PoolSplit> {
    let total_shares = MAJOR_SHARES.checked_add(MINOR_SHARES)?;

    // u128 so pool * shares cannot overflow for any u64 pool
    let minor = (pool as u128)
        .checked_mul(MINOR_SHARES as u128)?
        .checked_div(total_shares as u128)? as u64;
    let major = pool.checked_sub(minor)?;

    Some(PoolSplit { major, minor })
}

/// Lamports that may leave an account without touching its rent reserve.
pub fn spendable(balance: u64, rent_floor: u64) -> u64 {
    balance.saturating_sub(rent_floor)
}
