//! Lamport movement in and out of a couple account.
//!
//! Every handler that releases funds calls [`disburse`] as its last step. A
//! failure here returns `TransferFailed` and the runtime discards the whole
//! transaction, state transition included.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use crate::errors::EscrowError;
use crate::utils::math::spendable;

/// Pull `amount` lamports from a signer into the couple PDA.
pub fn collect<'info>(
    system_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(system_program, Transfer { from, to: vault }),
        amount,
    )
}

/// Move `amount` lamports out of the program-owned `vault` into `to`.
///
/// The vault keeps its rent-exempt reserve; asking for more than the surplus
/// fails instead of draining the account.
pub fn disburse<'info>(vault: &AccountInfo<'info>, to: &AccountInfo<'info>, amount: u64) -> Result<()> {
    let rent_floor = Rent::get()?.minimum_balance(vault.data_len());
    debit(vault, to, amount, rent_floor)
}

/// Pay both sides of a released pool from the same vault.
pub fn disburse_pair<'info>(
    vault: &AccountInfo<'info>,
    first: (&AccountInfo<'info>, u64),
    second: (&AccountInfo<'info>, u64),
) -> Result<()> {
    let rent_floor = Rent::get()?.minimum_balance(vault.data_len());
    debit_pair(vault, first, second, rent_floor)
}

/// Lamport movement behind [`disburse`], with the vault's rent floor given.
pub fn debit<'info>(
    vault: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
    rent_floor: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    require!(spendable(vault.lamports(), rent_floor) >= amount, EscrowError::TransferFailed);

    let vault_after = vault.lamports().checked_sub(amount).ok_or(EscrowError::TransferFailed)?;
    let to_after = to.lamports().checked_add(amount).ok_or(EscrowError::TransferFailed)?;

    **vault.try_borrow_mut_lamports()? = vault_after;
    **to.try_borrow_mut_lamports()? = to_after;

    Ok(())
}

pub fn debit_pair<'info>(
    vault: &AccountInfo<'info>,
    first: (&AccountInfo<'info>, u64),
    second: (&AccountInfo<'info>, u64),
    rent_floor: u64,
) -> Result<()> {
    debit(vault, first.0, first.1, rent_floor)?;
    debit(vault, second.0, second.1, rent_floor)
}
