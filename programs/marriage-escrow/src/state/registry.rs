use anchor_lang::prelude::*;
use crate::errors::EscrowError;

#[account]
#[derive(Default)]
pub struct RegistryConfig {
    pub admin: Pubkey,              // 32
    pub couple_count: u64,          // 8  (last id handed out)
    pub resolved_count: u64,        // 8
    pub bump: u8,                   // 1
}

impl RegistryConfig {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 1;

    /// Id the next registration must use. Ids start at 1 and are never reused.
    pub fn next_couple_id(&self) -> Result<u64> {
        self.couple_count.checked_add(1).ok_or_else(|| error!(EscrowError::MathOverflow))
    }

    pub fn record_registration(&mut self, couple_id: u64) -> Result<()> {
        require!(couple_id == self.next_couple_id()?, EscrowError::InvalidCase);
        self.couple_count = couple_id;
        Ok(())
    }

    pub fn record_resolution(&mut self) -> Result<()> {
        self.resolved_count = self.resolved_count.checked_add(1).ok_or(EscrowError::MathOverflow)?;
        Ok(())
    }
}

/// Identity -> open couple index.
/// PDA seeds: ["member", identity]
#[account]
#[derive(Default)]
pub struct Member {
    pub identity: Pubkey,
    pub couple_id: u64,
    pub open: bool,
    pub bump: u8,
}

impl Member {
    pub const LEN: usize = 8 + 32 + 8 + 1 + 1;

    pub fn ensure_free(&self) -> Result<()> {
        require!(!self.open, EscrowError::AlreadyRegistered);
        Ok(())
    }

    pub fn claim(&mut self, identity: Pubkey, couple_id: u64, bump: u8) -> Result<()> {
        self.ensure_free()?;
        self.identity = identity;
        self.couple_id = couple_id;
        self.open = true;
        self.bump = bump;
        Ok(())
    }

    /// Couple this identity currently holds open.
    pub fn open_couple(&self) -> Result<u64> {
        require!(self.open, EscrowError::NotFound);
        Ok(self.couple_id)
    }

    /// Clear the index entry. `couple_id` keeps pointing at the last couple.
    pub fn release(&mut self) {
        self.open = false;
    }
}
