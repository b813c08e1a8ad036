use anchor_lang::prelude::*;
use crate::constants::MAX_JURORS;
use crate::errors::EscrowError;
use crate::state::VoteCase;

/// Juror whitelist and escalation gate.
/// PDA seeds: ["jury_panel"]
///
/// `jurors` is a dense array; each juror's `JurorSlot` stores its index so
/// removal can swap the last juror into the hole and pop.
#[account]
#[derive(Default)]
pub struct JuryPanel {
    pub admin: Pubkey,                  // 32
    pub escalation_authority: Pubkey,   // 32 (registry config PDA)
    pub jurors: Vec<Pubkey>,            // 4 + 32 * MAX_JURORS
    pub open_cases: u64,                // 8
    pub closed_cases: u64,              // 8
    pub bump: u8,                       // 1
}

impl JuryPanel {
    pub const LEN: usize = 8 + 32 + 32 + (4 + 32 * MAX_JURORS) + 8 + 8 + 1;
}

/// Identity -> whitelist index.
/// PDA seeds: ["juror", juror]
#[account]
#[derive(Default)]
pub struct JurorSlot {
    pub juror: Pubkey,
    pub index: u32,
    pub active: bool,
    pub bump: u8,
}

impl JurorSlot {
    pub const LEN: usize = 8 + 32 + 4 + 1 + 1;
}

impl JuryPanel {
    pub fn count(&self) -> u32 {
        self.jurors.len() as u32
    }

    /// Whether `juror` is whitelisted, given its (possibly missing) slot.
    pub fn contains(&self, slot: Option<&JurorSlot>, juror: &Pubkey) -> bool {
        match slot {
            Some(slot) => {
                slot.active
                    && slot.juror == *juror
                    && self.jurors.get(slot.index as usize) == Some(juror)
            }
            None => false,
        }
    }

    /// Whitelist `juror`. Returns the new count.
    pub fn enroll(&mut self, slot: &mut JurorSlot, juror: Pubkey, bump: u8) -> Result<u32> {
        require!(!slot.active, EscrowError::AlreadyWhitelisted);
        require!(self.jurors.len() < MAX_JURORS, EscrowError::WhitelistFull);

        slot.juror = juror;
        slot.index = self.count();
        slot.active = true;
        slot.bump = bump;
        self.jurors.push(juror);

        Ok(self.count())
    }

    /// Remove the juror behind `slot`. Returns the new count.
    ///
    /// Unless the juror is last, `moved` must be the slot of the last juror;
    /// that juror takes over the freed index.
    pub fn dismiss(&mut self, slot: &mut JurorSlot, moved: Option<&mut JurorSlot>) -> Result<u32> {
        require!(slot.active, EscrowError::NotWhitelisted);
        let index = slot.index as usize;
        require!(self.jurors.get(index) == Some(&slot.juror), EscrowError::WhitelistSlotMismatch);

        let last = self.jurors.len() - 1;
        if index != last {
            let moved = moved.ok_or(EscrowError::WhitelistSlotMismatch)?;
            require!(
                moved.active && moved.index as usize == last && moved.juror == self.jurors[last],
                EscrowError::WhitelistSlotMismatch
            );
            moved.index = slot.index;
        }

        self.jurors.swap_remove(index);
        slot.active = false;
        slot.index = 0;

        Ok(self.count())
    }

    /// Open the vote case for an escalated couple. Only the escalation
    /// authority granted at initialization may do this.
    pub fn open_case(
        &mut self,
        authority: &Pubkey,
        vote_case: &mut VoteCase,
        couple_id: u64,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require_keys_eq!(*authority, self.escalation_authority, EscrowError::Unauthorized);
        vote_case.open(couple_id, now, bump)?;
        self.open_cases = self.open_cases.checked_add(1).ok_or(EscrowError::MathOverflow)?;
        Ok(())
    }

    pub fn record_close(&mut self) -> Result<()> {
        self.open_cases = self.open_cases.saturating_sub(1);
        self.closed_cases = self.closed_cases.checked_add(1).ok_or(EscrowError::MathOverflow)?;
        Ok(())
    }
}
