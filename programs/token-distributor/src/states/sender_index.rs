use anchor_lang::prelude::*;
use crate::constants::MAX_SENDER_DISTRIBUTIONS;
use crate::errors::ErrorCode;

/// Per-sender list of confidential identifiers, in creation order
#[account]
#[derive(InitSpace)]
pub struct SenderIndex {
    /// The sender this index belongs to
    pub sender: Pubkey,
    /// Identifier of every distribution this sender has recorded
    #[max_len(MAX_SENDER_DISTRIBUTIONS)]
    pub distribution_ids: Vec<[u8; 32]>,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl SenderIndex {
    /// Derivation nonce for the next sentinel (absent) confidential id
    pub fn next_nonce(&self) -> u64 {
        self.distribution_ids.len() as u64
    }

    /// Appends a confidential id, preserving creation order
    pub fn append(&mut self, confidential_id: [u8; 32]) -> Result<()> {
        require!(
            self.distribution_ids.len() < MAX_SENDER_DISTRIBUTIONS,
            ErrorCode::SenderIndexFull
        );

        self.distribution_ids.push(confidential_id);

        Ok(())
    }
}
