use anchor_lang::prelude::*;

/// Confidential receipt for a single distribution, keyed by its
/// confidential identifier. Written once at creation and never mutated
/// or closed afterwards.
#[account]
#[derive(InitSpace)]
pub struct DistributionRecord {
    /// Account that initiated the distribution
    pub sender: Pubkey,
    /// Gross amount distributed (before the 90/10 split)
    pub amount: u64,
    /// Timestamp at which the record was created
    pub timestamp: i64,
    /// Bump seed for the PDA
    pub bump: u8,
}
