use anchor_lang::prelude::*;

/// Response structure for a distribution record lookup. Zero-valued when
/// nothing was recorded under the requested identifier.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct DistributionData {
    /// Account that initiated the distribution
    pub sender: Pubkey,
    /// Gross amount distributed
    pub amount: u64,
    /// Timestamp at which the record was created
    pub timestamp: i64,
}
