use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Global distributor configuration, created once at deployment
#[account]
#[derive(InitSpace)]
pub struct DistributorConfig {
    /// Wallet receiving the 10% protocol share of every distribution.
    /// Fixed at initialization; never updated afterwards.
    pub protocol_wallet: Pubkey,
    /// Total number of distributions ever performed
    pub total_distributions: u64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl DistributorConfig {
    /// Counts one successful distribution
    pub fn record_distribution(&mut self) -> Result<()> {
        self.total_distributions = self
            .total_distributions
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(())
    }
}
