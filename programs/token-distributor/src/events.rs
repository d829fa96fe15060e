use anchor_lang::prelude::*;

/// Event emitted when the distributor configuration is created
#[event]
pub struct DistributorInitialized {
    /// The distributor config PDA
    pub config: Pubkey,
    /// Wallet receiving the protocol share of every distribution
    pub protocol_wallet: Pubkey,
    /// Timestamp of initialization
    pub timestamp: i64,
}

/// Event emitted once per successful distribution
#[event]
pub struct TokensDistributed {
    /// Account that initiated the distribution
    pub sender: Pubkey,
    /// Voice talent wallet receiving the 90% share
    pub voice_talent: Pubkey,
    /// Token mint that was distributed (default pubkey for native SOL)
    pub token_mint: Pubkey,
    /// Gross amount distributed
    pub amount: u64,
    /// Amount transferred to the voice talent
    pub voice_talent_amount: u64,
    /// Amount transferred to the protocol wallet
    pub protocol_amount: u64,
    /// Confidential identifier the record was stored under
    pub confidential_id: [u8; 32],
    /// Timestamp of distribution
    pub timestamp: i64,
}
