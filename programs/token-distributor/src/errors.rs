use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Distribution amount must be greater than zero")]
    InvalidAmount,
    #[msg("Voice talent address cannot be the zero address")]
    InvalidVoiceTalentAddress,
    #[msg("Protocol wallet does not match the configured address")]
    InvalidProtocolWallet,
    #[msg("Insufficient token account balance for distribution")]
    InsufficientTokenBalance,
    #[msg("Access denied")]
    AccessDenied,
    #[msg("Account is not the distribution record for this confidential id")]
    InvalidDistributionRecord,
    #[msg("Account is not the caller's distribution index")]
    InvalidSenderIndex,
    #[msg("Sender distribution index is full")]
    SenderIndexFull,
    #[msg("Math overflow occurred during calculation")]
    MathOverflow,
}
