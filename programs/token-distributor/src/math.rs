use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::constants::{
    BPS_DENOMINATOR, CONFIDENTIAL_ID_TAG, EMPTY_CONFIDENTIAL_ID, VOICE_TALENT_SHARE_BPS,
};
use crate::errors::ErrorCode;

/// Split a gross amount into (voice_talent_amount, protocol_amount).
/// The voice talent share is floor(amount * 9000 / 10000); the integer
/// remainder stays on the protocol leg, so the two legs always sum back
/// to the gross amount exactly.
pub fn split_distribution(amount: u64) -> Result<(u64, u64)> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let voice_talent_amount = (amount as u128)
        .checked_mul(VOICE_TALENT_SHARE_BPS as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(ErrorCode::MathOverflow)? as u64;

    let protocol_amount = amount
        .checked_sub(voice_talent_amount)
        .ok_or(ErrorCode::MathOverflow)?;

    Ok((voice_talent_amount, protocol_amount))
}

/// Resolve the confidential identifier a new distribution record is stored
/// under. A caller-supplied nonzero id is used verbatim; the all-zero
/// sentinel derives a fresh id from the sender and their distribution nonce,
/// so repeated no-id distributions never collide. The nonce is the sender's
/// current index length, which makes the derived id client-computable.
pub fn resolve_confidential_id(supplied: &[u8; 32], sender: &Pubkey, nonce: u64) -> [u8; 32] {
    if *supplied != EMPTY_CONFIDENTIAL_ID {
        return *supplied;
    }

    keccak::hashv(&[CONFIDENTIAL_ID_TAG, sender.as_ref(), &nonce.to_le_bytes()]).to_bytes()
}
