// ============================================================================
// UNIT TESTS FOR THE TOKEN DISTRIBUTOR PROGRAM
// ============================================================================
//
// Deterministic tests for the core ledger logic. Run with: cargo test --lib
//
// Test Categories:
// 1. Split Math - 90/10 conservation and floor-division behavior
// 2. Confidential Identifiers - passthrough and sentinel derivation
// 3. State Transitions - sender index ordering and the global counter
// ============================================================================

#[allow(unused_imports)]
use crate::{
    constants::{EMPTY_CONFIDENTIAL_ID, MAX_SENDER_DISTRIBUTIONS},
    math::{resolve_confidential_id, split_distribution},
    states::{DistributorConfig, SenderIndex},
};
use anchor_lang::prelude::Pubkey;

// ========================================================================
// 1. SPLIT MATH TESTS
// ========================================================================

mod split_tests {
    use super::*;

    #[test]
    fn test_split_one_token() {
        // 1 token at 9 decimals splits into exact 90% / 10% legs
        let (voice_talent, protocol) = split_distribution(1_000_000_000).unwrap();

        assert_eq!(voice_talent, 900_000_000);
        assert_eq!(protocol, 100_000_000);
    }

    #[test]
    fn test_split_indivisible_amount() {
        // 7 is not a multiple of 10: floor(7 * 90 / 100) = 6, the remaining
        // unit lands on the protocol leg
        let (voice_talent, protocol) = split_distribution(7).unwrap();

        assert_eq!(voice_talent, 6);
        assert_eq!(protocol, 1);
    }

    #[test]
    fn test_split_smallest_unit() {
        // A single base unit floors the voice talent share to zero
        let (voice_talent, protocol) = split_distribution(1).unwrap();

        assert_eq!(voice_talent, 0);
        assert_eq!(protocol, 1);
    }

    #[test]
    fn test_split_conserves_every_amount() {
        for amount in 1..=10_000u64 {
            let (voice_talent, protocol) = split_distribution(amount).unwrap();

            assert_eq!(voice_talent + protocol, amount, "lost units at {}", amount);
            assert_eq!(voice_talent, amount * 9 / 10);
        }
    }

    #[test]
    fn test_split_zero_amount_rejected() {
        assert!(split_distribution(0).is_err());
    }

    #[test]
    fn test_split_max_amount() {
        // The u128 widening keeps the split exact all the way up to u64::MAX
        let (voice_talent, protocol) = split_distribution(u64::MAX).unwrap();

        assert_eq!(voice_talent as u128 + protocol as u128, u64::MAX as u128);
        assert!(voice_talent > protocol);
    }
}

// ========================================================================
// 2. CONFIDENTIAL IDENTIFIER TESTS
// ========================================================================

mod confidential_id_tests {
    use super::*;

    #[test]
    fn test_supplied_id_passes_through() {
        let sender = Pubkey::new_unique();
        let supplied = [7u8; 32];

        assert_eq!(resolve_confidential_id(&supplied, &sender, 0), supplied);
        assert_eq!(resolve_confidential_id(&supplied, &sender, 5), supplied);
    }

    #[test]
    fn test_sentinel_derives_fresh_id() {
        let sender = Pubkey::new_unique();
        let derived = resolve_confidential_id(&EMPTY_CONFIDENTIAL_ID, &sender, 0);

        assert_ne!(derived, EMPTY_CONFIDENTIAL_ID);
    }

    #[test]
    fn test_derived_id_is_deterministic() {
        let sender = Pubkey::new_unique();

        assert_eq!(
            resolve_confidential_id(&EMPTY_CONFIDENTIAL_ID, &sender, 3),
            resolve_confidential_id(&EMPTY_CONFIDENTIAL_ID, &sender, 3),
        );
    }

    #[test]
    fn test_derived_id_varies_with_nonce() {
        // Each sentinel distribution from one sender gets its own id
        let sender = Pubkey::new_unique();
        let first = resolve_confidential_id(&EMPTY_CONFIDENTIAL_ID, &sender, 0);
        let second = resolve_confidential_id(&EMPTY_CONFIDENTIAL_ID, &sender, 1);

        assert_ne!(first, second);
    }

    #[test]
    fn test_derived_id_varies_with_sender() {
        let first = resolve_confidential_id(&EMPTY_CONFIDENTIAL_ID, &Pubkey::new_unique(), 0);
        let second = resolve_confidential_id(&EMPTY_CONFIDENTIAL_ID, &Pubkey::new_unique(), 0);

        assert_ne!(first, second);
    }
}

// ========================================================================
// 3. STATE TRANSITION TESTS
// ========================================================================

mod state_tests {
    use super::*;

    fn empty_index() -> SenderIndex {
        SenderIndex {
            sender: Pubkey::new_unique(),
            distribution_ids: Vec::new(),
            bump: 255,
        }
    }

    #[test]
    fn test_sender_index_preserves_creation_order() {
        let mut index = empty_index();
        let first = [1u8; 32];
        let second = [2u8; 32];
        let third = [3u8; 32];

        index.append(first).unwrap();
        index.append(second).unwrap();
        index.append(third).unwrap();

        assert_eq!(index.distribution_ids, vec![first, second, third]);
        assert_eq!(index.next_nonce(), 3);
    }

    #[test]
    fn test_sender_index_rejects_overflow() {
        let mut index = empty_index();

        for i in 0..MAX_SENDER_DISTRIBUTIONS {
            index.append([i as u8; 32]).unwrap();
        }

        assert!(index.append([255u8; 32]).is_err());
        assert_eq!(index.distribution_ids.len(), MAX_SENDER_DISTRIBUTIONS);
    }

    #[test]
    fn test_counter_increments_by_one() {
        let mut config = DistributorConfig {
            protocol_wallet: Pubkey::new_unique(),
            total_distributions: 0,
            bump: 254,
        };

        config.record_distribution().unwrap();
        config.record_distribution().unwrap();
        config.record_distribution().unwrap();

        assert_eq!(config.total_distributions, 3);
    }

    #[test]
    fn test_counter_overflow_leaves_state_unchanged() {
        let mut config = DistributorConfig {
            protocol_wallet: Pubkey::new_unique(),
            total_distributions: u64::MAX,
            bump: 254,
        };

        assert!(config.record_distribution().is_err());
        assert_eq!(config.total_distributions, u64::MAX);
    }
}
