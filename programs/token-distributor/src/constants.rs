// PDA Seeds
pub const DISTRIBUTOR_CONFIG_SEED: &[u8] = b"distributor_config";
pub const DISTRIBUTION_RECORD_SEED: &[u8] = b"distribution_record";
pub const SENDER_INDEX_SEED: &[u8] = b"sender_index";

// Distribution split
pub const VOICE_TALENT_SHARE_BPS: u64 = 9_000; // 90%
pub const BPS_DENOMINATOR: u64 = 10_000;

// Confidential identifiers
pub const EMPTY_CONFIDENTIAL_ID: [u8; 32] = [0u8; 32];
pub const CONFIDENTIAL_ID_TAG: &[u8] = b"confidential_id";

// Capacity limits
pub const MAX_SENDER_DISTRIBUTIONS: usize = 30; // id list must fit in the 1024-byte return data
