//! Consensus parameters, money units and static payment tables.

pub mod generation;
pub mod money;
pub mod params;
pub mod spork;
pub mod superblock;

pub type Hash256 = [u8; 32];

pub use generation::{
    is_generation_recipient, GenerationGrant, GenerationTable, GenerationTableError,
    GENERATION_RECIPIENT_KEY_HASH, GENERATION_RECIPIENT_KEY_ID,
};
pub use money::{format_money, money_range, Amount, COIN, MAX_MONEY};
pub use params::{chain_params, consensus_params, ChainParams, ConsensusParams, Network};
pub use spork::SporkId;
pub use superblock::{classify_block_reward, is_valid_superblock_height, BlockRewardClassification};
