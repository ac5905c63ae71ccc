//! Structural superblock height classification.

use crate::params::ConsensusParams;

/// Whether a height can carry a superblock at all.
///
/// This only looks at the superblock start/cycle parameters; whether a
/// superblock is actually triggered is decided by governance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlockRewardClassification {
    RegularBlock,
    SuperblockHeight,
}

pub fn classify_block_reward(height: i32, params: &ConsensusParams) -> BlockRewardClassification {
    if is_valid_superblock_height(height, params) {
        BlockRewardClassification::SuperblockHeight
    } else {
        BlockRewardClassification::RegularBlock
    }
}

pub fn is_valid_superblock_height(height: i32, params: &ConsensusParams) -> bool {
    params.superblock_cycle > 0
        && height >= params.superblock_start_height
        && height % params.superblock_cycle == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{consensus_params, Network, NEVER32};

    #[test]
    fn regtest_superblocks_follow_cycle() {
        let params = consensus_params(Network::Regtest);
        assert!(!is_valid_superblock_height(1_490, &params));
        assert!(is_valid_superblock_height(1_500, &params));
        assert!(!is_valid_superblock_height(1_505, &params));
        assert_eq!(
            classify_block_reward(1_510, &params),
            BlockRewardClassification::SuperblockHeight
        );
        assert_eq!(
            classify_block_reward(1_511, &params),
            BlockRewardClassification::RegularBlock
        );
    }

    #[test]
    fn mainnet_superblocks_follow_placeholder_cycle() {
        let params = consensus_params(Network::Mainnet);
        assert_eq!(params.superblock_start_height, NEVER32);
        assert_eq!(params.superblock_cycle, NEVER32);
        for height in [400_000, 800_000, 1_200_000] {
            assert!(is_valid_superblock_height(height, &params), "{height}");
        }
        for height in [0, 201, 16_616, 399_999, 400_001, 1_000_000] {
            assert!(!is_valid_superblock_height(height, &params), "{height}");
        }
        assert_eq!(
            classify_block_reward(800_000, &params),
            BlockRewardClassification::SuperblockHeight
        );
    }

    #[test]
    fn zero_cycle_disables_superblocks() {
        let mut params = consensus_params(Network::Testnet);
        params.superblock_cycle = 0;
        assert!(!is_valid_superblock_height(120, &params));
    }
}
