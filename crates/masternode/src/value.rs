//! Block value bounds.

use lokald_consensus::{classify_block_reward, Amount, BlockRewardClassification, SporkId};
use lokald_log::Category;
use lokald_primitives::Block;

use crate::error::{PaymentsError, RewardContext};
use crate::payments::{MasternodePayments, PaymentPolicy, SuperblockState};

impl MasternodePayments<'_> {
    /// Checks the value created by `block` at `height`.
    ///
    /// Generation heights are always valid. Everywhere else the block may not
    /// pay more than `expected_reward`, unless a triggered superblock makes the
    /// governance payments part of the block value, in which case the
    /// superblock ceiling applies and the governance system checks the payees.
    pub fn is_block_value_valid(
        &self,
        block: &Block,
        height: i32,
        expected_reward: Amount,
        actual_reward: Amount,
    ) -> Result<(), PaymentsError> {
        let state = match self.payment_policy(height) {
            PaymentPolicy::Generation { .. } => return Ok(()),
            PaymentPolicy::Standard(state) => state,
        };

        let reward_met = actual_reward <= expected_reward;
        lokald_log::log_print!(
            Category::MnPayments,
            "is_block_value_valid: actual_reward {} <= expected_reward {}",
            actual_reward,
            expected_reward
        );

        let superblock_max = expected_reward
            .saturating_add(self.governance.superblock_payments_limit(height));
        lokald_log::log_print!(
            Category::Gobject,
            "is_block_value_valid: actual_reward {} <= superblock_max {}",
            actual_reward,
            superblock_max
        );

        let reward_bound = |context| {
            if reward_met {
                Ok(())
            } else {
                Err(PaymentsError::ExceededBlockReward {
                    height,
                    actual: actual_reward,
                    limit: expected_reward,
                    context,
                })
            }
        };

        if classify_block_reward(height, &self.params.consensus)
            == BlockRewardClassification::RegularBlock
        {
            return reward_bound(RewardContext::RegularHeight);
        }

        if actual_reward > superblock_max {
            return Err(PaymentsError::ExceededSuperblockLimit {
                height,
                actual: actual_reward,
                limit: superblock_max,
            });
        }

        match state {
            SuperblockState::Disabled => {
                lokald_log::log_print!(
                    Category::Gobject,
                    "is_block_value_valid: {} is off, no superblocks allowed",
                    SporkId::SuperblocksEnabled.name()
                );
                reward_bound(RewardContext::SuperblocksDisabled)
            }
            SuperblockState::NotTriggered => reward_bound(RewardContext::NotTriggered),
            SuperblockState::Triggered => {
                let valid = block.payment_transaction().is_some_and(|tx| {
                    self.governance
                        .is_superblock_valid(tx, height, actual_reward, expected_reward)
                });
                if valid {
                    return Ok(());
                }
                lokald_log::log_error!(
                    "is_block_value_valid: invalid superblock detected at height {}",
                    height
                );
                Err(PaymentsError::InvalidSuperblock { height })
            }
        }
    }
}
