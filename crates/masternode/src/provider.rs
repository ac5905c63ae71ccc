//! Interfaces to the subsystems the payment engine consults.

use lokald_consensus::{Amount, Hash256, SporkId};
use lokald_primitives::{Transaction, TxOut};

use crate::chain::BlockIndexEntry;

/// Basis points that make up the full masternode reward.
pub const OPERATOR_REWARD_DENOMINATOR: u16 = 10_000;

/// Payout state of a registered deterministic masternode.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MasternodeRecord {
    pub pro_tx_hash: Hash256,
    pub script_payout: Vec<u8>,
    /// Empty when no operator payout is configured.
    pub script_operator_payout: Vec<u8>,
    /// Operator share in basis points.
    pub operator_reward: u16,
}

pub trait MasternodeListProvider {
    /// Payee owed the block built on top of `block`.
    fn payee_for_block(&self, block: &BlockIndexEntry) -> Option<MasternodeRecord>;

    /// Payees of the next `count` blocks after the chain tip, in order.
    fn projected_payees(&self, count: usize) -> Vec<MasternodeRecord>;

    fn is_dip3_enforced(&self) -> bool;
}

pub trait GovernanceProvider {
    fn is_superblock_triggered(&self, height: i32) -> bool;

    fn superblock_payments_limit(&self, height: i32) -> Amount;

    fn superblock_payments(&self, height: i32) -> Vec<TxOut>;

    fn is_superblock_valid(
        &self,
        tx: &Transaction,
        height: i32,
        actual_reward: Amount,
        expected_reward: Amount,
    ) -> bool;

    fn required_payments_description(&self, height: i32) -> String;
}

pub trait SporkProvider {
    fn is_spork_active(&self, spork: SporkId) -> bool;
}

pub trait RewardCurve {
    /// Masternode share of `block_reward` at `height`.
    fn masternode_payment(&self, height: i32, block_reward: Amount) -> Amount;
}
