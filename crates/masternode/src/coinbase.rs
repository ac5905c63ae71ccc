//! Block template payments.

use lokald_consensus::{Amount, GENERATION_RECIPIENT_KEY_HASH};
use lokald_log::Category;
use lokald_primitives::script::p2pkh_script;
use lokald_primitives::{Transaction, TxOut};

use crate::error::PaymentsError;
use crate::payments::{MasternodePayments, SuperblockState};
use crate::schedule::PaymentOutputs;

/// Index of the miner's reward output in a payment transaction.
pub const MINER_OUTPUT_INDEX: usize = 1;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BlockPayments {
    pub masternode: PaymentOutputs,
    pub superblock: Vec<TxOut>,
}

impl BlockPayments {
    pub fn masternode_total(&self) -> Amount {
        self.masternode.iter().map(|output| output.value).sum()
    }
}

pub fn generation_recipient_script() -> Vec<u8> {
    p2pkh_script(&GENERATION_RECIPIENT_KEY_HASH)
}

impl MasternodePayments<'_> {
    /// Appends the scheduled payments to `tx` and takes the masternode share
    /// out of the miner output.
    ///
    /// Superblock payments are expected to already be excluded from
    /// `expected_reward`, so only masternode payments reduce the miner output.
    /// On error `tx` is left unchanged.
    pub fn fill_block_payments(
        &self,
        tx: &mut Transaction,
        height: i32,
        expected_reward: Amount,
    ) -> Result<BlockPayments, PaymentsError> {
        if tx.vout.len() <= MINER_OUTPUT_INDEX {
            return Err(PaymentsError::MissingMinerOutput {
                outputs: tx.vout.len(),
            });
        }

        let superblock = if self.superblock_state(height) == SuperblockState::Triggered {
            lokald_log::log_print!(
                Category::Gobject,
                "fill_block_payments: triggered superblock creation at height {}",
                height
            );
            self.governance.superblock_payments(height)
        } else {
            Vec::new()
        };

        let masternode = self.masternode_tx_outs(height, expected_reward)?;
        if masternode.is_empty() {
            lokald_log::log_print!(
                Category::MnPayments,
                "fill_block_payments: no masternode to pay (masternode list probably empty)"
            );
        }

        if let Some(grant) = self.params.generation.grant_at(height) {
            tx.vout
                .push(TxOut::new(grant.amount, generation_recipient_script()));
        }

        tx.vout.extend(masternode.iter().cloned());
        tx.vout.extend(superblock.iter().cloned());

        let payments = BlockPayments {
            masternode,
            superblock,
        };
        tx.vout[MINER_OUTPUT_INDEX].value -= payments.masternode_total();

        if lokald_log::category_enabled(Category::MnPayments) {
            let masternode_str = payments
                .masternode
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            lokald_log::log_print!(
                Category::MnPayments,
                "fill_block_payments: height {} expected_reward {} masternode_payments \"{}\" tx {}",
                height,
                expected_reward,
                masternode_str,
                tx
            );
        }

        Ok(payments)
    }
}
