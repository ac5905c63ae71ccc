//! Payee checks for a block's payment transaction.

use lokald_consensus::{is_generation_recipient, Amount, SporkId};
use lokald_log::Category;
use lokald_primitives::{encode_destination, extract_destination, Destination, Transaction};

use crate::error::{Acceptance, PaymentsError, UnverifiedReason};
use crate::payments::{MasternodePayments, PaymentPolicy, SuperblockState};
use crate::schedule::Schedule;

impl MasternodePayments<'_> {
    pub fn is_block_payee_valid(
        &self,
        tx: &Transaction,
        height: i32,
        expected_reward: Amount,
        actual_reward: Amount,
    ) -> Result<Acceptance, PaymentsError> {
        let state = match self.payment_policy(height) {
            PaymentPolicy::Generation { amount } => {
                return check_generation_payment(tx, height, amount);
            }
            PaymentPolicy::Standard(state) => state,
        };

        if self.config.lite_mode {
            lokald_log::log_print!(
                Category::MnPayments,
                "is_block_payee_valid: not enough data, skipping block payee checks"
            );
            return Ok(Acceptance::Unverified(UnverifiedReason::LiteMode));
        }

        match state {
            SuperblockState::Triggered => {
                if !self
                    .governance
                    .is_superblock_valid(tx, height, actual_reward, expected_reward)
                {
                    lokald_log::log_error!(
                        "is_block_payee_valid: invalid superblock detected at height {}: {}",
                        height,
                        tx
                    );
                    return Err(PaymentsError::InvalidSuperblock { height });
                }
                lokald_log::log_print!(
                    Category::Gobject,
                    "is_block_payee_valid: valid superblock at height {}: {}",
                    height,
                    tx
                );
            }
            SuperblockState::NotTriggered => {
                lokald_log::log_print!(
                    Category::Gobject,
                    "is_block_payee_valid: no triggered superblock detected at height {}",
                    height
                );
            }
            SuperblockState::Disabled => {
                lokald_log::log_print!(
                    Category::Gobject,
                    "is_block_payee_valid: {} is off, no superblocks allowed",
                    SporkId::SuperblocksEnabled.name()
                );
            }
        }

        let acceptance = self.is_transaction_valid(tx, height, expected_reward)?;
        lokald_log::log_print!(
            Category::MnPayments,
            "is_block_payee_valid: masternode payment at height {} accepted ({:?})",
            height,
            acceptance
        );
        Ok(acceptance)
    }

    /// Checks that every scheduled masternode destination is paid by `tx`.
    ///
    /// Destinations are compared after resolving the scripts, so a
    /// pay-to-pubkey output satisfies a pay-to-pubkey-hash requirement for the
    /// same key. Amounts are not compared.
    pub fn is_transaction_valid(
        &self,
        tx: &Transaction,
        height: i32,
        expected_reward: Amount,
    ) -> Result<Acceptance, PaymentsError> {
        if height < self.params.consensus.masternode_payments_start_height {
            return Ok(Acceptance::Unverified(UnverifiedReason::BeforeActivation));
        }

        let expected = match self.block_tx_outs(height, expected_reward)? {
            Schedule::Payees(outputs) => outputs,
            Schedule::Unavailable(reason) => {
                lokald_log::log_print!(
                    Category::MnPayments,
                    "is_transaction_valid: failed to get payees for block at height {} ({})",
                    height,
                    reason
                );
                return Ok(Acceptance::Unverified(reason.into()));
            }
        };

        let paid: Vec<Destination> = tx
            .vout
            .iter()
            .filter_map(|output| extract_destination(&output.script_pubkey))
            .collect();

        // An expected script without a destination is fatal before searching, even
        // though the empty coinstake marker output would also have no destination.
        for output in &expected {
            let destination = extract_destination(&output.script_pubkey).ok_or_else(|| {
                PaymentsError::UnresolvableDestination {
                    script_hex: output.script_hex(),
                }
            })?;
            if !paid.contains(&destination) {
                let payee = encode_destination(&destination, self.params.network);
                lokald_log::log_error!(
                    "is_transaction_valid: failed to find expected payee {} in block at height {}",
                    payee,
                    height
                );
                return Err(PaymentsError::MissingMasternodePayment { height, payee });
            }
        }
        Ok(Acceptance::Verified)
    }
}

fn check_generation_payment(
    tx: &Transaction,
    height: i32,
    amount: Amount,
) -> Result<Acceptance, PaymentsError> {
    let found = tx
        .vout
        .iter()
        .filter(|output| output.value == amount && is_generation_recipient(&output.script_hex()))
        .count();
    lokald_log::log_info!(
        "is_block_payee_valid: generation block at height {} pays the grant {} time(s)",
        height,
        found
    );
    if found == 1 {
        Ok(Acceptance::Verified)
    } else {
        Err(PaymentsError::InvalidGenerationPayment { height, found })
    }
}
