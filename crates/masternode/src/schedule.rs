//! Masternode payment schedule for a single height.

use smallvec::SmallVec;

use lokald_consensus::{format_money, Amount};
use lokald_log::Category;
use lokald_primitives::{script_pubkey_to_address, TxOut};

use crate::error::{PaymentsError, ScheduleUnavailable};
use crate::payments::MasternodePayments;
use crate::provider::{MasternodeRecord, OPERATOR_REWARD_DENOMINATOR};

/// Owner output first, then operator output.
pub type PaymentOutputs = SmallVec<[TxOut; 2]>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Schedule {
    Payees(PaymentOutputs),
    Unavailable(ScheduleUnavailable),
}

/// Division of one masternode reward between owner and operator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RewardSplit {
    pub owner: Amount,
    pub operator: Amount,
}

impl RewardSplit {
    pub fn new(record: &MasternodeRecord, masternode_reward: Amount) -> Self {
        let operator = if record.operator_reward != 0 && !record.script_operator_payout.is_empty()
        {
            let share = i128::from(masternode_reward) * i128::from(record.operator_reward)
                / i128::from(OPERATOR_REWARD_DENOMINATOR);
            // Rates above the denominator are not capped; the owner share goes negative.
            Amount::try_from(share).unwrap_or(if share < 0 { Amount::MIN } else { Amount::MAX })
        } else {
            0
        };
        Self {
            owner: masternode_reward.saturating_sub(operator),
            operator,
        }
    }

    pub fn outputs(&self, record: &MasternodeRecord) -> PaymentOutputs {
        let mut outputs = PaymentOutputs::new();
        if self.owner > 0 {
            outputs.push(TxOut::new(self.owner, record.script_payout.clone()));
        }
        if self.operator > 0 {
            outputs.push(TxOut::new(
                self.operator,
                record.script_operator_payout.clone(),
            ));
        }
        outputs
    }
}

impl MasternodePayments<'_> {
    /// Outputs the payment transaction at `height` owes the scheduled
    /// masternode.
    ///
    /// Only a poisoned chain lock is an error; a missing previous block or an
    /// empty masternode list yields [`Schedule::Unavailable`].
    pub fn block_tx_outs(
        &self,
        height: i32,
        expected_reward: Amount,
    ) -> Result<Schedule, PaymentsError> {
        let masternode_reward = self.rewards.masternode_payment(height, expected_reward);

        let previous = {
            let chain = self.chain.read()?;
            chain.get(height.saturating_sub(1))
        };
        let Some(previous) = previous else {
            return Ok(Schedule::Unavailable(ScheduleUnavailable::MissingBlockIndex));
        };
        let Some(payee) = self.masternodes.payee_for_block(&previous) else {
            return Ok(Schedule::Unavailable(ScheduleUnavailable::NoPayee));
        };

        let split = RewardSplit::new(&payee, masternode_reward);
        Ok(Schedule::Payees(split.outputs(&payee)))
    }

    /// Schedule for block construction; an unavailable schedule pays nobody.
    pub fn masternode_tx_outs(
        &self,
        height: i32,
        expected_reward: Amount,
    ) -> Result<PaymentOutputs, PaymentsError> {
        let outputs = match self.block_tx_outs(height, expected_reward)? {
            Schedule::Payees(outputs) => outputs,
            Schedule::Unavailable(reason) => {
                lokald_log::log_print!(
                    Category::MnPayments,
                    "masternode_tx_outs: no payee at height {} ({})",
                    height,
                    reason
                );
                return Ok(PaymentOutputs::new());
            }
        };

        for output in &outputs {
            let address = script_pubkey_to_address(&output.script_pubkey, self.params.network)
                .unwrap_or_else(|| output.script_hex());
            lokald_log::log_print!(
                Category::MnPayments,
                "masternode_tx_outs: masternode payment {} to {}",
                format_money(output.value),
                address
            );
        }
        Ok(outputs)
    }
}
