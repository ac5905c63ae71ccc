//! Human-readable payee listings.

use std::collections::BTreeMap;

use lokald_primitives::hex::bytes_to_hex;
use lokald_primitives::script_pubkey_to_address;

use crate::error::PaymentsError;
use crate::payments::MasternodePayments;
use crate::provider::MasternodeRecord;

impl MasternodePayments<'_> {
    pub fn required_payments_string(
        &self,
        height: i32,
        payee: Option<&MasternodeRecord>,
    ) -> Result<String, PaymentsError> {
        let mut out = match payee {
            Some(payee) => script_pubkey_to_address(&payee.script_payout, self.params.network)
                .ok_or_else(|| PaymentsError::UnresolvableDestination {
                    script_hex: bytes_to_hex(&payee.script_payout),
                })?,
            None => "Unknown".to_string(),
        };
        if self.governance.is_superblock_triggered(height) {
            out.push_str(", ");
            out.push_str(&self.governance.required_payments_description(height));
        }
        Ok(out)
    }

    /// Payees for every height in `[start, end)`.
    ///
    /// Heights up to the tip use the list state of the previous block; later
    /// heights use the projected payees from the tip.
    pub fn required_payments_strings(
        &self,
        start: i32,
        end: i32,
    ) -> Result<BTreeMap<i32, String>, PaymentsError> {
        let start = start.max(1);
        let (tip, history) = {
            let chain = self.chain.read()?;
            let tip = chain.height();
            let history = (start..end.min(tip.saturating_add(1)))
                .map(|height| (height, chain.get(height - 1)))
                .collect::<Vec<_>>();
            (tip, history)
        };

        let mut payments = BTreeMap::new();
        for (height, previous) in history {
            let payee = previous.and_then(|entry| self.masternodes.payee_for_block(&entry));
            payments.insert(height, self.required_payments_string(height, payee.as_ref())?);
        }

        if start < end && end > tip.saturating_add(1) {
            let count = usize::try_from(i64::from(end) - i64::from(tip)).unwrap_or(0);
            let projection = self.masternodes.projected_payees(count);
            for (height, payee) in (tip.saturating_add(1)..).zip(projection.iter()) {
                if height < start || height >= end {
                    continue;
                }
                payments.insert(height, self.required_payments_string(height, Some(payee))?);
            }
        }

        Ok(payments)
    }
}
