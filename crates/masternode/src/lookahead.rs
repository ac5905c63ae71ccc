//! Upcoming payee window.

use crate::payments::MasternodePayments;
use crate::provider::MasternodeRecord;

/// Number of upcoming blocks considered when asking whether a masternode is
/// about to be paid. Leaves room for the latest two blocks of votes to
/// propagate.
pub const SCHEDULE_LOOKAHEAD: usize = 8;

impl MasternodePayments<'_> {
    /// Informational only; never used to accept or reject a block.
    pub fn is_scheduled(&self, masternode: &MasternodeRecord) -> bool {
        // Historical payees cannot be checked before the list is enforced.
        if !self.masternodes.is_dip3_enforced() {
            return true;
        }
        self.masternodes
            .projected_payees(SCHEDULE_LOOKAHEAD)
            .iter()
            .any(|payee| payee.pro_tx_hash == masternode.pro_tx_hash)
    }
}
