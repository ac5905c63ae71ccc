//! Masternode payment schedule, block template payments and payee validation.

pub mod chain;
pub mod coinbase;
pub mod error;
pub mod lookahead;
mod payee;
pub mod payments;
pub mod provider;
mod report;
pub mod schedule;
mod value;

pub use chain::{ActiveChain, BlockIndexEntry, ChainLock, ChainReadGuard, ChainWriteGuard};
pub use coinbase::{generation_recipient_script, BlockPayments, MINER_OUTPUT_INDEX};
pub use error::{Acceptance, PaymentsError, RewardContext, ScheduleUnavailable, UnverifiedReason};
pub use lookahead::SCHEDULE_LOOKAHEAD;
pub use payments::{
    Collaborators, MasternodePayments, PaymentPolicy, PaymentsConfig, SuperblockState,
};
pub use provider::{
    GovernanceProvider, MasternodeListProvider, MasternodeRecord, RewardCurve, SporkProvider,
    OPERATOR_REWARD_DENOMINATOR,
};
pub use schedule::{PaymentOutputs, RewardSplit, Schedule};
