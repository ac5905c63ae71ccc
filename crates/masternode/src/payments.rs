//! The payment engine service object and per-height policy classification.

use lokald_consensus::{Amount, ChainParams, SporkId};

use crate::chain::ChainLock;
use crate::provider::{GovernanceProvider, MasternodeListProvider, RewardCurve, SporkProvider};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PaymentsConfig {
    /// Skip payee checks when no masternode or governance data is kept.
    pub lite_mode: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SuperblockState {
    Disabled,
    NotTriggered,
    Triggered,
}

/// How the payment rules apply at one height.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PaymentPolicy {
    Generation { amount: Amount },
    Standard(SuperblockState),
}

pub struct Collaborators<'a> {
    pub masternodes: &'a dyn MasternodeListProvider,
    pub governance: &'a dyn GovernanceProvider,
    pub sporks: &'a dyn SporkProvider,
    pub rewards: &'a dyn RewardCurve,
}

pub struct MasternodePayments<'a> {
    pub(crate) params: &'a ChainParams,
    pub(crate) config: PaymentsConfig,
    pub(crate) chain: &'a ChainLock,
    pub(crate) masternodes: &'a dyn MasternodeListProvider,
    pub(crate) governance: &'a dyn GovernanceProvider,
    pub(crate) sporks: &'a dyn SporkProvider,
    pub(crate) rewards: &'a dyn RewardCurve,
}

impl<'a> MasternodePayments<'a> {
    pub fn new(
        params: &'a ChainParams,
        config: PaymentsConfig,
        chain: &'a ChainLock,
        collaborators: Collaborators<'a>,
    ) -> Self {
        Self {
            params,
            config,
            chain,
            masternodes: collaborators.masternodes,
            governance: collaborators.governance,
            sporks: collaborators.sporks,
            rewards: collaborators.rewards,
        }
    }

    pub fn params(&self) -> &ChainParams {
        self.params
    }

    pub fn config(&self) -> PaymentsConfig {
        self.config
    }

    pub fn superblock_state(&self, height: i32) -> SuperblockState {
        if !self.sporks.is_spork_active(SporkId::SuperblocksEnabled) {
            SuperblockState::Disabled
        } else if !self.governance.is_superblock_triggered(height) {
            SuperblockState::NotTriggered
        } else {
            SuperblockState::Triggered
        }
    }

    pub fn payment_policy(&self, height: i32) -> PaymentPolicy {
        match self.params.generation.grant_at(height) {
            Some(grant) => PaymentPolicy::Generation {
                amount: grant.amount,
            },
            None => PaymentPolicy::Standard(self.superblock_state(height)),
        }
    }
}
