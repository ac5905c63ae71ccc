#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};

use lokald_consensus::{
    chain_params, Amount, ChainParams, GenerationGrant, GenerationTable, Network, SporkId,
};
use lokald_masternode::{
    ActiveChain, BlockIndexEntry, ChainLock, Collaborators, GovernanceProvider,
    MasternodeListProvider, MasternodePayments, MasternodeRecord, PaymentsConfig, RewardCurve,
    SporkProvider,
};
use lokald_primitives::script::p2pkh_script;
use lokald_primitives::{OutPoint, Transaction, TxIn, TxOut};

/// Regtest masternode payments start here.
pub const ACTIVATION_HEIGHT: i32 = 240;
/// First regtest superblock height.
pub const SUPERBLOCK_HEIGHT: i32 = 1_500;

#[derive(Default)]
pub struct MockMasternodes {
    /// Payee keyed by the height of the previous block.
    pub payees: HashMap<i32, MasternodeRecord>,
    /// Used for every previous block without an explicit entry.
    pub default_payee: Option<MasternodeRecord>,
    pub projection: Vec<MasternodeRecord>,
    pub dip3_enforced: bool,
}

impl MasternodeListProvider for MockMasternodes {
    fn payee_for_block(&self, block: &BlockIndexEntry) -> Option<MasternodeRecord> {
        self.payees
            .get(&block.height)
            .or(self.default_payee.as_ref())
            .cloned()
    }

    fn projected_payees(&self, count: usize) -> Vec<MasternodeRecord> {
        self.projection.iter().take(count).cloned().collect()
    }

    fn is_dip3_enforced(&self) -> bool {
        self.dip3_enforced
    }
}

#[derive(Default)]
pub struct MockGovernance {
    pub triggered: BTreeSet<i32>,
    pub limit: Amount,
    pub payments: Vec<TxOut>,
    /// When false every superblock is reported invalid.
    pub accepts: bool,
    pub description: String,
}

impl GovernanceProvider for MockGovernance {
    fn is_superblock_triggered(&self, height: i32) -> bool {
        self.triggered.contains(&height)
    }

    fn superblock_payments_limit(&self, _height: i32) -> Amount {
        self.limit
    }

    fn superblock_payments(&self, _height: i32) -> Vec<TxOut> {
        self.payments.clone()
    }

    fn is_superblock_valid(
        &self,
        tx: &Transaction,
        height: i32,
        _actual_reward: Amount,
        _expected_reward: Amount,
    ) -> bool {
        self.accepts
            && self.triggered.contains(&height)
            && self
                .payments
                .iter()
                .all(|payment| tx.vout.contains(payment))
    }

    fn required_payments_description(&self, _height: i32) -> String {
        self.description.clone()
    }
}

#[derive(Default)]
pub struct MockSporks {
    pub superblocks_enabled: bool,
}

impl SporkProvider for MockSporks {
    fn is_spork_active(&self, spork: SporkId) -> bool {
        match spork {
            SporkId::SuperblocksEnabled => self.superblocks_enabled,
        }
    }
}

/// Pays `percent` of the block reward to the masternode.
pub struct PercentCurve {
    pub percent: Amount,
}

impl RewardCurve for PercentCurve {
    fn masternode_payment(&self, _height: i32, block_reward: Amount) -> Amount {
        block_reward * self.percent / 100
    }
}

pub struct Fixture {
    pub params: ChainParams,
    pub config: PaymentsConfig,
    pub chain: ChainLock,
    pub masternodes: MockMasternodes,
    pub governance: MockGovernance,
    pub sporks: MockSporks,
    pub rewards: PercentCurve,
}

impl Fixture {
    /// Regtest engine over a chain whose tip is at `tip`.
    pub fn regtest(tip: i32) -> Self {
        let mut chain = ActiveChain::new();
        for height in 0..=tip {
            let mut hash = [0u8; 32];
            hash[..4].copy_from_slice(&height.to_le_bytes());
            chain.push(hash);
        }
        let params = chain_params(Network::Regtest);
        let masternodes = MockMasternodes {
            dip3_enforced: params.consensus.is_dip3_enforced(tip),
            ..MockMasternodes::default()
        };
        Self {
            params,
            config: PaymentsConfig::default(),
            chain: ChainLock::new(chain),
            masternodes,
            governance: MockGovernance {
                accepts: true,
                ..MockGovernance::default()
            },
            sporks: MockSporks::default(),
            rewards: PercentCurve { percent: 100 },
        }
    }

    pub fn with_grant(mut self, height: i32, amount: Amount) -> Self {
        self.params.generation =
            GenerationTable::new(&[GenerationGrant { height, amount }]).expect("grant table");
        self
    }

    pub fn with_payee(mut self, payee: MasternodeRecord) -> Self {
        self.masternodes.default_payee = Some(payee);
        self
    }

    pub fn with_superblock(mut self, height: i32, payments: Vec<TxOut>) -> Self {
        self.sporks.superblocks_enabled = true;
        self.governance.triggered.insert(height);
        self.governance.limit = payments.iter().map(|payment| payment.value).sum();
        self.governance.payments = payments;
        self
    }

    pub fn payments(&self) -> MasternodePayments<'_> {
        MasternodePayments::new(
            &self.params,
            self.config,
            &self.chain,
            Collaborators {
                masternodes: &self.masternodes,
                governance: &self.governance,
                sporks: &self.sporks,
                rewards: &self.rewards,
            },
        )
    }
}

pub fn key_script(byte: u8) -> Vec<u8> {
    p2pkh_script(&[byte; 20])
}

pub fn record(byte: u8, operator_reward: u16, with_operator: bool) -> MasternodeRecord {
    MasternodeRecord {
        pro_tx_hash: [byte; 32],
        script_payout: key_script(byte),
        script_operator_payout: if with_operator {
            key_script(byte.wrapping_add(1))
        } else {
            Vec::new()
        },
        operator_reward,
    }
}

/// Coinstake-shaped payment transaction paying `miner_value` at index 1.
pub fn payment_tx(miner_value: Amount) -> Transaction {
    Transaction::new(
        vec![TxIn::new(OutPoint {
            hash: [0xaa; 32],
            index: 0,
        })],
        vec![TxOut::default(), TxOut::new(miner_value, key_script(0xee))],
    )
}

pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    pub fn gen_range(&mut self, max: u64) -> u64 {
        if max == 0 {
            0
        } else {
            (self.next_u64() >> 16) % max
        }
    }
}
