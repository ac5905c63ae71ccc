//! Per-network consensus parameters consumed by the payment engine.

use crate::generation::GenerationTable;

/// Placeholder height for mainnet features that were never scheduled.
///
/// It is a real height: mainnet superblock heights are its multiples.
pub const NEVER32: i32 = 400_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
    Regtest,
}

impl Network {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mainnet => "main",
            Self::Testnet => "test",
            Self::Devnet => "dev",
            Self::Regtest => "regtest",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Some(Self::Mainnet),
            "test" | "testnet" => Some(Self::Testnet),
            "dev" | "devnet" => Some(Self::Devnet),
            "regtest" => Some(Self::Regtest),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ConsensusParams {
    pub network: Network,
    /// First height at which the coinbase must pay the scheduled masternode.
    pub masternode_payments_start_height: i32,
    pub superblock_start_height: i32,
    pub superblock_cycle: i32,
    /// Deterministic masternode list activation and enforcement.
    pub dip3_activation_height: i32,
    pub dip3_enforcement_height: i32,
}

impl ConsensusParams {
    pub fn is_dip3_enforced(&self, height: i32) -> bool {
        height >= self.dip3_enforcement_height
    }
}

#[derive(Clone, Debug)]
pub struct ChainParams {
    pub network: Network,
    pub consensus: ConsensusParams,
    pub generation: GenerationTable,
}

pub fn consensus_params(network: Network) -> ConsensusParams {
    match network {
        Network::Mainnet => ConsensusParams {
            network,
            masternode_payments_start_height: 201,
            superblock_start_height: NEVER32,
            superblock_cycle: NEVER32,
            dip3_activation_height: 201,
            dip3_enforcement_height: 2_000,
        },
        Network::Testnet => ConsensusParams {
            network,
            masternode_payments_start_height: 50,
            superblock_start_height: 100,
            superblock_cycle: 24,
            dip3_activation_height: 75,
            dip3_enforcement_height: 363_000,
        },
        Network::Devnet => ConsensusParams {
            network,
            masternode_payments_start_height: 4_010,
            superblock_start_height: 4_200,
            superblock_cycle: 24,
            dip3_activation_height: 2,
            dip3_enforcement_height: 2,
        },
        Network::Regtest => ConsensusParams {
            network,
            masternode_payments_start_height: 240,
            superblock_start_height: 1_500,
            superblock_cycle: 10,
            dip3_activation_height: 432,
            dip3_enforcement_height: 500,
        },
    }
}

pub fn chain_params(network: Network) -> ChainParams {
    ChainParams {
        network,
        consensus: consensus_params(network),
        // No network has historical grants on record.
        generation: GenerationTable::empty(),
    }
}
