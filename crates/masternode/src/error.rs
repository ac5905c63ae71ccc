//! Payment validation outcomes and errors.

use std::fmt;

use lokald_consensus::Amount;

/// Which reward bound a block exceeded when it could not be a superblock.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RewardContext {
    RegularHeight,
    SuperblocksDisabled,
    NotTriggered,
}

impl RewardContext {
    fn describe(self) -> &'static str {
        match self {
            RewardContext::RegularHeight => "only regular blocks are allowed at this height",
            RewardContext::SuperblocksDisabled => "superblocks are disabled",
            RewardContext::NotTriggered => "no triggered superblock detected",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PaymentsError {
    ExceededBlockReward {
        height: i32,
        actual: Amount,
        limit: Amount,
        context: RewardContext,
    },
    ExceededSuperblockLimit {
        height: i32,
        actual: Amount,
        limit: Amount,
    },
    InvalidSuperblock {
        height: i32,
    },
    InvalidGenerationPayment {
        height: i32,
        found: usize,
    },
    MissingMasternodePayment {
        height: i32,
        payee: String,
    },
    UnresolvableDestination {
        script_hex: String,
    },
    MissingMinerOutput {
        outputs: usize,
    },
    ChainLockPoisoned,
}

impl PaymentsError {
    /// True for broken internal invariants; the caller must stop instead of
    /// treating the block as merely invalid.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PaymentsError::UnresolvableDestination { .. }
                | PaymentsError::MissingMinerOutput { .. }
                | PaymentsError::ChainLockPoisoned
        )
    }
}

impl fmt::Display for PaymentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentsError::ExceededBlockReward {
                height,
                actual,
                limit,
                context,
            } => write!(
                f,
                "coinbase pays too much at height {height} (actual={actual} vs limit={limit}), exceeded block reward, {}",
                context.describe()
            ),
            PaymentsError::ExceededSuperblockLimit {
                height,
                actual,
                limit,
            } => write!(
                f,
                "coinbase pays too much at height {height} (actual={actual} vs limit={limit}), exceeded superblock max value"
            ),
            PaymentsError::InvalidSuperblock { height } => {
                write!(f, "invalid superblock detected at height {height}")
            }
            PaymentsError::InvalidGenerationPayment { height, found } => write!(
                f,
                "generation block at height {height} must pay the grant exactly once (found {found})"
            ),
            PaymentsError::MissingMasternodePayment { height, payee } => write!(
                f,
                "failed to find expected payee {payee} in block at height {height}"
            ),
            PaymentsError::UnresolvableDestination { script_hex } => {
                write!(f, "expected payment script {script_hex} has no destination")
            }
            PaymentsError::MissingMinerOutput { outputs } => write!(
                f,
                "payment transaction has no miner output ({outputs} outputs)"
            ),
            PaymentsError::ChainLockPoisoned => write!(f, "active chain lock poisoned"),
        }
    }
}

impl std::error::Error for PaymentsError {}

/// Why a payment could not be checked. Unverified payments are accepted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnverifiedReason {
    BeforeActivation,
    LiteMode,
    NoPayee,
    MissingBlockIndex,
}

impl fmt::Display for UnverifiedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            UnverifiedReason::BeforeActivation => "masternode payments not active yet",
            UnverifiedReason::LiteMode => "lite mode, not enough data",
            UnverifiedReason::NoPayee => "no masternode payee",
            UnverifiedReason::MissingBlockIndex => "previous block not in active chain",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Acceptance {
    Verified,
    Unverified(UnverifiedReason),
}

impl Acceptance {
    pub fn is_verified(self) -> bool {
        matches!(self, Acceptance::Verified)
    }
}

/// The masternode schedule for a height could not be computed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScheduleUnavailable {
    MissingBlockIndex,
    NoPayee,
}

impl fmt::Display for ScheduleUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        UnverifiedReason::from(*self).fmt(f)
    }
}

impl From<ScheduleUnavailable> for UnverifiedReason {
    fn from(reason: ScheduleUnavailable) -> Self {
        match reason {
            ScheduleUnavailable::MissingBlockIndex => UnverifiedReason::MissingBlockIndex,
            ScheduleUnavailable::NoPayee => UnverifiedReason::NoPayee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_invariant_violations_are_fatal() {
        assert!(PaymentsError::ChainLockPoisoned.is_fatal());
        assert!(PaymentsError::MissingMinerOutput { outputs: 1 }.is_fatal());
        assert!(PaymentsError::UnresolvableDestination {
            script_hex: "6a".to_string()
        }
        .is_fatal());
        assert!(!PaymentsError::InvalidSuperblock { height: 10 }.is_fatal());
        assert!(!PaymentsError::InvalidGenerationPayment {
            height: 10,
            found: 2
        }
        .is_fatal());
    }

    #[test]
    fn rejection_reasons_name_the_bound() {
        let regular = PaymentsError::ExceededBlockReward {
            height: 7,
            actual: 11,
            limit: 10,
            context: RewardContext::SuperblocksDisabled,
        };
        assert_eq!(
            regular.to_string(),
            "coinbase pays too much at height 7 (actual=11 vs limit=10), exceeded block reward, superblocks are disabled"
        );
        let ceiling = PaymentsError::ExceededSuperblockLimit {
            height: 7,
            actual: 31,
            limit: 30,
        };
        assert!(ceiling.to_string().ends_with("exceeded superblock max value"));
    }

    #[test]
    fn schedule_gaps_map_to_unverified_reasons() {
        assert_eq!(
            UnverifiedReason::from(ScheduleUnavailable::NoPayee),
            UnverifiedReason::NoPayee
        );
        assert_eq!(
            ScheduleUnavailable::MissingBlockIndex.to_string(),
            "previous block not in active chain"
        );
        assert!(Acceptance::Verified.is_verified());
        assert!(!Acceptance::Unverified(UnverifiedReason::LiteMode).is_verified());
    }
}
