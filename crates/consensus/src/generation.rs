//! Historical one-off coin generation grants.
//!
//! A grant height bypasses the normal reward rules: the block only has to pay
//! the grant amount, once, to the reserved recipient. Heights and amounts are
//! checked instead of full payee matching to keep initial sync cheap.

use std::fmt;

use crate::money::{money_range, Amount};

/// Key id (hex) embedded in every script that may receive a grant.
pub const GENERATION_RECIPIENT_KEY_ID: &str = "5b1c713017e9e6e019264b0e6e3e8c3a5e03a3db";

/// Raw bytes of [`GENERATION_RECIPIENT_KEY_ID`]; grants are paid to its P2PKH script.
pub const GENERATION_RECIPIENT_KEY_HASH: [u8; 20] = [
    0x5b, 0x1c, 0x71, 0x30, 0x17, 0xe9, 0xe6, 0xe0, 0x19, 0x26,
    0x4b, 0x0e, 0x6e, 0x3e, 0x8c, 0x3a, 0x5e, 0x03, 0xa3, 0xdb,
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenerationGrant {
    pub height: i32,
    pub amount: Amount,
}

#[derive(Debug, Eq, PartialEq)]
pub enum GenerationTableError {
    DuplicateHeight(i32),
    AmountOutOfRange { height: i32, amount: Amount },
}

impl fmt::Display for GenerationTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationTableError::DuplicateHeight(height) => {
                write!(f, "duplicate generation grant at height {height}")
            }
            GenerationTableError::AmountOutOfRange { height, amount } => {
                write!(f, "generation grant at height {height} has invalid amount {amount}")
            }
        }
    }
}

impl std::error::Error for GenerationTableError {}

/// Immutable height-keyed grant table.
#[derive(Clone, Debug, Default)]
pub struct GenerationTable {
    grants: Vec<GenerationGrant>,
}

impl GenerationTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(grants: &[GenerationGrant]) -> Result<Self, GenerationTableError> {
        for (idx, grant) in grants.iter().enumerate() {
            if grants[..idx].iter().any(|prev| prev.height == grant.height) {
                return Err(GenerationTableError::DuplicateHeight(grant.height));
            }
            if !money_range(grant.amount) {
                return Err(GenerationTableError::AmountOutOfRange {
                    height: grant.height,
                    amount: grant.amount,
                });
            }
        }
        Ok(Self {
            grants: grants.to_vec(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    pub fn grant_at(&self, height: i32) -> Option<&GenerationGrant> {
        self.grants.iter().find(|grant| grant.height == height)
    }

    pub fn is_generation_height(&self, height: i32) -> bool {
        self.grant_at(height).is_some()
    }

    pub fn generation_amount(&self, height: i32) -> Amount {
        self.grant_at(height).map_or(0, |grant| grant.amount)
    }
}

/// `script_hex` is the lowercase hex encoding of an output script.
pub fn is_generation_recipient(script_hex: &str) -> bool {
    script_hex.contains(GENERATION_RECIPIENT_KEY_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{COIN, MAX_MONEY};

    #[test]
    fn empty_table_has_no_grants() {
        let table = GenerationTable::empty();
        for height in [0, 1, 201, 500_000] {
            assert!(!table.is_generation_height(height));
            assert_eq!(table.generation_amount(height), 0);
        }
    }

    #[test]
    fn lookup_by_height() {
        let table = GenerationTable::new(&[
            GenerationGrant {
                height: 10_000,
                amount: 500 * COIN,
            },
            GenerationGrant {
                height: 20_000,
                amount: 7,
            },
        ])
        .expect("table");
        assert!(table.is_generation_height(10_000));
        assert_eq!(table.generation_amount(10_000), 500 * COIN);
        assert_eq!(table.generation_amount(20_000), 7);
        assert!(!table.is_generation_height(10_001));
        assert_eq!(table.generation_amount(10_001), 0);
    }

    #[test]
    fn rejects_duplicate_heights_and_bad_amounts() {
        let duplicate = GenerationTable::new(&[
            GenerationGrant {
                height: 5,
                amount: 1,
            },
            GenerationGrant {
                height: 5,
                amount: 2,
            },
        ]);
        assert_eq!(
            duplicate.unwrap_err(),
            GenerationTableError::DuplicateHeight(5)
        );

        let too_large = GenerationTable::new(&[GenerationGrant {
            height: 9,
            amount: MAX_MONEY + 1,
        }]);
        assert!(matches!(
            too_large,
            Err(GenerationTableError::AmountOutOfRange { height: 9, .. })
        ));
    }

    #[test]
    fn recipient_hash_matches_hex_id() {
        let hex: String = GENERATION_RECIPIENT_KEY_HASH
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect();
        assert_eq!(hex, GENERATION_RECIPIENT_KEY_ID);
    }

    #[test]
    fn recipient_matches_embedded_key_id() {
        let p2pkh = format!("76a914{GENERATION_RECIPIENT_KEY_ID}88ac");
        assert!(is_generation_recipient(&p2pkh));
        assert!(!is_generation_recipient(
            "76a914916200ac5f6c79597f88c0d51a902150fe4755ea88ac"
        ));
        assert!(!is_generation_recipient(""));
    }
}
