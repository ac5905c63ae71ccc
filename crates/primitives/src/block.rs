//! Block type.

use crate::transaction::Transaction;

#[derive(Clone, Debug, Default)]
pub struct Block {
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn is_proof_of_stake(&self) -> bool {
        self.transactions
            .get(1)
            .is_some_and(Transaction::is_coinstake)
    }

    /// The transaction carrying the block reward: the coinstake for
    /// proof-of-stake blocks, otherwise the coinbase.
    pub fn payment_transaction(&self) -> Option<&Transaction> {
        self.transactions.get(usize::from(self.is_proof_of_stake()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outpoint::OutPoint;
    use crate::transaction::{TxIn, TxOut};

    fn coinbase(value: i64) -> Transaction {
        Transaction::new(
            vec![TxIn::new(OutPoint::null())],
            vec![TxOut::new(value, vec![0x51])],
        )
    }

    #[test]
    fn proof_of_work_pays_from_coinbase() {
        let block = Block::new(vec![coinbase(5)]);
        assert!(!block.is_proof_of_stake());
        assert_eq!(block.payment_transaction(), Some(&coinbase(5)));
        assert_eq!(Block::default().payment_transaction(), None);
    }

    #[test]
    fn proof_of_stake_pays_from_coinstake() {
        let coinstake = Transaction::new(
            vec![TxIn::new(OutPoint {
                hash: [1u8; 32],
                index: 2,
            })],
            vec![TxOut::default(), TxOut::new(9, vec![0x51])],
        );
        let block = Block::new(vec![coinbase(0), coinstake.clone()]);
        assert!(block.is_proof_of_stake());
        assert_eq!(block.payment_transaction(), Some(&coinstake));
    }
}
