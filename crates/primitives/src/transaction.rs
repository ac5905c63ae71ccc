//! Transaction types.

use std::fmt;

use lokald_consensus::{format_money, Amount};

use crate::hex::bytes_to_hex;
use crate::outpoint::OutPoint;

#[derive(Clone, Debug, PartialEq)]
pub struct TxIn {
    pub prevout: OutPoint,
    pub script_sig: Vec<u8>,
    pub sequence: u32,
}

impl TxIn {
    pub fn new(prevout: OutPoint) -> Self {
        Self {
            prevout,
            script_sig: Vec::new(),
            sequence: u32::MAX,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TxOut {
    pub value: Amount,
    pub script_pubkey: Vec<u8>,
}

impl TxOut {
    pub fn new(value: Amount, script_pubkey: Vec<u8>) -> Self {
        Self {
            value,
            script_pubkey,
        }
    }

    /// The zero-value, empty-script marker output that opens a coinstake.
    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_pubkey.is_empty()
    }

    pub fn script_hex(&self) -> String {
        bytes_to_hex(&self.script_pubkey)
    }
}

impl fmt::Display for TxOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TxOut(value={}, script_pubkey={})",
            format_money(self.value),
            self.script_hex()
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub version: i32,
    pub vin: Vec<TxIn>,
    pub vout: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn new(vin: Vec<TxIn>, vout: Vec<TxOut>) -> Self {
        Self {
            version: 1,
            vin,
            vout,
            lock_time: 0,
        }
    }

    pub fn is_coinstake(&self) -> bool {
        match (self.vin.first(), self.vout.first()) {
            (Some(first_in), Some(first_out)) => {
                !first_in.prevout.is_null() && self.vout.len() >= 2 && first_out.is_empty()
            }
            _ => false,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Transaction(version={}, vin.size={}, vout.size={}, lock_time={})",
            self.version,
            self.vin.len(),
            self.vout.len(),
            self.lock_time
        )?;
        for output in &self.vout {
            writeln!(f, "    {output}")?;
        }
        Ok(())
    }
}
