//! Transaction, block, address and script primitives.

pub mod address;
pub mod block;
pub mod hash;
pub mod hex;
pub mod outpoint;
pub mod script;
pub mod transaction;

pub use address::{
    address_to_script_pubkey, decode_destination, encode_destination, script_pubkey_to_address,
    AddressError,
};
pub use block::Block;
pub use hash::{hash160, sha256d};
pub use outpoint::OutPoint;
pub use script::{classify_script_pubkey, extract_destination, Destination, ScriptType};
pub use transaction::{Transaction, TxIn, TxOut};
