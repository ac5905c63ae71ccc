//! Base58 address encoding for payment destinations.

use std::fmt;

use lokald_consensus::Network;

use crate::hash::sha256d;
use crate::script::{extract_destination, Destination};

#[derive(Debug, Eq, PartialEq)]
pub enum AddressError {
    InvalidLength,
    InvalidCharacter,
    InvalidChecksum,
    UnknownPrefix,
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidLength => write!(f, "invalid address length"),
            AddressError::InvalidCharacter => write!(f, "invalid base58 character"),
            AddressError::InvalidChecksum => write!(f, "invalid address checksum"),
            AddressError::UnknownPrefix => write!(f, "address prefix does not match network"),
        }
    }
}

impl std::error::Error for AddressError {}

pub fn encode_destination(destination: &Destination, network: Network) -> String {
    let (pubkey_prefix, script_prefix) = network_prefixes(network);
    let (prefix, hash) = match destination {
        Destination::KeyId(hash) => (pubkey_prefix, hash),
        Destination::ScriptId(hash) => (script_prefix, hash),
    };
    let mut payload = Vec::with_capacity(1 + hash.len());
    payload.push(prefix);
    payload.extend_from_slice(hash);
    base58check_encode(&payload)
}

pub fn decode_destination(address: &str, network: Network) -> Result<Destination, AddressError> {
    let payload = base58check_decode(address)?;
    let (prefix, hash) = payload.split_first().ok_or(AddressError::InvalidLength)?;
    if hash.len() != 20 {
        return Err(AddressError::InvalidLength);
    }
    let mut out = [0u8; 20];
    out.copy_from_slice(hash);

    let (pubkey_prefix, script_prefix) = network_prefixes(network);
    if *prefix == pubkey_prefix {
        Ok(Destination::KeyId(out))
    } else if *prefix == script_prefix {
        Ok(Destination::ScriptId(out))
    } else {
        Err(AddressError::UnknownPrefix)
    }
}

pub fn address_to_script_pubkey(address: &str, network: Network) -> Result<Vec<u8>, AddressError> {
    decode_destination(address, network).map(|destination| destination.script_pubkey())
}

pub fn script_pubkey_to_address(script: &[u8], network: Network) -> Option<String> {
    extract_destination(script).map(|destination| encode_destination(&destination, network))
}

fn network_prefixes(network: Network) -> (u8, u8) {
    match network {
        Network::Mainnet => (48, 10),
        Network::Testnet | Network::Devnet | Network::Regtest => (140, 19),
    }
}

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn base58check_decode(input: &str) -> Result<Vec<u8>, AddressError> {
    let bytes = base58_decode(input)?;
    if bytes.len() < 4 {
        return Err(AddressError::InvalidLength);
    }
    let (payload, checksum) = bytes.split_at(bytes.len() - 4);
    let digest = sha256d(payload);
    if checksum != &digest[..4] {
        return Err(AddressError::InvalidChecksum);
    }
    Ok(payload.to_vec())
}

fn base58check_encode(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + 4);
    data.extend_from_slice(payload);
    let checksum = sha256d(payload);
    data.extend_from_slice(&checksum[..4]);
    base58_encode(&data)
}

fn base58_decode(input: &str) -> Result<Vec<u8>, AddressError> {
    if input.is_empty() {
        return Err(AddressError::InvalidLength);
    }
    let mut bytes: Vec<u8> = Vec::new();
    for ch in input.bytes() {
        let mut carry = base58_value(ch).ok_or(AddressError::InvalidCharacter)? as u32;
        for byte in bytes.iter_mut().rev() {
            let val = (*byte as u32) * 58 + carry;
            *byte = (val & 0xff) as u8;
            carry = val >> 8;
        }
        while carry > 0 {
            bytes.insert(0, (carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let leading_zeros = input.bytes().take_while(|b| *b == b'1').count();
    let mut out = vec![0u8; leading_zeros];
    out.extend_from_slice(&bytes);
    Ok(out)
}

fn base58_encode(data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }
    let mut digits = vec![0u8];
    for byte in data {
        let mut carry = *byte as u32;
        for digit in digits.iter_mut().rev() {
            let value = (*digit as u32) * 256 + carry;
            *digit = (value % 58) as u8;
            carry = value / 58;
        }
        while carry > 0 {
            digits.insert(0, (carry % 58) as u8);
            carry /= 58;
        }
    }
    // The seed digit stays zero when every input byte is zero.
    let skip = digits.iter().take_while(|d| **d == 0).count();
    let leading_zeros = data.iter().take_while(|b| **b == 0u8).count();
    let mut out = String::with_capacity(leading_zeros + digits.len());
    out.extend(std::iter::repeat('1').take(leading_zeros));
    for digit in &digits[skip..] {
        out.push(ALPHABET[*digit as usize] as char);
    }
    out
}

fn base58_value(byte: u8) -> Option<u8> {
    ALPHABET
        .iter()
        .position(|value| *value == byte)
        .map(|pos| pos as u8)
}
