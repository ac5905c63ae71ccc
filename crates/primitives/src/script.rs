//! Standard output script classification and destination extraction.

use crate::hash::hash160;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScriptType {
    P2Pk,
    P2Pkh,
    P2Sh,
    Unknown,
}

/// Where an output pays to, independent of the exact script encoding.
///
/// A pay-to-pubkey script and a pay-to-pubkey-hash script for the same key
/// resolve to the same `KeyId` destination.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Destination {
    KeyId([u8; 20]),
    ScriptId([u8; 20]),
}

impl Destination {
    pub fn script_pubkey(&self) -> Vec<u8> {
        match self {
            Destination::KeyId(hash) => p2pkh_script(hash),
            Destination::ScriptId(hash) => p2sh_script(hash),
        }
    }
}

const OP_DUP: u8 = 0x76;
const OP_HASH160: u8 = 0xa9;
const OP_EQUAL: u8 = 0x87;
const OP_EQUALVERIFY: u8 = 0x88;
const OP_CHECKSIG: u8 = 0xac;

pub fn classify_script_pubkey(script: &[u8]) -> ScriptType {
    if is_p2pkh(script) {
        ScriptType::P2Pkh
    } else if is_p2sh(script) {
        ScriptType::P2Sh
    } else if p2pk_key(script).is_some() {
        ScriptType::P2Pk
    } else {
        ScriptType::Unknown
    }
}

pub fn extract_destination(script: &[u8]) -> Option<Destination> {
    match classify_script_pubkey(script) {
        ScriptType::P2Pkh => Some(Destination::KeyId(copy_hash(&script[3..23]))),
        ScriptType::P2Sh => Some(Destination::ScriptId(copy_hash(&script[2..22]))),
        ScriptType::P2Pk => p2pk_key(script).map(|key| Destination::KeyId(hash160(key))),
        ScriptType::Unknown => None,
    }
}

pub fn p2pkh_script(hash: &[u8; 20]) -> Vec<u8> {
    let mut script = Vec::with_capacity(25);
    script.extend_from_slice(&[OP_DUP, OP_HASH160, 0x14]);
    script.extend_from_slice(hash);
    script.extend_from_slice(&[OP_EQUALVERIFY, OP_CHECKSIG]);
    script
}

pub fn p2sh_script(hash: &[u8; 20]) -> Vec<u8> {
    let mut script = Vec::with_capacity(23);
    script.extend_from_slice(&[OP_HASH160, 0x14]);
    script.extend_from_slice(hash);
    script.push(OP_EQUAL);
    script
}

fn copy_hash(bytes: &[u8]) -> [u8; 20] {
    let mut out = [0u8; 20];
    out.copy_from_slice(bytes);
    out
}

fn is_p2pkh(script: &[u8]) -> bool {
    script.len() == 25
        && script[0] == OP_DUP
        && script[1] == OP_HASH160
        && script[2] == 0x14
        && script[23] == OP_EQUALVERIFY
        && script[24] == OP_CHECKSIG
}

fn is_p2sh(script: &[u8]) -> bool {
    script.len() == 23 && script[0] == OP_HASH160 && script[1] == 0x14 && script[22] == OP_EQUAL
}

/// Returns the pushed public key of a pay-to-pubkey script whose key header
/// byte agrees with its length.
fn p2pk_key(script: &[u8]) -> Option<&[u8]> {
    let key_len = match script.first().copied() {
        Some(len @ 33) | Some(len @ 65) => len as usize,
        _ => return None,
    };
    if script.len() != key_len + 2 || script[script.len() - 1] != OP_CHECKSIG {
        return None;
    }
    let key = &script[1..1 + key_len];
    let header_ok = match key_len {
        33 => matches!(key[0], 0x02 | 0x03),
        _ => matches!(key[0], 0x04 | 0x06 | 0x07),
    };
    header_ok.then_some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compressed_key() -> Vec<u8> {
        let mut key = vec![0x02];
        key.extend_from_slice(&[0x11; 32]);
        key
    }

    fn p2pk_script(key: &[u8]) -> Vec<u8> {
        let mut script = vec![key.len() as u8];
        script.extend_from_slice(key);
        script.push(OP_CHECKSIG);
        script
    }

    #[test]
    fn classifies_standard_scripts() {
        let hash = [0x5b; 20];
        assert_eq!(classify_script_pubkey(&p2pkh_script(&hash)), ScriptType::P2Pkh);
        assert_eq!(classify_script_pubkey(&p2sh_script(&hash)), ScriptType::P2Sh);
        assert_eq!(
            classify_script_pubkey(&p2pk_script(&compressed_key())),
            ScriptType::P2Pk
        );
        assert_eq!(classify_script_pubkey(&[0x6a, 0x01, 0x00]), ScriptType::Unknown);
        assert_eq!(classify_script_pubkey(&[]), ScriptType::Unknown);
    }

    #[test]
    fn p2pk_and_p2pkh_share_a_destination() {
        let key = compressed_key();
        let key_id = hash160(&key);
        let from_p2pk = extract_destination(&p2pk_script(&key));
        let from_p2pkh = extract_destination(&p2pkh_script(&key_id));
        assert_eq!(from_p2pk, Some(Destination::KeyId(key_id)));
        assert_eq!(from_p2pk, from_p2pkh);
        assert_ne!(
            extract_destination(&p2sh_script(&key_id)),
            from_p2pkh,
            "script hash must not alias a key hash"
        );
    }

    #[test]
    fn p2pk_with_bad_header_has_no_destination() {
        let mut key = compressed_key();
        key[0] = 0x05;
        assert_eq!(extract_destination(&p2pk_script(&key)), None);
    }

    #[test]
    fn destination_script_roundtrip() {
        let dest = Destination::ScriptId([0x42; 20]);
        assert_eq!(extract_destination(&dest.script_pubkey()), Some(dest));
    }
}
