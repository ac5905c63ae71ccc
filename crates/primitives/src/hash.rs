use lokald_consensus::Hash256;
use ripemd::{Digest as RipemdDigest, Ripemd160};
use sha2::Sha256;

/// Double SHA-256, as used for base58 checksums.
pub fn sha256d(data: &[u8]) -> Hash256 {
    let second = Sha256::digest(Sha256::digest(data));
    second.into()
}

/// RIPEMD-160 of SHA-256; the key id behind pay-to-pubkey-hash scripts.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}
