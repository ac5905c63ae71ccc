//! Active chain view shared between validation and block construction.

use std::ops::{Deref, DerefMut};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use lokald_consensus::Hash256;

use crate::error::PaymentsError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BlockIndexEntry {
    pub height: i32,
    pub hash: Hash256,
}

/// Block index entries of the best chain, indexed by height.
#[derive(Clone, Debug, Default)]
pub struct ActiveChain {
    entries: Vec<BlockIndexEntry>,
}

impl ActiveChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Height of the tip, `-1` for an empty chain.
    pub fn height(&self) -> i32 {
        self.entries.len() as i32 - 1
    }

    pub fn tip(&self) -> Option<BlockIndexEntry> {
        self.entries.last().copied()
    }

    pub fn get(&self, height: i32) -> Option<BlockIndexEntry> {
        usize::try_from(height)
            .ok()
            .and_then(|index| self.entries.get(index))
            .copied()
    }

    pub fn push(&mut self, hash: Hash256) -> BlockIndexEntry {
        let entry = BlockIndexEntry {
            height: self.entries.len() as i32,
            hash,
        };
        self.entries.push(entry);
        entry
    }

    /// Drops every entry above `height`.
    pub fn truncate(&mut self, height: i32) {
        let keep = usize::try_from(height.saturating_add(1)).unwrap_or(0);
        self.entries.truncate(keep);
    }
}

#[derive(Debug, Default)]
pub struct ChainLock {
    inner: RwLock<ActiveChain>,
}

impl ChainLock {
    pub fn new(chain: ActiveChain) -> Self {
        Self {
            inner: RwLock::new(chain),
        }
    }

    pub fn read(&self) -> Result<ChainReadGuard<'_>, PaymentsError> {
        self.inner
            .read()
            .map(ChainReadGuard)
            .map_err(|_| PaymentsError::ChainLockPoisoned)
    }

    pub fn write(&self) -> Result<ChainWriteGuard<'_>, PaymentsError> {
        self.inner
            .write()
            .map(ChainWriteGuard)
            .map_err(|_| PaymentsError::ChainLockPoisoned)
    }
}

pub struct ChainReadGuard<'a>(RwLockReadGuard<'a, ActiveChain>);

impl Deref for ChainReadGuard<'_> {
    type Target = ActiveChain;

    fn deref(&self) -> &ActiveChain {
        &self.0
    }
}

pub struct ChainWriteGuard<'a>(RwLockWriteGuard<'a, ActiveChain>);

impl Deref for ChainWriteGuard<'_> {
    type Target = ActiveChain;

    fn deref(&self) -> &ActiveChain {
        &self.0
    }
}

impl DerefMut for ChainWriteGuard<'_> {
    fn deref_mut(&mut self) -> &mut ActiveChain {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heights_follow_insertion_order() {
        let mut chain = ActiveChain::new();
        assert_eq!(chain.height(), -1);
        assert_eq!(chain.tip(), None);
        for byte in 0..5u8 {
            chain.push([byte; 32]);
        }
        assert_eq!(chain.height(), 4);
        assert_eq!(chain.get(2).map(|entry| entry.hash), Some([2u8; 32]));
        assert_eq!(chain.get(-1), None);
        assert_eq!(chain.get(5), None);

        chain.truncate(1);
        assert_eq!(chain.height(), 1);
        chain.truncate(-1);
        assert_eq!(chain.height(), -1);
    }

    #[test]
    fn guards_share_one_chain() {
        let lock = ChainLock::default();
        lock.write().expect("write").push([9u8; 32]);
        let chain = lock.read().expect("read");
        assert_eq!(chain.height(), 0);
        assert_eq!(chain.tip().map(|entry| entry.height), Some(0));
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let lock = std::sync::Arc::new(ChainLock::default());
        let writer = std::sync::Arc::clone(&lock);
        let _ = std::thread::spawn(move || {
            let _guard = writer.write().expect("write");
            panic!("poison the chain lock");
        })
        .join();
        assert!(matches!(lock.read(), Err(PaymentsError::ChainLockPoisoned)));
    }
}
