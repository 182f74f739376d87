//! # In-Memory Ledger
//!
//! In-memory implementation of the [`Ledger`] port for testing and
//! lightweight embedding.
//!
//! Keeps the current state in a `BTreeMap` (native lexicographic key order
//! for range scans) and a full version log per key, including tombstones, so
//! history queries behave like the real ledger's.

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::RwLock;

use crate::domain::errors::LedgerError;
use crate::ports::outbound::{HistoryEntry, HistoryIter, Ledger, ScanIter};

#[derive(Default)]
struct Inner {
    current: BTreeMap<String, Vec<u8>>,
    versions: HashMap<String, Vec<HistoryEntry>>,
    tx_counter: u64,
}

impl Inner {
    fn next_tx_id(&mut self) -> String {
        self.tx_counter += 1;
        format!("tx{:06}", self.tx_counter)
    }
}

/// In-memory versioned key-value ledger.
pub struct InMemoryLedger {
    inner: RwLock<Inner>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

fn scan_bound(key: &str) -> Bound<&str> {
    if key.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Included(key)
    }
}

impl Ledger for InMemoryLedger {
    fn put(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        let mut inner = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        let tx_id = inner.next_tx_id();
        inner.current.insert(key.to_string(), value.to_vec());
        inner
            .versions
            .entry(key.to_string())
            .or_default()
            .push(HistoryEntry {
                tx_id,
                value: Some(value.to_vec()),
            });
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        let inner = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(inner.current.get(key).cloned())
    }

    fn delete(&self, key: &str) -> Result<(), LedgerError> {
        let mut inner = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        if inner.current.remove(key).is_some() {
            let tx_id = inner.next_tx_id();
            inner
                .versions
                .entry(key.to_string())
                .or_default()
                .push(HistoryEntry { tx_id, value: None });
        }
        Ok(())
    }

    fn scan(&self, start_key: &str, end_key: &str) -> Result<ScanIter<'_>, LedgerError> {
        let inner = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        // An inverted interval is empty, never a panic.
        if !start_key.is_empty() && !end_key.is_empty() && start_key > end_key {
            return Ok(Box::new(std::iter::empty()));
        }
        // Snapshot the matching range so the cursor stays valid without
        // holding the lock across the caller's iteration.
        let pairs: Vec<(String, Vec<u8>)> = inner
            .current
            .range::<str, _>((scan_bound(start_key), scan_bound(end_key)))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(Box::new(pairs.into_iter().map(Ok)))
    }

    fn history(&self, key: &str) -> Result<HistoryIter<'_>, LedgerError> {
        let inner = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        let versions = inner.versions.get(key).cloned().unwrap_or_default();
        Ok(Box::new(versions.into_iter().map(Ok)))
    }
}
