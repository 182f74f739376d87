//! # Outbound Ports (Driven Ports)
//!
//! The ledger capability interface this layer requires the host to provide.
//!
//! Production embedders back this with the platform's ledger; tests use
//! [`InMemoryLedger`](crate::adapters::InMemoryLedger).

use crate::domain::errors::LedgerError;

/// One recorded version of a key, oldest first in a history iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Identifier of the transaction that committed this version.
    pub tx_id: String,
    /// The value as of this version; `None` is a tombstone: the key was
    /// deleted in this transaction.
    pub value: Option<Vec<u8>>,
}

/// Lazy cursor over `(key, value)` pairs in ascending key order.
///
/// A fresh cursor is produced per call; dropping it releases the
/// ledger-side resources on every exit path, including early error returns.
pub type ScanIter<'a> = Box<dyn Iterator<Item = Result<(String, Vec<u8>), LedgerError>> + Send + 'a>;

/// Lazy cursor over the recorded versions of one key, oldest to newest.
pub type HistoryIter<'a> = Box<dyn Iterator<Item = Result<HistoryEntry, LedgerError>> + Send + 'a>;

/// The versioned key-value ledger of record.
///
/// The ledger is the source of truth; this layer never caches reads between
/// operations. Reads within one operation are assumed at-least
/// snapshot-consistent; conflicting-write serialization and versioning are
/// entirely the ledger's concern.
pub trait Ledger: Send + Sync {
    /// Write a value under a key, creating a new recorded version.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), LedgerError>;

    /// Read the current value of a key. `Ok(None)` means the key is absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Remove the current entry for a key.
    ///
    /// Prior versions stay reconstructable through [`Ledger::history`]; the
    /// deletion itself is recorded as a tombstoned version.
    fn delete(&self, key: &str) -> Result<(), LedgerError>;

    /// Iterate keys in the lexicographic interval `[start_key, end_key]`.
    ///
    /// Both bounds are inclusive; an empty bound string means unbounded on
    /// that side, so `scan("", "")` covers the whole keyspace.
    fn scan(&self, start_key: &str, end_key: &str) -> Result<ScanIter<'_>, LedgerError>;

    /// Iterate the recorded versions of a key, oldest to newest.
    ///
    /// A key with no recorded versions yields an empty iteration.
    fn history(&self, key: &str) -> Result<HistoryIter<'_>, LedgerError>;
}
