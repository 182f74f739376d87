//! # Domain Errors
//!
//! Error types for the record layer.
//!
//! Every failure is surfaced to the caller immediately as a structured error;
//! the layer performs no local recovery or retry. The host dispatcher decides
//! whether a failed request is retried as a whole.

use thiserror::Error;

/// Failure of one of the ledger capability primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The underlying put/get/delete/scan/history call failed.
    #[error("ledger backend failure: {message}")]
    Backend { message: String },

    /// A lock guarding ledger state was poisoned by a panicking writer.
    #[error("ledger lock poisoned")]
    LockPoisoned,
}

/// Errors that can occur during record operations.
///
/// Each variant corresponds to a specific validation or ledger failure mode.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The operation received the wrong number of arguments.
    #[error("incorrect number of arguments: expecting {expected}, got {actual}")]
    WrongArgumentCount { expected: usize, actual: usize },

    /// An argument contains a character from the disallowed set.
    #[error("argument {index} contains forbidden character {found:?}")]
    ForbiddenCharacter { index: usize, found: char },

    /// No record exists under this key.
    #[error("record not found: {key}")]
    NotFound { key: String },

    /// A record already exists under this key; creation is first-write-wins.
    #[error("record already exists: {key}")]
    AlreadyExists { key: String },

    /// A referenced employee does not exist.
    #[error("dependency not found: employee {employee_sn} does not exist")]
    DependencyNotFound { employee_sn: String },

    /// The stored bytes do not parse as the expected entity shape.
    #[error("stored value under {key} does not decode as {expected}: {message}")]
    Decode {
        key: String,
        expected: &'static str,
        message: String,
    },

    /// A record could not be serialized for storage or response.
    #[error("serialization failure: {message}")]
    Encode { message: String },

    /// The dispatcher named an operation this layer does not expose.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// A ledger primitive failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl RecordError {
    /// Whether this error reports an absent record (for read, update, delete,
    /// or dependency resolution).
    pub fn is_not_found(&self) -> bool {
        matches!(self, RecordError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_key() {
        let err = RecordError::NotFound { key: "t1".to_string() };
        assert_eq!(err.to_string(), "record not found: t1");
        assert!(err.is_not_found());

        let err = RecordError::AlreadyExists { key: "e1".to_string() };
        assert_eq!(err.to_string(), "record already exists: e1");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_ledger_error_converts_transparently() {
        let err: RecordError = LedgerError::Backend { message: "io".to_string() }.into();
        assert_eq!(err.to_string(), "ledger backend failure: io");
    }
}
