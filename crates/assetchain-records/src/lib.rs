//! # AssetChain Records
//!
//! Record management and query layer for three related record types kept in
//! an external append-only, versioned key-value ledger: service tickets,
//! employees, and tracked hardware assets.
//!
//! The ledger itself (ordering, commitment, consensus, replication) is an
//! external collaborator reached through the [`Ledger`](ports::Ledger)
//! capability port. This crate owns the shape and validation rules of the
//! values written under the keys it controls, and nothing else: every
//! operation is a stateless transformation of ledger reads into ledger writes
//! or response payloads.
//!
//! ## Architecture
//!
//! Hexagonal, with the ledger injected as a driven port:
//!
//! ```text
//! [host dispatcher] ──(function name + string args)──→ ApiHandler
//!                                                          │
//!                                                          ↓
//!                                        RecordService (RecordApi)
//!                                        sanitize → resolve → codec
//!                                                          │
//!                                                          ↓
//!                                        Ledger port (put/get/delete/scan/history)
//! ```
//!
//! - `domain`: entities, errors, argument sanitation, the tagged record codec
//! - `ports`: `RecordApi` (driving) and `Ledger` (driven) traits
//! - `service`: `RecordService`, the single implementation of `RecordApi`
//! - `adapters`: in-memory ledger for tests/embedders, flat-args API handler
//!
//! ## Stored representation
//!
//! Every record is one JSON value under its unique business id, tagged with a
//! `docType` discriminator (`"ticket"`, `"employee"`, `"ibm_asset"`) so an
//! undifferentiated range scan can classify values client-side.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{ApiHandler, InMemoryLedger};
pub use domain::{
    AuditEntry, Employee, Everything, IbmAsset, LedgerError, RangeEntry, RecordError, Ticket,
};
pub use ports::{HistoryEntry, Ledger, RecordApi};
pub use service::RecordService;
