//! # Adapters
//!
//! - `memory_ledger`: in-memory `Ledger` implementation with per-key version
//!   history, for tests and lightweight embedders
//! - `api_handler`: the flat string-argument invocation surface, dispatching
//!   by function name and rendering JSON envelopes

pub mod api_handler;
pub mod memory_ledger;

pub use api_handler::ApiHandler;
pub use memory_ledger::InMemoryLedger;
