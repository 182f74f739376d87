//! # Ports
//!
//! The seams of the record layer: the driving port other components call
//! (`RecordApi`) and the driven port the host must provide (`Ledger`).

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
