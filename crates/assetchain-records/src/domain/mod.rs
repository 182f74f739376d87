//! # Domain Layer
//!
//! Pure record-layer logic with no I/O: entity shapes, error types, argument
//! sanitation, and the tagged JSON codec. All ledger interaction is abstracted
//! through the `ports` module.

pub mod codec;
pub mod entities;
pub mod errors;
pub mod sanitize;

pub use codec::*;
pub use entities::*;
pub use errors::*;
pub use sanitize::*;
