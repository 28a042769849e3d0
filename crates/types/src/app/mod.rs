// Path: crates/types/src/app/mod.rs
//! Core application-level data structures: addresses and governance proposals.

/// The `Address` union and its bech32m text form.
pub mod address;
/// Stored governance proposals and their derived status.
pub mod governance;
/// The display-ready proposal view.
pub mod summary;

pub use address::*;
pub use governance::*;
pub use summary::*;
