// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Propscope Types
//!
//! This crate is the foundational library for the proposal decoder, containing the
//! governance data model, the binary record codec, the bech32m address encoding
//! and the error types shared by every other crate in the workspace.
//!
//! ## Architectural Role
//!
//! Everything here is synchronous and free of I/O: bytes go in, typed records or
//! display strings come out. Network retrieval lives in `propscope-client` and
//! argument handling in `propscope-cli`.

/// The length in bytes of an address hash.
pub const HASH_LEN: usize = 20;
/// The length in bytes of a SHA-256 hash.
pub const SHA_HASH_LEN: usize = 32;
/// The length in bytes of an address payload fed to the text encoder.
pub const ADDR_ENCODING_LEN: usize = 1 + HASH_LEN;

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::ProposalError> = std::result::Result<T, E>;

/// Addresses, governance proposals and the assembled proposal summary.
pub mod app;
/// The length-prefixed binary codec for governance storage records.
pub mod codec;
/// Configuration structures for the decoder CLI.
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
/// Well-known query paths for governance data.
pub mod keys;
/// A prelude containing useful extension traits like `OptionExt`.
pub mod prelude;
/// The bech32m checksummed text encoding.
pub mod string_encoding;
