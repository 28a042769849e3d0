// Path: crates/cli/src/lib.rs
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

//! # Propscope CLI Library
//!
//! Argument-level helpers shared by the `propscope` binary and its tests:
//! resolving the effective [`DecoderConfig`](propscope_types::config::DecoderConfig)
//! from flags, environment and file, and turning user-supplied hex or base64
//! text into raw record bytes.

pub mod input;
pub mod settings;
