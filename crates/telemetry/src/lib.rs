// Path: crates/telemetry/src/lib.rs
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

//! # Propscope Telemetry
//!
//! This crate provides the logging infrastructure for the proposal decoder:
//! a single initialisation routine that installs the global `tracing`
//! subscriber and bridges `log` records into it.

/// The initialization routine for global structured logging.
pub mod init;

pub use init::{init_tracing, DEFAULT_DIRECTIVE};
