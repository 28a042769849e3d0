// Path: crates/client/src/lib.rs
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

//! # Propscope Client
//!
//! Reads governance data from a node over its ABCI query endpoint. The client
//! only moves bytes: it returns the raw, base64-decoded record and leaves all
//! interpretation to `propscope-types`.

/// The HTTP gateway and the `ChainQuery` seam it implements.
pub mod gateway;
/// Typed queries built on top of `ChainQuery`.
pub mod queries;

pub use gateway::{AbciGateway, ChainQuery};
pub use queries::{fetch_epoch, fetch_proposal_bytes, fetch_summary};
