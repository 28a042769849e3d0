// Path: crates/types/src/prelude.rs

//! A curated set of commonly used traits.

pub use crate::codec::{BinaryDecode, BinaryEncode};
pub use crate::error::ErrorCode;

/// An extension trait for `Option` that converts an expected-but-missing value
/// into a named error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, E>`, returning the provided
    /// error if the option is `None`.
    fn required<E>(self, err: E) -> Result<T, E>;
}

impl<T> OptionExt<T> for Option<T> {
    fn required<E>(self, err: E) -> Result<T, E> {
        self.ok_or(err)
    }
}
