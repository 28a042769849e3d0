// Path: crates/types/src/error/mod.rs
//! Core error types for proposal decoding and address encoding.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// The specific reason a binary decode failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The buffer ended before a required field was fully read. A length prefix
    /// pointing past the end of the buffer is reported the same way.
    #[error("Truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        /// The number of bytes the current field requires.
        needed: usize,
        /// The number of bytes left in the buffer.
        remaining: usize,
    },
    /// A tagged-union discriminant byte was outside the declared variant range.
    #[error("Invalid discriminant {found} for {type_name} (expected 0..{variant_count})")]
    InvalidDiscriminant {
        /// The name of the union being decoded.
        type_name: &'static str,
        /// The discriminant byte that was read.
        found: u8,
        /// The number of declared variants.
        variant_count: u8,
    },
    /// The bytes of a string field were not valid UTF-8.
    #[error("Invalid UTF-8 in string field")]
    InvalidUtf8,
    /// A mapping contained the same key twice.
    #[error("Duplicate mapping key {key:?}")]
    DuplicateMapKey {
        /// The repeated key.
        key: String,
    },
}

/// A binary decode failure, anchored at the cursor offset where it occurred.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Decode error at offset {offset}: {kind}")]
pub struct DecodeError {
    /// What went wrong.
    pub kind: DecodeErrorKind,
    /// The byte offset of the field that failed to decode.
    pub offset: usize,
}

impl DecodeError {
    /// Creates a new error of the given kind at `offset`.
    pub fn new(kind: DecodeErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Creates an [`DecodeErrorKind::InvalidDiscriminant`] error.
    pub fn invalid_discriminant(
        type_name: &'static str,
        found: u8,
        variant_count: u8,
        offset: usize,
    ) -> Self {
        Self::new(
            DecodeErrorKind::InvalidDiscriminant {
                type_name,
                found,
                variant_count,
            },
            offset,
        )
    }
}

impl ErrorCode for DecodeError {
    fn code(&self) -> &'static str {
        match self.kind {
            DecodeErrorKind::TruncatedInput { .. } => "DECODE_TRUNCATED_INPUT",
            DecodeErrorKind::InvalidDiscriminant { .. } => "DECODE_INVALID_DISCRIMINANT",
            DecodeErrorKind::InvalidUtf8 => "DECODE_INVALID_UTF8",
            DecodeErrorKind::DuplicateMapKey { .. } => "DECODE_DUPLICATE_MAP_KEY",
        }
    }
}

/// Errors related to the checksummed base-32 text encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The prefix/payload combination cannot be represented.
    #[error("Checksum input invalid: {reason}")]
    ChecksumInputInvalid {
        /// A description of the offending input.
        reason: String,
    },
    /// The text has no `1` separating the prefix from the data part.
    #[error("Missing separator '1' in encoded string")]
    MissingSeparator,
    /// A data character is not part of the 32-symbol alphabet.
    #[error("Invalid character {0:?} in data part")]
    InvalidCharacter(char),
    /// The text mixes upper and lower case characters.
    #[error("Mixed-case encoded string")]
    MixedCase,
    /// The checksum does not verify.
    #[error("Invalid checksum")]
    InvalidChecksum,
    /// The trailing padding bits of the data part are not valid.
    #[error("Invalid padding in data part")]
    InvalidPadding,
    /// The decoded payload does not describe a known address layout.
    #[error("Invalid address payload: {0}")]
    InvalidAddress(String),
}

impl ErrorCode for EncodeError {
    fn code(&self) -> &'static str {
        match self {
            Self::ChecksumInputInvalid { .. } => "ENCODE_CHECKSUM_INPUT_INVALID",
            Self::MissingSeparator => "ENCODE_MISSING_SEPARATOR",
            Self::InvalidCharacter(_) => "ENCODE_INVALID_CHARACTER",
            Self::MixedCase => "ENCODE_MIXED_CASE",
            Self::InvalidChecksum => "ENCODE_INVALID_CHECKSUM",
            Self::InvalidPadding => "ENCODE_INVALID_PADDING",
            Self::InvalidAddress(_) => "ENCODE_INVALID_ADDRESS",
        }
    }
}

/// Errors surfaced while turning a raw proposal record into its display form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProposalError {
    /// The record decoded to "no value": the proposal does not exist.
    #[error("Proposal not found")]
    RecordAbsent,
    /// The raw record could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
    /// The author address could not be rendered.
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),
}

impl ErrorCode for ProposalError {
    fn code(&self) -> &'static str {
        match self {
            Self::RecordAbsent => "PROPOSAL_RECORD_ABSENT",
            Self::Decode(e) => e.code(),
            Self::Encode(e) => e.code(),
        }
    }
}
