// Path: crates/types/src/app/governance.rs

//! Governance proposal records as stored on chain, and their derived status.

use crate::app::address::Address;
use crate::codec::{self, BinaryDecode, BinaryEncode, Reader, Writer};
use crate::error::{DecodeError, ProposalError};
use crate::prelude::OptionExt;
use crate::SHA_HASH_LEN;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A 32-byte SHA-256 hash.
pub type Hash32 = [u8; SHA_HASH_LEN];

/// The category of a governance proposal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum ProposalType {
    /// A signalling proposal with no on-chain execution.
    Default,
    /// A proposal that executes the wasm code identified by the given hash.
    DefaultWithWasm(Hash32),
    /// A public-goods-funding steward update.
    PGFSteward,
    /// A public-goods-funding payment.
    PGFPayment,
}

impl ProposalType {
    /// The number of declared variants.
    pub const VARIANT_COUNT: u8 = 4;

    /// The human-readable label shown for this type.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::DefaultWithWasm(_) => "Default with Wasm",
            Self::PGFSteward => "PGF Steward",
            Self::PGFPayment => "PGF Payment",
        }
    }

    /// The wasm code hash carried by `DefaultWithWasm`.
    pub fn data_hash(&self) -> Option<&Hash32> {
        match self {
            Self::DefaultWithWasm(hash) => Some(hash),
            _ => None,
        }
    }
}

impl fmt::Display for ProposalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl BinaryDecode for ProposalType {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        match reader.read_tag()? {
            (_, 0) => Ok(Self::Default),
            (_, 1) => Ok(Self::DefaultWithWasm(reader.read_array()?)),
            (_, 2) => Ok(Self::PGFSteward),
            (_, 3) => Ok(Self::PGFPayment),
            (offset, found) => Err(DecodeError::invalid_discriminant(
                "ProposalType",
                found,
                Self::VARIANT_COUNT,
                offset,
            )),
        }
    }
}

impl BinaryEncode for ProposalType {
    fn encode_to(&self, writer: &mut Writer) -> Result<(), String> {
        match self {
            Self::Default => writer.write_u8(0),
            Self::DefaultWithWasm(hash) => {
                writer.write_u8(1);
                writer.write_bytes(hash);
            }
            Self::PGFSteward => writer.write_u8(2),
            Self::PGFPayment => writer.write_u8(3),
        }
        Ok(())
    }
}

/// A governance proposal as persisted in chain storage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StorageProposal {
    /// The unique identifier for the proposal.
    pub id: u64,
    /// Free-form proposal metadata (title, authors, discussion link, ...).
    pub content: BTreeMap<String, String>,
    /// The account that submitted the proposal.
    pub author: Address,
    /// The type of the proposal.
    pub proposal_type: ProposalType,
    /// The first epoch in which votes are accepted.
    pub voting_start_epoch: u64,
    /// The epoch at which voting closes.
    pub voting_end_epoch: u64,
    /// The epoch at which an accepted proposal takes effect.
    pub activation_epoch: u64,
}

impl StorageProposal {
    /// The status of this proposal as seen from `current_epoch`.
    pub fn status_at(&self, current_epoch: u64) -> ProposalStatus {
        ProposalStatus::classify(
            self.voting_start_epoch,
            self.voting_end_epoch,
            current_epoch,
        )
    }
}

impl BinaryDecode for StorageProposal {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: reader.read_u64()?,
            content: BTreeMap::decode(reader)?,
            author: Address::decode(reader)?,
            proposal_type: ProposalType::decode(reader)?,
            voting_start_epoch: reader.read_u64()?,
            voting_end_epoch: reader.read_u64()?,
            activation_epoch: reader.read_u64()?,
        })
    }
}

impl BinaryEncode for StorageProposal {
    fn encode_to(&self, writer: &mut Writer) -> Result<(), String> {
        writer.write_u64(self.id);
        self.content.encode_to(writer)?;
        self.author.encode_to(writer)?;
        self.proposal_type.encode_to(writer)?;
        writer.write_u64(self.voting_start_epoch);
        writer.write_u64(self.voting_end_epoch);
        writer.write_u64(self.activation_epoch);
        Ok(())
    }
}

/// The voting phase of a proposal relative to a reference epoch.
///
/// Never stored; always recomputed from the proposal's voting window.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProposalStatus {
    /// Voting has not started yet.
    #[serde(rename = "pending")]
    Pending,
    /// Voting is open.
    #[serde(rename = "on-going")]
    Ongoing,
    /// Voting has closed.
    #[serde(rename = "ended")]
    Ended,
}

impl ProposalStatus {
    /// Classifies `current_epoch` against the half-open voting window `[voting_start, voting_end)`.
    ///
    /// An inverted window (`voting_start > voting_end`) is not rejected: epochs
    /// before `voting_start` are `Pending` and every other epoch is `Ended`.
    pub fn classify(voting_start: u64, voting_end: u64, current_epoch: u64) -> Self {
        if current_epoch < voting_start {
            Self::Pending
        } else if current_epoch < voting_end {
            Self::Ongoing
        } else {
            Self::Ended
        }
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Ongoing => write!(f, "on-going"),
            Self::Ended => write!(f, "ended"),
        }
    }
}

/// Decodes the `Option<StorageProposal>` record returned by the proposal query.
///
/// A record with the "none" tag is reported as [`ProposalError::RecordAbsent`].
pub fn decode_storage_proposal(bytes: &[u8]) -> Result<StorageProposal, ProposalError> {
    tracing::debug!(
        len = bytes.len(),
        raw = %hex::encode(bytes),
        "decoding proposal record"
    );
    codec::from_bytes::<Option<StorageProposal>>(bytes)?.required(ProposalError::RecordAbsent)
}

/// Decodes the 8-byte little-endian epoch returned by the epoch query.
pub fn decode_epoch(bytes: &[u8]) -> Result<u64, DecodeError> {
    codec::from_bytes::<u64>(bytes)
}
