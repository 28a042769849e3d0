// Path: crates/types/src/app/summary.rs

//! Assembles a decoded proposal into its display-ready form.

use crate::app::governance::{decode_storage_proposal, ProposalStatus, StorageProposal};
use crate::error::{EncodeError, ProposalError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A display-ready view of a governance proposal at a given epoch.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProposalSummary {
    /// The proposal identifier.
    pub id: u64,
    /// The proposal type label, e.g. `Default with Wasm`.
    pub proposal_type: String,
    /// The uppercase hex wasm code hash, present only for `Default with Wasm`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_hash: Option<String>,
    /// The author's address text.
    pub author: String,
    /// Proposal metadata.
    pub content: BTreeMap<String, String>,
    /// The first voting epoch.
    pub voting_start_epoch: u64,
    /// The epoch at which voting closes.
    pub voting_end_epoch: u64,
    /// The activation epoch.
    pub activation_epoch: u64,
    /// The status derived from the voting window and `current_epoch`.
    pub status: ProposalStatus,
    /// The reference epoch the status was computed against.
    pub current_epoch: u64,
}

impl ProposalSummary {
    /// Builds the summary, rendering the author address under `hrp`.
    pub fn assemble(
        proposal: &StorageProposal,
        current_epoch: u64,
        hrp: &str,
    ) -> Result<Self, EncodeError> {
        Ok(Self {
            id: proposal.id,
            proposal_type: proposal.proposal_type.label().to_string(),
            data_hash: proposal.proposal_type.data_hash().map(hex::encode_upper),
            author: proposal.author.to_text(hrp)?,
            content: proposal.content.clone(),
            voting_start_epoch: proposal.voting_start_epoch,
            voting_end_epoch: proposal.voting_end_epoch,
            activation_epoch: proposal.activation_epoch,
            status: proposal.status_at(current_epoch),
            current_epoch,
        })
    }
}

/// Decodes a raw proposal record and assembles it in one step.
pub fn summarize(
    raw: &[u8],
    current_epoch: u64,
    hrp: &str,
) -> Result<ProposalSummary, ProposalError> {
    let proposal = decode_storage_proposal(raw)?;
    Ok(ProposalSummary::assemble(&proposal, current_epoch, hrp)?)
}

/// Renders a content map on a single line as `{"k": "v", ...}`.
pub fn render_content(content: &BTreeMap<String, String>) -> String {
    let entries: Vec<String> = content
        .iter()
        .map(|(k, v)| format!("\"{}\": \"{}\"", k, v))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

impl fmt::Display for ProposalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Proposal Id: {}", self.id)?;
        writeln!(f, "Type: {}", self.proposal_type)?;
        if let Some(hash) = &self.data_hash {
            writeln!(f, "Data Hash: {}", hash)?;
        }
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Content: {}", render_content(&self.content))?;
        writeln!(f, "Start Epoch: {}", self.voting_start_epoch)?;
        writeln!(f, "End Epoch: {}", self.voting_end_epoch)?;
        writeln!(f, "Activation Epoch: {}", self.activation_epoch)?;
        writeln!(f, "Status: {}", self.status)?;
        write!(f, "Last committed epoch: {}", self.current_epoch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::address::{Address, InternalAddress};
    use crate::app::governance::ProposalType;
    use crate::string_encoding::ADDRESS_HRP;

    fn proposal(proposal_type: ProposalType, author: Address) -> StorageProposal {
        StorageProposal {
            id: 3,
            content: BTreeMap::from([
                ("title".to_string(), "Fund things".to_string()),
                ("authors".to_string(), "alice".to_string()),
            ]),
            author,
            proposal_type,
            voting_start_epoch: 100,
            voting_end_epoch: 200,
            activation_epoch: 210,
        }
    }

    #[test]
    fn test_render_content() {
        assert_eq!(render_content(&BTreeMap::new()), "{}");
        let content = BTreeMap::from([
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ]);
        assert_eq!(render_content(&content), r#"{"a": "1", "b": "2"}"#);
    }

    #[test]
    fn test_display_layout() {
        let p = proposal(
            ProposalType::DefaultWithWasm([0xab; 32]),
            Address::Established([0x11; 20]),
        );
        let summary = ProposalSummary::assemble(&p, 150, ADDRESS_HRP).unwrap();
        let expected = format!(
            "Proposal Id: 3\n\
             Type: Default with Wasm\n\
             Data Hash: {}\n\
             Author: tnam1qqg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyznre5j\n\
             Content: {{\"authors\": \"alice\", \"title\": \"Fund things\"}}\n\
             Start Epoch: 100\n\
             End Epoch: 200\n\
             Activation Epoch: 210\n\
             Status: on-going\n\
             Last committed epoch: 150",
            "AB".repeat(32)
        );
        assert_eq!(summary.to_string(), expected);
    }

    #[test]
    fn test_data_hash_only_for_wasm_proposals() {
        let p = proposal(
            ProposalType::PGFSteward,
            Address::Internal(InternalAddress::Pgf),
        );
        let summary = ProposalSummary::assemble(&p, 250, ADDRESS_HRP).unwrap();
        assert_eq!(summary.data_hash, None);
        assert_eq!(summary.author, "Internal(Pgf)");
        assert_eq!(summary.status, ProposalStatus::Ended);
        assert!(!summary.to_string().contains("Data Hash"));

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("data_hash").is_none());
        assert_eq!(json["status"], "ended");
        assert_eq!(json["proposal_type"], "PGF Steward");
    }

    #[test]
    fn test_summarize_reports_absent_record() {
        assert_eq!(
            summarize(&[0x00], 1, ADDRESS_HRP),
            Err(ProposalError::RecordAbsent)
        );
    }
}
