// Path: crates/client/src/queries.rs
use crate::gateway::ChainQuery;
use anyhow::{Context, Result};
use propscope_types::app::{decode_epoch, summarize, ProposalSummary};
use propscope_types::keys::{proposal_path, EPOCH_PATH};

/// Fetches the raw `Option<StorageProposal>` record for proposal `id`.
pub async fn fetch_proposal_bytes<Q: ChainQuery + ?Sized>(q: &Q, id: u64) -> Result<Vec<u8>> {
    q.abci_query(&proposal_path(id)).await
}

/// Fetches and decodes the last committed epoch.
pub async fn fetch_epoch<Q: ChainQuery + ?Sized>(q: &Q) -> Result<u64> {
    let raw = q.abci_query(EPOCH_PATH).await?;
    decode_epoch(&raw).context("failed to decode epoch")
}

/// Fetches proposal `id` and the current epoch, then assembles the summary.
///
/// A missing proposal surfaces as a `ProposalError::RecordAbsent` that callers
/// can recover with `downcast_ref`.
pub async fn fetch_summary<Q: ChainQuery + ?Sized>(
    q: &Q,
    id: u64,
    hrp: &str,
) -> Result<ProposalSummary> {
    let raw = fetch_proposal_bytes(q, id).await?;
    let epoch = fetch_epoch(q).await?;
    tracing::debug!(target: "client", id, epoch, "fetched proposal record");
    Ok(summarize(&raw, epoch, hrp)?)
}
