// Path: crates/types/src/keys/mod.rs
//! Defines the well-known ABCI query paths used to read governance data.
//!
//! These constants provide a single source of truth for the storage paths
//! queried by the client, so the CLI and tests cannot drift apart.

/// The query path prefix for a stored proposal, followed by its decimal ID.
pub const GOVERNANCE_PROPOSAL_PATH_PREFIX: &str = "/vp/governance/proposal/";

/// The query path for the last committed epoch.
pub const EPOCH_PATH: &str = "/shell/epoch";

/// Builds the query path for the proposal with the given ID.
pub fn proposal_path(id: u64) -> String {
    format!("{}{}", GOVERNANCE_PROPOSAL_PATH_PREFIX, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposal_path() {
        assert_eq!(proposal_path(0), "/vp/governance/proposal/0");
        assert_eq!(proposal_path(117), "/vp/governance/proposal/117");
    }
}
