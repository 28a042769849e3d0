// Path: crates/client/src/gateway.rs
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as B64, Engine as _};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// A source of raw ABCI query results.
#[async_trait]
pub trait ChainQuery: Send + Sync {
    /// Runs the query at `path` and returns the decoded `value` bytes.
    ///
    /// A missing value is returned as an empty buffer.
    async fn abci_query(&self, path: &str) -> Result<Vec<u8>>;
}

/// Queries a node's `/abci_query` HTTP endpoint.
#[derive(Clone)]
pub struct AbciGateway {
    pub base: String,
    client: Client,
}

impl AbciGateway {
    pub fn new(base: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[derive(Deserialize)]
struct RpcEnvelope {
    #[serde(default)]
    result: Option<AbciResult>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct AbciResult {
    response: AbciResponse,
}

#[derive(Deserialize)]
struct AbciResponse {
    #[serde(default)]
    code: u32,
    #[serde(default)]
    log: String,
    #[serde(default)]
    value: Option<String>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<String>,
}

fn ascii_snippet(bytes: &[u8]) -> String {
    let s = String::from_utf8_lossy(bytes);
    let s: String = s.trim().chars().take(160).collect();
    s.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Extracts the base64 `result.response.value` from a JSON-RPC response body.
pub fn parse_abci_response(body: &[u8], path: &str) -> Result<Vec<u8>> {
    let envelope: RpcEnvelope = serde_json::from_slice(body).with_context(|| {
        format!(
            "invalid JSON-RPC response for '{}': {}",
            path,
            ascii_snippet(body)
        )
    })?;
    if let Some(err) = envelope.error {
        return Err(anyhow!(
            "RPC error {} for '{}': {}{}",
            err.code,
            path,
            err.message,
            err.data.map(|d| format!(" ({})", d)).unwrap_or_default()
        ));
    }
    let response = envelope
        .result
        .ok_or_else(|| anyhow!("JSON-RPC response for '{}' has no result", path))?
        .response;
    if response.code != 0 {
        return Err(anyhow!(
            "ABCI query '{}' failed with code {}: {}",
            path,
            response.code,
            response.log
        ));
    }
    match response.value {
        Some(v) if !v.is_empty() => B64
            .decode(v.as_bytes())
            .with_context(|| format!("invalid base64 value for '{}'", path)),
        _ => Ok(Vec::new()),
    }
}

#[async_trait]
impl ChainQuery for AbciGateway {
    async fn abci_query(&self, path: &str) -> Result<Vec<u8>> {
        let url = format!("{}/abci_query", self.base);
        tracing::debug!(target: "client", %url, path, "sending ABCI query");
        let quoted_path = format!("\"{}\"", path);
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("path", quoted_path.as_str()),
                ("data", ""),
                ("prove", "false"),
            ])
            .send()
            .await
            .with_context(|| format!("could not connect to {}", self.base))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .with_context(|| format!("failed to read response body for '{}'", path))?;
        if !status.is_success() {
            tracing::warn!(target: "client", path, status = status.as_u16(), "ABCI query rejected");
            return Err(anyhow!(
                "HTTP {} from /abci_query ({}): {}",
                status.as_u16(),
                path,
                ascii_snippet(&body)
            ));
        }
        let value = parse_abci_response(&body, path)?;
        tracing::debug!(target: "client", path, len = value.len(), "ABCI query returned");
        Ok(value)
    }
}
