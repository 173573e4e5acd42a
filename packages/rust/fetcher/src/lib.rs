//! One-shot fetch of the source document.
//!
//! The whole run consumes exactly one page, pinned to a specific
//! documentation revision. There is no retry, timeout tuning, or
//! cancellation: a transport failure or non-success status aborts the run.
//! The body's content hash is recorded so runs against identical input are
//! observably identical.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use sha2::{Digest, Sha256};
use tracing::{info, instrument};
use url::Url;

use fixgen_shared::{FixgenError, Result};

/// User-Agent string for fetch requests.
const USER_AGENT: &str = concat!("fixgen/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects to follow.
const MAX_REDIRECTS: usize = 5;

/// Request timeout in seconds.
const TIMEOUT_SECS: u64 = 30;

// ---------------------------------------------------------------------------
// FetchedDocument
// ---------------------------------------------------------------------------

/// The fetched source document plus transport metadata.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// The URL that was fetched.
    pub url: String,
    /// Raw response body (HTML markup).
    pub body: String,
    /// SHA-256 hash of the body.
    pub content_hash: String,
    /// HTTP status code.
    pub status_code: u16,
    /// Body length in bytes.
    pub content_len: usize,
    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

/// Fetch the source document from `url`.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch_document(url: &Url) -> Result<FetchedDocument> {
    let client = build_client()?;

    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| FixgenError::Network(format!("{url}: {e}")))?;

    let status = response.status();
    let status_code = status.as_u16();

    if !status.is_success() {
        return Err(FixgenError::Network(format!("{url}: HTTP {status}")));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FixgenError::Network(format!("{url}: body read failed: {e}")))?;

    let content_hash = compute_hash(&body);

    info!(
        status_code,
        content_len = body.len(),
        %content_hash,
        "fetched source document"
    );

    Ok(FetchedDocument {
        url: url.to_string(),
        content_len: body.len(),
        content_hash,
        status_code,
        body,
        fetched_at: Utc::now(),
    })
}

/// Build a reqwest client with appropriate settings.
fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()
        .map_err(|e| FixgenError::Network(format!("failed to build HTTP client: {e}")))
}

/// Compute SHA-256 hash of content.
fn compute_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
