//! High-level client — `TreasuryDirectClient` with nested sub-client
//! accessors.
//!
//! The client is a stateless value: immutable configuration plus a pooled
//! HTTP client. Build it once and pass it (or clones) to whoever needs it —
//! it is safe to share across tasks with no locking.

use crate::domain::security::client::Securities;
use crate::error::SdkError;
use crate::http::{TreasuryDirectHttp, DEFAULT_TIMEOUT};
use crate::network::DEFAULT_API_URL;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::security::client::Securities as SecuritiesClient;

/// The primary entry point for the TreasuryDirect SDK.
#[derive(Debug, Clone)]
pub struct TreasuryDirectClient {
    pub(crate) http: TreasuryDirectHttp,
}

impl TreasuryDirectClient {
    pub fn builder() -> TreasuryDirectClientBuilder {
        TreasuryDirectClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn securities(&self) -> Securities<'_> {
        Securities { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TreasuryDirectClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for TreasuryDirectClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TreasuryDirectClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<TreasuryDirectClient, SdkError> {
        Ok(TreasuryDirectClient {
            http: TreasuryDirectHttp::new(&self.base_url, self.timeout)?,
        })
    }
}
