//! Low-level HTTP client — `TreasuryDirectHttp`.
//!
//! One method per API endpoint, one idempotent GET per call, no retries.
//! Returns the raw body text; decoding into wire types happens at the domain
//! boundary. The one thing this layer does interpret is TreasuryDirect's
//! no-data convention: a 200 response whose body is the literal text
//! `No data` means "request succeeded, nothing matched".

use crate::error::HttpError;
use crate::shared::Cusip;

use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;

/// Body TreasuryDirect returns (with status 200) when no security matches.
pub const NO_DATA_SENTINEL: &str = "No data";

/// Default request timeout. The upstream is a third-party service; an
/// unbounded wait is never appropriate.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of a successful (2xx) fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Response body, verbatim and unparsed.
    Body(String),
    /// The upstream's `"No data"` sentinel. Not an error.
    NoData,
}

/// Low-level HTTP client for the TreasuryDirect securities API.
///
/// Holds only immutable configuration plus reqwest's internally-pooled
/// client, so it is cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct TreasuryDirectHttp {
    base_url: String,
    client: Client,
}

impl TreasuryDirectHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Endpoints ────────────────────────────────────────────────────────

    /// `GET /securities/{cusip}/{MM/DD/YYYY}?format=json`
    pub async fn get_security(
        &self,
        cusip: &Cusip,
        issue_date: NaiveDate,
    ) -> Result<FetchOutcome, HttpError> {
        self.fetch(&security_details_url(&self.base_url, cusip, issue_date))
            .await
    }

    /// `GET /securities/auctioned?days={N}&format=json`
    pub async fn get_auctioned(&self, days: u32) -> Result<FetchOutcome, HttpError> {
        self.fetch(&auctioned_url(&self.base_url, days)).await
    }

    /// `GET /securities/announced?days={N}&format=json`
    pub async fn get_announced(&self, days: u32) -> Result<FetchOutcome, HttpError> {
        self.fetch(&announced_url(&self.base_url, days)).await
    }

    // ── Internal ─────────────────────────────────────────────────────────

    /// Single GET with three-way classification: success body, no-data
    /// sentinel, or transport error. Every endpoint goes through here, so the
    /// sentinel check is applied uniformly.
    async fn fetch(&self, url: &str) -> Result<FetchOutcome, HttpError> {
        tracing::debug!(%url, "GET");

        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        let outcome = classify(status, url, body)?;
        if outcome == FetchOutcome::NoData {
            tracing::debug!(%url, "upstream returned the no-data sentinel");
        }
        Ok(outcome)
    }
}

/// Classify a raw response. Pure so the branch table is testable without a
/// socket.
pub(crate) fn classify(
    status: u16,
    url: &str,
    body: String,
) -> Result<FetchOutcome, HttpError> {
    if !(200..300).contains(&status) {
        return Err(HttpError::Status {
            status,
            url: url.to_string(),
        });
    }
    if body == NO_DATA_SENTINEL {
        return Ok(FetchOutcome::NoData);
    }
    Ok(FetchOutcome::Body(body))
}

// ─── URL builders ────────────────────────────────────────────────────────────
//
// Pure functions: request intent in, absolute URL out. The `days` lookback is
// the already-computed day count; subtracting "today" from a reference date is
// the caller's concern.

pub(crate) fn security_details_url(base: &str, cusip: &Cusip, issue_date: NaiveDate) -> String {
    // The MM/DD/YYYY date is three literal path segments, not an encoded one.
    format!(
        "{}/securities/{}/{}?format=json",
        base,
        urlencoding::encode(cusip.as_str()),
        issue_date.format("%m/%d/%Y"),
    )
}

pub(crate) fn auctioned_url(base: &str, days: u32) -> String {
    format!("{base}/securities/auctioned?days={days}&format=json")
}

pub(crate) fn announced_url(base: &str, days: u32) -> String {
    format!("{base}/securities/announced?days={days}&format=json")
}
