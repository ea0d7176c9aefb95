//! Unified SDK error types.
//!
//! The "No data" sentinel body is deliberately *not* an error — it surfaces as
//! [`crate::http::FetchOutcome::NoData`] and callers map it to `None` or an
//! empty list.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Transport-layer errors. Never retried internally.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Connection-level failure (DNS, TLS, timeout, ...).
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Non-2xx status from the upstream API.
    #[error("GET {url} returned status {status}")]
    Status { status: u16, url: String },
}

impl HttpError {
    /// The HTTP status code, when the upstream produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            HttpError::Reqwest(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

/// Decoder-layer errors: the body was present but did not match the expected
/// shape once the no-data sentinel had been excluded.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The body was not valid JSON at all.
    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON was valid but a field failed to normalize. `path` names the
    /// offending field (e.g. `[1].highdiscountrate`).
    #[error("unexpected response shape at `{path}`: {source}")]
    Shape {
        path: String,
        source: serde_json::Error,
    },
}
